use crate::models::quizzes::entities::QuizDifficulty;
use serde::Deserialize;

// 测验生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub topic: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: QuizDifficulty,
    #[serde(default = "default_question_count")]
    pub question_count: u32,
    /// 可选：挂接到某门课程
    pub course_id: Option<i64>,
}

fn default_difficulty() -> QuizDifficulty {
    QuizDifficulty::Medium
}

fn default_question_count() -> u32 {
    5
}

// 答疑请求
#[derive(Debug, Deserialize)]
pub struct DoubtRequest {
    pub question: String,
    /// 可选的上下文，如课程章节内容片段
    pub context: Option<String>,
}
