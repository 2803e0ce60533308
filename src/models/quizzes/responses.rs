use serde::Serialize;

use super::entities::{Quiz, QuizDifficulty, QuizQuestionPublic};
use crate::models::badges::entities::Badge;
use crate::models::common::pagination::PaginationInfo;

/// 列表项：不展开题目内容
#[derive(Debug, Serialize)]
pub struct QuizSummary {
    pub id: i64,
    pub creator_id: i64,
    pub course_id: Option<i64>,
    pub topic: String,
    pub difficulty: QuizDifficulty,
    pub question_count: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            creator_id: quiz.creator_id,
            course_id: quiz.course_id,
            topic: quiz.topic.clone(),
            difficulty: quiz.difficulty.clone(),
            question_count: quiz.question_count(),
            created_at: quiz.created_at,
        }
    }
}

/// 测验列表响应
#[derive(Debug, Serialize)]
pub struct QuizListResponse {
    pub items: Vec<QuizSummary>,
    pub pagination: PaginationInfo,
}

/// 答题者视角的测验详情（答案已剥离）
#[derive(Debug, Serialize)]
pub struct QuizTakerResponse {
    pub id: i64,
    pub course_id: Option<i64>,
    pub topic: String,
    pub difficulty: QuizDifficulty,
    pub questions: Vec<QuizQuestionPublic>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Quiz> for QuizTakerResponse {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            course_id: quiz.course_id,
            topic: quiz.topic.clone(),
            difficulty: quiz.difficulty.clone(),
            questions: quiz.questions.iter().map(Into::into).collect(),
            created_at: quiz.created_at,
        }
    }
}

/// 单题判分结果
#[derive(Debug, Serialize, PartialEq)]
pub struct QuestionResult {
    pub correct: bool,
    pub correct_index: i32,
    /// None 表示未作答
    pub chosen_index: Option<i32>,
}

/// 判分响应
#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub quiz_id: i64,
    pub score: i64,
    pub total: i64,
    pub results: Vec<QuestionResult>,
    /// 本次提交新获得的徽章
    pub awarded_badges: Vec<Badge>,
}
