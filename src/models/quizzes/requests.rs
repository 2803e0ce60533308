use super::entities::{QuizDifficulty, QuizQuestion};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 测验查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct QuizListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
}

// 测验列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct QuizListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub creator_id: Option<i64>,
    pub course_id: Option<i64>,
}

// 测验入库请求（服务内部使用，题目已通过校验）
#[derive(Debug, Clone)]
pub struct CreateQuizRecord {
    pub creator_id: i64,
    pub course_id: Option<i64>,
    pub topic: String,
    pub difficulty: QuizDifficulty,
    pub questions: Vec<QuizQuestion>,
    pub model: String,
}

// 提交答案请求
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    /// 每道题选中的选项下标，顺序与题目一致
    pub answers: Vec<i32>,
}
