use serde::Serialize;

/// 答疑响应
#[derive(Debug, Serialize)]
pub struct DoubtResponse {
    pub answer: String,
    /// 回答该问题的模型标识
    pub model: String,
}
