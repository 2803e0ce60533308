use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 收件箱 / 发件箱
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageBox {
    Inbox,
    Sent,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self::Inbox
    }
}

// 消息查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct MessageListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, rename = "box")]
    pub message_box: MessageBox,
}

// 消息列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct MessageListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub message_box: MessageBox,
}

impl From<MessageListParams> for MessageListQuery {
    fn from(params: MessageListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            message_box: params.message_box,
        }
    }
}

// 发送消息请求
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: i64,
    pub subject: Option<String>,
    pub content: String,
}
