use serde::Serialize;

use super::entities::Message;
use crate::models::common::pagination::PaginationInfo;

/// 消息列表响应
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub items: Vec<Message>,
    pub pagination: PaginationInfo,
}

/// 未读消息数量响应
#[derive(Debug, Serialize)]
pub struct UnreadMessageCountResponse {
    pub unread_count: i64,
}
