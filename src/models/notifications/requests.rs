use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 通知创建请求（服务内部使用，不暴露为 HTTP 接口）
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub content: String,
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
}

// 通知查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}

// 通知列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct NotificationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub unread_only: bool,
}

impl From<NotificationListParams> for NotificationListQuery {
    fn from(params: NotificationListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            unread_only: params.unread_only.unwrap_or(false),
        }
    }
}
