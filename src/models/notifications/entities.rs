use serde::{Deserialize, Serialize};

// 通知
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    /// 通知类型，如 message_received / badge_awarded
    pub notification_type: String,
    pub title: String,
    pub content: String,
    /// 关联的资源类型与 ID，便于客户端跳转
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub const NOTIFICATION_MESSAGE_RECEIVED: &str = "message_received";
pub const NOTIFICATION_BADGE_AWARDED: &str = "badge_awarded";
