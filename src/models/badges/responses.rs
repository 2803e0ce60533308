use serde::Serialize;

use super::entities::{Badge, UserBadge};

/// 徽章目录响应
#[derive(Debug, Serialize)]
pub struct BadgeListResponse {
    pub items: Vec<Badge>,
}

/// 用户徽章响应
#[derive(Debug, Serialize)]
pub struct UserBadgeListResponse {
    pub items: Vec<UserBadge>,
}
