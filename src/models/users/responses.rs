use serde::Serialize;

use super::entities::User;
use crate::models::common::pagination::PaginationInfo;

/// 单个用户响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}
