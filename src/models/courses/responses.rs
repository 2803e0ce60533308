use serde::Serialize;

use super::entities::{Course, CourseModule};
use crate::models::common::pagination::PaginationInfo;

/// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

/// 课程详情响应（含有序章节）
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: Course,
    pub modules: Vec<CourseModule>,
}
