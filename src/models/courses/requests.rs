use super::entities::{CourseLevel, CourseStatus};
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
    pub search: Option<String>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    /// None 表示不过滤状态（管理端视角）
    pub status: Option<CourseStatus>,
    pub instructor_id: Option<i64>,
    pub search: Option<String>,
}

// 课程创建请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub level: CourseLevel,
    /// 管理员可为指定讲师创建课程；讲师只能创建自己的课程
    pub instructor_id: Option<i64>,
}

// 课程更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
}

// 章节创建请求
#[derive(Debug, Deserialize)]
pub struct CreateModuleRequest {
    pub title: String,
    pub content: Option<String>,
    /// 省略时追加到末尾
    pub position: Option<i32>,
}

// 章节更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateModuleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub position: Option<i32>,
}
