use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, optional_viewer};
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{
        entities::CourseStatus,
        requests::{CourseListParams, CourseListQuery},
    },
    users::entities::UserRole,
};

pub async fn list_courses(
    service: &CourseService,
    params: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let viewer = optional_viewer(request, &storage).await;

    let mut query = CourseListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        category: params.category,
        level: params.level,
        status: params.status,
        instructor_id: None,
        search: params.search,
    };

    // 可见范围：
    // - 管理员：状态筛选原样生效，不筛选时可见全部；
    // - 讲师：查询未发布状态时自动限定为本人课程，否则与公开视角一致；
    // - 学员及匿名：强制仅已发布课程。
    match viewer {
        Some(ref user) if user.role == UserRole::Admin => {}
        Some(ref user) if user.role == UserRole::Instructor => match query.status {
            Some(CourseStatus::Published) => {}
            Some(_) => query.instructor_id = Some(user.id),
            None => query.status = Some(CourseStatus::Published),
        },
        _ => query.status = Some(CourseStatus::Published),
    }

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}
