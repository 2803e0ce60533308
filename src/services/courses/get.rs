use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, optional_viewer};
use crate::models::{
    ApiResponse, ErrorCode,
    courses::{entities::CourseStatus, responses::CourseDetailResponse},
    users::entities::UserRole,
};

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    };

    // 未发布课程仅讲师本人和管理员可见，对外表现为不存在
    if course.status != CourseStatus::Published {
        let viewer = optional_viewer(request, &storage).await;
        let visible = viewer
            .map(|u| u.id == course.instructor_id || u.role == UserRole::Admin)
            .unwrap_or(false);
        if !visible {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
    }

    match storage.list_course_modules(course_id).await {
        Ok(modules) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseDetailResponse { course, modules },
            "Course details retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get course modules: {e}"),
            )),
        ),
    }
}
