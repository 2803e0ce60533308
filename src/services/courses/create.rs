use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::CreateCourseRequest,
    users::entities::UserRole,
};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 确定课程归属：讲师只能创建自己的课程，管理员可代指定讲师创建
    let instructor_id = match course_data.instructor_id {
        Some(target) if target != current_user.id => {
            if current_user.role != UserRole::Admin {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::CoursePermissionDenied,
                    "Only admins can create courses for other instructors",
                )));
            }

            match storage.get_user_by_id(target).await {
                Ok(Some(user)) if user.role == UserRole::Instructor => target,
                Ok(Some(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        "目标用户不是讲师",
                    )));
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::UserNotFound,
                        "目标讲师不存在",
                    )));
                }
                Err(e) => {
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to verify instructor: {e}"),
                        )),
                    );
                }
            }
        }
        _ => current_user.id,
    };

    if course_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "课程标题不能为空",
        )));
    }

    match storage.create_course(instructor_id, course_data).await {
        Ok(course) => Ok(HttpResponse::Created().json(ApiResponse::success(course, "课程创建成功"))),
        Err(e) => {
            let msg = format!("Course creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::CourseCreationFailed, msg)))
        }
    }
}
