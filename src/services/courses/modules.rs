//! 课程章节管理，全部操作要求讲师本人或管理员身份

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{CourseService, resolve_course_for_edit};
use crate::middlewares::RequireJWT;
use crate::models::users::entities::User;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::{CreateModuleRequest, UpdateModuleRequest},
};
use crate::storage::Storage;

pub async fn create_module(
    service: &CourseService,
    course_id: i64,
    module_data: CreateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_module_permission(&storage, course_id, request).await {
        return Ok(response);
    }

    if module_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "章节标题不能为空",
        )));
    }

    match storage.create_course_module(course_id, module_data).await {
        Ok(module) => Ok(HttpResponse::Created().json(ApiResponse::success(module, "章节创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Module creation failed: {e}"),
            )),
        ),
    }
}

pub async fn list_modules(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_module_permission(&storage, course_id, request).await {
        return Ok(response);
    }

    match storage.list_course_modules(course_id).await {
        Ok(modules) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            modules,
            "Module list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve module list: {e}"),
            )),
        ),
    }
}

pub async fn get_module(
    service: &CourseService,
    course_id: i64,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_module_permission(&storage, course_id, request).await {
        return Ok(response);
    }

    match storage.get_course_module(course_id, module_id).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            module,
            "Module retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseModuleNotFound,
            "Module not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get module: {e}"),
            )),
        ),
    }
}

pub async fn update_module(
    service: &CourseService,
    course_id: i64,
    module_id: i64,
    update_data: UpdateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_module_permission(&storage, course_id, request).await {
        return Ok(response);
    }

    match storage
        .update_course_module(course_id, module_id, update_data)
        .await
    {
        Ok(Some(module)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(module, "章节更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseModuleNotFound,
            "Module not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Module update failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_module(
    service: &CourseService,
    course_id: i64,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_module_permission(&storage, course_id, request).await {
        return Ok(response);
    }

    match storage.delete_course_module(course_id, module_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Module deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseModuleNotFound,
            "Module not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Module deletion failed: {e}"),
            )),
        ),
    }
}

/// 取当前用户并校验其对课程的编辑权限
async fn check_module_permission(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    request: &HttpRequest,
) -> Result<User, HttpResponse> {
    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Err(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    resolve_course_for_edit(storage, course_id, &current_user).await?;

    Ok(current_user)
}
