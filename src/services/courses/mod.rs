pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod modules;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::entities::Course;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
    UpdateModuleRequest,
};
use crate::models::users::entities::{User, UserRole, UserStatus};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 课程列表，可见范围取决于访问者身份
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 课程详情（含章节）
    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, update_data, request).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }

    // 创建章节
    pub async fn create_module(
        &self,
        course_id: i64,
        module_data: CreateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::create_module(self, course_id, module_data, request).await
    }

    // 章节列表
    pub async fn list_modules(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::list_modules(self, course_id, request).await
    }

    // 章节详情
    pub async fn get_module(
        &self,
        course_id: i64,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::get_module(self, course_id, module_id, request).await
    }

    // 更新章节
    pub async fn update_module(
        &self,
        course_id: i64,
        module_id: i64,
        update_data: UpdateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::update_module(self, course_id, module_id, update_data, request).await
    }

    // 删除章节
    pub async fn delete_module(
        &self,
        course_id: i64,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::delete_module(self, course_id, module_id, request).await
    }
}

/// 公开接口上的可选身份识别
///
/// 课程的读取接口不挂 JWT 中间件，匿名可访问；携带有效 access token 时
/// 识别出访问者，以放开其对自己未发布课程的可见性。令牌无效时按匿名处理。
pub(crate) async fn optional_viewer(
    request: &HttpRequest,
    storage: &Arc<dyn Storage>,
) -> Option<User> {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))?;

    let claims = JwtUtils::verify_access_token(token).ok()?;
    let user_id = claims.sub.parse::<i64>().ok()?;

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status == UserStatus::Active => Some(user),
        _ => None,
    }
}

/// 获取课程并校验编辑权限：仅课程讲师本人或管理员可操作
pub(crate) async fn resolve_course_for_edit(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    current_user: &User,
) -> Result<Course, HttpResponse> {
    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    };

    if course.instructor_id != current_user.id && current_user.role != UserRole::Admin {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "No permission to manage this course",
        )));
    }

    Ok(course)
}
