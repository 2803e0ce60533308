use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
    UpdateModuleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::{SafeCourseIdI64, SafeModuleIdI64};

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn create_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_data: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_module(course_id.0, module_data.into_inner(), &req)
        .await
}

pub async fn list_modules(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_modules(course_id.0, &req).await
}

pub async fn get_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_module(course_id.0, module_id.0, &req).await
}

pub async fn update_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_module(course_id.0, module_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .delete_module(course_id.0, module_id.0, &req)
        .await
}

// 配置路由：读取公开，管理接口要求讲师或管理员
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::get().to(list_courses))
            .route("/{course_id}", web::get().to(get_course))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::instructor_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_course))
                    .route("/{course_id}", web::put().to(update_course))
                    .route("/{course_id}", web::delete().to(delete_course))
                    .route("/{course_id}/modules", web::get().to(list_modules))
                    .route("/{course_id}/modules", web::post().to(create_module))
                    .route(
                        "/{course_id}/modules/{module_id}",
                        web::get().to(get_module),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}",
                        web::put().to(update_module),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}",
                        web::delete().to(delete_module),
                    ),
            ),
    );
}
