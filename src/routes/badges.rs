use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::BadgeService;

// 懒加载的全局 BadgeService 实例
static BADGE_SERVICE: Lazy<BadgeService> = Lazy::new(BadgeService::new_lazy);

pub async fn list_badges(request: HttpRequest) -> ActixResult<HttpResponse> {
    BADGE_SERVICE.list_badges(&request).await
}

pub async fn list_my_badges(request: HttpRequest) -> ActixResult<HttpResponse> {
    BADGE_SERVICE.list_my_badges(&request).await
}

// 配置路由：目录公开，个人徽章需要登录
pub fn configure_badge_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/badges")
            .route("", web::get().to(list_badges))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(list_my_badges)),
            ),
    );
}
