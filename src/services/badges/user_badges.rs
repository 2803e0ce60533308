use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BadgeService;
use crate::middlewares::RequireJWT;
use crate::models::badges::responses::UserBadgeListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_my_badges(
    service: &BadgeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.list_user_badges(user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserBadgeListResponse { items },
            "User badges retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve user badges: {e}"),
            )),
        ),
    }
}
