use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BadgeService;
use crate::models::badges::responses::BadgeListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_badges(
    service: &BadgeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_badges().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            BadgeListResponse { items },
            "Badge catalog retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve badge catalog: {e}"),
            )),
        ),
    }
}
