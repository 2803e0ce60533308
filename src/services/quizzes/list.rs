use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    quizzes::requests::{QuizListParams, QuizListQuery},
};

pub async fn list_quizzes(
    service: &QuizService,
    params: QuizListParams,
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

    // 列表只展示当前用户创建的测验
    let query = QuizListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        creator_id: Some(user_id),
        course_id: params.course_id,
    };

    match storage.list_quizzes_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Quiz list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve quiz list: {e}"),
            )),
        ),
    }
}
