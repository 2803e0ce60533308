use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    quizzes::responses::QuizTakerResponse,
    users::entities::UserRole,
};

pub async fn get_quiz(
    service: &QuizService,
    quiz_id: i64,
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

    match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => {
            // 创建者和管理员可见答案，其余视角剥离答案后返回
            if quiz.creator_id == current_user.id || current_user.role == UserRole::Admin {
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(quiz, "Quiz retrieved successfully")))
            } else {
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    QuizTakerResponse::from(&quiz),
                    "Quiz retrieved successfully",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get quiz: {e}"),
            )),
        ),
    }
}
