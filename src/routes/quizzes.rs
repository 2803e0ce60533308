use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quizzes::requests::{QuizListParams, SubmitQuizRequest};
use crate::services::QuizService;
use crate::utils::SafeQuizIdI64;

// 懒加载的全局 QuizService 实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

pub async fn list_quizzes(
    req: HttpRequest,
    query: web::Query<QuizListParams>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.list_quizzes(query.into_inner(), &req).await
}

pub async fn get_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz(quiz_id.0, &req).await
}

pub async fn submit_quiz(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
    submission: web::Json<SubmitQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .submit_quiz(quiz_id.0, submission.into_inner(), &req)
        .await
}

pub async fn delete_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(quiz_id.0, &req).await
}

// 配置路由
pub fn configure_quiz_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_quizzes))
            .route("/{quiz_id}", web::get().to(get_quiz))
            .route("/{quiz_id}", web::delete().to(delete_quiz))
            .route("/{quiz_id}/submit", web::post().to(submit_quiz)),
    );
}
