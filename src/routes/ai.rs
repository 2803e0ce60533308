use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::ai::requests::{DoubtRequest, GenerateQuizRequest};
use crate::services::AiService;

// 懒加载的全局 AiService 实例
static AI_SERVICE: Lazy<AiService> = Lazy::new(AiService::new_lazy);

pub async fn generate_quiz(
    req: HttpRequest,
    quiz_data: web::Json<GenerateQuizRequest>,
) -> ActixResult<HttpResponse> {
    AI_SERVICE.generate_quiz(quiz_data.into_inner(), &req).await
}

pub async fn solve_doubt(
    req: HttpRequest,
    doubt_data: web::Json<DoubtRequest>,
) -> ActixResult<HttpResponse> {
    AI_SERVICE.solve_doubt(doubt_data.into_inner(), &req).await
}

// 配置路由：AI 接口成本高，单独限流
pub fn configure_ai_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/ai")
            .wrap(RateLimit::ai())
            .wrap(middlewares::RequireJWT)
            .route("/quiz-generator", web::post().to(generate_quiz))
            .route("/doubt-solver", web::post().to(solve_doubt)),
    );
}
