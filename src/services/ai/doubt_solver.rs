use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AiService, prompts};
use crate::models::ai::requests::DoubtRequest;
use crate::models::ai::responses::DoubtResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_solve_doubt(
    service: &AiService,
    doubt_request: DoubtRequest,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let question = doubt_request.question.trim();
    if question.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "问题内容不能为空",
        )));
    }

    let messages = prompts::doubt_messages(question, doubt_request.context.as_deref());

    let completion = match service.client().chat(messages).await {
        Ok(completion) => completion,
        Err(e) => {
            error!("Doubt solver upstream call failed: {}", e);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiUpstreamError,
                "AI 服务暂时不可用，请稍后重试",
            )));
        }
    };

    let answer = completion
        .first_content()
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    if answer.is_empty() {
        error!("Doubt solver returned empty completion");
        return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
            ErrorCode::AiResponseInvalid,
            "模型未返回内容",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DoubtResponse {
            answer,
            model: completion.model,
        },
        "答疑成功",
    )))
}
