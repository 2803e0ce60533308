use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::messages::requests::{MessageListParams, SendMessageRequest};
use crate::services::MessageService;
use crate::utils::SafeMessageIdI64;

// 懒加载的全局 MessageService 实例
static MESSAGE_SERVICE: Lazy<MessageService> = Lazy::new(MessageService::new_lazy);

pub async fn send_message(
    req: HttpRequest,
    message_data: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .send_message(message_data.into_inner(), &req)
        .await
}

pub async fn list_messages(
    req: HttpRequest,
    query: web::Query<MessageListParams>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.list_messages(query.into_inner(), &req).await
}

pub async fn mark_read(
    req: HttpRequest,
    message_id: SafeMessageIdI64,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.mark_read(message_id.0, &req).await
}

pub async fn unread_count(request: HttpRequest) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.unread_count(&request).await
}

// 配置路由
pub fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/messages")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(send_message))
            .route("", web::get().to(list_messages))
            .route("/unread-count", web::get().to(unread_count))
            .route("/{message_id}/read", web::post().to(mark_read)),
    );
}
