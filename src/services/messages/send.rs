use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::SendMessageRequest;
use crate::models::notifications::entities::NOTIFICATION_MESSAGE_RECEIVED;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn send_message(
    service: &MessageService,
    message_data: SendMessageRequest,
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

    if message_data.recipient_id == current_user.id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SelfMessageNotAllowed,
            "不能给自己发送消息",
        )));
    }

    if message_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "消息内容不能为空",
        )));
    }

    // 校验收件人存在
    match storage.get_user_by_id(message_data.recipient_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "收件人不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to verify recipient: {e}"),
                )),
            );
        }
    }

    match storage.create_message(current_user.id, message_data).await {
        Ok(message) => {
            // 给收件人生成一条通知，失败只记录日志
            let notification = CreateNotificationRequest {
                user_id: message.recipient_id,
                notification_type: NOTIFICATION_MESSAGE_RECEIVED.to_string(),
                title: format!("来自 {} 的新消息", current_user.username),
                content: message.subject.clone().unwrap_or_else(|| "你收到了一条新消息".to_string()),
                reference_type: Some("message".to_string()),
                reference_id: Some(message.id),
            };
            if let Err(e) = storage.create_notification(notification).await {
                tracing::warn!(
                    "Failed to create message notification for user {}: {}",
                    message.recipient_id,
                    e
                );
            }

            Ok(HttpResponse::Created().json(ApiResponse::success(message, "消息发送成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to send message: {e}"),
            )),
        ),
    }
}
