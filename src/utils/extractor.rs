//! 路径参数提取器
//!
//! 将路径中的数字 ID 解析为 i64，解析失败时直接返回统一格式的 400 响应，
//! 处理函数拿到的 ID 保证为正数。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

fn invalid_path_param(name: &str) -> actix_web::Error {
    let message = format!("Invalid path parameter: {name}");
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        message.clone(),
    ));
    InternalError::from_response(message, response).into()
}

macro_rules! safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);
                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(invalid_path_param($param)),
                })
            }
        }
    };
}

safe_i64_extractor!(SafeIDI64, "id");
safe_i64_extractor!(SafeCourseIdI64, "course_id");
safe_i64_extractor!(SafeModuleIdI64, "module_id");
safe_i64_extractor!(SafeQuizIdI64, "quiz_id");
safe_i64_extractor!(SafeMessageIdI64, "message_id");
safe_i64_extractor!(SafeNotificationIdI64, "notification_id");
