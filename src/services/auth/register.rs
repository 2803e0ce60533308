use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::RegisterRequest,
    users::{
        entities::UserRole,
        requests::CreateUserRequest,
        responses::UserResponse,
    },
};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 校验字段格式
    if let Err(response) = validate_register_fields(&register_request) {
        return Ok(response);
    }

    // 2. 检查用户名 / 邮箱占用
    if let Err(response) = check_user_conflicts(&storage, &register_request).await {
        return Ok(response);
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    // 4. 创建用户，自助注册角色固定为普通学员
    let create_request = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: password_hash,
        role: UserRole::User,
        display_name: register_request.display_name,
        avatar_url: None,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("User {} registered successfully", user.username);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "注册成功")))
        }
        Err(e) => {
            let msg = format!("User registration failed: {e}");
            error!("{}", msg);
            // 并发注册时可能绕过前置检查，落到唯一约束上
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)))
            }
        }
    }
}

/// 校验注册字段，失败时返回对应的 400 响应
fn validate_register_fields(register_request: &RegisterRequest) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_username(&register_request.username) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&register_request.email) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    Ok(())
}

/// 检查用户名和邮箱是否已被占用
async fn check_user_conflicts(
    storage: &Arc<dyn Storage>,
    register_request: &RegisterRequest,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_username(&register_request.username).await {
        Ok(Some(_)) => {
            return Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserNameAlreadyExists,
                "该用户名已被注册",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Registration failed: {e}"),
                )),
            );
        }
    }

    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "该邮箱已被注册",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Registration failed: {e}"),
            )),
        ),
    }
}
