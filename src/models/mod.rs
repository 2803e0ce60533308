pub mod ai;
pub mod auth;
pub mod badges;
pub mod common;
pub mod courses;
pub mod messages;
pub mod notifications;
pub mod quizzes;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于健康检查的运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功，4xxxx 对应客户端错误，5xxxx 对应服务端错误，
/// 与 HTTP 状态码按前三位对齐。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400
    BadRequest = 40000,
    UserNameInvalid = 40001,
    UserEmailInvalid = 40002,
    UserPasswordInvalid = 40003,
    CanNotDeleteCurrentUser = 40004,
    SelfMessageNotAllowed = 40005,
    QuizAnswersInvalid = 40006,

    // 401
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403
    Forbidden = 40300,
    CoursePermissionDenied = 40301,
    QuizPermissionDenied = 40302,

    // 404
    NotFound = 40400,
    UserNotFound = 40401,
    CourseNotFound = 40402,
    CourseModuleNotFound = 40403,
    QuizNotFound = 40404,
    MessageNotFound = 40405,
    NotificationNotFound = 40406,

    // 409
    UserAlreadyExists = 40901,
    UserNameAlreadyExists = 40902,
    UserEmailAlreadyExists = 40903,

    // 429
    RateLimitExceeded = 42900,

    // 500
    InternalServerError = 50000,
    RegisterFailed = 50001,
    UserCreationFailed = 50002,
    UserUpdateFailed = 50003,
    UserDeleteFailed = 50004,
    CourseCreationFailed = 50005,
    CourseUpdateFailed = 50006,
    CourseDeleteFailed = 50007,
    QuizGenerationFailed = 50008,

    // 502
    AiUpstreamError = 50201,
    AiResponseInvalid = 50202,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values_align_with_http_classes() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::BadRequest as i32, 40000);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::RateLimitExceeded as i32, 42900);
        assert_eq!(ErrorCode::AiUpstreamError as i32, 50201);
    }
}
