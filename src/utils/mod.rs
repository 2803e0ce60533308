pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod validate;

pub use extractor::{
    SafeCourseIdI64, SafeIDI64, SafeMessageIdI64, SafeModuleIdI64, SafeNotificationIdI64,
    SafeQuizIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
