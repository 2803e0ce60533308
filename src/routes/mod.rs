pub mod ai;
pub mod auth;
pub mod badges;
pub mod courses;
pub mod messages;
pub mod notifications;
pub mod quizzes;
pub mod system;
pub mod users;

pub use ai::configure_ai_routes;
pub use auth::configure_auth_routes;
pub use badges::configure_badge_routes;
pub use courses::configure_course_routes;
pub use messages::configure_message_routes;
pub use notifications::configure_notification_routes;
pub use quizzes::configure_quiz_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
