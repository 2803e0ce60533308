pub mod ai;
pub mod auth;
pub mod badges;
pub mod courses;
pub mod messages;
pub mod notifications;
pub mod quizzes;
pub mod system;
pub mod users;

pub use ai::AiService;
pub use auth::AuthService;
pub use badges::BadgeService;
pub use courses::CourseService;
pub use messages::MessageService;
pub use notifications::NotificationService;
pub use quizzes::QuizService;
pub use system::SystemService;
pub use users::UserService;
