use std::sync::Arc;

use crate::models::{
    badges::entities::{Badge, BadgeSeed, UserBadge},
    courses::{
        entities::{Course, CourseModule},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
            UpdateModuleRequest,
        },
        responses::CourseListResponse,
    },
    messages::{
        entities::Message,
        requests::{MessageListQuery, SendMessageRequest},
        responses::MessageListResponse,
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::NotificationListResponse,
    },
    quizzes::{
        entities::Quiz,
        requests::{CreateQuizRecord, QuizListQuery},
        responses::QuizListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(
        &self,
        instructor_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程（级联删除章节）
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 课程章节管理方法
    // 创建章节
    async fn create_course_module(
        &self,
        course_id: i64,
        module: CreateModuleRequest,
    ) -> Result<CourseModule>;
    // 获取章节（校验所属课程）
    async fn get_course_module(
        &self,
        course_id: i64,
        module_id: i64,
    ) -> Result<Option<CourseModule>>;
    // 按 position 升序列出课程章节
    async fn list_course_modules(&self, course_id: i64) -> Result<Vec<CourseModule>>;
    // 更新章节
    async fn update_course_module(
        &self,
        course_id: i64,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>>;
    // 删除章节
    async fn delete_course_module(&self, course_id: i64, module_id: i64) -> Result<bool>;

    /// 测验管理方法
    // 保存生成的测验
    async fn create_quiz(&self, quiz: CreateQuizRecord) -> Result<Quiz>;
    // 通过ID获取测验
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    // 列出测验
    async fn list_quizzes_with_pagination(&self, query: QuizListQuery) -> Result<QuizListResponse>;
    // 删除测验
    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool>;

    /// 徽章管理方法
    // 列出徽章目录
    async fn list_badges(&self) -> Result<Vec<Badge>>;
    // 通过 slug 获取徽章
    async fn get_badge_by_slug(&self, slug: &str) -> Result<Option<Badge>>;
    // 统计徽章数量
    async fn count_badges(&self) -> Result<u64>;
    // 写入内置徽章
    async fn create_badge(&self, seed: &BadgeSeed) -> Result<Badge>;
    // 授予徽章，返回是否为新授予（幂等）
    async fn award_badge(&self, user_id: i64, badge_id: i64) -> Result<bool>;
    // 列出用户已获得的徽章
    async fn list_user_badges(&self, user_id: i64) -> Result<Vec<UserBadge>>;

    /// 消息管理方法
    // 发送消息
    async fn create_message(&self, sender_id: i64, message: SendMessageRequest) -> Result<Message>;
    // 通过ID获取消息
    async fn get_message_by_id(&self, message_id: i64) -> Result<Option<Message>>;
    // 列出收件箱/发件箱
    async fn list_messages_with_pagination(
        &self,
        user_id: i64,
        query: MessageListQuery,
    ) -> Result<MessageListResponse>;
    // 标记消息已读（仅收件人）
    async fn mark_message_read(&self, message_id: i64, user_id: i64) -> Result<bool>;
    // 未读消息数量
    async fn unread_message_count(&self, user_id: i64) -> Result<i64>;

    /// 通知管理方法
    // 创建通知
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification>;
    // 列出通知
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    // 未读通知数量
    async fn unread_notification_count(&self, user_id: i64) -> Result<i64>;
    // 标记通知已读
    async fn mark_notification_read(&self, notification_id: i64, user_id: i64) -> Result<bool>;
    // 标记全部通知已读，返回标记数量
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<i64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
