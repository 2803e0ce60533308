use super::SeaOrmStorage;
use crate::entity::messages::{ActiveModel, Column, Entity as Messages};
use crate::errors::{LearnSphereError, Result};
use crate::models::{
    PaginationInfo,
    messages::{
        entities::Message,
        requests::{MessageBox, MessageListQuery, SendMessageRequest},
        responses::MessageListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 发送消息
    pub async fn create_message_impl(
        &self,
        sender_id: i64,
        req: SendMessageRequest,
    ) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            recipient_id: Set(req.recipient_id),
            subject: Set(req.subject),
            content: Set(req.content),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("发送消息失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 通过 ID 获取消息
    pub async fn get_message_by_id_impl(&self, message_id: i64) -> Result<Option<Message>> {
        let result = Messages::find_by_id(message_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询消息失败: {e}")))?;

        Ok(result.map(|m| m.into_message()))
    }

    /// 分页列出收件箱/发件箱
    pub async fn list_messages_with_pagination_impl(
        &self,
        user_id: i64,
        query: MessageListQuery,
    ) -> Result<MessageListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Messages::find();

        select = match query.message_box {
            MessageBox::Inbox => select.filter(Column::RecipientId.eq(user_id)),
            MessageBox::Sent => select.filter(Column::SenderId.eq(user_id)),
        };

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询消息总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询消息页数失败: {e}")))?;

        let messages = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询消息列表失败: {e}")))?;

        Ok(MessageListResponse {
            items: messages.into_iter().map(|m| m.into_message()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 标记消息已读，仅收件人可操作
    pub async fn mark_message_read_impl(&self, message_id: i64, user_id: i64) -> Result<bool> {
        let result = Messages::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(message_id))
            .filter(Column::RecipientId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("标记消息已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 未读消息数量
    pub async fn unread_message_count_impl(&self, user_id: i64) -> Result<i64> {
        let count = Messages::find()
            .filter(Column::RecipientId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| {
                LearnSphereError::database_operation(format!("统计未读消息数量失败: {e}"))
            })?;

        Ok(count as i64)
    }
}
