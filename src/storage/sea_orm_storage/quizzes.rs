use super::SeaOrmStorage;
use crate::entity::quizzes::{ActiveModel, Column, Entity as Quizzes};
use crate::errors::{LearnSphereError, Result};
use crate::models::{
    PaginationInfo,
    quizzes::{
        entities::Quiz,
        requests::{CreateQuizRecord, QuizListQuery},
        responses::{QuizListResponse, QuizSummary},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 保存生成的测验，题目序列化为 JSON 存储
    pub async fn create_quiz_impl(&self, record: CreateQuizRecord) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();

        let questions_json = serde_json::to_string(&record.questions)
            .map_err(|e| LearnSphereError::serialization(format!("题目序列化失败: {e}")))?;

        let model = ActiveModel {
            creator_id: Set(record.creator_id),
            course_id: Set(record.course_id),
            topic: Set(record.topic),
            difficulty: Set(record.difficulty.to_string()),
            questions: Set(questions_json),
            model: Set(record.model),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("保存测验失败: {e}")))?;

        Ok(result.into_quiz())
    }

    /// 通过 ID 获取测验
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 分页列出测验
    pub async fn list_quizzes_with_pagination_impl(
        &self,
        query: QuizListQuery,
    ) -> Result<QuizListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Quizzes::find();

        // 创建者筛选
        if let Some(creator_id) = query.creator_id {
            select = select.filter(Column::CreatorId.eq(creator_id));
        }

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询测验总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询测验页数失败: {e}")))?;

        let quizzes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(QuizListResponse {
            items: quizzes
                .into_iter()
                .map(|m| QuizSummary::from(&m.into_quiz()))
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除测验
    pub async fn delete_quiz_impl(&self, quiz_id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(quiz_id)
            .exec(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
