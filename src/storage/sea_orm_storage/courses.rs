use super::SeaOrmStorage;
use crate::entity::course_modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as CourseModules,
};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{LearnSphereError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseModule, CourseStatus},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
            UpdateModuleRequest,
        },
        responses::CourseListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程，初始状态为 draft
    pub async fn create_course_impl(
        &self,
        instructor_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            instructor_id: Set(instructor_id),
            title: Set(req.title),
            description: Set(req.description),
            category: Set(req.category),
            level: Set(req.level.to_string()),
            status: Set(CourseStatus::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(keyword))
                    .add(Column::Description.contains(keyword)),
            );
        }

        // 分类筛选
        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category));
        }

        // 级别筛选
        if let Some(ref level) = query.level {
            select = select.filter(Column::Level.eq(level.to_string()));
        }

        // 状态筛选，None 表示不过滤（管理端视角）
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 讲师筛选
        if let Some(instructor_id) = query.instructor_id {
            select = select.filter(Column::InstructorId.eq(instructor_id));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(category) = update.category {
            model.category = Set(category);
        }

        if let Some(level) = update.level {
            model.level = Set(level.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程（章节随外键级联删除）
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建章节，position 省略时追加到末尾
    pub async fn create_course_module_impl(
        &self,
        course_id: i64,
        req: CreateModuleRequest,
    ) -> Result<CourseModule> {
        let now = chrono::Utc::now().timestamp();

        let position = match req.position {
            Some(pos) => pos,
            None => {
                let max: Option<i32> = CourseModules::find()
                    .filter(ModuleColumn::CourseId.eq(course_id))
                    .select_only()
                    .column_as(ModuleColumn::Position.max(), "max_position")
                    .into_tuple()
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        LearnSphereError::database_operation(format!("查询章节序号失败: {e}"))
                    })?
                    .flatten();
                max.map_or(1, |m| m + 1)
            }
        };

        let model = ModuleActiveModel {
            course_id: Set(course_id),
            title: Set(req.title),
            content: Set(req.content),
            position: Set(position),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("创建章节失败: {e}")))?;

        Ok(result.into_course_module())
    }

    /// 获取章节，校验其属于指定课程
    pub async fn get_course_module_impl(
        &self,
        course_id: i64,
        module_id: i64,
    ) -> Result<Option<CourseModule>> {
        let result = CourseModules::find_by_id(module_id)
            .filter(ModuleColumn::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询章节失败: {e}")))?;

        Ok(result.map(|m| m.into_course_module()))
    }

    /// 按 position 升序列出课程章节
    pub async fn list_course_modules_impl(&self, course_id: i64) -> Result<Vec<CourseModule>> {
        let modules = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .order_by_asc(ModuleColumn::Position)
            .order_by_asc(ModuleColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询章节列表失败: {e}")))?;

        Ok(modules.into_iter().map(|m| m.into_course_module()).collect())
    }

    /// 更新章节
    pub async fn update_course_module_impl(
        &self,
        course_id: i64,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>> {
        let existing = self.get_course_module_impl(course_id, module_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ModuleActiveModel {
            id: Set(module_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(Some(content));
        }

        if let Some(position) = update.position {
            model.position = Set(position);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("更新章节失败: {e}")))?;

        self.get_course_module_impl(course_id, module_id).await
    }

    /// 删除章节
    pub async fn delete_course_module_impl(&self, course_id: i64, module_id: i64) -> Result<bool> {
        let result = CourseModules::delete_many()
            .filter(ModuleColumn::Id.eq(module_id))
            .filter(ModuleColumn::CourseId.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("删除章节失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
