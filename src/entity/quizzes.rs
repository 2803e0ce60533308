//! 测验实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub creator_id: i64,
    pub course_id: Option<i64>,
    pub topic: String,
    pub difficulty: String,
    /// 题目列表，以 JSON 数组形式存储，入库前已校验
    pub questions: String,
    pub model: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatorId",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_quiz(self) -> crate::models::quizzes::entities::Quiz {
        use crate::models::quizzes::entities::{Quiz, QuizDifficulty};
        use chrono::{DateTime, Utc};

        Quiz {
            id: self.id,
            creator_id: self.creator_id,
            course_id: self.course_id,
            topic: self.topic,
            difficulty: self
                .difficulty
                .parse::<QuizDifficulty>()
                .unwrap_or(QuizDifficulty::Medium),
            questions: serde_json::from_str(&self.questions).unwrap_or_default(),
            model: self.model,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
