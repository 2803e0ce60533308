use super::SeaOrmStorage;
use crate::entity::badges::{ActiveModel, Column, Entity as Badges};
use crate::entity::user_badges::{
    ActiveModel as UserBadgeActiveModel, Column as UserBadgeColumn, Entity as UserBadges,
};
use crate::errors::{LearnSphereError, Result};
use crate::models::badges::entities::{Badge, BadgeSeed, UserBadge};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出徽章目录
    pub async fn list_badges_impl(&self) -> Result<Vec<Badge>> {
        let badges = Badges::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询徽章目录失败: {e}")))?;

        Ok(badges.into_iter().map(|m| m.into_badge()).collect())
    }

    /// 通过 slug 获取徽章
    pub async fn get_badge_by_slug_impl(&self, slug: &str) -> Result<Option<Badge>> {
        let result = Badges::find()
            .filter(Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询徽章失败: {e}")))?;

        Ok(result.map(|m| m.into_badge()))
    }

    /// 统计徽章数量
    pub async fn count_badges_impl(&self) -> Result<u64> {
        let count = Badges::find()
            .count(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("统计徽章数量失败: {e}")))?;

        Ok(count)
    }

    /// 写入内置徽章
    pub async fn create_badge_impl(&self, seed: &BadgeSeed) -> Result<Badge> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            slug: Set(seed.slug.to_string()),
            name: Set(seed.name.to_string()),
            description: Set(seed.description.to_string()),
            icon_url: Set(seed.icon_url.map(str::to_string)),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("创建徽章失败: {e}")))?;

        Ok(result.into_badge())
    }

    /// 授予徽章，已持有时返回 false（幂等）
    pub async fn award_badge_impl(&self, user_id: i64, badge_id: i64) -> Result<bool> {
        let existing = UserBadges::find()
            .filter(UserBadgeColumn::UserId.eq(user_id))
            .filter(UserBadgeColumn::BadgeId.eq(badge_id))
            .one(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询用户徽章失败: {e}")))?;

        if existing.is_some() {
            return Ok(false);
        }

        let model = UserBadgeActiveModel {
            user_id: Set(user_id),
            badge_id: Set(badge_id),
            awarded_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("授予徽章失败: {e}")))?;

        Ok(true)
    }

    /// 列出用户已获得的徽章，按授予时间倒序
    pub async fn list_user_badges_impl(&self, user_id: i64) -> Result<Vec<UserBadge>> {
        let rows = UserBadges::find()
            .filter(UserBadgeColumn::UserId.eq(user_id))
            .find_also_related(Badges)
            .order_by_desc(UserBadgeColumn::AwardedAt)
            .all(&self.db)
            .await
            .map_err(|e| LearnSphereError::database_operation(format!("查询用户徽章失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(user_badge, badge)| {
                badge.map(|b| UserBadge {
                    badge: b.into_badge(),
                    awarded_at: DateTime::<Utc>::from_timestamp(user_badge.awarded_at, 0)
                        .unwrap_or_default(),
                })
            })
            .collect())
    }
}
