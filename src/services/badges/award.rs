//! 徽章授予辅助逻辑
//!
//! 徽章是业务流程的副产品，授予失败只记录日志、不影响主流程。

use std::sync::Arc;

use crate::models::badges::entities::Badge;
use crate::models::notifications::entities::NOTIFICATION_BADGE_AWARDED;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::storage::Storage;

/// 按 slug 授予徽章（幂等）
///
/// 仅在本次真正新授予时返回徽章，并为用户生成一条通知；
/// 用户已持有该徽章或任何一步失败时返回 None。
pub async fn award_badge_by_slug(
    storage: &Arc<dyn Storage>,
    user_id: i64,
    slug: &str,
) -> Option<Badge> {
    let badge = match storage.get_badge_by_slug(slug).await {
        Ok(Some(badge)) => badge,
        Ok(None) => {
            tracing::warn!("Badge {} not found in catalog", slug);
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to look up badge {}: {}", slug, e);
            return None;
        }
    };

    match storage.award_badge(user_id, badge.id).await {
        Ok(true) => {}
        Ok(false) => return None, // 已持有
        Err(e) => {
            tracing::warn!("Failed to award badge {} to user {}: {}", slug, user_id, e);
            return None;
        }
    }

    tracing::info!("Awarded badge {} to user {}", slug, user_id);

    let notification = CreateNotificationRequest {
        user_id,
        notification_type: NOTIFICATION_BADGE_AWARDED.to_string(),
        title: format!("获得新徽章：{}", badge.name),
        content: badge.description.clone(),
        reference_type: Some("badge".to_string()),
        reference_id: Some(badge.id),
    };

    if let Err(e) = storage.create_notification(notification).await {
        tracing::warn!("Failed to create badge notification for user {}: {}", user_id, e);
    }

    Some(badge)
}
