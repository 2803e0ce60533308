use serde::{Deserialize, Serialize};

// 徽章目录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 用户已获得的徽章
#[derive(Debug, Clone, Serialize)]
pub struct UserBadge {
    #[serde(flatten)]
    pub badge: Badge,
    pub awarded_at: chrono::DateTime<chrono::Utc>,
}

/// 内置徽章目录，启动时写入数据库
pub struct BadgeSeed {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon_url: Option<&'static str>,
}

pub const BADGE_FIRST_QUIZ: &str = "first-quiz";
pub const BADGE_PERFECT_SCORE: &str = "perfect-score";
pub const BADGE_QUIZ_CREATOR: &str = "quiz-creator";

pub fn builtin_badges() -> &'static [BadgeSeed] {
    &[
        BadgeSeed {
            slug: BADGE_FIRST_QUIZ,
            name: "First Steps",
            description: "Completed your first quiz",
            icon_url: Some("/assets/badges/first-quiz.svg"),
        },
        BadgeSeed {
            slug: BADGE_PERFECT_SCORE,
            name: "Perfectionist",
            description: "Answered every question in a quiz correctly",
            icon_url: Some("/assets/badges/perfect-score.svg"),
        },
        BadgeSeed {
            slug: BADGE_QUIZ_CREATOR,
            name: "Quiz Smith",
            description: "Generated your first quiz with the AI assistant",
            icon_url: Some("/assets/badges/quiz-creator.svg"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_badges_are_complete() {
        let seeds = builtin_badges();
        assert_eq!(seeds.len(), 3);
        for seed in seeds {
            assert!(!seed.slug.is_empty());
            assert!(!seed.name.is_empty());
            assert!(seed.icon_url.is_some());
        }

        let mut slugs: Vec<_> = seeds.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), seeds.len());
    }
}
