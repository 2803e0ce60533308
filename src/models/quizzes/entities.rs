use serde::{Deserialize, Serialize};

// 测验难度
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QuizDifficulty {
    Easy,
    Medium,
    Hard,
}

impl<'de> Deserialize<'de> for QuizDifficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的测验难度: '{s}'. 支持的难度: easy, medium, hard"
            ))
        })
    }
}

impl std::fmt::Display for QuizDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizDifficulty::Easy => write!(f, "easy"),
            QuizDifficulty::Medium => write!(f, "medium"),
            QuizDifficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for QuizDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(QuizDifficulty::Easy),
            "medium" => Ok(QuizDifficulty::Medium),
            "hard" => Ok(QuizDifficulty::Hard),
            _ => Err(format!("Invalid quiz difficulty: {s}")),
        }
    }
}

/// 单选题（AI 生成后经校验入库）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// 正确选项在 options 中的下标
    pub answer_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// 答题者视角的题目，不携带答案
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionPublic {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for QuizQuestionPublic {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

// 测验实体
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub creator_id: i64,
    pub course_id: Option<i64>,
    pub topic: String,
    pub difficulty: QuizDifficulty,
    pub questions: Vec<QuizQuestion>,
    /// 生成该测验的模型标识
    pub model: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for s in ["easy", "medium", "hard"] {
            let d: QuizDifficulty = s.parse().unwrap();
            assert_eq!(d.to_string(), s);
        }
        assert!("extreme".parse::<QuizDifficulty>().is_err());
    }

    #[test]
    fn test_public_question_drops_answer() {
        let q = QuizQuestion {
            question: "2+2?".into(),
            options: vec!["3".into(), "4".into()],
            answer_index: 1,
            explanation: Some("basic arithmetic".into()),
        };
        let public = QuizQuestionPublic::from(&q);
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("answer_index").is_none());
        assert!(json.get("explanation").is_none());
        assert_eq!(json["options"][1], "4");
    }
}
