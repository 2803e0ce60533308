//! 提示词构造与模型输出提取

use crate::models::ai::completion::ChatMessage;
use crate::models::quizzes::entities::QuizDifficulty;

/// 测验生成的对话消息
pub fn quiz_messages(topic: &str, difficulty: &QuizDifficulty, count: u32) -> Vec<ChatMessage> {
    let system = "You are a quiz generator for an online learning platform. \
        Respond with a JSON array only, no prose. Each element must have the fields \
        \"question\" (string), \"options\" (array of strings, 2 to 6 entries), \
        \"answer_index\" (0-based index of the correct option) and optionally \
        \"explanation\" (string).";

    let user = format!(
        "Generate {count} multiple-choice questions about \"{topic}\" at {difficulty} difficulty. \
         Return only the JSON array."
    );

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// 学习答疑的对话消息
pub fn doubt_messages(question: &str, context: Option<&str>) -> Vec<ChatMessage> {
    let system = "You are a patient tutor on an online learning platform. \
        Answer the student's question clearly and concisely, in the language the question is asked in.";

    let user = match context {
        Some(context) if !context.trim().is_empty() => {
            format!("Course context:\n{context}\n\nQuestion: {question}")
        }
        _ => format!("Question: {question}"),
    };

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// 从模型输出中提取 JSON 文本
///
/// 模型经常把 JSON 包在 ``` 或 ```json 围栏里，或在前后附加说明文字，
/// 这里剥掉围栏并截取首个 JSON 值的边界。
pub fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();

    // 代码围栏
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        // 跳过语言标记（如 json）
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_fence[body_start..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    // 裸 JSON：截取首个括号到与之配对的末尾括号
    let array = trimmed.find('[').zip(trimmed.rfind(']'));
    let object = trimmed.find('{').zip(trimmed.rfind('}'));
    let candidate = match (array, object) {
        (Some((a_start, a_end)), Some((o_start, _))) if a_start < o_start => Some((a_start, a_end)),
        (_, Some((o_start, o_end))) => Some((o_start, o_end)),
        (Some((a_start, a_end)), None) => Some((a_start, a_end)),
        (None, None) => None,
    };

    match candidate {
        Some((start, end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quizzes::entities::QuizQuestion;

    #[test]
    fn test_extract_json_from_fenced_block() {
        let content = "Here you go:\n```json\n[{\"question\": \"q\", \"options\": [\"a\", \"b\"], \"answer_index\": 0}]\n```\nEnjoy!";
        let json = extract_json(content);
        let parsed: Vec<QuizQuestion> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].answer_index, 0);
    }

    #[test]
    fn test_extract_json_from_bare_array() {
        let content = "Sure! [1, 2, 3] is the answer.";
        assert_eq!(extract_json(content), "[1, 2, 3]");
    }

    #[test]
    fn test_extract_json_from_bare_object() {
        let content = "The result is {\"a\": 1}.";
        assert_eq!(extract_json(content), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_fence_without_language_tag() {
        let content = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(content), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_plain_passthrough() {
        assert_eq!(extract_json("  [1]  "), "[1]");
    }

    #[test]
    fn test_quiz_messages_mention_topic_and_count() {
        let messages = quiz_messages("Rust ownership", &QuizDifficulty::Hard, 7);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.contains("Rust ownership"));
        assert!(messages[1].content.contains('7'));
        assert!(messages[1].content.contains("hard"));
    }

    #[test]
    fn test_doubt_messages_include_context() {
        let messages = doubt_messages("Why?", Some("Chapter 3"));
        assert!(messages[1].content.contains("Chapter 3"));

        let without = doubt_messages("Why?", None);
        assert!(!without[1].content.contains("context"));
    }
}
