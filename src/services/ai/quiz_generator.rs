use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AiService, prompts};
use crate::middlewares::RequireJWT;
use crate::models::ai::requests::GenerateQuizRequest;
use crate::models::badges::entities::BADGE_QUIZ_CREATOR;
use crate::models::quizzes::entities::QuizQuestion;
use crate::models::quizzes::requests::CreateQuizRecord;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::badges::award::award_badge_by_slug;

/// 单次生成的题目数量上限
const MAX_QUESTION_COUNT: u32 = 20;

pub async fn handle_generate_quiz(
    service: &AiService,
    quiz_request: GenerateQuizRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let topic = quiz_request.topic.trim().to_string();
    if topic.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "测验主题不能为空",
        )));
    }

    let question_count = quiz_request.question_count.clamp(1, MAX_QUESTION_COUNT);

    // 挂接课程时校验课程存在
    if let Some(course_id) = quiz_request.course_id {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CourseNotFound,
                    "Course not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to verify course: {e}"),
                    )),
                );
            }
        }
    }

    // 调用托管模型生成题目
    let messages = prompts::quiz_messages(&topic, &quiz_request.difficulty, question_count);
    let completion = match service.client().chat(messages).await {
        Ok(completion) => completion,
        Err(e) => {
            error!("Quiz generation upstream call failed: {}", e);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiUpstreamError,
                "AI 服务暂时不可用，请稍后重试",
            )));
        }
    };

    let content = match completion.first_content() {
        Some(content) => content,
        None => {
            error!("Quiz generation returned empty completion");
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiResponseInvalid,
                "模型未返回内容",
            )));
        }
    };

    // 解析并校验题目结构
    let questions = match parse_questions(content) {
        Ok(questions) => questions,
        Err(reason) => {
            error!("Quiz generation produced invalid questions: {}", reason);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::AiResponseInvalid,
                "模型输出的题目格式无效",
            )));
        }
    };

    let record = CreateQuizRecord {
        creator_id: current_user.id,
        course_id: quiz_request.course_id,
        topic,
        difficulty: quiz_request.difficulty,
        questions,
        model: completion.model.clone(),
    };

    match storage.create_quiz(record).await {
        Ok(quiz) => {
            // 首次生成测验授予徽章，失败不影响主流程
            award_badge_by_slug(&storage, current_user.id, BADGE_QUIZ_CREATOR).await;

            Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "测验生成成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::QuizGenerationFailed,
                format!("Failed to save generated quiz: {e}"),
            )),
        ),
    }
}

/// 解析模型输出并校验每道题的结构
fn parse_questions(content: &str) -> Result<Vec<QuizQuestion>, String> {
    let json = prompts::extract_json(content);

    let questions: Vec<QuizQuestion> =
        serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;

    if questions.is_empty() {
        return Err("empty question list".to_string());
    }

    for (index, question) in questions.iter().enumerate() {
        if question.question.trim().is_empty() {
            return Err(format!("question {index} has empty text"));
        }
        if question.options.len() < 2 {
            return Err(format!("question {index} has fewer than 2 options"));
        }
        if question.answer_index < 0 || question.answer_index as usize >= question.options.len() {
            return Err(format!("question {index} has out-of-range answer_index"));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_questions_accepts_fenced_output() {
        let content = r#"```json
[
  {"question": "What is 2+2?", "options": ["3", "4"], "answer_index": 1},
  {"question": "Capital of France?", "options": ["Paris", "Rome", "Oslo"], "answer_index": 0, "explanation": "Geography basics"}
]
```"#;
        let questions = parse_questions(content).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].options.len(), 3);
    }

    #[test]
    fn test_parse_questions_rejects_out_of_range_answer() {
        let content = r#"[{"question": "q", "options": ["a", "b"], "answer_index": 2}]"#;
        assert!(parse_questions(content).is_err());
    }

    #[test]
    fn test_parse_questions_rejects_single_option() {
        let content = r#"[{"question": "q", "options": ["only"], "answer_index": 0}]"#;
        assert!(parse_questions(content).is_err());
    }

    #[test]
    fn test_parse_questions_rejects_empty_list() {
        assert!(parse_questions("[]").is_err());
    }

    #[test]
    fn test_parse_questions_rejects_prose() {
        assert!(parse_questions("I cannot generate a quiz about that.").is_err());
    }
}
