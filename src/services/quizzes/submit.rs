use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::middlewares::RequireJWT;
use crate::models::badges::entities::{BADGE_FIRST_QUIZ, BADGE_PERFECT_SCORE};
use crate::models::quizzes::entities::QuizQuestion;
use crate::models::quizzes::requests::SubmitQuizRequest;
use crate::models::quizzes::responses::{QuestionResult, QuizResultResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::badges::award::award_badge_by_slug;

pub async fn submit_quiz(
    service: &QuizService,
    quiz_id: i64,
    submission: SubmitQuizRequest,
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

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get quiz: {e}"),
                )),
            );
        }
    };

    // 多余的答案是客户端错误；不足的部分按未作答判分
    if submission.answers.len() > quiz.questions.len() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::QuizAnswersInvalid,
            format!(
                "答案数量超过题目数量：最多 {}，实际 {}",
                quiz.questions.len(),
                submission.answers.len()
            ),
        )));
    }

    let (score, results) = grade_quiz(&quiz.questions, &submission.answers);
    let total = quiz.questions.len() as i64;

    // 授予成就徽章，失败不影响判分结果
    let mut awarded_badges = Vec::new();
    if let Some(badge) = award_badge_by_slug(&storage, current_user.id, BADGE_FIRST_QUIZ).await {
        awarded_badges.push(badge);
    }
    if score == total
        && let Some(badge) =
            award_badge_by_slug(&storage, current_user.id, BADGE_PERFECT_SCORE).await
    {
        awarded_badges.push(badge);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        QuizResultResponse {
            quiz_id,
            score,
            total,
            results,
            awarded_badges,
        },
        "判分完成",
    )))
}

/// 逐题判分
///
/// 负数或越界的选项下标视为未作答，计为错误；
/// 答案向量比题目短时，缺失的题目同样按未作答计。
fn grade_quiz(questions: &[QuizQuestion], answers: &[i32]) -> (i64, Vec<QuestionResult>) {
    let mut score = 0i64;
    let mut results = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        let chosen_index = answers.get(i).copied().filter(|&answer| {
            answer >= 0 && (answer as usize) < question.options.len()
        });
        let correct = chosen_index == Some(question.answer_index);

        if correct {
            score += 1;
        }

        results.push(QuestionResult {
            correct,
            correct_index: question.answer_index,
            chosen_index,
        });
    }

    (score, results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer_index: i32) -> QuizQuestion {
        QuizQuestion {
            question: "q".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            answer_index,
            explanation: None,
        }
    }

    #[test]
    fn test_grade_all_correct() {
        let questions = vec![question(0), question(2)];
        let (score, results) = grade_quiz(&questions, &[0, 2]);
        assert_eq!(score, 2);
        assert!(results.iter().all(|r| r.correct));
    }

    #[test]
    fn test_grade_partial() {
        let questions = vec![question(0), question(1), question(2)];
        let (score, results) = grade_quiz(&questions, &[0, 2, 2]);
        assert_eq!(score, 2);
        assert_eq!(
            results[1],
            QuestionResult {
                correct: false,
                correct_index: 1,
                chosen_index: Some(2),
            }
        );
    }

    #[test]
    fn test_grade_out_of_range_answer_counts_as_unanswered() {
        let questions = vec![question(1)];
        let (score, results) = grade_quiz(&questions, &[5]);
        assert_eq!(score, 0);
        assert_eq!(results[0].chosen_index, None);

        let (score, results) = grade_quiz(&questions, &[-1]);
        assert_eq!(score, 0);
        assert_eq!(results[0].chosen_index, None);
    }

    #[test]
    fn test_grade_short_answer_vector_marks_rest_unanswered() {
        let questions = vec![question(0), question(1), question(2)];
        let (score, results) = grade_quiz(&questions, &[0]);
        assert_eq!(score, 1);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].chosen_index, Some(0));
        assert!(results[0].correct);
        for result in &results[1..] {
            assert_eq!(result.chosen_index, None);
            assert!(!result.correct);
        }
    }

    #[test]
    fn test_grade_empty_quiz() {
        let (score, results) = grade_quiz(&[], &[]);
        assert_eq!(score, 0);
        assert!(results.is_empty());
    }
}
