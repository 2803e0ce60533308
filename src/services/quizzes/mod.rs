pub mod delete;
pub mod detail;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{QuizListParams, SubmitQuizRequest};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 当前用户的测验列表
    pub async fn list_quizzes(
        &self,
        query: QuizListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_quizzes(self, query, request).await
    }

    // 测验详情，非创建者视角不含答案
    pub async fn get_quiz(&self, quiz_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        detail::get_quiz(self, quiz_id, request).await
    }

    // 提交答案并判分
    pub async fn submit_quiz(
        &self,
        quiz_id: i64,
        submission: SubmitQuizRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_quiz(self, quiz_id, submission, request).await
    }

    // 删除测验
    pub async fn delete_quiz(
        &self,
        quiz_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_quiz(self, quiz_id, request).await
    }
}
