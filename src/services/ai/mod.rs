pub mod client;
pub mod doubt_solver;
pub mod prompts;
pub mod quiz_generator;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ai::requests::{DoubtRequest, GenerateQuizRequest};
use crate::storage::Storage;

use client::AiClient;

pub struct AiService {
    storage: Option<Arc<dyn Storage>>,
    client: AiClient,
}

impl AiService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            client: AiClient::from_config(),
        }
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

    pub(crate) fn client(&self) -> &AiClient {
        &self.client
    }

    // 生成测验
    pub async fn generate_quiz(
        &self,
        quiz_request: GenerateQuizRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        quiz_generator::handle_generate_quiz(self, quiz_request, request).await
    }

    // 学习答疑
    pub async fn solve_doubt(
        &self,
        doubt_request: DoubtRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        doubt_solver::handle_solve_doubt(self, doubt_request, request).await
    }
}
