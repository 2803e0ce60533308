//! 托管模型 API 客户端（OpenAI 兼容的 chat completion 接口）

use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::{LearnSphereError, Result};
use crate::models::ai::completion::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AiClient {
    /// 从全局配置构建客户端
    pub fn from_config() -> Self {
        let config = AppConfig::get();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.ai.timeout))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.ai.base_url.trim_end_matches('/').to_string(),
            api_key: config.ai.api_key.clone(),
            model: config.ai.model.clone(),
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
        }
    }

    /// 发起一次 chat completion 调用
    ///
    /// 网络错误、超时和非 2xx 状态码都归入 `AiUpstream` 错误。
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Model API returned status {}: {}", status, body);
            return Err(LearnSphereError::ai_upstream(format!(
                "model API returned status {status}"
            )));
        }

        let completion = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            LearnSphereError::ai_response_invalid(format!("无法解析模型响应: {e}"))
        })?;

        Ok(completion)
    }
}
