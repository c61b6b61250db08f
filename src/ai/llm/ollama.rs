//! Ollama Integration
//!
//! ローカルOllamaサーバーの `/api/generate` によるテキスト補完

use super::{CompletionOptions, LlmClient, LlmProvider, LlmResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Ollamaクライアント
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// モデル名
    model: String,
    /// HTTPクライアント
    client: Client,
    /// サーバーURL
    base_url: String,
    /// リクエストタイムアウト
    timeout: Duration,
}

impl OllamaClient {
    /// 既定のローカルサーバー向けクライアントを作成
    pub fn new() -> Self {
        Self {
            model: LlmProvider::Ollama.default_model().to_string(),
            client: Client::new(),
            base_url: "http://localhost:11434".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// ビルダーパターン: モデル設定
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// ビルダーパターン: サーバーURL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// ビルダーパターン: タイムアウト設定
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// リクエスト本文を作成
    fn build_request(&self, prompt: &str, options: &CompletionOptions) -> GenerateRequest {
        GenerateRequest {
            model: options.model.clone().unwrap_or_else(|| self.model.clone()),
            prompt: prompt.to_string(),
            stream: false,
            options: GenerateOptions {
                temperature: options.temperature,
                top_p: options.top_p,
                num_predict: options.max_tokens,
            },
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<LlmResponse> {
        let start_time = Instant::now();
        let request = self.build_request(prompt, options);

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Completion(format!(
                "Ollama API error: {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response.json().await?;
        if body.response.trim().is_empty() {
            return Err(Error::Completion("Empty response from Ollama".to_string()));
        }

        Ok(LlmResponse {
            content: body.response,
            provider: self.provider_name().to_string(),
            model: body.model.unwrap_or(request.model),
            tokens_used: body.eval_count.unwrap_or(0),
            response_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn provider_name(&self) -> &str {
        LlmProvider::Ollama.name()
    }

    async fn health_check(&self) -> Result<()> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(Duration::from_secs(3))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Completion(format!(
                "Ollama health check failed: {}",
                response.status()
            )))
        }
    }
}

/// 生成リクエスト
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

/// サンプリングオプション
#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

/// 生成レスポンス
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    model: Option<String>,
    eval_count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let client = OllamaClient::new().with_model("mistral");
        let request = client.build_request("hello", &CompletionOptions::default().with_max_tokens(200));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "mistral");
        assert_eq!(json["prompt"], "hello");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 200);
    }

    #[test]
    fn test_base_url_normalized() {
        let client = OllamaClient::new().with_base_url("http://gpu-box:11434/");
        assert_eq!(client.base_url, "http://gpu-box:11434");
    }

    #[test]
    fn test_response_parsing() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"model": "llama3.2", "response": "Hi", "done": true}"#)
                .unwrap();
        assert_eq!(body.response, "Hi");
        assert_eq!(body.model.as_deref(), Some("llama3.2"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        let client = OllamaClient::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_millis(500));
        let result = client.complete("hello", &CompletionOptions::default()).await;
        assert!(result.unwrap_err().is_completion_failure());
    }
}
