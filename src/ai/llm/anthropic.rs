//! Anthropic Messages API Integration

use super::{CompletionOptions, LlmClient, LlmProvider, LlmResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Messages APIのバージョンヘッダー
const API_VERSION: &str = "2023-06-01";

/// Anthropic APIクライアント
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    api_key: SecretString,
    model: String,
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AnthropicClient {
    /// 新しいクライアントを作成
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into_boxed_str()),
            model: LlmProvider::Anthropic.default_model().to_string(),
            client: Client::new(),
            base_url: "https://api.anthropic.com/v1".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// ビルダーパターン: モデル設定
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// ビルダーパターン: カスタムベースURL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// ビルダーパターン: タイムアウト設定
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request(&self, prompt: &str, options: &CompletionOptions) -> MessagesRequest {
        MessagesRequest {
            model: options.model.clone().unwrap_or_else(|| self.model.clone()),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

/// 最初のテキストブロックを取り出す
fn first_text(response: &MessagesResponse) -> Result<String> {
    response
        .content
        .iter()
        .find_map(|block| block.text.clone())
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| Error::Completion("No text content in Anthropic response".to_string()))
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<LlmResponse> {
        let start_time = Instant::now();
        let request = self.build_request(prompt, options);

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "Anthropic API error ({}): {}",
                status, error_text
            )));
        }

        let body: MessagesResponse = response.json().await?;
        let content = first_text(&body)?;
        let tokens_used = body
            .usage
            .map(|u| u.input_tokens + u.output_tokens)
            .unwrap_or(0);

        Ok(LlmResponse {
            content,
            provider: self.provider_name().to_string(),
            model: body.model.unwrap_or(request.model),
            tokens_used,
            response_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn provider_name(&self) -> &str {
        LlmProvider::Anthropic.name()
    }

    async fn health_check(&self) -> Result<()> {
        if self.api_key.expose_secret().starts_with("sk-ant-") {
            Ok(())
        } else {
            Err(Error::Config(
                "Anthropic API key must start with 'sk-ant-'".to_string(),
            ))
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    model: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: usize,
    output_tokens: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let client = AnthropicClient::new("sk-ant-test");
        let options = CompletionOptions::default().with_model("claude-3-5-sonnet-latest");
        let json = serde_json::to_value(client.build_request("Draft", &options)).unwrap();

        assert_eq!(json["model"], "claude-3-5-sonnet-latest");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["content"], "Draft");
    }

    #[test]
    fn test_first_text() {
        let body: MessagesResponse = serde_json::from_str(
            r#"{"model": "claude-3-haiku-20240307", "content": [{"type": "text", "text": "Post body"}],
                "usage": {"input_tokens": 10, "output_tokens": 20}}"#,
        )
        .unwrap();
        assert_eq!(first_text(&body).unwrap(), "Post body");

        let empty: MessagesResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(first_text(&empty).is_err());
    }

    #[test]
    fn test_health_check_key_format() {
        tokio_test::assert_ok!(tokio_test::block_on(
            AnthropicClient::new("sk-ant-abc").health_check()
        ));
        tokio_test::assert_err!(tokio_test::block_on(
            AnthropicClient::new("sk-abc").health_check()
        ));
    }
}
