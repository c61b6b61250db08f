//! OpenAI API Integration
//!
//! Chat Completions APIによるテキスト補完

use super::{CompletionOptions, LlmClient, LlmProvider, LlmResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// OpenAI APIクライアント
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    /// APIキー
    api_key: SecretString,
    /// モデル名
    model: String,
    /// HTTPクライアント
    client: Client,
    /// APIベースURL
    base_url: String,
    /// リクエストタイムアウト
    timeout: Duration,
}

impl OpenAiClient {
    /// 新しいOpenAIクライアントを作成
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into_boxed_str()),
            model: LlmProvider::OpenAI.default_model().to_string(),
            client: Client::new(),
            base_url: "https://api.openai.com/v1".to_string(),
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

    /// リクエスト本文を作成
    fn build_request(&self, prompt: &str, options: &CompletionOptions) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: options.model.clone().unwrap_or_else(|| self.model.clone()),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
        }
    }
}

/// レスポンス本文から生成テキストを取り出す
fn extract_content(response: &ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| Error::Completion("No content in OpenAI response".to_string()))
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<LlmResponse> {
        let start_time = Instant::now();
        let request = self.build_request(prompt, options);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let api_response: ChatCompletionResponse = response.json().await?;
        let content = extract_content(&api_response)?;

        Ok(LlmResponse {
            content,
            provider: self.provider_name().to_string(),
            model: api_response.model,
            tokens_used: api_response.usage.map(|u| u.total_tokens).unwrap_or(0),
            response_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn provider_name(&self) -> &str {
        LlmProvider::OpenAI.name()
    }

    async fn health_check(&self) -> Result<()> {
        if self.api_key.expose_secret().starts_with("sk-") {
            Ok(())
        } else {
            Err(Error::Config("OpenAI API key must start with 'sk-'".to_string()))
        }
    }
}

/// チャットメッセージ
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// チャット完了リクエスト
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

/// チャット完了レスポンス
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

/// 選択肢
#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// トークン使用量
#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: usize,
}
