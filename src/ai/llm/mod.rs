//! Large Language Model Integration
//!
//! テキスト補完サービス（OpenAI、Ollama、Anthropic）の統合

pub mod anthropic;
pub mod chain;
pub mod ollama;
pub mod openai;

pub use anthropic::AnthropicClient;
pub use chain::ProviderChain;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// LLMプロバイダー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// ローカルOllamaサーバー
    Ollama,
    /// Anthropic Messages API
    Anthropic,
    /// OpenAI Chat Completions API
    OpenAI,
}

impl LlmProvider {
    /// 既定のモデル名
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Ollama => "llama3.2",
            LlmProvider::Anthropic => "claude-3-haiku-20240307",
            LlmProvider::OpenAI => "gpt-3.5-turbo",
        }
    }

    /// 識別名
    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Ollama => "ollama",
            LlmProvider::Anthropic => "anthropic",
            LlmProvider::OpenAI => "openai",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(LlmProvider::Ollama),
            "anthropic" | "claude" => Ok(LlmProvider::Anthropic),
            "openai" => Ok(LlmProvider::OpenAI),
            other => Err(format!("unknown LLM provider '{}'", other)),
        }
    }
}

/// 補完オプション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// モデル名（未指定ならクライアントの既定）
    pub model: Option<String>,
    /// 温度パラメータ
    pub temperature: f32,
    /// Top-pサンプリング
    pub top_p: f32,
    /// 最大トークン数
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 1000,
        }
    }
}

impl CompletionOptions {
    /// モデルを設定
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// 温度を設定
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// 最大トークン数を設定
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// LLMレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// 生成されたテキスト
    pub content: String,
    /// 応答したプロバイダー名
    pub provider: String,
    /// モデル名
    pub model: String,
    /// 使用トークン数
    pub tokens_used: usize,
    /// レスポンス時間（ミリ秒）
    pub response_time_ms: u64,
}

/// LLMクライアントトレイト
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// プロンプトを補完
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<LlmResponse>;

    /// プロバイダー名
    fn provider_name(&self) -> &str;

    /// ヘルスチェック
    async fn health_check(&self) -> Result<()>;

    /// 呼び出し1回の制限時間から、`complete` 全体に許す時間を求める
    fn completion_budget(&self, per_call: Duration) -> Duration {
        per_call
    }
}
