//! AI Integration Module
//!
//! テキスト補完サービス統合とコンテンツ生成機能を提供

pub mod content;
pub mod llm;

pub use llm::{CompletionOptions, LlmClient, LlmProvider, LlmResponse};
