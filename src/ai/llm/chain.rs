//! Provider Chain
//!
//! 主プロバイダーをリトライし、失敗したら予備プロバイダーを順に試す

use super::{CompletionOptions, LlmClient, LlmResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// プロバイダーチェーン
#[derive(Clone)]
pub struct ProviderChain {
    primary: Arc<dyn LlmClient>,
    fallbacks: Vec<Arc<dyn LlmClient>>,
    max_attempts: u32,
    backoff: Duration,
    call_timeout: Duration,
}

impl ProviderChain {
    /// 主プロバイダーからチェーンを作成
    ///
    /// 既定: 3回試行、1秒 × 試行回数の待機、1呼び出し10秒まで
    pub fn new(primary: Arc<dyn LlmClient>) -> Self {
        Self {
            primary,
            fallbacks: Vec::new(),
            max_attempts: 3,
            backoff: Duration::from_millis(1000),
            call_timeout: Duration::from_secs(10),
        }
    }

    /// 予備プロバイダーを追加
    pub fn with_fallback(mut self, fallback: Arc<dyn LlmClient>) -> Self {
        self.fallbacks.push(fallback);
        self
    }

    /// 主プロバイダーの試行回数を設定（最低1回）
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// リトライ待機の基準時間を設定
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// プロバイダー呼び出し1回あたりの制限時間を設定
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// 全試行を終えるまでの最長時間
    pub fn worst_case_duration(&self) -> Duration {
        let calls = self.max_attempts + self.fallbacks.len() as u32;
        let backoff: u32 = (1..self.max_attempts).sum();
        self.call_timeout * calls + self.backoff * backoff
    }

    async fn call(
        &self,
        client: &Arc<dyn LlmClient>,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<LlmResponse> {
        tokio::time::timeout(self.call_timeout, client.complete(prompt, options))
            .await
            .map_err(|_| Error::Timeout(self.call_timeout.as_secs()))?
    }

    /// ヘルスチェックに通ったクライアントでチェーンを作成
    ///
    /// 最初に使えたものを主プロバイダー、残りを予備とする。
    pub async fn from_available(candidates: Vec<Arc<dyn LlmClient>>) -> Option<Self> {
        let mut available = Vec::new();
        for client in candidates {
            match client.health_check().await {
                Ok(()) => {
                    info!("✅ プロバイダー利用可能: {}", client.provider_name());
                    available.push(client);
                }
                Err(e) => {
                    info!("❌ プロバイダー利用不可: {} ({})", client.provider_name(), e);
                }
            }
        }

        let mut iter = available.into_iter();
        let primary = iter.next()?;
        let chain = iter.fold(Self::new(primary), |chain, client| chain.with_fallback(client));
        Some(chain)
    }

    /// 登録済みプロバイダー名（主、予備の順）
    pub fn provider_names(&self) -> Vec<String> {
        std::iter::once(&self.primary)
            .chain(self.fallbacks.iter())
            .map(|client| client.provider_name().to_string())
            .collect()
    }
}

#[async_trait]
impl LlmClient for ProviderChain {
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<LlmResponse> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match self.call(&self.primary, prompt, options).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(
                        "❌ 試行{}失敗 ({}): {}",
                        attempt,
                        self.primary.provider_name(),
                        e
                    );
                    last_error = Some(e);
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.backoff * attempt).await;
                    }
                }
            }
        }

        for fallback in &self.fallbacks {
            info!("🔄 予備プロバイダーを試行: {}", fallback.provider_name());
            match self.call(fallback, prompt, options).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!("❌ 予備プロバイダー失敗 ({}): {}", fallback.provider_name(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::Completion("All completion providers failed".to_string())))
    }

    fn provider_name(&self) -> &str {
        self.primary.provider_name()
    }

    fn completion_budget(&self, per_call: Duration) -> Duration {
        self.worst_case_duration().max(per_call)
    }

    async fn health_check(&self) -> Result<()> {
        if self.primary.health_check().await.is_ok() {
            return Ok(());
        }
        for fallback in &self.fallbacks {
            if fallback.health_check().await.is_ok() {
                return Ok(());
            }
        }
        Err(Error::Completion(
            "No healthy completion provider".to_string(),
        ))
    }
}
