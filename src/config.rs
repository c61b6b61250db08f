//! Configuration
//!
//! Layered configuration: serialized defaults, then an optional TOML file,
//! then `POSTCRAFT_*` environment variables (`__` separates nested keys, e.g.
//! `POSTCRAFT_LLM__PROVIDER=openai`).

use crate::ai::content::generator::{GeneratorSettings, DEFAULT_AUDIENCE};
use crate::ai::content::{ContentGenerator, TemplateStore, Tone};
use crate::ai::llm::{
    AnthropicClient, CompletionOptions, LlmClient, LlmProvider, OllamaClient, OpenAiClient,
    ProviderChain,
};
use crate::logging::LogConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "postcraft.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "POSTCRAFT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostcraftConfig {
    pub generation: GenerationConfig,
    pub llm: LlmSettings,
    pub logging: LogConfig,
    pub catalog: CatalogConfig,
}

/// Generation defaults and limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub default_audience: String,
    pub default_tone: Tone,
    /// Upper bound for a single completion call, in seconds.
    pub completion_timeout_secs: u64,
    /// Pause between posts in a batch, in milliseconds.
    pub batch_delay_ms: u64,
    pub max_batch_size: usize,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let completion = CompletionOptions::default();
        Self {
            default_audience: DEFAULT_AUDIENCE.to_string(),
            default_tone: Tone::default(),
            completion_timeout_secs: 10,
            batch_delay_ms: 300,
            max_batch_size: 10,
            temperature: completion.temperature,
            top_p: completion.top_p,
            max_tokens: completion.max_tokens,
        }
    }
}

impl GenerationConfig {
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            completion_timeout: Duration::from_secs(self.completion_timeout_secs),
            batch_delay: Duration::from_millis(self.batch_delay_ms),
            completion: CompletionOptions {
                model: None,
                temperature: self.temperature,
                top_p: self.top_p,
                max_tokens: self.max_tokens,
            },
        }
    }
}

/// Completion provider settings.
///
/// API keys are never serialized. When absent they are read from
/// `OPENAI_API_KEY` / `ANTHROPIC_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Completion is attempted only when enabled.
    pub enabled: bool,
    pub provider: LlmProvider,
    /// Providers tried once each after the primary gives up.
    pub fallbacks: Vec<LlmProvider>,
    /// Model override for the primary provider.
    pub model: Option<String>,
    pub ollama_url: String,
    pub openai_base_url: Option<String>,
    pub anthropic_base_url: Option<String>,
    #[serde(skip_serializing)]
    pub openai_api_key: Option<SecretString>,
    #[serde(skip_serializing)]
    pub anthropic_api_key: Option<SecretString>,
    pub request_timeout_secs: u64,
    pub max_attempts: u32,
    pub backoff_ms: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: LlmProvider::Ollama,
            fallbacks: Vec::new(),
            model: None,
            ollama_url: "http://localhost:11434".to_string(),
            openai_base_url: None,
            anthropic_base_url: None,
            openai_api_key: None,
            anthropic_api_key: None,
            request_timeout_secs: 10,
            max_attempts: 3,
            backoff_ms: 1000,
        }
    }
}

fn key_or_env(key: &Option<SecretString>, var: &str) -> Option<String> {
    key.as_ref()
        .map(|k| k.expose_secret().to_string())
        .or_else(|| std::env::var(var).ok())
        .filter(|k| !k.trim().is_empty())
}

impl LlmSettings {
    pub fn openai_key(&self) -> Option<String> {
        key_or_env(&self.openai_api_key, "OPENAI_API_KEY")
    }

    pub fn anthropic_key(&self) -> Option<String> {
        key_or_env(&self.anthropic_api_key, "ANTHROPIC_API_KEY")
    }

    /// Builds a client for one provider, or `None` when its API key is missing.
    pub fn client_for(
        &self,
        provider: LlmProvider,
        model: Option<&str>,
    ) -> Option<Arc<dyn LlmClient>> {
        let timeout = Duration::from_secs(self.request_timeout_secs);
        let model = model.unwrap_or(provider.default_model());

        let client: Arc<dyn LlmClient> = match provider {
            LlmProvider::Ollama => Arc::new(
                OllamaClient::new()
                    .with_base_url(self.ollama_url.as_str())
                    .with_model(model)
                    .with_timeout(timeout),
            ),
            LlmProvider::OpenAI => {
                let mut client = OpenAiClient::new(self.openai_key()?)
                    .with_model(model)
                    .with_timeout(timeout);
                if let Some(url) = &self.openai_base_url {
                    client = client.with_base_url(url.as_str());
                }
                Arc::new(client)
            }
            LlmProvider::Anthropic => {
                let mut client = AnthropicClient::new(self.anthropic_key()?)
                    .with_model(model)
                    .with_timeout(timeout);
                if let Some(url) = &self.anthropic_base_url {
                    client = client.with_base_url(url.as_str());
                }
                Arc::new(client)
            }
        };

        Some(client)
    }

    /// Builds the provider chain, or `None` when completion is disabled or no
    /// provider can be constructed.
    pub fn build_client(&self) -> Option<Arc<dyn LlmClient>> {
        if !self.enabled {
            return None;
        }

        let mut order = vec![self.provider];
        for provider in &self.fallbacks {
            if !order.contains(provider) {
                order.push(*provider);
            }
        }

        let mut clients = Vec::new();
        for provider in order {
            let model = (provider == self.provider)
                .then_some(self.model.as_deref())
                .flatten();
            match self.client_for(provider, model) {
                Some(client) => clients.push(client),
                None => warn!("⚠️ APIキー未設定のためスキップ: {}", provider),
            }
        }

        let mut clients = clients.into_iter();
        let primary = clients.next()?;
        let chain = clients.fold(
            ProviderChain::new(primary)
                .with_max_attempts(self.max_attempts)
                .with_backoff(Duration::from_millis(self.backoff_ms))
                .with_call_timeout(Duration::from_secs(self.request_timeout_secs)),
            |chain, client| chain.with_fallback(client),
        );

        info!("🤖 補完プロバイダー: {}", chain.provider_names().join(" → "));
        Some(Arc::new(chain))
    }
}

/// Template catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn load_store(&self) -> crate::Result<TemplateStore> {
        match &self.path {
            Some(path) => {
                let store = TemplateStore::from_json_file(path)?;
                info!("📚 テンプレートカタログを読み込み: {}", path.display());
                Ok(store)
            }
            None => Ok(TemplateStore::builtin()),
        }
    }
}

impl PostcraftConfig {
    /// Loads `postcraft.toml` (if present) and environment overrides.
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load_from_env().build()
    }

    /// Wires the catalog, generation settings and completion provider into a generator.
    pub fn build_generator(&self) -> Result<ContentGenerator> {
        let store = self
            .catalog
            .load_store()
            .context("Failed to load template catalog")?;

        let mut generator = ContentGenerator::new(Arc::new(store))
            .with_settings(self.generation.generator_settings());

        if let Some(client) = self.llm.build_client() {
            generator = generator.with_llm(client);
        }

        Ok(generator)
    }

    /// Renders an annotated sample configuration.
    pub fn sample_config() -> Result<String> {
        let sample = PostcraftConfig {
            llm: LlmSettings {
                fallbacks: vec![LlmProvider::OpenAI],
                ..LlmSettings::default()
            },
            ..PostcraftConfig::default()
        };

        let toml_content =
            toml::to_string_pretty(&sample).context("Failed to serialize sample config")?;

        Ok(format!(
            r#"# postcraft configuration
#
# このファイルを postcraft.toml として保存してください
# 環境変数での上書きも可能です (例: POSTCRAFT_LLM__PROVIDER=openai)
#
# APIキーはファイルに書かず、環境変数で渡すことを推奨します:
#   OPENAI_API_KEY / ANTHROPIC_API_KEY
#   (または POSTCRAFT_LLM__OPENAI_API_KEY / POSTCRAFT_LLM__ANTHROPIC_API_KEY)

{}
# 設定説明:
#
# [generation]
# default_audience = 対象オーディエンスの既定値
# default_tone = conversational | bold | actionable | visionary | professional
# completion_timeout_secs = 単一プロバイダー呼び出しの上限時間。超えた場合はテンプレート生成に切り替え
# batch_delay_ms = 一括生成時の投稿間の待機
#
# [llm]
# enabled = true にすると補完サービスを先に試行
# provider = ollama | openai | anthropic
# fallbacks = 主プロバイダー失敗時に順に試すプロバイダー
# request_timeout_secs = プロバイダー呼び出し1回の上限時間 (チェーン全体は試行回数分まで待つ)
#
# [logging]
# level = trace | debug | info | warn | error (EnvFilter 式も可)
# rotation = daily | hourly | never
#
# [catalog]
# path = JSON形式のテンプレートカタログ (未指定なら組み込みカタログ)
"#,
            toml_content
        ))
    }

    /// Writes the annotated sample configuration to `path`.
    pub fn generate_sample_config(path: &Path) -> Result<()> {
        let content = Self::sample_config()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("📝 サンプル設定ファイルを生成しました: {}", path.display());
        Ok(())
    }
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    config_file: Option<String>,
    load_env: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            config_file: None,
            load_env: false,
        }
    }

    /// Load configuration from file
    pub fn load_from_file(mut self, path: Option<&str>) -> Self {
        self.config_file = path.map(String::from);
        self
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<PostcraftConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&PostcraftConfig::default())
                .context("Failed to serialize default configuration")?,
        );

        match &self.config_file {
            // An explicit path must exist
            Some(config_path) => {
                builder = builder.add_source(File::with_name(config_path).required(true));
            }
            None => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
        }

        if self.load_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("llm.fallbacks"),
            );
        }

        let config: PostcraftConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::new()
            .load_from_file(None)
            .build()
            .unwrap();
        assert_eq!(config.generation.default_audience, "business leaders");
        assert_eq!(config.generation.completion_timeout_secs, 10);
        assert_eq!(config.generation.batch_delay_ms, 300);
        assert!(!config.llm.enabled);
        assert_eq!(config.llm.provider, LlmProvider::Ollama);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[generation]
default_tone = "bold"
batch_delay_ms = 0

[llm]
enabled = true
provider = "anthropic"
fallbacks = ["ollama"]
anthropic_api_key = "sk-ant-from-file"

[logging]
level = "debug"
"#,
        );

        let config = ConfigLoader::new()
            .load_from_file(file.path().to_str())
            .build()
            .unwrap();

        assert_eq!(config.generation.default_tone, Tone::Bold);
        assert_eq!(config.generation.batch_delay_ms, 0);
        assert_eq!(config.generation.completion_timeout_secs, 10);
        assert!(config.llm.enabled);
        assert_eq!(config.llm.provider, LlmProvider::Anthropic);
        assert_eq!(config.llm.fallbacks, vec![LlmProvider::Ollama]);
        assert_eq!(
            config.llm.anthropic_key().as_deref(),
            Some("sk-ant-from-file")
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = ConfigLoader::new()
            .load_from_file(Some("/nonexistent/postcraft.toml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_client_disabled() {
        assert!(LlmSettings::default().build_client().is_none());
    }

    #[test]
    fn test_build_client_chain() {
        let settings = LlmSettings {
            enabled: true,
            provider: LlmProvider::Ollama,
            fallbacks: vec![LlmProvider::Ollama, LlmProvider::Anthropic],
            anthropic_api_key: Some(SecretString::new("sk-ant-test".into())),
            ..LlmSettings::default()
        };

        let client = settings.build_client().unwrap();
        assert_eq!(client.provider_name(), "ollama");
    }

    #[test]
    fn test_generator_settings() {
        let settings = GenerationConfig::default().generator_settings();
        assert_eq!(settings.completion_timeout, Duration::from_secs(10));
        assert_eq!(settings.batch_delay, Duration::from_millis(300));
        assert_eq!(settings.completion.max_tokens, 1000);
    }

    #[test]
    fn test_sample_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postcraft.toml");
        PostcraftConfig::generate_sample_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[generation]"));
        assert!(!content.contains("api_key ="));

        let config = ConfigLoader::new()
            .load_from_file(path.to_str())
            .build()
            .unwrap();
        assert_eq!(config.llm.fallbacks, vec![LlmProvider::OpenAI]);
    }

    #[test]
    fn test_catalog_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br##"{
                "categories": [{"id": "Hiring", "name": "Hiring", "description": "Recruiting stories",
                                "tags": ["team"], "icon": "H", "color": "#000000"}],
                "templates": [{"id": "hr_001", "title": "First Hire", "category_id": "Hiring",
                               "body_pattern": "Our first hire taught us {lesson}.",
                               "placeholders": ["lesson"], "engagement": "high", "length": "short",
                               "hashtag_hint": "#Hiring", "preview": "A hiring story"}]
            }"##,
        )
        .unwrap();

        let catalog = CatalogConfig {
            path: Some(file.path().to_path_buf()),
        };
        let store = catalog.load_store().unwrap();
        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.templates_by_category("Hiring").len(), 1);
    }
}
