//! Content Generator
//!
//! テキスト補完サービスを優先し、失敗時はテンプレートで投稿を生成する

use super::compositor::PostCompositor;
use super::hashtags::generate_relevant_hashtags;
use super::persona::build_expert_profile;
use super::placeholder::has_unfilled;
use super::post::{ContentSource, GeneratedPost};
use super::strategy::{batch_tone, ContentStrategy, Tone};
use super::template::{TemplateCategory, TemplateStore, TemplateStructure};
use crate::ai::llm::{CompletionOptions, LlmClient, LlmResponse};
use crate::error::{Error, Result};
use crate::random::RandomSource;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 既定のオーディエンス
pub const DEFAULT_AUDIENCE: &str = "business leaders";

/// 補完結果として採用する最小文字数（これ以下は失敗扱い）
pub const MIN_COMPLETION_CHARS: usize = 50;

/// 補完結果の最大文字数
pub const MAX_COMPLETION_CHARS: usize = 2000;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"));

/// 生成リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// トピック（必須）
    pub topic: String,
    /// オーディエンス
    #[serde(default = "default_audience")]
    pub audience: String,
    /// トーン
    #[serde(default)]
    pub tone: Tone,
    /// 追加コンテキスト
    #[serde(default)]
    pub context: Option<String>,
    /// 戦略をランダムに選ぶか
    #[serde(default)]
    pub vary_strategy: bool,
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

impl GenerationRequest {
    /// 新規リクエストを作成
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: default_audience(),
            tone: Tone::default(),
            context: None,
            vary_strategy: false,
        }
    }

    /// オーディエンスを設定
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// トーンを設定
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// コンテキストを設定
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// 戦略のバリエーションを要求
    pub fn with_variety(mut self, vary_strategy: bool) -> Self {
        self.vary_strategy = vary_strategy;
        self
    }

    /// リクエストを検証
    ///
    /// `{name}` 形式の文字列はテンプレートの穴と区別できないため受け付けない。
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::InvalidInput("topic must not be empty".to_string()));
        }
        for (field, value) in [("topic", &self.topic), ("audience", &self.audience)] {
            if has_unfilled(value) {
                return Err(Error::InvalidInput(format!(
                    "{} must not contain {{placeholder}} tokens: {}",
                    field,
                    value.trim()
                )));
            }
        }
        Ok(())
    }

    /// 前後の空白を除いたトピック
    pub fn topic(&self) -> &str {
        self.topic.trim()
    }

    /// 空なら既定値を使うオーディエンス
    pub fn audience(&self) -> &str {
        let audience = self.audience.trim();
        if audience.is_empty() {
            DEFAULT_AUDIENCE
        } else {
            audience
        }
    }
}

/// 生成された本文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// 本文
    pub content: String,
    /// 使用した戦略
    pub strategy: ContentStrategy,
    /// 生成元
    pub source: ContentSource,
}

/// テンプレートのカスタマイズ結果
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizedTemplate {
    /// 本文
    pub content: String,
    /// 生成元
    pub source: ContentSource,
    /// 値が与えられなかったプレースホルダー（ローカル展開時のみ）
    pub unfilled: Vec<String>,
}

/// 生成設定
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// 補完呼び出し1回あたりのタイムアウト（チェーンは全試行分に広げる）
    pub completion_timeout: Duration,
    /// 一括生成時の投稿間の待機
    pub batch_delay: Duration,
    /// 補完オプション
    pub completion: CompletionOptions,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            completion_timeout: Duration::from_secs(10),
            batch_delay: Duration::from_millis(300),
            completion: CompletionOptions::default(),
        }
    }
}

/// コンテンツ生成器
#[derive(Clone)]
pub struct ContentGenerator {
    store: Arc<TemplateStore>,
    compositor: PostCompositor,
    llm: Option<Arc<dyn LlmClient>>,
    settings: GeneratorSettings,
}

impl ContentGenerator {
    /// テンプレートストアを指定して作成
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self {
            store,
            compositor: PostCompositor::default(),
            llm: None,
            settings: GeneratorSettings::default(),
        }
    }

    /// テキスト補完サービスを設定
    pub fn with_llm(mut self, llm: Arc<dyn LlmClient>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// コンポジターを設定
    pub fn with_compositor(mut self, compositor: PostCompositor) -> Self {
        self.compositor = compositor;
        self
    }

    /// 乱数源を設定
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.compositor = PostCompositor::with_random(rng);
        self
    }

    /// 生成設定を置き換える
    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 補完タイムアウトを設定
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.settings.completion_timeout = timeout;
        self
    }

    /// 一括生成の待機時間を設定
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.settings.batch_delay = delay;
        self
    }

    /// テンプレートストア
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// 補完サービスが設定されているか
    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// リクエストに対する戦略を選ぶ
    ///
    /// バリエーション要求時のみランダム、それ以外はトーン対応表に従う。
    pub fn select_strategy(&self, request: &GenerationRequest) -> ContentStrategy {
        if request.vary_strategy {
            ContentStrategy::random(self.compositor.random())
        } else {
            request.tone.strategy()
        }
    }

    /// 本文を生成
    ///
    /// 補完サービスの失敗は呼び出し元に返さず、テンプレート生成に切り替える。
    pub async fn generate_content(&self, request: &GenerationRequest) -> Result<GeneratedContent> {
        request.validate()?;
        let strategy = self.select_strategy(request);
        self.generate_with_strategy(request, strategy).await
    }

    async fn generate_with_strategy(
        &self,
        request: &GenerationRequest,
        strategy: ContentStrategy,
    ) -> Result<GeneratedContent> {
        let topic = request.topic();
        let audience = request.audience();
        let profile = build_expert_profile(topic, audience);

        if self.llm.is_some() {
            let prompt = build_generation_prompt(
                topic,
                audience,
                request.tone,
                request.context.as_deref(),
            );
            match self.complete(&prompt).await {
                Ok(response) => {
                    let mut content = response.content;
                    if !content.contains('#') {
                        content.push_str("\n\n");
                        content.push_str(&generate_relevant_hashtags(topic, &profile));
                    }
                    info!(
                        "🤖 補完サービスで生成: topic={}, provider={}",
                        topic, response.provider
                    );
                    return Ok(GeneratedContent {
                        content,
                        strategy,
                        source: ContentSource::Completion(response.provider),
                    });
                }
                Err(e) => {
                    warn!("⚠️ 補完サービス失敗、テンプレートで生成: {}", e);
                }
            }
        }

        let content = self
            .compositor
            .craft_post(topic, audience, strategy, &profile);
        info!(
            "✍️ テンプレートで生成: topic={}, strategy={}, expert={}",
            topic, strategy, profile.expert_type
        );

        Ok(GeneratedContent {
            content,
            strategy,
            source: ContentSource::Template,
        })
    }

    /// 投稿を生成（下書き）
    pub async fn generate_post(&self, request: &GenerationRequest) -> Result<GeneratedPost> {
        let generated = self.generate_content(request).await?;
        Ok(GeneratedPost::draft(
            generated.content,
            request.topic(),
            request.audience(),
            request.tone,
            generated.strategy,
            generated.source,
        ))
    }

    /// 複数投稿を順番に生成
    ///
    /// i 番目の投稿は固定ローテーションの i % 5 番目のトーンで作る。
    pub async fn generate_multiple_posts(
        &self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<GeneratedPost>> {
        request.validate()?;
        info!("🔥 {}件の投稿を生成: topic={}", count, request.topic());

        let mut posts = Vec::with_capacity(count);
        for i in 0..count {
            if i > 0 && !self.settings.batch_delay.is_zero() {
                tokio::time::sleep(self.settings.batch_delay).await;
            }

            let tone = batch_tone(i);
            let strategy = tone.strategy();
            let variant = request.clone().with_tone(tone);
            let generated = self.generate_with_strategy(&variant, strategy).await?;

            posts.push(
                GeneratedPost::draft(
                    generated.content,
                    variant.topic(),
                    variant.audience(),
                    tone,
                    strategy,
                    generated.source,
                )
                .with_approach(strategy),
            );
        }

        Ok(posts)
    }

    /// テンプレートをカスタマイズ
    ///
    /// 補完サービスに穴埋めを依頼し、失敗時は与えられた値でローカルに展開する。
    pub async fn customize_template(
        &self,
        template: &TemplateStructure,
        context: &str,
        values: &HashMap<String, String>,
    ) -> Result<CustomizedTemplate> {
        let category = self.store.category(&template.category_id).ok_or_else(|| {
            Error::NotFound(format!("category '{}'", template.category_id))
        })?;

        if self.llm.is_some() {
            let prompt = build_template_prompt(template, category, values, context);
            match self.complete(&prompt).await {
                Ok(response) => {
                    info!(
                        "🤖 テンプレート {} を補完サービスで展開 ({})",
                        template.id, response.provider
                    );
                    return Ok(CustomizedTemplate {
                        content: response.content,
                        source: ContentSource::Completion(response.provider),
                        unfilled: Vec::new(),
                    });
                }
                Err(e) => {
                    warn!("⚠️ テンプレート補完失敗、ローカル展開に切り替え: {}", e);
                }
            }
        }

        let rendered = template.render(values);
        debug!(
            "テンプレート {} をローカル展開 (未入力: {:?})",
            template.id, rendered.unfilled
        );
        Ok(CustomizedTemplate {
            content: rendered.content,
            source: ContentSource::Template,
            unfilled: rendered.unfilled,
        })
    }

    /// 補完サービスを呼び出し、結果を整形・検証する
    async fn complete(&self, prompt: &str) -> Result<LlmResponse> {
        let llm = self
            .llm
            .as_ref()
            .ok_or_else(|| Error::Completion("No completion service configured".to_string()))?;

        let budget = llm.completion_budget(self.settings.completion_timeout);
        let mut response =
            tokio::time::timeout(budget, llm.complete(prompt, &self.settings.completion))
                .await
                .map_err(|_| Error::Timeout(budget.as_secs()))??;

        let cleaned = clean_completion(&response.content);
        if cleaned.chars().count() <= MIN_COMPLETION_CHARS {
            return Err(Error::Completion(format!(
                "completion too short ({} chars)",
                cleaned.chars().count()
            )));
        }

        response.content = cleaned;
        Ok(response)
    }
}

/// 補完結果を整形
///
/// 前後の空白と一層分の引用符を除き、3行以上の改行を空行1つにまとめる。
pub fn clean_completion(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(['"', '\''])
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(['"', '\'']).unwrap_or(trimmed);

    let collapsed = BLANK_LINES.replace_all(trimmed.trim(), "\n\n");

    collapsed.chars().take(MAX_COMPLETION_CHARS).collect()
}

/// 投稿生成用のプロンプトを作成
pub fn build_generation_prompt(
    topic: &str,
    audience: &str,
    tone: Tone,
    context: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Create a professional LinkedIn post about \"{}\" targeted at \"{}\" with a \"{}\" tone.\n\n",
        topic, audience, tone
    );
    prompt.push_str("Requirements:\n");
    prompt.push_str("- 150-400 characters for optimal engagement\n");
    prompt.push_str("- Include 3-5 relevant hashtags\n");
    prompt.push_str("- Add a question or call-to-action to encourage engagement\n");
    prompt.push_str("- Use professional language appropriate for LinkedIn\n");
    prompt.push_str("- Include relevant emojis where appropriate\n");
    prompt.push_str("- Structure with clear paragraphs\n\n");

    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("Additional context: {}\n\n", context.trim()));
    }

    prompt.push_str(
        "Please generate only the post content without any additional explanations or formatting.",
    );
    prompt
}

/// テンプレート穴埋め用のプロンプトを作成
///
/// 本文中の未入力プレースホルダーは `[insert name]` の形で示す。
pub fn build_template_prompt(
    template: &TemplateStructure,
    category: &TemplateCategory,
    values: &HashMap<String, String>,
    context: &str,
) -> String {
    let body = template.render(values).content;
    let placeholders: Vec<String> = template
        .placeholders
        .iter()
        .map(|name| name.replace('_', " "))
        .collect();

    let mut prompt = String::from(
        "You are helping create a professional LinkedIn post using this template structure:\n\n",
    );
    prompt.push_str(&format!("Template: \"{}\"\n\n", body));
    prompt.push_str(&format!(
        "Category: {} - {}\n\n",
        category.name, category.description
    ));
    prompt.push_str(&format!(
        "Placeholders to fill: {}\n\n",
        placeholders.join(", ")
    ));
    prompt.push_str(&format!("Additional context: {}\n\n", context.trim()));
    prompt.push_str(&format!(
        "Please generate engaging, professional content for each placeholder that fits the {} category style. \
         The content should be authentic, valuable, and encourage engagement.\n\n",
        category.name
    ));
    prompt.push_str("Return the filled template as a complete LinkedIn post.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = GenerationRequest::new("  remote work ");
        assert_eq!(request.topic(), "remote work");
        assert_eq!(request.audience(), DEFAULT_AUDIENCE);
        assert_eq!(request.tone, Tone::Professional);
        assert!(!request.vary_strategy);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_topic_rejected() {
        let request = GenerationRequest::new("   ");
        assert!(matches!(request.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_request_deserialize_defaults() {
        let request: GenerationRequest = serde_json::from_str(r#"{"topic": "pricing"}"#).unwrap();
        assert_eq!(request.audience, DEFAULT_AUDIENCE);
        assert_eq!(request.tone, Tone::Professional);
    }

    #[test]
    fn test_placeholder_tokens_rejected() {
        let request = GenerationRequest::new("{topic} strategy");
        assert!(matches!(request.validate(), Err(Error::InvalidInput(_))));

        let request = GenerationRequest::new("pricing").with_audience("{audience}");
        assert!(matches!(request.validate(), Err(Error::InvalidInput(_))));

        assert!(GenerationRequest::new("C++ {templates").validate().is_ok());
        assert!(GenerationRequest::new("sets like {1, 2}").validate().is_ok());
    }

    #[test]
    fn test_clean_completion_collapses_every_run() {
        let raw = "one\n\n\ntwo\n\n\n\n\nthree\n\n\n";
        for _ in 0..3 {
            assert_eq!(clean_completion(raw), "one\n\ntwo\n\nthree");
        }
    }

    #[test]
    fn test_clean_completion() {
        assert_eq!(clean_completion("  \"Hello world\"  "), "Hello world");
        assert_eq!(clean_completion("'quoted'"), "quoted");
        assert_eq!(clean_completion("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
        assert_eq!(clean_completion("\"\"double\"\""), "\"double\"");
        assert_eq!(
            clean_completion(&"x".repeat(MAX_COMPLETION_CHARS + 10)).len(),
            MAX_COMPLETION_CHARS
        );
    }

    #[test]
    fn test_generation_prompt() {
        let prompt = build_generation_prompt("AI ethics", "CTOs", Tone::Bold, Some("regulation"));
        assert!(prompt.starts_with(
            "Create a professional LinkedIn post about \"AI ethics\" targeted at \"CTOs\" with a \"bold\" tone."
        ));
        assert!(prompt.contains("Additional context: regulation"));

        let prompt = build_generation_prompt("AI ethics", "CTOs", Tone::Bold, None);
        assert!(!prompt.contains("Additional context"));
    }

    #[test]
    fn test_template_prompt_uses_guidance_markers() {
        let store = TemplateStore::builtin();
        let template = store.template("Motivation", 0).unwrap();
        let category = store.category("Motivation").unwrap();
        let mut values = HashMap::new();
        values.insert("focus".to_string(), "hiring".to_string());

        let prompt = build_template_prompt(template, category, &values, "weekly team update");
        assert!(prompt.contains("[insert motivation]"));
        assert!(prompt.contains("This week, I'm focusing on hiring."));
        assert!(prompt.contains("Category: Motivation - Inspire and motivate your audience"));
        assert!(prompt.contains("Placeholders to fill: motivation, reminder, focus"));
        assert!(prompt.ends_with("Return the filled template as a complete LinkedIn post."));
    }
}
