//! Generated Post
//!
//! 生成済み投稿とそのライフサイクル（下書き → 予約 → 公開）

use super::quality::{content_metrics, quality_score, ContentMetrics, QualityScore};
use super::strategy::{ContentStrategy, Tone};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 投稿本文の最大文字数
pub const MAX_CONTENT_LENGTH: usize = 3000;

/// 投稿先プラットフォーム
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// LinkedIn（既定）
    #[default]
    Linkedin,
    /// Twitter
    Twitter,
    /// Facebook
    Facebook,
}

/// 投稿ステータス
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// 下書き
    #[default]
    Draft,
    /// 予約済み
    Scheduled,
    /// 公開済み
    Published,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        };
        f.write_str(name)
    }
}

/// 本文の生成元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "provider", rename_all = "snake_case")]
pub enum ContentSource {
    /// テンプレート
    Template,
    /// テキスト補完サービス（プロバイダー名）
    Completion(String),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Template => f.write_str("template"),
            ContentSource::Completion(provider) => write!(f, "completion:{}", provider),
        }
    }
}

/// 生成済み投稿
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPost {
    /// 投稿ID
    pub id: Uuid,
    /// 本文
    pub content: String,
    /// トピック
    pub topic: String,
    /// オーディエンス
    pub audience: String,
    /// トーン
    pub tone: Tone,
    /// 投稿戦略
    pub strategy: ContentStrategy,
    /// 一括生成時のアプローチ
    pub approach: Option<ContentStrategy>,
    /// 生成元
    pub source: ContentSource,
    /// 作成日時
    pub created_at: DateTime<Utc>,
    /// プラットフォーム
    pub platform: Platform,
    /// ステータス
    pub status: PostStatus,
    /// 予約日時
    pub scheduled_at: Option<DateTime<Utc>>,
    /// 公開日時
    pub published_at: Option<DateTime<Utc>>,
    /// 本文の指標
    #[serde(default)]
    pub metrics: ContentMetrics,
    /// 品質スコア
    #[serde(default)]
    pub quality: QualityScore,
}

impl GeneratedPost {
    /// 下書きとして作成
    pub fn draft(
        content: impl Into<String>,
        topic: impl Into<String>,
        audience: impl Into<String>,
        tone: Tone,
        strategy: ContentStrategy,
        source: ContentSource,
    ) -> Self {
        let content = content.into();
        Self {
            id: Uuid::new_v4(),
            metrics: content_metrics(&content),
            quality: quality_score(&content),
            content,
            topic: topic.into(),
            audience: audience.into(),
            tone,
            strategy,
            approach: None,
            source,
            created_at: Utc::now(),
            platform: Platform::default(),
            status: PostStatus::Draft,
            scheduled_at: None,
            published_at: None,
        }
    }

    /// アプローチを設定
    pub fn with_approach(mut self, approach: ContentStrategy) -> Self {
        self.approach = Some(approach);
        self
    }

    /// プラットフォームを設定
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// 公開済みでないことを確認
    fn ensure_editable(&self) -> Result<()> {
        if self.status == PostStatus::Published {
            return Err(Error::InvalidState(
                "Cannot update published posts".to_string(),
            ));
        }
        Ok(())
    }

    /// 本文を編集
    pub fn edit(&mut self, content: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;

        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("Post content must not be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_CONTENT_LENGTH {
            return Err(Error::InvalidInput(format!(
                "Post content exceeds {} characters",
                MAX_CONTENT_LENGTH
            )));
        }

        self.content = trimmed.to_string();
        self.metrics = content_metrics(&self.content);
        self.quality = quality_score(&self.content);
        Ok(())
    }

    /// 予約する（現在時刻より後のみ）
    pub fn schedule(&mut self, at: DateTime<Utc>) -> Result<()> {
        self.schedule_at(at, Utc::now())
    }

    /// 基準時刻を指定して予約
    pub fn schedule_at(&mut self, at: DateTime<Utc>, now: DateTime<Utc>) -> Result<()> {
        self.ensure_editable()?;
        if at <= now {
            return Err(Error::InvalidInput(format!(
                "Scheduled time {} is not in the future",
                at.to_rfc3339()
            )));
        }

        self.scheduled_at = Some(at);
        self.status = PostStatus::Scheduled;
        Ok(())
    }

    /// 予約を取り消して下書きに戻す
    pub fn unschedule(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.scheduled_at = None;
        self.status = PostStatus::Draft;
        Ok(())
    }

    /// 公開済みにする
    pub fn mark_published(&mut self) -> Result<()> {
        if self.status == PostStatus::Published {
            return Err(Error::InvalidState("Post already published".to_string()));
        }
        self.status = PostStatus::Published;
        self.published_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> GeneratedPost {
        GeneratedPost::draft(
            "Original content",
            "pricing",
            "founders",
            Tone::Bold,
            ContentStrategy::ContrarianTake,
            ContentSource::Template,
        )
    }

    #[test]
    fn test_new_post_is_draft() {
        let post = sample();
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.platform, Platform::Linkedin);
        assert!(post.scheduled_at.is_none());
        assert!(post.approach.is_none());
    }

    #[test]
    fn test_edit_validation() {
        let mut post = sample();
        assert!(post.edit("  Updated  ").is_ok());
        assert_eq!(post.content, "Updated");
        assert!(matches!(post.edit("   "), Err(Error::InvalidInput(_))));
        assert!(matches!(
            post.edit("x".repeat(MAX_CONTENT_LENGTH + 1)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_schedule_lifecycle() {
        let mut post = sample();
        let now = Utc::now();

        assert!(matches!(
            post.schedule_at(now - Duration::minutes(5), now),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(post.status, PostStatus::Draft);

        let at = now + Duration::hours(2);
        post.schedule_at(at, now).unwrap();
        assert_eq!(post.status, PostStatus::Scheduled);
        assert_eq!(post.scheduled_at, Some(at));

        post.unschedule().unwrap();
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.scheduled_at.is_none());
    }

    #[test]
    fn test_published_post_is_frozen() {
        let mut post = sample();
        post.mark_published().unwrap();
        assert!(post.published_at.is_some());

        assert!(matches!(post.edit("new"), Err(Error::InvalidState(_))));
        assert!(matches!(
            post.schedule(Utc::now() + Duration::days(1)),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(post.mark_published(), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_quality_follows_content() {
        let mut post = sample();
        assert_eq!(post.metrics.content_characters, "Original content".len());
        assert_eq!(post.quality, quality_score("Original content"));

        let revised = "What would you change first? 🚀\n\n#Pricing #Growth";
        post.edit(revised).unwrap();
        assert_eq!(post.metrics.hashtags, vec!["#pricing", "#growth"]);
        assert_eq!(post.quality, quality_score(revised));
        assert!(post.quality.score > quality_score("Original content").score);
    }

    #[test]
    fn test_post_serialization() {
        let post = sample().with_approach(ContentStrategy::ContrarianTake);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["platform"], "linkedin");
        assert_eq!(json["approach"], "contrarian_take");
        assert_eq!(json["source"]["kind"], "template");
        assert_eq!(json["quality"]["grade"], "F");
    }
}
