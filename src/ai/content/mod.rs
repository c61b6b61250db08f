//! Content Generation Module
//!
//! テンプレートカタログ、専門家プロファイル、投稿の組み立てと生成を提供

pub mod catalog;
pub mod compositor;
pub mod generator;
pub mod hashtags;
pub mod insight;
pub mod persona;
pub mod placeholder;
pub mod post;
pub mod quality;
pub mod strategy;
pub mod template;

pub use compositor::{PostCompositor, PostStructure};
pub use generator::{
    ContentGenerator, CustomizedTemplate, GeneratedContent, GenerationRequest, GeneratorSettings,
};
pub use hashtags::generate_relevant_hashtags;
pub use insight::{InsightGenerator, InsightKind, PhraseInsightGenerator};
pub use persona::{build_expert_profile, ExpertProfile, ExpertType};
pub use post::{ContentSource, GeneratedPost, Platform, PostStatus};
pub use quality::{
    content_metrics, estimate_performance, quality_score, ContentMetrics, EngagementLevel,
    PerformanceEstimate, QualityGrade, QualityScore,
};
pub use strategy::{ContentStrategy, Tone};
pub use template::{
    EngagementTier, LengthTier, RenderedTemplate, TemplateCategory, TemplateStatistics,
    TemplateStore, TemplateStructure,
};
