//! Content Strategy
//!
//! トーンと投稿戦略の対応表

use super::insight::InsightKind;
use crate::random::{choose, RandomSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 投稿のトーン
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// 会話的
    Conversational,
    /// 大胆
    Bold,
    /// 実行志向
    Actionable,
    /// 先見的
    Visionary,
    /// 専門的（既定）
    #[default]
    Professional,
}

impl Tone {
    /// 全トーン
    pub const ALL: [Tone; 5] = [
        Tone::Conversational,
        Tone::Bold,
        Tone::Actionable,
        Tone::Visionary,
        Tone::Professional,
    ];

    /// トーン名
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Conversational => "conversational",
            Tone::Bold => "bold",
            Tone::Actionable => "actionable",
            Tone::Visionary => "visionary",
            Tone::Professional => "professional",
        }
    }

    /// 文字列から解釈（不明なトーンは専門的として扱う）
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// 対応する投稿戦略
    pub fn strategy(&self) -> ContentStrategy {
        match self {
            Tone::Conversational => ContentStrategy::StoryWithLesson,
            Tone::Bold => ContentStrategy::ContrarianTake,
            Tone::Actionable => ContentStrategy::FrameworkSharing,
            Tone::Visionary => ContentStrategy::TrendPrediction,
            Tone::Professional => ContentStrategy::InsightAnalysis,
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.name() == value)
            .ok_or_else(|| format!("unknown tone '{}'", s))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 投稿戦略
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentStrategy {
    /// 体験談と教訓
    StoryWithLesson,
    /// 逆張り
    ContrarianTake,
    /// フレームワーク共有
    FrameworkSharing,
    /// トレンド予測
    TrendPrediction,
    /// インサイト分析（既定）
    #[default]
    InsightAnalysis,
}

impl ContentStrategy {
    /// 全戦略
    pub const ALL: [ContentStrategy; 5] = [
        ContentStrategy::StoryWithLesson,
        ContentStrategy::ContrarianTake,
        ContentStrategy::FrameworkSharing,
        ContentStrategy::TrendPrediction,
        ContentStrategy::InsightAnalysis,
    ];

    /// 戦略名
    pub fn name(&self) -> &'static str {
        match self {
            ContentStrategy::StoryWithLesson => "story_with_lesson",
            ContentStrategy::ContrarianTake => "contrarian_take",
            ContentStrategy::FrameworkSharing => "framework_sharing",
            ContentStrategy::TrendPrediction => "trend_prediction",
            ContentStrategy::InsightAnalysis => "insight_analysis",
        }
    }

    /// インサイトの取得元
    pub fn insight_kind(&self) -> InsightKind {
        match self {
            ContentStrategy::StoryWithLesson => InsightKind::Practical,
            ContentStrategy::ContrarianTake => InsightKind::Counterintuitive,
            ContentStrategy::FrameworkSharing => InsightKind::Practical,
            ContentStrategy::TrendPrediction => InsightKind::Trend,
            ContentStrategy::InsightAnalysis => InsightKind::Opportunity,
        }
    }

    /// ランダムに戦略を選択（バリエーション要求時のみ使用）
    pub fn random(rng: &dyn RandomSource) -> Self {
        *choose(rng, &Self::ALL)
    }
}

impl fmt::Display for ContentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一括生成のローテーション（i % 5 で参照）
pub const BATCH_ROTATION: [Tone; 5] = [
    Tone::Conversational,
    Tone::Professional,
    Tone::Bold,
    Tone::Actionable,
    Tone::Visionary,
];

/// 一括生成の i 番目に使うトーン
pub fn batch_tone(index: usize) -> Tone {
    BATCH_ROTATION[index % BATCH_ROTATION.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_tone_strategy_table() {
        assert_eq!(Tone::Conversational.strategy(), ContentStrategy::StoryWithLesson);
        assert_eq!(Tone::Bold.strategy(), ContentStrategy::ContrarianTake);
        assert_eq!(Tone::Actionable.strategy(), ContentStrategy::FrameworkSharing);
        assert_eq!(Tone::Visionary.strategy(), ContentStrategy::TrendPrediction);
        assert_eq!(Tone::Professional.strategy(), ContentStrategy::InsightAnalysis);
    }

    #[test]
    fn test_tone_parsing() {
        assert_eq!(Tone::parse_lenient("Bold"), Tone::Bold);
        assert_eq!(Tone::parse_lenient(" visionary "), Tone::Visionary);
        assert_eq!(Tone::parse_lenient("sarcastic"), Tone::Professional);
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn test_insight_mapping() {
        assert_eq!(
            ContentStrategy::ContrarianTake.insight_kind(),
            InsightKind::Counterintuitive
        );
        assert_eq!(ContentStrategy::StoryWithLesson.insight_kind(), InsightKind::Practical);
        assert_eq!(ContentStrategy::InsightAnalysis.insight_kind(), InsightKind::Opportunity);
    }

    #[test]
    fn test_batch_rotation() {
        let strategies: Vec<ContentStrategy> = (0..7).map(|i| batch_tone(i).strategy()).collect();
        assert_eq!(
            strategies,
            vec![
                ContentStrategy::StoryWithLesson,
                ContentStrategy::InsightAnalysis,
                ContentStrategy::ContrarianTake,
                ContentStrategy::FrameworkSharing,
                ContentStrategy::TrendPrediction,
                ContentStrategy::StoryWithLesson,
                ContentStrategy::InsightAnalysis,
            ]
        );
    }

    #[test]
    fn test_random_strategy() {
        let rng = SequenceRandom::constant(3);
        assert_eq!(ContentStrategy::random(&rng), ContentStrategy::TrendPrediction);
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&ContentStrategy::ContrarianTake).unwrap();
        assert_eq!(json, "\"contrarian_take\"");
    }
}
