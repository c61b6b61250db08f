//! Insight Generator
//!
//! 固定フレーズからトピックに沿った短いインサイトを生成する

use crate::random::{choose, RandomSource, ThreadRandom};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// インサイトの種類
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// 逆説的
    Counterintuitive,
    /// 実践的
    Practical,
    /// トレンド
    Trend,
    /// よくある間違い
    Mistake,
    /// 機会
    Opportunity,
}

/// インサイト生成トレイト
pub trait InsightGenerator: Send + Sync {
    /// 逆説的インサイト
    fn counterintuitive(&self, topic: &str) -> String;

    /// 実践的インサイト
    fn practical(&self, topic: &str) -> String;

    /// トレンドインサイト
    fn trend(&self, topic: &str) -> String;

    /// よくある間違い
    fn mistake(&self, topic: &str) -> String;

    /// 機会インサイト
    fn opportunity(&self, topic: &str) -> String;

    /// 種類を指定して生成
    fn generate(&self, kind: InsightKind, topic: &str) -> String {
        match kind {
            InsightKind::Counterintuitive => self.counterintuitive(topic),
            InsightKind::Practical => self.practical(topic),
            InsightKind::Trend => self.trend(topic),
            InsightKind::Mistake => self.mistake(topic),
            InsightKind::Opportunity => self.opportunity(topic),
        }
    }
}

const TOPIC: &str = "{topic}";

const COUNTERINTUITIVE: [&str; 5] = [
    "Most people think {topic} success comes from perfection, but I've seen the opposite",
    "The biggest {topic} breakthroughs happen when you stop following best practices",
    "Everyone focuses on the obvious {topic} metrics, but the real indicator is something else entirely",
    "The {topic} advice everyone gives actually prevents success in most cases",
    "What looks like failure in {topic} is often the setup for breakthrough success",
];

const PRACTICAL: [&str; 5] = [
    "The 3 {topic} fundamentals I wish someone had taught me earlier",
    "Here's what actually moves the needle in {topic} (from analyzing 100+ cases)",
    "The {topic} framework I use with every client - it works every time",
    "5 minutes of this {topic} practice beats hours of everything else",
    "The {topic} question that reveals everything about potential success",
];

const TREND: [&str; 5] = [
    "The {topic} shift happening right now that most people are missing",
    "Why {topic} in 2025 will look nothing like today",
    "The {topic} trend that's about to change everything",
    "3 {topic} predictions that will sound crazy today but obvious tomorrow",
    "The quiet {topic} revolution that's already started",
];

const MISTAKE: [&str; 5] = [
    "The {topic} mistake I see in 90% of cases",
    "Why most {topic} efforts fail (and how to avoid it)",
    "The {topic} assumption that destroys results",
    "What everyone gets wrong about {topic}",
    "The {topic} trap that catches even experienced professionals",
];

const OPPORTUNITY: [&str; 5] = [
    "The {topic} opportunity hiding in plain sight",
    "Why now is the perfect time for {topic} transformation",
    "The {topic} competitive advantage most people ignore",
    "How to turn {topic} challenges into unfair advantages",
    "The {topic} goldmine that everyone overlooks",
];

/// フレーズプールから選ぶインサイト生成器
#[derive(Clone)]
pub struct PhraseInsightGenerator {
    rng: Arc<dyn RandomSource>,
}

impl PhraseInsightGenerator {
    /// 乱数源を指定して作成
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// プールから一つ選び、トピックをそのまま差し込む
    fn phrase(&self, pool: &[&str; 5], topic: &str) -> String {
        choose(self.rng.as_ref(), pool).replace(TOPIC, topic)
    }
}

impl Default for PhraseInsightGenerator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

impl InsightGenerator for PhraseInsightGenerator {
    fn counterintuitive(&self, topic: &str) -> String {
        self.phrase(&COUNTERINTUITIVE, topic)
    }

    fn practical(&self, topic: &str) -> String {
        self.phrase(&PRACTICAL, topic)
    }

    fn trend(&self, topic: &str) -> String {
        self.phrase(&TREND, topic)
    }

    fn mistake(&self, topic: &str) -> String {
        self.phrase(&MISTAKE, topic)
    }

    fn opportunity(&self, topic: &str) -> String {
        self.phrase(&OPPORTUNITY, topic)
    }
}
