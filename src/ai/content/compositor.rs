//! Post Compositor
//!
//! 戦略ごとの構成（導入・本文・洞察・呼びかけ）を選び、投稿本文を組み立てる

use super::hashtags::generate_relevant_hashtags;
use super::insight::{InsightGenerator, PhraseInsightGenerator};
use super::persona::{audience_member, ExpertProfile};
use super::placeholder;
use super::strategy::ContentStrategy;
use crate::random::{choose, RandomSource, ThreadRandom};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// 投稿の構成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostStructure {
    /// 導入
    pub opening: &'static str,
    /// 本文
    pub body: &'static str,
    /// 洞察
    pub insight: &'static str,
    /// 呼びかけ
    pub call_to_action: &'static str,
}

impl PostStructure {
    fn sections(&self) -> [&'static str; 4] {
        [self.opening, self.body, self.insight, self.call_to_action]
    }
}

const STORY: [PostStructure; 3] = [
    PostStructure {
        opening: "Last week, I watched a {audience_member} completely transform their approach to {topic}.",
        body: "They started with a simple question: \"What if everything we know about {topic} is backwards?\" Instead of following the usual playbook, they tried something different. The results surprised everyone - including me.",
        insight: "Here's what I learned: {insight_lower}. Sometimes the biggest breakthroughs come from questioning the fundamentals.",
        call_to_action: "What assumptions about {topic} are you ready to challenge?",
    },
    PostStructure {
        opening: "A {audience_member} asked me something yesterday that I can't stop thinking about.",
        body: "\"Why does everyone make {topic} so complicated?\" They were right. I've seen teams spend months on complex {topic} strategies when simple approaches work better. The industry creates complexity where clarity is needed.",
        insight: "The truth: {insight_lower}. Complexity is often a symptom of unclear thinking.",
        call_to_action: "How are you simplifying your approach to {topic}?",
    },
    PostStructure {
        opening: "I just saw the most interesting {topic} case study unfold in real time.",
        body: "A team took everything conventional wisdom says about {topic} and flipped it. Instead of following best practices, they focused on first principles. The outcome? They achieved in 3 months what typically takes a year.",
        insight: "The lesson: {insight_lower}. First principles thinking beats best practices every time.",
        call_to_action: "What first principles guide your {topic} decisions?",
    },
];

const CONTRARIAN: [PostStructure; 3] = [
    PostStructure {
        opening: "Unpopular opinion: Most {topic} advice is counterproductive.",
        body: "{insight}. I've analyzed hundreds of {topic} cases, and the pattern is clear: the conventional approach creates more problems than it solves. The organizations winning right now are doing the opposite of what everyone recommends.",
        insight: "The truth is uncomfortable but simple: success in {topic} requires unlearning most of what you've been taught.",
        call_to_action: "What {topic} \"best practice\" are you ready to abandon?",
    },
    PostStructure {
        opening: "Hot take: The {topic} industry has been giving backwards advice for years.",
        body: "{insight}. While everyone focuses on optimization, the real winners are focused on something completely different. They're not playing the same game - they're playing a better game.",
        insight: "The competitive advantage isn't better execution of standard practices - it's executing entirely different practices.",
        call_to_action: "What game are you playing in {topic}?",
    },
    PostStructure {
        opening: "Controversial thought: {insight}.",
        body: "I know this sounds backwards, but I've seen it proven repeatedly. The {audience} who embrace this counter-intuitive approach consistently outperform those following conventional wisdom. The gap isn't small - it's dramatic.",
        insight: "Sometimes the best strategy is the one that sounds wrong to everyone else.",
        call_to_action: "What would you do differently if conventional wisdom was wrong?",
    },
];

const FRAMEWORK: [PostStructure; 3] = [
    PostStructure {
        opening: "{insight}:",
        body: "1. Start with the end in mind - what does success actually look like?\n2. Identify the constraint - what's really holding you back?\n3. Test the minimum viable change - what's the smallest thing you can try?\n4. Measure what matters - ignore vanity metrics\n5. Scale what works - double down on proven approaches",
        insight: "This framework works because it forces clarity over complexity. Most {topic} failures happen because people skip step 1.",
        call_to_action: "Which step are you missing in your {topic} approach?",
    },
    PostStructure {
        opening: "After working with hundreds of {audience}, I've identified the {topic} pattern that actually works:",
        body: "→ Map the current reality (most people skip this)\n→ Define the specific outcome you need\n→ Find the biggest leverage point\n→ Test small, iterate fast\n→ Scale gradually, measure constantly",
        insight: "{insight}. The difference between success and failure is often execution of fundamentals, not access to advanced techniques.",
        call_to_action: "What's your biggest leverage point in {topic} right now?",
    },
    PostStructure {
        opening: "The {topic} framework I use with every client:",
        body: "Phase 1: Audit your current approach honestly\nPhase 2: Identify the 20% that drives 80% of results\nPhase 3: Eliminate everything else\nPhase 4: Optimize the 20% relentlessly\nPhase 5: Scale only what's proven",
        insight: "Simple? Yes. Easy? No. But it works because {insight_lower}.",
        call_to_action: "What would you eliminate from your {topic} approach if you were ruthlessly honest?",
    },
];

const TREND: [PostStructure; 3] = [
    PostStructure {
        opening: "{insight}.",
        body: "While everyone's focused on today's challenges, smart {audience} are already adapting to tomorrow's reality. The shift is subtle but significant - and it's accelerating. Those who see it early have an insurmountable advantage.",
        insight: "The future belongs to those who act on trends before they become obvious to everyone else.",
        call_to_action: "How are you preparing for the future of {topic}?",
    },
    PostStructure {
        opening: "The {topic} landscape is shifting in a way most people aren't seeing yet.",
        body: "{insight}. I'm seeing early signals everywhere - in client conversations, industry data, and successful case studies. The organizations that adapt first will dominate the next decade.",
        insight: "Change creates opportunity, but only for those who recognize it early and act decisively.",
        call_to_action: "What signals are you seeing in {topic}?",
    },
    PostStructure {
        opening: "Prediction: {insight}.",
        body: "The evidence is everywhere if you know where to look. Leading {audience} are already making moves that seem premature today but will look prescient tomorrow. The competitive landscape is about to change dramatically.",
        insight: "The best time to adapt to change is before everyone else realizes change is necessary.",
        call_to_action: "What would you do differently if you knew this trend was certain?",
    },
];

const ANALYSIS: [PostStructure; 3] = [
    PostStructure {
        opening: "I've been analyzing {topic} patterns for years, and one thing keeps standing out.",
        body: "{insight}. The data is consistent across industries and contexts. Yet most {audience} are completely missing it. They're optimizing for the wrong metrics and solving the wrong problems.",
        insight: "The biggest opportunities are often hiding in plain sight, disguised as things everyone already knows but no one acts on.",
        call_to_action: "What obvious opportunity are you overlooking in {topic}?",
    },
    PostStructure {
        opening: "After working with {audience} across different industries, I've noticed something interesting.",
        body: "{insight}. The pattern is so consistent it's almost mathematical. The organizations that embrace this insight dramatically outperform those that ignore it. Yet it remains surprisingly underutilized.",
        insight: "Sometimes the most powerful strategies are the ones that seem too simple to work.",
        call_to_action: "How could you apply this insight to your {topic} challenges?",
    },
    PostStructure {
        opening: "Here's what I've learned from analyzing hundreds of {topic} cases:",
        body: "{insight}. This insight explains why some {audience} consistently succeed while others struggle with the same challenges. It's not about having better resources or more experience - it's about seeing the game differently.",
        insight: "Perspective often matters more than resources when it comes to breakthrough results.",
        call_to_action: "What perspective shift could transform your approach to {topic}?",
    },
];

/// 戦略ごとの構成プール
pub fn structures_for(strategy: ContentStrategy) -> &'static [PostStructure; 3] {
    match strategy {
        ContentStrategy::StoryWithLesson => &STORY,
        ContentStrategy::ContrarianTake => &CONTRARIAN,
        ContentStrategy::FrameworkSharing => &FRAMEWORK,
        ContentStrategy::TrendPrediction => &TREND,
        ContentStrategy::InsightAnalysis => &ANALYSIS,
    }
}

/// 構成に差し込む値
struct PostValues<'a> {
    topic: &'a str,
    audience: &'a str,
    audience_member: &'a str,
    insight: &'a str,
    insight_lower: &'a str,
}

impl PostValues<'_> {
    fn fill(&self, section: &str) -> String {
        placeholder::render_with(section, |name| {
            let value = match name {
                "topic" => self.topic,
                "audience" => self.audience,
                "audience_member" => self.audience_member,
                "insight" => self.insight,
                "insight_lower" => self.insight_lower,
                _ => return None,
            };
            Some(Cow::Borrowed(value))
        })
    }
}

/// 投稿コンポジター
#[derive(Clone)]
pub struct PostCompositor {
    rng: Arc<dyn RandomSource>,
    insights: Arc<dyn InsightGenerator>,
}

impl PostCompositor {
    /// 乱数源とインサイト生成器を指定して作成
    pub fn new(rng: Arc<dyn RandomSource>, insights: Arc<dyn InsightGenerator>) -> Self {
        Self { rng, insights }
    }

    /// 乱数源のみ指定（インサイトは同じ乱数源のフレーズ生成器）
    pub fn with_random(rng: Arc<dyn RandomSource>) -> Self {
        let insights = Arc::new(PhraseInsightGenerator::new(rng.clone()));
        Self::new(rng, insights)
    }

    /// 乱数源
    pub fn random(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// 投稿本文を組み立てる
    ///
    /// 戦略に対応するインサイトを一つだけ生成し、構成を一つ選んで埋める。
    /// 各セクションは空行で区切り、最後にハッシュタグ行を付ける。
    pub fn craft_post(
        &self,
        topic: &str,
        audience: &str,
        strategy: ContentStrategy,
        profile: &ExpertProfile,
    ) -> String {
        let insight = self.insights.generate(strategy.insight_kind(), topic);
        let insight_lower = insight.to_lowercase();
        let structure = choose(self.rng.as_ref(), structures_for(strategy));

        debug!(
            strategy = %strategy,
            expert = %profile.expert_type,
            "🧩 構成を選択: {}",
            structure.opening
        );

        let values = PostValues {
            topic,
            audience,
            audience_member: audience_member(audience),
            insight: &insight,
            insight_lower: &insight_lower,
        };

        let mut sections: Vec<String> = structure
            .sections()
            .iter()
            .map(|section| values.fill(section))
            .collect();
        sections.push(generate_relevant_hashtags(topic, profile));

        sections.join("\n\n")
    }
}

impl Default for PostCompositor {
    fn default() -> Self {
        Self::with_random(Arc::new(ThreadRandom))
    }
}
