//! Content Quality
//!
//! 投稿本文の指標、品質スコア、反応予測

use chrono::{DateTime, Datelike, Utc, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9A-Za-z_\x{0590}-\x{05FF}]+").expect("valid hashtag pattern")
});

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([a-zA-Z0-9_-]+)").expect("valid mention pattern"));

/// 専門用語として加点するキーワード
const PROFESSIONAL_KEYWORDS: [&str; 7] = [
    "strategy",
    "leadership",
    "innovation",
    "growth",
    "success",
    "insights",
    "experience",
];

/// 反応を促す語
const ENGAGEMENT_WORDS: [&str; 4] = ["what", "how", "share", "thoughts"];

/// 1分あたりに読める語数
const WORDS_PER_MINUTE: usize = 200;

/// 本文の指標
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    /// 全体の文字数
    pub total_characters: usize,
    /// ハッシュタグを除いた文字数
    pub content_characters: usize,
    /// ハッシュタグを除いた語数
    pub word_count: usize,
    /// 行数
    pub line_count: usize,
    /// ハッシュタグ数
    pub hashtag_count: usize,
    /// ハッシュタグ（小文字）
    pub hashtags: Vec<String>,
    /// 推定読了時間（分）
    pub estimated_read_minutes: usize,
}

/// 品質の評価
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityGrade {
    A,
    B,
    C,
    D,
    #[default]
    F,
}

impl QualityGrade {
    /// スコアから評価を決める
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => QualityGrade::A,
            80..=89 => QualityGrade::B,
            70..=79 => QualityGrade::C,
            60..=69 => QualityGrade::D,
            _ => QualityGrade::F,
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// 品質スコア
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    /// 0〜100
    pub score: u32,
    pub grade: QualityGrade,
    /// 加点理由
    pub factors: Vec<String>,
    /// 改善提案
    pub suggestions: Vec<String>,
}

/// 予想される反応の大きさ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementLevel {
    High,
    MediumHigh,
    Medium,
    LowMedium,
    Low,
}

impl EngagementLevel {
    /// 反応予測スコアから判定（上限を掛ける前の値を使う）
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => EngagementLevel::High,
            70..=84 => EngagementLevel::MediumHigh,
            55..=69 => EngagementLevel::Medium,
            40..=54 => EngagementLevel::LowMedium,
            _ => EngagementLevel::Low,
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngagementLevel::High => "High",
            EngagementLevel::MediumHigh => "Medium-High",
            EngagementLevel::Medium => "Medium",
            EngagementLevel::LowMedium => "Low-Medium",
            EngagementLevel::Low => "Low",
        };
        f.write_str(name)
    }
}

/// 反応予測
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    /// 0〜100
    pub score: u32,
    pub expected_engagement: EngagementLevel,
    /// 投稿に適した時間帯
    pub best_time_to_post: String,
    pub tips: Vec<String>,
}

/// ハッシュタグを出現順に抽出（小文字化）
pub fn extract_hashtags(content: &str) -> Vec<String> {
    HASHTAG
        .find_iter(content)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// `@name` 形式のメンションを抽出（`@` を除く）
pub fn extract_mentions(content: &str) -> Vec<String> {
    MENTION
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 本文の指標を計算
pub fn content_metrics(content: &str) -> ContentMetrics {
    let hashtags = extract_hashtags(content);
    let stripped = HASHTAG.replace_all(content, "");
    let body = stripped.trim();
    let word_count = body.split_whitespace().count();

    ContentMetrics {
        total_characters: content.chars().count(),
        content_characters: body.chars().count(),
        word_count,
        line_count: content.split('\n').count(),
        hashtag_count: hashtags.len(),
        hashtags,
        estimated_read_minutes: word_count.max(1).div_ceil(WORDS_PER_MINUTE),
    }
}

fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F600}'..='\u{1F64F}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F1E0}'..='\u{1F1FF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}

fn has_emoji(content: &str) -> bool {
    content.chars().any(is_emoji)
}

/// 品質スコアを計算
///
/// 長さ、ハッシュタグ数、構成、問いかけ、絵文字、専門用語で加点し、100で頭打ちにする。
pub fn quality_score(content: &str) -> QualityScore {
    let metrics = content_metrics(content);
    let lower = content.to_lowercase();
    let mut score = 0;
    let mut factors = Vec::new();

    if (150..=500).contains(&metrics.content_characters) {
        score += 25;
        factors.push("Good length");
    } else if metrics.content_characters >= 100 {
        score += 15;
        factors.push("Acceptable length");
    }

    if (2..=5).contains(&metrics.hashtag_count) {
        score += 20;
        factors.push("Good hashtag usage");
    } else if metrics.hashtag_count >= 1 {
        score += 10;
        factors.push("Some hashtags");
    }

    if content.contains(['?', '!']) {
        score += 15;
        factors.push("Engaging punctuation");
    }

    if content.contains("\n\n") {
        score += 10;
        factors.push("Good paragraph structure");
    }

    if ENGAGEMENT_WORDS.iter().any(|word| lower.contains(word)) {
        score += 15;
        factors.push("Engagement prompt");
    }

    if has_emoji(content) {
        score += 10;
        factors.push("Visual elements (emojis)");
    }

    let keywords = PROFESSIONAL_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count() as u32;
    if keywords > 0 {
        score += (keywords * 5).min(15);
        factors.push("Professional terminology");
    }

    let score = score.min(100);
    QualityScore {
        score,
        grade: QualityGrade::from_score(score),
        factors: factors.into_iter().map(String::from).collect(),
        suggestions: improvement_suggestions(content, &lower, &metrics),
    }
}

fn improvement_suggestions(content: &str, lower: &str, metrics: &ContentMetrics) -> Vec<String> {
    let mut suggestions = Vec::new();

    if metrics.content_characters < 150 {
        suggestions.push("Consider adding more detail or context to your post");
    }

    if metrics.hashtag_count == 0 {
        suggestions.push("Add relevant hashtags to increase discoverability");
    } else if metrics.hashtag_count > 5 {
        suggestions.push("Consider reducing hashtags (3-5 is optimal)");
    }

    if !content.contains('?') && !lower.contains("share") && !lower.contains("thoughts") {
        suggestions.push("Add a question or call-to-action to encourage engagement");
    }

    if !content.contains("\n\n") {
        suggestions.push("Break up text into shorter paragraphs for better readability");
    }

    if !has_emoji(content) {
        suggestions.push("Consider adding relevant emojis to make the post more visually appealing");
    }

    suggestions.into_iter().map(String::from).collect()
}

/// 現在時刻を基準に反応を予測
pub fn estimate_performance(content: &str) -> PerformanceEstimate {
    estimate_performance_at(content, Utc::now())
}

/// 基準時刻を指定して反応を予測
pub fn estimate_performance_at(content: &str, now: DateTime<Utc>) -> PerformanceEstimate {
    let metrics = content_metrics(content);
    let mut score = quality_score(content).score;

    if (150..=300).contains(&metrics.content_characters) {
        score += 5;
    }
    if content.contains('?') {
        score += 10;
    }
    let mentions = extract_mentions(content).len();
    if (1..=2).contains(&mentions) {
        score += 5;
    }

    let mut tips = Vec::new();
    if !content.contains('?') {
        tips.push("Add a question to increase comments".to_string());
    }
    if metrics.hashtag_count < 3 {
        tips.push("Use 3-5 relevant hashtags for better reach".to_string());
    }
    if metrics.line_count < 3 {
        tips.push("Break content into shorter paragraphs".to_string());
    }

    PerformanceEstimate {
        score: score.min(100),
        expected_engagement: EngagementLevel::from_score(score),
        best_time_to_post: best_time_to_post(now.weekday()).to_string(),
        tips,
    }
}

/// 曜日ごとの投稿推奨時間帯（火〜木が最適）
pub fn best_time_to_post(day: Weekday) -> &'static str {
    match day {
        Weekday::Tue | Weekday::Wed | Weekday::Thu => "Within 2 hours (optimal day)",
        _ => "Tuesday-Thursday 9-11 AM or 1-3 PM",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const STRONG: &str = "Growth strategy is a team sport 🚀\n\n\
        What is the one habit that changed how your team ships? \
        I would love to hear your experience and insights from the last quarter.\n\n\
        #Growth #Strategy #Leadership";

    const PLAIN: &str = "Most teams treat onboarding as paperwork. The best ones treat it as a \
        product with users, feedback loops, and a roadmap. Share the one onboarding ritual \
        you would never drop.\n\n#Onboarding #Hiring";

    #[test]
    fn test_content_metrics() {
        let metrics = content_metrics("Hello world\n\n#One #Two");
        assert_eq!(metrics.total_characters, 22);
        assert_eq!(metrics.content_characters, 11);
        assert_eq!(metrics.word_count, 2);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.hashtags, vec!["#one", "#two"]);
        assert_eq!(metrics.estimated_read_minutes, 1);

        assert_eq!(content_metrics("").estimated_read_minutes, 1);
        assert_eq!(content_metrics(&"word ".repeat(401)).estimated_read_minutes, 3);
    }

    #[test]
    fn test_extract_mentions() {
        assert_eq!(
            extract_mentions("Thanks @jane_doe and @acme-corp!"),
            vec!["jane_doe", "acme-corp"]
        );
        assert!(extract_mentions("mail me at home").is_empty());
    }

    #[test]
    fn test_strong_post_scores_top_grade() {
        let quality = quality_score(STRONG);
        assert_eq!(quality.score, 100);
        assert_eq!(quality.grade, QualityGrade::A);
        assert_eq!(quality.factors.len(), 7);
        assert!(quality.suggestions.is_empty(), "{:?}", quality.suggestions);
    }

    #[test]
    fn test_partial_post_score_and_suggestions() {
        let quality = quality_score(PLAIN);
        assert_eq!(quality.score, 70);
        assert_eq!(quality.grade, QualityGrade::C);
        assert_eq!(
            quality.factors,
            vec![
                "Good length",
                "Good hashtag usage",
                "Good paragraph structure",
                "Engagement prompt"
            ]
        );
        assert_eq!(
            quality.suggestions,
            vec!["Consider adding relevant emojis to make the post more visually appealing"]
        );
    }

    #[test]
    fn test_bare_text_gets_every_suggestion() {
        let quality = quality_score("Short note");
        assert_eq!(quality.score, 0);
        assert_eq!(quality.grade, QualityGrade::F);
        assert!(quality.factors.is_empty());
        assert_eq!(quality.suggestions.len(), 5);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(QualityGrade::from_score(90), QualityGrade::A);
        assert_eq!(QualityGrade::from_score(89), QualityGrade::B);
        assert_eq!(QualityGrade::from_score(70), QualityGrade::C);
        assert_eq!(QualityGrade::from_score(60), QualityGrade::D);
        assert_eq!(QualityGrade::from_score(59), QualityGrade::F);
    }

    #[test]
    fn test_performance_estimate() {
        // 2024-06-04 は火曜日、2024-06-08 は土曜日
        let tuesday = Utc.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap();
        let saturday = Utc.with_ymd_and_hms(2024, 6, 8, 9, 0, 0).unwrap();

        let strong = estimate_performance_at(STRONG, tuesday);
        assert_eq!(strong.score, 100);
        assert_eq!(strong.expected_engagement, EngagementLevel::High);
        assert_eq!(strong.best_time_to_post, "Within 2 hours (optimal day)");
        assert!(strong.tips.is_empty());

        let plain = estimate_performance_at(PLAIN, saturday);
        assert_eq!(plain.score, 75);
        assert_eq!(plain.expected_engagement, EngagementLevel::MediumHigh);
        assert_eq!(plain.best_time_to_post, "Tuesday-Thursday 9-11 AM or 1-3 PM");
        assert_eq!(
            plain.tips,
            vec![
                "Add a question to increase comments",
                "Use 3-5 relevant hashtags for better reach"
            ]
        );

        let bare = estimate_performance_at("Short note", saturday);
        assert_eq!(bare.expected_engagement, EngagementLevel::Low);
        assert_eq!(bare.tips.len(), 3);
    }

    #[test]
    fn test_engagement_level_serialization() {
        assert_eq!(
            serde_json::to_value(EngagementLevel::MediumHigh).unwrap(),
            "medium-high"
        );
        assert_eq!(EngagementLevel::LowMedium.to_string(), "Low-Medium");
    }
}
