//! Hashtag Generation

use super::persona::ExpertProfile;

/// 全投稿に付ける共通タグ
pub const COMMON_HASHTAGS: [&str; 3] = ["#Leadership", "#Success", "#Growth"];

/// ハッシュタグ行の最大タグ数
pub const MAX_HASHTAGS: usize = 5;

/// トピックから主ハッシュタグを生成
///
/// 空白区切りの各単語の先頭を大文字にして連結する（`ai transformation` → `#AiTransformation`）。
/// 英数字以外の文字は除く。
pub fn primary_hashtag(topic: &str) -> String {
    let mut tag = String::from("#");
    for word in topic.split_whitespace() {
        let mut chars = word.chars().filter(|c| c.is_alphanumeric());
        if let Some(first) = chars.next() {
            tag.extend(first.to_uppercase());
            tag.extend(chars);
        }
    }
    tag
}

/// 投稿末尾のハッシュタグ行を生成
///
/// 主タグ、専門家タグ3つ、共通タグの順に並べ、重複を除いて先頭5つを空白区切りで返す。
pub fn generate_relevant_hashtags(topic: &str, profile: &ExpertProfile) -> String {
    let primary = primary_hashtag(topic);
    let expert_tags = profile.expert_type.hashtags();

    let mut tags: Vec<&str> = Vec::with_capacity(MAX_HASHTAGS);
    let candidates = std::iter::once(primary.as_str())
        .chain(expert_tags.iter().copied())
        .chain(COMMON_HASHTAGS.iter().copied());

    for tag in candidates {
        // トピックに英数字がない場合の "#" 単体は除く
        if tag.len() > 1 && !tags.contains(&tag) {
            tags.push(tag);
        }
        if tags.len() == MAX_HASHTAGS {
            break;
        }
    }

    tags.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::content::persona::build_expert_profile;

    #[test]
    fn test_primary_hashtag() {
        assert_eq!(primary_hashtag("ai transformation"), "#AiTransformation");
        assert_eq!(primary_hashtag("Growth Marketing"), "#GrowthMarketing");
        assert_eq!(primary_hashtag("B2B  sales-ops!"), "#B2BSalesops");
        assert_eq!(primary_hashtag("AI ethics"), "#AIEthics");
    }

    #[test]
    fn test_growth_marketing_scenario() {
        let profile = build_expert_profile("Growth Marketing", "founders");
        let line = generate_relevant_hashtags("Growth Marketing", &profile);
        assert_eq!(
            line,
            "#GrowthMarketing #Marketing #Strategy #GrowthHacking #Leadership"
        );
    }

    #[test]
    fn test_deduplicates_common_tags() {
        let profile = build_expert_profile("leadership", "operators");
        // 業界コンサルタントのタグに #Leadership が含まれる
        let line = generate_relevant_hashtags("leadership", &profile);
        assert_eq!(line, "#Leadership #Business #Strategy #Success #Growth");
    }

    #[test]
    fn test_symbol_only_topic() {
        let profile = build_expert_profile("???", "anyone");
        let line = generate_relevant_hashtags("???", &profile);
        let tags: Vec<&str> = line.split(' ').collect();
        assert_eq!(tags.len(), 5);
        assert!(tags.iter().all(|t| t.len() > 1 && t.starts_with('#')));
    }
}
