//! Placeholder Rendering
//!
//! `{name}` 形式のプレースホルダーを一回の走査で置換する。
//! 置換後の値は再走査しないため、部分置換や二重置換は起きない。

use std::borrow::Cow;
use std::collections::HashMap;

/// プレースホルダー名として有効な文字か
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `{` の直後から名前と閉じ括弧を読み取る
///
/// 有効なトークンなら `(名前, トークン全体のバイト長)` を返す。
fn read_token(rest: &str) -> Option<(&str, usize)> {
    let body = rest.strip_prefix('{')?;
    let end = body.find(|c: char| !is_name_char(c))?;
    if end == 0 || !body[end..].starts_with('}') {
        return None;
    }
    Some((&body[..end], end + 2))
}

/// リゾルバで各プレースホルダーを置換
///
/// リゾルバが `None` を返したトークンはそのまま残す。
pub fn render_with<'v, F>(pattern: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<Cow<'v, str>>,
{
    let mut output = String::with_capacity(pattern.len() + 64);
    let mut rest = pattern;

    while let Some(pos) = rest.find('{') {
        output.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match read_token(rest) {
            Some((name, len)) => {
                match resolve(name) {
                    Some(value) => output.push_str(&value),
                    None => output.push_str(&rest[..len]),
                }
                rest = &rest[len..];
            }
            None => {
                output.push('{');
                rest = &rest[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// 値マップで置換
pub fn render(pattern: &str, values: &HashMap<String, String>) -> String {
    render_with(pattern, |name| values.get(name).map(|v| Cow::Borrowed(v.as_str())))
}

/// テキスト中のプレースホルダー名を出現順（重複なし）で取得
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    render_with(text, |name| {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        None
    });
    names
}

/// 未置換のプレースホルダーが残っているか
pub fn has_unfilled(text: &str) -> bool {
    !placeholder_names(text).is_empty()
}

/// 未入力プレースホルダーの案内マーカー
pub fn guidance_marker(name: &str) -> String {
    format!("[insert {}]", name.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_basic() {
        let v = values(&[("topic", "AI"), ("audience", "founders")]);
        assert_eq!(
            render("{topic} for {audience}", &v),
            "AI for founders".to_string()
        );
    }

    #[test]
    fn test_render_is_single_pass() {
        // 値に含まれるトークンは再置換されない
        let v = values(&[("topic", "{audience}"), ("audience", "founders")]);
        assert_eq!(render("{topic}!", &v), "{audience}!");
    }

    #[test]
    fn test_render_leaves_unknown_and_malformed() {
        let v = values(&[("topic", "AI")]);
        assert_eq!(render("{missing} {topic}", &v), "{missing} AI");
        assert_eq!(render("{ topic} {} {topic", &v), "{ topic} {} {topic");
        assert_eq!(render("{{topic}}", &v), "{AI}");
    }

    #[test]
    fn test_placeholder_names_in_order() {
        let names = placeholder_names("{b} then {a} then {b} and {not valid}");
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
        assert!(has_unfilled("hello {name}"));
        assert!(!has_unfilled("hello {1} name}"));
    }

    #[test]
    fn test_guidance_marker() {
        assert_eq!(guidance_marker("current_state"), "[insert current state]");
    }

    #[test]
    fn test_render_multibyte_text() {
        let v = values(&[("topic", "データ")]);
        assert_eq!(render("→ {topic} ✓", &v), "→ データ ✓");
    }
}
