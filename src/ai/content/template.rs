//! Template Store
//!
//! 投稿テンプレートのカテゴリと構成を保持する読み取り専用カタログ

use super::catalog;
use super::placeholder;
use crate::error::{Error, Result};
use crate::random::{pick, RandomSource};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

/// エンゲージメント見込み
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTier {
    /// 低
    Low,
    /// 中
    Medium,
    /// 高
    High,
    /// 非常に高い
    VeryHigh,
}

/// 投稿の長さ区分
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LengthTier {
    /// 短い
    Short,
    /// 中程度
    Medium,
    /// 長い
    Long,
}

/// テンプレートカテゴリ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateCategory {
    /// カテゴリID
    pub id: String,
    /// 表示名
    pub name: String,
    /// 説明
    pub description: String,
    /// タグ
    pub tags: Vec<String>,
    /// アイコン
    pub icon: String,
    /// 表示色
    pub color: String,
}

impl TemplateCategory {
    /// タグが一致するか（大文字小文字を区別しない）
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|wanted| {
            self.tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(wanted.as_ref()))
        })
    }
}

/// テンプレート構成
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateStructure {
    /// テンプレートID（カテゴリ内で一意）
    pub id: String,
    /// タイトル
    pub title: String,
    /// 所属カテゴリID
    pub category_id: String,
    /// `{name}` プレースホルダーを含む本文パターン
    pub body_pattern: String,
    /// プレースホルダー名（出現順）
    pub placeholders: Vec<String>,
    /// エンゲージメント見込み
    pub engagement: EngagementTier,
    /// 長さ区分
    pub length: LengthTier,
    /// 推奨ハッシュタグ
    pub hashtag_hint: String,
    /// 一行プレビュー
    pub preview: String,
}

/// テンプレート適用結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    /// 適用後のテキスト
    pub content: String,
    /// 値が与えられなかったプレースホルダー
    pub unfilled: Vec<String>,
}

impl TemplateStructure {
    /// 値を適用してテンプレートを展開
    ///
    /// 値がない（または空の）プレースホルダーは `[insert name]` 形式の案内に置き換える。
    pub fn render(&self, values: &HashMap<String, String>) -> RenderedTemplate {
        let mut unfilled = Vec::new();
        let content = placeholder::render_with(&self.body_pattern, |name| {
            match values.get(name).filter(|v| !v.trim().is_empty()) {
                Some(value) => Some(Cow::Borrowed(value.as_str())),
                None => {
                    if !unfilled.iter().any(|n: &String| n == name) {
                        unfilled.push(name.to_string());
                    }
                    Some(Cow::Owned(placeholder::guidance_marker(name)))
                }
            }
        });
        RenderedTemplate { content, unfilled }
    }

    /// 検索対象テキスト（小文字化済み）
    fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.preview, self.body_pattern).to_lowercase()
    }
}

/// カタログ統計
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateStatistics {
    /// カテゴリ数
    pub total_categories: usize,
    /// テンプレート数
    pub total_templates: usize,
    /// タグ数（重複なし）
    pub total_tags: usize,
    /// カテゴリあたりの平均テンプレート数（四捨五入）
    pub average_templates_per_category: usize,
}

/// JSONカタログファイルの形式
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<TemplateCategory>,
    templates: Vec<TemplateStructure>,
}

/// テンプレートストア
///
/// 構築後は不変。`Arc` で共有して並行に読み取れる。
#[derive(Debug, Clone)]
pub struct TemplateStore {
    categories: Vec<TemplateCategory>,
    templates: Vec<TemplateStructure>,
}

impl TemplateStore {
    /// 組み込みカタログからストアを作成
    pub fn builtin() -> Self {
        Self {
            categories: catalog::categories(),
            templates: catalog::templates(),
        }
    }

    /// カテゴリとテンプレートからストアを作成（整合性を検証）
    pub fn from_parts(
        categories: Vec<TemplateCategory>,
        templates: Vec<TemplateStructure>,
    ) -> Result<Self> {
        validate_catalog(&categories, &templates)?;

        // テンプレートをカテゴリ順に並べ替え（カテゴリ内の順序は維持）
        let mut ordered = Vec::with_capacity(templates.len());
        for category in &categories {
            ordered.extend(
                templates
                    .iter()
                    .filter(|t| t.category_id == category.id)
                    .cloned(),
            );
        }

        Ok(Self {
            categories,
            templates: ordered,
        })
    }

    /// JSONファイルからストアを作成
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        Self::from_parts(file.categories, file.templates)
    }

    /// 全カテゴリ（登録順）
    pub fn categories(&self) -> &[TemplateCategory] {
        &self.categories
    }

    /// カテゴリを取得
    pub fn category(&self, category_id: &str) -> Option<&TemplateCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// 全テンプレート（カタログ順）
    pub fn templates(&self) -> &[TemplateStructure] {
        &self.templates
    }

    /// カテゴリ内のテンプレート（不明なIDなら空）
    pub fn templates_by_category(&self, category_id: &str) -> Vec<&TemplateStructure> {
        self.templates
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }

    /// カテゴリ内のインデックスでテンプレートを取得
    pub fn template(&self, category_id: &str, index: usize) -> Option<&TemplateStructure> {
        self.templates
            .iter()
            .filter(|t| t.category_id == category_id)
            .nth(index)
    }

    /// キーワードでテンプレートを検索
    ///
    /// キーワード全体がタイトル・プレビュー・本文のいずれかに含まれるものが対象。
    /// 関連度の降順で並び、同点はカタログ順。
    pub fn search_templates<S: AsRef<str>>(
        &self,
        keyword: &str,
        filter_tags: &[S],
    ) -> Vec<&TemplateStructure> {
        let term = keyword.to_lowercase();

        let mut hits: Vec<(&TemplateStructure, u32)> = self
            .templates
            .iter()
            .filter(|t| {
                filter_tags.is_empty()
                    || self
                        .category(&t.category_id)
                        .is_some_and(|c| c.has_any_tag(filter_tags))
            })
            .filter_map(|t| {
                let text = t.searchable_text();
                text.contains(&term)
                    .then(|| (t, relevance_score(&text, &term)))
            })
            .collect();

        // sort_by は安定ソート
        hits.sort_by(|a, b| b.1.cmp(&a.1));
        hits.into_iter().map(|(t, _)| t).collect()
    }

    /// タグを共有するカテゴリのテンプレート（カタログ順）
    pub fn templates_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&TemplateStructure> {
        self.templates
            .iter()
            .filter(|t| {
                self.category(&t.category_id)
                    .is_some_and(|c| c.has_any_tag(tags))
            })
            .collect()
    }

    /// ランダムにテンプレートを選択
    ///
    /// カテゴリ未指定時は、まずテンプレートを持つカテゴリを一様に選び、
    /// 次にその中のテンプレートを一様に選ぶ二段階選択。
    /// テンプレート数の少ないカテゴリのテンプレートほど選ばれやすく、
    /// 全テンプレートに対して一様ではない。
    pub fn random_template(
        &self,
        category_id: Option<&str>,
        rng: &dyn RandomSource,
    ) -> Option<&TemplateStructure> {
        let category_id = match category_id {
            Some(id) => id,
            None => {
                let populated: Vec<&str> = self
                    .categories
                    .iter()
                    .filter(|c| self.templates.iter().any(|t| t.category_id == c.id))
                    .map(|c| c.id.as_str())
                    .collect();
                *pick(rng, &populated)?
            }
        };

        let templates = self.templates_by_category(category_id);
        pick(rng, &templates).copied()
    }

    /// 全タグ（重複なし・ソート済み）
    pub fn all_tags(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// カタログ統計を取得
    pub fn statistics(&self) -> TemplateStatistics {
        let total_categories = self.categories.len();
        let total_templates = self.templates.len();
        let average = if total_categories == 0 {
            0
        } else {
            (total_templates as f64 / total_categories as f64).round() as usize
        };

        TemplateStatistics {
            total_categories,
            total_templates,
            total_tags: self.all_tags().len(),
            average_templates_per_category: average,
        }
    }
}

/// 検索関連度スコア
///
/// キーワード全体の一致で10点、空白区切りの各単語の一致ごとに2点。
pub fn relevance_score(text: &str, term: &str) -> u32 {
    let phrase = if text.contains(term) { 10 } else { 0 };
    let words = term
        .split(' ')
        .filter(|word| text.contains(word))
        .count() as u32;
    phrase + words * 2
}

/// カタログの整合性を検証
fn validate_catalog(
    categories: &[TemplateCategory],
    templates: &[TemplateStructure],
) -> Result<()> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(Error::InvalidInput(format!(
                "Duplicate category id '{}'",
                category.id
            )));
        }
    }

    let mut template_ids = HashSet::new();
    for template in templates {
        if !category_ids.contains(template.category_id.as_str()) {
            return Err(Error::InvalidInput(format!(
                "Template '{}' references unknown category '{}'",
                template.id, template.category_id
            )));
        }

        if !template_ids.insert((template.category_id.as_str(), template.id.as_str())) {
            return Err(Error::InvalidInput(format!(
                "Duplicate template id '{}' in category '{}'",
                template.id, template.category_id
            )));
        }

        let used = placeholder::placeholder_names(&template.body_pattern);
        for name in &template.placeholders {
            if !used.contains(name) {
                return Err(Error::InvalidInput(format!(
                    "Template '{}' declares placeholder '{}' missing from its body",
                    template.id, name
                )));
            }
        }
        for name in &used {
            if !template.placeholders.contains(name) {
                return Err(Error::InvalidInput(format!(
                    "Template '{}' uses undeclared placeholder '{}'",
                    template.id, name
                )));
            }
        }
    }

    Ok(())
}
