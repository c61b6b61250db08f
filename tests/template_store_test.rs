//! テンプレートストアの統合テスト

use postcraft::ai::content::placeholder::has_unfilled;
use postcraft::ai::content::template::relevance_score;
use postcraft::ai::content::{
    EngagementTier, LengthTier, TemplateCategory, TemplateStore, TemplateStructure,
};
use postcraft::random::{SeededRandom, SequenceRandom};
use std::collections::HashMap;
use std::io::Write;

fn fill_all(template: &TemplateStructure) -> HashMap<String, String> {
    template
        .placeholders
        .iter()
        .map(|name| (name.clone(), format!("value for {}", name)))
        .collect()
}

#[test]
fn test_builtin_catalog_statistics() {
    let store = TemplateStore::builtin();
    let stats = store.statistics();

    assert_eq!(stats.total_categories, 25);
    assert_eq!(stats.total_templates, 37);
    assert_eq!(stats.average_templates_per_category, 1);
    assert_eq!(stats.total_tags, store.all_tags().len());
}

#[test]
fn test_every_template_renders_without_placeholders() {
    let store = TemplateStore::builtin();
    for template in store.templates() {
        let rendered = template.render(&fill_all(template));
        assert!(rendered.unfilled.is_empty(), "{}", template.id);
        assert!(!has_unfilled(&rendered.content), "{}", template.id);
    }
}

#[test]
fn test_render_reports_missing_values_in_order() {
    let store = TemplateStore::builtin();
    let template = store.template("Motivation", 1).unwrap();
    assert_eq!(template.id, "mt_002");

    let mut values = HashMap::new();
    values.insert("lesson".to_string(), "rest is productive".to_string());
    let rendered = template.render(&values);

    assert_eq!(rendered.unfilled, vec!["obstacle", "motivation", "key_action"]);
    assert!(rendered.content.contains("I've learned that rest is productive."));
    assert!(rendered.content.contains("[insert key action]"));
}

#[test]
fn test_category_lookups() {
    let store = TemplateStore::builtin();

    assert_eq!(store.templates_by_category("Personal Story").len(), 10);
    assert!(store.templates_by_category("Remote Work").is_empty());
    assert!(store.templates_by_category("Unknown").is_empty());
    assert!(store.category("Unknown").is_none());
    assert!(store.template("Leadership", 3).is_none());
}

#[test]
fn test_search_is_ranked_and_filterable() {
    let store = TemplateStore::builtin();

    let hits = store.search_templates("team", &[] as &[&str]);
    assert!(!hits.is_empty());
    for template in &hits {
        let text = format!("{} {} {}", template.title, template.preview, template.body_pattern);
        assert!(text.to_lowercase().contains("team"));
    }

    let uppercase = store.search_templates("TEAM", &[] as &[&str]);
    assert_eq!(hits, uppercase);

    let filtered = store.search_templates("team", &["inspirational"]);
    for template in &filtered {
        let category = store.category(&template.category_id).unwrap();
        assert!(category.has_any_tag(&["inspirational"]));
    }
    assert!(filtered.len() <= hits.len());

    assert!(store.search_templates("zzzz-not-present", &[] as &[&str]).is_empty());
}

fn category(id: &str, tags: &[&str]) -> TemplateCategory {
    TemplateCategory {
        id: id.to_string(),
        name: id.to_string(),
        description: format!("{} posts", id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        icon: "*".to_string(),
        color: "#123456".to_string(),
    }
}

fn template(id: &str, category_id: &str, title: &str, body: &str) -> TemplateStructure {
    TemplateStructure {
        id: id.to_string(),
        title: title.to_string(),
        category_id: category_id.to_string(),
        body_pattern: body.to_string(),
        placeholders: Vec::new(),
        engagement: EngagementTier::Medium,
        length: LengthTier::Short,
        hashtag_hint: String::new(),
        preview: String::new(),
    }
}

#[test]
fn test_search_ties_keep_catalog_order() {
    // テンプレートの並びはカテゴリの登録順に揃えられる
    let store = TemplateStore::from_parts(
        vec![category("Alpha", &["craft"]), category("Beta", &["people"])],
        vec![
            template("b_001", "Beta", "Remote team rituals", "Our remote team rituals work."),
            template("a_001", "Alpha", "Code review", "A remote team rituals retro."),
            template("a_002", "Alpha", "Remote team", "Hiring for a remote team."),
            template("a_003", "Alpha", "Onboarding", "Team rituals for remote hires."),
        ],
    )
    .unwrap();

    let ids: Vec<&str> = store
        .search_templates("remote team rituals", &[] as &[&str])
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a_001", "b_001"]);

    let ids: Vec<&str> = store
        .search_templates("remote team", &[] as &[&str])
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a_001", "a_002", "b_001"]);

    let ids: Vec<&str> = store
        .search_templates("remote team", &["PEOPLE"])
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b_001"]);
}

#[test]
fn test_relevance_score_weights() {
    let text = "team rituals for remote hires";

    assert_eq!(relevance_score(text, "team rituals"), 10 + 2 * 2);
    assert_eq!(relevance_score(text, "remote team"), 2 * 2);
    assert_eq!(relevance_score(text, "remote team budget"), 2 * 2);
    assert_eq!(relevance_score(text, "budget"), 0);
}

#[test]
fn test_templates_by_tags_case_insensitive() {
    let store = TemplateStore::builtin();
    let lower = store.templates_by_tags(&["inspirational"]);
    let upper = store.templates_by_tags(&["INSPIRATIONAL"]);
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    assert!(lower.iter().all(|t| {
        store
            .category(&t.category_id)
            .is_some_and(|c| c.has_any_tag(&["inspirational"]))
    }));
}

#[test]
fn test_random_template_within_category() {
    let store = TemplateStore::builtin();
    let rng = SequenceRandom::new(vec![0, 1, 2]);

    let picks: Vec<&str> = (0..3)
        .map(|_| store.random_template(Some("Leadership"), &rng).unwrap().id.as_str())
        .collect();
    assert_eq!(picks, vec!["ld_001", "ld_002", "ld_003"]);

    assert!(store.random_template(Some("Remote Work"), &rng).is_none());
}

#[test]
fn test_random_template_category_frequency_is_uniform() {
    let store = TemplateStore::builtin();
    let rng = SeededRandom::new(42);
    let draws = 9000;

    let mut per_category: HashMap<String, usize> = HashMap::new();
    let mut per_template: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let template = store.random_template(None, &rng).unwrap();
        *per_category.entry(template.category_id.clone()).or_default() += 1;
        *per_template.entry(template.id.clone()).or_default() += 1;
    }

    // テンプレートを持つ9カテゴリがほぼ均等に選ばれる
    assert_eq!(per_category.len(), 9);
    let expected = draws / per_category.len();
    for (category, count) in &per_category {
        assert!(
            count.abs_diff(expected) < expected / 5,
            "{} drawn {} times",
            category,
            count
        );
    }

    // 単独テンプレートのカテゴリは10件のカテゴリの各テンプレートより選ばれやすい
    let single = per_template["ii_001"];
    let crowded = per_template.get("ps_001").copied().unwrap_or(0);
    assert!(single > crowded * 3, "ii_001={} ps_001={}", single, crowded);
}

#[test]
fn test_catalog_from_json_file_rejects_unknown_category() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"{
            "categories": [],
            "templates": [{"id": "x_001", "title": "Orphan", "category_id": "Missing",
                           "body_pattern": "Hello {name}", "placeholders": ["name"],
                           "engagement": "low", "length": "short",
                           "hashtag_hint": "", "preview": ""}]
        }"#,
    )
    .unwrap();

    assert!(TemplateStore::from_json_file(file.path()).is_err());
}
