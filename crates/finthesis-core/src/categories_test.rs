use std::path::Path;

use super::*;

fn entries(group: &CategoryGroup) -> Vec<CategoryEntry> {
    group.entries().to_vec()
}

#[test]
fn fintech_table_has_shipped_group_sizes() {
    let table = CategoryTable::fintech();
    assert_eq!(table.themes().len(), 12);
    assert_eq!(table.risks().len(), 10);
    assert_eq!(table.signals().len(), 10);
}

#[test]
fn fintech_table_passes_validation() {
    let table = CategoryTable::fintech();
    let rebuilt = CategoryTable::new(
        entries(table.themes()),
        entries(table.risks()),
        entries(table.signals()),
    )
    .expect("built-in table should validate");
    assert_eq!(rebuilt, table);
}

#[test]
fn group_lookup_matches_kind() {
    let table = CategoryTable::fintech();
    for kind in CategoryGroupKind::ALL {
        assert_eq!(table.group(kind).kind(), kind);
    }
    assert_eq!(table.themes().entries()[0].label, "AI-Powered Automation");
    assert_eq!(table.risks().entries()[0].label, "Regulatory Risk");
    assert_eq!(table.signals().entries()[0].label, "B2B Fintech Expansion");
}

#[test]
fn keywords_are_trimmed_lowercased_and_deduplicated() {
    let table = CategoryTable::new(
        vec![CategoryEntry::new(
            "  Embedded Finance ",
            ["Embedded Finance", " BaaS", "baas"],
        )],
        vec![],
        vec![],
    )
    .unwrap();
    let entry = &table.themes().entries()[0];
    assert_eq!(entry.label, "Embedded Finance");
    assert_eq!(entry.keywords, vec!["embedded finance", "baas"]);
}

#[test]
fn empty_groups_are_allowed() {
    let table = CategoryTable::new(vec![], vec![], vec![]).unwrap();
    assert!(table.themes().is_empty());
    assert!(table.risks().is_empty());
    assert!(table.signals().is_empty());
}

#[test]
fn rejects_duplicate_label_within_group() {
    let err = CategoryTable::new(
        vec![],
        vec![
            CategoryEntry::new("Regulatory", ["regulatory"]),
            CategoryEntry::new("regulatory", ["sec"]),
        ],
        vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate category label"));
    assert!(err.to_string().contains("risks"));
}

#[test]
fn same_label_in_different_groups_is_allowed() {
    let result = CategoryTable::new(
        vec![CategoryEntry::new("Payments", ["payment"])],
        vec![],
        vec![CategoryEntry::new("Payments", ["payment rail"])],
    );
    assert!(result.is_ok());
}

#[test]
fn rejects_empty_label() {
    let err = CategoryTable::new(vec![CategoryEntry::new(" ", ["x"])], vec![], vec![]).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn rejects_entry_without_keywords() {
    let err = CategoryTable::new(
        vec![CategoryEntry::new("Empty", Vec::<String>::new())],
        vec![],
        vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("has no keywords"));
}

#[test]
fn rejects_blank_keyword() {
    let err = CategoryTable::new(
        vec![CategoryEntry::new("Blank", ["ok", "  "])],
        vec![],
        vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("blank keyword"));
}

#[test]
fn from_yaml_parses_all_groups_in_order() {
    let yaml = r"
themes:
  - label: Embedded Finance
    keywords: [embedded, finance]
  - label: Payments
    keywords: [payments]
risks:
  - label: Regulatory
    keywords: [regulatory]
signals: []
";
    let table = CategoryTable::from_yaml_str(yaml).unwrap();
    let labels: Vec<&str> = table
        .themes()
        .entries()
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Embedded Finance", "Payments"]);
    assert_eq!(table.risks().len(), 1);
    assert!(table.signals().is_empty());
}

#[test]
fn from_yaml_reports_missing_group() {
    let yaml = r"
themes: []
risks: []
";
    let err = CategoryTable::from_yaml_str(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::MissingGroup(ref g) if g == "signals"),
        "expected MissingGroup(signals), got: {err:?}"
    );
}

#[test]
fn from_yaml_rejects_malformed_document() {
    let err = CategoryTable::from_yaml_str("themes: [label: ").unwrap_err();
    assert!(matches!(err, ConfigError::CategoryFileParse(_)));
}

#[test]
fn load_category_table_reports_io_error() {
    let err = load_category_table(Path::new("/nonexistent/categories.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CategoryFileIo { .. }));
}

#[test]
fn shipped_yaml_matches_builtin_table() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("categories.yaml");
    assert!(
        path.exists(),
        "categories.yaml missing at {path:?}, required for this test"
    );
    let table = load_category_table(&path).expect("shipped categories.yaml should load");
    assert_eq!(table, CategoryTable::fintech());
}

#[test]
fn group_kind_display() {
    assert_eq!(CategoryGroupKind::Themes.to_string(), "themes");
    assert_eq!(CategoryGroupKind::Risks.to_string(), "risks");
    assert_eq!(CategoryGroupKind::Signals.to_string(), "signals");
}
