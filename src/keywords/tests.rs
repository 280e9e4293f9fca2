//! Keyword codec and group edit tests

use super::{KeywordDocument, KeywordGroup};

fn doc(groups: &[&[&str]]) -> KeywordDocument {
    KeywordDocument::new(groups.iter().map(|g| KeywordGroup::new(g.iter())).collect())
}

fn as_vecs(document: &KeywordDocument) -> Vec<Vec<String>> {
    document
        .groups()
        .iter()
        .map(|g| g.words().to_vec())
        .collect()
}

#[test]
fn test_decode_basic() {
    let document = KeywordDocument::decode("a\nb\n\nc\n");
    assert_eq!(as_vecs(&document), vec![vec!["a", "b"], vec!["c"]]);
}

#[test]
fn test_encode_basic() {
    assert_eq!(doc(&[&["a", "b"], &["c"]]).encode(), "a\nb\n\nc\n");
}

#[test]
fn test_blank_runs_are_one_separator() {
    let document = KeywordDocument::decode("\n\n  a  \n\n\n\nb\n   \n\n");
    assert_eq!(as_vecs(&document), vec![vec!["a"], vec!["b"]]);
}

#[test]
fn test_empty_input() {
    assert!(KeywordDocument::decode("").is_empty());
    assert!(KeywordDocument::decode("\n \n\t\n").is_empty());
    assert_eq!(KeywordDocument::default().encode(), "");
}

#[test]
fn test_crlf_input() {
    let document = KeywordDocument::decode("AI\r\n手机+华为\r\n\r\n手机!苹果\r\n");
    assert_eq!(
        as_vecs(&document),
        vec![vec!["AI", "手机+华为"], vec!["手机!苹果"]]
    );
}

#[test]
fn test_round_trip() {
    let cases: &[&[&[&str]]] = &[
        &[&["a"]],
        &[&["a", "b", "c"], &["d"], &["e", "f"]],
        &[&["手机+华为", "手机!苹果"], &["AI"]],
    ];
    for groups in cases {
        let document = doc(groups);
        assert_eq!(KeywordDocument::decode(&document.encode()), document);
    }
}

#[test]
fn test_numbered_positions() {
    let document = doc(&[&["a", "b"], &["c"]]);
    let listing: Vec<_> = document
        .numbered()
        .map(|k| (k.position, k.group, k.word, k.text))
        .collect();
    assert_eq!(
        listing,
        vec![(1, 0, 0, "a"), (2, 0, 1, "b"), (3, 1, 0, "c")]
    );
    assert_eq!(document.keyword_count(), 3);
}

#[test]
fn test_remove_positions_across_groups() {
    let mut document = doc(&[&["a", "b", "c"], &["d", "e", "f"]]);
    assert_eq!(document.remove_positions(&[2, 5]), 2);
    assert_eq!(as_vecs(&document), vec![vec!["a", "c"], vec!["d", "f"]]);
}

#[test]
fn test_remove_positions_drops_emptied_group() {
    let mut document = doc(&[&["a"], &["b", "c"], &["d"]]);
    assert_eq!(document.remove_positions(&[1, 4, 99]), 2);
    assert_eq!(as_vecs(&document), vec![vec!["b", "c"]]);
}

#[test]
fn test_remove_unknown_positions_is_noop() {
    let mut document = doc(&[&["a"]]);
    assert_eq!(document.remove_positions(&[0, 2]), 0);
    assert_eq!(as_vecs(&document), vec![vec!["a"]]);
}

#[test]
fn test_add_to_group_skips_existing() {
    let mut document = doc(&[&["a", "b"], &["c"]]);
    assert_eq!(document.add_to_group(0, ["b", " x ", "", "y"]), Some(2));
    assert_eq!(document.add_to_group(5, ["z"]), None);
    assert_eq!(as_vecs(&document), vec![vec!["a", "b", "x", "y"], vec!["c"]]);
}

#[test]
fn test_push_group() {
    let mut document = KeywordDocument::default();
    assert!(!document.push_group(["", "  "]));
    assert!(document.is_empty());
    assert!(document.push_group(["AI", "芯片"]));
    assert_eq!(document.encode(), "AI\n芯片\n");
}

#[test]
fn test_words_with_newlines_are_split() {
    let group = KeywordGroup::new(["a\nb", "c"]);
    assert_eq!(group.words(), ["a", "b", "c"]);
}

#[test]
fn test_remove_groups_and_clear() {
    let mut document = doc(&[&["a"], &["b"], &["c"]]);
    assert_eq!(document.remove_groups(&[0, 2, 7]), 2);
    assert_eq!(as_vecs(&document), vec![vec!["b"]]);
    document.clear();
    assert!(document.is_empty());
    assert_eq!(document.encode(), "");
}

#[test]
fn test_order_preserved_through_edits() {
    let mut document = doc(&[&["a", "b"]]);
    document.push_group(["c"]);
    document.add_to_group(0, ["z"]);
    document.remove_positions(&[2]);
    assert_eq!(document.encode(), "a\nz\n\nc\n");
}

#[test]
fn test_preview() {
    let group = KeywordGroup::new(["a", "b", "c", "d"]);
    assert_eq!(group.preview(3), "a, b, c...");
    assert_eq!(KeywordGroup::new(["a"]).preview(3), "a");
}

#[test]
fn test_json_shape() {
    let document = doc(&[&["a", "b"], &["c"]]);
    let json = serde_json::to_string(&document).expect("serialize");
    assert_eq!(json, r#"[["a","b"],["c"]]"#);
}
