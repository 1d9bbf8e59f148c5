//! Composer behaviour: budget, composed output and export rules

use chirp::model::{compose, post_len, remaining_budget, Composer, ExportBlock, TagSet, CHAR_LIMIT};

fn tags(list: &[&str]) -> TagSet {
    list.iter().copied().collect()
}

// ============================================================================
// Budget
// ============================================================================

#[test]
fn test_budget_counts_message_and_joined_tags() {
    // "hello" = 5, "a b" = 3
    assert_eq!(remaining_budget("hello", &tags(&["a", "b"])), 272);
}

#[test]
fn test_budget_empty_is_full_limit() {
    assert_eq!(remaining_budget("", &TagSet::new()), CHAR_LIMIT);
}

#[test]
fn test_budget_counts_utf16_units() {
    // 4 astral emoji, 2 UTF-16 units each
    assert_eq!(remaining_budget("🐦🐦🐦🐦", &TagSet::new()), 272);
    assert_eq!(remaining_budget("ñandú", &TagSet::new()), 275);
    assert_eq!(remaining_budget("✨", &TagSet::new()), 279);
    assert_eq!(remaining_budget("", &tags(&["😊"])), 278);
}

#[test]
fn test_astral_emoji_message_goes_over_limit() {
    let mut c = Composer::new();
    c.set_message("😊".repeat(140));
    c.add_tag("a");
    assert_eq!(c.remaining(), -1);
    assert!(c.is_over_limit());
    assert!(!c.can_export());
    assert_eq!(c.export(), Err(ExportBlock::OverLimit { over: 1 }));
}

#[test]
fn test_default_palette_costs() {
    let mut c = Composer::new();
    c.insert_emoji("😊");
    assert_eq!(c.remaining(), 278);
    let double: Vec<_> = chirp::model::DEFAULT_EMOJIS
        .iter()
        .filter(|e| post_len(e) == 2)
        .collect();
    assert_eq!(double.len(), 9);
    assert_eq!(post_len("✨"), 1);
}

#[test]
fn test_budget_goes_negative() {
    let message = "x".repeat(281);
    assert_eq!(remaining_budget(&message, &TagSet::new()), -1);
}

#[test]
fn test_budget_undercounts_composed_output() {
    let mut c = Composer::new();
    c.set_message("hi");
    c.add_tag("rust");
    c.add_tag("gui");
    // Budget sees "hi" + "rust gui" = 10, output is "hi #rust #gui" = 13
    assert_eq!(c.remaining(), 270);
    assert_eq!(c.composed_len(), 13);
    assert_eq!(c.budget_discrepancy(), 3);
}

// ============================================================================
// Composed output
// ============================================================================

#[test]
fn test_compose_message_only() {
    assert_eq!(compose("hello", &TagSet::new()), "hello");
}

#[test]
fn test_compose_tags_only_is_trimmed() {
    assert_eq!(compose("", &tags(&["a", "b"])), "#a #b");
}

#[test]
fn test_compose_trims_surrounding_whitespace() {
    assert_eq!(compose("  hi  ", &tags(&["x"])), "hi   #x");
    assert_eq!(compose("\nhi\n", &TagSet::new()), "hi");
}

#[test]
fn test_compose_keeps_tag_order() {
    assert_eq!(compose("m", &tags(&["z", "a", "m"])), "m #z #a #m");
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_blocked_on_empty_message_even_with_tags() {
    let mut c = Composer::new();
    c.add_tag("rust");
    assert_eq!(c.export(), Err(ExportBlock::EmptyMessage));
    assert!(!c.can_export());
}

#[test]
fn test_export_blocked_when_over_limit() {
    let mut c = Composer::new();
    c.set_message("x".repeat(280));
    c.add_tag("ab");
    assert_eq!(c.remaining(), -2);
    assert_eq!(c.export(), Err(ExportBlock::OverLimit { over: 2 }));
}

#[test]
fn test_export_allowed_at_exactly_zero_remaining() {
    let mut c = Composer::new();
    c.set_message("x".repeat(278));
    c.add_tag("ab");
    assert_eq!(c.remaining(), 0);
    assert!(!c.is_over_limit());
    let post = c.export().unwrap();
    assert!(post.ends_with(" #ab"));
}

#[test]
fn test_whitespace_message_is_not_empty() {
    let mut c = Composer::new();
    c.set_message("   ");
    assert!(c.can_export());
    assert_eq!(c.export(), Ok(String::new()));
}

#[test]
fn test_export_block_messages() {
    assert_eq!(ExportBlock::EmptyMessage.to_string(), "message is empty");
    assert_eq!(
        ExportBlock::OverLimit { over: 4 }.to_string(),
        "post is 4 character(s) over the limit"
    );
}

// ============================================================================
// Tags through the composer
// ============================================================================

#[test]
fn test_add_tag_clears_draft_only_on_success() {
    let mut c = Composer::new();
    c.set_tag_draft("rust");
    assert!(c.submit_tag_draft());
    assert_eq!(c.tag_draft(), "");

    c.set_tag_draft("rust");
    assert!(!c.submit_tag_draft());
    assert_eq!(c.tag_draft(), "rust");
    assert_eq!(c.tags.len(), 1);
}

#[test]
fn test_emoji_appends_to_message() {
    let mut c = Composer::new();
    c.set_message("hi");
    c.insert_emoji("🔥");
    assert_eq!(c.message(), "hi🔥");
    assert_eq!(c.remaining(), 276);
}

#[test]
fn test_summary_serializes_to_json() {
    let mut c = Composer::new();
    c.set_message("hello");
    c.add_tag("rust");
    let json = serde_json::to_value(c.summary()).unwrap();
    assert_eq!(json["composed"], "hello #rust");
    assert_eq!(json["remaining"], 271);
    assert_eq!(json["over_limit"], false);
    assert_eq!(json["can_export"], true);
    assert_eq!(json["tags"][0], "rust");
}
