//! Property-based invariants for the composer.
//!
//! Verifies:
//! 1. Setting the message then reading it returns the same string
//! 2. Appending text lowers the budget by exactly its UTF-16 length
//! 3. Tag order is the order of successful adds, whatever removals interleave
//! 4. Adding a present tag or removing an absent one changes nothing

use chirp::model::{post_len, Composer, TagSet};
use proptest::prelude::*;

/// Inputs the random strategies rarely hit on their own
const AWKWARD_TEXT: &[&str] = &[
    "",
    " ",
    "\t \t",
    "\n",
    "line one\nline two\n",
    "\r\n",
    "日本語のテキスト",
    "😊",
    "🎉🔥👍",
    "❤️",
    "e\u{301}",
    "a\u{0308}\u{0323}",
    "#hashtag",
    "mixed 漢字 and 🌟 emoji\n",
];

#[derive(Debug, Clone)]
enum TagOp {
    Add(String),
    Remove(String),
}

fn arb_tag() -> impl Strategy<Value = String> {
    // Small alphabet so removes and re-adds actually collide
    prop_oneof![
        Just(String::new()),
        "[abc]{1,2}",
        Just("🔥".to_string()),
        Just("Rust".to_string()),
        Just("rust".to_string()),
    ]
}

fn arb_tag_op() -> impl Strategy<Value = TagOp> {
    prop_oneof![
        arb_tag().prop_map(TagOp::Add),
        arb_tag().prop_map(TagOp::Remove),
    ]
}

// ============================================================================
// Table checks
// ============================================================================

#[test]
fn test_set_message_round_trips_awkward_text() {
    for text in AWKWARD_TEXT {
        let mut c = Composer::new();
        c.set_message(*text);
        assert_eq!(c.message(), *text, "round trip of {text:?}");
    }
}

#[test]
fn test_budget_drops_per_appended_unit_on_awkward_text() {
    for base in AWKWARD_TEXT {
        for suffix in AWKWARD_TEXT {
            let mut c = Composer::new();
            c.set_message(*base);
            let before = c.remaining();
            c.set_message(format!("{base}{suffix}"));
            assert_eq!(
                before - c.remaining(),
                post_len(suffix) as i64,
                "appending {suffix:?} to {base:?}"
            );
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn set_message_round_trips(text in any::<String>()) {
        let mut c = Composer::new();
        c.set_message(text.clone());
        prop_assert_eq!(c.message(), text.as_str());
    }

    #[test]
    fn each_appended_char_costs_its_utf16_len(base in any::<String>(), ch in any::<char>()) {
        let mut c = Composer::new();
        c.set_message(base.clone());
        let before = c.remaining();

        c.insert_emoji(&ch.to_string());
        prop_assert_eq!(before - c.remaining(), ch.len_utf16() as i64);
        prop_assert!(c.message().starts_with(base.as_str()));
    }

    #[test]
    fn bmp_chars_cost_exactly_one(base in "\\PC{0,40}", ch in any::<char>().prop_filter("BMP", |c| c.len_utf16() == 1)) {
        let mut c = Composer::new();
        c.set_message(base.clone());
        let before = c.remaining();
        c.set_message(format!("{base}{ch}"));
        prop_assert_eq!(before - c.remaining(), 1);
    }

    #[test]
    fn tag_order_follows_successful_adds(ops in prop::collection::vec(arb_tag_op(), 0..40)) {
        let mut tags = TagSet::new();
        let mut expected: Vec<String> = Vec::new();

        for op in ops {
            match op {
                TagOp::Add(tag) => {
                    let added = tags.add(&tag);
                    let should_add = !tag.is_empty() && !expected.contains(&tag);
                    prop_assert_eq!(added, should_add);
                    if should_add {
                        expected.push(tag);
                    }
                }
                TagOp::Remove(tag) => {
                    let removed = tags.remove(&tag);
                    prop_assert_eq!(removed, expected.contains(&tag));
                    expected.retain(|t| t != &tag);
                }
            }
            prop_assert_eq!(tags.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn noop_tag_calls_leave_set_unchanged(
        initial in prop::collection::vec("[a-e]{1,3}", 0..8),
        candidate in "[a-e]{1,3}",
    ) {
        let mut tags: TagSet = initial.iter().map(String::as_str).collect();
        let before = tags.clone();
        if tags.contains(&candidate) {
            prop_assert!(!tags.add(&candidate));
        } else {
            prop_assert!(!tags.remove(&candidate));
        }
        prop_assert_eq!(tags, before);
    }
}
