//! Property-based tests for title, category and file name handling.

use changelog::core::category::{CATEGORY_COUNT, Category};
use changelog::core::filename::{
    ENTRY_FILE_EXTENSION, MAX_BASENAME_LENGTH, derive_filename, is_plain_filename,
};
use changelog::core::validate::{validate_category, validate_title};
use changelog::error::EntryError;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Titles with arbitrary padding around a non-blank core.
fn padded_title() -> impl Strategy<Value = (String, String, String)> {
    (
        "[ \t\r\n]{0,4}",
        "[A-Za-z0-9][A-Za-z0-9 ,.!`()-]{0,150}[A-Za-z0-9]",
        "[ \t\r\n]{0,4}",
    )
}

fn blank_title() -> impl Strategy<Value = String> {
    "[ \t\r\n\u{0b}\u{0c}]{0,12}"
}

fn category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

/// Flip the ASCII case of a random subset of characters.
fn recase(key: &str, mask: u64) -> String {
    key.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 64)) != 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

// ============================================================================
// Titles
// ============================================================================

proptest! {
    #[test]
    fn title_padding_is_stripped((lead, core, trail) in padded_title()) {
        let raw = format!("{lead}{core}{trail}");
        prop_assert_eq!(validate_title(&raw).unwrap(), core);
    }

    #[test]
    fn title_validation_is_idempotent((lead, core, trail) in padded_title()) {
        let once = validate_title(&format!("{lead}{core}{trail}")).unwrap();
        let twice = validate_title(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn blank_titles_are_rejected(raw in blank_title()) {
        prop_assert_eq!(validate_title(&raw), Err(EntryError::EmptyTitle));
    }
}

// ============================================================================
// Categories
// ============================================================================

proptest! {
    #[test]
    fn indices_in_range_resolve(index in 1i64..=CATEGORY_COUNT as i64) {
        let category = Category::by_index(index).unwrap();
        prop_assert_eq!(category.index() as i64, index);
        prop_assert_eq!(validate_category(&index.to_string()).unwrap(), category);
    }

    #[test]
    fn indices_out_of_range_are_rejected(index in prop_oneof![
        i64::MIN..=0i64,
        (CATEGORY_COUNT as i64 + 1)..=i64::MAX,
    ]) {
        let is_out_of_range = matches!(
            Category::by_index(index),
            Err(EntryError::CategoryIndexOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn names_match_case_insensitively(category in category(), mask in any::<u64>()) {
        let name = recase(category.key(), mask);
        prop_assert_eq!(Category::by_name(&name).unwrap(), category);
        prop_assert_eq!(validate_category(&format!(" {name} ")).unwrap(), category);
    }

    #[test]
    fn unknown_names_list_valid_options(name in "[a-z]{1,12}") {
        prop_assume!(Category::values().iter().all(|key| *key != name));
        match Category::by_name(&name) {
            Err(EntryError::UnknownCategory { valid, .. }) => {
                for key in Category::values() {
                    prop_assert!(valid.contains(key));
                }
            }
            other => prop_assert!(false, "unexpected {other:?}"),
        }
    }
}

// ============================================================================
// File names
// ============================================================================

proptest! {
    #[test]
    fn file_names_stay_within_the_basename_limit(title in "\\PC{1,300}") {
        let name = derive_filename(&title);
        prop_assert!(name.chars().count() <= MAX_BASENAME_LENGTH);
        prop_assert!(name.ends_with(ENTRY_FILE_EXTENSION));
    }

    #[test]
    fn file_names_have_no_spaces_or_capitals(title in "[A-Za-z0-9 ]{1,200}") {
        let name = derive_filename(&title);
        prop_assert!(!name.contains(' '));
        prop_assert_eq!(name.to_lowercase(), name.clone());
        prop_assert!(is_plain_filename(&name));
    }

    #[test]
    fn short_titles_keep_every_character(title in "[a-z0-9-]{1,90}") {
        prop_assert_eq!(derive_filename(&title), format!("{title}{ENTRY_FILE_EXTENSION}"));
    }
}
