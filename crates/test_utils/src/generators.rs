//! Property-Based Test Generators
//!
//! Proptest strategies for author names and the blank inputs services must
//! reject.

use proptest::prelude::*;

/// Names made of one to four capitalized words, optionally accented
pub fn author_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-zàéèíóúüç]{1,11}", 1..=4).prop_map(|words| words.join(" "))
}

/// Strings that are empty or contain only whitespace
pub fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,8}"
}

/// Fragments a caller might search oppositions by
pub fn slug_fragment_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::slugify;

    proptest! {
        #[test]
        fn generated_names_have_non_empty_slugs(name in author_name_strategy()) {
            prop_assert!(!slugify(&name).is_empty());
        }

        #[test]
        fn blanks_trim_to_nothing(blank in blank_strategy()) {
            prop_assert!(blank.trim().is_empty());
        }
    }
}
