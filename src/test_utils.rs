//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate an absolute directory path without separators or blanks
    pub fn path_entry() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z_][a-z0-9_]{0,11}", 1..4)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    /// Generate an `IDF_EXTRA_ACTIONS_PATH` value, including stray blanks and empty entries
    pub fn actions_path_value() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                path_entry(),
                path_entry().prop_map(|p| format!(" {p} ")),
                Just(String::new()),
            ],
            0..5,
        )
        .prop_map(|entries| entries.join(";"))
    }

    /// Generate a component directory name
    pub fn component_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,20}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_path_entry_generator(entry in path_entry()) {
            prop_assert!(entry.starts_with('/'));
            prop_assert!(!entry.contains(';'));
            prop_assert_eq!(entry.trim(), entry.as_str());
        }

        #[test]
        fn test_component_name_generator(name in component_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
        }
    }
}
