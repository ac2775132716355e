//! Normalization and tokenization invariants.

use geohub::util::{normalize, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in "[a-zA-Z0-9éüñÉÜÑ \\t]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Tokens are non-empty, normalized and free of separators.
    #[test]
    fn prop_tokens_are_clean(text in "[a-zA-Z0-9éüñ ,.\\-]{0,60}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(&normalize(&token), &token);
            prop_assert!(token.chars().all(char::is_alphanumeric));
        }
    }
}
