// crates/dropforge-core/src/text.rs
//
// Pure text transforms. File I/O lives in dropforge-media::text — these
// functions only see strings, which keeps the ordering guarantees easy to
// pin down in tests.

use std::collections::HashSet;

/// Literal separator written between merged files (never after the last).
pub const MERGE_SEPARATOR: &str = "\n---\n";

/// Remove duplicate whitespace-delimited words, keeping first-seen order.
///
/// Every surviving word is written with a trailing space, so a non-empty
/// result always ends in one space. Whitespace runs in the input collapse
/// to single spaces.
pub fn dedupe_words(input: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if seen.insert(word) {
            out.push_str(word);
            out.push(' ');
        }
    }
    out
}

/// Join file contents in input order with `MERGE_SEPARATOR` between entries.
pub fn merge_contents(parts: &[String]) -> String {
    parts.join(MERGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_seen_order() {
        assert_eq!(dedupe_words("b a b c a"), "b a c ");
    }

    #[test]
    fn dedupe_is_case_sensitive() {
        assert_eq!(dedupe_words("Word word"), "Word word ");
    }

    #[test]
    fn dedupe_collapses_whitespace() {
        assert_eq!(dedupe_words("a\t b\n\n c  a"), "a b c ");
    }

    #[test]
    fn dedupe_empty_input() {
        assert_eq!(dedupe_words(""), "");
        assert_eq!(dedupe_words("   \n\t"), "");
    }

    #[test]
    fn merge_separator_between_not_after() {
        let parts = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert_eq!(merge_contents(&parts), "one\n---\ntwo\n---\nthree");
    }

    #[test]
    fn merge_single_part_has_no_separator() {
        let parts = vec!["only".to_string()];
        assert_eq!(merge_contents(&parts), "only");
    }

    #[test]
    fn merge_preserves_input_order() {
        let parts = vec!["z".to_string(), "a".to_string()];
        assert!(merge_contents(&parts).starts_with('z'));
    }
}
