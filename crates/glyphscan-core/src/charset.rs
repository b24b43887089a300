//! Allowed-character filter
//!
//! The inclusion filter is fixed: the CJK Unified Ideographs block
//! (U+4E00–U+9FFF) plus the full-width punctuation and symbols that show
//! up in Traditional Chinese calendar entries. Everything else is dropped
//! silently; there is no notion of an "invalid" character, only an
//! excluded one.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Pre-compiled character class using std::sync::LazyLock (Rust 1.80+)
static RE_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{4e00}-\u{9fff}，。！？：「」、（）《》～．…·°℃]")
        .expect("valid allowed character class")
});

/// Check whether a single character belongs to the allowed set
#[inline]
#[must_use = "returns whether the character passes the inclusion filter"]
pub fn is_allowed(c: char) -> bool {
    let mut buf = [0u8; 4];
    RE_ALLOWED.is_match(c.encode_utf8(&mut buf))
}

/// Collect the distinct allowed characters of a text buffer
///
/// Duplicates collapse; scan order does not matter. The returned set
/// iterates in code-point order.
#[must_use = "returns the filtered character set"]
pub fn filter_allowed(text: &str) -> BTreeSet<char> {
    RE_ALLOWED
        .find_iter(text)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_cjk_and_fullwidth_punctuation() {
        let set = filter_allowed("考試：數學");
        let chars: Vec<char> = set.into_iter().collect();
        assert_eq!(chars, vec!['學', '數', '考', '試', '：']);
    }

    #[test]
    fn test_drops_ascii_and_latin() {
        let set = filter_allowed("Meeting at 10:00 with 王老師!");
        let chars: Vec<char> = set.into_iter().collect();
        assert_eq!(chars, vec!['師', '王', '老']);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = filter_allowed("年年年年年");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&'年'));
    }

    #[test]
    fn test_symbol_list_members() {
        for c in ['，', '。', '！', '？', '：', '「', '」', '、', '（', '）', '《', '》', '～', '．', '…', '·', '°', '℃'] {
            assert!(is_allowed(c), "expected {c} to be allowed");
        }
    }

    #[test]
    fn test_block_boundaries() {
        assert!(is_allowed('\u{4e00}'));
        assert!(is_allowed('\u{9fff}'));
        assert!(!is_allowed('\u{4dff}'));
        assert!(!is_allowed('\u{a000}'));
    }

    #[test]
    fn test_halfwidth_counterparts_excluded() {
        // ASCII colon and comma are not the full-width characters in the list
        assert!(!is_allowed(':'));
        assert!(!is_allowed(','));
        assert!(!is_allowed('.'));
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_allowed("").is_empty());
    }
}
