//! Comment text cleanup and word wrapping.

use regex::Regex;
use std::sync::LazyLock;

/// Default column width of Vim help files (`tw=78`).
pub const WRAP_WIDTH: usize = 78;

// Leading ` * ` continuation markers, repeated markers included
static RE_LINE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\s*\*)*\s*").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// ". ." left behind by truncated sentences
static RE_REPEATED_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:\s*\.)+").unwrap());

/// Flatten raw comment text into a single normalized line.
///
/// Strips comment continuation markers, joins lines with spaces, collapses
/// whitespace and duplicated periods, then trims.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let joined = text
        .split('\n')
        .map(|line| RE_LINE_MARKER.replace(line, ""))
        .collect::<Vec<_>>()
        .join(" ");

    let collapsed = RE_WHITESPACE.replace_all(&joined, " ");
    let collapsed = RE_REPEATED_PERIOD.replace_all(&collapsed, ".");
    collapsed.trim().to_string()
}

/// Greedy word wrap at `width` columns.
///
/// Text that already fits is returned untouched. A word longer than `width`
/// gets a line of its own and is never split.
pub fn wrap(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if candidate_len <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = candidate_len;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_strips_markers() {
        let raw = "\n * Sets the color used to fill shapes.\n *   Accepts any\n * color value.\n ";
        assert_eq!(
            normalize(raw),
            "Sets the color used to fill shapes. Accepts any color value."
        );
    }

    #[test]
    fn normalize_collapses_periods() {
        assert_eq!(normalize("Ends here. . next"), "Ends here. next");
        assert_eq!(normalize("Ends here..."), "Ends here.");
        assert_eq!(normalize("one.\n * . two"), "one. two");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \n *  \n "), "");
    }

    #[test]
    fn normalize_keeps_inline_asterisks() {
        assert_eq!(normalize(" * a * b"), "a * b");
    }

    #[test]
    fn wrap_short_text_unchanged() {
        assert_eq!(wrap("short  text", 78), "short  text");
    }

    #[test]
    fn wrap_breaks_at_width() {
        let text = "aaaa bbbb cccc dddd";
        assert_eq!(wrap(text, 9), "aaaa bbbb\ncccc dddd");
    }

    #[test]
    fn wrap_long_word_alone() {
        let text = "a verylongwordthatdoesnotfit b";
        assert_eq!(wrap(text, 10), "a\nverylongwordthatdoesnotfit\nb");
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        let text = "ééééé ééééé";
        assert_eq!(wrap(text, 11), text);
        assert_eq!(wrap(text, 10), "ééééé\nééééé");
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(text in "[ a-z.*\\n\\t]{0,60}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_wrap_respects_width(words in prop::collection::vec("[a-z]{1,20}", 0..30), width in 5usize..40) {
            let text = words.join(" ");
            for line in wrap(&text, width).lines() {
                prop_assert!(line.chars().count() <= width || !line.contains(' '));
            }
        }
    }
}
