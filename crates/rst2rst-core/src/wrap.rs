//! Greedy word wrapping with separate first-line and continuation indents

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of non-whitespace. Only ASCII whitespace separates words, so
/// no-break spaces stay inside their word.
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\t\n\x0B\x0C\r ]+").expect("word pattern is valid"));

/// Wrap `text` to `width` columns.
///
/// The first line starts with `first_line_indent`, every following line with
/// `continuation_indent`; indents count towards the width. Lines break only
/// at whitespace. Whitespace at a line boundary is dropped and whitespace
/// between two words on the same line becomes plain spaces. A word wider
/// than the remaining room starts a new line and is never split, so it may
/// overflow `width`.
///
/// Returns an empty string when `text` has no words.
pub fn wrap(text: &str, width: usize, continuation_indent: &str, first_line_indent: &str) -> String {
    wrap_lines(text, width, continuation_indent, first_line_indent).join("\n")
}

/// Same as [`wrap`], returning the lines without joining them
pub fn wrap_lines(
    text: &str,
    width: usize,
    continuation_indent: &str,
    first_line_indent: &str,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::from(first_line_indent);
    let mut line_width = first_line_indent.chars().count();
    let mut line_has_word = false;
    let mut previous_end = 0;

    for word in WORD.find_iter(text) {
        let word_width = word.as_str().chars().count();

        if line_has_word {
            let gap = text[previous_end..word.start()].chars().count();
            if line_width + gap + word_width <= width {
                line.extend(std::iter::repeat(' ').take(gap));
                line_width += gap;
            } else {
                lines.push(std::mem::replace(&mut line, continuation_indent.to_string()));
                line_width = continuation_indent.chars().count();
            }
        }

        line.push_str(word.as_str());
        line_width += word_width;
        line_has_word = true;
        previous_end = word.end();
    }

    if line_has_word {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(wrap("", 79, "", ""), "");
        assert_eq!(wrap(" \n\t ", 79, "  ", "* "), "");
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(wrap("Hello world", 79, "", ""), "Hello world");
    }

    #[test]
    fn test_greedy_fill() {
        let text = "aaa bbb ccc ddd eee";
        assert_eq!(wrap(text, 11, "", ""), "aaa bbb ccc\nddd eee");
        assert_eq!(wrap(text, 10, "", ""), "aaa bbb\nccc ddd\neee");
    }

    #[test]
    fn test_indents_count_towards_width() {
        let text = "one two three four";
        assert_eq!(wrap(text, 12, "  ", "* "), "* one two\n  three four");
        assert_eq!(wrap(text, 12, "....", ""), "one two\n....three\n....four");
    }

    #[test]
    fn test_line_boundary_whitespace_is_dropped() {
        assert_eq!(wrap("  leading and trailing  ", 79, "", ""), "leading and trailing");
        assert_eq!(wrap("aaa   bbb", 5, "", ""), "aaa\nbbb");
    }

    #[test]
    fn test_inner_whitespace_becomes_spaces() {
        assert_eq!(wrap("a\tb\nc", 79, "", ""), "a b c");
        assert_eq!(wrap("a  b", 79, "", ""), "a  b");
    }

    #[test]
    fn test_long_word_is_not_split() {
        let text = "see https://example.com/a/very/long/path for details";
        assert_eq!(
            wrap(text, 10, "", ""),
            "see\nhttps://example.com/a/very/long/path\nfor\ndetails"
        );
    }

    #[test]
    fn test_no_break_space_is_part_of_word() {
        assert_eq!(wrap("a\u{a0}b c", 3, "", ""), "a\u{a0}b\nc");
    }

    #[test]
    fn test_width_counts_characters() {
        assert_eq!(wrap("été ôté", 7, "", ""), "été ôté");
        assert_eq!(wrap("été ôté", 6, "", ""), "été\nôté");
    }
}
