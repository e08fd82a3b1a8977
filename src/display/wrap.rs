//! Paragraph splitting and greedy word wrapping for help text.
//!
//! Widths are counted in `char`s. Words are never broken: a word longer than
//! the available width gets a line of its own and overflows it.

/// Split text into paragraphs.
///
/// Lines are trimmed; runs of non-empty lines form one paragraph, joined
/// with single spaces. Blank lines separate paragraphs and never produce
/// empty ones.
pub fn split_into_paragraphs(s: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in s.split('\n').map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Greedily pack the words of one paragraph into lines.
///
/// A line is flushed before a word when adding `" " + word` would reach
/// `indented_width`.
fn pack_words(paragraph: &str, indented_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len >= indented_width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    lines.push(line);

    lines
}

/// Word-wrap and indent text.
///
/// `width` includes the indentation, so text is packed into
/// `width - indentation` columns. Paragraphs are separated by a blank line.
/// With `first_line_already_indented`, the leading indent is dropped from
/// the result because the caller has already written something that wide
/// on the current line.
///
/// A `width` not larger than `indentation` leaves no room for text; every
/// word then lands on its own line.
pub fn wrap_and_indent(
    s: &str,
    width: usize,
    indentation: usize,
    first_line_already_indented: bool,
) -> String {
    let indented_width = width.saturating_sub(indentation);
    let indent = " ".repeat(indentation);

    if indented_width == 0 {
        tracing::debug!(
            "no room for text: width {width} <= indentation {indentation}, emitting one word per line"
        );
    }

    let text = split_into_paragraphs(s)
        .iter()
        .map(|paragraph| {
            pack_words(paragraph, indented_width)
                .iter()
                .map(|line| format!("{indent}{line}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    if first_line_already_indented {
        strip_leading_chars(&text, indentation).to_string()
    } else {
        text
    }
}

/// Drop exactly `count` leading characters, or everything if shorter.
fn strip_leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_basic() {
        assert_eq!(split_into_paragraphs("a\nb\n\nc"), vec!["a b", "c"]);
    }

    #[test]
    fn test_paragraphs_empty_input() {
        assert!(split_into_paragraphs("").is_empty());
        assert!(split_into_paragraphs("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_paragraphs_collapse_blank_runs() {
        let paragraphs = split_into_paragraphs("\n\nfirst\n\n\n\n  second  \nline\n\n");
        assert_eq!(paragraphs, vec!["first", "second line"]);
    }

    #[test]
    fn test_paragraphs_trailing_line_without_newline() {
        assert_eq!(split_into_paragraphs("one\ntwo"), vec!["one two"]);
    }

    #[test]
    fn test_paragraphs_keep_inner_spacing() {
        // Only line edges are trimmed; wrapping normalizes inner runs later.
        assert_eq!(split_into_paragraphs("  a   b \r\n c"), vec!["a   b c"]);
    }

    #[test]
    fn test_wrap_greedy_breaks() {
        assert_eq!(
            wrap_and_indent("hello world foo", 10, 2, false),
            "  hello\n  world\n  foo"
        );
    }

    #[test]
    fn test_wrap_packs_until_width_is_reached() {
        // indented width 10: "aaa bbb" (7) fits, "aaa bbb cc" (10) does not.
        assert_eq!(
            wrap_and_indent("aaa bbb cc dd", 12, 2, false),
            "  aaa bbb\n  cc dd"
        );
    }

    #[test]
    fn test_wrap_separates_paragraphs_with_blank_line() {
        assert_eq!(
            wrap_and_indent("one\ntwo\n\nthree", 40, 4, false),
            "    one two\n\n    three"
        );
    }

    #[test]
    fn test_wrap_long_word_is_not_split() {
        let out = wrap_and_indent("a supercalifragilistic word", 10, 2, false);
        assert_eq!(out, "  a\n  supercalifragilistic\n  word");
    }

    #[test]
    fn test_wrap_long_first_word_has_no_empty_line_before_it() {
        let out = wrap_and_indent("supercalifragilistic", 10, 2, false);
        assert_eq!(out, "  supercalifragilistic");
    }

    #[test]
    fn test_wrap_first_line_already_indented() {
        let out = wrap_and_indent("hello world foo", 10, 2, true);
        assert_eq!(out, "hello\n  world\n  foo");
    }

    #[test]
    fn test_wrap_first_line_already_indented_on_empty_input() {
        assert_eq!(wrap_and_indent("", 10, 4, true), "");
        assert_eq!(wrap_and_indent("", 10, 4, false), "");
    }

    #[test]
    fn test_wrap_zero_indentation() {
        assert_eq!(wrap_and_indent("ab cd ef", 6, 0, false), "ab cd\nef");
    }

    #[test]
    fn test_wrap_degenerate_width_does_not_panic() {
        assert_eq!(wrap_and_indent("a b c", 2, 4, false), "    a\n    b\n    c");
        assert_eq!(wrap_and_indent("a b", 0, 0, false), "a\nb");
        assert_eq!(wrap_and_indent("a b", 3, 3, true), "a\n   b");
    }

    #[test]
    fn test_wrap_normalizes_whitespace_runs() {
        assert_eq!(wrap_and_indent("a \t  b\n   c", 80, 1, false), " a b c");
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // "héllo wörld" is 11 chars but 13 bytes.
        assert_eq!(wrap_and_indent("héllo wörld", 14, 2, false), "  héllo wörld");
        assert_eq!(wrap_and_indent("héllo wörld", 13, 2, true), "héllo\n  wörld");
    }
}
