/// Wraps text into lines of at most `max_chars` characters.
///
/// The text is first split on explicit line breaks (`\n`, with `\r\n` and
/// lone `\r` normalized first), and every resulting segment is kept—an empty
/// segment becomes exactly one empty output line, so blank lines in source
/// listings survive. Segments longer than the budget are hard-wrapped:
/// repeatedly cut at exactly `max_chars` characters with no word-boundary
/// awareness or hyphenation. Mid-token breaks are acceptable for the
/// monospace source text this crate lays out, and the fixed cut keeps the
/// result predictable.
///
/// Any string is valid input. The output is fully materialized so callers
/// can count lines (and therefore pages) before layout. A trailing line
/// break produces no trailing empty line.
///
/// `max_chars` must be at least 1; the paginator guarantees this via
/// [`PageGeometry::validate`](super::PageGeometry::validate).
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    debug_assert!(max_chars > 0, "wrap called with a zero character budget");

    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines = Vec::new();
    for segment in text.lines() {
        let mut rest = segment;
        loop {
            // byte offset of the first character past the budget, if any
            match rest.char_indices().nth(max_chars) {
                Some((cut, _)) => {
                    let (head, tail) = rest.split_at(cut);
                    lines.push(head.to_string());
                    rest = tail;
                }
                None => {
                    lines.push(rest.to_string());
                    break;
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(wrap("hello", 80), vec!["hello"]);
    }

    #[test]
    fn blank_lines_are_preserved() {
        assert_eq!(wrap("AB\n\nCD", 80), vec!["AB", "", "CD"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap("", 80).is_empty());
    }

    #[test]
    fn trailing_newline_yields_no_trailing_empty_line() {
        assert_eq!(wrap("AB\n", 80), vec!["AB"]);
    }

    #[test]
    fn long_lines_are_hard_cut() {
        let line = "x".repeat(250);
        let wrapped = wrap(&line, 95);
        assert_eq!(
            wrapped.iter().map(String::len).collect::<Vec<_>>(),
            vec![95, 95, 60]
        );
        assert_eq!(wrapped.concat(), line);
    }

    #[test]
    fn cuts_count_characters_not_bytes() {
        let line = "é".repeat(7);
        let wrapped = wrap(&line, 3);
        assert_eq!(
            wrapped
                .iter()
                .map(|l| l.chars().count())
                .collect::<Vec<_>>(),
            vec![3, 3, 1]
        );
        assert_eq!(wrapped.concat(), line);
    }

    #[test]
    fn carriage_returns_are_normalized() {
        assert_eq!(wrap("AB\r\nCD\rEF", 80), vec!["AB", "CD", "EF"]);
    }

    #[test]
    fn every_line_fits_the_budget() {
        let text = "some words\n\nand one linethatiswaytoolongtofitanywhere at the end";
        for max_chars in 1..=16 {
            for line in wrap(text, max_chars) {
                assert!(line.chars().count() <= max_chars);
            }
        }
    }
}
