//! Segment-to-span conversion and line wrapping for the chat display.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::format::{self, Segment};

/// Style one formatted line as spans: emphasized segments become bold.
pub(super) fn line_spans(line: &str, base: Style) -> Vec<Span<'static>> {
    format::format_line(line)
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(s) => Span::styled(s, base),
            Segment::Emphasized(s) => Span::styled(s, base.add_modifier(Modifier::BOLD)),
        })
        .collect()
}

/// Style a pre-formatted segment run as spans.
pub(super) fn segment_spans(segments: &[Segment], base: Style) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|seg| match seg {
            Segment::Plain(s) => Span::styled(s.clone(), base),
            Segment::Emphasized(s) => Span::styled(s.clone(), base.add_modifier(Modifier::BOLD)),
        })
        .collect()
}

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            for chunk in wrap_text(line, width) {
                out.push(chunk);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_message_preserves_newlines() {
        let lines = wrap_message("line1\nline2", 100);
        assert_eq!(lines, ["line1", "line2"]);
    }

    #[test]
    fn wrap_message_wraps_long_line() {
        let lines = wrap_message("hello world test", 8);
        assert_eq!(lines, ["hello", "world", "test"]);
    }

    #[test]
    fn wrap_message_empty_lines() {
        let lines = wrap_message("a\n\nb", 100);
        assert_eq!(lines, ["a", "", "b"]);
    }

    #[test]
    fn line_spans_bold_segment() {
        let spans = line_spans("**bold** text", Style::default());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content.as_ref(), "bold");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[1].content.as_ref(), " text");
    }
}
