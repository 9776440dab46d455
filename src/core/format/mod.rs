//! Response-text formatting: bold-marker segments and bullet splitting.
//!
//! Advice strings arrive loosely formatted: `**bold**` emphasis markers,
//! `*`-prefixed bullet lines, and occasionally double-encoded newlines (a
//! literal backslash-n instead of a line break). These helpers turn that
//! into structured segments the TUI and CLI can render.

use std::sync::OnceLock;

use regex::Regex;

/// Atomic display unit produced by the formatter: plain or emphasized
/// text. Emphasis is a flat flag, never a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Emphasized(String),
}

impl Segment {
    /// The segment's text content, without any styling information.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Emphasized(s) => s,
        }
    }
}

/// One list entry after bullet splitting: an ordered run of segments.
pub type BulletItem = Vec<Segment>;

/// Format a single line: paired `**...**` markers delimit emphasized
/// segments, everything between pairs stays plain, original substring
/// content and order are preserved. A marker that never closes is kept
/// as plain text (matching is purely syntactic on paired delimiters).
/// Adjacent pairs emit consecutive emphasized segments with no empty
/// plain separator between them.
pub fn format_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let Some(open) = rest.find("**") else {
            segments.push(Segment::Plain(rest.to_string()));
            break;
        };
        let Some(close) = rest[open + 2..].find("**") else {
            // Unclosed marker: the whole remainder degrades to plain.
            segments.push(Segment::Plain(rest.to_string()));
            break;
        };
        if open > 0 {
            segments.push(Segment::Plain(rest[..open].to_string()));
        }
        segments.push(Segment::Emphasized(rest[open + 2..open + 2 + close].to_string()));
        rest = &rest[open + 2 + close + 2..];
    }
    segments
}

/// Format multi-line text. Each line is formatted independently so
/// emphasis never spans a line break; line boundaries are preserved as
/// separate segment lists. Empty input yields no lines; a blank line
/// inside the text yields an empty segment list.
pub fn format_text(text: &str) -> Vec<Vec<Segment>> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(format_line).collect()
}

/// Format one bullet item into a flat segment run. Lines are formatted
/// independently and rejoined with a plain newline segment, keeping the
/// no-emphasis-across-line-breaks invariant while preserving content.
pub fn format_item(item: &str) -> BulletItem {
    let mut out = Vec::new();
    for (i, line) in format_text(item).into_iter().enumerate() {
        if i > 0 {
            out.push(Segment::Plain("\n".to_string()));
        }
        out.extend(line);
    }
    out
}

/// Bullet marker: line start (or string start), optional whitespace, a
/// `*`, then whitespace. Same convention the backend uses for lists.
fn bullet_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\n)\s*\*\s*").expect("bullet pattern is valid"))
}

/// Boilerplate preamble the backend sometimes leaks into list fields.
const PREAMBLE_PHRASE: &str = "here are the";

/// Split a raw advice field into bullet-item strings.
///
/// Literal `\n` escape sequences (two characters) are normalized to real
/// newlines first, since payloads may arrive double-encoded. Candidates
/// that are blank after trimming, or that contain the "here are the"
/// preamble, are dropped. Source order is preserved. An empty result
/// means the consumer should show its "no information" placeholder.
pub fn split_bullets(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\\n", "\n");
    bullet_pattern()
        .split(&normalized)
        .filter(|item| !item.trim().is_empty())
        .filter(|item| !item.to_lowercase().contains(PREAMBLE_PHRASE))
        .map(str::to_string)
        .collect()
}
