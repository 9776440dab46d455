//! TUI constants: colors, timing, and fixed labels.

use ratatui::style::Color;

use crate::core::confidence::ConfidenceBucket;

/// Accent green (#98FB98) — fits the plant theme.
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent — soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Gauge colors per confidence bucket (the original meter palette:
/// bright red / yellow / green).
pub(super) const BUCKET_LOW: Color = Color::Rgb(0xF9, 0x41, 0x44);
pub(super) const BUCKET_MEDIUM: Color = Color::Rgb(0xF9, 0xC7, 0x4F);
pub(super) const BUCKET_HIGH: Color = Color::Rgb(0x90, 0xBE, 0x6D);

pub(super) fn bucket_color(bucket: ConfidenceBucket) -> Color {
    match bucket {
        ConfidenceBucket::Low => BUCKET_LOW,
        ConfidenceBucket::Medium => BUCKET_MEDIUM,
        ConfidenceBucket::High => BUCKET_HIGH,
    }
}

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Spinner frames for the in-flight request animation.
pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

/// Checkmark prefix for advice checklist items.
pub(super) const CHECK_PREFIX: &str = "✓ ";
