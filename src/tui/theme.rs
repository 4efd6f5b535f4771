//! TUI color semantics and style constants.
//!
//! Cinema palette: marquee red for accents and the active control, amber
//! and gold for labels, warm cream for body text.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

pub const MARQUEE_RED: Color = Color::Rgb(229, 9, 20);
pub const AMBER: Color = Color::Rgb(255, 170, 0);
pub const GOLD: Color = Color::Rgb(255, 204, 0);
pub const CREAM: Color = Color::Rgb(238, 221, 204);
pub const ASH: Color = Color::Rgb(120, 100, 100);

// ============================================================================
// TEXT STYLES
// ============================================================================

/// Slide title.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Oversized stand-in title (profile name, contact name).
pub const STYLE_DISPLAY: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::ITALIC);

/// Small label above a title.
pub const STYLE_EYEBROW: Style = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);

pub const STYLE_SUBTITLE: Style = Style::new().fg(AMBER);

pub const STYLE_BODY: Style = Style::new().fg(CREAM);

/// Numbers, scene labels, checkmarks.
pub const STYLE_ACCENT: Style = Style::new().fg(MARQUEE_RED).add_modifier(Modifier::BOLD);

pub const STYLE_CALLOUT: Style = Style::new()
    .fg(MARQUEE_RED)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::ITALIC);

/// De-emphasized metadata (URIs, badges).
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

pub const STYLE_MARQUEE: Style = Style::new()
    .fg(MARQUEE_RED)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::ITALIC);

pub const STYLE_BULB: Style = Style::new().fg(GOLD);

pub const STYLE_PROGRESS: Style = Style::new().fg(MARQUEE_RED);

/// Enabled navigation button.
pub const STYLE_BUTTON: Style = Style::new()
    .fg(Color::White)
    .bg(MARQUEE_RED)
    .add_modifier(Modifier::BOLD);

/// Disabled navigation button.
pub const STYLE_BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_COMMENTARY: Style = Style::new().fg(CREAM).add_modifier(Modifier::ITALIC);

pub const STYLE_BORDER: Style = Style::new().fg(ASH);

/// Tile states.
pub const STYLE_LOADING: Style = Style::new().fg(MARQUEE_RED);
pub const STYLE_UNAVAILABLE: Style = Style::new().fg(Color::DarkGray);
pub const STYLE_PLAYING: Style = Style::new().fg(Color::White).bg(MARQUEE_RED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_styles_use_marquee_red() {
        assert_eq!(STYLE_ACCENT.fg, Some(MARQUEE_RED));
        assert_eq!(STYLE_PROGRESS.fg, Some(MARQUEE_RED));
        assert_eq!(STYLE_BUTTON.bg, Some(MARQUEE_RED));
    }

    #[test]
    fn disabled_button_has_no_background() {
        assert_eq!(STYLE_BUTTON_DISABLED.bg, None);
        assert_eq!(STYLE_BUTTON_DISABLED.fg, Some(Color::DarkGray));
    }

    #[test]
    fn title_is_bold() {
        assert!(STYLE_TITLE.add_modifier.contains(Modifier::BOLD));
    }
}
