//! Domain types for cinedeck.
//!
//! Slide records are plain data: they are built once at startup (from the
//! built-in deck or a JSON file), validated by [`crate::deck::Deck`], and
//! never mutated afterwards.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// LAYOUTS
// ============================================================================

/// The closed set of slide layouts.
///
/// Serialized with the kebab-case tags used in deck files. Any other tag
/// fails deserialization, so an unknown layout never reaches the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Hero,
    Profile,
    TextLeft,
    List,
    Grid,
    Schedule,
    Center,
    Portfolio,
    Finale,
}

impl LayoutKind {
    /// Every layout, in declaration order.
    pub const ALL: [LayoutKind; 9] = [
        LayoutKind::Hero,
        LayoutKind::Profile,
        LayoutKind::TextLeft,
        LayoutKind::List,
        LayoutKind::Grid,
        LayoutKind::Schedule,
        LayoutKind::Center,
        LayoutKind::Portfolio,
        LayoutKind::Finale,
    ];

    /// The tag used in deck files.
    pub fn tag(self) -> &'static str {
        match self {
            LayoutKind::Hero => "hero",
            LayoutKind::Profile => "profile",
            LayoutKind::TextLeft => "text-left",
            LayoutKind::List => "list",
            LayoutKind::Grid => "grid",
            LayoutKind::Schedule => "schedule",
            LayoutKind::Center => "center",
            LayoutKind::Portfolio => "portfolio",
            LayoutKind::Finale => "finale",
        }
    }

    /// Whether this layout knows what to do with the given payload.
    pub fn accepts(self, extra: &ExtraData) -> bool {
        match extra {
            ExtraData::Portfolio(_) => self == LayoutKind::Portfolio,
            ExtraData::Showcase(_) => matches!(self, LayoutKind::Center | LayoutKind::Finale),
        }
    }
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// LAYOUT PAYLOADS
// ============================================================================

/// How a gallery item is played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Video => f.write_str("video"),
            MediaKind::Image => f.write_str("image"),
        }
    }
}

/// One entry of a portfolio gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSample {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Absolute URI or local path of the media asset.
    #[serde(rename = "src")]
    pub source: String,
}

/// Payload consumed by the `portfolio` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioData {
    /// External archive link; the button is omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub samples: Vec<PortfolioSample>,
}

/// Payload consumed by the `center` and `finale` layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseData {
    /// Image reference (the contact QR code in the built-in deck).
    #[serde(rename = "qrCode", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Secondary label shown above the finale title.
    #[serde(rename = "subTitle2", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Layout-specific payload attached to a slide.
///
/// Closed: each variant is accepted only by the layouts listed in
/// [`LayoutKind::accepts`], checked when the deck is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraData {
    Portfolio(PortfolioData),
    Showcase(ShowcaseData),
}

impl ExtraData {
    pub fn as_portfolio(&self) -> Option<&PortfolioData> {
        match self {
            ExtraData::Portfolio(data) => Some(data),
            ExtraData::Showcase(_) => None,
        }
    }

    pub fn as_showcase(&self) -> Option<&ShowcaseData> {
        match self {
            ExtraData::Showcase(data) => Some(data),
            ExtraData::Portfolio(_) => None,
        }
    }
}

// ============================================================================
// SLIDES
// ============================================================================

/// One immutable unit of deck content.
///
/// Optional fields mean "omit this element", never "render empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub id: u32,
    pub layout: LayoutKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<ExtraData>,
}

impl SlideRecord {
    /// A bare record with only the required fields set.
    pub fn new(id: u32, layout: LayoutKind, title: impl Into<String>) -> Self {
        SlideRecord {
            id,
            layout,
            title: title.into(),
            subtitle: None,
            items: None,
            mentor_comment: None,
            highlight: None,
            extra_data: None,
        }
    }

    pub fn subtitle(mut self, text: impl Into<String>) -> Self {
        self.subtitle = Some(text.into());
        self
    }

    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn mentor_comment(mut self, text: impl Into<String>) -> Self {
        self.mentor_comment = Some(text.into());
        self
    }

    pub fn highlight(mut self, text: impl Into<String>) -> Self {
        self.highlight = Some(text.into());
        self
    }

    pub fn extra(mut self, extra: ExtraData) -> Self {
        self.extra_data = Some(extra);
        self
    }

    /// Items as a slice; an absent list is empty.
    pub fn item_slice(&self) -> &[String] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn portfolio(&self) -> Option<&PortfolioData> {
        self.extra_data.as_ref().and_then(ExtraData::as_portfolio)
    }

    pub fn showcase(&self) -> Option<&ShowcaseData> {
        self.extra_data.as_ref().and_then(ExtraData::as_showcase)
    }
}

/// Deck-wide presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInfo {
    /// Marquee name shown in the header.
    pub title: String,
    /// One-line footer tagline.
    #[serde(default)]
    pub tagline: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for an interactive presentation.
#[derive(Debug, Clone)]
pub struct PresentConfig {
    /// Deck file to present. None = the built-in deck.
    pub deck_path: Option<PathBuf>,
    /// Zero-based slide to open on (clamped to the deck).
    pub start_index: usize,
    /// Frames the slide-in transition lasts after each move.
    pub transition_frames: u8,
    /// Delay between transition frames.
    pub frame_interval_ms: u64,
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            start_index: 0,
            transition_frames: 6,
            frame_interval_ms: 40,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
