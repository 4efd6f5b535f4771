//! Deck check report.
//!
//! Pure functions: the report is assembled from a validated deck and the
//! probe results, then formatted as human text or JSON. No I/O.

use std::collections::BTreeMap;

use humansize::{format_size, BINARY};
use serde::Serialize;

use crate::deck::Deck;
use crate::error::MediaError;
use crate::types::{MediaKind, OutputFormat};

/// Outcome of probing one gallery sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MediaOutcome {
    Ready { bytes: Option<u64> },
    Unavailable { reason: String },
}

impl From<Result<Option<u64>, MediaError>> for MediaOutcome {
    fn from(result: Result<Option<u64>, MediaError>) -> Self {
        match result {
            Ok(bytes) => MediaOutcome::Ready { bytes },
            Err(err) => MediaOutcome::Unavailable {
                reason: err.to_string(),
            },
        }
    }
}

/// One probed gallery sample.
#[derive(Debug, Clone, Serialize)]
pub struct MediaCheck {
    pub slide_id: u32,
    pub sample_id: u32,
    pub title: String,
    pub kind: MediaKind,
    pub source: String,
    #[serde(flatten)]
    pub outcome: MediaOutcome,
}

/// Everything `cinedeck check` reports.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub deck_title: String,
    pub slide_count: usize,
    /// Slides per layout tag.
    pub layouts: BTreeMap<String, usize>,
    pub media: Vec<MediaCheck>,
    /// Total size of local media that resolved.
    pub local_media_bytes: u64,
}

impl CheckReport {
    pub fn unavailable(&self) -> impl Iterator<Item = &MediaCheck> {
        self.media
            .iter()
            .filter(|m| matches!(m.outcome, MediaOutcome::Unavailable { .. }))
    }
}

/// Build a report from a deck and one probe result per sample, in
/// [`Deck::samples`] order.
pub fn assemble_report(deck: &Deck, results: Vec<Result<Option<u64>, MediaError>>) -> CheckReport {
    let mut layouts = BTreeMap::new();
    for slide in deck.slides() {
        *layouts.entry(slide.layout.tag().to_string()).or_insert(0) += 1;
    }

    let media: Vec<MediaCheck> = deck
        .samples()
        .zip(results)
        .map(|((slide_id, sample), result)| MediaCheck {
            slide_id,
            sample_id: sample.id,
            title: sample.title.clone(),
            kind: sample.kind,
            source: sample.source.clone(),
            outcome: result.into(),
        })
        .collect();

    let local_media_bytes = media
        .iter()
        .filter_map(|m| match m.outcome {
            MediaOutcome::Ready { bytes } => bytes,
            MediaOutcome::Unavailable { .. } => None,
        })
        .sum();

    CheckReport {
        deck_title: deck.info().title.clone(),
        slide_count: deck.len(),
        layouts,
        media,
        local_media_bytes,
    }
}

/// Format a check report for output.
pub fn format_report(report: &CheckReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &CheckReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", report.deck_title));
    for (layout, count) in &report.layouts {
        out.push_str(&format!("  {:<10} {}\n", layout, count));
    }
    out.push('\n');

    if !report.media.is_empty() {
        out.push_str("=== Media ===\n");
        for check in &report.media {
            let status = match &check.outcome {
                MediaOutcome::Ready { bytes: Some(bytes) } => {
                    format!("ok ({})", format_size(*bytes, BINARY))
                }
                MediaOutcome::Ready { bytes: None } => "ok (remote)".to_string(),
                MediaOutcome::Unavailable { reason } => format!("UNAVAILABLE: {}", reason),
            };
            out.push_str(&format!(
                "  #{:02} {} [{}] {}\n",
                check.slide_id, check.title, check.kind, status
            ));
        }
        out.push('\n');
    }

    out.push_str(&format_summary(report));
    out
}

fn format_summary(report: &CheckReport) -> String {
    let unavailable = report.unavailable().count();

    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Slides:            {}\n", report.slide_count));
    out.push_str(&format!("Media items:       {}\n", report.media.len()));
    out.push_str(&format!("Unavailable media: {}\n", unavailable));
    out.push_str(&format!(
        "Local media size:  {}\n",
        format_size(report.local_media_bytes, BINARY)
    ));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &CheckReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // Only plain data reaches the serializer
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
