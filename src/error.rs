//! Error types.
//!
//! Deck errors are fatal: they are raised once, while the deck is loaded,
//! and stop the presenter before the terminal is taken over. Media errors
//! are per-item and only ever turn one gallery tile "unavailable".

use std::path::PathBuf;

use thiserror::Error;

use crate::types::LayoutKind;

/// Result type for deck loading.
pub type DeckResult<T> = Result<T, DeckError>;

/// Reasons a deck cannot be presented.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck has no slides")]
    Empty,

    #[error("slide at position {position} has id 0 (ids start at 1)")]
    ZeroId { position: usize },

    #[error("slide id {id} appears more than once")]
    DuplicateId { id: u32 },

    /// Ids order the deck and must ascend with position. Gaps are allowed
    /// (`1, 2, 5` is fine), so an id is a stable label rather than an index.
    #[error("slide id {id} follows id {previous}; ids must be ascending")]
    OutOfOrder { id: u32, previous: u32 },

    #[error("slide {id} has an empty title")]
    EmptyTitle { id: u32 },

    #[error("slide {id} ({layout}) is missing required field `{field}`")]
    MissingField {
        id: u32,
        layout: LayoutKind,
        field: &'static str,
    },

    #[error("slide {id} ({layout}) carries extraData its layout does not use")]
    MismatchedExtra { id: u32, layout: LayoutKind },

    #[error("slide {id}: portfolio sample {sample} {reason}")]
    BadSample {
        id: u32,
        sample: u32,
        reason: &'static str,
    },

    #[error("invalid deck file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a media asset could not be attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("empty source")]
    EmptySource,

    #[error("unsupported scheme `{0}`")]
    UnsupportedScheme(String),

    #[error("missing host in {0}")]
    MissingHost(String),

    #[error("`.{extension}` is not a playable {expected} format")]
    WrongFormat { extension: String, expected: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Io(String),
}
