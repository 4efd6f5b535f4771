//! The slide content store.
//!
//! A [`Deck`] can only be obtained through validation, so every holder of
//! one may assume: at least one slide, ids positive, unique and ascending,
//! titles non-blank, required layout fields present, and every `extraData`
//! payload accepted by its slide's layout.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::{DeckError, DeckResult};
use crate::types::{DeckInfo, LayoutKind, PortfolioSample, SlideRecord};

/// On-disk shape of a deck file.
#[derive(Debug, Serialize, Deserialize)]
struct DeckFile {
    #[serde(flatten)]
    info: DeckInfo,
    slides: Vec<SlideRecord>,
}

/// An immutable, validated, ordered list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    info: DeckInfo,
    slides: Vec<SlideRecord>,
}

impl Deck {
    /// Validate `slides` and wrap them. The first violation found is returned.
    pub fn new(info: DeckInfo, slides: Vec<SlideRecord>) -> DeckResult<Self> {
        validate(&slides)?;
        Ok(Deck { info, slides })
    }

    /// The built-in course deck.
    pub fn built_in() -> DeckResult<Self> {
        Deck::new(content::course_info(), content::course_slides())
    }

    /// Parse and validate a JSON deck.
    pub fn from_json_str(json: &str) -> DeckResult<Self> {
        let file: DeckFile = serde_json::from_str(json)?;
        Deck::new(file.info, file.slides)
    }

    /// Read, parse and validate a JSON deck file.
    pub fn load(path: &Path) -> DeckResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Deck::from_json_str(&json)?;
        debug!("loaded {} slides from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Serialize back to the deck file format.
    pub fn to_json_pretty(&self) -> DeckResult<String> {
        let file = DeckFile {
            info: self.info.clone(),
            slides: self.slides.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn info(&self) -> &DeckInfo {
        &self.info
    }

    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    /// Never zero.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    /// Every gallery sample in the deck, paired with the owning slide id.
    pub fn samples(&self) -> impl Iterator<Item = (u32, &PortfolioSample)> {
        self.slides.iter().flat_map(|slide| {
            slide
                .portfolio()
                .into_iter()
                .flat_map(|data| data.samples.iter())
                .map(move |sample| (slide.id, sample))
        })
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn validate(slides: &[SlideRecord]) -> DeckResult<()> {
    if slides.is_empty() {
        return Err(DeckError::Empty);
    }

    let mut seen = HashSet::new();
    let mut previous: Option<u32> = None;

    for (position, slide) in slides.iter().enumerate() {
        if slide.id == 0 {
            return Err(DeckError::ZeroId { position });
        }
        if !seen.insert(slide.id) {
            return Err(DeckError::DuplicateId { id: slide.id });
        }
        if let Some(previous) = previous {
            if slide.id < previous {
                return Err(DeckError::OutOfOrder { id: slide.id, previous });
            }
        }
        previous = Some(slide.id);

        validate_slide(slide)?;
    }

    Ok(())
}

fn validate_slide(slide: &SlideRecord) -> DeckResult<()> {
    if slide.title.trim().is_empty() {
        return Err(DeckError::EmptyTitle { id: slide.id });
    }

    if slide.layout == LayoutKind::Profile && slide.subtitle.is_none() {
        return Err(DeckError::MissingField {
            id: slide.id,
            layout: slide.layout,
            field: "subtitle",
        });
    }

    if let Some(extra) = &slide.extra_data {
        if !slide.layout.accepts(extra) {
            return Err(DeckError::MismatchedExtra {
                id: slide.id,
                layout: slide.layout,
            });
        }
    }

    if let Some(data) = slide.portfolio() {
        let mut sample_ids = HashSet::new();
        for sample in &data.samples {
            if sample.source.trim().is_empty() {
                return Err(DeckError::BadSample {
                    id: slide.id,
                    sample: sample.id,
                    reason: "has an empty source",
                });
            }
            if !sample_ids.insert(sample.id) {
                return Err(DeckError::BadSample {
                    id: slide.id,
                    sample: sample.id,
                    reason: "appears more than once",
                });
            }
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
