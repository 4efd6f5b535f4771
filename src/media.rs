//! Gallery media: per-tile load state and visibility gating.
//!
//! Only the gallery of the slide on screen is attached. Attaching puts every
//! tile into `Loading` and hands back the probe jobs to run; detaching drops
//! the tiles and bumps a generation counter so late probe results for a
//! gallery that is no longer on screen are discarded.
//!
//! A failed probe marks that one tile `Unavailable`. Nothing else is
//! affected and nothing is retried.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::error::MediaError;
use crate::layout::Tile;
use crate::types::MediaKind;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

// ============================================================================
// TILE STATE
// ============================================================================

/// Load state of one gallery tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    /// Not on screen; no source attached.
    Detached,
    Loading,
    /// Attached and playable. Size is known for local files only.
    Ready { bytes: Option<u64> },
    /// Terminal for this attachment.
    Unavailable { reason: String },
}

/// A gallery tile with its load state and playback flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTile {
    pub sample_id: u32,
    pub status: MediaStatus,
    pub playing: bool,
}

impl MediaTile {
    fn loading(sample_id: u32) -> Self {
        MediaTile {
            sample_id,
            status: MediaStatus::Loading,
            playing: false,
        }
    }

    /// Record a probe outcome. Only a `Loading` tile changes.
    pub fn resolve(&mut self, outcome: Result<Option<u64>, MediaError>) {
        if self.status != MediaStatus::Loading {
            return;
        }
        self.status = match outcome {
            Ok(bytes) => MediaStatus::Ready { bytes },
            Err(err) => MediaStatus::Unavailable {
                reason: err.to_string(),
            },
        };
    }

    /// Pointer entered the tile. Starts playback only from `Ready`.
    pub fn hover(&mut self) -> bool {
        if matches!(self.status, MediaStatus::Ready { .. }) {
            self.playing = true;
        }
        self.playing
    }

    /// Pointer left the tile: stop and rewind.
    pub fn leave(&mut self) {
        self.playing = false;
    }
}

// ============================================================================
// GALLERY GATING
// ============================================================================

/// One probe to run on behalf of an attached gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeJob {
    pub generation: u64,
    pub tile_index: usize,
    pub source: String,
    pub kind: MediaKind,
}

/// The media attached for the slide on screen, if any.
#[derive(Debug, Default)]
pub struct Gallery {
    slide_index: Option<usize>,
    generation: u64,
    tiles: Vec<MediaTile>,
}

impl Gallery {
    pub fn slide_index(&self) -> Option<usize> {
        self.slide_index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tiles(&self) -> &[MediaTile] {
        &self.tiles
    }

    /// Status of tile `index`; `Detached` when nothing is attached there.
    pub fn status(&self, index: usize) -> MediaStatus {
        self.tiles
            .get(index)
            .map(|tile| tile.status.clone())
            .unwrap_or(MediaStatus::Detached)
    }

    pub fn is_playing(&self, index: usize) -> bool {
        self.tiles.get(index).is_some_and(|tile| tile.playing)
    }

    /// Make `slide_index` the attached slide.
    ///
    /// `tiles` is that slide's gallery (None or empty for slides without
    /// one). Returns the probe jobs to start; re-syncing the slide that is
    /// already attached returns nothing.
    pub fn sync(&mut self, slide_index: usize, tiles: Option<&[Tile]>) -> Vec<ProbeJob> {
        let tiles = tiles.filter(|t| !t.is_empty());

        if self.slide_index == Some(slide_index) && tiles.is_some() {
            return Vec::new();
        }
        self.detach();

        let Some(tiles) = tiles else {
            return Vec::new();
        };

        self.slide_index = Some(slide_index);
        self.tiles = tiles.iter().map(|t| MediaTile::loading(t.sample_id)).collect();
        debug!(
            "media: attached {} tiles for slide {} (generation {})",
            tiles.len(),
            slide_index,
            self.generation
        );

        tiles
            .iter()
            .enumerate()
            .map(|(tile_index, tile)| ProbeJob {
                generation: self.generation,
                tile_index,
                source: tile.source.clone(),
                kind: tile.kind,
            })
            .collect()
    }

    /// Release every attached source.
    pub fn detach(&mut self) {
        if let Some(slide) = self.slide_index.take() {
            debug!("media: detached slide {}", slide);
        }
        self.tiles.clear();
        self.generation += 1;
    }

    /// Apply a probe outcome. Returns false when it belongs to a gallery
    /// that has since been detached.
    pub fn apply(
        &mut self,
        generation: u64,
        tile_index: usize,
        outcome: Result<Option<u64>, MediaError>,
    ) -> bool {
        if generation != self.generation {
            debug!("media: dropped stale result for generation {}", generation);
            return false;
        }
        let Some(tile) = self.tiles.get_mut(tile_index) else {
            return false;
        };
        if let Err(err) = &outcome {
            warn!("media: sample {} unavailable: {}", tile.sample_id, err);
        }
        tile.resolve(outcome);
        true
    }

    /// Move the pointer onto tile `index` (None = off every tile).
    pub fn hover(&mut self, index: Option<usize>) {
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            if Some(i) == index {
                tile.hover();
            } else {
                tile.leave();
            }
        }
    }
}

// ============================================================================
// PROBING
// ============================================================================

/// Checks whether a media source can be attached.
///
/// `Ok(Some(bytes))` for sources with a known size, `Ok(None)` when the
/// source looks playable but its size is unknown.
pub trait MediaProbe: Send + Sync {
    fn probe(&self, source: &str, kind: MediaKind) -> Result<Option<u64>, MediaError>;
}

/// Probe that never touches the network.
///
/// `http(s)` URIs are accepted when they have a host and a suitable
/// extension. `file://` URIs and bare paths are checked on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriProbe;

impl MediaProbe for UriProbe {
    fn probe(&self, source: &str, kind: MediaKind) -> Result<Option<u64>, MediaError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(MediaError::EmptySource);
        }

        match source.split_once("://") {
            Some((scheme, rest)) => match scheme.to_ascii_lowercase().as_str() {
                "http" | "https" => {
                    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
                    if host.is_empty() {
                        return Err(MediaError::MissingHost(source.to_string()));
                    }
                    check_extension(&rest[host.len()..], kind)?;
                    Ok(None)
                }
                "file" => probe_local(Path::new(rest), kind),
                other => Err(MediaError::UnsupportedScheme(other.to_string())),
            },
            None => probe_local(Path::new(source), kind),
        }
    }
}

fn probe_local(path: &Path, kind: MediaKind) -> Result<Option<u64>, MediaError> {
    check_extension(&path.to_string_lossy(), kind)?;
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MediaError::NotFound(path.display().to_string()),
        _ => MediaError::Io(e.to_string()),
    })?;
    if !meta.is_file() {
        return Err(MediaError::Io(format!("{} is not a file", path.display())));
    }
    Ok(Some(meta.len()))
}

/// Reject a known extension that does not match `kind`.
/// Sources without an extension pass.
fn check_extension(location: &str, kind: MediaKind) -> Result<(), MediaError> {
    let path = location.split(['?', '#']).next().unwrap_or("");
    let name = path.rsplit('/').next().unwrap_or("");
    let Some((_, extension)) = name.rsplit_once('.') else {
        return Ok(());
    };
    let extension = extension.to_ascii_lowercase();

    let allowed = match kind {
        MediaKind::Video => VIDEO_EXTENSIONS,
        MediaKind::Image => IMAGE_EXTENSIONS,
    };
    if allowed.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(MediaError::WrongFormat {
            extension,
            expected: kind.to_string(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tiles(n: u32) -> Vec<Tile> {
        (1..=n)
            .map(|id| Tile {
                sample_id: id,
                label: format!("Project {:02}", id),
                title: format!("Reel {}", id),
                kind: MediaKind::Video,
                source: format!("https://cdn.example.com/{}.mp4", id),
            })
            .collect()
    }

    #[test]
    fn attach_puts_every_tile_in_loading() {
        let mut gallery = Gallery::default();
        let tiles = tiles(3);
        let jobs = gallery.sync(4, Some(&tiles));

        assert_eq!(jobs.len(), 3);
        assert_eq!(gallery.slide_index(), Some(4));
        assert!(gallery.tiles().iter().all(|t| t.status == MediaStatus::Loading));
    }

    #[test]
    fn resync_of_attached_slide_starts_no_jobs() {
        let mut gallery = Gallery::default();
        let tiles = tiles(2);
        gallery.sync(1, Some(&tiles));
        assert!(gallery.sync(1, Some(&tiles)).is_empty());
    }

    #[test]
    fn leaving_the_slide_detaches_media() {
        let mut gallery = Gallery::default();
        let tiles = tiles(2);
        gallery.sync(1, Some(&tiles));
        gallery.sync(2, None);

        assert_eq!(gallery.slide_index(), None);
        assert!(gallery.tiles().is_empty());
        assert_eq!(gallery.status(0), MediaStatus::Detached);
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut gallery = Gallery::default();
        let tiles = tiles(1);
        let jobs = gallery.sync(1, Some(&tiles));
        let stale = jobs[0].generation;

        gallery.sync(0, None);
        gallery.sync(1, Some(&tiles));

        assert!(!gallery.apply(stale, 0, Ok(None)));
        assert_eq!(gallery.status(0), MediaStatus::Loading);
    }

    #[test]
    fn failed_tile_becomes_unavailable_and_never_plays() {
        let mut gallery = Gallery::default();
        let tiles = tiles(2);
        let jobs = gallery.sync(1, Some(&tiles));
        let generation = jobs[0].generation;

        assert_eq!(gallery.status(0), MediaStatus::Loading);
        gallery.apply(generation, 0, Err(MediaError::NotFound("1.mp4".into())));
        assert!(matches!(gallery.status(0), MediaStatus::Unavailable { .. }));

        gallery.hover(Some(0));
        assert!(!gallery.is_playing(0));
    }

    #[test]
    fn one_failure_does_not_affect_siblings() {
        let mut gallery = Gallery::default();
        let tiles = tiles(2);
        let generation = gallery.sync(1, Some(&tiles))[0].generation;

        gallery.apply(generation, 0, Err(MediaError::EmptySource));
        gallery.apply(generation, 1, Ok(Some(1024)));

        assert_eq!(gallery.status(1), MediaStatus::Ready { bytes: Some(1024) });
        gallery.hover(Some(1));
        assert!(gallery.is_playing(1));
    }

    #[test]
    fn unavailable_is_terminal_for_the_attachment() {
        let mut tile = MediaTile::loading(1);
        tile.resolve(Err(MediaError::EmptySource));
        tile.resolve(Ok(None));
        assert!(matches!(tile.status, MediaStatus::Unavailable { .. }));
    }

    #[test]
    fn hover_on_loading_tile_does_not_play() {
        let mut tile = MediaTile::loading(1);
        assert!(!tile.hover());
    }

    #[test]
    fn leaving_a_tile_stops_playback() {
        let mut gallery = Gallery::default();
        let tiles = tiles(2);
        let generation = gallery.sync(1, Some(&tiles))[0].generation;
        gallery.apply(generation, 0, Ok(None));

        gallery.hover(Some(0));
        assert!(gallery.is_playing(0));
        gallery.hover(None);
        assert!(!gallery.is_playing(0));
    }

    #[test]
    fn remote_video_with_host_is_playable() {
        let probe = UriProbe;
        assert_eq!(
            probe.probe("https://cdn.example.com/reel/1.mp4?dl=1", MediaKind::Video),
            Ok(None)
        );
    }

    #[test]
    fn remote_uri_without_host_is_rejected() {
        let probe = UriProbe;
        assert!(matches!(
            probe.probe("https:///1.mp4", MediaKind::Video),
            Err(MediaError::MissingHost(_))
        ));
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let probe = UriProbe;
        assert!(matches!(
            probe.probe("https://cdn.example.com/notes.txt", MediaKind::Video),
            Err(MediaError::WrongFormat { .. })
        ));
        assert!(matches!(
            probe.probe("https://cdn.example.com/clip.mp4", MediaKind::Image),
            Err(MediaError::WrongFormat { .. })
        ));
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let probe = UriProbe;
        assert_eq!(
            probe.probe("ftp://example.com/1.mp4", MediaKind::Video),
            Err(MediaError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn empty_source_is_rejected() {
        assert_eq!(UriProbe.probe("  ", MediaKind::Image), Err(MediaError::EmptySource));
    }

    #[test]
    fn local_file_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let probe = UriProbe;
        assert_eq!(
            probe.probe(path.to_str().unwrap(), MediaKind::Video),
            Ok(Some(2048))
        );
        let uri = format!("file://{}", path.display());
        assert_eq!(probe.probe(&uri, MediaKind::Video), Ok(Some(2048)));
    }

    #[test]
    fn missing_local_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.mp4");
        assert!(matches!(
            UriProbe.probe(path.to_str().unwrap(), MediaKind::Video),
            Err(MediaError::NotFound(_))
        ));
    }
}
