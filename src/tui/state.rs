//! TUI state algebra: the presenter's model, events and actions.
//!
//! The only mutable state is the [`Navigator`] cursor, plus two derived
//! pieces kept beside it: the dispatched tree of the current slide and the
//! media attached for it. Both are rebuilt whenever the cursor moves.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::deck::Deck;
use crate::error::{DeckResult, MediaError};
use crate::layout::{dispatch, SlideTree};
use crate::media::{Gallery, ProbeJob};
use crate::navigation::Navigator;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The terminal reader thread sends input; probe threads send media
/// outcomes. Events are handled strictly in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized; only a redraw is needed.
    Resize,
    /// One frame of the slide transition elapsed.
    Tick,
    /// A media probe finished.
    MediaProbed {
        generation: u64,
        tile_index: usize,
        outcome: Result<Option<u64>, MediaError>,
    },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Slide-in animation progress after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideIn {
    pub frames_left: u8,
    pub total: u8,
}

impl SlideIn {
    pub fn is_running(&self) -> bool {
        self.frames_left > 0
    }
}

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub deck: Deck,
    pub nav: Navigator,
    /// Render tree of `deck[nav.current()]`.
    pub tree: SlideTree,
    pub gallery: Gallery,
    pub slide_in: SlideIn,
    /// Frames a new slide-in lasts.
    pub transition_frames: u8,
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    First,
    Last,
    /// Pointer over gallery tile `Some(i)`, or over no tile.
    Hover(Option<usize>),
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure transition over the navigator.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Adopt this cursor (possibly unchanged in position).
    Navigate(Navigator),
    Hover(Option<usize>),
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Open `deck` at `start_index` (clamped).
    ///
    /// Returns the probe jobs for the opening slide's media, if any.
    pub fn new(deck: Deck, start_index: usize, transition_frames: u8) -> DeckResult<(Self, Vec<ProbeJob>)> {
        let nav = Navigator::starting_at(deck.len(), start_index)?;
        let tree = current_tree(&deck, &nav);
        let mut gallery = Gallery::default();
        let jobs = gallery.sync(nav.current(), tree.gallery());

        let app = App {
            deck,
            nav,
            tree,
            gallery,
            slide_in: SlideIn::default(),
            transition_frames,
            should_quit: false,
        };
        Ok((app, jobs))
    }
}

/// Dispatch the slide under the cursor.
pub(crate) fn current_tree(deck: &Deck, nav: &Navigator) -> SlideTree {
    // The navigator is sized from the deck, so the index is always valid.
    let slide = deck.get(nav.current()).unwrap_or(&deck.slides()[0]);
    dispatch(slide)
}

// ============================================================================
// TESTS
// ============================================================================
