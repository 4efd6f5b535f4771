//! State transitions: (Navigator, Action) → Transition, and applying them.
//!
//! `update` is pure. `apply` and `handle_background_event` mutate the App
//! but perform no I/O; media probes they request are returned as jobs for
//! the effects layer to run.

use log::debug;

use crate::media::ProbeJob;
use crate::navigation::Navigator;

use super::state::{current_tree, Action, App, AppEvent, SlideIn, Transition};

/// Pure transition function over the navigation cursor.
pub fn update(nav: Navigator, action: &Action) -> Transition {
    let mut nav = nav;
    match action {
        Action::Next => Transition::Navigate(nav.next()),
        Action::Previous => Transition::Navigate(nav.previous()),
        Action::First => Transition::Navigate(nav.first()),
        Action::Last => Transition::Navigate(nav.last()),
        Action::Hover(tile) => Transition::Hover(*tile),
        Action::Quit => Transition::Quit,
    }
}

/// Adopt a transition. Returns media probe jobs to start.
pub fn apply(app: &mut App, transition: Transition) -> Vec<ProbeJob> {
    match transition {
        Transition::Navigate(nav) => {
            let moved = nav.current() != app.nav.current();
            app.nav = nav;
            if !moved {
                return Vec::new();
            }

            debug!(
                "nav: slide {} (direction {:+})",
                app.nav.position_label(),
                app.nav.direction().signum()
            );
            app.tree = current_tree(&app.deck, &app.nav);
            app.slide_in = SlideIn {
                frames_left: app.transition_frames,
                total: app.transition_frames,
            };
            app.gallery.sync(app.nav.current(), app.tree.gallery())
        }
        Transition::Hover(tile) => {
            app.gallery.hover(tile);
            Vec::new()
        }
        Transition::Quit => {
            app.should_quit = true;
            Vec::new()
        }
    }
}

/// Handle non-input events: animation frames and media outcomes.
pub fn handle_background_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Tick => {
            app.slide_in.frames_left = app.slide_in.frames_left.saturating_sub(1);
        }
        AppEvent::MediaProbed {
            generation,
            tile_index,
            outcome,
        } => {
            app.gallery.apply(generation, tile_index, outcome);
        }
        // Input is handled via map_key/map_mouse → update
        AppEvent::Key(_) | AppEvent::Mouse(_) | AppEvent::Resize => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::error::MediaError;
    use crate::media::MediaStatus;
    use crate::navigation::Direction;
    use crate::types::LayoutKind;

    fn app_at(index: usize) -> App {
        App::new(Deck::built_in().unwrap(), index, 3).unwrap().0
    }

    fn step(app: &mut App, action: Action) -> Vec<ProbeJob> {
        let transition = update(app.nav, &action);
        apply(app, transition)
    }

    #[test]
    fn next_moves_and_redispatches() {
        let mut app = app_at(0);
        step(&mut app, Action::Next);
        assert_eq!(app.nav.current(), 1);
        assert_eq!(app.tree.layout, LayoutKind::Profile);
        assert_eq!(app.slide_in.frames_left, 3);
    }

    #[test]
    fn previous_at_start_only_records_direction() {
        let mut app = app_at(0);
        let before = app.tree.clone();
        step(&mut app, Action::Previous);
        assert_eq!(app.nav.current(), 0);
        assert_eq!(app.nav.direction(), Direction::Backward);
        assert_eq!(app.tree, before);
        assert!(!app.slide_in.is_running());
    }

    #[test]
    fn rapid_next_presses_clamp_per_step() {
        let mut app = app_at(0);
        for _ in 0..40 {
            step(&mut app, Action::Next);
            assert!(app.nav.current() < app.deck.len());
        }
        assert!(app.nav.at_end());
        step(&mut app, Action::Previous);
        assert_eq!(app.nav.current(), app.deck.len() - 2);
    }

    #[test]
    fn first_and_last_jump() {
        let mut app = app_at(5);
        step(&mut app, Action::Last);
        assert!(app.nav.at_end());
        step(&mut app, Action::First);
        assert!(app.nav.at_start());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app_at(0);
        assert_eq!(update(app.nav, &Action::Quit), Transition::Quit);
        step(&mut app, Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn entering_portfolio_attaches_and_leaving_detaches() {
        let mut app = app_at(10);
        let jobs = step(&mut app, Action::Next);
        assert_eq!(app.tree.layout, LayoutKind::Portfolio);
        assert_eq!(jobs.len(), 4);
        assert_eq!(app.gallery.status(0), MediaStatus::Loading);

        let jobs = step(&mut app, Action::Next);
        assert!(jobs.is_empty());
        assert_eq!(app.gallery.slide_index(), None);
        assert_eq!(app.gallery.status(0), MediaStatus::Detached);
    }

    #[test]
    fn media_outcome_updates_attached_tile() {
        let mut app = app_at(10);
        let jobs = step(&mut app, Action::Next);
        handle_background_event(
            &mut app,
            AppEvent::MediaProbed {
                generation: jobs[1].generation,
                tile_index: 1,
                outcome: Err(MediaError::NotFound("2.mp4".into())),
            },
        );
        assert!(matches!(app.gallery.status(1), MediaStatus::Unavailable { .. }));

        step(&mut app, Action::Hover(Some(1)));
        assert!(!app.gallery.is_playing(1));
    }

    #[test]
    fn late_outcome_after_leaving_is_ignored() {
        let mut app = app_at(10);
        let jobs = step(&mut app, Action::Next);
        step(&mut app, Action::Next);

        handle_background_event(
            &mut app,
            AppEvent::MediaProbed {
                generation: jobs[0].generation,
                tile_index: 0,
                outcome: Ok(None),
            },
        );
        assert!(app.gallery.tiles().is_empty());
    }

    #[test]
    fn ticks_run_the_slide_in_down() {
        let mut app = app_at(0);
        step(&mut app, Action::Next);
        for _ in 0..10 {
            handle_background_event(&mut app, AppEvent::Tick);
        }
        assert!(!app.slide_in.is_running());
    }
}
