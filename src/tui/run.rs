//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Input reader thread: forwards crossterm key, mouse and resize events
//! - Probe threads: one per gallery attach, sending media outcomes
//!
//! The event loop consumes from the channel, dispatching to pure handlers.
//! While a slide-in runs, a deadline-based frame clock paces the ticks so
//! a stream of input cannot stall the animation.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{debug, info};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use ratatui::Terminal;
use rayon::prelude::*;

use crate::deck::Deck;
use crate::media::{MediaProbe, ProbeJob, UriProbe};
use crate::types::PresentConfig;

use super::state::{Action, App, AppEvent};
use super::update::{apply, handle_background_event, update};
use super::view::{gallery_tile_areas, nav_button_areas, render, screen_areas};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action, and for key
/// releases and repeats reported by terminals that distinguish them.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('l') => {
            Some(Action::Next)
        }
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Previous),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event on a screen of size `area` to a semantic Action.
///
/// Left clicks hit-test the navigation buttons; a disabled button ignores
/// the click. Movement reports which gallery tile is under the pointer.
pub fn map_mouse(mouse: MouseEvent, area: Rect, app: &App) -> Option<Action> {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (prev, next) = nav_button_areas(screen_areas(area).footer);
            if prev.contains(position) && !app.nav.at_start() {
                Some(Action::Previous)
            } else if next.contains(position) && !app.nav.at_end() {
                Some(Action::Next)
            } else {
                None
            }
        }
        MouseEventKind::Moved => {
            // Tiles are drawn shifted until the slide-in settles
            if app.tree.gallery().is_none() || app.slide_in.is_running() {
                return None;
            }
            let tile = gallery_tile_areas(area, &app.tree)
                .iter()
                .position(|cell| cell.contains(position));
            Some(Action::Hover(tile))
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards input to the channel.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // focus, paste
                Err(_) => break,
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Spawn a thread that probes one gallery's media in parallel and sends
/// each outcome as it arrives.
fn spawn_probes(jobs: Vec<ProbeJob>, probe: Arc<dyn MediaProbe>, tx: mpsc::Sender<AppEvent>) {
    if jobs.is_empty() {
        return;
    }
    debug!("probing {} media item(s)", jobs.len());

    thread::spawn(move || {
        jobs.par_iter().for_each(|job| {
            let outcome = probe.probe(&job.source, job.kind);
            // Best-effort: the loop may have exited already
            let _ = tx.send(AppEvent::MediaProbed {
                generation: job.generation,
                tile_index: job.tile_index,
                outcome,
            });
        });
    });
}

// ============================================================================
// FRAME CLOCK
// ============================================================================

/// Paces slide-in ticks against a deadline rather than receive timeouts.
#[derive(Debug, Clone, Copy)]
struct FrameClock {
    interval: Duration,
    deadline: Option<Instant>,
}

impl FrameClock {
    fn new(interval: Duration) -> Self {
        FrameClock {
            interval,
            deadline: None,
        }
    }

    /// Time until the next frame is due. Arms the clock when idle.
    fn remaining(&mut self, now: Instant) -> Duration {
        let deadline = *self.deadline.get_or_insert(now + self.interval);
        deadline.saturating_duration_since(now)
    }

    /// A frame was emitted at `now`; schedule the next one.
    fn tick(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    fn stop(&mut self) {
        self.deadline = None;
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Present `deck` until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the input reader, and runs the event loop. The terminal is
/// restored on every exit path, including panics.
pub fn run(deck: Deck, config: &PresentConfig) -> io::Result<()> {
    let (app, jobs) = App::new(deck, config.start_index, config.transition_frames)
        .map_err(io::Error::other)?;
    info!(
        "presenting '{}' ({} slides) from slide {}",
        app.deck.info().title,
        app.deck.len(),
        app.nav.position_label()
    );

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, app, jobs, config);
    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    jobs: Vec<ProbeJob>,
    config: &PresentConfig,
) -> io::Result<()> {
    let mut clock = FrameClock::new(Duration::from_millis(config.frame_interval_ms));
    let probe: Arc<dyn MediaProbe> = Arc::new(UriProbe);
    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_input_reader(tx.clone());
    spawn_probes(jobs, Arc::clone(&probe), tx.clone());

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            info!("quit at slide {}", app.nav.position_label());
            break;
        }

        // Block on the next event; while animating, no later than the next frame
        let event = if app.slide_in.is_running() {
            let now = Instant::now();
            let wait = clock.remaining(now);
            if wait.is_zero() {
                clock.tick(now);
                AppEvent::Tick
            } else {
                match rx.recv_timeout(wait) {
                    Ok(e) => e,
                    Err(RecvTimeoutError::Timeout) => {
                        clock.tick(Instant::now());
                        AppEvent::Tick
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        } else {
            clock.stop();
            match rx.recv() {
                Ok(e) => e,
                Err(_) => break, // all senders dropped
            }
        };

        let action = match &event {
            AppEvent::Key(key) => map_key(*key),
            AppEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                map_mouse(*mouse, Rect::new(0, 0, size.width, size.height), &app)
            }
            _ => None,
        };

        match action {
            Some(action) => {
                let transition = update(app.nav, &action);
                let jobs = apply(&mut app, transition);
                spawn_probes(jobs, Arc::clone(&probe), tx.clone());
            }
            None => handle_background_event(&mut app, event),
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
