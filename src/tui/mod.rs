//! Interactive terminal presenter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Pure transitions over the navigation cursor
//! - `view`: Pure rendering and screen geometry
//! - `run`: Effects (terminal, input, media probes)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
