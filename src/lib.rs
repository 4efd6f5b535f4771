//! cinedeck: a cinema-themed slide deck presented in the terminal.

pub mod contact;
pub mod content;
pub mod deck;
pub mod error;
pub mod layout;
pub mod logging;
pub mod media;
pub mod navigation;
pub mod report;
pub mod tui;
pub mod types;
