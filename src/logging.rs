//! Logger setup.
//!
//! The presenter owns the terminal, so log records go to a file instead of
//! stderr. The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

/// `<cache dir>/cinedeck/cinedeck.log`, or `cinedeck.log` in the working
/// directory when the platform has no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("cinedeck").join("cinedeck.log"))
        .unwrap_or_else(|| PathBuf::from("cinedeck.log"))
}

/// Route `log` records to `path`, appending.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)
}

/// Plain stderr logging for the non-interactive commands.
pub fn init_stderr_logger() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}
