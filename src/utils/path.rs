//! Path utilities: expand ~ in user-supplied paths, read input exports.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Read the whole export into memory.
pub fn read_input(path: &str) -> AppResult<Vec<u8>> {
    let p = expand_tilde(path);
    fs::read(&p).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot read {}: {e}", p.display()),
        ))
    })
}
