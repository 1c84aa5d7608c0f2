use std::path::PathBuf;
use thiserror::Error;

/// Failures detected before any file is processed. I/O errors during the
/// run itself propagate as plain `anyhow` errors instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidFlags(&'static str),
    #[error("unknown preset {0:?}, check your presets.toml")]
    UnknownPreset(String),
    #[error("no input files found, please add your icons in \"{}\"", .0.display())]
    EmptyInput(PathBuf),
}
