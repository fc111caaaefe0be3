use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutodocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source folder not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Components directory not found: {}", .0.display())]
    MissingComponents(PathBuf),

    #[error("Failed to copy diagram {} to {}: {source}", .from.display(), .to.display())]
    ImageCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, AutodocError>;
