use std::{io, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// Failure of a single [`resize_icon`](crate::resize_icon) call.
///
/// Every variant renders as one line naming the offending path and the
/// underlying cause.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: ImageError },

    #[error("failed to encode {}: {source}", path.display())]
    Encode { path: PathBuf, source: ImageError },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    CreateDir,
    Open,
    Decode,
    Encode,
    Write,
}

impl ResizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CreateDir { .. } => ErrorKind::CreateDir,
            Self::Open { .. } => ErrorKind::Open,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::Write { .. } => ErrorKind::Write,
        }
    }

    /// The file or directory the failing step was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDir { path, .. }
            | Self::Open { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
