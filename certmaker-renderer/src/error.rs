//! Error types for certmaker-renderer.

use std::path::PathBuf;

use thiserror::Error;

use certmaker_core::MetaError;

/// All errors that can arise while rendering a field onto a certificate.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Column lookup or formatter failure against the roster row.
    #[error(transparent)]
    Meta(#[from] MetaError),

    /// A font file could not be read.
    #[error("failed to read font at {path}: {source}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A font file was read but could not be parsed as a TrueType font.
    #[error("failed to parse font at {path}")]
    FontParse { path: PathBuf },

    /// `font-color` is not a `#rrggbb` string.
    #[error("invalid font color '{0}'")]
    InvalidColor(String),

    /// The base image could not be opened or decoded.
    #[error("failed to decode image at {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
