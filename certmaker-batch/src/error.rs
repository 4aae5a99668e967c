//! Error types for certmaker-batch.

use std::path::PathBuf;

use thiserror::Error;

use certmaker_core::MetaError;
use certmaker_mail::MailError;
use certmaker_renderer::RenderError;

/// All errors that can arise while generating a certificate batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Template/roster configuration failure.
    #[error("meta error: {0}")]
    Meta(#[from] MetaError),

    /// Field rendering failure.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Mail dispatch failure.
    #[error("mail error: {0}")]
    Mail(#[from] MailError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Certificate JPEG encoding failure.
    #[error("image encode error: {0}")]
    Encode(String),

    /// PDF assembly or write failure.
    #[error("PDF error at {path}: {message}")]
    Pdf { path: PathBuf, message: String },
}

/// Convenience constructor for [`BatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BatchError {
    BatchError::Io {
        path: path.into(),
        source,
    }
}
