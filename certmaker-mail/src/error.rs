//! Error types for certmaker-mail.

use std::path::PathBuf;

use thiserror::Error;

use certmaker_core::MetaError;

/// All errors that can arise while composing or dispatching mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// Column lookup or body template failure against the roster row.
    #[error(transparent)]
    Meta(#[from] MetaError),

    /// A sender or recipient address failed to parse.
    #[error("invalid email address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The multipart message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// The attachment content type string was rejected.
    #[error("invalid content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    /// The certificate attachment could not be read from disk.
    #[error("failed to read attachment at {path}: {source}")]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SMTP transport failure (connection, STARTTLS, auth, submission).
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// No credential available from any provider.
    #[error("no SMTP credential available for '{sender}'")]
    MissingCredential { sender: String },
}
