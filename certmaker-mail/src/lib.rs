//! # certmaker-mail
//!
//! The mail dispatcher boundary: compose one email per rendered certificate
//! and submit it over SMTP (STARTTLS upgrade, plain login).
//!
//! The generator talks to the [`Mailer`] trait so tests can record dispatches
//! without a network, and so `send_mail = false` simply means no mailer is
//! ever constructed.

pub mod credentials;
pub mod error;
pub mod smtp;

use std::path::Path;

use certmaker_core::Row;

pub use credentials::{CredentialProvider, EnvOrMetaCredentials, StaticCredentials, PASSWORD_ENV};
pub use error::MailError;
pub use smtp::{build_message, SmtpMailer};

/// Sends one certificate to its roster row's recipient.
pub trait Mailer {
    /// Compose and transmit a single message. One network transmission per
    /// call; any transport error propagates and aborts the run.
    fn dispatch(&self, row: &Row, certificate: &Path) -> Result<(), MailError>;
}
