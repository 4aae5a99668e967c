//! Credential sourcing for SMTP login.
//!
//! The inline `mail.password` key in `meta.json` is a fallback, not the
//! preferred source: an environment override always wins, so real credentials
//! never have to live in the template directory.

use certmaker_core::MailSettings;

use crate::error::MailError;

/// Environment variable consulted before the meta descriptor's inline key.
pub const PASSWORD_ENV: &str = "CERTMAKER_SMTP_PASSWORD";

/// Resolves the SMTP password for a sender.
pub trait CredentialProvider {
    fn smtp_password(&self, settings: &MailSettings) -> Result<String, MailError>;
}

/// Default provider: `$CERTMAKER_SMTP_PASSWORD`, else `mail.password`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvOrMetaCredentials;

impl CredentialProvider for EnvOrMetaCredentials {
    fn smtp_password(&self, settings: &MailSettings) -> Result<String, MailError> {
        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            return Ok(password);
        }
        settings
            .password
            .clone()
            .ok_or_else(|| MailError::MissingCredential {
                sender: settings.send_from.clone(),
            })
    }
}

/// Fixed password, for tests and non-interactive callers.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub String);

impl CredentialProvider for StaticCredentials {
    fn smtp_password(&self, _settings: &MailSettings) -> Result<String, MailError> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
