//! SMTP dispatch over lettre's blocking transport.
//!
//! One message per call: the transport is built, the message submitted over a
//! STARTTLS-upgraded connection with plain login, and the connection dropped.
//! No retry anywhere; transport errors propagate and abort the run.

use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use certmaker_core::{fill_template, MailSettings, Row};

use crate::credentials::CredentialProvider;
use crate::error::MailError;
use crate::Mailer;

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e| MailError::InvalidAddress {
        address: address.to_owned(),
        source: e,
    })
}

/// Compose the multipart message for one roster row: formatted text body plus
/// the certificate as a base64 `application/pdf` attachment.
pub fn build_message(
    settings: &MailSettings,
    row: &Row,
    certificate: &Path,
) -> Result<Message, MailError> {
    let recipient = row.get(&settings.send_to)?.trim().to_owned();

    let values = settings
        .parameters
        .iter()
        .map(|p| row.get(p))
        .collect::<Result<Vec<_>, _>>()?;
    let body = fill_template(&settings.content, &values)?;

    let bytes = std::fs::read(certificate).map_err(|e| MailError::Attachment {
        path: certificate.to_path_buf(),
        source: e,
    })?;
    let filename = certificate
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "certificate.pdf".to_owned());
    let pdf: ContentType = "application/pdf".parse()?;

    let message = Message::builder()
        .from(parse_mailbox(&settings.send_from)?)
        .to(parse_mailbox(&recipient)?)
        .subject(settings.subject.clone())
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body))
                .singlepart(Attachment::new(filename).body(bytes, pdf)),
        )?;
    Ok(message)
}

/// [`Mailer`] backed by a real SMTP server, configured from the template's
/// mail settings with the credential resolved once at construction.
pub struct SmtpMailer {
    settings: MailSettings,
    password: String,
}

impl SmtpMailer {
    pub fn new(
        settings: MailSettings,
        credentials: &dyn CredentialProvider,
    ) -> Result<Self, MailError> {
        let password = credentials.smtp_password(&settings)?;
        Ok(SmtpMailer { settings, password })
    }
}

impl Mailer for SmtpMailer {
    fn dispatch(&self, row: &Row, certificate: &Path) -> Result<(), MailError> {
        let message = build_message(&self.settings, row, certificate)?;

        let transport = SmtpTransport::starttls_relay(&self.settings.server)?
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.send_from.clone(),
                self.password.clone(),
            ))
            .build();
        transport.send(&message)?;

        tracing::info!(
            "dispatched {} to {}",
            certificate.display(),
            row.get(&self.settings.send_to)?.trim()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use certmaker_core::{MetaError, Roster};
    use tempfile::TempDir;

    use super::*;

    fn settings() -> MailSettings {
        MailSettings {
            send_from: "sender@x.com".into(),
            send_to: "email".into(),
            subject: "Your certificate".into(),
            content: "Hello {}, attached is your certificate.".into(),
            parameters: vec!["name".into()],
            server: "smtp.x.com".into(),
            port: 587,
            password: Some("pw".into()),
        }
    }

    fn roster() -> Roster {
        Roster::from_records(
            vec!["name".into(), "email".into()],
            vec![vec!["ana".into(), "  ana@x.com ".into()]],
        )
    }

    fn fake_certificate(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("ANA.pdf");
        std::fs::write(&path, b"%PDF-1.5 fake").unwrap();
        path
    }

    #[test]
    fn builds_multipart_with_attachment() {
        let dir = TempDir::new().unwrap();
        let cert = fake_certificate(&dir);
        let message = build_message(&settings(), &roster().rows()[0], &cert).unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();
        assert!(rendered.contains("Hello ana"));
        assert!(rendered.contains("attachment; filename=\"ANA.pdf\""));
        assert!(rendered.contains("application/pdf"));
        // Recipient address is trimmed before parsing.
        assert!(rendered.contains("ana@x.com"));
    }

    #[test]
    fn missing_recipient_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let cert = fake_certificate(&dir);
        let mut s = settings();
        s.send_to = "address".into();
        let err = build_message(&s, &roster().rows()[0], &cert).unwrap_err();
        assert!(matches!(
            err,
            MailError::Meta(MetaError::MissingColumn { .. })
        ));
    }

    #[test]
    fn body_arity_mismatch_is_fatal() {
        let dir = TempDir::new().unwrap();
        let cert = fake_certificate(&dir);
        let mut s = settings();
        s.content = "Hello {} and {}".into();
        let err = build_message(&s, &roster().rows()[0], &cert).unwrap_err();
        assert!(matches!(
            err,
            MailError::Meta(MetaError::FormatterArity { .. })
        ));
    }

    #[test]
    fn missing_attachment_reports_path() {
        let err = build_message(
            &settings(),
            &roster().rows()[0],
            Path::new("/nope/ANA.pdf"),
        )
        .unwrap_err();
        assert!(matches!(err, MailError::Attachment { .. }));
    }
}
