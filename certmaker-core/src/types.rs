//! Domain types for certmaker templates.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! The descriptor structs deserialize straight from `meta.json` via serde,
//! keeping the JSON's kebab-case keys behind `#[serde(rename)]`.

use serde::{Deserialize, Serialize};

/// Number of logical lines in the vertical band a field reserves by default.
///
/// Short messages are padded with empty lines up to this count so they sit
/// centered inside the band the template artwork reserves for them.
pub const DEFAULT_BAND_LINES: usize = 3;

fn default_band_lines() -> usize {
    DEFAULT_BAND_LINES
}

// ---------------------------------------------------------------------------
// Field descriptor
// ---------------------------------------------------------------------------

/// Data source for one field: a single roster column or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Single(String),
    Multiple(Vec<String>),
}

impl ColumnRef {
    /// Column names in substitution order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            ColumnRef::Single(name) => vec![name.as_str()],
            ColumnRef::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// One text overlay: data source, formatting, font, and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Source column(s); a list must match the formatter's slot count.
    pub column: ColumnRef,

    /// Positional template string; each `{}` consumes one column value.
    pub formatter: String,

    /// Font file name, resolved under the resources directory.
    #[serde(rename = "font-family")]
    pub font_family: String,

    /// Font size in pixels.
    #[serde(rename = "font-size")]
    pub font_size: f32,

    /// Fill color as `#rrggbb`.
    #[serde(rename = "font-color")]
    pub font_color: String,

    /// Anchor point `(x, y)`; every line is centered on its own anchor.
    pub coords: (f32, f32),

    /// Vertical distance between successive line anchors, in pixels.
    #[serde(default)]
    pub pad: f32,

    /// Word-wrap width in tokens; absent means a single line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_elements: Option<usize>,

    /// Height of the reserved vertical band, in logical lines.
    #[serde(default = "default_band_lines")]
    pub band_lines: usize,
}

// ---------------------------------------------------------------------------
// Mail settings
// ---------------------------------------------------------------------------

/// SMTP delivery parameters from the `mail` block of `meta.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSettings {
    /// Sender address; doubles as the SMTP login name.
    pub send_from: String,

    /// Roster column holding the recipient address.
    pub send_to: String,

    pub subject: String,

    /// Positional body template; slots are filled from `parameters` columns.
    pub content: String,

    /// Roster columns substituted into `content`, in order.
    #[serde(default)]
    pub parameters: Vec<String>,

    pub server: String,

    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Inline credential. Prefer an injected credential provider; this key is
    /// the fallback when no environment override is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_smtp_port() -> u16 {
    587
}

// ---------------------------------------------------------------------------
// Meta descriptor
// ---------------------------------------------------------------------------

/// Per-template configuration bundle, the root object of `meta.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMeta {
    /// Ordered field list; later fields draw on top of earlier ones.
    pub fields: Vec<FieldSpec>,

    /// Roster column the output filename derives from.
    pub save_column: String,

    #[serde(default)]
    pub send_mail: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<MailSettings>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_ref_single_deserializes_from_string() {
        let c: ColumnRef = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(c, ColumnRef::Single("name".into()));
        assert_eq!(c.names(), vec!["name"]);
    }

    #[test]
    fn column_ref_multiple_deserializes_from_array() {
        let c: ColumnRef = serde_json::from_str("[\"first\", \"last\"]").unwrap();
        assert_eq!(c.names(), vec!["first", "last"]);
    }

    #[test]
    fn field_spec_defaults() {
        let json = r##"{
            "column": "name",
            "formatter": "{}",
            "font-family": "arial.ttf",
            "font-size": 48,
            "font-color": "#000000",
            "coords": [100, 50]
        }"##;
        let field: FieldSpec = serde_json::from_str(json).unwrap();
        assert_eq!(field.pad, 0.0);
        assert_eq!(field.max_elements, None);
        assert_eq!(field.band_lines, DEFAULT_BAND_LINES);
    }

    #[test]
    fn mail_settings_default_port() {
        let json = r#"{
            "send_from": "a@x.com",
            "send_to": "email",
            "subject": "hi",
            "content": "hello {}",
            "parameters": ["name"],
            "server": "smtp.x.com"
        }"#;
        let mail: MailSettings = serde_json::from_str(json).unwrap();
        assert_eq!(mail.port, 587);
        assert!(mail.password.is_none());
    }

    #[test]
    fn meta_roundtrip() {
        let json = r##"{
            "fields": [{
                "column": ["name", "course"],
                "formatter": "{} completed {}",
                "font-family": "arial.ttf",
                "font-size": 36,
                "font-color": "#1a1a2e",
                "coords": [640, 300],
                "pad": 40,
                "max_elements": 4
            }],
            "save_column": "name",
            "send_mail": false
        }"##;
        let meta: TemplateMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.fields.len(), 1);
        assert!(!meta.send_mail);
        assert!(meta.mail.is_none());

        let back = serde_json::to_string(&meta).unwrap();
        let again: TemplateMeta = serde_json::from_str(&back).unwrap();
        assert_eq!(meta, again);
    }
}
