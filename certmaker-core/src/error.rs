//! Error types for certmaker-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading a template directory.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Underlying I/O failure, with the offending path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `meta.json` parse error; includes file path and line context from serde_json.
    #[error("failed to parse meta descriptor at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV roster read error.
    #[error("failed to read roster at {path}: {source}")]
    Roster {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A roster row referenced a column that the header row does not define.
    #[error("column '{column}' not found in roster")]
    MissingColumn { column: String },

    /// A positional template referenced more `{}` slots than values supplied.
    #[error("formatter '{formatter}' expects more than {supplied} value(s)")]
    FormatterArity { formatter: String, supplied: usize },

    /// `send_mail` is set but the `mail` block is absent.
    #[error("meta descriptor at {path} has send_mail=true but no mail settings")]
    MailSettingsMissing { path: PathBuf },

    /// A required template file (`data.csv`, `template.jpg`, `meta.json`) is absent.
    #[error("template file not found: {path}")]
    TemplateFileNotFound { path: PathBuf },
}

/// Convenience constructor for [`MetaError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> MetaError {
    MetaError::Io {
        path: path.into(),
        source,
    }
}
