//! Certmaker core library: domain types, template loading, errors.
//!
//! Public API surface:
//! - [`types`]: field/meta descriptors deserialized from `meta.json`
//! - [`format`]: positional `{}` template filling
//! - [`roster`]: CSV roster rows
//! - [`template`]: template directory loading and discovery
//! - [`error`]: [`MetaError`]

pub mod error;
pub mod format;
pub mod roster;
pub mod template;
pub mod types;

pub use error::MetaError;
pub use format::fill_template;
pub use roster::{Roster, Row};
pub use template::{discover, Template, TEMPLATE_DIR_PREFIX};
pub use types::{ColumnRef, FieldSpec, MailSettings, TemplateMeta, DEFAULT_BAND_LINES};
