//! Template directory loading and discovery.
//!
//! # Directory layout per template
//!
//! ```text
//! templates/
//!   Certificate2024/
//!     data.csv       (roster; header row = column names)
//!     template.jpg   (base certificate image)
//!     meta.json      (meta descriptor)
//! ```
//!
//! A run discovers every directory under the templates root whose name starts
//! with [`TEMPLATE_DIR_PREFIX`] and processes each as an independent batch.

use std::path::{Path, PathBuf};

use crate::error::{io_err, MetaError};
use crate::roster::Roster;
use crate::types::TemplateMeta;

/// Directory name prefix a template must carry to be discovered.
pub const TEMPLATE_DIR_PREFIX: &str = "Certificate";

/// Roster file name inside a template directory.
pub const ROSTER_FILE: &str = "data.csv";
/// Base image file name inside a template directory.
pub const BASE_IMAGE_FILE: &str = "template.jpg";
/// Meta descriptor file name inside a template directory.
pub const META_FILE: &str = "meta.json";

/// A fully loaded template directory: meta descriptor, roster, and the path
/// of the base image (decoded lazily by the renderer side).
#[derive(Debug, Clone)]
pub struct Template {
    /// Directory this template was loaded from.
    pub dir: PathBuf,
    pub meta: TemplateMeta,
    pub roster: Roster,
    /// `<dir>/template.jpg`; existence is checked at load time.
    pub base_image: PathBuf,
}

impl Template {
    /// Load `meta.json` and `data.csv` from `dir` and verify the base image
    /// exists. Enforces the load-time invariant that `send_mail = true`
    /// requires a `mail` block.
    pub fn load(dir: &Path) -> Result<Self, MetaError> {
        let meta_path = dir.join(META_FILE);
        let contents = std::fs::read_to_string(&meta_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MetaError::TemplateFileNotFound { path: meta_path.clone() }
            } else {
                io_err(&meta_path, e)
            }
        })?;
        let meta: TemplateMeta = serde_json::from_str(&contents).map_err(|e| MetaError::Parse {
            path: meta_path.clone(),
            source: e,
        })?;

        if meta.send_mail && meta.mail.is_none() {
            return Err(MetaError::MailSettingsMissing { path: meta_path });
        }

        let roster = Roster::load(&dir.join(ROSTER_FILE))?;

        let base_image = dir.join(BASE_IMAGE_FILE);
        if !base_image.exists() {
            return Err(MetaError::TemplateFileNotFound { path: base_image });
        }

        Ok(Template {
            dir: dir.to_path_buf(),
            meta,
            roster,
            base_image,
        })
    }

    /// Template name, taken from the directory's file name.
    pub fn name(&self) -> String {
        self.dir
            .file_name()
            .unwrap_or_else(|| self.dir.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// List every template directory under `root`, sorted by name.
///
/// A missing root yields an empty list; a root that exists but cannot be
/// read, or an entry that cannot be inspected, is an I/O error.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, MetaError> {
    if !root.exists() {
        return Ok(vec![]);
    }
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root).map_err(|e| io_err(root, e))? {
        // An unreadable entry must fail the scan, not silently hide a template.
        let entry = entry.map_err(|e| io_err(root, e))?;
        if !entry
            .file_name()
            .to_string_lossy()
            .starts_with(TEMPLATE_DIR_PREFIX)
        {
            continue;
        }
        let file_type = entry.file_type().map_err(|e| io_err(entry.path(), e))?;
        if file_type.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
