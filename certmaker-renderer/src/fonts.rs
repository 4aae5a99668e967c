//! Font loading with a per-run cache.
//!
//! Fonts are named by file name in the field descriptor (`font-family`) and
//! resolved under a single resources directory. Parsed fonts are cached for
//! the lifetime of the library so a roster of N rows loads each face once.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use rusttype::Font;

use crate::error::RenderError;

/// Loads and caches TrueType fonts from a resources directory.
pub struct FontLibrary {
    root: PathBuf,
    cache: HashMap<String, Arc<Font<'static>>>,
}

impl FontLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FontLibrary {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Fetch a font by file name, loading and parsing it on first use.
    pub fn get(&mut self, name: &str) -> Result<Arc<Font<'static>>, RenderError> {
        if let Some(font) = self.cache.get(name) {
            return Ok(Arc::clone(font));
        }

        let path = self.root.join(name);
        let bytes = std::fs::read(&path).map_err(|e| RenderError::FontIo {
            path: path.clone(),
            source: e,
        })?;
        let font = Font::try_from_vec(bytes).ok_or(RenderError::FontParse { path })?;
        tracing::debug!("loaded font '{name}'");

        let font = Arc::new(font);
        self.cache.insert(name.to_owned(), Arc::clone(&font));
        Ok(font)
    }
}
