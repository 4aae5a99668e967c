//! Output location derivation and filename sanitization.
//!
//! The generator itself only ever receives an explicit output directory; the
//! historical "replace the `templates` path segment with `certificates`"
//! convention lives here so callers can opt into it (the CLI does) without
//! the generator depending on input naming.

use std::path::{Component, Path, PathBuf};

/// Path segment a templates root is expected to carry.
pub const TEMPLATES_SEGMENT: &str = "templates";
/// Path segment the mirrored output tree uses instead.
pub const CERTIFICATES_SEGMENT: &str = "certificates";

/// Derive an output filename stem from a save-column value:
/// spaces become underscores, the result is uppercased.
pub fn sanitize_filename(value: &str) -> String {
    value.replace(' ', "_").to_uppercase()
}

/// Mirror a template directory into the certificates tree: every `templates`
/// path component becomes `certificates`. A path without such a component
/// falls back to a `certificates/<name>` sibling of the template directory.
pub fn mirror_certificates_dir(template_dir: &Path) -> PathBuf {
    let mut mirrored = PathBuf::new();
    let mut replaced = false;
    for component in template_dir.components() {
        match component {
            Component::Normal(name) if name == TEMPLATES_SEGMENT => {
                mirrored.push(CERTIFICATES_SEGMENT);
                replaced = true;
            }
            other => mirrored.push(other.as_os_str()),
        }
    }
    if replaced {
        return mirrored;
    }

    let name = template_dir
        .file_name()
        .unwrap_or_else(|| template_dir.as_os_str())
        .to_os_string();
    template_dir
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CERTIFICATES_SEGMENT)
        .join(name)
}

/// Groups of distinct raw save-column values that normalize to the same
/// filename. A non-empty result is a configuration hazard: later rows in each
/// group overwrite earlier ones.
pub fn filename_collisions(values: &[&str]) -> Vec<(String, Vec<String>)> {
    let mut by_name: Vec<(String, Vec<String>)> = Vec::new();
    for value in values {
        let name = sanitize_filename(value);
        match by_name.iter_mut().find(|(n, _)| *n == name) {
            Some((_, raws)) => {
                if !raws.iter().any(|r| r == value) {
                    raws.push((*value).to_owned());
                }
            }
            None => by_name.push((name, vec![(*value).to_owned()])),
        }
    }
    by_name.retain(|(_, raws)| raws.len() > 1);
    by_name
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
