//! The certificate generator: per-row render, persist, dispatch loop.

use std::path::PathBuf;

use certmaker_core::{Row, Template};
use certmaker_mail::Mailer;
use certmaker_renderer::{open_base_image, render_field, FontLibrary};

use crate::error::{io_err, BatchError};
use crate::output::{filename_collisions, sanitize_filename};
use crate::pdf;

/// Explicit generator configuration. Output location and font resources are
/// injected by the caller; the generator never derives paths from input
/// naming conventions.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the per-row PDFs are written into (created if absent).
    pub output_dir: PathBuf,
    /// Font resources root, resolved against `font-family` names.
    pub resources_dir: PathBuf,
}

/// Outcome of one template batch.
#[derive(Debug)]
pub struct BatchSummary {
    pub template_name: String,
    /// Certificates rendered and persisted, in roster order.
    pub outputs: Vec<PathBuf>,
    /// Number of mails handed to the dispatcher.
    pub dispatched: usize,
}

fn fail_row(index: usize, row: &Row, err: &dyn std::fmt::Display) {
    let data: Vec<String> = row
        .entries()
        .map(|(column, value)| format!("{column}={value}"))
        .collect();
    tracing::error!("row {index} failed ({}): {err}", data.join(", "));
}

/// Render, persist, and optionally dispatch every roster row, strictly in
/// roster order.
///
/// The base image is decoded once and cloned per row; the clone is exclusively
/// owned for the duration of the row and dropped after persistence. Any
/// failure logs the offending row's data and stops the whole run; files
/// already written stay on disk.
pub fn generate(
    template: &Template,
    config: &GeneratorConfig,
    mailer: Option<&dyn Mailer>,
) -> Result<BatchSummary, BatchError> {
    std::fs::create_dir_all(&config.output_dir).map_err(|e| io_err(&config.output_dir, e))?;

    let save_values = template
        .roster
        .rows()
        .iter()
        .map(|row| row.get(&template.meta.save_column))
        .collect::<Result<Vec<_>, _>>()?;
    for (name, raws) in filename_collisions(&save_values) {
        tracing::warn!(
            "save column values {raws:?} all normalize to '{name}.pdf'; later rows overwrite earlier ones"
        );
    }

    let base = open_base_image(&template.base_image)?;
    let mut fonts = FontLibrary::new(&config.resources_dir);

    let mut outputs = Vec::with_capacity(template.roster.len());
    let mut dispatched = 0;

    for (index, row) in template.roster.rows().iter().enumerate() {
        let mut certificate = base.clone();
        for field in &template.meta.fields {
            if let Err(e) = render_field(&mut certificate, row, field, &mut fonts) {
                fail_row(index, row, &e);
                return Err(e.into());
            }
        }

        let filename = sanitize_filename(row.get(&template.meta.save_column)?);
        let path = config.output_dir.join(format!("{filename}.pdf"));
        if let Err(e) = pdf::write_pdf(&certificate, &path) {
            fail_row(index, row, &e);
            return Err(e);
        }
        tracing::info!("wrote: {}", path.display());

        if let Some(mailer) = mailer {
            if let Err(e) = mailer.dispatch(row, &path) {
                fail_row(index, row, &e);
                return Err(e.into());
            }
            dispatched += 1;
        }

        outputs.push(path);
    }

    Ok(BatchSummary {
        template_name: template.name(),
        outputs,
        dispatched,
    })
}
