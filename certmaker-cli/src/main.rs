//! Certmaker, batch certificate generation from template directories.
//!
//! # Usage
//!
//! ```text
//! certmaker [ROOT] [--resources <dir>] [--output-root <dir>] [--no-mail]
//! ```
//!
//! Every `Certificate*` directory under ROOT is processed as one batch: each
//! roster row is rendered onto the base image, saved as a PDF, and optionally
//! emailed to the row's recipient.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use certmaker_batch::{generate, mirror_certificates_dir, BatchSummary, GeneratorConfig};
use certmaker_core::{discover, Template};
use certmaker_mail::{EnvOrMetaCredentials, Mailer, SmtpMailer};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "certmaker",
    version,
    about = "Render personalized certificates from template directories",
    long_about = None,
)]
struct Cli {
    /// Directory holding the Certificate* template directories.
    #[arg(default_value = "templates")]
    root: PathBuf,

    /// Directory holding the font files referenced by meta.json.
    #[arg(long, default_value = "resources")]
    resources: PathBuf,

    /// Write output under <output-root>/<template-name> instead of mirroring
    /// the templates root as a certificates tree.
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Skip mail dispatch even for templates with send_mail enabled.
    #[arg(long)]
    no_mail: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let dirs = discover(&cli.root)
        .with_context(|| format!("failed to scan templates root '{}'", cli.root.display()))?;
    if dirs.is_empty() {
        println!("No templates found under '{}'.", cli.root.display());
        return Ok(());
    }

    for dir in dirs {
        let template = Template::load(&dir)
            .with_context(|| format!("failed to load template '{}'", dir.display()))?;
        let name = template.name();

        let output_dir = match &cli.output_root {
            Some(root) => root.join(&name),
            None => mirror_certificates_dir(&dir),
        };
        let config = GeneratorConfig {
            output_dir,
            resources_dir: cli.resources.clone(),
        };

        let mailer = build_mailer(&template, cli.no_mail)
            .with_context(|| format!("mail setup failed for '{name}'"))?;
        let summary = generate(&template, &config, mailer.as_deref())
            .with_context(|| format!("generation failed for '{name}'"))?;
        print_summary(&summary);
    }

    Ok(())
}

/// A mailer is only constructed when the template opts in and the user did
/// not pass `--no-mail`; credentials resolve at construction so a missing
/// password fails the batch before any row is rendered.
fn build_mailer(template: &Template, no_mail: bool) -> Result<Option<Box<dyn Mailer>>> {
    if !template.meta.send_mail || no_mail {
        return Ok(None);
    }
    let settings = template
        .meta
        .mail
        .clone()
        .context("send_mail is enabled but the mail block is missing")?;
    let mailer = SmtpMailer::new(settings, &EnvOrMetaCredentials)?;
    Ok(Some(Box::new(mailer)))
}

fn print_summary(summary: &BatchSummary) {
    let check = "✓".green().bold();
    if summary.dispatched > 0 {
        println!(
            "{check} '{}' ({} rendered, {} mailed)",
            summary.template_name,
            summary.outputs.len(),
            summary.dispatched
        );
    } else {
        println!(
            "{check} '{}' ({} rendered)",
            summary.template_name,
            summary.outputs.len()
        );
    }
    for path in &summary.outputs {
        println!("  ·  {}", path.display());
    }
}
