//! # certmaker-batch
//!
//! Batch orchestration: for every roster row, render all fields onto a fresh
//! copy of the template image, persist the result as a 300 DPI PDF, and
//! optionally hand it to a mail dispatcher.
//!
//! Call [`generate`] with a loaded [`certmaker_core::Template`], an explicit
//! [`GeneratorConfig`], and an optional [`certmaker_mail::Mailer`].

pub mod error;
pub mod generator;
pub mod output;
pub mod pdf;

pub use error::BatchError;
pub use generator::{generate, BatchSummary, GeneratorConfig};
pub use output::{filename_collisions, mirror_certificates_dir, sanitize_filename};
