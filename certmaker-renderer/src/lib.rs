//! # certmaker-renderer
//!
//! The certificate field renderer: positional formatting, word-wrap, band
//! padding, and centered glyph placement onto a template image.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certmaker_renderer::{open_base_image, render_field, FontLibrary};
//! use certmaker_core::Template;
//!
//! fn render_first_row(template: &Template) -> Result<(), certmaker_renderer::RenderError> {
//!     let base = open_base_image(&template.base_image)?;
//!     let mut fonts = FontLibrary::new("resources");
//!     let mut cert = base.clone();
//!     for field in &template.meta.fields {
//!         render_field(&mut cert, &template.roster.rows()[0], field, &mut fonts)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod draw;
pub mod error;
pub mod field;
pub mod fonts;
pub mod layout;

pub use error::RenderError;
pub use field::{open_base_image, render_field};
pub use fonts::FontLibrary;
