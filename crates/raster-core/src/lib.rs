//! Raster Core - Off-screen document rasterization
//!
//! This crate provides the rendering stage of the form pipeline:
//! - A primitive document model on a millimetre canvas (text runs, rules,
//!   frames, checkboxes, image placements)
//! - TrueType font loading with Devanagari/Latin glyph fallback
//! - An isolated, scoped render surface with guaranteed release
//! - Rasterization of a whole document into a single opaque bitmap
//!
//! # Example
//!
//! ```ignore
//! use raster_core::{FontStore, FormDocument, RenderSurface, TextRun};
//!
//! let mut fonts = FontStore::new();
//! fonts.register("mukta", std::fs::read("Mukta-Regular.ttf")?)?;
//!
//! let mut doc = FormDocument::new(210.0);
//! doc.push_text(TextRun::new("निवेदन", 105.0, 20.0, 14.0));
//! doc.set_height(297.0);
//!
//! let surface = RenderSurface::acquire(&doc, RenderSurface::DEFAULT_SCALE)?;
//! let raster = surface.capture(&doc, &fonts)?;
//! ```

mod doc;
mod font;
mod raster;
mod surface;
mod wrap;

pub use doc::{Align, FormDocument, FrameStyle, ImagePlacement, Primitive, TextRun};
pub use font::{FontStore, FontWeight};
pub use surface::{active_surfaces, RasterImage, RenderSurface};
pub use wrap::simple_word_wrap;

use thiserror::Error;

/// Millimetres per PostScript point
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Errors that can occur while rendering a document
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Failed to create render surface: {0}")]
    Render(String),

    #[error("Failed to capture rendered document: {0}")]
    Capture(String),

    #[error("Failed to parse font: {0}")]
    FontParse(String),
}

/// Result type for raster operations
pub type Result<T> = std::result::Result<T, RasterError>;
