//! Share Form - bilingual share-application form synthesis and PDF pipeline
//!
//! This crate provides:
//! - The typed [`ApplicationRecord`] (every leaf optional)
//! - A declarative field schema mirroring the paper form's rows and
//!   checkbox groups
//! - The document synthesizer building a printable [`raster_core::FormDocument`]
//! - The end-to-end pipeline: synthesize, rasterize off-screen, paginate
//!   into an A4 PDF, derive the download filename
//!
//! # Example
//!
//! ```ignore
//! use share_form::{generate, ApplicationRecord, FontStore};
//!
//! let mut fonts = FontStore::new();
//! fonts.register("mukta", std::fs::read("Mukta-Regular.ttf")?)?;
//!
//! let record: ApplicationRecord = serde_json::from_str(payload)?;
//! let artifact = generate(&record, &fonts)?;
//! std::fs::write(&artifact.filename, &artifact.bytes)?;
//! ```

mod fields;
mod pipeline;
mod record;
mod synth;

pub use fields::{
    match_choice, ChoiceOption, ChoiceSelection, Field, GENDER_OPTIONS, MARITAL_OPTIONS,
    OCCUPATION_OPTIONS,
};
pub use pipeline::{generate, generate_and_save, PdfArtifact};
pub use record::{
    parse_record, Address, ApplicationRecord, FamilyDetails, Identification, Nominee, Occupation,
    PersonalDetails, ShareDetails,
};
pub use synth::synthesize;

// Re-exported so callers can set up rendering without depending on the
// engine crate directly.
pub use raster_core::{FontStore, FontWeight};

use thiserror::Error;

/// Errors that can occur while generating a form PDF
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Render error: {0}")]
    Raster(#[from] raster_core::RasterError),

    #[error("Packaging error: {0}")]
    Pages(#[from] pdf_pages::PdfPageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;
