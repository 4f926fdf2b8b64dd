//! PDF Pages - A4 pagination and packaging
//!
//! This crate provides the final stage of the form pipeline:
//! - Slicing a tall raster into successive A4-sized bands
//! - Embedding each band as a compressed image XObject
//! - Assembling the bands into a multi-page A4 PDF
//! - Deriving the download filename from the applicant's name
//!
//! # Example
//!
//! ```ignore
//! use pdf_pages::{assemble, download_filename, slice_bands};
//!
//! let bands = slice_bands(&raster)?;
//! let mut pdf = assemble(&bands)?;
//! pdf.save(download_filename(Some("Ram Bahadur Thapa")))?;
//! ```

mod document;
mod paginate;
mod xobject;

pub use document::{assemble, PaginatedPdf};
pub use paginate::{band_offsets_mm, page_count, scaled_height_mm, slice_bands, PageBand};
pub use xobject::{band_placement_operators, BandXObject};

use thiserror::Error;

/// Output page width (A4) in millimetres
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// Output page height (A4) in millimetres
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Printable band height per page in millimetres
///
/// A4 height minus a small margin reserved for printer trimming; each page
/// shows the next band of this height.
pub const PRINTABLE_HEIGHT_MM: f64 = 295.0;

/// A4 page width in points
pub const A4_WIDTH_PT: f64 = 595.28;

/// A4 page height in points
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Points per millimetre
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Errors that can occur during pagination and packaging
#[derive(Debug, Error)]
pub enum PdfPageError {
    #[error("Raster image is empty")]
    EmptyRaster,

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PdfPageError>;

/// Derive the download filename from the applicant's full name
///
/// Whitespace runs become single underscores; a missing or blank name falls
/// back to the generic form name.
///
/// # Examples
/// ```
/// use pdf_pages::download_filename;
/// assert_eq!(
///     download_filename(Some("Ram Bahadur Thapa")),
///     "share-application-Ram_Bahadur_Thapa.pdf"
/// );
/// assert_eq!(download_filename(None), "share-application-form.pdf");
/// ```
pub fn download_filename(applicant_name: Option<&str>) -> String {
    match applicant_name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => {
            let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
            format!("share-application-{joined}.pdf")
        }
        None => "share-application-form.pdf".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_download_filename_with_name() {
        assert_eq!(
            download_filename(Some("Ram Bahadur Thapa")),
            "share-application-Ram_Bahadur_Thapa.pdf"
        );
    }

    #[test]
    fn test_download_filename_collapses_whitespace() {
        assert_eq!(
            download_filename(Some("  Sita   Devi ")),
            "share-application-Sita_Devi.pdf"
        );
    }

    #[test]
    fn test_download_filename_fallback() {
        assert_eq!(download_filename(None), "share-application-form.pdf");
        assert_eq!(download_filename(Some("")), "share-application-form.pdf");
        assert_eq!(download_filename(Some("   ")), "share-application-form.pdf");
    }

    #[test]
    fn test_page_constants() {
        assert!(PRINTABLE_HEIGHT_MM < PAGE_HEIGHT_MM);
        assert!((PAGE_WIDTH_MM * PT_PER_MM - A4_WIDTH_PT).abs() < 0.01);
        assert!((PAGE_HEIGHT_MM * PT_PER_MM - A4_HEIGHT_PT).abs() < 0.01);
    }
}
