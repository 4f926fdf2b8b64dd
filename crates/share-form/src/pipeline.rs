//! End-to-end generation pipeline
//!
//! Single-shot composition of the three stages: synthesize the form,
//! rasterize it on an off-screen surface, slice and package the raster as a
//! multi-page A4 PDF. There are no retries and no partial artifacts: the
//! serialized bytes exist only after every stage has succeeded, and the
//! render surface is released on every exit path.

use crate::record::ApplicationRecord;
use crate::synth::synthesize;
use crate::Result;
use pdf_pages::{assemble, download_filename, slice_bands};
use raster_core::{FontStore, RenderSurface};
use std::path::{Path, PathBuf};

/// A generated, ready-to-save PDF
pub struct PdfArtifact {
    /// Download filename derived from the applicant's name
    pub filename: String,
    /// Serialized PDF
    pub bytes: Vec<u8>,
    /// Number of A4 pages
    pub pages: usize,
}

/// Generate the share-application PDF for a record
///
/// # Arguments
/// * `record` - Application data; every field optional
/// * `fonts` - Faces for text rendering; an empty store degrades to a
///   text-free form rather than failing
pub fn generate(record: &ApplicationRecord, fonts: &FontStore) -> Result<PdfArtifact> {
    if fonts.is_empty() {
        log::warn!("no fonts registered; text will be missing from the rendered form");
    }

    let doc = synthesize(record);

    let surface = RenderSurface::acquire(&doc, RenderSurface::DEFAULT_SCALE)?;
    let raster = surface.capture(&doc, fonts)?;

    let bands = slice_bands(&raster.pixels)?;
    let mut pdf = assemble(&bands)?;
    let bytes = pdf.to_bytes()?;

    let filename = download_filename(record.personal_details.full_name.as_deref());
    log::info!(
        "generated {filename}: {} page(s), {} bytes",
        pdf.page_count(),
        bytes.len()
    );

    Ok(PdfArtifact {
        filename,
        bytes,
        pages: pdf.page_count(),
    })
}

/// Generate and save the PDF into a directory
///
/// The write happens only after generation has fully succeeded, so a failed
/// pipeline never leaves a partial file behind.
///
/// # Returns
/// Path of the written file
pub fn generate_and_save(
    record: &ApplicationRecord,
    fonts: &FontStore,
    dir: &Path,
) -> Result<PathBuf> {
    let artifact = generate(record, fonts)?;
    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes)?;
    log::info!("saved {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sparse_record() {
        let artifact = generate(&ApplicationRecord::default(), &FontStore::new()).unwrap();
        assert!(artifact.pages >= 1);
        assert!(artifact.bytes.starts_with(b"%PDF"));
        assert_eq!(artifact.filename, "share-application-form.pdf");
    }

    #[test]
    fn test_generate_uses_applicant_name_in_filename() {
        let mut record = ApplicationRecord::default();
        record.personal_details.full_name = Some("Ram Bahadur Thapa".to_string());
        let artifact = generate(&record, &FontStore::new()).unwrap();
        assert_eq!(artifact.filename, "share-application-Ram_Bahadur_Thapa.pdf");
    }
}
