//! Multi-page PDF assembly

use crate::paginate::PageBand;
use crate::xobject::{band_placement_operators, BandXObject};
use crate::{PdfPageError, Result, A4_HEIGHT_PT, A4_WIDTH_PT, PT_PER_MM};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::path::Path;

/// An assembled multi-page A4 document
///
/// Held in memory only long enough to serialize; the caller immediately
/// saves it and drops it.
#[derive(Debug)]
pub struct PaginatedPdf {
    inner: Document,
    page_count: usize,
}

/// Assemble page bands into an A4 PDF
///
/// Each band is embedded once as an image XObject and drawn top-aligned on
/// its own page, so page `i` shows exactly the `i`-th band of the raster.
pub fn assemble(bands: &[PageBand]) -> Result<PaginatedPdf> {
    if bands.is_empty() {
        return Err(PdfPageError::EmptyRaster);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(bands.len());
    for band in bands {
        let xobject = BandXObject::from_rgba(&band.pixels)?;
        let image_id = doc.add_object(xobject.to_pdf_stream());

        let height_pt = band.height_mm * PT_PER_MM;
        let y_pt = A4_HEIGHT_PT - height_pt;
        let operators = band_placement_operators("Im1", 0.0, y_pt, A4_WIDTH_PT, height_pt);
        let contents_id = doc.add_object(Stream::new(Dictionary::new(), operators));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH_PT.into(), A4_HEIGHT_PT.into()],
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    "Im1" => image_id,
                },
            },
            "Contents" => contents_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => page_count as i64,
            "Kids" => kids,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    log::debug!("assembled {page_count}-page PDF");

    Ok(PaginatedPdf {
        inner: doc,
        page_count,
    })
}

impl PaginatedPdf {
    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Serialize the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfPageError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Save the document to a file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.inner
            .save(path)
            .map_err(|e| PdfPageError::SaveError(e.to_string()))?;
        Ok(())
    }
}
