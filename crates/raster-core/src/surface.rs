//! Scoped off-screen render surface

use crate::doc::FormDocument;
use crate::font::FontStore;
use crate::raster::render_document;
use crate::{RasterError, Result};
use image::{Rgba, RgbaImage};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Surfaces currently alive in the process
static ACTIVE_SURFACES: AtomicUsize = AtomicUsize::new(0);

/// Number of render surfaces currently attached
///
/// Returns to zero once every pipeline invocation has released its surface,
/// on success and on failure alike.
pub fn active_surfaces() -> usize {
    ACTIVE_SURFACES.load(Ordering::SeqCst)
}

/// The captured bitmap of a rendered document
///
/// Opaque, white-backed, full document height at the surface's scale.
/// Consumed once by the paginator.
pub struct RasterImage {
    /// Pixel data
    pub pixels: RgbaImage,
    /// Scale the document was rendered at
    pub px_per_mm: f64,
}

impl RasterImage {
    pub fn width_px(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height_px(&self) -> u32 {
        self.pixels.height()
    }
}

/// An isolated off-screen rendering surface
///
/// Modeled as a scoped resource: [`RenderSurface::acquire`] attaches the
/// surface, dropping it releases it, whichever exit path runs. Each
/// invocation of the pipeline owns its own surface; overlapping invocations
/// do not share state.
#[derive(Debug)]
pub struct RenderSurface {
    pixmap: Option<RgbaImage>,
    px_per_mm: f64,
}

impl RenderSurface {
    /// Device scale used for print-sharp output (2x the CSS 96 dpi base)
    pub const DEFAULT_SCALE: f64 = 2.0;

    /// Pixels per millimetre at 1x scale
    pub const BASE_PX_PER_MM: f64 = 96.0 / 25.4;

    /// Upper bound on either raster dimension
    const MAX_DIMENSION_PX: u32 = 32_768;

    /// Acquire a surface sized for the document at the given scale
    ///
    /// The surface is filled with opaque white so that semi-transparent
    /// strokes composite against paper, never against a transparent page.
    ///
    /// # Arguments
    /// * `doc` - Document to size the surface for
    /// * `scale` - Device scale factor (see [`Self::DEFAULT_SCALE`])
    pub fn acquire(doc: &FormDocument, scale: f64) -> Result<Self> {
        let px_per_mm = scale * Self::BASE_PX_PER_MM;

        if !(doc.width_mm() > 0.0) || !(doc.height_mm() > 0.0) || !px_per_mm.is_finite() {
            return Err(RasterError::Render(
                "document has no renderable extent".to_string(),
            ));
        }

        let width_px = (doc.width_mm() * px_per_mm).round() as u32;
        let height_px = (doc.height_mm() * px_per_mm).round() as u32;

        if width_px == 0 || height_px == 0 {
            return Err(RasterError::Render(
                "document rounds to an empty raster".to_string(),
            ));
        }
        if width_px > Self::MAX_DIMENSION_PX || height_px > Self::MAX_DIMENSION_PX {
            return Err(RasterError::Render(format!(
                "raster {width_px}x{height_px} exceeds the {} px surface limit",
                Self::MAX_DIMENSION_PX
            )));
        }

        let pixmap = RgbaImage::from_pixel(width_px, height_px, Rgba([255, 255, 255, 255]));
        ACTIVE_SURFACES.fetch_add(1, Ordering::SeqCst);
        log::debug!("acquired render surface {width_px}x{height_px} px");

        Ok(Self {
            pixmap: Some(pixmap),
            px_per_mm,
        })
    }

    pub fn px_per_mm(&self) -> f64 {
        self.px_per_mm
    }

    pub fn width_px(&self) -> u32 {
        self.pixmap.as_ref().map(|p| p.width()).unwrap_or(0)
    }

    pub fn height_px(&self) -> u32 {
        self.pixmap.as_ref().map(|p| p.height()).unwrap_or(0)
    }

    /// Render the document and capture the surface as a bitmap
    ///
    /// Consumes the surface; it is released when this call returns,
    /// whether capture succeeded or not.
    pub fn capture(mut self, doc: &FormDocument, fonts: &FontStore) -> Result<RasterImage> {
        let mut pixmap = self
            .pixmap
            .take()
            .ok_or_else(|| RasterError::Capture("surface already captured".to_string()))?;

        render_document(&mut pixmap, doc, fonts, self.px_per_mm)?;

        Ok(RasterImage {
            pixels: pixmap,
            px_per_mm: self.px_per_mm,
        })
    }
}

impl Drop for RenderSurface {
    fn drop(&mut self) {
        ACTIVE_SURFACES.fetch_sub(1, Ordering::SeqCst);
        log::trace!("released render surface");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::TextRun;
    use std::sync::Mutex;

    // Counter assertions must not interleave across test threads.
    static COUNTER_LOCK: Mutex<()> = Mutex::new(());

    fn small_doc() -> FormDocument {
        let mut doc = FormDocument::new(50.0);
        doc.push_text(TextRun::new("x", 5.0, 10.0, 10.0));
        doc.set_height(40.0);
        doc
    }

    #[test]
    fn test_acquire_and_release() {
        let _guard = COUNTER_LOCK.lock().unwrap();
        let before = active_surfaces();
        {
            let surface = RenderSurface::acquire(&small_doc(), 1.0).unwrap();
            assert_eq!(active_surfaces(), before + 1);
            assert!(surface.width_px() > 0);
            assert!(surface.height_px() > 0);
        }
        assert_eq!(active_surfaces(), before);
    }

    #[test]
    fn test_acquire_rejects_empty_document() {
        let _guard = COUNTER_LOCK.lock().unwrap();
        let doc = FormDocument::new(210.0);
        let before = active_surfaces();
        let err = RenderSurface::acquire(&doc, 2.0).unwrap_err();
        assert!(matches!(err, RasterError::Render(_)));
        // Failed acquisition never counts as attached.
        assert_eq!(active_surfaces(), before);
    }

    #[test]
    fn test_acquire_rejects_oversized_document() {
        let mut doc = FormDocument::new(210.0);
        doc.set_height(1_000_000.0);
        let err = RenderSurface::acquire(&doc, 2.0).unwrap_err();
        assert!(matches!(err, RasterError::Render(_)));
    }

    #[test]
    fn test_capture_releases_surface() {
        let _guard = COUNTER_LOCK.lock().unwrap();
        let doc = small_doc();
        let before = active_surfaces();
        let surface = RenderSurface::acquire(&doc, 1.0).unwrap();
        let raster = surface.capture(&doc, &FontStore::new()).unwrap();
        assert_eq!(active_surfaces(), before);
        assert_eq!(raster.width_px(), (50.0 * RenderSurface::BASE_PX_PER_MM).round() as u32);
    }

    #[test]
    fn test_capture_background_is_opaque_white() {
        let doc = small_doc();
        let surface = RenderSurface::acquire(&doc, 1.0).unwrap();
        // No fonts registered: the text run degrades to nothing, leaving
        // untouched paper.
        let raster = surface.capture(&doc, &FontStore::new()).unwrap();
        let corner = raster.pixels.get_pixel(0, 0);
        assert_eq!(corner.0, [255, 255, 255, 255]);
    }
}
