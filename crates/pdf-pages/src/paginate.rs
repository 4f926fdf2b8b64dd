//! Band slicing of the document raster
//!
//! The raster is placed at full page width, so its height scales to
//! `H * 210 / W` millimetres. Each output page shows the next 295 mm band.
//! Bands are cut as discrete sub-images on exact floor boundaries, which
//! partitions the raster with no gap or overlap; only the final page may
//! carry trailing blank space.

use crate::{PdfPageError, Result, PAGE_WIDTH_MM, PRINTABLE_HEIGHT_MM};
use image::RgbaImage;

/// One page's slice of the raster
#[derive(Debug)]
pub struct PageBand {
    /// Page index (0-based)
    pub index: usize,
    /// Band height when placed at full page width, in mm
    pub height_mm: f64,
    /// Cropped band pixels
    pub pixels: RgbaImage,
}

/// Height of the raster when placed at full page width, in mm
pub fn scaled_height_mm(width_px: u32, height_px: u32) -> f64 {
    height_px as f64 * PAGE_WIDTH_MM / width_px as f64
}

/// Number of A4 pages needed for the scaled raster height
pub fn page_count(scaled_height_mm: f64) -> usize {
    ((scaled_height_mm / PRINTABLE_HEIGHT_MM).ceil() as usize).max(1)
}

/// Vertical image offset of each page, in mm
///
/// Page `i` shows the band starting `i * 295` mm into the image, which is
/// equivalent to drawing the whole image at an offset of `-i * 295` mm and
/// letting the page boundary clip it.
pub fn band_offsets_mm(pages: usize) -> Vec<f64> {
    (0..pages)
        .map(|i| -(i as f64) * PRINTABLE_HEIGHT_MM)
        .collect()
}

/// Slice the raster into per-page bands
///
/// # Arguments
/// * `raster` - Full-height document raster
pub fn slice_bands(raster: &RgbaImage) -> Result<Vec<PageBand>> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(PdfPageError::EmptyRaster);
    }

    let scaled = scaled_height_mm(width, height);
    let pages = page_count(scaled);

    // Band height in source pixels; fractional, so boundaries are floored
    // per page to keep the partition exact.
    let band_px = PRINTABLE_HEIGHT_MM * width as f64 / PAGE_WIDTH_MM;

    log::debug!(
        "slicing {width}x{height} raster ({scaled:.1} mm tall) into {pages} page(s)"
    );

    let mut bands = Vec::with_capacity(pages);
    for index in 0..pages {
        let start = (index as f64 * band_px).floor() as u32;
        let end = (((index + 1) as f64 * band_px).floor() as u32).min(height);

        let band_height = end.saturating_sub(start);
        if band_height == 0 {
            continue;
        }

        let pixels = image::imageops::crop_imm(raster, 0, start, width, band_height).to_image();
        bands.push(PageBand {
            index,
            height_mm: band_height as f64 * PAGE_WIDTH_MM / width as f64,
            pixels,
        });
    }

    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_scaled_height() {
        // 500 px wide, 1000 px tall at 210 mm width -> 420 mm tall.
        assert_eq!(scaled_height_mm(500, 1000), 420.0);
    }

    #[test]
    fn test_page_count_matches_ceil() {
        assert_eq!(page_count(100.0), 1);
        assert_eq!(page_count(295.0), 1);
        assert_eq!(page_count(295.1), 2);
        assert_eq!(page_count(590.0), 2);
        assert_eq!(page_count(885.1), 4);
        // A degenerate zero-height document still yields one page.
        assert_eq!(page_count(0.0), 1);
    }

    #[test]
    fn test_band_offsets() {
        let offsets = band_offsets_mm(3);
        assert_eq!(offsets, vec![0.0, -295.0, -590.0]);
    }

    #[test]
    fn test_last_offset_plus_page_height_covers_image() {
        let scaled = scaled_height_mm(500, 1000); // 420 mm
        let pages = page_count(scaled);
        let offsets = band_offsets_mm(pages);
        let last = offsets.last().copied().unwrap();
        assert!(-last + PRINTABLE_HEIGHT_MM >= scaled);
    }

    #[test]
    fn test_slice_bands_partitions_exactly() {
        let raster = RgbaImage::from_pixel(500, 1000, Rgba([10, 20, 30, 255]));
        let bands = slice_bands(&raster).unwrap();

        // 420 mm tall -> 2 pages.
        assert_eq!(bands.len(), 2);

        let total_rows: u32 = bands.iter().map(|b| b.pixels.height()).sum();
        assert_eq!(total_rows, 1000);

        // First band is a full printable page, the second the remainder.
        let band_px = (PRINTABLE_HEIGHT_MM * 500.0 / PAGE_WIDTH_MM).floor() as u32;
        assert_eq!(bands[0].pixels.height(), band_px);
        assert_eq!(bands[1].pixels.height(), 1000 - band_px);
        assert!(bands[0].height_mm <= PRINTABLE_HEIGHT_MM);
    }

    #[test]
    fn test_slice_bands_single_page() {
        let raster = RgbaImage::from_pixel(100, 50, Rgba([0, 0, 0, 255]));
        let bands = slice_bands(&raster).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].index, 0);
        assert_eq!(bands[0].pixels.height(), 50);
    }

    #[test]
    fn test_slice_bands_rejects_empty_raster() {
        let raster = RgbaImage::new(0, 0);
        assert!(matches!(
            slice_bands(&raster).unwrap_err(),
            PdfPageError::EmptyRaster
        ));
    }

    #[test]
    fn test_band_rows_preserve_content() {
        // Rows 0..10 black, rest white: the black rows must all land in the
        // first band in order.
        let mut raster = RgbaImage::from_pixel(200, 2000, Rgba([255, 255, 255, 255]));
        for y in 0..10 {
            for x in 0..200 {
                raster.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }

        let bands = slice_bands(&raster).unwrap();
        assert!(bands.len() > 1);
        for y in 0..10 {
            assert_eq!(bands[0].pixels.get_pixel(0, y).0, [0, 0, 0, 255]);
        }
        assert_eq!(bands[0].pixels.get_pixel(0, 10).0, [255, 255, 255, 255]);
    }
}
