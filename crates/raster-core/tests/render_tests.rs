//! Integration tests for raster-core
//!
//! These exercise the full acquire -> capture -> release cycle without any
//! registered fonts; structural primitives must still produce ink.

use image::{Rgba, RgbaImage};
use raster_core::{
    active_surfaces, FontStore, FormDocument, FrameStyle, ImagePlacement, RenderSurface, TextRun,
};
use std::sync::Mutex;

// Counter assertions must not interleave across test threads.
static COUNTER_LOCK: Mutex<()> = Mutex::new(());

fn structural_document() -> FormDocument {
    let mut doc = FormDocument::new(100.0);
    doc.push_frame(5.0, 5.0, 90.0, 40.0, FrameStyle::default());
    doc.push_rule(5.0, 25.0, 95.0, 25.0, 0.2);
    doc.push_checkbox(10.0, 30.0, 4.0, true);
    doc.push_text(TextRun::new("unrendered without fonts", 10.0, 20.0, 10.0));
    doc.push_image(ImagePlacement {
        x_mm: 70.0,
        y_mm: 30.0,
        width_mm: 10.0,
        height_mm: 10.0,
        pixels: RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])),
    });
    doc.set_height(60.0);
    doc
}

#[test]
fn test_capture_produces_ink_and_correct_dimensions() {
    let doc = structural_document();
    let surface = RenderSurface::acquire(&doc, 1.0).unwrap();
    let px_per_mm = surface.px_per_mm();

    let raster = surface.capture(&doc, &FontStore::new()).unwrap();

    assert_eq!(raster.width_px(), (100.0 * px_per_mm).round() as u32);
    assert_eq!(raster.height_px(), (60.0 * px_per_mm).round() as u32);

    let dark = raster.pixels.pixels().filter(|p| p.0[0] < 128).count();
    assert!(dark > 0, "frame, rule, checkbox and image should leave ink");

    // Every pixel stays opaque; the PDF stage assumes no alpha channel.
    assert!(raster.pixels.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_surface_released_after_capture_failure() {
    let _guard = COUNTER_LOCK.lock().unwrap();
    let mut doc = FormDocument::new(50.0);
    doc.push_image(ImagePlacement {
        x_mm: 0.0,
        y_mm: 0.0,
        width_mm: 10.0,
        height_mm: 10.0,
        pixels: RgbaImage::new(0, 0),
    });
    doc.set_height(30.0);

    let before = active_surfaces();
    let surface = RenderSurface::acquire(&doc, 1.0).unwrap();
    assert_eq!(active_surfaces(), before + 1);

    let result = surface.capture(&doc, &FontStore::new());
    assert!(result.is_err());
    assert_eq!(active_surfaces(), before);
}

#[test]
fn test_overlapping_surfaces_are_independent() {
    let _guard = COUNTER_LOCK.lock().unwrap();
    let doc = structural_document();
    let before = active_surfaces();

    let first = RenderSurface::acquire(&doc, 1.0).unwrap();
    let second = RenderSurface::acquire(&doc, 1.0).unwrap();
    assert_eq!(active_surfaces(), before + 2);

    let raster = first.capture(&doc, &FontStore::new()).unwrap();
    assert_eq!(active_surfaces(), before + 1);
    assert!(raster.width_px() > 0);

    drop(second);
    assert_eq!(active_surfaces(), before);
}
