//! Rasterization of document primitives

use crate::doc::{Align, FormDocument, FrameStyle, ImagePlacement, Primitive, TextRun};
use crate::font::{FontStore, FontWeight};
use crate::{RasterError, Result};
use ab_glyph::{point, Font, OutlinedGlyph, ScaleFont};
use image::RgbaImage;

/// Render every primitive of the document into the pixmap
pub(crate) fn render_document(
    pixmap: &mut RgbaImage,
    doc: &FormDocument,
    fonts: &FontStore,
    px_per_mm: f64,
) -> Result<()> {
    for primitive in doc.primitives() {
        match primitive {
            Primitive::Text(run) => draw_text(pixmap, fonts, run, px_per_mm)?,
            Primitive::Rule {
                x1_mm,
                y1_mm,
                x2_mm,
                y2_mm,
                width_mm,
            } => {
                ensure_finite(&[*x1_mm, *y1_mm, *x2_mm, *y2_mm, *width_mm])?;
                draw_segment(
                    pixmap,
                    *x1_mm * px_per_mm,
                    *y1_mm * px_per_mm,
                    *x2_mm * px_per_mm,
                    *y2_mm * px_per_mm,
                    (*width_mm * px_per_mm).max(1.0),
                );
            }
            Primitive::Frame {
                x_mm,
                y_mm,
                width_mm,
                height_mm,
                style,
            } => {
                ensure_finite(&[*x_mm, *y_mm, *width_mm, *height_mm])?;
                draw_frame(
                    pixmap,
                    *x_mm * px_per_mm,
                    *y_mm * px_per_mm,
                    *width_mm * px_per_mm,
                    *height_mm * px_per_mm,
                    style,
                    px_per_mm,
                );
            }
            Primitive::Checkbox {
                x_mm,
                y_mm,
                size_mm,
                checked,
            } => {
                ensure_finite(&[*x_mm, *y_mm, *size_mm])?;
                draw_checkbox(
                    pixmap,
                    *x_mm * px_per_mm,
                    *y_mm * px_per_mm,
                    *size_mm * px_per_mm,
                    *checked,
                    px_per_mm,
                );
            }
            Primitive::Image(placement) => draw_image(pixmap, placement, px_per_mm)?,
        }
    }

    Ok(())
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RasterError::Capture(
            "primitive has a non-finite coordinate".to_string(),
        ))
    }
}

/// Measure a text run's width in pixels
///
/// Walks the same per-character face selection as drawing, so alignment
/// offsets match what ends up on the surface. Characters no face covers
/// contribute no advance.
fn text_width_px(fonts: &FontStore, text: &str, size_pt: f32, weight: FontWeight, px_per_mm: f64) -> f32 {
    let mut width = 0.0f32;
    for c in text.chars() {
        if let Some(face) = fonts.face_for_char(c, weight) {
            let scale = face.px_scale(size_pt, px_per_mm);
            let gid = face.font().glyph_id(c);
            width += face.font().as_scaled(scale).h_advance(gid);
        }
    }
    width
}

fn draw_text(pixmap: &mut RgbaImage, fonts: &FontStore, run: &TextRun, px_per_mm: f64) -> Result<()> {
    if run.text.is_empty() {
        return Ok(());
    }
    ensure_finite(&[run.x_mm, run.y_mm, run.size_pt as f64])?;

    let total_width = text_width_px(fonts, &run.text, run.size_pt, run.weight, px_per_mm);
    let anchor = (run.x_mm * px_per_mm) as f32;
    let baseline = (run.y_mm * px_per_mm) as f32;

    let mut x = match run.align {
        Align::Left => anchor,
        Align::Center => anchor - total_width / 2.0,
        Align::Right => anchor - total_width,
    };

    for c in run.text.chars() {
        let Some(face) = fonts.face_for_char(c, run.weight) else {
            continue;
        };

        let scale = face.px_scale(run.size_pt, px_per_mm);
        let scaled = face.font().as_scaled(scale);
        let gid = face.font().glyph_id(c);

        let glyph = gid.with_scale_and_position(scale, point(x, baseline));
        if let Some(outlined) = face.font().outline_glyph(glyph) {
            blend_glyph(pixmap, &outlined);
        }

        // Synthetic emboldening when no true bold face covers the glyph
        if run.weight == FontWeight::Bold && face.weight != FontWeight::Bold {
            let shifted = gid.with_scale_and_position(scale, point(x + 0.4, baseline));
            if let Some(outlined) = face.font().outline_glyph(shifted) {
                blend_glyph(pixmap, &outlined);
            }
        }

        x += scaled.h_advance(gid);
    }

    Ok(())
}

/// Composite a glyph's coverage onto the pixmap as black ink
fn blend_glyph(pixmap: &mut RgbaImage, outlined: &OutlinedGlyph) {
    let bounds = outlined.px_bounds();
    let (width, height) = pixmap.dimensions();

    outlined.draw(|gx, gy, coverage| {
        let px = bounds.min.x as i64 + gx as i64;
        let py = bounds.min.y as i64 + gy as i64;
        if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
            return;
        }

        let coverage = coverage.clamp(0.0, 1.0);
        let pixel = pixmap.get_pixel_mut(px as u32, py as u32);
        for channel in &mut pixel.0[..3] {
            *channel = (*channel as f32 * (1.0 - coverage)) as u8;
        }
    });
}

/// Fill an axis-aligned rectangle with solid color
fn fill_rect(pixmap: &mut RgbaImage, x0: f64, y0: f64, x1: f64, y1: f64, rgb: [u8; 3]) {
    let (width, height) = pixmap.dimensions();
    let x_start = x0.floor().max(0.0) as u32;
    let y_start = y0.floor().max(0.0) as u32;
    let x_end = (x1.ceil().min(width as f64) as u32).min(width);
    let y_end = (y1.ceil().min(height as f64) as u32).min(height);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let pixel = pixmap.get_pixel_mut(x, y);
            pixel.0[0] = rgb[0];
            pixel.0[1] = rgb[1];
            pixel.0[2] = rgb[2];
            pixel.0[3] = 255;
        }
    }
}

/// Draw a straight segment of the given thickness
fn draw_segment(pixmap: &mut RgbaImage, x1: f64, y1: f64, x2: f64, y2: f64, width_px: f64) {
    let length = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
    let steps = (length / 0.5).ceil().max(1.0) as u32;
    let half = width_px / 2.0;

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let cx = x1 + (x2 - x1) * t;
        let cy = y1 + (y2 - y1) * t;
        fill_rect(pixmap, cx - half, cy - half, cx + half, cy + half, [0, 0, 0]);
    }
}

fn draw_frame(
    pixmap: &mut RgbaImage,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    style: &FrameStyle,
    px_per_mm: f64,
) {
    if let Some(fill) = style.fill {
        fill_rect(pixmap, x, y, x + w, y + h, fill);
    }

    if style.stroke_mm > 0.0 {
        let stroke = (style.stroke_mm * px_per_mm).max(1.0);
        fill_rect(pixmap, x, y, x + w, y + stroke, [0, 0, 0]);
        fill_rect(pixmap, x, y + h - stroke, x + w, y + h, [0, 0, 0]);
        fill_rect(pixmap, x, y, x + stroke, y + h, [0, 0, 0]);
        fill_rect(pixmap, x + w - stroke, y, x + w, y + h, [0, 0, 0]);
    }
}

fn draw_checkbox(pixmap: &mut RgbaImage, x: f64, y: f64, size: f64, checked: bool, px_per_mm: f64) {
    let style = FrameStyle {
        stroke_mm: 0.25,
        fill: None,
    };
    draw_frame(pixmap, x, y, size, size, &style, px_per_mm);

    if checked {
        let tick = (0.3 * px_per_mm).max(1.0);
        draw_segment(
            pixmap,
            x + 0.20 * size,
            y + 0.55 * size,
            x + 0.42 * size,
            y + 0.78 * size,
            tick,
        );
        draw_segment(
            pixmap,
            x + 0.42 * size,
            y + 0.78 * size,
            x + 0.82 * size,
            y + 0.22 * size,
            tick,
        );
    }
}

/// Stretch-blit a source bitmap into its target box
fn draw_image(pixmap: &mut RgbaImage, placement: &ImagePlacement, px_per_mm: f64) -> Result<()> {
    ensure_finite(&[
        placement.x_mm,
        placement.y_mm,
        placement.width_mm,
        placement.height_mm,
    ])?;

    let (src_w, src_h) = placement.pixels.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(RasterError::Capture(
            "image placement has no pixels".to_string(),
        ));
    }

    let (width, height) = pixmap.dimensions();
    let x0 = (placement.x_mm * px_per_mm).round() as i64;
    let y0 = (placement.y_mm * px_per_mm).round() as i64;
    let dst_w = (placement.width_mm * px_per_mm).round().max(0.0) as i64;
    let dst_h = (placement.height_mm * px_per_mm).round().max(0.0) as i64;
    if dst_w == 0 || dst_h == 0 {
        return Ok(());
    }

    for dy in 0..dst_h {
        let py = y0 + dy;
        if py < 0 || py >= height as i64 {
            continue;
        }
        let sy = (dy * src_h as i64 / dst_h).min(src_h as i64 - 1) as u32;

        for dx in 0..dst_w {
            let px = x0 + dx;
            if px < 0 || px >= width as i64 {
                continue;
            }
            let sx = (dx * src_w as i64 / dst_w).min(src_w as i64 - 1) as u32;

            let src = placement.pixels.get_pixel(sx, sy);
            let alpha = src.0[3] as f32 / 255.0;
            let dst = pixmap.get_pixel_mut(px as u32, py as u32);
            for channel in 0..3 {
                dst.0[channel] = (src.0[channel] as f32 * alpha
                    + dst.0[channel] as f32 * (1.0 - alpha)) as u8;
            }
        }
    }

    Ok(())
}
