//! Image XObject encoding for page bands

use crate::Result;
use image::RgbaImage;
use lopdf::{Dictionary, Stream};
use std::io::Write;

/// A page band encoded for PDF embedding
///
/// Bands are stored as FlateDecode-compressed 8-bit RGB. The raster is
/// opaque by construction, but any alpha present is still blended against
/// white so the page never shows compositing artifacts.
#[derive(Debug, Clone)]
pub struct BandXObject {
    /// Band width in pixels
    pub width: u32,
    /// Band height in pixels
    pub height: u32,
    /// Compressed RGB data
    pub data: Vec<u8>,
}

impl BandXObject {
    /// Encode a band's pixels
    pub fn from_rgba(pixels: &RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for pixel in pixels.pixels() {
            let alpha = pixel.0[3] as f32 / 255.0;
            for channel in 0..3 {
                rgb.push((pixel.0[channel] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
            }
        }

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&rgb)?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert to a lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();

        dict.set("Type", lopdf::Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", lopdf::Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set("ColorSpace", lopdf::Object::Name(b"DeviceRGB".to_vec()));
        dict.set("BitsPerComponent", 8i64);
        dict.set("Filter", lopdf::Object::Name(b"FlateDecode".to_vec()));
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

/// Generate operators to draw a band at a page position
///
/// # Arguments
/// * `resource_name` - Image resource name (e.g., "Im1")
/// * `x` - X coordinate in points
/// * `y` - Y coordinate in points (from bottom, PDF coordinates)
/// * `width` - Band width in points
/// * `height` - Band height in points
pub fn band_placement_operators(
    resource_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    // q                        - Save graphics state
    // width 0 0 height x y cm - Concatenate transformation matrix
    // /Im1 Do                  - Draw image
    // Q                        - Restore graphics state
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{resource_name} Do\nQ\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_band_xobject_dimensions_and_dict() {
        let pixels = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let band = BandXObject::from_rgba(&pixels).unwrap();

        assert_eq!(band.width, 4);
        assert_eq!(band.height, 2);
        assert!(!band.data.is_empty());

        let stream = band.to_pdf_stream();
        let dict = stream.dict;
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Image");
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 4);
        assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 2);
        assert_eq!(
            dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
            b"DeviceRGB"
        );
        assert_eq!(
            dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"FlateDecode"
        );
    }

    #[test]
    fn test_band_xobject_blends_alpha_to_white() {
        // Fully transparent pixels must encode as white paper.
        let pixels = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        let band = BandXObject::from_rgba(&pixels).unwrap();

        let mut decoder = flate2::read::ZlibDecoder::new(band.data.as_slice());
        let mut rgb = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut rgb).unwrap();
        assert_eq!(rgb, vec![255, 255, 255]);
    }

    #[test]
    fn test_band_placement_operators() {
        let ops = band_placement_operators("Im1", 0.0, 100.0, 595.28, 700.0);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("q"));
        assert!(ops_str.contains("595.28 0 0 700 0 100 cm"));
        assert!(ops_str.contains("/Im1 Do"));
        assert!(ops_str.contains("Q"));
    }
}
