//! WASM bindings for sharepatra
//!
//! This crate provides the browser-facing API for:
//! - Loading TrueType fonts (Devanagari and Latin faces)
//! - Generating the share-application PDF from a form record
//! - Triggering the client-side download of the result
//! - Nepali formatting helpers for the surrounding UI
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { FormGenerator } from 'sharepatra-wasm';
//!
//! await init();
//!
//! const generator = new FormGenerator();
//! generator.loadFont('mukta', devanagariFontBytes);
//! generator.loadBoldFont('mukta-bold', devanagariBoldBytes);
//!
//! // Fire-and-forget: success shows the browser's save prompt,
//! // failure shows a single alert.
//! generator.generateShareApplication(applicationRecord);
//! ```

use raster_core::{FontStore, FontWeight};
use share_form::{ApplicationRecord, PdfArtifact};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Share-application PDF generator
#[wasm_bindgen]
pub struct FormGenerator {
    fonts: FontStore,
}

#[wasm_bindgen]
impl FormGenerator {
    /// Create a generator with no fonts loaded
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormGenerator {
        FormGenerator {
            fonts: FontStore::new(),
        }
    }

    /// Load a regular-weight font
    ///
    /// Faces are consulted in load order; register the Devanagari face
    /// first and a Latin fallback after it.
    ///
    /// @param name - Face identifier
    /// @param data - TTF file bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadFont)]
    pub fn load_font(&mut self, name: &str, data: &[u8]) -> Result<(), JsValue> {
        self.fonts
            .register(name, data.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load a bold-weight font
    ///
    /// @param name - Face identifier
    /// @param data - TTF file bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadBoldFont)]
    pub fn load_bold_font(&mut self, name: &str, data: &[u8]) -> Result<(), JsValue> {
        self.fonts
            .register_weighted(name, FontWeight::Bold, data.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Generate the PDF and trigger a client-side download
    ///
    /// Fire-and-forget: success manifests as the browser's save prompt,
    /// failure as a single generic alert (details go to the console). The
    /// pipeline is single-shot; there is no retry.
    ///
    /// @param record - Application record object
    #[wasm_bindgen(js_name = generateShareApplication)]
    pub fn generate_share_application(&self, record: JsValue) {
        if let Err(error) = self.try_generate(record) {
            web_sys::console::error_2(&JsValue::from_str("share application PDF failed:"), &error);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(
                    "फारम तयार गर्न सकिएन। कृपया फेरि प्रयास गर्नुहोस्। \
                     (Could not generate the form. Please try again.)",
                );
            }
        }
    }

    fn try_generate(&self, record: JsValue) -> Result<(), JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("not running in a browser context"))?;

        let record: ApplicationRecord = serde_wasm_bindgen::from_value(record)?;

        let artifact = share_form::generate(&record, &self.fonts)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        trigger_download(&window, &artifact)
    }
}

impl Default for FormGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Offer the generated PDF through the browser's save mechanism
fn trigger_download(window: &web_sys::Window, artifact: &PdfArtifact) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(artifact.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Nepali formatting helpers exposed to the UI
#[wasm_bindgen]
pub struct NepaliFormat;

#[wasm_bindgen]
impl NepaliFormat {
    /// Format a number as Nepali words
    ///
    /// @param n - Number to format
    /// @returns Nepali text (e.g., "बयालीस")
    #[wasm_bindgen(js_name = numberInWords)]
    pub fn number_in_words(n: i64) -> String {
        nepali_text::format_nepali_number(n)
    }

    /// Format an amount as Nepali rupee words
    ///
    /// @param amount - Amount in rupees
    /// @returns Nepali text (e.g., "एक सय रुपैयाँ मात्र")
    #[wasm_bindgen(js_name = rupeesInWords)]
    pub fn rupees_in_words(amount: f64) -> String {
        nepali_text::format_nepali_rupees(amount)
    }

    /// Format an ISO date as DD/MM/YYYY (empty when absent/invalid)
    ///
    /// @param iso - ISO date string
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(iso: &str) -> String {
        nepali_text::format_date_dmy(iso)
    }

    /// Render digits in Devanagari script
    ///
    /// @param text - Text whose ASCII digits should be converted
    #[wasm_bindgen(js_name = devanagariDigits)]
    pub fn devanagari_digits(text: &str) -> String {
        nepali_text::to_devanagari_digits(text)
    }

    /// Convert a Gregorian year to the Bikram Sambat year
    ///
    /// @param year - Gregorian year
    #[wasm_bindgen(js_name = bikramSambatYear)]
    pub fn bikram_sambat_year(year: i32) -> i32 {
        nepali_text::bikram_sambat_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_nepali_format() {
        assert_eq!(NepaliFormat::number_in_words(42), "बयालीस");
        assert_eq!(NepaliFormat::format_date("2025-01-15"), "15/01/2025");
    }

    #[wasm_bindgen_test]
    fn test_generator_starts_empty() {
        let generator = FormGenerator::new();
        assert!(generator.fonts.is_empty());
    }
}
