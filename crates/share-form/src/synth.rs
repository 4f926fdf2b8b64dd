//! Document synthesis
//!
//! Builds the printable bilingual share-application form as a
//! [`FormDocument`]: a fixed visual replica of the paper form with every
//! record value (or a blank cell) substituted in. Synthesis is pure layout;
//! it never fails on missing input, and the grid it produces is identical
//! for an empty record and a fully populated one.

use crate::fields::{
    address_fields, family_rows, identification_fields, match_choice, nominee_fields,
    occupation_row, personal_fields, share_fields, ChoiceOption, ChoiceSelection, Field,
    GENDER_OPTIONS, MARITAL_OPTIONS, OCCUPATION_OPTIONS,
};
use crate::record::ApplicationRecord;
use nepali_text::{format_date_dmy, format_nepali_number, to_devanagari_digits};
use pdf_pages::PAGE_WIDTH_MM;
use raster_core::{simple_word_wrap, Align, FormDocument, FrameStyle, ImagePlacement, TextRun};

/// Registered company letterhead
const COMPANY_NAME_NP: &str = "भूमि बैंक नेपाल लिमिटेड";
const COMPANY_ADDRESS_NP: &str = "कमलादी, काठमाडौं, नेपाल";
const COMPANY_REG_NO: &str = "45678/078/79";

/// Fixed payment reference encoded into the header QR
const PAYMENT_REFERENCE: &str =
    "SHAREPATRA:BHUMI-BANK-NEPAL:AC=0570010012345678:BANK=NBL:PURPOSE=SHARE-PURCHASE";

const MARGIN_LEFT: f64 = 15.0;
const MARGIN_RIGHT: f64 = 195.0;
const ROW_HEIGHT: f64 = 7.0;
const VALUE_X: f64 = 78.0;

const TITLE_SIZE: f32 = 14.0;
const SECTION_SIZE: f32 = 10.5;
const BODY_SIZE: f32 = 9.0;
const SMALL_SIZE: f32 = 8.0;

/// Synthesize the complete form for a record
///
/// The record is not validated; partial and entirely-empty records are
/// valid and produce a form with blank cells.
pub fn synthesize(record: &ApplicationRecord) -> FormDocument {
    let mut builder = FormBuilder::new();

    builder.header(record);

    builder.section_header("१. व्यक्तिगत विवरण (Personal Details)");
    for field in personal_fields(record) {
        builder.field_row(&field);
    }
    builder.choice_row(
        "लिङ्ग (Gender)",
        GENDER_OPTIONS,
        match_choice(record.personal_details.gender.as_deref(), GENDER_OPTIONS),
    );
    builder.choice_row(
        "वैवाहिक स्थिति (Marital Status)",
        MARITAL_OPTIONS,
        match_choice(
            record.personal_details.marital_status.as_deref(),
            MARITAL_OPTIONS,
        ),
    );

    builder.section_header("२. शेयर विवरण (Share Details)");
    for field in share_fields(record) {
        builder.field_row(&field);
    }

    builder.section_header("३. परिचय विवरण (Identification)");
    for field in identification_fields(record) {
        builder.field_row(&field);
    }

    builder.section_header("४. पारिवारिक विवरण (Family Details)");
    builder.family_table(record);

    builder.section_header("५. ठेगाना (Address)");
    builder.address_columns(record);

    builder.section_header("६. पेशागत विवरण (Occupation)");
    builder.choice_row(
        "पेशा (Occupation Type)",
        OCCUPATION_OPTIONS,
        match_choice(record.occupation.occupation_type.as_deref(), OCCUPATION_OPTIONS),
    );
    builder.occupation_table(record);

    builder.section_header("७. इच्छाएको व्यक्ति (Nominee)");
    for field in nominee_fields(record) {
        builder.field_row(&field);
    }

    builder.section_header("८. घोषणा (Declaration)");
    builder.declaration(record);

    builder.cover_letter(record);

    builder.finish()
}

/// Incremental form layout with a vertical cursor
struct FormBuilder {
    doc: FormDocument,
    y: f64,
}

impl FormBuilder {
    fn new() -> Self {
        Self {
            doc: FormDocument::new(PAGE_WIDTH_MM),
            y: 12.0,
        }
    }

    fn finish(mut self) -> FormDocument {
        self.doc.set_height(self.y + 12.0);
        self.doc
    }

    fn gap(&mut self, mm: f64) {
        self.y += mm;
    }

    /// Rough text width for static layout decisions
    ///
    /// Only used to place fixed labels (checkbox options, captions); record
    /// values never influence the grid.
    fn approx_width_mm(text: &str, size_pt: f32) -> f64 {
        text.chars().count() as f64 * size_pt as f64 * 0.21
    }

    fn header(&mut self, record: &ApplicationRecord) {
        let top = self.y;

        // Payment QR block, top left
        match payment_qr() {
            Ok(pixels) => {
                self.doc.push_image(ImagePlacement {
                    x_mm: MARGIN_LEFT,
                    y_mm: top,
                    width_mm: 26.0,
                    height_mm: 26.0,
                    pixels,
                });
            }
            Err(e) => log::warn!("payment QR unavailable: {e}"),
        }
        self.doc.push_text(
            TextRun::new("भुक्तानी QR (Payment QR)", MARGIN_LEFT + 13.0, top + 30.0, 6.5)
                .align(Align::Center),
        );

        // Photo placeholder box, top right
        self.doc.push_frame(
            MARGIN_RIGHT - 30.0,
            top,
            30.0,
            35.0,
            FrameStyle::default(),
        );
        self.doc.push_text(
            TextRun::new("फोटो", MARGIN_RIGHT - 15.0, top + 16.0, SMALL_SIZE).align(Align::Center),
        );
        self.doc.push_text(
            TextRun::new("(Photo)", MARGIN_RIGHT - 15.0, top + 21.0, SMALL_SIZE)
                .align(Align::Center),
        );

        // Letterhead, centred between the two blocks
        let centre = PAGE_WIDTH_MM / 2.0;
        self.doc.push_text(
            TextRun::new(COMPANY_NAME_NP, centre, top + 6.0, TITLE_SIZE)
                .align(Align::Center)
                .bold(),
        );
        self.doc.push_text(
            TextRun::new(COMPANY_ADDRESS_NP, centre, top + 12.0, BODY_SIZE).align(Align::Center),
        );
        self.doc.push_text(
            TextRun::new(
                format!("कम्पनी दर्ता नं. {}", to_devanagari_digits(COMPANY_REG_NO)),
                centre,
                top + 17.0,
                SMALL_SIZE,
            )
            .align(Align::Center),
        );
        self.doc.push_text(
            TextRun::new("शेयर खरिद आवेदन फारम", centre, top + 25.5, 12.0)
                .align(Align::Center)
                .bold(),
        );
        self.doc.push_text(
            TextRun::new(
                "(Share Purchase Application Form)",
                centre,
                top + 31.0,
                BODY_SIZE,
            )
            .align(Align::Center),
        );

        self.y = top + 38.0;

        // Application date, right aligned above the separator
        let date_value = record
            .application_date
            .as_deref()
            .map(format_date_dmy)
            .unwrap_or_default();
        self.doc.push_text(TextRun::new(
            "मिति (Date):",
            MARGIN_RIGHT - 42.0,
            self.y + 4.8,
            BODY_SIZE,
        ));
        self.doc
            .push_text(TextRun::new(date_value, MARGIN_RIGHT - 22.0, self.y + 4.8, BODY_SIZE));
        self.doc
            .push_rule(MARGIN_RIGHT - 23.0, self.y + 6.0, MARGIN_RIGHT, self.y + 6.0, 0.15);
        self.y += ROW_HEIGHT + 1.0;

        self.doc
            .push_rule(MARGIN_LEFT, self.y, MARGIN_RIGHT, self.y, 0.4);
        self.y += 2.0;
    }

    fn section_header(&mut self, title: &str) {
        self.gap(2.5);
        self.doc.push_text(
            TextRun::new(title, MARGIN_LEFT, self.y + 4.5, SECTION_SIZE).bold(),
        );
        self.doc
            .push_rule(MARGIN_LEFT, self.y + 6.2, MARGIN_RIGHT, self.y + 6.2, 0.3);
        self.y += 8.5;
    }

    /// One labelled row with a ruled value cell
    ///
    /// The underline renders whether or not a value is present, so the grid
    /// never compresses on sparse input.
    fn field_row(&mut self, field: &Field) {
        self.doc
            .push_text(TextRun::new(field.label, MARGIN_LEFT, self.y + 4.8, BODY_SIZE));
        self.doc.push_text(TextRun::new(
            field.value.clone(),
            VALUE_X,
            self.y + 4.8,
            BODY_SIZE,
        ));
        self.doc
            .push_rule(VALUE_X, self.y + 6.0, MARGIN_RIGHT, self.y + 6.0, 0.15);
        self.y += ROW_HEIGHT;
    }

    /// A checkbox group row: every fixed option plus the "other" catch-all
    fn choice_row(
        &mut self,
        label: &str,
        options: &[ChoiceOption],
        selection: ChoiceSelection,
    ) {
        self.doc
            .push_text(TextRun::new(label, MARGIN_LEFT, self.y + 4.8, BODY_SIZE));

        let mut x = VALUE_X;
        for (index, option) in options.iter().enumerate() {
            let caption = format!("{} ({})", option.label_np, option.label_en);
            let width = 5.5 + Self::approx_width_mm(&caption, SMALL_SIZE) + 4.0;
            if x + width > MARGIN_RIGHT {
                x = VALUE_X;
                self.y += 6.0;
            }

            let checked = selection == ChoiceSelection::Option(index);
            self.doc.push_checkbox(x, self.y + 1.6, 3.5, checked);
            self.doc
                .push_text(TextRun::new(caption, x + 4.8, self.y + 4.8, SMALL_SIZE));
            x += width;
        }

        // The paper form's fixed "other" box, with the raw value echoed
        // beside it when nothing canonical matched.
        let other_caption = "अन्य (Other):";
        let width = 5.5 + Self::approx_width_mm(other_caption, SMALL_SIZE) + 4.0;
        if x + width > MARGIN_RIGHT {
            x = VALUE_X;
            self.y += 6.0;
        }
        let (other_checked, echo) = match &selection {
            ChoiceSelection::Other(raw) => (true, raw.clone()),
            _ => (false, String::new()),
        };
        self.doc.push_checkbox(x, self.y + 1.6, 3.5, other_checked);
        self.doc
            .push_text(TextRun::new(other_caption, x + 4.8, self.y + 4.8, SMALL_SIZE));
        self.doc.push_text(TextRun::new(
            echo,
            x + 4.8 + Self::approx_width_mm(other_caption, SMALL_SIZE) + 1.5,
            self.y + 4.8,
            SMALL_SIZE,
        ));

        self.y += ROW_HEIGHT;
    }

    /// A ruled grid with a shaded header row
    fn table(&mut self, col_labels: &[&str], col_bounds: &[f64], rows: &[Vec<String>]) {
        let top = self.y;
        let total_height = (rows.len() + 1) as f64 * ROW_HEIGHT;
        let width = MARGIN_RIGHT - MARGIN_LEFT;

        // Header shading under the frame strokes
        self.doc.push_frame(
            MARGIN_LEFT,
            top,
            width,
            ROW_HEIGHT,
            FrameStyle {
                stroke_mm: 0.0,
                fill: Some([235, 235, 235]),
            },
        );
        self.doc
            .push_frame(MARGIN_LEFT, top, width, total_height, FrameStyle::default());

        for boundary in &col_bounds[1..col_bounds.len() - 1] {
            self.doc
                .push_rule(*boundary, top, *boundary, top + total_height, 0.15);
        }
        for row_index in 1..=rows.len() {
            let line_y = top + row_index as f64 * ROW_HEIGHT;
            self.doc
                .push_rule(MARGIN_LEFT, line_y, MARGIN_RIGHT, line_y, 0.15);
        }

        for (label, bound) in col_labels.iter().zip(col_bounds.windows(2)) {
            self.doc.push_text(
                TextRun::new(*label, (bound[0] + bound[1]) / 2.0, top + 4.8, SMALL_SIZE)
                    .align(Align::Center)
                    .bold(),
            );
        }

        for (row_index, row) in rows.iter().enumerate() {
            let baseline = top + (row_index + 1) as f64 * ROW_HEIGHT + 4.8;
            for (value, bound) in row.iter().zip(col_bounds.windows(2)) {
                self.doc.push_text(TextRun::new(
                    value.clone(),
                    bound[0] + 2.0,
                    baseline,
                    SMALL_SIZE,
                ));
            }
        }

        self.y = top + total_height + 2.0;
    }

    fn family_table(&mut self, record: &ApplicationRecord) {
        let rows: Vec<Vec<String>> = family_rows(record)
            .into_iter()
            .map(|(relation, name)| vec![relation.to_string(), name])
            .collect();

        self.table(
            &["नाता (Relation)", "नाम थर (Full Name)"],
            &[MARGIN_LEFT, 85.0, MARGIN_RIGHT],
            &rows,
        );
    }

    fn occupation_table(&mut self, record: &ApplicationRecord) {
        // One row for the supplied data plus the paper form's three spare
        // rows, rendered blank.
        let mut rows = vec![occupation_row(record)];
        for _ in 0..3 {
            rows.push(vec![String::new(); 4]);
        }

        self.table(
            &[
                "संस्थाको नाम (Organization)",
                "ठेगाना (Address)",
                "पद (Designation)",
                "वार्षिक आय (Annual Income)",
            ],
            &[MARGIN_LEFT, 75.0, 120.0, 155.0, MARGIN_RIGHT],
            &rows,
        );
    }

    /// Side-by-side permanent and temporary address columns
    fn address_columns(&mut self, record: &ApplicationRecord) {
        let left_fields = address_fields(&record.permanent_address);
        let right_fields = address_fields(&record.temporary_address);

        let top = self.y;
        let divider = PAGE_WIDTH_MM / 2.0;
        let row_h = 6.5;
        let total_height = (left_fields.len() + 1) as f64 * row_h;

        self.doc.push_frame(
            MARGIN_LEFT,
            top,
            MARGIN_RIGHT - MARGIN_LEFT,
            total_height,
            FrameStyle::default(),
        );
        self.doc
            .push_rule(divider, top, divider, top + total_height, 0.15);
        self.doc
            .push_rule(MARGIN_LEFT, top + row_h, MARGIN_RIGHT, top + row_h, 0.15);

        self.doc.push_text(
            TextRun::new(
                "स्थायी ठेगाना (Permanent Address)",
                (MARGIN_LEFT + divider) / 2.0,
                top + 4.6,
                SMALL_SIZE,
            )
            .align(Align::Center)
            .bold(),
        );
        self.doc.push_text(
            TextRun::new(
                "अस्थायी ठेगाना (Temporary Address)",
                (divider + MARGIN_RIGHT) / 2.0,
                top + 4.6,
                SMALL_SIZE,
            )
            .align(Align::Center)
            .bold(),
        );

        for (row_index, (left, right)) in left_fields.iter().zip(&right_fields).enumerate() {
            let baseline = top + (row_index + 1) as f64 * row_h + 4.6;

            self.doc
                .push_text(TextRun::new(left.label, MARGIN_LEFT + 2.0, baseline, SMALL_SIZE));
            self.doc.push_text(TextRun::new(
                left.value.clone(),
                MARGIN_LEFT + 38.0,
                baseline,
                SMALL_SIZE,
            ));
            self.doc.push_rule(
                MARGIN_LEFT + 38.0,
                baseline + 1.2,
                divider - 2.0,
                baseline + 1.2,
                0.1,
            );

            self.doc
                .push_text(TextRun::new(right.label, divider + 2.0, baseline, SMALL_SIZE));
            self.doc.push_text(TextRun::new(
                right.value.clone(),
                divider + 38.0,
                baseline,
                SMALL_SIZE,
            ));
            self.doc.push_rule(
                divider + 38.0,
                baseline + 1.2,
                MARGIN_RIGHT - 2.0,
                baseline + 1.2,
                0.1,
            );
        }

        self.y = top + total_height + 2.0;
    }

    fn paragraph(&mut self, text: &str, size_pt: f32, chars_per_line: usize) {
        for line in simple_word_wrap(text, chars_per_line) {
            self.doc
                .push_text(TextRun::new(line, MARGIN_LEFT, self.y + 4.2, size_pt));
            self.y += 5.2;
        }
    }

    fn declaration(&mut self, record: &ApplicationRecord) {
        self.paragraph(
            "मैले/हामीले माथि उल्लेख गरेका सम्पूर्ण विवरणहरू साँचो र ठीक छन् भनी घोषणा गर्दछु/गर्दछौं। \
             कम्पनीको प्रबन्धपत्र, नियमावली तथा प्रचलित कानून बमोजिम शेयरधनीले पालना गर्नुपर्ने \
             सम्पूर्ण शर्तहरू पालना गर्न मञ्जुर छु/छौं।",
            BODY_SIZE,
            78,
        );
        self.paragraph(
            "I hereby declare that the particulars given above are true and correct, and agree \
             to abide by the company's memorandum, articles and prevailing law as a shareholder.",
            SMALL_SIZE,
            92,
        );

        self.signature_block(record);
    }

    /// Right-aligned signature line with the application date beneath
    fn signature_block(&mut self, record: &ApplicationRecord) {
        self.gap(9.0);
        self.doc.push_rule(
            MARGIN_RIGHT - 55.0,
            self.y + 4.0,
            MARGIN_RIGHT,
            self.y + 4.0,
            0.15,
        );
        self.doc.push_text(
            TextRun::new(
                "निवेदकको सही (Applicant's Signature)",
                MARGIN_RIGHT - 27.5,
                self.y + 9.0,
                SMALL_SIZE,
            )
            .align(Align::Center),
        );

        let date_value = record
            .application_date
            .as_deref()
            .map(format_date_dmy)
            .unwrap_or_default();
        self.doc.push_text(
            TextRun::new(
                format!("मिति (Date): {date_value}"),
                MARGIN_RIGHT - 27.5,
                self.y + 14.0,
                SMALL_SIZE,
            )
            .align(Align::Center),
        );
        self.y += 17.0;
    }

    /// The cover letter addressed to the board, with the fixed attachment
    /// checklist
    fn cover_letter(&mut self, record: &ApplicationRecord) {
        self.gap(8.0);
        self.doc
            .push_rule(MARGIN_LEFT, self.y, MARGIN_RIGHT, self.y, 0.4);
        self.gap(6.0);

        self.doc.push_text(
            TextRun::new("श्री सञ्चालक समिति,", MARGIN_LEFT, self.y + 4.8, BODY_SIZE).bold(),
        );
        self.y += 6.0;
        self.doc
            .push_text(TextRun::new(COMPANY_NAME_NP, MARGIN_LEFT, self.y + 4.8, BODY_SIZE));
        self.y += 6.0;
        self.doc
            .push_text(TextRun::new(COMPANY_ADDRESS_NP, MARGIN_LEFT, self.y + 4.8, BODY_SIZE));
        self.y += 9.0;

        self.doc.push_text(
            TextRun::new(
                "विषय: शेयर खरिद गरिपाऊँ भन्ने बारे।",
                PAGE_WIDTH_MM / 2.0,
                self.y + 4.8,
                BODY_SIZE,
            )
            .align(Align::Center)
            .bold(),
        );
        self.y += 9.0;

        let name = record
            .personal_details
            .full_name
            .clone()
            .unwrap_or_default();
        let citizenship = record
            .identification
            .citizenship_number
            .clone()
            .unwrap_or_default();
        let kitta = record
            .share_details
            .kitta
            .map(|n| n.to_string())
            .unwrap_or_default();
        let kitta_words = record
            .share_details
            .kitta_in_words
            .clone()
            .or_else(|| record.share_details.kitta.map(format_nepali_number))
            .unwrap_or_default();

        self.paragraph(
            &format!(
                "महोदय, म {name} (नागरिकता नं {citizenship}) ले तहाँ कम्पनीको शेयर {kitta} \
                 ({kitta_words}) कित्ता खरिद गर्न यो निवेदन पेश गरेको छु। मेरो निवेदन बमोजिम \
                 शेयर उपलब्ध गराई दिनुहुन अनुरोध गर्दछु।"
            ),
            BODY_SIZE,
            78,
        );

        self.signature_block(record);

        self.gap(3.0);
        self.doc.push_text(
            TextRun::new(
                "संलग्न कागजातहरू (Required Attachments)",
                MARGIN_LEFT,
                self.y + 4.8,
                BODY_SIZE,
            )
            .bold(),
        );
        self.y += 7.0;

        const ATTACHMENTS: &[&str] = &[
            "नागरिकता प्रमाणपत्रको प्रतिलिपि (Copy of citizenship certificate)",
            "पासपोर्ट साइजको फोटो २ प्रति (Two passport-size photographs)",
            "शेयर रकम भुक्तानीको रसिद (Share payment receipt)",
            "हितग्राही (डिम्याट) खाता विवरण (Demat account statement)",
        ];
        for attachment in ATTACHMENTS {
            self.doc.push_checkbox(MARGIN_LEFT + 2.0, self.y + 1.2, 3.5, false);
            self.doc.push_text(TextRun::new(
                *attachment,
                MARGIN_LEFT + 8.5,
                self.y + 4.2,
                SMALL_SIZE,
            ));
            self.y += 6.0;
        }
    }
}

/// Render the fixed payment reference as a QR bitmap
fn payment_qr() -> Result<image::RgbaImage, String> {
    use qrcode::{EcLevel, QrCode};

    let code = QrCode::with_error_correction_level(PAYMENT_REFERENCE.as_bytes(), EcLevel::M)
        .map_err(|e| e.to_string())?;

    let luma = code
        .render::<image::Luma<u8>>()
        .min_dimensions(200, 200)
        .build();

    Ok(image::DynamicImage::ImageLuma8(luma).to_rgba8())
}
