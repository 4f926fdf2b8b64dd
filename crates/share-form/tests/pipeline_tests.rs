//! Integration tests for the full generation pipeline

use share_form::{generate, generate_and_save, ApplicationRecord, FontStore};
use std::sync::Mutex;

// Surface-counter assertions must not interleave across test threads.
static COUNTER_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_end_to_end_minimal_record() {
    let _guard = COUNTER_LOCK.lock().unwrap();

    let mut record = ApplicationRecord::default();
    record.personal_details.full_name = Some("Sita Devi".to_string());
    record.application_date = Some("2025-01-15".to_string());

    let before = raster_core::active_surfaces();
    let artifact = generate(&record, &FontStore::new()).unwrap();

    assert!(artifact.pages >= 1);
    assert_eq!(artifact.filename, "share-application-Sita_Devi.pdf");
    assert!(artifact.bytes.starts_with(b"%PDF"));

    // No off-screen surface survives the invocation.
    assert_eq!(raster_core::active_surfaces(), before);

    // The serialized document really has that many pages.
    let parsed = lopdf::Document::load_mem(&artifact.bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), artifact.pages);
}

#[test]
fn test_surface_released_when_generation_fails() {
    let _guard = COUNTER_LOCK.lock().unwrap();

    // An absurd device scale makes surface acquisition fail up front.
    let doc = share_form::synthesize(&ApplicationRecord::default());
    let before = raster_core::active_surfaces();
    let result = raster_core::RenderSurface::acquire(&doc, 1_000_000.0);
    assert!(result.is_err());
    assert_eq!(raster_core::active_surfaces(), before);
}

#[test]
fn test_generate_and_save_writes_single_file() {
    let dir = std::env::temp_dir().join("sharepatra-pipeline-test");
    std::fs::create_dir_all(&dir).unwrap();

    let mut record = ApplicationRecord::default();
    record.personal_details.full_name = Some("Ram Bahadur Thapa".to_string());

    let path = generate_and_save(&record, &FontStore::new(), &dir).unwrap();
    assert!(path.ends_with("share-application-Ram_Bahadur_Thapa.pdf"));

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_record_from_backend_payload() {
    let json = r#"{
        "personalDetails": {
            "fullName": "Maya Gurung",
            "gender": "Female",
            "dateOfBirth": "1988-07-02",
            "maritalStatus": "विवाहित"
        },
        "shareDetails": { "kitta": 250, "amount": 25000.0 },
        "identification": { "citizenshipNumber": "12-01-70-01234" },
        "applicationDate": "2025-03-20"
    }"#;

    let record: ApplicationRecord = serde_json::from_str(json).unwrap();
    let artifact = generate(&record, &FontStore::new()).unwrap();

    assert_eq!(artifact.filename, "share-application-Maya_Gurung.pdf");
    assert!(artifact.pages >= 2);
}
