use formpad_core::{
    export_store, import_store, CodecError, FormStore, FormUpdate, Point, Signature,
    EXPORT_FORMAT, EXPORT_VERSION, REDACTED_NATIONAL_ID,
};
use std::fs::File;
use std::io::{Seek, SeekFrom};

fn sample_store() -> FormStore {
    let mut store = FormStore::new();
    store
        .update_at(
            0,
            &FormUpdate {
                first_name: "Grace".to_string(),
                middle_initial: "B".to_string(),
                last_name: "Hopper".to_string(),
                display_name: "Grace H".to_string(),
                national_id: "123456789".to_string(),
                phone: "4055559999".to_string(),
                email: "grace@navy.example".to_string(),
                address: "1 Compiler Ct".to_string(),
                signature: Signature::from_points(vec![Point::new(3, 4), Point::new(5, 6)]),
            },
        )
        .expect("sample record should be valid");
    store
}

#[test]
fn roundtrip_preserves_everything_but_national_id() {
    let store = sample_store();

    let mut bytes = Vec::new();
    export_store(&store, &mut bytes).expect("export should succeed");
    let imported = import_store(bytes.as_slice()).expect("import should succeed");

    assert_eq!(imported.len(), store.len());
    let original = store.get(0).expect("index 0 must be valid");
    let restored = imported.get(0).expect("index 0 must be valid");

    assert_eq!(restored.first_name(), original.first_name());
    assert_eq!(restored.middle_initial(), original.middle_initial());
    assert_eq!(restored.last_name(), original.last_name());
    assert_eq!(restored.display_name(), original.display_name());
    assert_eq!(restored.phone(), original.phone());
    assert_eq!(restored.email(), original.email());
    assert_eq!(restored.address(), original.address());
    assert_eq!(restored.signature(), original.signature());

    assert_eq!(restored.national_id(), REDACTED_NATIONAL_ID);
    assert_ne!(restored.national_id(), "123456789");
}

#[test]
fn exported_bytes_never_contain_the_national_id() {
    let store = sample_store();

    let mut bytes = Vec::new();
    export_store(&store, &mut bytes).expect("export should succeed");
    let text = String::from_utf8(bytes).expect("export is UTF-8 JSON");

    assert!(!text.contains("123456789"));
    assert!(!text.contains("national_id"));
}

#[test]
fn wire_shape_is_a_tagged_versioned_envelope() {
    let store = sample_store();

    let mut bytes = Vec::new();
    export_store(&store, &mut bytes).expect("export should succeed");
    let json: serde_json::Value =
        serde_json::from_slice(&bytes).expect("export is valid JSON");

    assert_eq!(json["format"], EXPORT_FORMAT);
    assert_eq!(json["version"], EXPORT_VERSION);
    let forms = json["forms"].as_array().expect("forms is an array");
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0]["display_name"], "Grace H");
    assert_eq!(forms[0]["signature"][0]["x"], 3);
    assert!(forms[0].get("national_id").is_none());
}

#[test]
fn empty_signature_roundtrips_as_empty() {
    let store = FormStore::new();

    let mut bytes = Vec::new();
    export_store(&store, &mut bytes).expect("export should succeed");
    let imported = import_store(bytes.as_slice()).expect("import should succeed");

    assert!(imported
        .get(0)
        .expect("index 0 must be valid")
        .signature()
        .is_empty());
}

#[test]
fn corrupt_input_is_rejected_as_malformed() {
    let err = import_store(&b"not an export at all"[..])
        .expect_err("garbage input must be rejected");
    assert!(matches!(err, CodecError::Malformed(_)));
}

#[test]
fn foreign_format_tag_is_rejected() {
    let foreign = serde_json::json!({
        "format": "someone-elses-export",
        "version": 1,
        "forms": []
    });
    let bytes = serde_json::to_vec(&foreign).expect("test JSON encodes");

    let err = import_store(bytes.as_slice()).expect_err("foreign format must be rejected");
    assert!(matches!(err, CodecError::UnrecognizedFormat(found) if found == "someone-elses-export"));
}

#[test]
fn future_version_is_rejected() {
    let future = serde_json::json!({
        "format": EXPORT_FORMAT,
        "version": 2,
        "forms": []
    });
    let bytes = serde_json::to_vec(&future).expect("test JSON encodes");

    let err = import_store(bytes.as_slice()).expect_err("future version must be rejected");
    assert!(matches!(
        err,
        CodecError::UnsupportedVersion {
            found: 2,
            supported: EXPORT_VERSION
        }
    ));
}

#[test]
fn empty_export_is_rejected() {
    let empty = serde_json::json!({
        "format": EXPORT_FORMAT,
        "version": EXPORT_VERSION,
        "forms": []
    });
    let bytes = serde_json::to_vec(&empty).expect("test JSON encodes");

    let err = import_store(bytes.as_slice()).expect_err("empty export must be rejected");
    assert!(matches!(err, CodecError::EmptyExport));
}

#[test]
fn stored_record_failing_revalidation_is_rejected() {
    let tampered = serde_json::json!({
        "format": EXPORT_FORMAT,
        "version": EXPORT_VERSION,
        "forms": [{
            "first_name": "Grace",
            "middle_initial": "B",
            "last_name": "Hopper",
            "display_name": "Grace H",
            "phone": "12345",
            "email": "grace@navy.example",
            "address": "1 Compiler Ct",
            "signature": []
        }]
    });
    let bytes = serde_json::to_vec(&tampered).expect("test JSON encodes");

    let err = import_store(bytes.as_slice()).expect_err("tampered record must be rejected");
    assert!(matches!(err, CodecError::InvalidRecord { index: 0, .. }));
}

#[test]
fn file_backed_roundtrip_works() {
    let store = sample_store();

    let mut file = tempfile::tempfile().expect("temp file should open");
    export_store(&store, &mut file).expect("export to file should succeed");

    file.seek(SeekFrom::Start(0)).expect("seek should succeed");
    let imported = import_store(&mut file).expect("import from file should succeed");

    assert_eq!(imported.len(), 1);
    assert_eq!(
        imported
            .get(0)
            .expect("index 0 must be valid")
            .display_name(),
        "Grace H"
    );
}

#[test]
fn missing_file_surfaces_as_io_failure() {
    let dir = tempfile::tempdir().expect("temp dir should create");
    let missing = dir.path().join("no-such-export.json");

    let err = File::open(&missing).expect_err("file must not exist");
    let err = CodecError::from(err);
    assert!(matches!(err, CodecError::Io(_)));
}
