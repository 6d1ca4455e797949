use serde_json::Value;
use spptg_engine::draft::{
    build_draft_save_payload, GeographicCoordinate, SubmissionDraft, DRAFT_PAYLOAD_KEYS,
};

#[test]
fn test_step_transitions_never_drop_keys() {
    // Simulate the wizard: each step's save must carry the full key set,
    // so a storage layer overwriting by key cannot forget earlier data.
    let step1 = SubmissionDraft {
        nama: Some("Siti Rahma".to_string()),
        nik: Some("3175096005900002".to_string()),
        ..Default::default()
    };
    let step2 = SubmissionDraft {
        desa_id: Some(7),
        luas_lahan: Some(250.0),
        coordinates_geografis: Some(vec![GeographicCoordinate {
            id: 1,
            latitude: -6.1,
            longitude: 106.8,
        }]),
        ..step1.clone()
    };

    for draft in [&step1, &step2] {
        let payload = build_draft_save_payload(draft);
        assert_eq!(payload.len(), DRAFT_PAYLOAD_KEYS.len());
        for key in DRAFT_PAYLOAD_KEYS {
            assert!(payload.contains_key(key), "missing {key}");
        }
    }

    // Step 2 still carries step 1 values.
    let payload = build_draft_save_payload(&step2);
    assert_eq!(payload["nama"], "Siti Rahma");
    assert_eq!(payload["desaId"], 7);
}

#[test]
fn test_payload_serializes_to_stable_json() {
    let payload = build_draft_save_payload(&SubmissionDraft::default());
    let value = Value::Object(payload);
    let text = serde_json::to_string(&value).unwrap();
    assert!(text.contains("\"saksiList\":[]"));
    assert!(text.contains("\"nama\":null"));
}
