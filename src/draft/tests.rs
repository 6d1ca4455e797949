//! Unit tests for the draft model and save-payload projection

#[cfg(test)]
mod tests {
    use crate::draft::{
        build_draft_save_payload, Saksi, SubmissionDraft, SubmissionStatus, DRAFT_PAYLOAD_KEYS,
    };
    use serde_json::Value;

    #[test]
    fn test_payload_is_total_for_step1_only_draft() {
        let draft = SubmissionDraft {
            nama: Some("Budi Santoso".to_string()),
            nik: Some("3175091211870003".to_string()),
            ..Default::default()
        };

        let payload = build_draft_save_payload(&draft);

        assert_eq!(payload.len(), DRAFT_PAYLOAD_KEYS.len());
        for key in DRAFT_PAYLOAD_KEYS {
            assert!(payload.contains_key(key), "missing payload key {key}");
        }
        assert_eq!(payload["nama"], Value::String("Budi Santoso".to_string()));
        assert_eq!(payload["nomorSertifikat"], Value::Null);
    }

    #[test]
    fn test_unset_lists_become_empty_arrays() {
        let payload = build_draft_save_payload(&SubmissionDraft::default());

        for key in ["saksiList", "coordinatesGeografis", "fotoLahan", "overlapResults"] {
            assert_eq!(payload[key], Value::Array(Vec::new()), "key {key}");
        }
    }

    #[test]
    fn test_set_lists_serialize_in_camel_case() {
        let draft = SubmissionDraft {
            saksi_list: Some(vec![Saksi {
                nama: "Slamet".to_string(),
                arah: "Utara".to_string(),
                penggunaan_lahan: "Sawah".to_string(),
            }]),
            ..Default::default()
        };

        let payload = build_draft_save_payload(&draft);
        let saksi = payload["saksiList"].as_array().unwrap();
        assert_eq!(saksi.len(), 1);
        assert_eq!(saksi[0]["penggunaanLahan"], "Sawah");
    }

    #[test]
    fn test_status_serializes_as_wire_string() {
        let draft = SubmissionDraft {
            status: Some(SubmissionStatus::Diverifikasi),
            ..Default::default()
        };
        let payload = build_draft_save_payload(&draft);
        assert_eq!(payload["status"], "diverifikasi");
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(SubmissionStatus::parse("diajukan"), Some(SubmissionStatus::Diajukan));
        assert_eq!(SubmissionStatus::parse("selesai"), None);
        assert_eq!(SubmissionStatus::parse(""), None);
    }
}
