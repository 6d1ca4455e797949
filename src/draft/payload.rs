use serde::Serialize;
use serde_json::{Map, Value};

use super::model::SubmissionDraft;

/// Every key `build_draft_save_payload` emits, in payload order.
///
/// The storage layer overwrites by key, so this set is total: a draft
/// saved at step 1 still writes the step 2-4 keys (as null / empty
/// list), and a step 3 save can never erase step 1 data by omission.
pub const DRAFT_PAYLOAD_KEYS: [&str; 25] = [
    "nama",
    "nik",
    "ttl",
    "pekerjaan",
    "alamat",
    "telepon",
    "desaId",
    "desa",
    "kecamatan",
    "kabupaten",
    "alamatLahan",
    "luasLahan",
    "luasManual",
    "penggunaanLahan",
    "buktiKepemilikan",
    "coordinatesGeografis",
    "fotoLahan",
    "saksiList",
    "status",
    "catatanVerifikasi",
    "tanggalVerifikasi",
    "overlapResults",
    "nomorSertifikat",
    "kodeKabupaten",
    "tanggalTerbit",
];

/// Project a draft into the flat key-value payload handed to storage.
///
/// Unset scalars become `null`; the four list-valued fields default to
/// an empty array so storage never has to tell "never set" from
/// "explicitly empty".
pub fn build_draft_save_payload(draft: &SubmissionDraft) -> Map<String, Value> {
    let mut payload = Map::new();

    payload.insert("nama".into(), text(&draft.nama));
    payload.insert("nik".into(), text(&draft.nik));
    payload.insert("ttl".into(), text(&draft.ttl));
    payload.insert("pekerjaan".into(), text(&draft.pekerjaan));
    payload.insert("alamat".into(), text(&draft.alamat));
    payload.insert("telepon".into(), text(&draft.telepon));

    payload.insert("desaId".into(), integer(draft.desa_id));
    payload.insert("desa".into(), text(&draft.desa));
    payload.insert("kecamatan".into(), text(&draft.kecamatan));
    payload.insert("kabupaten".into(), text(&draft.kabupaten));
    payload.insert("alamatLahan".into(), text(&draft.alamat_lahan));
    payload.insert("luasLahan".into(), float(draft.luas_lahan));
    payload.insert("luasManual".into(), float(draft.luas_manual));
    payload.insert("penggunaanLahan".into(), text(&draft.penggunaan_lahan));
    payload.insert("buktiKepemilikan".into(), text(&draft.bukti_kepemilikan));
    payload.insert(
        "coordinatesGeografis".into(),
        list(&draft.coordinates_geografis),
    );
    payload.insert("fotoLahan".into(), list(&draft.foto_lahan));
    payload.insert("saksiList".into(), list(&draft.saksi_list));

    payload.insert(
        "status".into(),
        draft
            .status
            .map(|s| Value::String(s.as_str().to_string()))
            .unwrap_or(Value::Null),
    );
    payload.insert("catatanVerifikasi".into(), text(&draft.catatan_verifikasi));
    payload.insert("tanggalVerifikasi".into(), text(&draft.tanggal_verifikasi));
    payload.insert("overlapResults".into(), list(&draft.overlap_results));

    payload.insert("nomorSertifikat".into(), text(&draft.nomor_sertifikat));
    payload.insert("kodeKabupaten".into(), text(&draft.kode_kabupaten));
    payload.insert("tanggalTerbit".into(), text(&draft.tanggal_terbit));

    payload
}

fn text(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

fn integer(value: Option<i64>) -> Value {
    match value {
        Some(n) => Value::from(n),
        None => Value::Null,
    }
}

fn float(value: Option<f64>) -> Value {
    match value {
        Some(n) => serde_json::json!(n),
        None => Value::Null,
    }
}

fn list<T: Serialize>(value: &Option<Vec<T>>) -> Value {
    match value {
        Some(items) => {
            serde_json::to_value(items).unwrap_or_else(|_| Value::Array(Vec::new()))
        }
        None => Value::Array(Vec::new()),
    }
}
