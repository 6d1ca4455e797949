use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::certificate::common::format_indonesian_date;
use crate::draft::{GeographicCoordinate, SubmissionDraft};
use crate::geo;
use crate::terbilang::terbilang;

/// Caller-owned map URL generator. The default renders through
/// [`geo::build_static_map_url`]; tests and alternate providers pass
/// their own.
pub type MapUrlBuilder = fn(&[GeographicCoordinate]) -> String;

/// Staff-maintained reference data for the selected village. When
/// present, these fields win over whatever the applicant typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VillageData {
    pub desa: Option<String>,
    pub kecamatan: Option<String>,
    pub kabupaten: Option<String>,
    pub provinsi: Option<String>,
}

/// Knobs for the projection. Owned by the caller; there is no hidden
/// process-wide map client.
#[derive(Clone, Copy)]
pub struct PdfOptions {
    pub map_url_builder: MapUrlBuilder,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            map_url_builder: geo::build_static_map_url,
        }
    }
}

/// Flat, fully resolved structure the document renderer consumes.
/// Built once at issuance, read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpptgPdfData {
    pub nama: String,
    pub nik: String,
    pub ttl: String,
    pub pekerjaan: String,
    pub alamat: String,
    pub telepon: String,

    pub desa: String,
    pub kecamatan: String,
    pub kabupaten: String,
    pub provinsi: String,
    pub alamat_lahan: String,

    pub luas: f64,
    pub luas_terbilang: String,
    pub penggunaan_lahan: String,

    pub nomor_sertifikat: String,
    pub tanggal_terbit: String,

    // Batas lahan: adjoining land use per compass direction.
    pub batas_utara: String,
    pub batas_timur_laut: String,
    pub batas_timur: String,
    pub batas_tenggara: String,
    pub batas_selatan: String,
    pub batas_barat_daya: String,
    pub batas_barat: String,
    pub batas_barat_laut: String,

    pub coordinates: Vec<GeographicCoordinate>,
    pub map_image_url: Option<String>,
}

/// Project the final draft state (plus optional village reference data)
/// into the certificate render structure.
///
/// Total: missing fields come out empty, unrecognized boundary
/// directions are dropped, and the map URL is only built once the
/// polygon has at least 3 points.
pub fn build_spptg_pdf_data(
    draft: &SubmissionDraft,
    village: Option<&VillageData>,
    options: &PdfOptions,
) -> SpptgPdfData {
    let luas = resolve_luas(draft);
    let luas_terbilang = if luas != 0.0 {
        terbilang(luas)
    } else {
        String::new()
    };

    let coordinates = draft.coordinates_geografis.clone().unwrap_or_default();
    let map_image_url = if coordinates.len() >= 3 {
        Some((options.map_url_builder)(&coordinates))
    } else {
        None
    };

    let mut data = SpptgPdfData {
        nama: draft_text(&draft.nama),
        nik: draft_text(&draft.nik),
        ttl: draft_text(&draft.ttl),
        pekerjaan: draft_text(&draft.pekerjaan),
        alamat: draft_text(&draft.alamat),
        telepon: draft_text(&draft.telepon),

        desa: resolve(village.and_then(|v| v.desa.as_deref()), &draft.desa),
        kecamatan: resolve(village.and_then(|v| v.kecamatan.as_deref()), &draft.kecamatan),
        kabupaten: resolve(village.and_then(|v| v.kabupaten.as_deref()), &draft.kabupaten),
        provinsi: resolve(village.and_then(|v| v.provinsi.as_deref()), &None),
        alamat_lahan: draft_text(&draft.alamat_lahan),

        luas,
        luas_terbilang,
        penggunaan_lahan: draft_text(&draft.penggunaan_lahan),

        nomor_sertifikat: draft_text(&draft.nomor_sertifikat),
        tanggal_terbit: draft
            .tanggal_terbit
            .clone()
            .unwrap_or_else(|| format_indonesian_date(Local::now().date_naive())),

        coordinates,
        map_image_url,
        ..Default::default()
    };

    if let Some(saksi_list) = &draft.saksi_list {
        for saksi in saksi_list {
            let slot = match saksi.arah.trim().to_lowercase().as_str() {
                "utara" => &mut data.batas_utara,
                "timur laut" => &mut data.batas_timur_laut,
                "timur" => &mut data.batas_timur,
                "tenggara" => &mut data.batas_tenggara,
                "selatan" => &mut data.batas_selatan,
                "barat daya" => &mut data.batas_barat_daya,
                "barat" => &mut data.batas_barat,
                "barat laut" => &mut data.batas_barat_laut,
                // Only the eight canonical labels populate a slot.
                _ => continue,
            };
            *slot = saksi.penggunaan_lahan.clone();
        }
    }

    data
}

/// Area resolution: a manual staff correction always wins over the
/// measured value, and a zero entry falls through like an absent one.
fn resolve_luas(draft: &SubmissionDraft) -> f64 {
    match (non_zero(draft.luas_manual), non_zero(draft.luas_lahan)) {
        (Some(manual), _) => manual,
        (None, Some(measured)) => measured,
        (None, None) => 0.0,
    }
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn resolve(authoritative: Option<&str>, fallback: &Option<String>) -> String {
    match authoritative {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => draft_text(fallback),
    }
}

fn draft_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
