use serde::{Deserialize, Serialize};

/// Workflow status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Diajukan,
    Diverifikasi,
    Ditolak,
    Diterbitkan,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Diajukan => "diajukan",
            SubmissionStatus::Diverifikasi => "diverifikasi",
            SubmissionStatus::Ditolak => "ditolak",
            SubmissionStatus::Diterbitkan => "diterbitkan",
        }
    }

    /// Parse a wire value. Anything outside the fixed set is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "diajukan" => Some(SubmissionStatus::Diajukan),
            "diverifikasi" => Some(SubmissionStatus::Diverifikasi),
            "ditolak" => Some(SubmissionStatus::Ditolak),
            "diterbitkan" => Some(SubmissionStatus::Diterbitkan),
            _ => None,
        }
    }
}

/// One vertex of the parcel polygon. The ring is open here; it gets
/// closed when exported to the map path format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicCoordinate {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Saksi batas: an adjoining-landowner declaration naming one of the
/// eight compass directions and the land use on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saksi {
    pub nama: String,
    pub arah: String,
    pub penggunaan_lahan: String,
}

/// Overlap hit against an already issued parcel, recorded during
/// verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResult {
    pub nomor_sertifikat: String,
    pub persentase_overlap: f64,
}

/// In-progress SPPTG submission across all four wizard steps.
///
/// Every field is optional; they fill in monotonically as the applicant
/// and staff progress. Step 1: identitas pemohon. Step 2: data lahan.
/// Step 3: hasil verifikasi. Step 4: penerbitan sertifikat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionDraft {
    // Step 1 - identitas pemohon
    pub nama: Option<String>,
    pub nik: Option<String>,
    pub ttl: Option<String>,
    pub pekerjaan: Option<String>,
    pub alamat: Option<String>,
    pub telepon: Option<String>,

    // Step 2 - data lahan
    pub desa_id: Option<i64>,
    pub desa: Option<String>,
    pub kecamatan: Option<String>,
    pub kabupaten: Option<String>,
    pub alamat_lahan: Option<String>,
    pub luas_lahan: Option<f64>,
    /// Staff-corrected measurement, wins over `luas_lahan` when set.
    pub luas_manual: Option<f64>,
    pub penggunaan_lahan: Option<String>,
    pub bukti_kepemilikan: Option<String>,
    pub coordinates_geografis: Option<Vec<GeographicCoordinate>>,
    pub foto_lahan: Option<Vec<String>>,
    pub saksi_list: Option<Vec<Saksi>>,

    // Step 3 - verifikasi
    pub status: Option<SubmissionStatus>,
    pub catatan_verifikasi: Option<String>,
    pub tanggal_verifikasi: Option<String>,
    pub overlap_results: Option<Vec<OverlapResult>>,

    // Step 4 - penerbitan
    pub nomor_sertifikat: Option<String>,
    pub kode_kabupaten: Option<String>,
    pub tanggal_terbit: Option<String>,
}
