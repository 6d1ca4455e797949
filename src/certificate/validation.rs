//! Issuance-readiness validation.
//!
//! An optional gate staff run before issuing a certificate. The
//! projection itself ([`super::pdf::build_spptg_pdf_data`]) never
//! errors; this check exists so the dashboard can list what is still
//! missing in plain Indonesian before a legal document gets rendered.

use std::fmt;

use crate::draft::SubmissionDraft;

/// Validation error with a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable message in Indonesian
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} tidak boleh kosong"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validasi gagal: {} kesalahan ditemukan",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

/// Check that the draft carries everything a certificate needs.
pub fn validate_for_issuance(draft: &SubmissionDraft) -> Result<(), String> {
    let mut errors = ValidationErrors::new();

    validate_required(&draft.nama, "nama", "Nama Pemohon", &mut errors);
    validate_nik(&draft.nik, "nik", &mut errors);
    validate_required(&draft.alamat, "alamat", "Alamat Pemohon", &mut errors);
    validate_required(&draft.alamat_lahan, "alamatLahan", "Alamat Lahan", &mut errors);

    if draft.desa_id.is_none() {
        errors.add(ValidationError::new(
            "desaId",
            "Desa lokasi lahan belum dipilih",
        ));
    }

    let coord_count = draft
        .coordinates_geografis
        .as_ref()
        .map(Vec::len)
        .unwrap_or(0);
    if coord_count < 3 {
        errors.add(ValidationError::new(
            "coordinatesGeografis",
            "Batas lahan memerlukan minimal 3 titik koordinat",
        ));
    }

    errors.into_result()
}

fn validate_required(
    value: &Option<String>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) {
    if value.as_deref().map(str::trim).unwrap_or("").is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

fn validate_nik(value: &Option<String>, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.as_deref().map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "NIK"));
        return;
    }

    if trimmed.len() != 16 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        errors.add(ValidationError::new(
            field,
            "NIK harus terdiri dari 16 digit angka",
        ));
    }
}
