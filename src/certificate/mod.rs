//! Certificate assembly: number codec, document projection, and the
//! issuance-readiness check.
//!
//! The number sequence derived here is advisory; the authoritative
//! allocation happens in the persistence layer under a uniqueness
//! constraint, so two staff issuing at once cannot collide.

pub mod common;
pub mod number;
pub mod pdf;
pub mod validation;

pub use common::{certificate_filename, format_indonesian_date};
pub use number::{
    format_certificate_number, generate_certificate_number, next_certificate_sequence,
    parse_certificate_number, CertificateNumberParts,
};
pub use pdf::{build_spptg_pdf_data, MapUrlBuilder, PdfOptions, SpptgPdfData, VillageData};
pub use validation::validate_for_issuance;
