//! Submission draft model and the save-payload projection.
//!
//! A draft accumulates fields over the four wizard steps (pemohon, lahan,
//! verifikasi, penerbitan). Nothing is required at any single step;
//! [`payload::build_draft_save_payload`] turns whatever has accumulated
//! into a storage payload with a fixed key set so a later step's save can
//! never drop an earlier step's fields.

pub mod model;
pub mod payload;

pub use model::{
    GeographicCoordinate, OverlapResult, Saksi, SubmissionDraft, SubmissionStatus,
};
pub use payload::{build_draft_save_payload, DRAFT_PAYLOAD_KEYS};

#[cfg(test)]
mod tests;
