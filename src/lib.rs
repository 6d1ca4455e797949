//! Core rules engine for SPPTG land-permit submissions.
//!
//! This crate holds the decision and projection logic shared by the
//! submission workflow: access scoping for drafts and submissions,
//! dashboard filter normalization, the draft save-payload projection,
//! and the certificate document assembly (number codec, boundary
//! mapping, terbilang rendering, static map URL).
//!
//! Everything here is a pure function over in-memory records. HTTP
//! routing, authentication, storage, and PDF layout live in the
//! surrounding services and talk to this crate through the types in
//! each module.

pub mod access;
pub mod certificate;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod geo;
pub mod terbilang;

pub use crate::error::AccessError;
