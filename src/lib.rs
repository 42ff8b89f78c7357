//! # Canonical variant fingerprints
//!
//! This crate computes deterministic MD5 fingerprints for genomic variant
//! calls, used as dedup/identity keys for variant rows across ingested
//! samples. It provides:
//!
//! - A typed input model (`VariantRecord`, `Position`, `AltSelector`) with
//!   constructor-level validation
//! - Two fingerprint entry points: structured-record form and
//!   four-resolved-fields form, unified over one canonicalization routine
//! - The canonical key itself (`chrom|pos|ref|alt`) for debugging/interop
//!
//! ```rust
//! use variant_fingerprint::{fingerprint_from_fields, Position};
//!
//! let fp = fingerprint_from_fields("1", Position::from(12345), "A", "T").unwrap();
//! assert_eq!(fp.as_str(), "2db727fffacd7a6c1175e751fce6ad89");
//! ```

pub mod errors;
pub mod fingerprint;
pub mod models;

pub use errors::FingerprintError;
pub use fingerprint::{
    Fingerprint, canonical_key, fingerprint_each_alt, fingerprint_from_fields,
    fingerprint_from_record,
};
pub use models::{AltSelector, Position, VariantRecord};
