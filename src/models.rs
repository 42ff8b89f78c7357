//! Typed input model for variant fingerprinting.
//!
//! Strongly-typed replacements for the loose (chrom, pos, ref, alts)
//! tuples produced by upstream variant-call parsers. All validation
//! happens at construction, so a `VariantRecord` that exists is always
//! fingerprintable.

use std::fmt::Display;
use std::str::FromStr;

use crate::errors::FingerprintError;

/// A 1-based genomic coordinate.
///
/// Upstream sources hand positions over either as integers or as decimal
/// strings; both coerce to the same `Position` and therefore the same
/// canonical rendering. String parsing accepts only ASCII digits (no sign,
/// no whitespace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(u64);

impl Position {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Position {
    fn from(value: u64) -> Self {
        Position(value)
    }
}

impl FromStr for Position {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FingerprintError::TypeConstraintViolation(format!(
                "position must be an integer or a string of digits, got: {:?}",
                s
            )));
        }
        let value = s.parse::<u64>().map_err(|_| {
            FingerprintError::TypeConstraintViolation(format!(
                "position out of range: {:?}",
                s
            ))
        })?;
        Ok(Position(value))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single variant call as seen by the ingestion pipeline: a chromosome,
/// a 1-based position, the reference allele, and the ordered sequence of
/// alternate-allele candidates observed at that site.
///
/// Fields are private; `new()` rejects empty chromosome, reference, or
/// ALT candidates, so every record is guaranteed valid for hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantRecord {
    chromosome: String,
    position: Position,
    reference_allele: String,
    alternate_alleles: Vec<String>,
}

impl VariantRecord {
    pub fn new(
        chromosome: impl Into<String>,
        position: impl Into<Position>,
        reference_allele: impl Into<String>,
        alternate_alleles: Vec<String>,
    ) -> Result<Self, FingerprintError> {
        let chromosome = chromosome.into();
        let reference_allele = reference_allele.into();

        if chromosome.is_empty() {
            return Err(FingerprintError::TypeConstraintViolation(
                "chromosome must be a non-empty string".to_string(),
            ));
        }
        if reference_allele.is_empty() {
            return Err(FingerprintError::TypeConstraintViolation(
                "reference allele must be a non-empty string".to_string(),
            ));
        }
        if alternate_alleles.is_empty() {
            return Err(FingerprintError::TypeConstraintViolation(
                "record must carry at least one alternate allele".to_string(),
            ));
        }
        if let Some(empty_idx) = alternate_alleles.iter().position(|a| a.is_empty()) {
            return Err(FingerprintError::TypeConstraintViolation(format!(
                "alternate allele at index {} is empty",
                empty_idx
            )));
        }

        Ok(VariantRecord {
            chromosome,
            position: position.into(),
            reference_allele,
            alternate_alleles,
        })
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn reference_allele(&self) -> &str {
        &self.reference_allele
    }

    /// ALT candidates in their original call order.
    pub fn alternate_alleles(&self) -> &[String] {
        &self.alternate_alleles
    }
}

/// Which alternate allele a record fingerprint is computed over.
///
/// `JoinAll` is the default: every candidate joined with `,` in original
/// order. This matches the convention of the warehouse this crate feeds;
/// most variant tools fingerprint one ALT per call, so prefer `Index` or
/// `Value` when a single ALT has already been chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AltSelector {
    /// Join all candidates with `,` in original order.
    #[default]
    JoinAll,
    /// Select the candidate at this index in the record's ALT sequence.
    Index(usize),
    /// Use this value directly, bypassing the record's ALT sequence.
    Value(String),
}

impl AltSelector {
    /// Build a selector from the optional value/index pair upstream callers
    /// carry. Supplying both is ambiguous and rejected; supplying neither
    /// means join-all.
    pub fn from_parts(
        value: Option<String>,
        index: Option<usize>,
    ) -> Result<Self, FingerprintError> {
        match (value, index) {
            (Some(_), Some(_)) => Err(FingerprintError::InvalidArgument(
                "alt_value and alt_index are mutually exclusive".to_string(),
            )),
            (Some(v), None) => Ok(AltSelector::Value(v)),
            (None, Some(i)) => Ok(AltSelector::Index(i)),
            (None, None) => Ok(AltSelector::JoinAll),
        }
    }
}
