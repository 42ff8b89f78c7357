//! Canonical fingerprint computation.
//!
//! A variant's fingerprint is the lowercase-hex MD5 of its canonical key:
//! chromosome, decimal position, reference allele, and resolved alternate
//! allele joined with `|`. Identical resolved field values always produce
//! identical fingerprints, regardless of whether the caller went through
//! the record form or the fields form.

use std::fmt::Display;
use std::str::FromStr;

use md5::{Digest, Md5};

use crate::errors::FingerprintError;
use crate::models::{AltSelector, Position, VariantRecord};

/// Delimiter between the four canonical-key fields.
pub const FIELD_DELIMITER: char = '|';

/// Delimiter between ALT candidates when a record is fingerprinted
/// without a selector.
pub const ALT_JOIN_DELIMITER: char = ',';

/// A 32-character lowercase hexadecimal MD5 digest identifying a variant
/// call. Used downstream as the dedup/uniqueness key for variant rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    /// Parse a digest previously rendered by this crate. Rejects anything
    /// that is not exactly 32 lowercase hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.len() == 32
            && s.bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(FingerprintError::TypeConstraintViolation(format!(
                "fingerprint must be 32 lowercase hex characters, got: {:?}",
                s
            )));
        }
        Ok(Fingerprint(s.to_string()))
    }
}

/// The pre-digest canonical key: the four fields joined with `|`.
///
/// Exposed for debugging and interop; `md5(canonical_key(..))` is the
/// fingerprint.
pub fn canonical_key(
    chromosome: &str,
    position: Position,
    reference_allele: &str,
    alternate_allele: &str,
) -> String {
    format!(
        "{}{}{}{}{}{}{}",
        chromosome,
        FIELD_DELIMITER,
        position,
        FIELD_DELIMITER,
        reference_allele,
        FIELD_DELIMITER,
        alternate_allele
    )
}

fn digest_fields(
    chromosome: &str,
    position: Position,
    reference_allele: &str,
    alternate_allele: &str,
) -> Fingerprint {
    let key = canonical_key(chromosome, position, reference_allele, alternate_allele);
    let mut hasher = Md5::new();
    hasher.update(key.as_bytes());
    Fingerprint(format!("{:x}", hasher.finalize()))
}

/// Compute a fingerprint from the four resolved field values.
///
/// This is the form for callers that already selected a single alternate
/// allele. String fields must be non-empty.
pub fn fingerprint_from_fields(
    chromosome: &str,
    position: Position,
    reference_allele: &str,
    alternate_allele: &str,
) -> Result<Fingerprint, FingerprintError> {
    for (name, value) in [
        ("chromosome", chromosome),
        ("reference allele", reference_allele),
        ("alternate allele", alternate_allele),
    ] {
        if value.is_empty() {
            return Err(FingerprintError::TypeConstraintViolation(format!(
                "{} must be a non-empty string",
                name
            )));
        }
    }
    Ok(digest_fields(
        chromosome,
        position,
        reference_allele,
        alternate_allele,
    ))
}

/// Compute a fingerprint from a structured variant record.
///
/// The selector picks which ALT the digest covers: an explicit value, one
/// candidate by index, or (the default) all candidates joined with `,` in
/// original order. An out-of-range index is an `InvalidArgument` error.
pub fn fingerprint_from_record(
    record: &VariantRecord,
    selector: &AltSelector,
) -> Result<Fingerprint, FingerprintError> {
    let alternate_allele = match selector {
        AltSelector::Value(value) => {
            if value.is_empty() {
                return Err(FingerprintError::TypeConstraintViolation(
                    "alternate allele must be a non-empty string".to_string(),
                ));
            }
            value.clone()
        }
        AltSelector::Index(index) => record
            .alternate_alleles()
            .get(*index)
            .cloned()
            .ok_or_else(|| {
                FingerprintError::InvalidArgument(format!(
                    "alt index {} out of range for record with {} candidates",
                    index,
                    record.alternate_alleles().len()
                ))
            })?,
        AltSelector::JoinAll => {
            let mut joined = String::new();
            for (i, alt) in record.alternate_alleles().iter().enumerate() {
                if i > 0 {
                    joined.push(ALT_JOIN_DELIMITER);
                }
                joined.push_str(alt);
            }
            joined
        }
    };

    Ok(digest_fields(
        record.chromosome(),
        record.position(),
        record.reference_allele(),
        &alternate_allele,
    ))
}

/// One fingerprint per ALT candidate, in call order.
///
/// For pipelines that persist one variant row per (site, alt) pair rather
/// than one row per multi-allelic record. Infallible: record fields are
/// validated at construction.
pub fn fingerprint_each_alt(record: &VariantRecord) -> Vec<Fingerprint> {
    record
        .alternate_alleles()
        .iter()
        .map(|alt| {
            digest_fields(
                record.chromosome(),
                record.position(),
                record.reference_allele(),
                alt,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // Reference digests computed independently as md5("<chrom>|<pos>|<ref>|<alt>").
    #[rstest]
    #[case("1", 12345, "A", "T", "2db727fffacd7a6c1175e751fce6ad89")]
    #[case("1", 12345, "A", "G", "1f8b3e74d40485e56c63fcd4e932e787")]
    #[case("X", 999, "GAT", "G", "061936360ea39498fcff376d3a6a532c")]
    #[case("MT", 5, "C", "A", "25419627b1bc05e97f01b156392b853c")]
    fn test_known_digests(
        #[case] chrom: &str,
        #[case] pos: u64,
        #[case] ref_allele: &str,
        #[case] alt: &str,
        #[case] expected: &str,
    ) {
        let fp = fingerprint_from_fields(chrom, pos.into(), ref_allele, alt).unwrap();
        assert_eq!(fp.as_str(), expected);
    }

    #[test]
    fn test_canonical_key_layout() {
        let key = canonical_key("1", 12345u64.into(), "A", "T");
        assert_eq!(key, "1|12345|A|T");
    }

    #[test]
    fn test_deterministic() {
        let a = fingerprint_from_fields("17", 41276045u64.into(), "CT", "C").unwrap();
        let b = fingerprint_from_fields("17", 41276045u64.into(), "CT", "C").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_form_rejects_empty_strings() {
        for (chrom, ref_allele, alt) in [("", "A", "T"), ("1", "", "T"), ("1", "A", "")] {
            let err = fingerprint_from_fields(chrom, 1u64.into(), ref_allele, alt).unwrap_err();
            assert!(matches!(err, FingerprintError::TypeConstraintViolation(_)));
        }
    }

    #[test]
    fn test_each_alt_matches_fields_form() {
        let record = crate::models::VariantRecord::new(
            "2",
            7u64,
            "AAC",
            vec!["A".to_string(), "AT".to_string(), "G".to_string()],
        )
        .unwrap();

        let per_alt = fingerprint_each_alt(&record);
        assert_eq!(per_alt.len(), 3);
        for (alt, fp) in ["A", "AT", "G"].iter().zip(&per_alt) {
            let direct = fingerprint_from_fields("2", 7u64.into(), "AAC", alt).unwrap();
            assert_eq!(fp, &direct);
        }
    }

    #[test]
    fn test_fingerprint_round_trip() {
        let fp = fingerprint_from_fields("1", 12345u64.into(), "A", "T").unwrap();
        let parsed: Fingerprint = fp.as_str().parse().unwrap();
        assert_eq!(parsed, fp);
    }

    #[rstest]
    #[case("2db727fffacd7a6c1175e751fce6ad8")] // 31 chars
    #[case("2DB727FFFACD7A6C1175E751FCE6AD89")] // uppercase
    #[case("2db727fffacd7a6c1175e751fce6adzz")] // non-hex
    fn test_fingerprint_parse_rejects_malformed(#[case] input: &str) {
        let err = input.parse::<Fingerprint>().unwrap_err();
        assert!(matches!(err, FingerprintError::TypeConstraintViolation(_)));
    }
}
