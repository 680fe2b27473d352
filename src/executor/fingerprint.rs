//! Content fingerprint of a result set
//!
//! The fingerprint certifies content, not order. Every `(field, value)` pair
//! of a row is avalanche-mixed and summed into a row digest; row digests are
//! summed into the accumulator. Wrapping addition commutes and associates, so
//! neither row order nor field order within a row affects the result. Unlike
//! XOR, addition does not cancel duplicate rows.
//!
//! The seed (and the fingerprint of an empty result) is `0`.

use crate::value::{field_hash, mix, Record, Value};

/// Fingerprint of an empty result set
pub const SEED_FINGERPRINT: u64 = 0;

/// Offset applied before finalizing a row digest, so an empty row still
/// contributes to the accumulator.
const ROW_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

/// Computes the fingerprint of a sequence of rows
pub fn fingerprint_of(rows: &[Record]) -> u64 {
    rows.iter()
        .fold(SEED_FINGERPRINT, |acc, row| acc.wrapping_add(row_digest(row)))
}

/// Digest of one row, independent of field iteration order
fn row_digest(row: &Record) -> u64 {
    let sum = row
        .iter()
        .fold(0u64, |acc, (field, value)| acc.wrapping_add(pair_digest(field, value)));
    mix(sum.wrapping_add(ROW_OFFSET))
}

/// Digest of one field/value pair.
///
/// The value hash is rotated so that swapping a field name and a text value
/// does not yield the same pair digest.
fn pair_digest(field: &str, value: &Value) -> u64 {
    mix(field_hash(field) ^ value.payload_hash().rotate_left(32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::record;

    #[test]
    fn test_empty_is_seed() {
        assert_eq!(fingerprint_of(&[]), SEED_FINGERPRINT);
    }

    #[test]
    fn test_empty_row_counts() {
        let one = vec![Record::new()];
        let two = vec![Record::new(), Record::new()];
        assert_ne!(fingerprint_of(&one), SEED_FINGERPRINT);
        assert_ne!(fingerprint_of(&one), fingerprint_of(&two));
    }

    #[test]
    fn test_row_order_independent() {
        let a = record([("id", Value::int(1)), ("user", Value::text("alice"))]);
        let b = record([("id", Value::int(2)), ("user", Value::text("bob"))]);

        assert_eq!(
            fingerprint_of(&[a.clone(), b.clone()]),
            fingerprint_of(&[b, a])
        );
    }

    #[test]
    fn test_duplicates_do_not_cancel() {
        let a = record([("id", Value::int(1))]);
        assert_ne!(fingerprint_of(&[a.clone(), a.clone()]), SEED_FINGERPRINT);
        assert_ne!(fingerprint_of(&[a.clone(), a.clone()]), fingerprint_of(&[a]));
    }

    #[test]
    fn test_value_change_detected() {
        let a = record([("id", Value::int(1)), ("user", Value::text("alice"))]);
        let b = record([("id", Value::int(1)), ("user", Value::text("alicf"))]);
        assert_ne!(fingerprint_of(&[a]), fingerprint_of(&[b]));
    }

    #[test]
    fn test_field_name_change_detected() {
        let a = record([("id", Value::int(1))]);
        let b = record([("key", Value::int(1))]);
        assert_ne!(fingerprint_of(&[a]), fingerprint_of(&[b]));
    }

    #[test]
    fn test_row_boundaries_matter() {
        let merged = record([("a", Value::int(1)), ("b", Value::int(2))]);
        let split = [record([("a", Value::int(1))]), record([("b", Value::int(2))])];
        assert_ne!(fingerprint_of(&[merged]), fingerprint_of(&split));
    }

    /// Kind is not part of the value hash, so an `Int` and a `Text` with the
    /// same payload bytes produce the same fingerprint.
    #[test]
    fn test_cross_kind_payload_collision() {
        let as_int = record([("k", Value::int(i64::from_le_bytes(*b"abcdefgh")))]);
        let as_text = record([("k", Value::text("abcdefgh"))]);
        assert_eq!(fingerprint_of(&[as_int]), fingerprint_of(&[as_text]));
    }
}
