//! Detection rules for column types.
use std::collections::HashSet;

use crate::common::constants::{
    TYPE_MATCH_RATIO,
    MIN_CATEGORIES,
    MAX_CATEGORIES,
    MIN_CATEGORY_SUPPORT,
};
use crate::common::utils::parse_numeric;
use super::{DataType, CategoricalMapping};
use super::timestamp::is_timestamp;


/// Tokens accepted in a BINARY column (compared in lower case).
pub const BINARY_TOKENS: [&str; 8] = [
    "0", "1", "true", "false", "yes", "no", "y", "n",
];


/// Classifies the values of a column.
///
/// Only non-empty trimmed values are considered.
/// The checks run in the following order and the first match wins:
///
/// 1. [`DataType::Binary`]: at most two distinct values,
///    all of them in [`BINARY_TOKENS`] (case-insensitive).
/// 2. [`DataType::Numerical`]: at least 80% of the values parse as `f64`.
/// 3. [`DataType::Timestamp`]: at least 80% of the values match
///    one of the [timestamp patterns](super::timestamp::TIMESTAMP_PATTERNS).
/// 4. [`DataType::Categorical`]: between 2 and 20 distinct values
///    and at least two values per distinct value on average.
/// 5. [`DataType::Nominal`] otherwise.
///
/// A column without any non-empty value is [`DataType::Unknown`].
/// This function never fails.
pub fn classify<S>(values: &[S]) -> DataType
    where S: AsRef<str>
{
    let values = non_empty(values);

    if values.is_empty() {
        return DataType::Unknown;
    }

    if is_binary(&values) {
        DataType::Binary
    } else if is_numerical(&values) {
        DataType::Numerical
    } else if is_temporal(&values) {
        DataType::Timestamp
    } else if is_categorical(&values) {
        DataType::Categorical
    } else {
        DataType::Nominal
    }
}


/// Builds the categorical mapping of a column.
/// See [`CategoricalMapping`].
#[inline]
pub fn categorical_mapping<S>(values: &[S]) -> CategoricalMapping
    where S: AsRef<str>
{
    CategoricalMapping::from_values(values)
}


/// Returns `true` if `value` is a dotted-quad IPv4 address.
pub fn is_ip_address(value: &str) -> bool {
    let octets = value.trim().split('.').collect::<Vec<_>>();
    octets.len() == 4
        && octets.iter().all(|octet| {
            (1..=3).contains(&octet.len())
                && octet.bytes().all(|b| b.is_ascii_digit())
                && octet.parse::<u16>().is_ok_and(|n| n <= 255)
        })
}


/// Maps a BINARY token to `0` or `1`.
/// Unknown tokens map to `0`.
#[inline]
pub fn binary_to_int(value: &str) -> u8 {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => 1,
        _ => 0,
    }
}


/// 31-multiplier polynomial hash over the UTF-16 code units of `value`.
pub(crate) fn polynomial_hash(value: &str) -> i32 {
    value.encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}


fn non_empty<S: AsRef<str>>(values: &[S]) -> Vec<&str> {
    values.iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect()
}


fn is_binary(values: &[&str]) -> bool {
    let distinct = values.iter()
        .map(|v| v.to_lowercase())
        .collect::<HashSet<_>>();
    distinct.len() <= 2
        && distinct.iter().all(|v| BINARY_TOKENS.contains(&v.as_str()))
}


fn is_numerical(values: &[&str]) -> bool {
    let n_numeric = values.iter()
        .filter(|v| parse_numeric(v).is_some())
        .count();
    meets_ratio(n_numeric, values.len())
}


fn is_temporal(values: &[&str]) -> bool {
    let n_timestamp = values.iter()
        .filter(|v| is_timestamp(v))
        .count();
    meets_ratio(n_timestamp, values.len())
}


fn is_categorical(values: &[&str]) -> bool {
    let n_distinct = values.iter()
        .collect::<HashSet<_>>()
        .len();
    (MIN_CATEGORIES..=MAX_CATEGORIES).contains(&n_distinct)
        && values.len() >= n_distinct * MIN_CATEGORY_SUPPORT
}


#[inline(always)]
fn meets_ratio(hits: usize, total: usize) -> bool {
    hits as f64 / total as f64 >= TYPE_MATCH_RATIO
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_before_numerical() {
        assert_eq!(classify(&["0", "1", "1", "0"]), DataType::Binary);
        assert_eq!(classify(&["Yes", "no", "YES"]), DataType::Binary);
        assert_eq!(classify(&["1", "2", "1"]), DataType::Numerical);
    }

    #[test]
    fn three_binary_tokens_are_not_binary() {
        // Three distinct tokens, no number: falls through to categorical.
        let values = ["yes", "no", "y", "yes", "no", "y"];
        assert_eq!(classify(&values), DataType::Categorical);
    }

    #[test]
    fn empty_values_are_ignored() {
        assert_eq!(classify(&["", "  ", "3.5", "4"]), DataType::Numerical);
        assert_eq!(classify(&["", "  "]), DataType::Unknown);
        assert_eq!(classify::<&str>(&[]), DataType::Unknown);
    }

    #[test]
    fn ip_addresses() {
        assert!(is_ip_address("192.168.0.1"));
        assert!(is_ip_address(" 10.0.0.255 "));
        assert!(!is_ip_address("256.0.0.1"));
        assert!(!is_ip_address("1.2.3"));
        assert!(!is_ip_address("a.b.c.d"));
    }

    #[test]
    fn binary_tokens() {
        assert_eq!(binary_to_int("TRUE"), 1);
        assert_eq!(binary_to_int(" y "), 1);
        assert_eq!(binary_to_int("no"), 0);
        assert_eq!(binary_to_int("maybe"), 0);
    }

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(polynomial_hash(""), 0);
        assert_eq!(polynomial_hash("a"), 97);
        assert_eq!(polynomial_hash("ab"), 97 * 31 + 98);
    }
}
