//! Column type inference.
//!
//! Every column of a [`Dataset`](crate::Dataset) is a list of strings.
//! This module decides what those strings *mean*
//! (numbers, categories, timestamps, identifiers, ...)
//! and how to turn each of them into an `f64`
//! so that the numeric algorithms can consume any column.
//!
//! The detection rules are simple thresholds;
//! see [`classify`] for the exact order.

/// Provides the detection rules.
pub mod detector;
/// Provides the reversible mapping for categorical columns.
pub mod categorical;
/// Provides the per-column metadata and conversions.
pub mod column_info;
/// Provides the timestamp patterns.
pub mod timestamp;


pub use detector::{classify, categorical_mapping, is_ip_address};
pub use categorical::CategoricalMapping;
pub use column_info::ColumnInfo;


use serde::{Serialize, Deserialize};
use std::fmt;


/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Integer or floating-point values.
    Numerical,
    /// A small set of repeated strings, mapped to integers.
    Categorical,
    /// Free-form strings such as IDs or IP addresses.
    Nominal,
    /// Two-valued tokens such as `0/1`, `true/false` or `yes/no`.
    Binary,
    /// Date/time values.
    Timestamp,
    /// The class/target column.
    Label,
    /// Only empty values were seen.
    Unknown,
}


impl DataType {
    /// Every variant, in declaration order.
    pub const ALL: [DataType; 7] = [
        DataType::Numerical,
        DataType::Categorical,
        DataType::Nominal,
        DataType::Binary,
        DataType::Timestamp,
        DataType::Label,
        DataType::Unknown,
    ];


    /// Short tag appended to column names, e.g. `[NUM]`.
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Numerical   => "[NUM]",
            Self::Categorical => "[CAT]",
            Self::Nominal     => "[NOM]",
            Self::Binary      => "[BIN]",
            Self::Timestamp   => "[TIME]",
            Self::Label       => "[LABEL]",
            Self::Unknown     => "[?]",
        }
    }


    /// Human readable description of the type.
    #[inline]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Numerical   => "Numerical (Integer/Float)",
            Self::Categorical => "Categorical (Limited Categories)",
            Self::Nominal     => "Nominal (Text/ID)",
            Self::Binary      => "Binary (0/1, True/False)",
            Self::Timestamp   => "Timestamp (Date/Time)",
            Self::Label       => "Label (Class/Target)",
            Self::Unknown     => "Unknown",
        }
    }


    /// Returns `true` if a numeric value of this type
    /// can be mapped back to the original string.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        matches!(self, Self::Categorical)
    }
}


impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numerical   => "NUMERICAL",
            Self::Categorical => "CATEGORICAL",
            Self::Nominal     => "NOMINAL",
            Self::Binary      => "BINARY",
            Self::Timestamp   => "TIMESTAMP",
            Self::Label       => "LABEL",
            Self::Unknown     => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_categorical_is_invertible() {
        let invertible = DataType::ALL.iter()
            .filter(|t| t.is_invertible())
            .collect::<Vec<_>>();
        assert_eq!(invertible, vec![&DataType::Categorical]);
    }

    #[test]
    fn serde_uses_upper_case_names() {
        let json = serde_json::to_string(&DataType::Timestamp).unwrap();
        assert_eq!(json, "\"TIMESTAMP\"");
        let back: DataType = serde_json::from_str("\"BINARY\"").unwrap();
        assert_eq!(back, DataType::Binary);
    }
}
