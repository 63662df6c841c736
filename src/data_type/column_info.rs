//! Per-column metadata and value conversions.
use serde::{Serialize, Deserialize};

use crate::common::constants::HASH_MODULUS;
use crate::common::utils::parse_numeric;
use super::{DataType, CategoricalMapping};
use super::detector::{self, binary_to_int, polynomial_hash};
use super::timestamp::epoch_seconds;


/// Data type and conversion metadata for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    name: String,
    data_type: DataType,
    mapping: Option<CategoricalMapping>,
}


impl ColumnInfo {
    /// Construct a column of type `data_type` without categorical mapping.
    pub fn new<T: ToString>(name: T, data_type: DataType) -> Self {
        Self { name: name.to_string(), data_type, mapping: None, }
    }


    /// Construct a CATEGORICAL column with the given mapping.
    pub fn categorical<T: ToString>(name: T, mapping: CategoricalMapping)
        -> Self
    {
        Self {
            name: name.to_string(),
            data_type: DataType::Categorical,
            mapping: Some(mapping),
        }
    }


    /// Classifies `values` and attaches a mapping
    /// if the column turns out to be CATEGORICAL.
    pub fn infer<T, S>(name: T, values: &[S]) -> Self
        where T: ToString,
              S: AsRef<str>,
    {
        match detector::classify(values) {
            DataType::Categorical => {
                let mapping = detector::categorical_mapping(values);
                Self::categorical(name, mapping)
            },
            data_type => Self::new(name, data_type),
        }
    }


    /// Column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Inferred data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }


    /// Categorical mapping, if any.
    #[inline]
    pub fn mapping(&self) -> Option<&CategoricalMapping> {
        self.mapping.as_ref()
    }


    /// Returns `true` if the values are re-encoded through a mapping.
    #[inline]
    pub fn is_transformed(&self) -> bool {
        self.mapping.is_some()
    }


    /// Converts `value` to its numeric representation.
    ///
    /// | type        | conversion                          | fallback |
    /// |-------------|-------------------------------------|----------|
    /// | NUMERICAL   | `f64` parse                         | `0.0`    |
    /// | BINARY      | token table                         | `0.0`    |
    /// | CATEGORICAL | mapping lookup                      | `0.0`    |
    /// | TIMESTAMP   | seconds since the epoch (UTC)       | `0.0`    |
    /// | NOMINAL     | string hash modulo 1000 (lossy)     | -        |
    /// | LABEL       | string hash modulo 1000 (lossy)     | -        |
    /// | UNKNOWN     | -                                   | `0.0`    |
    ///
    /// Empty values always convert to `0.0`.
    pub fn to_numeric(&self, value: &str) -> f64 {
        let value = value.trim();
        if value.is_empty() { return 0f64; }

        match self.data_type {
            DataType::Numerical => parse_numeric(value).unwrap_or(0f64),
            DataType::Binary => binary_to_int(value) as f64,
            DataType::Categorical => {
                self.mapping.as_ref()
                    .and_then(|mapping| mapping.code(value))
                    .map_or(0f64, |code| code as f64)
            },
            DataType::Timestamp => epoch_seconds(value).unwrap_or(0f64),
            DataType::Nominal | DataType::Label => {
                let hash = polynomial_hash(value).unsigned_abs();
                (hash % HASH_MODULUS) as f64
            },
            DataType::Unknown => 0f64,
        }
    }


    /// Maps a numeric representation back to the original string.
    /// Only CATEGORICAL columns are invertible;
    /// `value` is rounded to the nearest code.
    pub fn original_value(&self, value: f64) -> Option<&str> {
        if !self.data_type.is_invertible() || !value.is_finite() {
            return None;
        }
        let code = value.round();
        if code < 0f64 { return None; }

        self.mapping.as_ref()
            .and_then(|mapping| mapping.category(code as usize))
    }


    /// Column name followed by the type tag, e.g. `age [NUM]`.
    #[inline]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.data_type.tag())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_round_trip() {
        let values = ["red", "blue", "red", "green", "blue", "green"];
        let info = ColumnInfo::infer("color", &values);
        assert_eq!(info.data_type(), DataType::Categorical);
        assert!(info.is_transformed());

        assert_eq!(info.to_numeric("blue"), 0.0);
        assert_eq!(info.to_numeric("green"), 1.0);
        assert_eq!(info.to_numeric("red"), 2.0);
        assert_eq!(info.to_numeric("purple"), 0.0);

        assert_eq!(info.original_value(1.2), Some("green"));
        assert_eq!(info.original_value(2.0), Some("red"));
        assert_eq!(info.original_value(7.0), None);
        assert_eq!(info.original_value(-3.0), None);
    }

    #[test]
    fn non_categorical_is_not_invertible() {
        let info = ColumnInfo::new("x", DataType::Numerical);
        assert_eq!(info.to_numeric("2.5"), 2.5);
        assert_eq!(info.to_numeric("oops"), 0.0);
        assert_eq!(info.original_value(2.5), None);
        assert!(!info.is_transformed());
    }

    #[test]
    fn nominal_hash_is_bounded() {
        let info = ColumnInfo::new("id", DataType::Nominal);
        for value in ["a", "192.168.0.1", "some much longer identifier"] {
            let x = info.to_numeric(value);
            assert!((0.0..1000.0).contains(&x));
            assert_eq!(x, info.to_numeric(value));
        }
        assert_eq!(info.to_numeric("a"), 97.0);
    }

    #[test]
    fn timestamp_and_binary() {
        let ts = ColumnInfo::new("when", DataType::Timestamp);
        assert_eq!(ts.to_numeric("1970-01-01 00:01:00"), 60.0);
        assert_eq!(ts.to_numeric("yesterday"), 0.0);

        let bin = ColumnInfo::new("flag", DataType::Binary);
        assert_eq!(bin.to_numeric("Yes"), 1.0);
        assert_eq!(bin.to_numeric("n"), 0.0);
    }

    #[test]
    fn display_name_has_tag() {
        let info = ColumnInfo::new("class", DataType::Label);
        assert_eq!(info.display_name(), "class [LABEL]");
    }
}
