//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::common::utils::parse_numeric;


/// The output of the function `split` of [`Splitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The value is at most the threshold.
    Left,
    /// The value exceeds the threshold or is not numeric.
    Right,
}


/// The predicate "value ≤ threshold" on a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// Column index.
    pub feature: usize,
    /// Column name, used for rendering.
    pub name: String,
    /// Split threshold.
    pub threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, name: &str, threshold: f64) -> Self {
        Self { feature, name: name.to_string(), threshold, }
    }


    /// Defines the splitting.
    /// Cells that are not numeric go to the right.
    #[inline]
    pub fn split<S: AsRef<str>>(&self, row: &[S]) -> LR {
        let value = row.get(self.feature)
            .and_then(|cell| parse_numeric(cell.as_ref()));

        match value {
            Some(v) if v <= self.threshold => LR::Left,
            _ => LR::Right,
        }
    }


    /// Returns the question asked at this branch.
    #[inline]
    pub fn question(&self) -> String {
        format!("Is {} <= {}?", self.name, self.threshold)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_goes_right() {
        let rule = Splitter::new(1, "x", 2.5);
        assert_eq!(rule.split(&["a", "2.5"]), LR::Left);
        assert_eq!(rule.split(&["a", "3"]), LR::Right);
        assert_eq!(rule.split(&["a", "n/a"]), LR::Right);
        assert_eq!(rule.split(&["a", ""]), LR::Right);
        assert_eq!(rule.question(), "Is x <= 2.5?");
    }
}
