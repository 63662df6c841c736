//! Summary statistics shown next to a table.
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::common::utils::parse_numeric;
use super::dataset_struct::Dataset;


/// Minimum and maximum of a fully numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRange {
    /// Column name.
    pub name: String,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}


/// Case count, class count and per-column ranges of a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of rows.
    pub n_cases: usize,
    /// Number of distinct class labels,
    /// `None` if the dataset has no class column.
    pub n_classes: Option<usize>,
    /// Ranges of the columns whose cells all parse as numbers.
    /// The class column is excluded.
    pub ranges: Vec<ColumnRange>,
}


impl Dataset {
    /// Computes the summary statistics.
    /// The class column is found by [`Dataset::class_column`].
    pub fn stats(&self) -> DatasetStats {
        let class = self.class_column();
        let n_classes = class.map(|j| {
            let mut labels = self.rows.iter()
                .map(|row| row[j].as_str())
                .collect::<Vec<_>>();
            labels.sort_unstable();
            labels.dedup();
            labels.len()
        });

        let ranges = if self.rows.is_empty() {
            Vec::new()
        } else {
            self.feature_columns(class)
                .into_iter()
                .filter_map(|j| {
                    let values = self.rows.iter()
                        .map(|row| parse_numeric(&row[j]))
                        .collect::<Option<Vec<f64>>>()?;
                    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    Some(ColumnRange { name: self.headers[j].clone(), min, max })
                })
                .collect()
        };

        DatasetStats { n_cases: self.rows.len(), n_classes, ranges }
    }
}


impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Case Count: {}", self.n_cases)?;
        match self.n_classes {
            Some(k) => writeln!(f, "Class Count: {k}")?,
            None => writeln!(f, "Class column not found.")?,
        }
        for range in self.ranges.iter() {
            writeln!(f, "{}: Min={}, Max={}", range.name, range.min, range.max)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_skip_class_and_text_columns() {
        let data = Dataset::new(
            ["x", "name", "CLASS"],
            [["2", "a", "p"], ["-1", "b", "q"], ["5", "c", "p"]],
        ).unwrap();
        let stats = data.stats();
        assert_eq!(stats.n_cases, 3);
        assert_eq!(stats.n_classes, Some(2));
        assert_eq!(
            stats.ranges,
            vec![ColumnRange { name: "x".into(), min: -1.0, max: 5.0 }]
        );
        assert_eq!(
            stats.to_string(),
            "Case Count: 3\nClass Count: 2\nx: Min=-1, Max=5\n"
        );
    }

    #[test]
    fn stats_without_class_column() {
        let data = Dataset::new(["x"], [["1"]]).unwrap();
        assert_eq!(data.stats().n_classes, None);
        assert!(data.stats().to_string().contains("Class column not found."));
    }
}
