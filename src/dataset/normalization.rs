//! Column-wise rescaling of numeric columns.
use serde::{Serialize, Deserialize};

use crate::common::utils::parse_numeric;
use super::dataset_struct::Dataset;


/// Normalization rule applied by [`Dataset::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `(x - min) / (max - min)`, or `0` if the column is constant.
    MinMax,
    /// `(x - mean) / std` with the sample standard deviation,
    /// or `0` if the deviation vanishes.
    ZScore,
}


/// Per-column moments of the non-empty numeric cells.
struct Moments {
    min: f64,
    max: f64,
    mean: f64,
    std: f64,
}


impl Moments {
    /// Returns `None` if some non-empty cell is not numeric.
    fn from_cells<'a, I>(cells: I) -> Option<Self>
        where I: Iterator<Item = &'a str> + Clone
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0f64;
        let mut count = 0_usize;
        for cell in cells.clone().filter(|c| !c.trim().is_empty()) {
            let value = parse_numeric(cell)?;
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }

        let mean = if count > 0 { sum / count as f64 } else { 0f64 };
        let std = if count > 1 {
            let sq = cells.filter_map(parse_numeric)
                .map(|x| (x - mean).powi(2))
                .sum::<f64>();
            (sq / (count - 1) as f64).sqrt()
        } else {
            0f64
        };

        Some(Self { min, max, mean, std })
    }


    fn rescale(&self, kind: Normalization, value: f64) -> f64 {
        match kind {
            Normalization::MinMax => {
                let range = self.max - self.min;
                if range != 0f64 { (value - self.min) / range } else { 0f64 }
            },
            Normalization::ZScore => {
                if self.std != 0f64 { (value - self.mean) / self.std } else { 0f64 }
            },
        }
    }
}


impl Dataset {
    /// Returns a normalized copy of this dataset.
    ///
    /// A column is rescaled only if every non-empty cell is numeric.
    /// Empty cells, non-numeric columns and the `label` column
    /// are copied unchanged.
    /// The original dataset is left as is,
    /// so keeping it around is enough to undo the normalization.
    pub fn normalize(&self, kind: Normalization, label: Option<usize>)
        -> Self
    {
        let n_columns = self.headers.len();
        let moments = (0..n_columns)
            .map(|j| {
                if Some(j) == label { return None; }
                Moments::from_cells(self.rows.iter().map(|row| row[j].as_str()))
            })
            .collect::<Vec<_>>();

        let rows = self.rows.iter()
            .map(|row| {
                row.iter()
                    .zip(&moments)
                    .map(|(cell, m)| {
                        match (m, parse_numeric(cell)) {
                            (Some(m), Some(x)) => m.rescale(kind, x).to_string(),
                            _ => cell.clone(),
                        }
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(?kind, columns = n_columns, "normalized dataset");
        Self { headers: self.headers.clone(), rows }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Dataset {
        Dataset::new(
            ["x", "name", "class"],
            [["2", "a", "1"], ["4", "b", "2"], ["", "c", "3"], ["6", "d", "1"]],
        ).unwrap()
    }

    #[test]
    fn minmax_maps_to_unit_interval() {
        let data = toy().normalize(Normalization::MinMax, Some(2));
        let x = data.column(0).unwrap();
        assert_eq!(x, vec!["0", "0.5", "", "1"]);
        assert_eq!(data.column(1).unwrap(), toy().column(1).unwrap());
        assert_eq!(data.column(2).unwrap(), toy().column(2).unwrap());
    }

    #[test]
    fn zscore_uses_sample_deviation() {
        let data = toy().normalize(Normalization::ZScore, Some(2));
        let x = data.column(0).unwrap()
            .into_iter()
            .filter_map(parse_numeric)
            .collect::<Vec<_>>();
        assert_eq!(x, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn constant_column_becomes_zero() {
        let data = Dataset::new(["x"], [["3"], ["3"]]).unwrap()
            .normalize(Normalization::MinMax, None);
        assert_eq!(data.column(0).unwrap(), vec!["0", "0"]);
    }
}
