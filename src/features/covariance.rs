use serde::{Serialize, Deserialize};

use crate::{Dataset, Error, Result};
use crate::common::{checker, utils};


/// Sample covariance (`n - 1` denominator) of two equally long slices.
/// Returns `0` for fewer than two values.
pub fn covariance(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 { return 0f64; }

    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;
    let sum = x[..n].iter()
        .zip(&y[..n])
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>();
    sum / (n - 1) as f64
}


/// The covariance between a column and the target column
/// of [`Dataset::covariance_ranking`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovariancePair {
    /// Column index.
    pub column: usize,
    /// Column name.
    pub name: String,
    /// Sample covariance with the target column.
    pub covariance: f64,
}


impl Dataset {
    /// Sample covariance of two columns over the rows
    /// where both cells are numeric.
    pub fn column_covariance(&self, a: usize, b: usize) -> Result<f64> {
        checker::check_column(self, a)?;
        checker::check_column(self, b)?;

        let (x, y): (Vec<f64>, Vec<f64>) = self.rows()
            .iter()
            .filter_map(|row| {
                let x = utils::parse_numeric(&row[a])?;
                let y = utils::parse_numeric(&row[b])?;
                Some((x, y))
            })
            .unzip();
        Ok(covariance(&x, &y))
    }


    /// Covariance matrix of `columns`.
    /// Entry `(i, j)` is the covariance of `columns[i]` and `columns[j]`.
    pub fn covariance_matrix(&self, columns: &[usize]) -> Result<Vec<Vec<f64>>> {
        if columns.is_empty() {
            return Err(Error::NoColumnsSelected);
        }
        columns.iter()
            .map(|&a| {
                columns.iter()
                    .map(|&b| self.column_covariance(a, b))
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }


    /// Ranks every column except `target` and `label`
    /// by covariance with `target`, largest first.
    /// Ties keep the column order.
    pub fn covariance_ranking(&self, target: usize, label: Option<usize>)
        -> Result<Vec<CovariancePair>>
    {
        checker::check_column(self, target)?;

        let mut pairs = (0..self.shape().1)
            .filter(|&j| j != target && Some(j) != label)
            .map(|j| {
                let covariance = self.column_covariance(target, j)?;
                let name = self.headers()[j].clone();
                Ok(CovariancePair { column: j, name, covariance })
            })
            .collect::<Result<Vec<_>>>()?;

        pairs.sort_by(|a, b| b.covariance.total_cmp(&a.covariance));
        Ok(pairs)
    }


    /// Returns a copy of this dataset with the columns in `order`.
    /// `order` must be a permutation of the column indices.
    pub fn reorder_columns(&self, order: &[usize]) -> Result<Self> {
        let n_columns = self.shape().1;
        let mut seen = vec![false; n_columns];
        for &j in order {
            checker::check_column(self, j)?;
            if seen[j] {
                return Err(Error::invalid("order", format!("column {j} appears twice")));
            }
            seen[j] = true;
        }
        if order.len() != n_columns {
            return Err(Error::invalid(
                "order",
                format!("expected {n_columns} columns, got {}", order.len()),
            ));
        }

        let headers = order.iter().map(|&j| self.headers()[j].clone());
        let rows = self.rows()
            .iter()
            .map(|row| order.iter().map(|&j| row[j].clone()).collect::<Vec<_>>());
        Dataset::new(headers, rows)
    }


    /// Moves the columns ranked by [`Dataset::covariance_ranking`]
    /// to the front in ranking order.
    /// `target` and `label` follow in their original order.
    pub fn sorted_by_covariance(&self, target: usize, label: Option<usize>)
        -> Result<Self>
    {
        let ranking = self.covariance_ranking(target, label)?;
        let ranked = ranking.iter()
            .map(|pair| pair.column)
            .collect::<Vec<_>>();
        let rest = (0..self.shape().1)
            .filter(|j| !ranked.contains(j))
            .collect::<Vec<_>>();

        let order = [ranked, rest].concat();
        self.reorder_columns(&order)
    }
}
