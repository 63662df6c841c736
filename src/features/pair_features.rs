use crate::{Dataset, Error, Result};
use crate::common::{checker, utils};
use super::format_cell;


impl Dataset {
    /// Returns a copy of this dataset with two columns per pair of
    /// `dim`-dimensional points read from `columns`.
    ///
    /// The `k`-th pair takes point `p` from `columns[k·dim .. (k+1)·dim]`
    /// and point `q` from the next `dim` columns,
    /// for every `k` with `(k + 2)·dim <= columns.len()`.
    ///
    /// - `{dim}D_Slope(p)/(q)` is `Π p[d] / q[d]`,
    ///   where a factor with `q[d] = 0` is `0`.
    /// - `{dim}D_Distance(p)-(q)` is `Σ p[d]·p[d+1] - q[d]·q[d+1]`
    ///   over even `d` with `d + 1 < dim`.
    ///   With `absolute`, the column is `{dim}D_AbsDistance(p)-(q)`
    ///   and holds the absolute value.
    ///
    /// Cells are written with four decimals.
    /// A row with a non-numeric coordinate gets `0.0000` in both columns.
    pub fn with_slope_distance(
        &self,
        columns: &[usize],
        dim: usize,
        absolute: bool,
    ) -> Result<Self>
    {
        if dim == 0 {
            return Err(Error::invalid("dim", "points need at least one coordinate"));
        }
        if columns.len() < 2 * dim {
            return Err(Error::invalid(
                "columns",
                format!("need at least {} columns for {dim}-D points, got {}",
                    2 * dim, columns.len()),
            ));
        }
        for &j in columns {
            checker::check_column(self, j)?;
        }

        let prefix = if absolute { "Abs" } else { "" };
        let mut dataset = self.clone();
        let mut start = 0;
        while start + 2 * dim <= columns.len() {
            let p = &columns[start..start + dim];
            let q = &columns[start + dim..start + 2 * dim];
            let p_name = self.joined_names(p);
            let q_name = self.joined_names(q);

            let (slopes, distances): (Vec<_>, Vec<_>) = self.rows()
                .iter()
                .map(|row| {
                    match slope_distance(row, p, q) {
                        Some((slope, distance)) => {
                            let distance = if absolute { distance.abs() } else { distance };
                            (format_cell(slope), format_cell(distance))
                        },
                        None => (format_cell(0f64), format_cell(0f64)),
                    }
                })
                .unzip();

            dataset = dataset.with_column(
                &format!("{dim}D_Slope({p_name})/({q_name})"), slopes
            )?;
            dataset = dataset.with_column(
                &format!("{dim}D_{prefix}Distance({p_name})-({q_name})"),
                distances,
            )?;
            start += dim;
        }
        Ok(dataset)
    }


    fn joined_names(&self, columns: &[usize]) -> String {
        columns.iter()
            .map(|&j| self.headers()[j].as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}


fn slope_distance(row: &[String], p: &[usize], q: &[usize])
    -> Option<(f64, f64)>
{
    let p = p.iter()
        .map(|&j| utils::parse_numeric(&row[j]))
        .collect::<Option<Vec<_>>>()?;
    let q = q.iter()
        .map(|&j| utils::parse_numeric(&row[j]))
        .collect::<Option<Vec<_>>>()?;

    let slope = p.iter()
        .zip(&q)
        .map(|(a, b)| if *b != 0f64 { a / b } else { 0f64 })
        .product::<f64>();

    let distance = (0..p.len().saturating_sub(1))
        .step_by(2)
        .map(|d| p[d] * p[d + 1] - q[d] * q[d + 1])
        .sum::<f64>();

    Some((slope, distance))
}
