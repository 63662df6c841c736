use serde::{Serialize, Deserialize};

use crate::{Dataset, Error, Result};
use crate::common::checker;
use super::linalg::{self, dot};
use super::power_iteration::decompose;


/// Principal component model of a numeric matrix.
///
/// `components()[k]` is the `k`-th principal direction,
/// i.e., the `k`-th column of the component matrix `V`.
///
/// # Example
/// ```no_run
/// use tablelens::prelude::*;
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
/// let label = dataset.class_column();
/// let model = PcaModel::from_dataset(&dataset, label).unwrap();
/// let with_pcs = dataset.with_components(&model, 2).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcaModel {
    components: Vec<Vec<f64>>,
    singular_values: Vec<f64>,
    means: Vec<f64>,
    columns: Option<Vec<usize>>,
}


impl PcaModel {
    /// Fits the model to a row-major matrix.
    /// Fails if `matrix` has no rows, no columns or ragged rows.
    pub fn fit(matrix: &[Vec<f64>]) -> Result<Self> {
        let n_cols = match matrix.first() {
            Some(row) => row.len(),
            None => { return Err(Error::EmptyDataset); },
        };
        if n_cols == 0 {
            return Err(Error::NoFeatureColumns);
        }
        if let Some((row, cells)) = matrix.iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != n_cols)
        {
            return Err(Error::RaggedRow { row, expected: n_cols, got: cells.len() });
        }

        let means = linalg::column_means(matrix, n_cols);
        let centered = matrix.iter()
            .map(|row| {
                row.iter()
                    .zip(&means)
                    .map(|(x, m)| x - m)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let gram = linalg::gram(&centered, n_cols);
        let decomposition = decompose(&gram);

        Ok(Self {
            components: decomposition.components,
            singular_values: decomposition.singular_values,
            means,
            columns: None,
        })
    }


    /// Fits the model to every column of `dataset` but `label`.
    /// Cells that are not numeric count as `0`.
    pub fn from_dataset(dataset: &Dataset, label: Option<usize>)
        -> Result<Self>
    {
        checker::check_nonempty(dataset)?;
        if let Some(label) = label {
            checker::check_column(dataset, label)?;
        }

        let columns = dataset.feature_columns(label);
        if columns.is_empty() {
            return Err(Error::NoFeatureColumns);
        }

        let matrix = dataset.numeric_matrix(&columns)?;
        let mut model = Self::fit(&matrix)?;
        model.columns = Some(columns);
        Ok(model)
    }


    /// Number of components, equal to the number of input columns.
    #[inline]
    pub fn n_components(&self) -> usize {
        self.components.len()
    }


    /// Principal directions in deflation order.
    #[inline]
    pub fn components(&self) -> &[Vec<f64>] {
        &self.components[..]
    }


    /// Singular values in deflation order. Not sorted.
    #[inline]
    pub fn singular_values(&self) -> &[f64] {
        &self.singular_values[..]
    }


    /// Per-column means subtracted before the decomposition.
    #[inline]
    pub fn means(&self) -> &[f64] {
        &self.means[..]
    }


    /// Dataset columns the model was fitted on,
    /// if it was built by [`PcaModel::from_dataset`].
    #[inline]
    pub fn columns(&self) -> Option<&[usize]> {
        self.columns.as_deref()
    }


    /// Coordinate of the uncentered `row` along component `k`.
    /// Fails if `k` is not a component index
    /// or `row` does not have one value per fitted column.
    pub fn project(&self, row: &[f64], k: usize) -> Result<f64> {
        self.check_component(k)?;
        self.check_length("row", row.len())?;
        let value = row.iter()
            .zip(&self.means)
            .zip(&self.components[k])
            .map(|((x, m), v)| (x - m) * v)
            .sum::<f64>();
        Ok(value)
    }


    /// Projects every row onto the first `n_components` components.
    pub fn transform(&self, matrix: &[Vec<f64>], n_components: usize)
        -> Result<Vec<Vec<f64>>>
    {
        self.check_n_components(n_components)?;
        matrix.iter()
            .map(|row| {
                (0..n_components)
                    .map(|k| self.project(row, k))
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }


    /// Maps coordinates along the leading components back
    /// to the centered input space.
    pub fn reconstruct(&self, projections: &[f64]) -> Result<Vec<f64>> {
        self.check_n_components(projections.len())?;
        let n_cols = self.means.len();
        let mut centered = vec![0f64; n_cols];
        for (p, v) in projections.iter().zip(&self.components) {
            centered.iter_mut()
                .zip(v)
                .for_each(|(c, vj)| { *c += p * vj; });
        }
        Ok(centered)
    }


    /// `Σ_j x_j v_j` for an already centered row.
    pub fn project_centered(&self, centered: &[f64], k: usize) -> Result<f64> {
        self.check_component(k)?;
        self.check_length("centered", centered.len())?;
        Ok(dot(centered, &self.components[k]))
    }


    fn check_component(&self, k: usize) -> Result<()> {
        let n = self.components.len();
        if k >= n {
            return Err(Error::invalid(
                "k",
                format!("component index {k} is out of range ({n} components)"),
            ));
        }
        Ok(())
    }


    fn check_length(&self, name: &'static str, len: usize) -> Result<()> {
        let n = self.means.len();
        if len != n {
            return Err(Error::invalid(
                name,
                format!("expected {n} values, got {len}"),
            ));
        }
        Ok(())
    }


    fn check_n_components(&self, n_components: usize) -> Result<()> {
        let n = self.components.len();
        if n_components == 0 || n_components > n {
            return Err(Error::invalid(
                "n_components",
                format!("must be in [1, {n}], got {n_components}"),
            ));
        }
        Ok(())
    }
}


impl Dataset {
    /// Returns a copy of this dataset with the first `n_components`
    /// projections appended as `PC1`, `PC2`, ...
    ///
    /// `model` must have been built by [`PcaModel::from_dataset`]
    /// on a dataset with the same columns.
    pub fn with_components(&self, model: &PcaModel, n_components: usize)
        -> Result<Self>
    {
        let columns = model.columns()
            .ok_or_else(|| Error::invalid("model", "not fitted on a dataset"))?;
        let matrix = self.numeric_matrix(columns)?;
        let projected = model.transform(&matrix, n_components)?;

        let mut dataset = self.clone();
        for k in 0..n_components {
            let values = projected.iter()
                .map(|row| row[k])
                .collect::<Vec<_>>();
            dataset = dataset.with_column(&format!("PC{}", k + 1), values)?;
        }
        Ok(dataset)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_rejects_empty_and_ragged() {
        assert!(matches!(PcaModel::fit(&[]), Err(Error::EmptyDataset)));
        let ragged = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(PcaModel::fit(&ragged), Err(Error::RaggedRow { .. })));
    }

    #[test]
    fn single_row_has_zero_singular_values() {
        let model = PcaModel::fit(&[vec![3.0, 4.0]]).unwrap();
        assert_eq!(model.means(), &[3.0, 4.0]);
        assert!(model.singular_values().iter().all(|&s| s == 0.0));
        assert_eq!(model.project(&[3.0, 4.0], 0).unwrap(), 0.0);
    }

    #[test]
    fn n_components_is_checked() {
        let model = PcaModel::fit(&[vec![1.0], vec![2.0]]).unwrap();
        assert!(model.transform(&[vec![1.0]], 2).is_err());
        assert!(model.transform(&[vec![1.0]], 0).is_err());
    }

    #[test]
    fn invalid_projections_are_errors() {
        let model = PcaModel::fit(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert!(model.project(&[1.0, 2.0], 2).is_err());
        assert!(model.project(&[1.0], 0).is_err());
        assert!(model.project_centered(&[1.0, 2.0, 3.0], 1).is_err());
        assert!(model.reconstruct(&[]).is_err());
        assert!(model.reconstruct(&[1.0, 2.0, 3.0]).is_err());
        assert!(model.transform(&[vec![1.0, 2.0, 3.0]], 1).is_err());
    }
}
