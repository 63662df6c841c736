use crate::{Dataset, Error, Result};
use crate::common::checker;
use crate::common::constants::PERFECT_SEPARATION;
use crate::common::utils::parse_numeric;
use super::transform::Transform;


/// Returns the Fisher separation score of `values`
/// grouped by the class ids `classes`.
///
/// ```text
/// score = Σ_c n_c (m_c - m)² / Σ_c Σ_{i ∈ c} (x_i - m_c)²
/// ```
/// A within-class scatter of exactly zero yields
/// [`PERFECT_SEPARATION`].
/// An empty input scores `0`.
pub fn fisher_score(values: &[f64], classes: &[usize]) -> f64 {
    let n = values.len();
    if n == 0 { return 0f64; }

    let n_classes = classes.iter().copied().max().map_or(0, |k| k + 1);
    let mut sums = vec![0f64; n_classes];
    let mut counts = vec![0_usize; n_classes];
    for (&x, &c) in values.iter().zip(classes) {
        sums[c] += x;
        counts[c] += 1;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let class_means = sums.iter()
        .zip(&counts)
        .map(|(&s, &k)| if k > 0 { s / k as f64 } else { 0f64 })
        .collect::<Vec<_>>();

    let between = class_means.iter()
        .zip(&counts)
        .map(|(&m, &k)| k as f64 * (m - mean).powi(2))
        .sum::<f64>();
    let within = values.iter()
        .zip(classes)
        .map(|(&x, &c)| (x - class_means[c]).powi(2))
        .sum::<f64>();

    if within == 0f64 {
        return PERFECT_SEPARATION;
    }
    between / within
}


/// The score as a function of the coefficients.
///
/// The selected cells are parsed once;
/// cells that are not numeric count as `0`.
#[derive(Debug, Clone)]
pub struct SeparationObjective {
    values: Vec<Vec<f64>>,
    classes: Vec<usize>,
    transform: Transform,
}


impl SeparationObjective {
    /// Precomputes the selected columns and the class of every row.
    /// Classes are numbered in the order they first appear.
    pub fn new(
        dataset: &Dataset,
        columns: &[usize],
        label: usize,
        transform: Transform,
    ) -> Result<Self>
    {
        checker::check_nonempty(dataset)?;
        checker::check_column(dataset, label)?;
        if columns.is_empty() {
            return Err(Error::NoColumnsSelected);
        }
        let values = dataset.numeric_matrix(columns)?;

        let mut names: Vec<&str> = Vec::new();
        let classes = dataset.rows()
            .iter()
            .map(|row| {
                let y = row[label].as_str();
                match names.iter().position(|&name| name == y) {
                    Some(c) => c,
                    None => {
                        names.push(y);
                        names.len() - 1
                    },
                }
            })
            .collect::<Vec<_>>();

        Ok(Self { values, classes, transform })
    }


    /// Number of selected columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.values.first().map_or(0, |row| row.len())
    }


    /// The transform wrapped around the combination.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }


    /// `T(Σ_j c_j x_j)` for every row.
    pub fn project(&self, coefficients: &[f64]) -> Vec<f64> {
        self.values.iter()
            .map(|row| {
                let sum = row.iter()
                    .zip(coefficients)
                    .map(|(x, c)| c * x)
                    .sum::<f64>();
                self.transform.apply(sum)
            })
            .collect()
    }


    /// Score of `coefficients`.
    #[inline]
    pub fn score(&self, coefficients: &[f64]) -> f64 {
        fisher_score(&self.project(coefficients), &self.classes)
    }
}


impl Dataset {
    /// Returns a copy of this dataset with the column
    /// `T(Σ_j c_j x_j)` appended.
    ///
    /// The column is named `Linear Combination: c * name + ...`.
    /// A row with a cell that is not numeric gets `NaN`.
    pub fn with_linear_combination(
        &self,
        columns: &[usize],
        coefficients: &[f64],
        transform: Transform,
    ) -> Result<Self>
    {
        if columns.is_empty() {
            return Err(Error::NoColumnsSelected);
        }
        if columns.len() != coefficients.len() {
            return Err(Error::invalid(
                "coefficients",
                format!(
                    "expected {} coefficients, got {}",
                    columns.len(), coefficients.len()
                ),
            ));
        }
        for &j in columns {
            checker::check_column(self, j)?;
        }

        let terms = columns.iter()
            .zip(coefficients)
            .map(|(&j, c)| format!("{c} * {}", self.headers()[j]))
            .collect::<Vec<_>>();
        let name = format!("Linear Combination: {}", terms.join(" + "));

        let values = self.rows()
            .iter()
            .map(|row| {
                let sum = columns.iter()
                    .zip(coefficients)
                    .map(|(&j, c)| {
                        parse_numeric(&row[j])
                            .map(|x| c * x)
                    })
                    .sum::<Option<f64>>();
                sum.map_or(f64::NAN, |s| transform.apply(s))
            })
            .collect::<Vec<_>>();

        self.with_column(&name, values)
    }
}
