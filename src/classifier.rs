//! Defines the trait shared by the models that predict a label per row.
use crate::{Dataset, Result};
use crate::common::checker;


/// A trait that defines the behavior of a trained classifier.
/// You only need to implement `label_column` and `predict`.
pub trait Classifier {
    /// Index of the label column seen during training.
    fn label_column(&self) -> usize;


    /// Predicts the label of a single row.
    fn predict<S: AsRef<str>>(&self, row: &[S]) -> &str;


    /// Predicts the label of every row of `dataset`.
    fn predict_all(&self, dataset: &Dataset) -> Vec<String> {
        dataset.rows()
            .iter()
            .map(|row| self.predict(row.as_slice()).to_string())
            .collect()
    }


    /// Fraction of rows whose label column equals the prediction.
    /// Returns `0` for an empty dataset
    /// or a dataset without the label column.
    fn accuracy(&self, dataset: &Dataset) -> f64 {
        let (n_rows, n_cols) = dataset.shape();
        let label = self.label_column();
        if n_rows == 0 || label >= n_cols {
            return 0f64;
        }

        let correct = dataset.rows()
            .iter()
            .filter(|row| self.predict(row.as_slice()) == row[label])
            .count();
        correct as f64 / n_rows as f64
    }
}


impl Dataset {
    /// Returns a copy of this dataset with the predictions of `model`
    /// appended as a column named after `base`.
    ///
    /// The labels are numbered in the order they first appear
    /// in the label column (then among the predictions),
    /// and label `i` of `k` is written as `i / (k - 1)`,
    /// or `0` when there is a single label.
    pub fn with_classifier_column<C>(&self, model: &C, base: &str)
        -> Result<Self>
        where C: Classifier
    {
        let label = model.label_column();
        checker::check_column(self, label)?;

        let predictions = self.rows()
            .iter()
            .map(|row| model.predict(row.as_slice()))
            .collect::<Vec<_>>();

        let mut order: Vec<&str> = Vec::new();
        let labels = self.rows().iter().map(|row| row[label].as_str());
        for l in labels.chain(predictions.iter().copied()) {
            if !order.contains(&l) { order.push(l); }
        }

        let denom = order.len().saturating_sub(1) as f64;
        let values = predictions.iter()
            .map(|p| {
                let index = order.iter().position(|l| l == p).unwrap_or(0);
                if denom > 0f64 { index as f64 / denom } else { 0f64 }
            })
            .collect::<Vec<_>>();

        self.with_column(base, values)
    }
}
