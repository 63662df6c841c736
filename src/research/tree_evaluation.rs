//! Accuracy estimates for trained classifiers.
use crate::{Classifier, Dataset, DecisionTreeBuilder, Error, Result};
use crate::common::checker;
use super::cross_validation::{CrossValidation, train_test_split};


/// Trains a tree on a shuffled `train_ratio` share of the rows
/// and returns its accuracy on the remaining rows.
#[inline]
pub fn holdout_accuracy(
    dataset: &Dataset,
    label: usize,
    train_ratio: f64,
    seed: u64,
) -> Result<f64>
{
    holdout_accuracy_with(dataset, train_ratio, seed, |train| {
        DecisionTreeBuilder::new(train)
            .label_column(label)
            .build()?
            .produce(train)
    })
}


/// Returns the mean test accuracy of a tree over `n_folds` shuffled folds.
#[inline]
pub fn kfold_accuracy(
    dataset: &Dataset,
    label: usize,
    n_folds: usize,
    seed: u64,
) -> Result<f64>
{
    kfold_accuracy_with(dataset, n_folds, seed, |train| {
        DecisionTreeBuilder::new(train)
            .label_column(label)
            .build()?
            .produce(train)
    })
}


/// Trains `fit` on a shuffled `train_ratio` share of the rows
/// and returns the accuracy of the result on the remaining rows.
pub fn holdout_accuracy_with<F, C>(
    dataset: &Dataset,
    train_ratio: f64,
    seed: u64,
    fit: F,
) -> Result<f64>
    where F: Fn(&Dataset) -> Result<C>,
          C: Classifier,
{
    checker::check_nonempty(dataset)?;
    if !(0f64 < train_ratio && train_ratio < 1f64) {
        return Err(Error::invalid(
            "train_ratio",
            format!("must be in (0, 1), got {train_ratio}"),
        ));
    }

    let (train, test) = train_test_split(dataset, train_ratio, seed);
    if test.shape().0 == 0 {
        return Err(Error::invalid("train_ratio", "the test set is empty"));
    }

    let f = fit(&train)?;
    let accuracy = f.accuracy(&test);

    tracing::debug!(train_ratio, accuracy, "hold-out evaluation");
    Ok(accuracy)
}


/// Returns the mean test accuracy of `fit` over `n_folds` shuffled folds.
pub fn kfold_accuracy_with<F, C>(
    dataset: &Dataset,
    n_folds: usize,
    seed: u64,
    fit: F,
) -> Result<f64>
    where F: Fn(&Dataset) -> Result<C>,
          C: Classifier,
{
    let n_rows = dataset.shape().0;
    if n_folds < 2 || n_folds > n_rows {
        return Err(Error::invalid(
            "n_folds",
            format!("must be in [2, {n_rows}], got {n_folds}"),
        ));
    }

    let cv = CrossValidation::new(dataset)
        .n_folds(n_folds)
        .seed(seed)
        .shuffle();

    let mut total = 0f64;
    for (fold, (train, test)) in cv.enumerate() {
        let f = fit(&train)?;
        let accuracy = f.accuracy(&test);
        tracing::debug!(fold, accuracy, "fold evaluated");
        total += accuracy;
    }

    Ok(total / n_folds as f64)
}
