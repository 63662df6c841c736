//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
//!
//! Every checker returns `Err` instead of panicking
//! since the inputs come straight from the hosting application.

use crate::{Dataset, Error, Result};


/// Check whether the dataset has at least one row.
#[inline(always)]
pub(crate) fn check_nonempty(dataset: &Dataset) -> Result<()> {
    if dataset.shape().0 == 0 {
        return Err(Error::EmptyDataset);
    }
    Ok(())
}


/// Check whether `index` names a column of `dataset`.
#[inline(always)]
pub(crate) fn check_column(dataset: &Dataset, index: usize) -> Result<()> {
    let n_columns = dataset.shape().1;
    if index >= n_columns {
        return Err(Error::ColumnOutOfRange { index, n_columns });
    }
    Ok(())
}


/// Check whether `lo <= hi` and both are finite.
#[inline(always)]
pub(crate) fn check_range(name: &'static str, lo: f64, hi: f64)
    -> Result<()>
{
    if !lo.is_finite() || !hi.is_finite() {
        return Err(Error::invalid(name, format!("[{lo}, {hi}] is not finite")));
    }
    if lo > hi {
        return Err(Error::invalid(name, format!("lower bound {lo} > upper bound {hi}")));
    }
    Ok(())
}


/// Check whether `value` is finite and strictly positive.
#[inline(always)]
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0f64) {
        return Err(Error::invalid(name, format!("must be positive, got {value}")));
    }
    Ok(())
}
