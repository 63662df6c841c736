//! Gini impurity and the search for the best split.
use std::collections::BTreeMap;

use crate::Dataset;
use crate::common::constants::GAIN_TOLERANCE;
use crate::common::utils::{label_counts, parse_numeric};
use super::split_rule::Splitter;


/// Returns the Gini impurity `1 - Σ p²` of `labels`.
/// An empty iterator has impurity `0`.
pub fn gini<'a, I>(labels: I) -> f64
    where I: IntoIterator<Item = &'a str>
{
    gini_impurity(&label_counts(labels))
}


/// Gini impurity of a label histogram.
#[inline]
pub(super) fn gini_impurity(counts: &BTreeMap<&str, usize>) -> f64 {
    let total = counts.values().sum::<usize>();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let sq = counts.values()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>();
    1f64 - sq
}


/// The best split found on a partition.
#[derive(Debug, Clone)]
pub(super) struct BestSplit {
    pub(super) rule: Splitter,
    pub(super) gain: f64,
}


/// Returns the split with the strictly greatest positive gain.
/// Columns are scanned in the given order and thresholds ascending,
/// so ties keep the first candidate found.
pub(super) fn best_split(
    dataset: &Dataset,
    label: usize,
    features: &[usize],
    indices: &[usize],
) -> Option<BestSplit>
{
    let labels = indices.iter()
        .map(|&i| dataset.cell(i, label))
        .collect::<Vec<_>>();
    let parent_counts = label_counts(labels.iter().copied());
    let parent = gini_impurity(&parent_counts);
    let n_total = indices.len() as f64;

    let mut best: Option<BestSplit> = None;
    let mut best_gain = GAIN_TOLERANCE;

    for &feature in features {
        // Numeric cells sorted by value; the rest (`NaN` included)
        // always stay right.
        let mut numeric = indices.iter()
            .zip(&labels)
            .filter_map(|(&i, &y)| {
                parse_numeric(dataset.cell(i, feature))
                    .filter(|v| !v.is_nan())
                    .map(|v| (v, y))
            })
            .collect::<Vec<_>>();
        numeric.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left = BTreeMap::new();
        let mut right = parent_counts.clone();
        let mut n_left = 0_usize;

        let mut k = 0;
        while k < numeric.len() {
            let threshold = numeric[k].0;
            while k < numeric.len() && numeric[k].0 == threshold {
                let y = numeric[k].1;
                *left.entry(y).or_insert(0_usize) += 1;
                if let Some(c) = right.get_mut(y) {
                    *c -= 1;
                    if *c == 0 { right.remove(y); }
                }
                n_left += 1;
                k += 1;
            }

            let n_right = indices.len() - n_left;
            if n_right == 0 { break; }

            let lp = n_left as f64 / n_total;
            let rp = n_right as f64 / n_total;
            let weighted = lp * gini_impurity(&left)
                + rp * gini_impurity(&right);
            let gain = parent - weighted;

            if gain > best_gain {
                best_gain = gain;
                let name = &dataset.headers()[feature];
                best = Some(BestSplit {
                    rule: Splitter::new(feature, name, threshold),
                    gain,
                });
            }
        }
    }

    best
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gini_of_pure_and_even_sets() {
        assert_eq!(gini(["A", "A", "A"]), 0.0);
        assert!((gini(["A", "A", "B", "B"]) - 0.5).abs() < 1e-12);
        assert_eq!(gini(Vec::<&str>::new()), 0.0);
    }

    #[test]
    fn best_split_picks_separating_threshold() {
        let data = Dataset::new(
            ["x", "noise", "y"],
            [
                ["1", "9", "a"],
                ["3", "1", "a"],
                ["6", "8", "b"],
                ["8", "2", "b"],
            ],
        ).unwrap();
        let split = best_split(&data, 2, &[0, 1], &[0, 1, 2, 3]).unwrap();
        assert_eq!(split.rule.feature, 0);
        assert_eq!(split.rule.threshold, 3.0);
        assert!((split.gain - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nan_cells_are_not_thresholds() {
        let data = Dataset::new(
            ["x", "y"],
            [["1", "a"], ["2", "a"], ["NaN", "b"], ["8", "b"], ["9", "b"]],
        ).unwrap();
        let split = best_split(&data, 1, &[0], &[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(split.rule.threshold, 2.0);
    }

    #[test]
    fn no_split_on_constant_column() {
        let data = Dataset::new(
            ["x", "y"],
            [["1", "a"], ["1", "b"]],
        ).unwrap();
        assert!(best_split(&data, 1, &[0], &[0, 1]).is_none());
    }
}
