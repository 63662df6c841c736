use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::{Dataset, Error, Result};
use crate::common::{checker, utils};


/// A value interval of one column in which every row has the same label.
///
/// Both ends are inclusive and are values that occur in the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PureRegion {
    /// Column index.
    pub column: usize,
    /// Column name.
    pub name: String,
    /// Smallest value of the region.
    pub start: f64,
    /// Largest value of the region.
    pub end: f64,
    /// The label shared by the rows of the region.
    pub label: String,
    /// Number of rows in the region.
    pub count: usize,
    /// `count` as a percentage of the rows labeled `label`.
    pub class_coverage: f64,
    /// `count` as a percentage of all rows.
    pub dataset_coverage: f64,
}


impl PureRegion {
    /// Returns `true` if `value` lies in `[start, end]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }


    /// Returns `true` if `row` falls in this region.
    #[inline]
    pub fn covers<S: AsRef<str>>(&self, row: &[S], label: usize) -> bool {
        row[label].as_ref() == self.label
            && utils::parse_numeric(row[self.column].as_ref())
                .is_some_and(|v| self.contains(v))
    }


    fn width(&self) -> f64 {
        self.end - self.start
    }


    fn is_within(&self, other: &Self) -> bool {
        self.column == other.column
            && self.label == other.label
            && self.start >= other.start
            && self.end <= other.end
            && self.count <= other.count
    }
}


impl fmt::Display for PureRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Attribute: {name}, Pure Region: {start:.2} <= {name} <= {end:.2}, \
             Class: {label}, Count: {count} \
             ({class:.2}% of class, {data:.2}% of dataset)",
            name = self.name,
            start = self.start,
            end = self.end,
            label = self.label,
            count = self.count,
            class = self.class_coverage,
            data = self.dataset_coverage,
        )
    }
}


impl Dataset {
    /// Finds the maximal pure regions of every column but `label`.
    ///
    /// Non-numeric cells are ignored.
    /// A region is kept if it is not contained in a larger region
    /// of the same column and label,
    /// and if it covers at least `threshold` percent of its class
    /// or of the dataset.
    /// Regions are ordered by row count, then width, largest first.
    pub fn pure_regions(&self, label: usize, threshold: f64)
        -> Result<Vec<PureRegion>>
    {
        checker::check_nonempty(self)?;
        checker::check_column(self, label)?;
        if !(0f64..=100f64).contains(&threshold) {
            return Err(Error::invalid(
                "threshold",
                format!("must be a percentage in [0, 100], got {threshold}"),
            ));
        }

        let labels = self.column(label)?;
        let class_sizes = utils::label_counts(labels.iter().copied());
        let n_rows = self.shape().0;

        let mut regions = self.feature_columns(Some(label))
            .into_par_iter()
            .flat_map_iter(|j| {
                self.column_regions(j, &labels, &class_sizes, n_rows)
            })
            .collect::<Vec<_>>();

        regions.sort_by(|a, b| {
            b.count.cmp(&a.count)
                .then(b.width().total_cmp(&a.width()))
                .then(a.column.cmp(&b.column))
                .then(a.start.total_cmp(&b.start))
        });

        let mut kept: Vec<PureRegion> = Vec::new();
        for region in regions {
            if !kept.iter().any(|other| region.is_within(other)) {
                kept.push(region);
            }
        }
        kept.retain(|r| {
            r.class_coverage >= threshold || r.dataset_coverage >= threshold
        });

        tracing::debug!(regions = kept.len(), threshold, "found pure regions");
        Ok(kept)
    }


    /// Indices of the rows covered by some region of
    /// [`Dataset::pure_regions`], in ascending order.
    pub fn easy_cases(&self, label: usize, threshold: f64)
        -> Result<Vec<usize>>
    {
        let regions = self.pure_regions(label, threshold)?;
        let rows = self.rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| regions.iter().any(|r| r.covers(row, label)))
            .map(|(i, _)| i)
            .collect();
        Ok(rows)
    }


    /// Returns the rows that are not easy cases.
    pub fn without_easy_cases(&self, label: usize, threshold: f64)
        -> Result<Self>
    {
        let easy = self.easy_cases(label, threshold)?
            .into_iter()
            .collect::<BTreeSet<_>>();
        let rest = (0..self.shape().0)
            .filter(|i| !easy.contains(i))
            .collect::<Vec<_>>();
        Ok(self.subset(&rest))
    }


    /// For each distinct value taken as a start,
    /// the longest pure run of distinct values from there.
    fn column_regions(
        &self,
        column: usize,
        labels: &[&str],
        class_sizes: &BTreeMap<&str, usize>,
        n_rows: usize,
    ) -> Vec<PureRegion>
    {
        let mut cells = self.rows()
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                utils::parse_numeric(&row[column])
                    .filter(|v| !v.is_nan())
                    .map(|v| (v, labels[i]))
            })
            .collect::<Vec<_>>();
        cells.sort_by(|a, b| a.0.total_cmp(&b.0));

        // (value, label when every row agrees, number of rows)
        let mut groups: Vec<(f64, Option<&str>, usize)> = Vec::new();
        for (value, label) in cells {
            match groups.last_mut() {
                Some(last) if last.0 == value => {
                    if last.1 != Some(label) { last.1 = None; }
                    last.2 += 1;
                },
                _ => groups.push((value, Some(label), 1)),
            }
        }

        let mut regions = Vec::new();
        for s in 0..groups.len() {
            let Some(label) = groups[s].1 else { continue; };
            let run = groups[s..].iter()
                .take_while(|g| g.1 == Some(label))
                .collect::<Vec<_>>();
            let count = run.iter().map(|g| g.2).sum::<usize>();
            let end = run.last().map_or(groups[s].0, |g| g.0);

            let class_size = class_sizes.get(label).copied().unwrap_or(count);
            regions.push(PureRegion {
                column,
                name: self.headers()[column].clone(),
                start: groups[s].0,
                end,
                label: label.to_string(),
                count,
                class_coverage: 100f64 * count as f64 / class_size as f64,
                dataset_coverage: 100f64 * count as f64 / n_rows as f64,
            });
        }
        regions
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicated_values_with_two_labels_break_runs() {
        let rows = vec![
            vec!["1", "a"],
            vec!["2", "a"],
            vec!["2", "b"],
            vec!["3", "b"],
        ];
        let data = Dataset::new(["x", "class"], rows).unwrap();
        let regions = data.pure_regions(1, 0.0).unwrap();

        let spans = regions.iter()
            .map(|r| (r.start, r.end, r.label.as_str(), r.count))
            .collect::<Vec<_>>();
        assert_eq!(spans, vec![(1.0, 1.0, "a", 1), (3.0, 3.0, "b", 1)]);
    }


    #[test]
    fn covers_checks_value_and_label() {
        let region = PureRegion {
            column: 0,
            name: "x".to_string(),
            start: 1.0,
            end: 3.0,
            label: "a".to_string(),
            count: 3,
            class_coverage: 100.0,
            dataset_coverage: 50.0,
        };
        assert!(region.covers(&["3", "a"], 1));
        assert!(!region.covers(&["3", "b"], 1));
        assert!(!region.covers(&["4", "a"], 1));
        assert!(!region.covers(&["?", "a"], 1));
        assert_eq!(
            region.to_string(),
            "Attribute: x, Pure Region: 1.00 <= x <= 3.00, Class: a, \
             Count: 3 (100.00% of class, 50.00% of dataset)"
        );
    }
}
