//! This file provides some common functions
//! such as numeric cell parsing and label counting.
use std::collections::BTreeMap;


/// Parses a cell as `f64` after trimming.
/// Returns `None` for empty or non-numeric cells.
#[inline(always)]
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() { return None; }
    cell.parse::<f64>().ok()
}


/// Parses a cell as `f64`, degrading to `0.0` when it is not numeric.
#[inline(always)]
pub fn raw_numeric(cell: &str) -> f64 {
    parse_numeric(cell).unwrap_or(0f64)
}


/// Counts the occurrences of each label.
/// The map is ordered by label so that iteration is deterministic.
pub(crate) fn label_counts<'a, I>(labels: I) -> BTreeMap<&'a str, usize>
    where I: IntoIterator<Item = &'a str>
{
    let mut counter = BTreeMap::new();
    for label in labels {
        *counter.entry(label).or_insert(0_usize) += 1;
    }
    counter
}


/// Returns the most frequent label of `counts` with its count.
/// Ties go to the lexicographically smallest label
/// since `counts` is ordered by label.
pub(crate) fn majority<'a>(counts: &BTreeMap<&'a str, usize>)
    -> (&'a str, usize)
{
    let mut best: (&str, usize) = ("", 0);
    for (&label, &count) in counts.iter() {
        if count > best.1 { best = (label, count); }
    }
    best
}


/// Returns `base` if no name in `existing` equals it,
/// otherwise the first free name among `base (1)`, `base (2)`, ...
pub fn unique_name<S>(base: &str, existing: &[S]) -> String
    where S: AsRef<str>
{
    let taken = |name: &str| existing.iter().any(|e| e.as_ref() == name);

    let mut name = base.to_string();
    let mut counter = 1_usize;
    while taken(&name) {
        name = format!("{base} ({counter})");
        counter += 1;
    }
    name
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects() {
        assert_eq!(parse_numeric(" 3.5 "), Some(3.5));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(raw_numeric("abc"), 0.0);
    }

    #[test]
    fn unique_name_appends_counter() {
        let names = ["PC1", "PC1 (1)"];
        assert_eq!(unique_name("PC2", &names), "PC2");
        assert_eq!(unique_name("PC1", &names), "PC1 (2)");
    }

    #[test]
    fn majority_prefers_smallest_label_on_ties() {
        let counts = label_counts(["b", "a", "c", "b", "a"]);
        assert_eq!(majority(&counts), ("a", 2));
    }

    #[test]
    fn label_counts_are_sorted() {
        let counts = label_counts(["b", "a", "b"]);
        let keys = counts.keys().copied().collect::<Vec<_>>();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(counts["b"], 2);
    }
}
