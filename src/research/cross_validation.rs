use rand::prelude::*;
use colored::Colorize;

use crate::Dataset;
use crate::common::constants::DEFAULT_SEED;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test datasets for cross validation.
///
/// The rows are cut into `n_folds` consecutive blocks of
/// `n_rows / n_folds` rows; the last block also takes the remainder.
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
/// let cv = CrossValidation::new(&dataset)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let f = DecisionTreeBuilder::new(&train)
///         .build()
///         .unwrap()
///         .produce(&train)
///         .unwrap();
///     println!("[train: {}] [test: {}]", f.accuracy(&train), f.accuracy(&test));
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    dataset: &'a Dataset,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(dataset: &'a Dataset) -> Self {
        let n_rows = dataset.shape().0;
        let ix = (0..n_rows).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: DEFAULT_SEED,
            verbose: false,
            dataset,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `42.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the rows.
    /// By default, `CrossValidation` does not shuffle the rows.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the row range of the `i`th test fold.
    #[inline]
    pub fn fold_range(&self, i: usize) -> (usize, usize) {
        let n_rows = self.ix.len();
        let fold_size = n_rows / self.n_folds.max(1);
        let start = i * fold_size;
        let end = if i + 1 == self.n_folds { n_rows } else { start + fold_size };
        (start, end)
    }


    /// Returns the training/test datasets for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Dataset, Dataset) {
        let (start, end) = self.fold_range(i);
        self.dataset.split(&self.ix, start, end)
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Dataset, Dataset);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}


/// Shuffles the rows with `seed` and returns
/// the first `⌊ratio · n_rows⌋` rows as training set
/// and the rest as test set.
pub fn train_test_split(dataset: &Dataset, ratio: f64, seed: u64)
    -> (Dataset, Dataset)
{
    let n_rows = dataset.shape().0;
    let mut ix = (0..n_rows).collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    ix.shuffle(&mut rng);

    let train_size = ((n_rows as f64 * ratio) as usize).min(n_rows);
    dataset.split(&ix, train_size, n_rows)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy(n: usize) -> Dataset {
        let rows = (0..n).map(|i| vec![i.to_string()]);
        Dataset::new(["id"], rows).unwrap()
    }

    #[test]
    fn last_fold_takes_remainder() {
        let data = toy(7);
        let cv = CrossValidation::new(&data).n_folds(3);
        assert_eq!(cv.fold_range(0), (0, 2));
        assert_eq!(cv.fold_range(1), (2, 4));
        assert_eq!(cv.fold_range(2), (4, 7));
    }

    #[test]
    fn folds_partition_rows() {
        let data = toy(10);
        let mut seen = Vec::new();
        for (train, test) in CrossValidation::new(&data).n_folds(4).shuffle() {
            assert_eq!(train.shape().0 + test.shape().0, 10);
            seen.extend(test.rows().iter().map(|r| r[0].clone()));
        }
        seen.sort_by_key(|id| id.parse::<usize>().unwrap());
        let expected = (0..10).map(|i| i.to_string()).collect::<Vec<_>>();
        assert_eq!(seen, expected);
    }

    #[test]
    fn split_sizes_follow_ratio() {
        let data = toy(10);
        let (train, test) = train_test_split(&data, 0.7, 42);
        assert_eq!(train.shape().0, 7);
        assert_eq!(test.shape().0, 3);
    }
}
