//! Thresholds and limits used across the crate.

/// Fraction of values that must parse for a NUMERICAL / TIMESTAMP column.
pub const TYPE_MATCH_RATIO:        f64 = 0.8;
/// Minimal number of distinct values of a CATEGORICAL column.
pub const MIN_CATEGORIES:        usize = 2;
/// Maximal number of distinct values of a CATEGORICAL column.
pub const MAX_CATEGORIES:        usize = 20;
/// Each category must appear this many times on average.
pub const MIN_CATEGORY_SUPPORT:  usize = 2;
/// NOMINAL / LABEL values are hashed into `[0, HASH_MODULUS)`.
pub const HASH_MODULUS:            u32 = 1_000;

/// Maximal number of power iterations per principal component.
pub const POWER_ITERATIONS:      usize = 100;
/// Power iteration stops once the L1 step falls below this value.
pub const POWER_TOLERANCE:         f64 = 1e-10;
/// Residuals shorter than this are treated as the zero vector.
pub const DEGENERATE_NORM:         f64 = 1e-12;

/// Split gains at or below this value are treated as zero.
pub const GAIN_TOLERANCE:          f64 = 1e-12;

/// Score reported when every class has zero within-class variance.
pub const PERFECT_SEPARATION:      f64 = f64::MAX;
/// Learning-rate growth factor after an improving step.
pub const LEARNING_RATE_INCREASE:  f64 = 1.05;
/// Learning-rate decay factor after a non-improving step.
pub const LEARNING_RATE_DECAY:     f64 = 0.95;

/// Default seed used for shuffling rows.
pub const DEFAULT_SEED:            u64 = 42;

/// Default number of trees in a random forest.
pub const DEFAULT_N_TREES:         usize = 10;
/// Default bootstrap sample size relative to the training rows.
pub const DEFAULT_SAMPLE_RATIO:    f64 = 0.7;
