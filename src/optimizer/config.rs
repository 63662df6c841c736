use std::path::Path;
use std::fs;

use serde::{Serialize, Deserialize};

use crate::Result;
use crate::common::checker;
use crate::common::constants::DEFAULT_SEED;
use super::transform::Transform;


/// How coefficients without a caller-supplied value are initialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Initialization {
    /// Every unset coefficient takes `value`.
    Flat {
        /// The common value.
        value: f64,
    },
    /// Every unset coefficient is drawn uniformly from `[min, max]`.
    Random {
        /// Lower end of the range.
        min: f64,
        /// Upper end of the range.
        max: f64,
    },
}


impl Default for Initialization {
    fn default() -> Self {
        Self::Flat { value: 1f64 }
    }
}


/// Hyperparameters of [`SeparationOptimizer`](super::SeparationOptimizer).
///
/// Missing JSON fields take their default values:
/// ```text
/// learning_rate:     0.01
/// max_iterations:    100
/// tolerance:         1e-4
/// adaptive:          true
/// min_learning_rate: 1e-4
/// max_learning_rate: 1.0
/// coeff_min:         -1.0
/// coeff_max:         1.0
/// initialization:    { "type": "flat", "value": 1.0 }
/// transform:         "identity"
/// seed:              42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Initial step size.
    pub learning_rate: f64,
    /// Maximal number of steps.
    pub max_iterations: usize,
    /// Finite-difference perturbation and convergence threshold.
    pub tolerance: f64,
    /// Whether the step size adapts to the score.
    pub adaptive: bool,
    /// Smallest step size in adaptive mode.
    pub min_learning_rate: f64,
    /// Largest step size in adaptive mode.
    pub max_learning_rate: f64,
    /// Lower bound of every coefficient.
    pub coeff_min: f64,
    /// Upper bound of every coefficient.
    pub coeff_max: f64,
    /// Initialization of unset coefficients.
    pub initialization: Initialization,
    /// Function wrapped around the linear combination.
    pub transform: Transform,
    /// Seed for random initialization.
    pub seed: u64,
}


impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 100,
            tolerance: 1e-4,
            adaptive: true,
            min_learning_rate: 1e-4,
            max_learning_rate: 1f64,
            coeff_min: -1f64,
            coeff_max: 1f64,
            initialization: Initialization::default(),
            transform: Transform::default(),
            seed: DEFAULT_SEED,
        }
    }
}


impl OptimizerConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()?;
        Ok(config)
    }


    /// Reads a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }


    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }


    /// Checks the parameters.
    pub fn validate(&self) -> Result<()> {
        checker::check_positive("learning_rate", self.learning_rate)?;
        checker::check_positive("tolerance", self.tolerance)?;
        checker::check_positive("min_learning_rate", self.min_learning_rate)?;
        checker::check_range(
            "learning_rate_bounds", self.min_learning_rate, self.max_learning_rate
        )?;
        checker::check_range("coefficient_bounds", self.coeff_min, self.coeff_max)?;
        if let Initialization::Random { min, max } = self.initialization {
            checker::check_range("initialization", min, max)?;
        }
        if let Initialization::Flat { value } = self.initialization {
            checker::check_range("initialization", value, value)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = OptimizerConfig::from_json(
            r#"{ "max_iterations": 10, "transform": "arcsin" }"#
        ).unwrap();
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.transform, Transform::Asin);
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.initialization, Initialization::Flat { value: 1.0 });
    }

    #[test]
    fn json_round_trip() {
        let config = OptimizerConfig {
            initialization: Initialization::Random { min: -0.5, max: 0.5 },
            ..OptimizerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(OptimizerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = OptimizerConfig {
            coeff_min: 1.0,
            coeff_max: -1.0,
            ..OptimizerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
