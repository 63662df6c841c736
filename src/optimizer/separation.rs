use rand::prelude::*;
use rand_distr::Uniform;

use crate::{Dataset, Error, Result};
use crate::common::checker;
use crate::common::constants::{
    LEARNING_RATE_INCREASE,
    LEARNING_RATE_DECAY,
};
use super::{
    config::{OptimizerConfig, Initialization},
    objective::SeparationObjective,
    state::{OptimizerState, Step},
    transform::Transform,
};


/// Finite-difference gradient ascent of the Fisher separation score.
///
/// Each step
/// 1. adapts the step size (if enabled):
///    `×1.05` when the score beat the previous one, `×0.95` otherwise,
///    kept within `[min_learning_rate, max_learning_rate]`;
/// 2. estimates `∂score/∂c_j` by a forward difference of size `tolerance`;
/// 3. moves `c_j += learning_rate · g_j` and clamps it
///    to `[coeff_min, coeff_max]`.
///
/// The search stops after `max_iterations` steps
/// or once no coefficient moves by more than `tolerance`.
///
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
///
/// let optimizer = SeparationOptimizer::init(&dataset)
///     .columns(vec![0, 1, 2])
///     .label_column(4)
///     .transform(Transform::Sin)
///     .max_iterations(200);
///
/// let coefficients = optimizer.run(&[None, Some(0.5), None]).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SeparationOptimizer<'a> {
    dataset: &'a Dataset,
    columns: Vec<usize>,
    label: Option<usize>,
    config: OptimizerConfig,
}


impl<'a> SeparationOptimizer<'a> {
    /// Initialize the optimizer with the default [`OptimizerConfig`].
    /// The label column defaults to the column named `class`.
    pub fn init(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            columns: Vec::new(),
            label: dataset.class_column(),
            config: OptimizerConfig::default(),
        }
    }


    /// Set the columns combined linearly.
    #[inline]
    pub fn columns(mut self, columns: Vec<usize>) -> Self {
        self.columns = columns;
        self
    }


    /// Set the column holding the class labels.
    #[inline]
    pub fn label_column(mut self, label: usize) -> Self {
        self.label = Some(label);
        self
    }


    /// Replace every hyperparameter at once.
    #[inline]
    pub fn config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }


    /// Set the function wrapped around the combination.
    /// Default is [`Transform::Identity`].
    #[inline]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.config.transform = transform;
        self
    }


    /// Set the initial step size. Default is `0.01`.
    #[inline]
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }


    /// Set the maximal number of steps. Default is `100`.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }


    /// Set the perturbation / convergence threshold. Default is `1e-4`.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }


    /// Turn the adaptive step size on or off. Default is `true`.
    #[inline]
    pub fn adaptive(mut self, adaptive: bool) -> Self {
        self.config.adaptive = adaptive;
        self
    }


    /// Set the range of the adaptive step size.
    /// Default is `[1e-4, 1]`.
    #[inline]
    pub fn learning_rate_bounds(mut self, min: f64, max: f64) -> Self {
        self.config.min_learning_rate = min;
        self.config.max_learning_rate = max;
        self
    }


    /// Set the range of every coefficient. Default is `[-1, 1]`.
    #[inline]
    pub fn coefficient_bounds(mut self, min: f64, max: f64) -> Self {
        self.config.coeff_min = min;
        self.config.coeff_max = max;
        self
    }


    /// Set how unset coefficients are initialized.
    /// Default is a flat `1.0`.
    #[inline]
    pub fn initialization(mut self, initialization: Initialization) -> Self {
        self.config.initialization = initialization;
        self
    }


    /// Set the seed of the random initialization. Default is `42`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }


    /// The current hyperparameters.
    #[inline]
    pub fn current_config(&self) -> &OptimizerConfig {
        &self.config
    }


    /// Validates the settings and precomputes the score function.
    pub fn objective(&self) -> Result<SeparationObjective> {
        self.config.validate()?;
        let label = self.label
            .ok_or_else(|| Error::UnknownColumn("class".to_string()))?;
        for &j in self.columns.iter() {
            checker::check_column(self.dataset, j)?;
        }
        SeparationObjective::new(
            self.dataset, &self.columns, label, self.config.transform
        )
    }


    /// Builds the state before the first step.
    /// `initial[j]` is kept if set, otherwise initialized
    /// as configured.
    pub fn initial_state(&self, initial: &[Option<f64>])
        -> Result<OptimizerState>
    {
        if initial.len() != self.columns.len() {
            return Err(Error::invalid(
                "initial",
                format!(
                    "expected {} coefficients, got {}",
                    self.columns.len(), initial.len()
                ),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let coefficients = match self.config.initialization {
            Initialization::Flat { value } => {
                initial.iter()
                    .map(|c| c.unwrap_or(value))
                    .collect()
            },
            Initialization::Random { min, max } => {
                let uniform = Uniform::new_inclusive(min, max);
                initial.iter()
                    .map(|c| c.unwrap_or_else(|| uniform.sample(&mut rng)))
                    .collect()
            },
        };

        let mut learning_rate = self.config.learning_rate;
        if self.config.adaptive {
            learning_rate = learning_rate.clamp(
                self.config.min_learning_rate,
                self.config.max_learning_rate,
            );
        }
        Ok(OptimizerState::new(coefficients, learning_rate))
    }


    /// Performs one step from `state`.
    /// This method does not modify `self` nor `state`.
    pub fn step(&self, objective: &SeparationObjective, state: &OptimizerState)
        -> Step
    {
        let config = &self.config;
        let tolerance = config.tolerance;

        let score = objective.score(&state.coefficients);

        let mut learning_rate = state.learning_rate;
        if config.adaptive {
            learning_rate = if score > state.previous_score {
                (learning_rate * LEARNING_RATE_INCREASE)
                    .min(config.max_learning_rate)
            } else {
                (learning_rate * LEARNING_RATE_DECAY)
                    .max(config.min_learning_rate)
            };
        }

        let mut shifted = state.coefficients.clone();
        let gradient = (0..shifted.len())
            .map(|j| {
                shifted[j] += tolerance;
                let g = (objective.score(&shifted) - score) / tolerance;
                shifted[j] = state.coefficients[j];
                if g.is_nan() { 0f64 } else { g }
            })
            .collect::<Vec<_>>();

        let mut converged = true;
        let coefficients = state.coefficients.iter()
            .zip(&gradient)
            .map(|(&c, &g)| {
                let next = (c + learning_rate * g)
                    .clamp(config.coeff_min, config.coeff_max);
                if (next - c).abs() > tolerance { converged = false; }
                next
            })
            .collect::<Vec<_>>();

        tracing::trace!(
            iteration = state.iteration + 1,
            score,
            learning_rate,
            converged,
            "separation step"
        );

        let state = OptimizerState {
            coefficients,
            learning_rate,
            iteration: state.iteration + 1,
            previous_score: score,
        };
        Step { state, score, converged }
    }


    /// Runs the search and returns the coefficients,
    /// in the order of the selected columns.
    #[inline]
    pub fn run(&self, initial: &[Option<f64>]) -> Result<Vec<f64>> {
        self.run_with(initial, |_| {})
    }


    /// Same as [`SeparationOptimizer::run`],
    /// but calls `observer` after every step.
    pub fn run_with<F>(&self, initial: &[Option<f64>], mut observer: F)
        -> Result<Vec<f64>>
        where F: FnMut(&Step)
    {
        let objective = self.objective()?;
        let mut state = self.initial_state(initial)?;

        for _ in 0..self.config.max_iterations {
            let step = self.step(&objective, &state);
            observer(&step);

            let converged = step.converged;
            state = step.state;
            if converged { break; }
        }

        tracing::debug!(
            iterations = state.iteration,
            learning_rate = state.learning_rate,
            "separation search finished"
        );
        Ok(state.coefficients)
    }
}
