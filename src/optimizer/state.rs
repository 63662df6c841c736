use serde::{Serialize, Deserialize};


/// Everything the optimizer carries from one step to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerState {
    /// Current coefficients, one per selected column.
    pub coefficients: Vec<f64>,
    /// Current step size.
    pub learning_rate: f64,
    /// Number of steps taken so far.
    pub iteration: usize,
    /// Score of the coefficients before the last step.
    /// `-∞` before the first step.
    pub previous_score: f64,
}


impl OptimizerState {
    /// State before the first step.
    pub fn new(coefficients: Vec<f64>, learning_rate: f64) -> Self {
        Self {
            coefficients,
            learning_rate,
            iteration: 0,
            previous_score: f64::NEG_INFINITY,
        }
    }
}


/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The state after the step.
    pub state: OptimizerState,
    /// Score of the coefficients the step started from.
    pub score: f64,
    /// `true` if no coefficient moved by more than the tolerance.
    pub converged: bool,
}
