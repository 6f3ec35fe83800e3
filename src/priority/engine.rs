//! Task-priority engine.

use super::model::{
    deadline_variable, default_rules, difficulty_variable, importance_variable, priority_variable,
};
use super::types::{InputDescription, PriorityResult, TaskInputs};
use crate::error::FuzzyResult;
use crate::inference::{display_label, FuzzySystem, Inference, InferenceConfig, InferenceTrace};

/// Evaluates task priority with the standard variables and rule base.
///
/// Construct once and reuse; the engine is immutable and `Send + Sync`.
///
/// # Examples
///
/// ```
/// use u_fuzzy::priority::PriorityEngine;
///
/// let engine = PriorityEngine::new().unwrap();
///
/// // Far deadline, unimportant: lowest priority band.
/// let idle = engine.evaluate(30.0, 0.0, 0.0).unwrap();
/// assert_eq!(idle.label, "very low");
///
/// // Out-of-range values are clamped, not rejected.
/// let clamped = engine.evaluate(-4.0, 12.0, 5.0).unwrap();
/// assert_eq!(clamped.inputs.days_to_deadline, 0.0);
/// assert_eq!(clamped.inputs.importance, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityEngine {
    system: FuzzySystem,
}

impl PriorityEngine {
    /// Builds the engine with the default inference configuration.
    pub fn new() -> FuzzyResult<Self> {
        Self::with_config(InferenceConfig::default())
    }

    /// Builds the engine with a custom inference configuration.
    pub fn with_config(config: InferenceConfig) -> FuzzyResult<Self> {
        let system = FuzzySystem::builder()
            .with_input(deadline_variable()?)
            .with_input(importance_variable()?)
            .with_input(difficulty_variable()?)
            .with_output(priority_variable()?)
            .with_rule_base(default_rules())
            .with_config(config)
            .build()?;
        Ok(Self { system })
    }

    /// The underlying fuzzy system.
    pub fn system(&self) -> &FuzzySystem {
        &self.system
    }

    /// Prioritizes one task.
    ///
    /// Inputs outside `[0, 30]` / `[0, 10]` / `[0, 10]` are clamped.
    pub fn evaluate(
        &self,
        days_to_deadline: f64,
        importance: f64,
        difficulty: f64,
    ) -> FuzzyResult<PriorityResult> {
        self.evaluate_inputs(&TaskInputs::new(days_to_deadline, importance, difficulty))
    }

    /// Prioritizes one task given as [`TaskInputs`].
    pub fn evaluate_inputs(&self, inputs: &TaskInputs) -> FuzzyResult<PriorityResult> {
        let inference = self.system.infer(&inputs.as_array())?;
        Ok(to_result(&inference))
    }

    /// Prioritizes many tasks independently.
    ///
    /// With the `parallel` feature, tasks are evaluated on the rayon pool.
    /// Results are in input order; the first error aborts the batch.
    pub fn evaluate_many(&self, tasks: &[TaskInputs]) -> FuzzyResult<Vec<PriorityResult>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            tasks
                .par_iter()
                .map(|t| self.evaluate_inputs(t))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            tasks.iter().map(|t| self.evaluate_inputs(t)).collect()
        }
    }

    /// Full intermediate trace for one task.
    pub fn explain(&self, inputs: &TaskInputs) -> FuzzyResult<InferenceTrace> {
        self.system.infer_detailed(&inputs.as_array())
    }

    /// Dominant label of each input, e.g. `close / high / hard`.
    pub fn describe(&self, inputs: &TaskInputs) -> InputDescription {
        let label = |idx: usize, value: f64| {
            self.system.inputs()[idx]
                .dominant_label(value)
                .unwrap_or_default()
                .to_string()
        };
        InputDescription {
            deadline: label(0, inputs.days_to_deadline),
            importance: label(1, inputs.importance),
            difficulty: label(2, inputs.difficulty),
        }
    }
}

fn to_result(inference: &Inference) -> PriorityResult {
    let [days_to_deadline, importance, difficulty] = [0, 1, 2].map(|i| inference.inputs[i].1);
    PriorityResult {
        score: round2(inference.score),
        label: display_label(&inference.label),
        inputs: TaskInputs {
            days_to_deadline,
            importance,
            difficulty,
        },
        clamped: inference.clamped,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
