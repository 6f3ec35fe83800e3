//! Mamdani fuzzy inference engine.
//!
//! Maps crisp inputs to a crisp output through linguistic rules:
//!
//! - **Membership functions**: triangular and trapezoidal shapes over a
//!   bounded domain.
//! - **Linguistic variables**: a domain plus named fuzzy sets; fuzzifies a
//!   crisp value into label degrees, clamping out-of-range input.
//! - **Rule base**: IF-THEN rules with AND (min) / OR (max) antecedents,
//!   resolved against the variables when the system is built.
//! - **Inference**: clip-and-max aggregation, then centroid (or another
//!   configured method) defuzzification back to a score and a label.
//! - **Priority**: a ready-made task-priority model (deadline, importance,
//!   difficulty → priority) with batch evaluation and task ranking.
//!
//! # Architecture
//!
//! Systems are plain immutable values built once by
//! [`inference::FuzzySystemBuilder`] and passed explicitly to callers.
//! Every configuration error is reported by `build()`; evaluation is a
//! pure function of its inputs and can only fail with
//! [`FuzzyError::NoRuleFired`] under [`inference::NoFirePolicy::Strict`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on all data types.
//! - `parallel`: rayon-backed [`priority::PriorityEngine::evaluate_many`].
//! - `wasm`: `prioritize_task` export for JavaScript.

pub mod error;
pub mod inference;
pub mod membership;
pub mod priority;
pub mod rules;
pub mod variable;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FuzzyError, FuzzyResult};
