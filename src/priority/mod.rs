//! Task prioritization on top of the fuzzy engine.
//!
//! Maps three crisp task attributes to a priority score in `[0, 100]` and
//! a linguistic label:
//!
//! | input | domain | labels |
//! |---|---|---|
//! | `deadline_days` | 0–30 days | close, moderate, far |
//! | `importance` | 0–10 | low, medium, high |
//! | `difficulty` | 0–10 | easy, moderate, hard |
//!
//! Output `priority` (0–100): very low, low, medium, high, very high.
//!
//! # Rule design
//!
//! The default rule base covers every input combination, so some rule
//! always fires. Each step nearer in deadline or higher in importance
//! raises the consequent by one label.
//!
//! With importance and difficulty fixed, a closer deadline never lowers
//! the score while each of them sits on a single full label (`[0, 3]`,
//! `5` or `[7, 10]`). Between labels, min/max centroid inference can dip
//! by less than [`DEADLINE_DIP_TOLERANCE`] points.
//!
//! # Usage
//!
//! ```
//! use u_fuzzy::priority::PriorityEngine;
//!
//! let engine = PriorityEngine::new().unwrap();
//! let result = engine.evaluate(3.0, 9.0, 7.0).unwrap();
//! assert_eq!(result.label, "very high");
//! assert!((result.score - 82.15).abs() <= 2.0);
//! assert!(!result.clamped);
//! ```

mod engine;
mod model;
mod ranking;
mod types;

pub use engine::PriorityEngine;
pub use model::{
    deadline_variable, default_rules, difficulty_variable, importance_variable,
    priority_variable, DEADLINE, DEADLINE_DIP_TOLERANCE, DIFFICULTY, IMPORTANCE, PRIORITY,
};
pub use ranking::{RankedTask, TaskRanker, TieBreaker};
pub use types::{InputDescription, PriorityResult, Task, TaskInputs};
