//! Task-priority data types.

/// The three crisp attributes of a task.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskInputs {
    /// Days until the deadline (smaller is more urgent), `0..=30`.
    pub days_to_deadline: f64,
    /// Importance score, `0..=10`.
    pub importance: f64,
    /// Difficulty score, `0..=10`.
    pub difficulty: f64,
}

impl TaskInputs {
    pub fn new(days_to_deadline: f64, importance: f64, difficulty: f64) -> Self {
        Self {
            days_to_deadline,
            importance,
            difficulty,
        }
    }

    /// Values in the engine's positional input order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.days_to_deadline, self.importance, self.difficulty]
    }
}

/// Outcome of prioritizing one task.
///
/// `inputs` echoes the values actually evaluated, i.e. after clamping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityResult {
    /// Priority score in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    /// Display label: `very low`, `low`, `medium`, `high`, or `very high`.
    pub label: String,
    /// Clamped inputs.
    pub inputs: TaskInputs,
    /// Whether any caller value was outside its domain.
    pub clamped: bool,
}

/// A named task to be ranked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub name: String,
    pub inputs: TaskInputs,
}

impl Task {
    pub fn new(name: impl Into<String>, inputs: TaskInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

/// Dominant linguistic label of each input, e.g. `close / high / hard`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputDescription {
    pub deadline: String,
    pub importance: String,
    pub difficulty: String,
}

impl std::fmt::Display for InputDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "deadline:{} | importance:{} | difficulty:{}",
            self.deadline, self.importance, self.difficulty
        )
    }
}
