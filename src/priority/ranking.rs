//! Ranking of tasks by fuzzy priority.

use std::cmp::Ordering;

use super::engine::PriorityEngine;
use super::types::{PriorityResult, Task};
use crate::error::FuzzyResult;

/// Strategy for ordering tasks whose keys all tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// Keep the original order (stable sort).
    #[default]
    PreserveOrder,

    /// Alphabetical by task name, then original index.
    ByName,
}

/// A task together with its evaluated priority.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTask<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Index of the task in the input slice.
    pub index: usize,
    pub task: &'a Task,
    pub result: PriorityResult,
}

/// Orders tasks from highest to lowest priority.
///
/// Keys are compared in sequence; a later key is only consulted when the
/// earlier ones are equal:
///
/// 1. priority score (higher first)
/// 2. days to deadline (sooner first)
/// 3. importance (higher first)
/// 4. the configured [`TieBreaker`]
///
/// Scores are already rounded to two decimals, so near-identical tasks
/// compare equal on the first key. Every key uses [`f64::total_cmp`],
/// which keeps the ordering total.
///
/// # Examples
///
/// ```
/// use u_fuzzy::priority::{PriorityEngine, Task, TaskInputs, TaskRanker};
///
/// let engine = PriorityEngine::new().unwrap();
/// let tasks = vec![
///     Task::new("Reading log", TaskInputs::new(20.0, 2.0, 1.0)),
///     Task::new("Math assignment", TaskInputs::new(2.0, 9.0, 8.0)),
///     Task::new("Science project", TaskInputs::new(9.0, 6.0, 6.0)),
/// ];
///
/// let ranked = TaskRanker::new().rank(&engine, &tasks).unwrap();
/// assert_eq!(ranked[0].task.name, "Math assignment");
/// assert_eq!(ranked[2].task.name, "Reading log");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskRanker {
    tie_breaker: TieBreaker,
}

impl TaskRanker {
    /// Creates a ranker that preserves input order on full ties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Evaluates and sorts all tasks.
    pub fn rank<'a>(
        &self,
        engine: &PriorityEngine,
        tasks: &'a [Task],
    ) -> FuzzyResult<Vec<RankedTask<'a>>> {
        let inputs: Vec<_> = tasks.iter().map(|t| t.inputs).collect();
        let results = engine.evaluate_many(&inputs)?;

        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| {
            let (ra, rb) = (&results[a], &results[b]);
            rb.score
                .total_cmp(&ra.score)
                .then_with(|| {
                    ra.inputs
                        .days_to_deadline
                        .total_cmp(&rb.inputs.days_to_deadline)
                })
                .then_with(|| rb.inputs.importance.total_cmp(&ra.inputs.importance))
                .then_with(|| match self.tie_breaker {
                    TieBreaker::PreserveOrder => Ordering::Equal,
                    TieBreaker::ByName => tasks[a].name.cmp(&tasks[b].name).then(a.cmp(&b)),
                })
        });

        let mut results: Vec<Option<PriorityResult>> = results.into_iter().map(Some).collect();
        Ok(indices
            .into_iter()
            .enumerate()
            .filter_map(|(pos, index)| {
                results[index].take().map(|result| RankedTask {
                    rank: pos + 1,
                    index,
                    task: &tasks[index],
                    result,
                })
            })
            .collect())
    }

    /// The `n` highest-priority tasks.
    pub fn top<'a>(
        &self,
        engine: &PriorityEngine,
        tasks: &'a [Task],
        n: usize,
    ) -> FuzzyResult<Vec<RankedTask<'a>>> {
        let mut ranked = self.rank(engine, tasks)?;
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Index of the highest-priority task, or `None` for an empty slice.
    pub fn select_best(&self, engine: &PriorityEngine, tasks: &[Task]) -> FuzzyResult<Option<usize>> {
        Ok(self.rank(engine, tasks)?.first().map(|r| r.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::TaskInputs;

    fn engine() -> PriorityEngine {
        PriorityEngine::new().unwrap()
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("essay", TaskInputs::new(25.0, 3.0, 4.0)),
            Task::new("exam prep", TaskInputs::new(1.0, 10.0, 9.0)),
            Task::new("lab report", TaskInputs::new(7.0, 6.0, 5.0)),
            Task::new("reading", TaskInputs::new(30.0, 0.0, 0.0)),
        ]
    }

    #[test]
    fn test_rank_descending_score() {
        let tasks = tasks();
        let ranked = TaskRanker::new().rank(&engine(), &tasks).unwrap();

        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].task.name, "exam prep");
        assert_eq!(ranked[3].task.name, "reading");
        assert!(ranked
            .windows(2)
            .all(|w| w[0].result.score >= w[1].result.score));
        for (pos, r) in ranked.iter().enumerate() {
            assert_eq!(r.rank, pos + 1);
        }
    }

    #[test]
    fn test_top_n() {
        let tasks = tasks();
        let top = TaskRanker::new().top(&engine(), &tasks, 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].index, 1);

        let all = TaskRanker::new().top(&engine(), &tasks, 10).unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_select_best() {
        let tasks = tasks();
        let best = TaskRanker::new().select_best(&engine(), &tasks).unwrap();
        assert_eq!(best, Some(1));
    }

    #[test]
    fn test_select_best_empty() {
        let best = TaskRanker::new().select_best(&engine(), &[]).unwrap();
        assert_eq!(best, None);
    }

    #[test]
    fn test_identical_tasks_preserve_order() {
        let inputs = TaskInputs::new(5.0, 5.0, 5.0);
        let tasks = vec![
            Task::new("c", inputs),
            Task::new("a", inputs),
            Task::new("b", inputs),
        ];
        let ranked = TaskRanker::new().rank(&engine(), &tasks).unwrap();
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_by_name_tie_breaker() {
        let inputs = TaskInputs::new(5.0, 5.0, 5.0);
        let tasks = vec![
            Task::new("c", inputs),
            Task::new("a", inputs),
            Task::new("b", inputs),
        ];
        let ranked = TaskRanker::new()
            .with_tie_breaker(TieBreaker::ByName)
            .rank(&engine(), &tasks)
            .unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.task.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tiny_deadline_gaps_sort_consistently() {
        // Sub-nanoday gaps still sort into one consistent order.
        let tasks: Vec<Task> = [1e-9, 0.0, 5e-10, 2e-9, 1.5e-9]
            .iter()
            .enumerate()
            .map(|(i, &days)| Task::new(format!("t{i}"), TaskInputs::new(days, 0.0, 0.0)))
            .collect();
        let ranked = TaskRanker::new().rank(&engine(), &tasks).unwrap();
        let days: Vec<f64> = ranked
            .iter()
            .map(|r| r.result.inputs.days_to_deadline)
            .collect();
        assert_eq!(days, vec![0.0, 5e-10, 1e-9, 1.5e-9, 2e-9]);
    }

    #[test]
    fn test_equal_score_sooner_deadline_first() {
        // Both clamp into the "far / low" plateau with identical scores;
        // the sooner deadline wins the tie.
        let tasks = vec![
            Task::new("later", TaskInputs::new(30.0, 0.0, 0.0)),
            Task::new("sooner", TaskInputs::new(22.0, 0.0, 0.0)),
        ];
        let ranked = TaskRanker::new().rank(&engine(), &tasks).unwrap();
        assert_eq!(ranked[0].result.score, ranked[1].result.score);
        assert_eq!(ranked[0].task.name, "sooner");
    }
}
