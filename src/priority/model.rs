//! Standard variables and rules of the task-priority model.

use crate::error::FuzzyResult;
use crate::membership::MembershipFunction;
use crate::rules::{Rule, RuleBase};
use crate::variable::{Domain, LinguisticVariable};

/// Input: days until the deadline.
pub const DEADLINE: &str = "deadline_days";
/// Input: importance score.
pub const IMPORTANCE: &str = "importance";
/// Input: difficulty score.
pub const DIFFICULTY: &str = "difficulty";
/// Output: priority score.
pub const PRIORITY: &str = "priority";

/// Deadline proximity over `[0, 30]` days.
///
/// Neighbouring sets overlap on their plateaus, so at every point one of
/// two neighbours has degree 1. A nearer label only rises while the
/// farther one is still full, and the farther label only falls once the
/// nearer one is full. The dominant label switches at 3 and 14 days.
pub fn deadline_variable() -> FuzzyResult<LinguisticVariable> {
    Ok(LinguisticVariable::new(DEADLINE, Domain::new(0.0, 30.0, 301)?)
        .with_set("close", MembershipFunction::trapezoidal(0.0, 0.0, 3.0, 5.0)?)
        .with_set("moderate", MembershipFunction::trapezoidal(1.0, 3.0, 14.0, 18.0)?)
        .with_set("far", MembershipFunction::trapezoidal(10.0, 14.0, 30.0, 30.0)?))
}

/// Importance over `[0, 10]`. Degrees of the three sets sum to 1.
pub fn importance_variable() -> FuzzyResult<LinguisticVariable> {
    Ok(LinguisticVariable::new(IMPORTANCE, Domain::new(0.0, 10.0, 101)?)
        .with_set("low", MembershipFunction::trapezoidal(0.0, 0.0, 3.0, 5.0)?)
        .with_set("medium", MembershipFunction::triangular(3.0, 5.0, 7.0)?)
        .with_set("high", MembershipFunction::trapezoidal(5.0, 7.0, 10.0, 10.0)?))
}

/// Difficulty over `[0, 10]`, shaped like importance.
pub fn difficulty_variable() -> FuzzyResult<LinguisticVariable> {
    Ok(LinguisticVariable::new(DIFFICULTY, Domain::new(0.0, 10.0, 101)?)
        .with_set("easy", MembershipFunction::trapezoidal(0.0, 0.0, 3.0, 5.0)?)
        .with_set("moderate", MembershipFunction::triangular(3.0, 5.0, 7.0)?)
        .with_set("hard", MembershipFunction::trapezoidal(5.0, 7.0, 10.0, 10.0)?))
}

/// Priority over `[0, 100]`, sampled at 0.1 steps.
pub fn priority_variable() -> FuzzyResult<LinguisticVariable> {
    Ok(LinguisticVariable::new(PRIORITY, Domain::new(0.0, 100.0, 1001)?)
        .with_set("very_low", MembershipFunction::trapezoidal(0.0, 0.0, 10.0, 25.0)?)
        .with_set("low", MembershipFunction::triangular(15.0, 30.0, 45.0)?)
        .with_set("medium", MembershipFunction::triangular(35.0, 50.0, 65.0)?)
        .with_set("high", MembershipFunction::triangular(55.0, 70.0, 85.0)?)
        .with_set("very_high", MembershipFunction::trapezoidal(75.0, 90.0, 100.0, 100.0)?))
}

fn when2(deadline: &str, importance: &str, then: &str) -> Rule {
    Rule::and([(DEADLINE, deadline), (IMPORTANCE, importance)], then)
}

fn when3(deadline: &str, importance: &str, difficulty: &str, then: &str) -> Rule {
    Rule::and(
        [
            (DEADLINE, deadline),
            (IMPORTANCE, importance),
            (DIFFICULTY, difficulty),
        ],
        then,
    )
}

/// The curated default rule base.
///
/// One step nearer in deadline or one step up in importance raises the
/// consequent by one label. Easy tasks sit one label below moderate and
/// hard ones, which share a consequent. Results are capped at
/// `very_low` and `very_high`. Every label combination has a rule, so
/// some rule fires everywhere; `far AND low` needs no difficulty term.
///
/// With min/max inference and centroid defuzzification a nearer deadline
/// can still dip the score slightly where several importance/difficulty
/// combinations are active at once. The dip stays below
/// [`DEADLINE_DIP_TOLERANCE`].
pub fn default_rules() -> RuleBase {
    RuleBase::new().with_rules([
        when3("close", "low", "easy", "low"),
        when3("close", "low", "moderate", "medium"),
        when3("close", "low", "hard", "medium"),
        when3("close", "medium", "easy", "medium"),
        when3("close", "medium", "moderate", "high"),
        when3("close", "medium", "hard", "high"),
        when3("close", "high", "easy", "high"),
        when3("close", "high", "moderate", "very_high"),
        when3("close", "high", "hard", "very_high"),
        when3("moderate", "low", "easy", "very_low"),
        when3("moderate", "low", "moderate", "low"),
        when3("moderate", "low", "hard", "low"),
        when3("moderate", "medium", "easy", "low"),
        when3("moderate", "medium", "moderate", "medium"),
        when3("moderate", "medium", "hard", "medium"),
        when3("moderate", "high", "easy", "medium"),
        when3("moderate", "high", "moderate", "high"),
        when3("moderate", "high", "hard", "high"),
        when2("far", "low", "very_low"),
        when3("far", "medium", "easy", "very_low"),
        when3("far", "medium", "moderate", "low"),
        when3("far", "medium", "hard", "low"),
        when3("far", "high", "easy", "low"),
        when3("far", "high", "moderate", "medium"),
        when3("far", "high", "hard", "medium"),
    ])
}

/// Largest score drop, in priority points, that moving a deadline closer
/// can cause with the default model (importance and difficulty fixed).
pub const DEADLINE_DIP_TOLERANCE: f64 = 1.0;
