//! Fuzzy rule base.
//!
//! A [`Rule`] is an antecedent (a list of `variable is label` terms joined
//! by a single [`Connective`]) and a consequent output label. A
//! [`RuleBase`] is the ordered, immutable list of rules for one system.
//!
//! # Evaluation
//!
//! - **AND**: firing strength is the minimum of the term degrees.
//! - **OR**: firing strength is the maximum of the term degrees.
//!
//! The strength is then scaled by the rule weight (default `1.0`).
//!
//! # Validation
//!
//! Rules are written against variable and label *names*. Compiling a
//! [`RuleBase`] against concrete variables resolves every name to an index
//! and fails on anything unknown, so evaluation itself cannot fail.

mod base;
mod types;

pub use base::{CompiledRuleBase, RuleBase, RuleFiring};
pub use types::{Connective, Rule, Term};
