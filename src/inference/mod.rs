//! Mamdani inference pipeline.
//!
//! Wires linguistic variables and a rule base into a [`FuzzySystem`]:
//!
//! ```text
//! crisp inputs ─▶ fuzzify ─▶ rule firings ─▶ aggregate ─▶ defuzzify ─▶ score + label
//! ```
//!
//! # Key Types
//!
//! - [`FuzzySystem`]: immutable, validated system; build once, evaluate many times
//! - [`FuzzySystemBuilder`]: collects variables and rules, fails fast on bad configuration
//! - [`InferenceConfig`]: sampling resolution, defuzzification method, no-fire policy
//! - [`FuzzyOutputSet`]: clipped and max-combined output curves
//! - [`Inference`]: crisp score, display label, and the clamped inputs
//!
//! # References
//!
//! - Mamdani & Assilian (1975), "An Experiment in Linguistic Synthesis
//!   with a Fuzzy Logic Controller"
//! - Ross (2010), *Fuzzy Logic with Engineering Applications*, ch. 4

mod aggregate;
mod config;
mod defuzzify;
mod system;

pub use aggregate::{aggregate, FuzzyOutputSet};
pub use config::{DefuzzMethod, InferenceConfig, NoFirePolicy};
pub use defuzzify::{defuzzify, display_label};
pub use system::{FuzzySystem, FuzzySystemBuilder, Inference, InferenceTrace};
