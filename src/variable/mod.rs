//! Linguistic variables.
//!
//! A [`LinguisticVariable`] binds a crisp [`Domain`] to an ordered list of
//! labelled fuzzy sets. Fuzzifying a crisp value produces a [`Fuzzified`]
//! mapping from each label to its membership degree.
//!
//! # Clamping
//!
//! Crisp values outside the domain are clamped to the nearest boundary
//! before evaluation. The clamped value is kept on the [`Fuzzified`]
//! result so callers can echo what was actually evaluated.

mod domain;
mod linguistic;

pub use domain::Domain;
pub use linguistic::{Fuzzified, FuzzySet, LinguisticVariable};
