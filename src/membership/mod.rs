//! Membership functions.
//!
//! Pure evaluators mapping a crisp value to a degree of truth in `[0, 1]`.
//! Two shapes are provided:
//!
//! - **Triangular** `(a, b, c)`: rises on `a → b`, falls on `b → c`.
//! - **Trapezoidal** `(a, b, c, d)`: rises on `a → b`, plateau on `[b, c]`,
//!   falls on `c → d`.
//!
//! Zero-width ramps (`a == b`, `b == c`, `c == d`) are treated as step
//! edges, so a trapezoid `(0, 0, 2, 5)` is fully true at `0`.
//!
//! # References
//!
//! Zadeh (1965), "Fuzzy Sets"

mod shapes;

pub use shapes::MembershipFunction;
