//! Tolerance constants for inference testing.
//!
//! Different comparisons need different precision levels.

/// Rounding-level agreement, used as a relative bound.
/// Two evaluations of the same parameters and inputs must agree to this.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Absolute tolerance for values checked against a hand-computed reference,
/// where the reference itself goes through a different `exp`/`tanh` path.
pub const REFERENCE_EPSILON: f32 = 1e-5;

/// Values below this are considered silent.
pub const SILENCE_THRESHOLD: f32 = 1e-4;
