//! Consensus constants

/// Before QIP9 the measured spacing is capped at this many target spacings.
pub const MAX_SPACING_MULTIPLIER: i64 = 10;
/// From QIP9 on the measured spacing is capped at this many target spacings.
pub const QIP9_MAX_SPACING_MULTIPLIER: i64 = 20;
/// Upper bound of Taylor series terms evaluated by `mul_exp`.
/// Series that fit in 512 bits converge in fewer terms.
pub const MUL_EXP_MAX_ITERATIONS: u64 = 1024;
