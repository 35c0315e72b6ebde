//! Game constants and shared math.

pub mod constants;
pub mod stat_math;
