//! Per-agent vector kernels
//!
//! Pure, allocation-free functions meant to be called once per agent per
//! simulation step, from any number of threads at once. None of them hold or
//! share state, so concurrent callers need no synchronization.
//!
//! Degenerate inputs are never errors: division by zero and normalization of
//! the zero vector propagate IEEE-754 `inf`/`nan` to the caller.

pub mod angle;
pub mod cross;
pub mod divide;
pub mod length;
pub mod normalize;

pub use angle::{angle_between, angle_between_legacy, AngleConfig, AngleMode};
pub use cross::{cross, dot};
pub use divide::divide;
pub use length::length;
pub use normalize::normalize;
