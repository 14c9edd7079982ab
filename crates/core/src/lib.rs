//! Device vector core library
//!
//! Small 3D vector kernels for per-agent simulation step functions: cross
//! product, in-place division, length, in-place normalization and the angle
//! between two vectors.
//!
//! Every function is pure and allocation-free. Nothing is cached or shared
//! between calls, so the kernels can run once per agent from any number of
//! threads (or device lanes) with no locking.
//!
//! Degenerate math is not an error. Dividing by zero and normalizing the zero
//! vector propagate IEEE-754 `inf`/`nan` so per-agent loops never branch on
//! failure.
//!
//! ## Layers
//! - [`Vec3`]: `#[repr(C)]` value type with method forms of each kernel
//! - [`ops`]: the kernels over scalar components
//! - [`components`]: device-style wrappers writing through `&mut f32`

// Core types
pub mod core_types;

// Kernels
pub mod components;
pub mod ops;

// Re-export core types
pub use core_types::Vec3;
pub use ops::{AngleConfig, AngleMode};
