//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the instrumentation contract, data types and utility
//! functions used throughout the crate. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Comparison, allocation and recursion-depth counters.
pub mod counters;

/// In-place array helpers.
pub mod array;

/// Planar points.
pub mod point;

/// Shared error types.
pub mod errors;
