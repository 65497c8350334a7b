//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer guards the algorithm entry points: every request is checked
//! here before the algorithms layer is allowed to mutate anything.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;
