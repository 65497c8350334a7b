//! # dnc — Instrumented divide-and-conquer algorithms
//!
//! Classical divide-and-conquer procedures, each recording how many element
//! comparisons it made, how many scratch buffers it allocated, and how deep
//! its recursion went. The counters make the asymptotic behaviour of each
//! algorithm observable from a driver that sweeps input sizes.
//!
//! ## Algorithms
//!
//! | Entry point         | Result                    | Comparisons     | Depth           |
//! |---------------------|---------------------------|-----------------|-----------------|
//! | [`merge_sort`]      | sorted in place, stable   | O(n log n)      | O(log n)        |
//! | [`quick_sort`]      | sorted in place           | O(n log n) exp. | O(log n) exp.   |
//! | [`select`]          | k-th smallest element     | O(n)            | O(log n)        |
//! | [`closest_pair`]    | minimum pairwise distance | O(n log n)      | O(log n)        |
//!
//! [`merge_sort`]: prelude::merge_sort
//! [`quick_sort`]: prelude::quick_sort
//! [`select`]: prelude::select
//! [`closest_pair`]: prelude::closest_pair
//!
//! ## Quick Start
//!
//! ```rust
//! use dnc::prelude::*;
//!
//! let mut buffer = vec![5, 3, 8, 1, 2, 7, 4, 6];
//! let mut counters = Counters::new();
//!
//! let fourth = select(&mut buffer, 3, &mut counters)?;
//! assert_eq!(fourth, 4);
//!
//! assert_eq!(counters.to_string(), "comparisons=34 allocations=1 max_depth=3");
//! # Result::<(), DncError>::Ok(())
//! ```
//!
//! ### Sorting
//!
//! ```rust
//! use dnc::prelude::*;
//!
//! let mut buffer = vec![5, 3, 1, 4, 2];
//! let mut counters = Counters::new();
//! merge_sort(&mut buffer, &mut counters);
//!
//! assert_eq!(buffer, [1, 2, 3, 4, 5]);
//! assert_eq!(counters.allocations(), 1);
//! ```
//!
//! Quicksort draws its pivots from a random generator. Pass a seeded one for
//! reproducible runs:
//!
//! ```rust
//! use dnc::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut buffer = vec![9, 4, 7, 1, 8, 2];
//! let mut counters = Counters::new();
//! quick_sort_with_rng(&mut buffer, &mut counters, &mut rng);
//!
//! assert!(is_sorted(&buffer));
//! ```
//!
//! ### Closest pair
//!
//! ```rust
//! use dnc::prelude::*;
//!
//! let points = [
//!     Point::new(1.0, 1.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(5.0, 1.0),
//!     Point::new(8.0, 4.0),
//! ];
//! let mut counters = Counters::new();
//!
//! // (4, 4) and (5, 1) are sqrt(10) apart.
//! let d = closest_pair(&points, &mut counters)?;
//! assert!((d - 10f64.sqrt()).abs() < 1e-12);
//! # Result::<(), DncError>::Ok(())
//! ```
//!
//! ### Driving every sort
//!
//! ```rust
//! use dnc::prelude::*;
//!
//! let input: Vec<i32> = (0..100).rev().collect();
//!
//! for algorithm in SortAlgorithm::ALL {
//!     let mut buffer = input.clone();
//!     let mut counters = Counters::new();
//!     algorithm.run(&mut buffer, &mut counters);
//!     println!("{},{},{}", algorithm, buffer.len(), counters.comparisons());
//! }
//! ```
//!
//! ## Result and Error Handling
//!
//! [`select`] and [`closest_pair`] return `Result<_, DncError>`. Every error
//! is a precondition violation ([`ErrorKind::InvalidArgument`]) detected before
//! the input is touched:
//!
//! ```rust
//! use dnc::prelude::*;
//!
//! let mut empty: Vec<i32> = Vec::new();
//! let err = select(&mut empty, 0, &mut Counters::new()).unwrap_err();
//!
//! assert_eq!(err, DncError::EmptyInput);
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! [`ErrorKind::InvalidArgument`]: prelude::ErrorKind::InvalidArgument
//!
//! ## Logging
//!
//! Each entry point reports completion through the [`log`] facade at `debug`
//! level under a `dnc::<algorithm>` target. No logger is installed here.
//!
//! ## References
//!
//! - Blum, Floyd, Pratt, Rivest, Tarjan (1973). "Time Bounds for Selection"
//! - Shamos, Hoey (1975). "Closest-Point Problems"

// Layer 1: Primitives - counters, guards, points and array helpers.
mod primitives;

// Layer 2: Algorithms - the divide-and-conquer procedures.
mod algorithms;

// Layer 3: Engine - precondition checks.
mod engine;

// High-level entry points and the algorithm registry.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Counters, DncError, ErrorKind, Point, RecursionGuard, SortAlgorithm, SortFn,
        closest_pair, is_sorted, median_of_three, merge_sort, quick_sort, quick_sort_with_rng,
        select, shuffle, swap,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
