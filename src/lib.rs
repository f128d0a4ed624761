//! A capacity-managed dynamic array and a reduced-form rational number type.
//!
//! Two independent leaf types, each small enough to read in one sitting and strict
//! enough to test exhaustively:
//!
//! - [`DynamicArray<T, A>`]: contiguous, owning, resizable storage with explicit
//!   capacity rules (2x growth, 4x shrink threshold) and an injected [`Allocator`].
//! - [`Rational<I>`]: a numerator/denominator pair that is always reduced and always
//!   has a positive denominator, with checked arithmetic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐
//! │ allocator.rs │────▶│  vector/         │
//! │ (Allocator,  │     │ (DynamicArray,   │
//! │  Global,     │     │  edit ops)       │
//! │  Bounded)    │     └──────────────────┘
//! └──────────────┘              │
//!                               ▼
//! ┌──────────────┐     ┌──────────────────┐
//! │  utils.rs    │────▶│  contracts.rs    │
//! │  (gcd)       │     │ (debug asserts)  │
//! └──────────────┘     └──────────────────┘
//!        │                      ▲
//!        ▼                      │
//! ┌──────────────────────────────────────┐
//! │             rational/                │
//! │  (Rational, checked ops, parsing)    │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Type           | Invariant                                   | Checked by               |
//! |----------------|---------------------------------------------|--------------------------|
//! | `DynamicArray` | `len <= capacity`                           | `check_capacity_bound`   |
//! | `DynamicArray` | `capacity <= len * 4` after a removal       | `check_sanitized`        |
//! | `Rational`     | `denominator > 0`, `gcd(|n|, d) == 1`       | `check_reduced_form`     |
//!
//! # Usage
//!
//! ```
//! use labkit::{dyn_array, Rational};
//!
//! let mut v = dyn_array![9, 8, 7].unwrap();
//! v.insert(0, 10).unwrap();
//! assert_eq!(v.to_string(), "10; 9; 8; 7; \n");
//!
//! let r = Rational::new(94, -64).unwrap();
//! assert_eq!(r.to_string(), "-47 / 32");
//! assert_eq!(r + Rational::new(47, 32).unwrap(), Rational::zero());
//! ```

// Module declarations
pub mod allocator;
pub mod contracts;
mod error;
mod rational;
pub mod testing;
pub mod utils;
mod vector;

// Re-exports for public API
pub use allocator::{Allocator, Bounded, Global};
pub use error::{LabError, Result};
pub use rational::{Rational, Rational32, Rational64};
pub use utils::gcd;
pub use vector::{DynamicArray, GROWTH_FACTOR, INITIAL_CAPACITY, SANITIZE_FACTOR};
