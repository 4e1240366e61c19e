//! Compile-time-sized linear algebra.
//!
//! This library provides small, stack-allocated [`Vector`] and [`Matrix`] types whose dimensions
//! are const generic parameters, along with the usual arithmetic operators, a few geometric
//! helpers, and builders for the 4x4 transforms used in graphics code (see [`transform`]).
//!
//! ```
//! # use cml::*;
//! let a = mat![
//!      0,  4, -2;
//!     -4, -3,  0;
//! ];
//! let b = mat![
//!     0,  1;
//!     1, -1;
//!     2,  3;
//! ];
//! assert_eq!(a * b, mat![0, -10; -3, -1]);
//!
//! let v = vec2(5, 6);
//! assert_eq!(v.perpendicular(), vec2(-6, 5));
//! assert_eq!(v.dot(v.perpendicular()), 0);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Every dimension is part of the type, so
//!   multiplying matrices of incompatible shapes, or asking a non-square matrix for its identity,
//!   is a compile error rather than a runtime one.
//! - Support only a single, row-major, unpadded data layout for matrices. A `Matrix<T, R, C>` is
//!   exactly an `[[T; C]; R]` in memory.
//! - Be generic over the element type. Integer vectors work just as well as floating-point ones;
//!   lengths are computed in a separate floating-point "length type" (`L`, [`DefaultType`] unless
//!   specified).
//! - No sparse storage, SIMD, or numerical stability guarantees beyond what the naive algorithms
//!   provide.
//!
//! # Cargo Features
//!
//! - `bytemuck` (enabled by default): implements [`bytemuck::Zeroable`] and [`bytemuck::Pod`] for
//!   [`Vector`] and [`Matrix`].
//! - `approx` (enabled by default): implements the [`approx`] comparison traits for [`Vector`] and
//!   [`Matrix`], comparing element by element.
//!
//! # Logging
//!
//! The transform builders log through the [`log`] facade. Applications can use [`init_logger!`] to
//! set up [`env_logger`]; the `RUST_LOG` environment variable overrides the default filters.
//!
//! [`bytemuck::Zeroable`]: https://docs.rs/bytemuck/latest/bytemuck/trait.Zeroable.html
//! [`bytemuck::Pod`]: https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html
//! [`approx`]: https://docs.rs/approx
//! [`env_logger`]: https://docs.rs/env_logger

use log::LevelFilter;

#[cfg(feature = "approx")]
mod approx_eq;
pub mod error;
mod matrix;
mod traits;
pub mod transform;
pub mod units;
mod vector;

pub use error::ShapeError;
pub use matrix::*;
pub use traits::*;
pub use vector::*;

/// The length type used by vectors that don't specify one.
pub type DefaultType = f64;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level, unless overridden by `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
