//! Lanewise - fixed-width SIMD vectors with compile-time backend selection
//!
//! This library wraps one hardware vector register behind a single generic
//! value type, [`Simd<T, N>`](Simd), so client code can write ordinary
//! arithmetic expressions that compile to native vector instructions.
//!
//! # Supported Backends
//!
//! ## x86_64
//! - **SSE**: 128-bit registers, 4 × `f32` lanes (baseline, always available)
//! - **AVX**: 256-bit registers, 8 × `f32` lanes (requires building with
//!   `-C target-feature=+avx`)
//!
//! ## aarch64 (ARM)
//! - **NEON**: 128-bit registers, 4 × `f32` lanes (always available)
//!
//! # Compile-time Selection
//!
//! The concrete backend is chosen entirely at compile time. The
//! [`SimdElement`] and [`SupportedLaneCount`] traits gate which
//! `(element type, lane count)` pairs exist; a pair with no matching backend
//! is rejected by the compiler, never at runtime. There is no feature
//! detection, no dynamic dispatch, and no scalar fallback path - every
//! operation on a vector value is a fixed sequence of native instructions.
//!
//! # Examples
//!
//! ```rust
//! use lanewise::f32x4;
//!
//! let a = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
//! let b = f32x4::splat(2.0);
//!
//! let sum = a + b;
//! assert_eq!(sum.to_array(), [3.0, 4.0, 5.0, 6.0]);
//!
//! // Horizontal reductions fold all lanes in-register.
//! assert_eq!(lanewise::horizontal_sum(a), 10.0);
//! assert_eq!(lanewise::horizontal_max(a), 4.0);
//!
//! // Comparisons produce full-lane bit masks, not booleans.
//! let mask = a.cmp_lt(b);
//! assert_eq!(mask.extract(0).to_bits(), u32::MAX);
//! ```
//!
//! Lane rearrangement takes `const` selectors whose encodings match the
//! wrapped instructions bit-for-bit; the [`select`] module gives the common
//! ones names:
//!
//! ```rust
//! use lanewise::{f32x4, select};
//!
//! let v = f32x4::from_array([1.0, 2.0, 3.0, 4.0]);
//! let reversed = v.shuffle::<{ select::REVERSE }>();
//! assert_eq!(reversed.to_array(), [4.0, 3.0, 2.0, 1.0]);
//! ```
//!
//! # Safety
//!
//! All intrinsic calls are confined to the backend modules and are sound on
//! their target: SSE is part of the x86_64 baseline, NEON is mandatory on
//! aarch64, and the AVX backend only exists when the `avx` target feature is
//! statically enabled. The public API is entirely safe.

/// Supported-element-type predicate.
///
/// The sealed [`SimdElement`](element::SimdElement) trait is the single
/// choke point deciding which scalar types may be vector lanes.
pub mod element;

/// Error types for lane access.
pub mod error;

/// Lane-count predicate and register binding.
///
/// [`LaneCount`](lanes::LaneCount) plus the sealed
/// [`SupportedLaneCount`](lanes::SupportedLaneCount) trait bind each legal
/// width to its backend register type.
pub mod lanes;

/// Width-and-type-generic operator and algorithm surface.
pub mod ops;

/// Named lane selectors for `shuffle`, `permute` and `blend`.
pub mod select;

/// The vector type and its per-ISA backend specializations.
pub mod vector;

mod fmt;

pub use element::SimdElement;
pub use error::{Error, Result};
pub use lanes::{LaneCount, SupportedLaneCount};
pub use ops::{
    SimdVector, blend, horizontal_max, horizontal_min, horizontal_sum, make_vector, max, min,
    permute, shuffle,
};
pub use vector::Simd;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use vector::f32x4;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub use vector::f32x8;
