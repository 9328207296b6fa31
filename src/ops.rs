//! Width-and-type-generic operator and algorithm surface.
//!
//! [`SimdVector`] names every backend member operation once, so generic code
//! can be written against "a vector of some supported width" without knowing
//! which backend specialization is active. The free functions below, and the
//! `std::ops` arithmetic impls the backends provide, give the same
//! operations an ordinary function-call spelling. None of this layer carries
//! logic of its own - every function forwards its arguments to the
//! corresponding backend member call and returns the result unchanged.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::element::SimdElement;
use crate::error::Result;
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::vector::Simd;

/// The uniform interface every backend specialization satisfies.
///
/// Implemented by `Simd<T, N>` for each `(T, N)` pair with a native backend
/// on the current target. The supertraits pull in the arithmetic operator
/// surface, so a `V: SimdVector` bound is enough to write expressions like
/// `a * b + c` generically.
pub trait SimdVector:
    Copy
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
{
    /// The lane element type.
    type Scalar: SimdElement;

    /// Number of lanes.
    const LANES: usize;

    /// Broadcasts `value` into every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// An all-lanes-zero vector.
    fn zero() -> Self;

    /// Reads the lane at `lane`, panicking if `lane >= Self::LANES`.
    fn extract(self, lane: usize) -> Self::Scalar;

    /// Reads the lane at `lane`, or reports the bounds violation.
    fn try_extract(self, lane: usize) -> Result<Self::Scalar>;

    /// Lane-wise minimum.
    fn min(self, other: Self) -> Self;

    /// Lane-wise maximum.
    fn max(self, other: Self) -> Self;

    /// Lane-wise ordered equality mask.
    fn cmp_eq(self, other: Self) -> Self;

    /// Lane-wise ordered not-equal mask.
    fn cmp_ne(self, other: Self) -> Self;

    /// Lane-wise ordered less-than mask.
    fn cmp_lt(self, other: Self) -> Self;

    /// Lane-wise ordered less-or-equal mask.
    fn cmp_le(self, other: Self) -> Self;

    /// Lane-wise ordered greater-than mask.
    fn cmp_gt(self, other: Self) -> Self;

    /// Lane-wise ordered greater-or-equal mask.
    fn cmp_ge(self, other: Self) -> Self;

    /// Sum of all lanes.
    fn horizontal_sum(self) -> Self::Scalar;

    /// Maximum over all lanes.
    fn horizontal_max(self) -> Self::Scalar;

    /// Minimum over all lanes.
    fn horizontal_min(self) -> Self::Scalar;

    /// Lane reorder under a backend-specific `const` selector.
    fn shuffle<const SELECT: i32>(self) -> Self;

    /// Sub-block reorder under a backend-specific `const` selector.
    fn permute<const SELECT: i32>(self) -> Self;

    /// Per-lane selection between `self` and `other`; a set mask bit takes
    /// the lane from `other`.
    fn blend<const MASK: i32>(self, other: Self) -> Self;
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl SimdVector for Simd<f32, 4> {
    type Scalar = f32;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Simd::<f32, 4>::splat(value)
    }

    #[inline(always)]
    fn zero() -> Self {
        Simd::<f32, 4>::zero()
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f32 {
        Simd::<f32, 4>::extract(self, lane)
    }

    #[inline(always)]
    fn try_extract(self, lane: usize) -> Result<f32> {
        Simd::<f32, 4>::try_extract(self, lane)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Simd::<f32, 4>::min(self, other)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Simd::<f32, 4>::max(self, other)
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        Simd::<f32, 4>::cmp_eq(self, other)
    }

    #[inline(always)]
    fn cmp_ne(self, other: Self) -> Self {
        Simd::<f32, 4>::cmp_ne(self, other)
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        Simd::<f32, 4>::cmp_lt(self, other)
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> Self {
        Simd::<f32, 4>::cmp_le(self, other)
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        Simd::<f32, 4>::cmp_gt(self, other)
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        Simd::<f32, 4>::cmp_ge(self, other)
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        Simd::<f32, 4>::horizontal_sum(self)
    }

    #[inline(always)]
    fn horizontal_max(self) -> f32 {
        Simd::<f32, 4>::horizontal_max(self)
    }

    #[inline(always)]
    fn horizontal_min(self) -> f32 {
        Simd::<f32, 4>::horizontal_min(self)
    }

    #[inline(always)]
    fn shuffle<const SELECT: i32>(self) -> Self {
        Simd::<f32, 4>::shuffle::<SELECT>(self)
    }

    #[inline(always)]
    fn permute<const SELECT: i32>(self) -> Self {
        Simd::<f32, 4>::permute::<SELECT>(self)
    }

    #[inline(always)]
    fn blend<const MASK: i32>(self, other: Self) -> Self {
        Simd::<f32, 4>::blend::<MASK>(self, other)
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
impl SimdVector for Simd<f32, 8> {
    type Scalar = f32;
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Simd::<f32, 8>::splat(value)
    }

    #[inline(always)]
    fn zero() -> Self {
        Simd::<f32, 8>::zero()
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> f32 {
        Simd::<f32, 8>::extract(self, lane)
    }

    #[inline(always)]
    fn try_extract(self, lane: usize) -> Result<f32> {
        Simd::<f32, 8>::try_extract(self, lane)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Simd::<f32, 8>::min(self, other)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Simd::<f32, 8>::max(self, other)
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> Self {
        Simd::<f32, 8>::cmp_eq(self, other)
    }

    #[inline(always)]
    fn cmp_ne(self, other: Self) -> Self {
        Simd::<f32, 8>::cmp_ne(self, other)
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> Self {
        Simd::<f32, 8>::cmp_lt(self, other)
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> Self {
        Simd::<f32, 8>::cmp_le(self, other)
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> Self {
        Simd::<f32, 8>::cmp_gt(self, other)
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> Self {
        Simd::<f32, 8>::cmp_ge(self, other)
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        Simd::<f32, 8>::horizontal_sum(self)
    }

    #[inline(always)]
    fn horizontal_max(self) -> f32 {
        Simd::<f32, 8>::horizontal_max(self)
    }

    #[inline(always)]
    fn horizontal_min(self) -> f32 {
        Simd::<f32, 8>::horizontal_min(self)
    }

    #[inline(always)]
    fn shuffle<const SELECT: i32>(self) -> Self {
        Simd::<f32, 8>::shuffle::<SELECT>(self)
    }

    #[inline(always)]
    fn permute<const SELECT: i32>(self) -> Self {
        Simd::<f32, 8>::permute::<SELECT>(self)
    }

    #[inline(always)]
    fn blend<const MASK: i32>(self, other: Self) -> Self {
        Simd::<f32, 8>::blend::<MASK>(self, other)
    }
}

/// Builds a vector with every lane set to `value`.
///
/// Generic entry point for the scalar-broadcast constructor; the width and
/// element bounds reject unsupported pairs at compile time, exactly like the
/// backend constructors themselves.
///
/// # Examples
///
/// ```rust
/// let v = lanewise::make_vector::<f32, 4>(2.5);
/// assert_eq!(v.to_array(), [2.5; 4]);
/// ```
#[inline]
pub fn make_vector<T, const N: usize>(value: T) -> Simd<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
    Simd<T, N>: SimdVector<Scalar = T>,
{
    <Simd<T, N> as SimdVector>::splat(value)
}

/// Sum of all lanes of `vec`.
#[inline]
#[must_use]
pub fn horizontal_sum<V: SimdVector>(vec: V) -> V::Scalar {
    vec.horizontal_sum()
}

/// Maximum over all lanes of `vec`.
#[inline]
#[must_use]
pub fn horizontal_max<V: SimdVector>(vec: V) -> V::Scalar {
    vec.horizontal_max()
}

/// Minimum over all lanes of `vec`.
#[inline]
#[must_use]
pub fn horizontal_min<V: SimdVector>(vec: V) -> V::Scalar {
    vec.horizontal_min()
}

/// Lane-wise minimum of `vec1` and `vec2`.
#[inline]
#[must_use]
pub fn min<V: SimdVector>(vec1: V, vec2: V) -> V {
    vec1.min(vec2)
}

/// Lane-wise maximum of `vec1` and `vec2`.
#[inline]
#[must_use]
pub fn max<V: SimdVector>(vec1: V, vec2: V) -> V {
    vec1.max(vec2)
}

/// Reorders the lanes of `vec` under `SELECT`.
#[inline]
#[must_use]
pub fn shuffle<V: SimdVector, const SELECT: i32>(vec: V) -> V {
    vec.shuffle::<SELECT>()
}

/// Reorders the sub-blocks of `vec` under `SELECT`.
#[inline]
#[must_use]
pub fn permute<V: SimdVector, const SELECT: i32>(vec: V) -> V {
    vec.permute::<SELECT>()
}

/// Selects lanes from `vec1` and `vec2` under `MASK`; a set bit takes the
/// lane from `vec2`.
#[inline]
#[must_use]
pub fn blend<V: SimdVector, const MASK: i32>(vec1: V, vec2: V) -> V {
    vec1.blend::<MASK>(vec2)
}
