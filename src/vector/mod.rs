//! The vector type and its per-ISA backend specializations.
//!
//! [`Simd<T, N>`] is one generic struct holding exactly one hardware
//! register; which register, and which instructions operate on it, is
//! decided per target by the backend modules:
//!
//! - `x86`: SSE (4 lanes) and, with the `avx` target feature, AVX (8 lanes)
//! - `aarch64`: NEON (4 lanes)
//!
//! Each backend is an independent set of inherent impl blocks on a concrete
//! instantiation of `Simd` - there is no shared base implementation to
//! inherit from, because the native instructions are simply different. The
//! generic struct itself carries only what every backend agrees on: the
//! register, trivially-copyable value semantics, and the checked lane
//! access defined below in terms of the backends' `to_array`.

use core::marker::PhantomData;

use crate::element::SimdElement;
use crate::lanes::{LaneCount, SupportedLaneCount};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use crate::error::{Error, Result};

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "x86_64")]
mod x86;

/// A fixed-width SIMD vector of `N` lanes of `T`.
///
/// A value of this type is exactly one hardware vector register: no length
/// field, no pointers, no heap. Copying is a trivial register copy.
///
/// The struct is declared for every `(T, N)` pair, but operations exist only
/// for pairs backed by a concrete backend specialization; anything else is a
/// compile-time error. Today that set is `f32` at the widths listed in
/// [`lanes`](crate::lanes).
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Simd<T, const N: usize>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    register: <LaneCount<N> as SupportedLaneCount>::Register,
    _marker: PhantomData<T>,
}

/// Four `f32` lanes in a 128-bit register (SSE or NEON).
#[allow(non_camel_case_types)]
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub type f32x4 = Simd<f32, 4>;

/// Eight `f32` lanes in a 256-bit register (AVX).
#[allow(non_camel_case_types)]
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub type f32x8 = Simd<f32, 8>;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl Simd<f32, 4> {
    /// Reads the lane at `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= 4`. Use [`try_extract`](Self::try_extract) for the
    /// recoverable form; out-of-range indices are never clamped.
    #[inline]
    #[must_use]
    pub fn extract(self, lane: usize) -> f32 {
        match self.try_extract(lane) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Reads the lane at `lane`, or returns
    /// [`Error::LaneOutOfRange`] if `lane >= 4`.
    #[inline]
    pub fn try_extract(self, lane: usize) -> Result<f32> {
        if lane < Self::LANES {
            Ok(self.to_array()[lane])
        } else {
            Err(Error::LaneOutOfRange {
                lane,
                lanes: Self::LANES,
            })
        }
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl Default for Simd<f32, 4> {
    /// An all-lanes-zero vector.
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
impl Simd<f32, 8> {
    /// Reads the lane at `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= 8`. Use [`try_extract`](Self::try_extract) for the
    /// recoverable form.
    #[inline]
    #[must_use]
    pub fn extract(self, lane: usize) -> f32 {
        match self.try_extract(lane) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Reads the lane at `lane`, or returns
    /// [`Error::LaneOutOfRange`] if `lane >= 8`.
    #[inline]
    pub fn try_extract(self, lane: usize) -> Result<f32> {
        if lane < Self::LANES {
            Ok(self.to_array()[lane])
        } else {
            Err(Error::LaneOutOfRange {
                lane,
                lanes: Self::LANES,
            })
        }
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
impl Default for Simd<f32, 8> {
    /// An all-lanes-zero vector.
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(all(test, any(target_arch = "x86_64", target_arch = "aarch64")))]
mod tests {
    use super::*;
    use crate::select;

    fn v4(l0: f32, l1: f32, l2: f32, l3: f32) -> f32x4 {
        f32x4::from_array([l0, l1, l2, l3])
    }

    #[test]
    fn default_and_zero_are_all_zero_lanes() {
        assert_eq!(f32x4::zero().to_array(), [0.0; 4]);
        assert_eq!(f32x4::default().to_array(), [0.0; 4]);
    }

    #[test]
    fn splat_broadcasts_to_every_lane() {
        assert_eq!(f32x4::splat(5.0).to_array(), [5.0; 4]);
        assert_eq!(f32x4::splat(-0.5).to_array(), [-0.5; 4]);
    }

    #[test]
    fn from_array_preserves_lane_order() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.extract(0), 1.0);
        assert_eq!(v.extract(3), 4.0);
    }

    #[test]
    fn register_roundtrip_is_lossless() {
        let v = v4(1.5, -2.5, 3.25, 0.0);
        let w = f32x4::from_register(v.into_register());
        assert_eq!(w.to_array(), v.to_array());
    }

    #[test]
    fn add_is_lane_wise() {
        let sum = v4(1.0, 2.0, 3.0, 4.0) + v4(5.0, 6.0, 7.0, 8.0);
        assert_eq!(sum.to_array(), [6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn add_assign_matches_add() {
        let mut a = f32x4::splat(1.0);
        a += f32x4::splat(2.0);
        assert_eq!(a.to_array(), [3.0; 4]);
    }

    #[test]
    fn sub_is_lane_wise() {
        let diff = v4(5.0, 6.0, 7.0, 8.0) - v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(diff.to_array(), [4.0; 4]);

        let mut a = v4(5.0, 6.0, 7.0, 8.0);
        a -= v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.to_array(), [4.0; 4]);
    }

    #[test]
    fn mul_is_lane_wise() {
        let prod = v4(1.0, 2.0, 3.0, 4.0) * v4(2.0, 3.0, 4.0, 5.0);
        assert_eq!(prod.to_array(), [2.0, 6.0, 12.0, 20.0]);

        let mut a = v4(1.0, 2.0, 3.0, 4.0);
        a *= f32x4::splat(2.0);
        assert_eq!(a.to_array(), [2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn div_is_lane_wise() {
        let quot = v4(2.0, 6.0, 12.0, 20.0) / v4(2.0, 3.0, 4.0, 5.0);
        assert_eq!(quot.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let mut a = v4(2.0, 4.0, 6.0, 8.0);
        a /= f32x4::splat(2.0);
        assert_eq!(a.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn division_by_zero_follows_ieee_semantics() {
        let quot = v4(1.0, -1.0, 0.0, 4.0) / f32x4::zero();
        let lanes = quot.to_array();
        assert_eq!(lanes[0], f32::INFINITY);
        assert_eq!(lanes[1], f32::NEG_INFINITY);
        assert!(lanes[2].is_nan());
        assert_eq!(lanes[3], f32::INFINITY);
    }

    #[test]
    fn equal_lanes_compare_to_all_bits_set() {
        let mask = f32x4::splat(1.0).cmp_eq(f32x4::splat(1.0));
        for lane in mask.to_array() {
            assert_eq!(lane.to_bits(), u32::MAX);
        }

        let mask = f32x4::splat(1.0).cmp_eq(f32x4::splat(2.0));
        for lane in mask.to_array() {
            assert_eq!(lane.to_bits(), 0);
        }
    }

    #[test]
    fn ordered_comparisons_set_the_expected_lanes() {
        let a = v4(1.0, 2.0, 3.0, 4.0);
        let b = v4(2.0, 2.0, 2.0, 2.0);

        let bits = |v: f32x4| v.to_array().map(f32::to_bits);
        let t = u32::MAX;

        assert_eq!(bits(a.cmp_eq(b)), [0, t, 0, 0]);
        assert_eq!(bits(a.cmp_ne(b)), [t, 0, t, t]);
        assert_eq!(bits(a.cmp_lt(b)), [t, 0, 0, 0]);
        assert_eq!(bits(a.cmp_le(b)), [t, t, 0, 0]);
        assert_eq!(bits(a.cmp_gt(b)), [0, 0, t, t]);
        assert_eq!(bits(a.cmp_ge(b)), [0, t, t, t]);
    }

    #[test]
    fn nan_lanes_compare_false_in_every_ordered_comparison() {
        let a = v4(f32::NAN, 1.0, f32::NAN, 2.0);
        let b = v4(1.0, f32::NAN, f32::NAN, 2.0);

        for mask in [
            a.cmp_eq(b),
            a.cmp_lt(b),
            a.cmp_le(b),
            a.cmp_gt(b),
            a.cmp_ge(b),
            a.cmp_ne(b),
        ] {
            let lanes = mask.to_array().map(f32::to_bits);
            assert_eq!(lanes[0], 0);
            assert_eq!(lanes[1], 0);
            assert_eq!(lanes[2], 0);
        }

        // The equal non-NaN lane still participates normally.
        assert_eq!(a.cmp_eq(b).to_array()[3].to_bits(), u32::MAX);
        assert_eq!(a.cmp_ne(b).to_array()[3].to_bits(), 0);
    }

    #[test]
    fn horizontal_reductions_fold_all_lanes() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.horizontal_sum(), 10.0);
        assert_eq!(v.horizontal_max(), 4.0);
        assert_eq!(v.horizontal_min(), 1.0);
    }

    #[test]
    fn horizontal_reductions_are_lane_order_independent() {
        let v = v4(4.0, -7.0, 0.5, 2.5);
        assert_eq!(v.horizontal_sum(), 0.0);
        assert_eq!(v.horizontal_max(), 4.0);
        assert_eq!(v.horizontal_min(), -7.0);
    }

    #[test]
    fn min_max_select_lane_wise() {
        let a = v4(1.0, 5.0, 3.0, 8.0);
        let b = v4(2.0, 3.0, 4.0, 1.0);
        assert_eq!(a.min(b).to_array(), [1.0, 3.0, 3.0, 1.0]);
        assert_eq!(a.max(b).to_array(), [2.0, 5.0, 4.0, 8.0]);
    }

    #[test]
    fn shuffle_reverse_reverses_lane_order() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        let out = v.shuffle::<{ select::REVERSE }>();
        assert_eq!(out.to_array(), [4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn shuffle_swap_pairs_swaps_adjacent_lanes() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        let out = v.shuffle::<{ select::SWAP_PAIRS }>();
        assert_eq!(out.to_array(), [2.0, 1.0, 4.0, 3.0]);
    }

    #[test]
    fn shuffle_identity_and_duplicate_selectors() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            v.shuffle::<{ select::IDENTITY }>().to_array(),
            [1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(
            v.shuffle::<{ select::DUPLICATE_ODD }>().to_array(),
            [2.0, 2.0, 4.0, 4.0]
        );
        assert_eq!(
            v.shuffle::<{ select::DUPLICATE_EVEN }>().to_array(),
            [1.0, 1.0, 3.0, 3.0]
        );
    }

    #[test]
    fn narrow_permute_is_shuffle() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            v.permute::<{ select::REVERSE }>().to_array(),
            v.shuffle::<{ select::REVERSE }>().to_array()
        );
        assert_eq!(
            v.permute::<{ select::SWAP_PAIRS }>().to_array(),
            v.shuffle::<{ select::SWAP_PAIRS }>().to_array()
        );
    }

    #[test]
    fn blend_set_bits_select_the_second_operand() {
        let a = v4(1.0, 2.0, 3.0, 4.0);
        let b = v4(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.blend::<0b1010>(b).to_array(), [1.0, 6.0, 3.0, 8.0]);
        assert_eq!(a.blend::<0b0000>(b).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.blend::<0b1111>(b).to_array(), [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(
            a.blend::<{ select::blend4(true, false, false, true) }>(b)
                .to_array(),
            [5.0, 2.0, 3.0, 8.0]
        );
    }

    #[test]
    fn transpose_rearranges_rows_into_columns() {
        let mut rows = [
            v4(1.0, 2.0, 3.0, 4.0),
            v4(5.0, 6.0, 7.0, 8.0),
            v4(9.0, 10.0, 11.0, 12.0),
            v4(13.0, 14.0, 15.0, 16.0),
        ];
        f32x4::transpose(&mut rows);
        assert_eq!(rows[0].to_array(), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(rows[1].to_array(), [2.0, 6.0, 10.0, 14.0]);
        assert_eq!(rows[2].to_array(), [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(rows[3].to_array(), [4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let original = [
            v4(1.0, 2.0, 3.0, 4.0),
            v4(5.0, 6.0, 7.0, 8.0),
            v4(9.0, 10.0, 11.0, 12.0),
            v4(13.0, 14.0, 15.0, 16.0),
        ];
        let mut rows = original;
        f32x4::transpose(&mut rows);
        f32x4::transpose(&mut rows);
        for (row, expected) in rows.iter().zip(original.iter()) {
            assert_eq!(row.to_array(), expected.to_array());
        }
    }

    #[test]
    fn extract_last_lane_succeeds() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.extract(3), 4.0);
        assert_eq!(v.try_extract(3), Ok(4.0));
    }

    #[test]
    #[should_panic(expected = "lane index 4 out of range")]
    fn extract_past_the_end_panics() {
        let _ = v4(1.0, 2.0, 3.0, 4.0).extract(4);
    }

    #[test]
    fn try_extract_past_the_end_reports_the_bounds() {
        let v = v4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            v.try_extract(4),
            Err(Error::LaneOutOfRange { lane: 4, lanes: 4 })
        );
        assert_eq!(
            v.try_extract(usize::MAX),
            Err(Error::LaneOutOfRange {
                lane: usize::MAX,
                lanes: 4
            })
        );
    }

    #[test]
    fn vector_is_register_sized_and_aligned() {
        assert_eq!(core::mem::size_of::<f32x4>(), 16);
        assert_eq!(core::mem::align_of::<f32x4>(), 16);

        let v = f32x4::splat(1.0);
        let addr = &v as *const f32x4 as usize;
        assert_eq!(addr % f32x4::ALIGN, 0);
    }
}

#[cfg(all(test, target_arch = "x86_64", target_feature = "avx"))]
mod avx_tests {
    use super::*;
    use crate::select;

    #[test]
    fn wide_construction_and_lane_order() {
        assert_eq!(f32x8::zero().to_array(), [0.0; 8]);
        assert_eq!(f32x8::splat(2.0).to_array(), [2.0; 8]);

        let v = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(v.extract(0), 1.0);
        assert_eq!(v.extract(7), 8.0);
    }

    #[test]
    fn wide_arithmetic_is_lane_wise() {
        let a = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = f32x8::splat(2.0);

        assert_eq!(
            (a + b).to_array(),
            [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(
            (a * b).to_array(),
            [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]
        );
        assert_eq!(
            (a - b).to_array(),
            [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
        assert_eq!(
            (a / b).to_array(),
            [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]
        );

        let mut c = a;
        c += b;
        c -= b;
        c *= b;
        c /= b;
        assert_eq!(c.to_array(), a.to_array());
    }

    #[test]
    fn wide_comparisons_produce_full_lane_masks() {
        let a = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = f32x8::splat(4.0);

        let bits = a.cmp_lt(b).to_array().map(f32::to_bits);
        let t = u32::MAX;
        assert_eq!(bits, [t, t, t, 0, 0, 0, 0, 0]);

        let nan = f32x8::splat(f32::NAN);
        for lane in a.cmp_ne(nan).to_array() {
            assert_eq!(lane.to_bits(), 0);
        }
    }

    #[test]
    fn wide_horizontal_reductions_fold_all_lanes() {
        let v = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(v.horizontal_sum(), 36.0);
        assert_eq!(v.horizontal_max(), 8.0);
        assert_eq!(v.horizontal_min(), 1.0);

        let v = f32x8::from_array([4.0, -7.0, 0.5, 2.5, -1.0, 9.0, 3.0, -11.0]);
        assert_eq!(v.horizontal_sum(), 0.0);
        assert_eq!(v.horizontal_max(), 9.0);
        assert_eq!(v.horizontal_min(), -11.0);
    }

    #[test]
    fn wide_shuffle_selects_within_each_half() {
        let v = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let out = v.shuffle::<{ select::REVERSE }>();
        assert_eq!(out.to_array(), [4.0, 3.0, 2.0, 1.0, 8.0, 7.0, 6.0, 5.0]);
    }

    #[test]
    fn wide_permute_reorders_register_halves() {
        let v = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(
            v.permute::<{ select::SWAP_HALVES }>().to_array(),
            [5.0, 6.0, 7.0, 8.0, 1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(
            v.permute::<{ select::BROADCAST_LOW_HALF }>().to_array(),
            [1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(
            v.permute::<{ select::BROADCAST_HIGH_HALF }>().to_array(),
            [5.0, 6.0, 7.0, 8.0, 5.0, 6.0, 7.0, 8.0]
        );
    }

    #[test]
    fn wide_blend_mask_is_low_lane_first() {
        let a = f32x8::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = f32x8::from_array([10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
        assert_eq!(
            a.blend::<0b1010_1010>(b).to_array(),
            [1.0, 20.0, 3.0, 40.0, 5.0, 60.0, 7.0, 80.0]
        );
    }

    #[test]
    fn wide_transpose_rearranges_rows_into_columns() {
        let mut rows = [f32x8::zero(); 8];
        for (i, row) in rows.iter_mut().enumerate() {
            let base = (i * 8) as f32;
            *row = f32x8::from_array([
                base + 1.0,
                base + 2.0,
                base + 3.0,
                base + 4.0,
                base + 5.0,
                base + 6.0,
                base + 7.0,
                base + 8.0,
            ]);
        }
        f32x8::transpose(&mut rows);
        for (i, row) in rows.iter().enumerate() {
            let lanes = row.to_array();
            for (j, lane) in lanes.iter().enumerate() {
                assert_eq!(*lane, (j * 8 + i) as f32 + 1.0);
            }
        }
    }

    #[test]
    fn wide_transpose_twice_is_identity() {
        let mut rows = [f32x8::zero(); 8];
        for (i, row) in rows.iter_mut().enumerate() {
            *row = f32x8::splat(i as f32) + f32x8::from_array([0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875]);
        }
        let original = rows;
        f32x8::transpose(&mut rows);
        f32x8::transpose(&mut rows);
        for (row, expected) in rows.iter().zip(original.iter()) {
            assert_eq!(row.to_array(), expected.to_array());
        }
    }

    #[test]
    fn wide_extract_is_checked() {
        let v = f32x8::splat(1.0);
        assert_eq!(v.try_extract(7), Ok(1.0));
        assert_eq!(
            v.try_extract(8),
            Err(Error::LaneOutOfRange { lane: 8, lanes: 8 })
        );
    }

    #[test]
    fn wide_vector_is_register_sized_and_aligned() {
        assert_eq!(core::mem::size_of::<f32x8>(), 32);
        assert_eq!(core::mem::align_of::<f32x8>(), 32);
        assert_eq!(f32x8::ALIGN, 32);
    }
}
