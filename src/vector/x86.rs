//! x86_64 backends: SSE (4 lanes) and AVX (8 lanes).
//!
//! Each backend is a set of inherent impl blocks on one concrete
//! instantiation of [`Simd`]. SSE is part of the x86_64 baseline, so the
//! 4-lane backend is always present; the 8-lane backend exists only when the
//! crate is compiled with the `avx` target feature
//! (`-C target-feature=+avx`), keeping backend selection a build-time
//! decision.
//!
//! # Safety
//!
//! All intrinsics used by the 4-lane backend are SSE/SSE2 (baseline on
//! x86_64), with one exception: `blend` prefers `blendps` when the build
//! enables sse4.1 and otherwise composes the same selection out of baseline
//! bitwise operations. The 8-lane backend only compiles when `avx` is
//! statically enabled, so its intrinsics are always available where the code
//! exists.

use core::arch::x86_64::*;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::Simd;
use crate::select;

/// Lane words for the bitwise-select fallback of the 4-lane `blend`.
#[cfg(not(target_feature = "sse4.1"))]
const fn blend_mask_words(mask: i32) -> [i32; 4] {
    assert!(mask >= 0 && mask < 16, "blend mask must use one bit per lane");
    let mut words = [0i32; 4];
    let mut lane = 0;
    while lane < 4 {
        if mask & (1 << lane) != 0 {
            words[lane] = -1;
        }
        lane += 1;
    }
    words
}

impl Simd<f32, 4> {
    /// Number of lanes in this backend's native register.
    pub const LANES: usize = 4;

    /// Alignment of the backing SSE register in bytes.
    pub const ALIGN: usize = 16;

    /// An all-lanes-zero vector (`xorps`).
    #[inline(always)]
    pub fn zero() -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self {
            register: unsafe { _mm_setzero_ps() },
            _marker: PhantomData,
        }
    }

    /// Broadcasts `value` into every lane (`shufps` splat).
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self {
            register: unsafe { _mm_set1_ps(value) },
            _marker: PhantomData,
        }
    }

    /// Builds a vector from four lane values, lane 0 first.
    #[inline(always)]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        // SAFETY: `lanes` is a valid 16-byte read; `loadu` has no alignment
        // requirement.
        Self {
            register: unsafe { _mm_loadu_ps(lanes.as_ptr()) },
            _marker: PhantomData,
        }
    }

    /// Copies the lanes out, lane 0 first.
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        let mut lanes = [0.0f32; 4];
        // SAFETY: `lanes` is a valid 16-byte write.
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.register) };
        lanes
    }

    /// Wraps a raw SSE register.
    ///
    /// Escape hatch for returning the result of a native operation back
    /// into the vector type; ordinary construction goes through
    /// [`splat`](Self::splat) or [`from_array`](Self::from_array).
    #[inline(always)]
    pub fn from_register(register: __m128) -> Self {
        Self { register, _marker: PhantomData }
    }

    /// Unwraps the raw SSE register.
    #[inline(always)]
    pub fn into_register(self) -> __m128 {
        self.register
    }

    /// Lane-wise minimum (`minps`).
    #[inline(always)]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_min_ps(self.register, other.register) })
    }

    /// Lane-wise maximum (`maxps`).
    #[inline(always)]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_max_ps(self.register, other.register) })
    }

    /// Lane-wise ordered equality; each true lane is all bits set.
    #[inline(always)]
    #[must_use]
    pub fn cmp_eq(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_cmpeq_ps(self.register, other.register) })
    }

    /// Lane-wise ordered not-equal.
    ///
    /// Composed as `lt OR gt` rather than `cmpneqps`, whose predicate is
    /// unordered and would report NaN lanes as not-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_ne(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe {
            _mm_or_ps(
                _mm_cmplt_ps(self.register, other.register),
                _mm_cmpgt_ps(self.register, other.register),
            )
        })
    }

    /// Lane-wise ordered less-than.
    #[inline(always)]
    #[must_use]
    pub fn cmp_lt(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_cmplt_ps(self.register, other.register) })
    }

    /// Lane-wise ordered less-or-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_le(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_cmple_ps(self.register, other.register) })
    }

    /// Lane-wise ordered greater-than.
    #[inline(always)]
    #[must_use]
    pub fn cmp_gt(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_cmpgt_ps(self.register, other.register) })
    }

    /// Lane-wise ordered greater-or-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_ge(self, other: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_cmpge_ps(self.register, other.register) })
    }

    /// Sums all four lanes with a two-level in-register fold.
    ///
    /// The first step adds each odd lane onto the even lane below it via the
    /// odd-lane duplication shuffle; the second moves the high pair down and
    /// adds once more. No lane is ever extracted to scalar code before the
    /// final `cvtss`.
    #[inline]
    #[must_use]
    pub fn horizontal_sum(self) -> f32 {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let shuf =
                _mm_shuffle_ps::<{ select::DUPLICATE_ODD }>(self.register, self.register);
            let sums = _mm_add_ps(self.register, shuf);
            let shuf = _mm_movehl_ps(shuf, sums);
            let sums = _mm_add_ss(sums, shuf);
            _mm_cvtss_f32(sums)
        }
    }

    /// Maximum over all four lanes, folded in-register.
    #[inline]
    #[must_use]
    pub fn horizontal_max(self) -> f32 {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let shuf =
                _mm_shuffle_ps::<{ select::DUPLICATE_ODD }>(self.register, self.register);
            let maxs = _mm_max_ps(self.register, shuf);
            let shuf = _mm_movehl_ps(shuf, maxs);
            let maxs = _mm_max_ss(maxs, shuf);
            _mm_cvtss_f32(maxs)
        }
    }

    /// Minimum over all four lanes, folded in-register.
    #[inline]
    #[must_use]
    pub fn horizontal_min(self) -> f32 {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let shuf =
                _mm_shuffle_ps::<{ select::DUPLICATE_ODD }>(self.register, self.register);
            let mins = _mm_min_ps(self.register, shuf);
            let shuf = _mm_movehl_ps(shuf, mins);
            let mins = _mm_min_ss(mins, shuf);
            _mm_cvtss_f32(mins)
        }
    }

    /// Reorders lanes within the register (`shufps`).
    ///
    /// `SELECT` is the native 8-bit immediate: two bits per result lane, low
    /// lane first. See [`select`](crate::select) for the encoding and named
    /// selectors.
    #[inline(always)]
    #[must_use]
    pub fn shuffle<const SELECT: i32>(self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_shuffle_ps::<SELECT>(self.register, self.register) })
    }

    /// Reorders lanes within the register.
    ///
    /// On this 128-bit backend there is no larger sub-block to move, so
    /// `permute` is the same operation as [`shuffle`](Self::shuffle).
    #[inline(always)]
    #[must_use]
    pub fn permute<const SELECT: i32>(self) -> Self {
        self.shuffle::<SELECT>()
    }

    /// Selects lanes from `self` and `other` under a per-lane bit mask.
    ///
    /// `MASK` holds one bit per lane, numbered low-lane-first; a set bit
    /// takes the lane from `other`, a clear bit keeps `self` (the `blendps`
    /// convention). Compiled as `blendps` when sse4.1 is enabled, and as the
    /// equivalent and/andnot/or selection otherwise.
    #[inline(always)]
    #[must_use]
    pub fn blend<const MASK: i32>(self, other: Self) -> Self {
        #[cfg(target_feature = "sse4.1")]
        // SAFETY: sse4.1 is statically enabled in this configuration.
        return unsafe {
            Self::from_register(_mm_blend_ps::<MASK>(self.register, other.register))
        };

        #[cfg(not(target_feature = "sse4.1"))]
        // SAFETY: SSE is baseline on x86_64.
        return unsafe {
            let words = const { blend_mask_words(MASK) };
            let mask = _mm_castsi128_ps(_mm_set_epi32(words[3], words[2], words[1], words[0]));
            Self::from_register(_mm_or_ps(
                _mm_and_ps(mask, other.register),
                _mm_andnot_ps(mask, self.register),
            ))
        };
    }

    /// Transposes four rows of a 4x4 matrix in place.
    ///
    /// Pure interleave/half-move sequence (`unpcklps`/`unpckhps` +
    /// `movlhps`/`movhlps`); no lane ever leaves the register file.
    #[inline]
    pub fn transpose(rows: &mut [Self; 4]) {
        // SAFETY: SSE is baseline on x86_64.
        unsafe {
            let tmp0 = _mm_unpacklo_ps(rows[0].register, rows[1].register);
            let tmp1 = _mm_unpackhi_ps(rows[0].register, rows[1].register);
            let tmp2 = _mm_unpacklo_ps(rows[2].register, rows[3].register);
            let tmp3 = _mm_unpackhi_ps(rows[2].register, rows[3].register);

            rows[0].register = _mm_movelh_ps(tmp0, tmp2);
            rows[1].register = _mm_movehl_ps(tmp2, tmp0);
            rows[2].register = _mm_movelh_ps(tmp1, tmp3);
            rows[3].register = _mm_movehl_ps(tmp3, tmp1);
        }
    }
}

impl Add for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise addition (`addps`).
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_add_ps(self.register, rhs.register) })
    }
}

impl AddAssign for Simd<f32, 4> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        // SAFETY: SSE is baseline on x86_64.
        self.register = unsafe { _mm_add_ps(self.register, rhs.register) };
    }
}

impl Sub for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise subtraction (`subps`).
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_sub_ps(self.register, rhs.register) })
    }
}

impl SubAssign for Simd<f32, 4> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        // SAFETY: SSE is baseline on x86_64.
        self.register = unsafe { _mm_sub_ps(self.register, rhs.register) };
    }
}

impl Mul for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise multiplication (`mulps`).
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_mul_ps(self.register, rhs.register) })
    }
}

impl MulAssign for Simd<f32, 4> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        // SAFETY: SSE is baseline on x86_64.
        self.register = unsafe { _mm_mul_ps(self.register, rhs.register) };
    }
}

impl Div for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise division (`divps`); zero divisors give inf/NaN lanes.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        // SAFETY: SSE is baseline on x86_64.
        Self::from_register(unsafe { _mm_div_ps(self.register, rhs.register) })
    }
}

impl DivAssign for Simd<f32, 4> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        // SAFETY: SSE is baseline on x86_64.
        self.register = unsafe { _mm_div_ps(self.register, rhs.register) };
    }
}

// ============================================================================
// AVX backend (8 lanes), present only when the `avx` target feature is
// statically enabled.
// ============================================================================

#[cfg(target_feature = "avx")]
impl Simd<f32, 8> {
    /// Number of lanes in this backend's native register.
    pub const LANES: usize = 8;

    /// Alignment of the backing AVX register in bytes.
    pub const ALIGN: usize = 32;

    /// An all-lanes-zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self {
            register: unsafe { _mm256_setzero_ps() },
            _marker: PhantomData,
        }
    }

    /// Broadcasts `value` into every lane.
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self {
            register: unsafe { _mm256_set1_ps(value) },
            _marker: PhantomData,
        }
    }

    /// Builds a vector from eight lane values, lane 0 first.
    #[inline(always)]
    pub fn from_array(lanes: [f32; 8]) -> Self {
        // SAFETY: avx is statically enabled; `lanes` is a valid 32-byte
        // unaligned read.
        Self {
            register: unsafe { _mm256_loadu_ps(lanes.as_ptr()) },
            _marker: PhantomData,
        }
    }

    /// Copies the lanes out, lane 0 first.
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [f32; 8] {
        let mut lanes = [0.0f32; 8];
        // SAFETY: avx is statically enabled; `lanes` is a valid 32-byte
        // write.
        unsafe { _mm256_storeu_ps(lanes.as_mut_ptr(), self.register) };
        lanes
    }

    /// Wraps a raw AVX register. Escape hatch, same contract as the 4-lane
    /// `from_register`.
    #[inline(always)]
    pub fn from_register(register: __m256) -> Self {
        Self { register, _marker: PhantomData }
    }

    /// Unwraps the raw AVX register.
    #[inline(always)]
    pub fn into_register(self) -> __m256 {
        self.register
    }

    /// Lane-wise minimum.
    #[inline(always)]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_min_ps(self.register, other.register) })
    }

    /// Lane-wise maximum.
    #[inline(always)]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_max_ps(self.register, other.register) })
    }

    /// Lane-wise ordered equality; each true lane is all bits set.
    #[inline(always)]
    #[must_use]
    pub fn cmp_eq(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_cmp_ps::<_CMP_EQ_OQ>(self.register, other.register)
        })
    }

    /// Lane-wise ordered not-equal (`_CMP_NEQ_OQ`; NaN lanes report false).
    #[inline(always)]
    #[must_use]
    pub fn cmp_ne(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_cmp_ps::<_CMP_NEQ_OQ>(self.register, other.register)
        })
    }

    /// Lane-wise ordered less-than.
    #[inline(always)]
    #[must_use]
    pub fn cmp_lt(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_cmp_ps::<_CMP_LT_OQ>(self.register, other.register)
        })
    }

    /// Lane-wise ordered less-or-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_le(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_cmp_ps::<_CMP_LE_OQ>(self.register, other.register)
        })
    }

    /// Lane-wise ordered greater-than.
    #[inline(always)]
    #[must_use]
    pub fn cmp_gt(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_cmp_ps::<_CMP_GT_OQ>(self.register, other.register)
        })
    }

    /// Lane-wise ordered greater-or-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_ge(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_cmp_ps::<_CMP_GE_OQ>(self.register, other.register)
        })
    }

    /// Sums all eight lanes with a three-level in-register fold.
    ///
    /// The high half is folded onto the low half first, then the remaining
    /// four lanes collapse with the same two steps as the 128-bit backend.
    #[inline]
    #[must_use]
    pub fn horizontal_sum(self) -> f32 {
        // SAFETY: avx is statically enabled for this impl.
        unsafe {
            let quad = _mm_add_ps(
                _mm256_castps256_ps128(self.register),
                _mm256_extractf128_ps::<1>(self.register),
            );
            let shuf = _mm_shuffle_ps::<{ select::DUPLICATE_ODD }>(quad, quad);
            let sums = _mm_add_ps(quad, shuf);
            let shuf = _mm_movehl_ps(shuf, sums);
            let sums = _mm_add_ss(sums, shuf);
            _mm_cvtss_f32(sums)
        }
    }

    /// Maximum over all eight lanes, folded in-register.
    #[inline]
    #[must_use]
    pub fn horizontal_max(self) -> f32 {
        // SAFETY: avx is statically enabled for this impl.
        unsafe {
            let quad = _mm_max_ps(
                _mm256_castps256_ps128(self.register),
                _mm256_extractf128_ps::<1>(self.register),
            );
            let shuf = _mm_shuffle_ps::<{ select::DUPLICATE_ODD }>(quad, quad);
            let maxs = _mm_max_ps(quad, shuf);
            let shuf = _mm_movehl_ps(shuf, maxs);
            let maxs = _mm_max_ss(maxs, shuf);
            _mm_cvtss_f32(maxs)
        }
    }

    /// Minimum over all eight lanes, folded in-register.
    #[inline]
    #[must_use]
    pub fn horizontal_min(self) -> f32 {
        // SAFETY: avx is statically enabled for this impl.
        unsafe {
            let quad = _mm_min_ps(
                _mm256_castps256_ps128(self.register),
                _mm256_extractf128_ps::<1>(self.register),
            );
            let shuf = _mm_shuffle_ps::<{ select::DUPLICATE_ODD }>(quad, quad);
            let mins = _mm_min_ps(quad, shuf);
            let shuf = _mm_movehl_ps(shuf, mins);
            let mins = _mm_min_ss(mins, shuf);
            _mm_cvtss_f32(mins)
        }
    }

    /// Reorders lanes within each 128-bit half (`vpermilps`).
    ///
    /// `SELECT` uses the same two-bits-per-lane encoding as the 128-bit
    /// `shuffle`, applied to both halves independently - that is what the
    /// native instruction does, and the immediate is passed through
    /// unchanged. Crossing the halves is [`permute`](Self::permute)'s job.
    #[inline(always)]
    #[must_use]
    pub fn shuffle<const SELECT: i32>(self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_permute_ps::<SELECT>(self.register) })
    }

    /// Reorders the two 128-bit register halves (`vperm2f128`).
    ///
    /// `SELECT` is the native immediate: bits 1:0 choose the source half for
    /// the low result half (0 = low, 1 = high), bits 5:4 for the high result
    /// half; bits 3 and 7 zero the respective half, as in the native
    /// encoding. See the half-granularity constants in
    /// [`select`](crate::select).
    #[inline(always)]
    #[must_use]
    pub fn permute<const SELECT: i32>(self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_permute2f128_ps::<SELECT>(self.register, self.register)
        })
    }

    /// Selects lanes from `self` and `other` under a per-lane bit mask
    /// (`vblendps`).
    ///
    /// `MASK` holds one bit per lane, numbered low-lane-first; a set bit
    /// takes the lane from `other`.
    #[inline(always)]
    #[must_use]
    pub fn blend<const MASK: i32>(self, other: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe {
            _mm256_blend_ps::<MASK>(self.register, other.register)
        })
    }

    /// Transposes eight rows of an 8x8 matrix in place.
    ///
    /// Two-level block transpose: `unpcklps`/`unpckhps` and `shufps`
    /// transpose each 4x4 block within the 128-bit lanes, then `vperm2f128`
    /// combines the blocks across the register halves.
    #[inline]
    pub fn transpose(rows: &mut [Self; 8]) {
        // SAFETY: avx is statically enabled for this impl.
        unsafe {
            let t0 = _mm256_unpacklo_ps(rows[0].register, rows[1].register);
            let t1 = _mm256_unpackhi_ps(rows[0].register, rows[1].register);
            let t2 = _mm256_unpacklo_ps(rows[2].register, rows[3].register);
            let t3 = _mm256_unpackhi_ps(rows[2].register, rows[3].register);
            let t4 = _mm256_unpacklo_ps(rows[4].register, rows[5].register);
            let t5 = _mm256_unpackhi_ps(rows[4].register, rows[5].register);
            let t6 = _mm256_unpacklo_ps(rows[6].register, rows[7].register);
            let t7 = _mm256_unpackhi_ps(rows[6].register, rows[7].register);

            let s0 = _mm256_shuffle_ps::<0x44>(t0, t2);
            let s1 = _mm256_shuffle_ps::<0xEE>(t0, t2);
            let s2 = _mm256_shuffle_ps::<0x44>(t1, t3);
            let s3 = _mm256_shuffle_ps::<0xEE>(t1, t3);
            let s4 = _mm256_shuffle_ps::<0x44>(t4, t6);
            let s5 = _mm256_shuffle_ps::<0xEE>(t4, t6);
            let s6 = _mm256_shuffle_ps::<0x44>(t5, t7);
            let s7 = _mm256_shuffle_ps::<0xEE>(t5, t7);

            rows[0].register = _mm256_permute2f128_ps::<0x20>(s0, s4);
            rows[1].register = _mm256_permute2f128_ps::<0x20>(s1, s5);
            rows[2].register = _mm256_permute2f128_ps::<0x20>(s2, s6);
            rows[3].register = _mm256_permute2f128_ps::<0x20>(s3, s7);
            rows[4].register = _mm256_permute2f128_ps::<0x31>(s0, s4);
            rows[5].register = _mm256_permute2f128_ps::<0x31>(s1, s5);
            rows[6].register = _mm256_permute2f128_ps::<0x31>(s2, s6);
            rows[7].register = _mm256_permute2f128_ps::<0x31>(s3, s7);
        }
    }
}

#[cfg(target_feature = "avx")]
impl Add for Simd<f32, 8> {
    type Output = Self;

    /// Lane-wise addition.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_add_ps(self.register, rhs.register) })
    }
}

#[cfg(target_feature = "avx")]
impl AddAssign for Simd<f32, 8> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        // SAFETY: avx is statically enabled for this impl.
        self.register = unsafe { _mm256_add_ps(self.register, rhs.register) };
    }
}

#[cfg(target_feature = "avx")]
impl Sub for Simd<f32, 8> {
    type Output = Self;

    /// Lane-wise subtraction.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_sub_ps(self.register, rhs.register) })
    }
}

#[cfg(target_feature = "avx")]
impl SubAssign for Simd<f32, 8> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        // SAFETY: avx is statically enabled for this impl.
        self.register = unsafe { _mm256_sub_ps(self.register, rhs.register) };
    }
}

#[cfg(target_feature = "avx")]
impl Mul for Simd<f32, 8> {
    type Output = Self;

    /// Lane-wise multiplication.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_mul_ps(self.register, rhs.register) })
    }
}

#[cfg(target_feature = "avx")]
impl MulAssign for Simd<f32, 8> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        // SAFETY: avx is statically enabled for this impl.
        self.register = unsafe { _mm256_mul_ps(self.register, rhs.register) };
    }
}

#[cfg(target_feature = "avx")]
impl Div for Simd<f32, 8> {
    type Output = Self;

    /// Lane-wise division; zero divisors give inf/NaN lanes.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        // SAFETY: avx is statically enabled for this impl.
        Self::from_register(unsafe { _mm256_div_ps(self.register, rhs.register) })
    }
}

#[cfg(target_feature = "avx")]
impl DivAssign for Simd<f32, 8> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        // SAFETY: avx is statically enabled for this impl.
        self.register = unsafe { _mm256_div_ps(self.register, rhs.register) };
    }
}
