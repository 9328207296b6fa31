//! aarch64 backend: NEON (4 lanes).
//!
//! NEON is mandatory on aarch64, so this backend is always present there.
//! The lane-rearrangement operations accept the same selector encodings as
//! the x86 128-bit backend - the two-bits-per-lane shuffle immediate and the
//! low-lane-first blend mask - realized through `vqtbl1q`/`vbslq`, so a
//! given selector value produces the same permutation on either
//! architecture.

use core::arch::aarch64::*;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::Simd;

/// Byte table driving `vqtbl1q` for a `shufps`-style selector.
///
/// Each result lane's four bytes point at the four bytes of the selected
/// source lane.
const fn shuffle_table(select: i32) -> [u8; 16] {
    assert!(
        select >= 0 && select <= 0xFF,
        "shuffle selector must be an 8-bit immediate"
    );
    let mut table = [0u8; 16];
    let mut lane = 0;
    while lane < 4 {
        let source = ((select >> (2 * lane)) & 0b11) as u8;
        let mut byte = 0;
        while byte < 4 {
            table[lane * 4 + byte] = source * 4 + byte as u8;
            byte += 1;
        }
        lane += 1;
    }
    table
}

/// Per-lane words for the `vbslq` blend mask.
const fn blend_mask_lanes(mask: i32) -> [u32; 4] {
    assert!(mask >= 0 && mask < 16, "blend mask must use one bit per lane");
    let mut lanes = [0u32; 4];
    let mut lane = 0;
    while lane < 4 {
        if mask & (1 << lane) != 0 {
            lanes[lane] = u32::MAX;
        }
        lane += 1;
    }
    lanes
}

impl Simd<f32, 4> {
    /// Number of lanes in this backend's native register.
    pub const LANES: usize = 4;

    /// Alignment of the backing NEON register in bytes.
    pub const ALIGN: usize = 16;

    /// An all-lanes-zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self {
            register: unsafe { vdupq_n_f32(0.0) },
            _marker: PhantomData,
        }
    }

    /// Broadcasts `value` into every lane (`vdupq_n_f32`).
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self {
            register: unsafe { vdupq_n_f32(value) },
            _marker: PhantomData,
        }
    }

    /// Builds a vector from four lane values, lane 0 first.
    #[inline(always)]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        // SAFETY: NEON is mandatory on aarch64; `lanes` is a valid 16-byte
        // read.
        Self {
            register: unsafe { vld1q_f32(lanes.as_ptr()) },
            _marker: PhantomData,
        }
    }

    /// Copies the lanes out, lane 0 first.
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        let mut lanes = [0.0f32; 4];
        // SAFETY: NEON is mandatory on aarch64; `lanes` is a valid 16-byte
        // write.
        unsafe { vst1q_f32(lanes.as_mut_ptr(), self.register) };
        lanes
    }

    /// Wraps a raw NEON register.
    ///
    /// Escape hatch for returning the result of a native operation back
    /// into the vector type; ordinary construction goes through
    /// [`splat`](Self::splat) or [`from_array`](Self::from_array).
    #[inline(always)]
    pub fn from_register(register: float32x4_t) -> Self {
        Self { register, _marker: PhantomData }
    }

    /// Unwraps the raw NEON register.
    #[inline(always)]
    pub fn into_register(self) -> float32x4_t {
        self.register
    }

    /// Lane-wise minimum (`vminq_f32`).
    #[inline(always)]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe { vminq_f32(self.register, other.register) })
    }

    /// Lane-wise maximum (`vmaxq_f32`).
    #[inline(always)]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe { vmaxq_f32(self.register, other.register) })
    }

    /// Lane-wise ordered equality; each true lane is all bits set.
    #[inline(always)]
    #[must_use]
    pub fn cmp_eq(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe {
            vreinterpretq_f32_u32(vceqq_f32(self.register, other.register))
        })
    }

    /// Lane-wise ordered not-equal.
    ///
    /// Composed as `lt OR gt`; negating `vceqq` would report NaN lanes as
    /// not-equal, which the ordered contract excludes.
    #[inline(always)]
    #[must_use]
    pub fn cmp_ne(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe {
            vreinterpretq_f32_u32(vorrq_u32(
                vcltq_f32(self.register, other.register),
                vcgtq_f32(self.register, other.register),
            ))
        })
    }

    /// Lane-wise ordered less-than.
    #[inline(always)]
    #[must_use]
    pub fn cmp_lt(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe {
            vreinterpretq_f32_u32(vcltq_f32(self.register, other.register))
        })
    }

    /// Lane-wise ordered less-or-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_le(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe {
            vreinterpretq_f32_u32(vcleq_f32(self.register, other.register))
        })
    }

    /// Lane-wise ordered greater-than.
    #[inline(always)]
    #[must_use]
    pub fn cmp_gt(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe {
            vreinterpretq_f32_u32(vcgtq_f32(self.register, other.register))
        })
    }

    /// Lane-wise ordered greater-or-equal.
    #[inline(always)]
    #[must_use]
    pub fn cmp_ge(self, other: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe {
            vreinterpretq_f32_u32(vcgeq_f32(self.register, other.register))
        })
    }

    /// Sums all four lanes with two pairwise folds (`vpadd`).
    #[inline]
    #[must_use]
    pub fn horizontal_sum(self) -> f32 {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe {
            let sum = vpadd_f32(vget_low_f32(self.register), vget_high_f32(self.register));
            let sum = vpadd_f32(sum, sum);
            vget_lane_f32::<0>(sum)
        }
    }

    /// Maximum over all four lanes, folded pairwise (`vpmax`).
    #[inline]
    #[must_use]
    pub fn horizontal_max(self) -> f32 {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe {
            let max = vpmax_f32(vget_low_f32(self.register), vget_high_f32(self.register));
            let max = vpmax_f32(max, max);
            vget_lane_f32::<0>(max)
        }
    }

    /// Minimum over all four lanes, folded pairwise (`vpmin`).
    #[inline]
    #[must_use]
    pub fn horizontal_min(self) -> f32 {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe {
            let min = vpmin_f32(vget_low_f32(self.register), vget_high_f32(self.register));
            let min = vpmin_f32(min, min);
            vget_lane_f32::<0>(min)
        }
    }

    /// Reorders lanes within the register.
    ///
    /// `SELECT` is the same two-bits-per-result-lane immediate the x86
    /// backend's `shufps` takes, realized here as a `vqtbl1q` byte-table
    /// lookup built at compile time. See [`select`](crate::select) for the
    /// encoding and named selectors.
    #[inline(always)]
    #[must_use]
    pub fn shuffle<const SELECT: i32>(self) -> Self {
        let table = const { shuffle_table(SELECT) };
        // SAFETY: NEON is mandatory on aarch64; `table` is a valid 16-byte
        // read.
        unsafe {
            let idx = vld1q_u8(table.as_ptr());
            Self::from_register(vreinterpretq_f32_u8(vqtbl1q_u8(
                vreinterpretq_u8_f32(self.register),
                idx,
            )))
        }
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

    /// Selects lanes from `self` and `other` under a per-lane bit mask
    /// (`vbslq_f32`).
    ///
    /// `MASK` holds one bit per lane, numbered low-lane-first; a set bit
    /// takes the lane from `other`, matching the x86 `blendps` convention.
    #[inline(always)]
    #[must_use]
    pub fn blend<const MASK: i32>(self, other: Self) -> Self {
        let lanes = const { blend_mask_lanes(MASK) };
        // SAFETY: NEON is mandatory on aarch64; `lanes` is a valid 16-byte
        // read.
        unsafe {
            let mask = vld1q_u32(lanes.as_ptr());
            Self::from_register(vbslq_f32(mask, other.register, self.register))
        }
    }

    /// Transposes four rows of a 4x4 matrix in place.
    ///
    /// `vtrnq` interleaves each row pair, then the 64-bit halves recombine
    /// into columns; no lane ever leaves the register file.
    #[inline]
    pub fn transpose(rows: &mut [Self; 4]) {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe {
            let tmp0 = vtrnq_f32(rows[0].register, rows[1].register);
            let tmp1 = vtrnq_f32(rows[2].register, rows[3].register);

            rows[0].register = vcombine_f32(vget_low_f32(tmp0.0), vget_low_f32(tmp1.0));
            rows[1].register = vcombine_f32(vget_low_f32(tmp0.1), vget_low_f32(tmp1.1));
            rows[2].register = vcombine_f32(vget_high_f32(tmp0.0), vget_high_f32(tmp1.0));
            rows[3].register = vcombine_f32(vget_high_f32(tmp0.1), vget_high_f32(tmp1.1));
        }
    }
}

impl Add for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise addition (`vaddq_f32`).
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe { vaddq_f32(self.register, rhs.register) })
    }
}

impl AddAssign for Simd<f32, 4> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        // SAFETY: NEON is mandatory on aarch64.
        self.register = unsafe { vaddq_f32(self.register, rhs.register) };
    }
}

impl Sub for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise subtraction (`vsubq_f32`).
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe { vsubq_f32(self.register, rhs.register) })
    }
}

impl SubAssign for Simd<f32, 4> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        // SAFETY: NEON is mandatory on aarch64.
        self.register = unsafe { vsubq_f32(self.register, rhs.register) };
    }
}

impl Mul for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise multiplication (`vmulq_f32`).
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe { vmulq_f32(self.register, rhs.register) })
    }
}

impl MulAssign for Simd<f32, 4> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        // SAFETY: NEON is mandatory on aarch64.
        self.register = unsafe { vmulq_f32(self.register, rhs.register) };
    }
}

impl Div for Simd<f32, 4> {
    type Output = Self;

    /// Lane-wise division (`vdivq_f32`); zero divisors give inf/NaN lanes.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        // SAFETY: NEON is mandatory on aarch64.
        Self::from_register(unsafe { vdivq_f32(self.register, rhs.register) })
    }
}

impl DivAssign for Simd<f32, 4> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        // SAFETY: NEON is mandatory on aarch64.
        self.register = unsafe { vdivq_f32(self.register, rhs.register) };
    }
}
