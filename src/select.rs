//! Named lane selectors for `shuffle`, `permute` and `blend`.
//!
//! The rearrangement operations take `const` immediates whose bit layouts
//! are those of the wrapped instructions. Raw integers make it easy to pass
//! a selector that means different things to different readers, so this
//! module spells out the encoding once and gives the common permutations
//! names. Selector fields are validated in `const` context - an out-of-range
//! lane index is a compile-time error, not a silent truncation.
//!
//! # Encoding
//!
//! For the 128-bit shuffles (and the in-half selection of the 256-bit
//! shuffle), the immediate packs one two-bit source-lane index per result
//! lane, low lane first:
//!
//! ```text
//! bits 1:0 -> source lane for result lane 0
//! bits 3:2 -> source lane for result lane 1
//! bits 5:4 -> source lane for result lane 2
//! bits 7:6 -> source lane for result lane 3
//! ```
//!
//! For the 256-bit `permute`, the immediate selects at register-half
//! granularity (`vperm2f128`): bits 1:0 pick the source half for the low
//! result half (0 = low, 1 = high), bits 5:4 pick it for the high result
//! half.
//!
//! For `blend`, the immediate holds one bit per lane, numbered
//! low-lane-first; a set bit selects the lane from the second operand.

/// Builds a four-lane shuffle selector from per-result-lane source indices.
///
/// `lanes4(a, b, c, d)` places source lane `a` in result lane 0, `b` in
/// result lane 1, and so on. Each index must be in `[0, 4)`; violations are
/// caught at compile time when the selector is used as a `const` argument.
///
/// # Examples
///
/// ```rust
/// use lanewise::select::{REVERSE, lanes4};
///
/// assert_eq!(lanes4(3, 2, 1, 0), REVERSE);
/// ```
#[inline]
pub const fn lanes4(l0: u32, l1: u32, l2: u32, l3: u32) -> i32 {
    assert!(l0 < 4 && l1 < 4 && l2 < 4 && l3 < 4, "lane index out of range");
    (l0 | (l1 << 2) | (l2 << 4) | (l3 << 6)) as i32
}

/// Builds a four-lane blend mask from per-lane choices.
///
/// A `true` lane takes its value from the second operand of
/// [`blend`](crate::vector::Simd::blend), a `false` lane keeps the first.
#[inline]
pub const fn blend4(l0: bool, l1: bool, l2: bool, l3: bool) -> i32 {
    (l0 as i32) | ((l1 as i32) << 1) | ((l2 as i32) << 2) | ((l3 as i32) << 3)
}

/// Leaves every lane in place: `(a, b, c, d)` -> `(a, b, c, d)`.
pub const IDENTITY: i32 = lanes4(0, 1, 2, 3);

/// Reverses lane order: `(a, b, c, d)` -> `(d, c, b, a)`.
pub const REVERSE: i32 = lanes4(3, 2, 1, 0);

/// Swaps the two lanes of each adjacent pair: `(a, b, c, d)` -> `(b, a, d, c)`.
pub const SWAP_PAIRS: i32 = lanes4(1, 0, 3, 2);

/// Duplicates each odd lane over the even lane below it:
/// `(a, b, c, d)` -> `(b, b, d, d)`.
///
/// This is the lane movement the horizontal reductions use for their first
/// combine step.
pub const DUPLICATE_ODD: i32 = lanes4(1, 1, 3, 3);

/// Duplicates each even lane over the odd lane above it:
/// `(a, b, c, d)` -> `(a, a, c, c)`.
pub const DUPLICATE_EVEN: i32 = lanes4(0, 0, 2, 2);

/// Half-granularity selector leaving both halves in place.
pub const HALF_IDENTITY: i32 = 0x10;

/// Half-granularity selector exchanging the low and high register halves.
pub const SWAP_HALVES: i32 = 0x01;

/// Half-granularity selector repeating the low half into both halves.
pub const BROADCAST_LOW_HALF: i32 = 0x00;

/// Half-granularity selector repeating the high half into both halves.
pub const BROADCAST_HIGH_HALF: i32 = 0x11;
