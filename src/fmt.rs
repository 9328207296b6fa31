//! Formatting of vector values.
//!
//! The only place lane values cross into an I/O boundary: `Display` (and
//! `Debug`) write the lanes comma-separated inside square brackets, in lane
//! order, reading the vector without touching it. Whole values print without
//! a fractional part (`[3, 3, 3, 3]`, not `[3.0, 3.0, 3.0, 3.0]`);
//! everything else goes through `ryu` for the shortest round-trippable
//! representation.

use core::fmt;

use crate::vector::Simd;

fn write_lane(f: &mut fmt::Formatter<'_>, lane: f32) -> fmt::Result {
    // Fast path: whole values print as integers.
    if lane.fract() == 0.0 && lane.abs() < 1e10 {
        write!(f, "{}", lane as i64)
    } else {
        let mut buffer = ryu::Buffer::new();
        f.write_str(buffer.format(lane))
    }
}

fn write_lanes(f: &mut fmt::Formatter<'_>, lanes: &[f32]) -> fmt::Result {
    f.write_str("[")?;
    for (i, lane) in lanes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_lane(f, *lane)?;
    }
    f.write_str("]")
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl fmt::Display for Simd<f32, 4> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(f, &self.to_array())
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
impl fmt::Debug for Simd<f32, 4> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
impl fmt::Display for Simd<f32, 8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(f, &self.to_array())
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
impl fmt::Debug for Simd<f32, 8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
