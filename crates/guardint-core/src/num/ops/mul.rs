// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Checked Multiplication
//!
//! Multiplication overflow cannot be read back from a single ordering
//! comparison, so the product is computed in a representation where it
//! always fits and then checked against the bounds of the operand type.
//!
//! - 8, 16 and 32-bit operands are widened to the next native width, where
//!   the product of any two narrower values cannot overflow.
//! - 64-bit operands go through [`wide_mul_u64`], a double-word multiply
//!   split into high and low halves. The signed branch multiplies
//!   magnitudes and reapplies the sign, with `i64::MIN` special-cased since
//!   it has no positive counterpart.
//! - `isize`/`usize` forward to the branch matching the target's pointer
//!   width.
//!
//! The branch is picked per type through [`Integer::mul_by_width`], so there
//! is no runtime type inspection.

use crate::num::bounds::{max, min};
use crate::num::integer::Integer;

/// Multiplies `a` and `b`, returning `None` if the exact product is not
/// representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::ops::mul::mul;
/// assert_eq!(mul(127u8, 2), Some(254));
/// assert_eq!(mul(255u8, 2), None);
/// assert_eq!(mul(i64::MIN / 2, 2), Some(i64::MIN));
/// assert_eq!(mul(i64::MIN, -1), None);
/// ```
#[inline]
pub fn mul<T: Integer>(a: T, b: T) -> Option<T> {
    a.mul_by_width(b)
}

/// Computes the full 128-bit product of two `u64` values, returned as
/// `(high, low)` halves.
///
/// The product is assembled from four 32×32-bit partial products, so no
/// native 128-bit type is involved.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::ops::mul::wide_mul_u64;
/// assert_eq!(wide_mul_u64(3, 4), (0, 12));
/// assert_eq!(wide_mul_u64(1 << 32, 1 << 32), (1, 0));
/// assert_eq!(wide_mul_u64(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
/// ```
#[inline]
pub fn wide_mul_u64(a: u64, b: u64) -> (u64, u64) {
    const MASK: u64 = 0xFFFF_FFFF;

    let (a_lo, a_hi) = (a & MASK, a >> 32);
    let (b_lo, b_hi) = (b & MASK, b >> 32);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    // Each partial sum stays below 2^64: (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1.
    let mid = hi_lo + (lo_lo >> 32);
    let cross = (mid & MASK) + lo_hi;

    let high = hi_hi + (mid >> 32) + (cross >> 32);
    let low = (cross << 32) | (lo_lo & MASK);
    (high, low)
}

macro_rules! widening_mul {
    ($name:ident, $t:ty, $wide:ty) => {
        #[inline(always)]
        pub(crate) fn $name(a: $t, b: $t) -> Option<$t> {
            let product = <$wide>::from(a) * <$wide>::from(b);
            if <$wide>::from(min::<$t>()) <= product && product <= <$wide>::from(max::<$t>()) {
                Some(product as $t)
            } else {
                None
            }
        }
    };
}

widening_mul!(mul_u8, u8, u16);
widening_mul!(mul_u16, u16, u32);
widening_mul!(mul_u32, u32, u64);

widening_mul!(mul_i8, i8, i16);
widening_mul!(mul_i16, i16, i32);
widening_mul!(mul_i32, i32, i64);

#[inline(always)]
pub(crate) fn mul_u64(a: u64, b: u64) -> Option<u64> {
    match wide_mul_u64(a, b) {
        (0, low) => Some(low),
        _ => None,
    }
}

#[inline(always)]
pub(crate) fn mul_i64(a: i64, b: i64) -> Option<i64> {
    let negative = (a < 0) != (b < 0);
    let (high, low) = wide_mul_u64(a.unsigned_abs(), b.unsigned_abs());
    if high != 0 {
        return None;
    }

    if low <= max::<i64>() as u64 {
        let magnitude = low as i64;
        return Some(if negative { -magnitude } else { magnitude });
    }

    // A magnitude of exactly 2^63 is representable, but only as a negative.
    if negative && low == min::<i64>().unsigned_abs() {
        Some(min::<i64>())
    } else {
        None
    }
}

#[cfg(target_pointer_width = "16")]
#[inline(always)]
pub(crate) fn mul_usize(a: usize, b: usize) -> Option<usize> {
    mul_u16(a as u16, b as u16).map(|p| p as usize)
}

#[cfg(target_pointer_width = "16")]
#[inline(always)]
pub(crate) fn mul_isize(a: isize, b: isize) -> Option<isize> {
    mul_i16(a as i16, b as i16).map(|p| p as isize)
}

#[cfg(target_pointer_width = "32")]
#[inline(always)]
pub(crate) fn mul_usize(a: usize, b: usize) -> Option<usize> {
    mul_u32(a as u32, b as u32).map(|p| p as usize)
}

#[cfg(target_pointer_width = "32")]
#[inline(always)]
pub(crate) fn mul_isize(a: isize, b: isize) -> Option<isize> {
    mul_i32(a as i32, b as i32).map(|p| p as isize)
}

#[cfg(target_pointer_width = "64")]
#[inline(always)]
pub(crate) fn mul_usize(a: usize, b: usize) -> Option<usize> {
    mul_u64(a as u64, b as u64).map(|p| p as usize)
}

#[cfg(target_pointer_width = "64")]
#[inline(always)]
pub(crate) fn mul_isize(a: isize, b: isize) -> Option<isize> {
    mul_i64(a as i64, b as i64).map(|p| p as isize)
}
