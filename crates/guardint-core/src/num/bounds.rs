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

//! # Type Bounds
//!
//! Minimum and maximum representable values of an [`Integer`], derived from
//! the type's physical size and the signedness probe `0 - 1 < 0`. No
//! per-width constant table is consulted.

use crate::num::integer::Integer;

/// Returns the number of bits in the in-memory representation of `T`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::bounds::bits;
/// assert_eq!(bits::<u8>(), 8);
/// assert_eq!(bits::<i64>(), 64);
/// assert_eq!(bits::<usize>(), usize::BITS as usize);
/// ```
#[inline(always)]
pub const fn bits<T: Integer>() -> usize {
    core::mem::size_of::<T>() * 8
}

/// Returns `true` if `T` is a signed type.
///
/// Subtracting one from zero yields `-1` in a signed type and wraps to the
/// all-ones pattern in an unsigned one.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::bounds::is_signed;
/// assert!(is_signed::<i32>());
/// assert!(!is_signed::<u32>());
/// ```
#[inline(always)]
pub fn is_signed<T: Integer>() -> bool {
    T::MINUS_ONE < T::zero()
}

/// Returns the smallest value representable by `T`.
///
/// For signed types this is `-(1 << (bits - 1))`, for unsigned types `0`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::bounds::min;
/// assert_eq!(min::<i8>(), -128);
/// assert_eq!(min::<u64>(), 0);
/// ```
#[inline(always)]
pub fn min<T: Integer>() -> T {
    if is_signed::<T>() {
        T::MINUS_ONE << (bits::<T>() - 1)
    } else {
        T::zero()
    }
}

/// Returns the largest value representable by `T`.
///
/// For signed types this is `(1 << (bits - 1)) - 1`, for unsigned types the
/// all-ones bit pattern.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::bounds::max;
/// assert_eq!(max::<i8>(), 127);
/// assert_eq!(max::<u16>(), 65535);
/// ```
#[inline(always)]
pub fn max<T: Integer>() -> T {
    if is_signed::<T>() {
        // `1 << (bits - 1)` is the minimum; stepping back wraps to the maximum.
        (T::one() << (bits::<T>() - 1)).wrapping_sub(&T::one())
    } else {
        !T::zero()
    }
}
