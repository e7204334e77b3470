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

//! # Checked Addition and Subtraction
//!
//! One generic algorithm per operation, valid for every width and signedness.
//! The operands are combined with wrapping arithmetic, and overflow is read
//! back from the ordering of the result against the left operand: adding a
//! positive value must increase it, adding a non-positive value must not.
//! Only relative ordering is compared, so no sign bit is assumed and no
//! wider type is needed.

use crate::num::integer::Integer;

/// Adds `a` and `b`, returning `None` if the exact sum is not representable
/// in `T`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::ops::additive::add;
/// assert_eq!(add(126i8, 1), Some(127));
/// assert_eq!(add(127i8, 1), None);
/// assert_eq!(add(-128i8, -1), None);
/// assert_eq!(add(200u8, 55), Some(255));
/// ```
#[inline]
pub fn add<T: Integer>(a: T, b: T) -> Option<T> {
    let c = a.wrapping_add(&b);
    if (c > a) == (b > T::zero()) {
        Some(c)
    } else {
        None
    }
}

/// Subtracts `b` from `a`, returning `None` if the exact difference is not
/// representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::ops::additive::sub;
/// assert_eq!(sub(5u8, 3), Some(2));
/// assert_eq!(sub(0u8, 1), None);
/// assert_eq!(sub(127i8, -1), None);
/// assert_eq!(sub(-127i8, 1), Some(-128));
/// ```
#[inline]
pub fn sub<T: Integer>(a: T, b: T) -> Option<T> {
    let c = a.wrapping_sub(&b);
    if (c < a) == (b > T::zero()) {
        Some(c)
    } else {
        None
    }
}
