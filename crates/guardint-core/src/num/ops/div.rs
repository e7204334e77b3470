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

//! # Checked Division
//!
//! Truncating division producing quotient and remainder together. Exactly
//! two inputs are rejected: a zero divisor, and the signed `MIN / -1`, whose
//! true quotient exceeds `MAX` by one. Every other pair is divided with the
//! native `/` and `%`, so the quotient rounds toward zero and the remainder
//! takes the sign of the dividend.

use crate::num::bounds::{is_signed, min};
use crate::num::integer::Integer;

/// Divides `a` by `b`, returning `(quotient, remainder)`, or `None` if `b` is
/// zero or the quotient overflows `T`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::ops::div::quotient;
/// assert_eq!(quotient(100, 3), Some((33, 1)));
/// assert_eq!(quotient(-7i32, 2), Some((-3, -1)));
/// assert_eq!(quotient(1u8, 0), None);
/// assert_eq!(quotient(i8::MIN, -1), None);
/// ```
#[inline]
pub fn quotient<T: Integer>(a: T, b: T) -> Option<(T, T)> {
    if b == T::zero() {
        return None;
    }
    if is_signed::<T>() && a == min::<T>() && b == T::MINUS_ONE {
        return None;
    }
    Some((a / b, a % b))
}

/// Divides `a` by `b`, discarding the remainder. Fails exactly when
/// [`quotient`] does.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::ops::div::div;
/// assert_eq!(div(100u16, 3), Some(33));
/// assert_eq!(div(100u16, 0), None);
/// ```
#[inline]
pub fn div<T: Integer>(a: T, b: T) -> Option<T> {
    quotient(a, b).map(|(q, _)| q)
}
