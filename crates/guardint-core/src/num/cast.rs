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

//! # Checked Casts
//!
//! Lossless conversion between any two members of the integer family. The
//! raw `as` conversion is performed, converted back, and accepted only if
//! the original value is recovered and the represented quantity kept its
//! sign. The sign comparison rejects reinterpretations that round-trip the
//! bit pattern but change the value, such as `-1i8` to `255u8`.

use crate::num::bounds::{bits, is_signed};
use crate::num::integer::Integer;
use num_traits::AsPrimitive;

/// Converts `x` from `X` to `Y`, returning `None` unless the value is exactly
/// representable in `Y`.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::cast::cast;
/// assert_eq!(cast::<i8, i16>(-50), Some(-50));
/// assert_eq!(cast::<i8, i16>(200), None);
/// assert_eq!(cast::<u8, i8>(-1), None);
/// assert_eq!(cast::<u64, u8>(255), Some(255));
/// ```
#[inline]
pub fn cast<Y, X>(x: X) -> Option<Y>
where
    X: Integer + AsPrimitive<Y>,
    Y: Integer + AsPrimitive<X>,
{
    let same_type = bits::<X>() == bits::<Y>() && is_signed::<X>() == is_signed::<Y>();
    let y: Y = x.as_();
    let back: X = y.as_();
    if back == x && (same_type || (x < X::zero()) == (y < Y::zero())) {
        Some(y)
    } else {
        None
    }
}
