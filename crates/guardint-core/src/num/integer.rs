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

//! # Integer Family
//!
//! The closed set of fixed-width integer types every checked operation in
//! this crate is defined over: `i8`, `i16`, `i32`, `i64`, `isize` and their
//! unsigned counterparts. `i128`/`u128` are not members; the widest
//! multiplication branch works on 64-bit operands with a double-word result.
//!
//! The trait is sealed. Each member carries a wrapped `-1` constant and a
//! multiplication hook that routes to the branch for its physical width, so
//! the width dispatch is resolved at compile time.

use crate::num::ops::mul;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_traits::{PrimInt, WrappingAdd, WrappingSub};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer of known signedness and size.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::num::integer::Integer;
/// assert_eq!(<u8 as Integer>::MINUS_ONE, 255);
/// assert_eq!(<i8 as Integer>::MINUS_ONE, -1);
/// ```
pub trait Integer:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + Debug
    + Display
    + Hash
    + Send
    + Sync
    + sealed::Sealed
    + 'static
{
    /// The result of `0 - 1` under wrapping arithmetic.
    ///
    /// This is `-1` for signed types and the all-ones pattern for unsigned
    /// types, which makes it a signedness probe.
    const MINUS_ONE: Self;

    /// Multiplies using the algorithm specialized for this type's width,
    /// returning `None` if the exact product is not representable.
    ///
    /// Prefer [`crate::num::ops::mul::mul`], which forwards here.
    fn mul_by_width(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_for {
    ($t:ty, $mul:path) => {
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const MINUS_ONE: Self = <$t>::wrapping_sub(0, 1);

            #[inline(always)]
            fn mul_by_width(self, rhs: Self) -> Option<Self> {
                $mul(self, rhs)
            }
        }
    };
}

impl_integer_for!(u8, mul::mul_u8);
impl_integer_for!(u16, mul::mul_u16);
impl_integer_for!(u32, mul::mul_u32);
impl_integer_for!(u64, mul::mul_u64);
impl_integer_for!(usize, mul::mul_usize);

impl_integer_for!(i8, mul::mul_i8);
impl_integer_for!(i16, mul::mul_i16);
impl_integer_for!(i32, mul::mul_i32);
impl_integer_for!(i64, mul::mul_i64);
impl_integer_for!(isize, mul::mul_isize);
