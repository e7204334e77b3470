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

//! # Checked Arithmetic Operations
//!
//! Generic arithmetic over the [`Integer`](crate::num::integer::Integer)
//! family that reports overflow through `Option` instead of wrapping.
//!
//! ## Submodules
//!
//! - `additive`: `add` and `sub`, a single wrap-and-compare algorithm for
//!   every width and signedness.
//! - `mul`: `mul`, specialized per width, plus the double-word
//!   `wide_mul_u64` used by the 64-bit branches.
//! - `div`: `quotient` and `div`, rejecting a zero divisor and the signed
//!   `MIN / -1`.

pub mod additive;
pub mod div;
pub mod mul;
