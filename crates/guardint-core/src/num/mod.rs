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

//! # Numeric Foundations
//!
//! The integer family and the checked operations defined over it.
//!
//! ## Submodules
//!
//! - `integer`: The sealed [`Integer`](integer::Integer) trait covering
//!   `i8`..`i64`, `u8`..`u64`, `isize` and `usize`.
//! - `bounds`: `min`/`max`, derived from bit width and signedness.
//! - `ops`: Checked add, sub, mul, div and quotient.
//! - `cast`: Lossless conversion between any two family members.
//!
//! Every function here is pure. Nothing is cached and nothing is shared
//! between calls.

pub mod bounds;
pub mod cast;
pub mod integer;
pub mod ops;

#[cfg(test)]
pub(crate) mod samples;
