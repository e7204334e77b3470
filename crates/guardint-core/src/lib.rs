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

//! # Guardint Core
//!
//! Checked arithmetic over fixed-width integers. Every operation reports
//! whether the mathematically exact result is representable in the target
//! type instead of silently wrapping or panicking.
//!
//! ## Modules
//!
//! - `num`: The sealed `Integer` family (`i8`..`i64`, `u8`..`u64`, `isize`,
//!   `usize`), type bounds, and the checked operations:
//!   - `add`/`sub`: wrapping arithmetic plus an ordering check, no widening.
//!   - `mul`: per-width algorithms, widening for 8/16/32-bit operands and a
//!     double-word multiply for 64-bit ones.
//!   - `quotient`/`div`: truncating division rejecting `x / 0` and signed
//!     `MIN / -1`.
//!   - `cast`: lossless conversion between any two family members.
//! - `error`: `Result`-returning variants (`try_add`, `try_cast`, ...) that
//!   report failure as an `ArithmeticError`.
//!
//! ## Example
//!
//! ```rust
//! use guardint_core::{add, cast, max, mul, quotient};
//!
//! assert_eq!(add(126i8, 1), Some(127));
//! assert_eq!(add(127i8, 1), None);
//! assert_eq!(mul(i64::MIN, 1), Some(i64::MIN));
//! assert_eq!(quotient(100, 3), Some((33, 1)));
//! assert_eq!(cast::<u8, i8>(-1), None);
//! assert_eq!(max::<u16>(), 65535);
//! ```
//!
//! All functions are pure and hold no state, so they may be called from any
//! number of threads at once.

pub mod error;
pub mod num;

pub use error::{ArithmeticError, Operation};
pub use num::bounds::{max, min};
pub use num::cast::cast;
pub use num::integer::Integer;
pub use num::ops::additive::{add, sub};
pub use num::ops::div::{div, quotient};
pub use num::ops::mul::mul;
