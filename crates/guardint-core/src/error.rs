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

//! # Arithmetic Errors
//!
//! `Result`-returning wrappers around the checked operations, for callers
//! that propagate failure with `?`. Every variant of [`ArithmeticError`]
//! means the exact result is not representable; the variant only records
//! why.

use crate::num::bounds::{is_signed, min};
use crate::num::cast::cast;
use crate::num::integer::Integer;
use crate::num::ops::{additive, div, mul};
use num_traits::AsPrimitive;
use std::fmt::Display;

/// The arithmetic operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition, `a + b`.
    Add,
    /// Subtraction, `a - b`.
    Sub,
    /// Multiplication, `a * b`.
    Mul,
    /// Division or remainder, `a / b`.
    Div,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// Why a checked operation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The exact result lies outside the bounds of the operand type.
    Overflow {
        /// The operation whose result did not fit.
        op: Operation,
    },
    /// The divisor was zero.
    DivisionByZero,
    /// The value is not representable in the destination type.
    LossyCast,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::Overflow { op } => write!(f, "arithmetic overflow in `{}`", op),
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::LossyCast => write!(f, "value out of range for cast"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Like [`additive::add`], failing with [`ArithmeticError::Overflow`].
///
/// # Examples
///
/// ```rust
/// # use guardint_core::error::{try_add, ArithmeticError, Operation};
/// assert_eq!(try_add(1u8, 2), Ok(3));
/// assert_eq!(try_add(255u8, 1), Err(ArithmeticError::Overflow { op: Operation::Add }));
/// ```
#[inline]
pub fn try_add<T: Integer>(a: T, b: T) -> Result<T, ArithmeticError> {
    additive::add(a, b).ok_or(ArithmeticError::Overflow { op: Operation::Add })
}

/// Like [`additive::sub`], failing with [`ArithmeticError::Overflow`].
#[inline]
pub fn try_sub<T: Integer>(a: T, b: T) -> Result<T, ArithmeticError> {
    additive::sub(a, b).ok_or(ArithmeticError::Overflow { op: Operation::Sub })
}

/// Like [`mul::mul`], failing with [`ArithmeticError::Overflow`].
#[inline]
pub fn try_mul<T: Integer>(a: T, b: T) -> Result<T, ArithmeticError> {
    mul::mul(a, b).ok_or(ArithmeticError::Overflow { op: Operation::Mul })
}

/// Like [`div::quotient`], distinguishing a zero divisor from the signed
/// `MIN / -1` overflow.
///
/// # Examples
///
/// ```rust
/// # use guardint_core::error::{try_quotient, ArithmeticError, Operation};
/// assert_eq!(try_quotient(7i32, 2), Ok((3, 1)));
/// assert_eq!(try_quotient(7i32, 0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(
///     try_quotient(i32::MIN, -1),
///     Err(ArithmeticError::Overflow { op: Operation::Div })
/// );
/// ```
#[inline]
pub fn try_quotient<T: Integer>(a: T, b: T) -> Result<(T, T), ArithmeticError> {
    div::quotient(a, b).ok_or_else(|| {
        if b == T::zero() {
            ArithmeticError::DivisionByZero
        } else {
            debug_assert!(is_signed::<T>() && a == min::<T>() && b == T::MINUS_ONE);
            ArithmeticError::Overflow { op: Operation::Div }
        }
    })
}

/// Like [`div::div`], with the errors of [`try_quotient`].
#[inline]
pub fn try_div<T: Integer>(a: T, b: T) -> Result<T, ArithmeticError> {
    try_quotient(a, b).map(|(q, _)| q)
}

/// Like [`cast`], failing with [`ArithmeticError::LossyCast`].
///
/// # Examples
///
/// ```rust
/// # use guardint_core::error::{try_cast, ArithmeticError};
/// fn offset(len: u64) -> Result<u16, ArithmeticError> {
///     let len: u16 = try_cast(len)?;
///     Ok(len)
/// }
/// assert_eq!(offset(1024), Ok(1024));
/// assert_eq!(offset(1 << 20), Err(ArithmeticError::LossyCast));
/// ```
#[inline]
pub fn try_cast<Y, X>(x: X) -> Result<Y, ArithmeticError>
where
    X: Integer + AsPrimitive<Y>,
    Y: Integer + AsPrimitive<X>,
{
    cast::<Y, X>(x).ok_or(ArithmeticError::LossyCast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_ops_success() {
        assert_eq!(try_add(2i16, 3), Ok(5));
        assert_eq!(try_sub(2i16, 3), Ok(-1));
        assert_eq!(try_mul(-4i16, 3), Ok(-12));
        assert_eq!(try_div(7u32, 2), Ok(3));
        assert_eq!(try_quotient(-7i64, 2), Ok((-3, -1)));
        assert_eq!(try_cast::<u8, i64>(42), Ok(42));
    }

    #[test]
    fn test_try_ops_report_operation() {
        assert_eq!(try_add(i8::MAX, 1), Err(ArithmeticError::Overflow { op: Operation::Add }));
        assert_eq!(try_sub(0u32, 1), Err(ArithmeticError::Overflow { op: Operation::Sub }));
        assert_eq!(try_mul(u64::MAX, 2), Err(ArithmeticError::Overflow { op: Operation::Mul }));
        assert_eq!(try_div(i8::MIN, -1), Err(ArithmeticError::Overflow { op: Operation::Div }));
    }

    #[test]
    fn test_try_div_by_zero() {
        assert_eq!(try_div(0u8, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(try_div(i64::MIN, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(try_quotient(5usize, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_try_cast_lossy() {
        assert_eq!(try_cast::<u8, i8>(-1), Err(ArithmeticError::LossyCast));
        assert_eq!(try_cast::<i32, u64>(u64::MAX), Err(ArithmeticError::LossyCast));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn area(w: u32, h: u32, border: u32) -> Result<u32, ArithmeticError> {
            let inner = try_mul(w, h)?;
            try_add(inner, try_mul(border, 4)?)
        }
        assert_eq!(area(10, 20, 1), Ok(204));
        assert_eq!(
            area(u32::MAX, 2, 0),
            Err(ArithmeticError::Overflow { op: Operation::Mul })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ArithmeticError::Overflow { op: Operation::Mul }.to_string(),
            "arithmetic overflow in `*`"
        );
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(ArithmeticError::LossyCast.to_string(), "value out of range for cast");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<E: std::error::Error + Send + Sync + 'static>() {}
        assert_send_sync::<ArithmeticError>();
    }
}
