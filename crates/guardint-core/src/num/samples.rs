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

//! Reference helpers shared by the unit tests: boundary samples per type and
//! conversions through `i128`, which holds every value of every member.

use crate::num::bounds::{max, min};
use crate::num::integer::Integer;

/// Widens `v` to `i128`.
pub(crate) fn wide<T: Integer>(v: T) -> i128 {
    v.to_i128().unwrap()
}

/// Narrows `v` to `T`, or `None` if it falls outside `T`'s bounds.
pub(crate) fn narrow<T: Integer>(v: i128) -> Option<T> {
    num_traits::cast::<i128, T>(v)
}

/// Values at and adjacent to `MIN`, `MAX`, `0` and `±1`, plus the halves
/// of both bounds. Duplicates are removed.
pub(crate) fn boundary_samples<T: Integer>() -> Vec<T> {
    let lo = wide(min::<T>());
    let hi = wide(max::<T>());
    let mut out: Vec<T> = [
        lo,
        lo + 1,
        lo / 2,
        -2,
        -1,
        0,
        1,
        2,
        3,
        hi / 2,
        hi / 2 + 1,
        hi - 1,
        hi,
    ]
    .into_iter()
    .filter_map(narrow::<T>)
    .collect();
    out.sort();
    out.dedup();
    out
}

/// Checks `op` against the exact `i128` result of `exact` over every pair of
/// boundary samples of `T`.
pub(crate) fn check_against_reference<T: Integer>(
    name: &str,
    op: impl Fn(T, T) -> Option<T>,
    exact: impl Fn(i128, i128) -> Option<i128>,
) {
    let samples = boundary_samples::<T>();
    for &a in &samples {
        for &b in &samples {
            let want = exact(wide(a), wide(b)).and_then(narrow::<T>);
            assert_eq!(op(a, b), want, "{a} {name} {b}");
        }
    }
}

/// Checks `op` on every `(i8, i8)` pair against the exact result computed in
/// `i64`.
pub(crate) fn check_all_i8(
    name: &str,
    op: impl Fn(i8, i8) -> Option<i8>,
    exact: impl Fn(i64, i64) -> Option<i64>,
) {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let want = exact(i64::from(a), i64::from(b)).and_then(|c| i8::try_from(c).ok());
            assert_eq!(op(a, b), want, "{a} {name} {b}");
        }
    }
}

/// Checks `op` on every `(u8, u8)` pair against the exact result computed in
/// `i64`.
pub(crate) fn check_all_u8(
    name: &str,
    op: impl Fn(u8, u8) -> Option<u8>,
    exact: impl Fn(i64, i64) -> Option<i64>,
) {
    for a in u8::MIN..=u8::MAX {
        for b in u8::MIN..=u8::MAX {
            let want = exact(i64::from(a), i64::from(b)).and_then(|c| u8::try_from(c).ok());
            assert_eq!(op(a, b), want, "{a} {name} {b}");
        }
    }
}

/// Runs a generic check body once for every member of the integer family.
macro_rules! for_each_integer {
    ($check:ident) => {
        $check::<u8>();
        $check::<u16>();
        $check::<u32>();
        $check::<u64>();
        $check::<usize>();
        $check::<i8>();
        $check::<i16>();
        $check::<i32>();
        $check::<i64>();
        $check::<isize>();
    };
}

pub(crate) use for_each_integer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_rejects_out_of_range() {
        assert_eq!(narrow::<u8>(255), Some(255));
        assert_eq!(narrow::<u8>(256), None);
        assert_eq!(narrow::<u8>(-1), None);
        assert_eq!(narrow::<i64>(i128::from(i64::MIN)), Some(i64::MIN));
        assert_eq!(narrow::<i64>(i128::from(i64::MIN) - 1), None);
        assert_eq!(narrow::<usize>(wide(usize::MAX)), Some(usize::MAX));
    }

    #[test]
    fn test_boundary_samples_cover_bounds() {
        let samples = boundary_samples::<i8>();
        assert_eq!(samples.first(), Some(&i8::MIN));
        assert_eq!(samples.last(), Some(&i8::MAX));
        assert!(samples.contains(&0) && samples.contains(&-1) && samples.contains(&1));

        let samples = boundary_samples::<u16>();
        assert_eq!(samples.first(), Some(&0));
        assert_eq!(samples.last(), Some(&u16::MAX));
    }

    #[test]
    fn test_exhaustive_checkers_accept_exact_ops() {
        check_all_i8("+", i8::checked_add, |a, b| Some(a + b));
        check_all_u8("*", u8::checked_mul, |a, b| Some(a * b));
    }
}
