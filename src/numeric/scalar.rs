// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fmt::Debug,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Floating-point coordinate type shared by meshes and Bezier evaluators.
pub trait Scalar:
    Float
    + FromPrimitive
    + ToPrimitive
    + Default
    + Debug
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Exact-as-possible rational constant `num / den`.
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Converts a count (valence, number of points, ...) into a scalar.
    fn from_count(n: usize) -> Self;

    /// Absolute tolerance used for approximate comparisons.
    fn tolerance() -> Self;

    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() <= Self::tolerance()
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    #[inline]
    fn from_count(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn tolerance() -> Self {
        1e-10
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }

    #[inline]
    fn from_count(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn tolerance() -> Self {
        1e-5
    }
}
