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
    array::from_fn,
    ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point::zero()
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    pub fn zero() -> Self {
        Point {
            coords: [T::zero(); N],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    /// Uniform scaling about the origin.
    pub fn scale(&self, s: T) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] * s),
        }
    }

    /// `(1 - t) * self + t * other`
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        let s = T::one() - t;
        Point {
            coords: from_fn(|i| s * self.coords[i] + t * other.coords[i]),
        }
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, T::from_num_den(1, 2))
    }

    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector(other - self)
    }

    /// Component-wise comparison within `T::tolerance()`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = *self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const N: usize> Add for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Point<T, N>) -> Self::Output {
        <&Point<T, N> as Add<&Point<T, N>>>::add(&self, &rhs)
    }
}

impl<'a, T: Scalar, const N: usize> AddAssign<&'a Point<T, N>> for Point<T, N> {
    fn add_assign(&mut self, rhs: &'a Point<T, N>) {
        for i in 0..N {
            self.coords[i] += rhs.coords[i];
        }
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        let mut out = *self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        <&Point<T, N> as Sub<&Point<T, N>>>::sub(&self, &rhs)
    }
}

impl<'a, T: Scalar, const N: usize> SubAssign<&'a Point<T, N>> for Point<T, N> {
    fn sub_assign(&mut self, rhs: &'a Point<T, N>) {
        for i in 0..N {
            self.coords[i] -= rhs.coords[i];
        }
    }
}
