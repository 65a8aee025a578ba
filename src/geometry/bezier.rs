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

//! de Casteljau evaluation of Bezier curves and tensor-product patches.
//!
//! Curves keep every intermediate level so a viewer can draw the
//! construction one step at a time. Patches run the 1D scheme along each
//! row with `u`, then along the resulting column with `v`.

use crate::{
    error::{BezierError, BezierResult},
    geometry::point::Point,
    numeric::scalar::Scalar,
};

/// One de Casteljau reduction: `n` points become `n - 1`.
pub fn de_casteljau_step<T: Scalar, const N: usize>(
    points: &[Point<T, N>],
    t: T,
) -> Vec<Point<T, N>> {
    points.windows(2).map(|w| w[0].lerp(&w[1], t)).collect()
}

/// Evaluates the Bezier curve defined by `points` at parameter `t`.
pub fn evaluate_curve<T: Scalar, const N: usize>(
    points: &[Point<T, N>],
    t: T,
) -> BezierResult<Point<T, N>> {
    if points.len() < 2 {
        return Err(BezierError::TooFewControlPoints(points.len()));
    }

    let mut level = de_casteljau_step(points, t);
    while level.len() > 1 {
        level = de_casteljau_step(&level, t);
    }
    level
        .pop()
        .ok_or(BezierError::TooFewControlPoints(points.len()))
}

/// Step-at-a-time de Casteljau evaluator.
///
/// `evaluated_levels[0]` holds the control points; each call to
/// [`BezierCurve::evaluate_step`] appends the next, shorter level until the
/// last level holds the point on the curve.
#[derive(Debug, Clone)]
pub struct BezierCurve<T: Scalar, const N: usize> {
    pub control_points: Vec<Point<T, N>>,
    pub evaluated_levels: Vec<Vec<Point<T, N>>>,
    pub t: T,
}

impl<T: Scalar, const N: usize> BezierCurve<T, N> {
    pub fn new(control_points: Vec<Point<T, N>>, t: T) -> BezierResult<Self> {
        if control_points.len() < 2 {
            return Err(BezierError::TooFewControlPoints(control_points.len()));
        }
        Ok(Self {
            evaluated_levels: vec![control_points.clone()],
            control_points,
            t,
        })
    }

    pub fn num_control_points(&self) -> usize {
        self.control_points.len()
    }

    /// True once the most recent level is a single point.
    pub fn is_done(&self) -> bool {
        self.evaluated_levels
            .last()
            .is_some_and(|level| level.len() == 1)
    }

    /// Appends one more level. No-op once [`is_done`](Self::is_done).
    pub fn evaluate_step(&mut self) {
        let Some(last) = self.evaluated_levels.last() else {
            return;
        };
        if last.len() <= 1 {
            return;
        }
        let next = de_casteljau_step(last, self.t);
        self.evaluated_levels.push(next);
    }

    /// Runs the remaining steps and returns the point on the curve.
    pub fn evaluate(&mut self) -> Point<T, N> {
        while !self.is_done() {
            self.evaluate_step();
        }
        self.evaluated_levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    /// Discards every level but the control points and moves to `t`.
    pub fn reset(&mut self, t: T) {
        self.t = t;
        self.evaluated_levels.truncate(1);
    }
}

/// Tensor-product Bezier patch over a rectangular control grid
/// (`rows x cols`, 4x4 for bicubic patches).
#[derive(Debug, Clone)]
pub struct BezierPatch<T: Scalar, const N: usize> {
    control_points: Vec<Vec<Point<T, N>>>,
}

impl<T: Scalar, const N: usize> BezierPatch<T, N> {
    pub fn new(control_points: Vec<Vec<Point<T, N>>>) -> BezierResult<Self> {
        if control_points.len() < 2 {
            return Err(BezierError::TooFewControlPoints(control_points.len()));
        }
        let width = control_points[0].len();
        if width < 2 {
            return Err(BezierError::TooFewControlPoints(width));
        }
        if let Some(row) = control_points.iter().position(|r| r.len() != width) {
            return Err(BezierError::RaggedGrid {
                row,
                expected: width,
                found: control_points[row].len(),
            });
        }
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Vec<Point<T, N>>] {
        &self.control_points
    }

    /// Collapses every row with `u`, then the resulting column with `v`.
    pub fn evaluate(&self, u: T, v: T) -> Point<T, N> {
        let column: Vec<Point<T, N>> = self
            .control_points
            .iter()
            .map(|row| Self::evaluate_1d(row, u))
            .collect();
        Self::evaluate_1d(&column, v)
    }

    /// 1D de Casteljau on a row whose length was checked at construction.
    pub fn evaluate_1d(points: &[Point<T, N>], t: T) -> Point<T, N> {
        let mut level = points.to_vec();
        while level.len() > 1 {
            level = de_casteljau_step(&level, t);
        }
        level.first().copied().unwrap_or_default()
    }
}
