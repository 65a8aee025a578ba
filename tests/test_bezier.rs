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

use meshedit::BezierError;
use meshedit::geometry::{BezierCurve, BezierPatch, Point, evaluate_curve};

type P2 = Point<f64, 2>;
type P3 = Point<f64, 3>;

fn cubic() -> Vec<P2> {
    vec![
        P2::new([0.0, 0.0]),
        P2::new([1.0, 2.0]),
        P2::new([3.0, 2.0]),
        P2::new([4.0, 0.0]),
    ]
}

/// Control grid of the plane patch `(u, v) -> (u, v, 0)`.
fn flat_grid() -> Vec<Vec<P3>> {
    (0..4)
        .map(|i| {
            (0..4)
                .map(|j| P3::new([j as f64 / 3.0, i as f64 / 3.0, 0.0]))
                .collect()
        })
        .collect()
}

#[test]
fn test_cubic_midpoint() {
    let mut curve = BezierCurve::new(cubic(), 0.5).expect("valid curve");
    let p = curve.evaluate();
    assert!(p.approx_eq(&P2::new([2.0, 1.5])));
    assert_eq!(curve.evaluated_levels.len(), 4);
    assert!(curve.is_done());
}

#[test]
fn test_step_by_step_levels() {
    let mut curve = BezierCurve::new(cubic(), 0.5).expect("valid curve");
    assert_eq!(curve.num_control_points(), 4);
    assert_eq!(curve.evaluated_levels.len(), 1);
    assert!(!curve.is_done());

    curve.evaluate_step();
    let level = &curve.evaluated_levels[1];
    assert_eq!(level.len(), 3);
    assert!(level[0].approx_eq(&P2::new([0.5, 1.0])));
    assert!(level[1].approx_eq(&P2::new([2.0, 2.0])));
    assert!(level[2].approx_eq(&P2::new([3.5, 1.0])));

    curve.evaluate_step();
    let level = &curve.evaluated_levels[2];
    assert!(level[0].approx_eq(&P2::new([1.25, 1.5])));
    assert!(level[1].approx_eq(&P2::new([2.75, 1.5])));

    curve.evaluate_step();
    assert!(curve.is_done());
    assert!(curve.evaluated_levels[3][0].approx_eq(&P2::new([2.0, 1.5])));

    // Further steps do nothing.
    curve.evaluate_step();
    assert_eq!(curve.evaluated_levels.len(), 4);
}

#[test]
fn test_reset_moves_parameter() {
    let mut curve = BezierCurve::new(cubic(), 0.5).expect("valid curve");
    curve.evaluate();

    curve.reset(0.0);
    assert_eq!(curve.evaluated_levels.len(), 1);
    assert!(curve.evaluate().approx_eq(&P2::new([0.0, 0.0])));

    curve.reset(1.0);
    assert!(curve.evaluate().approx_eq(&P2::new([4.0, 0.0])));
}

#[test]
fn test_curve_endpoints_interpolate() {
    let points = cubic();
    assert!(evaluate_curve(&points, 0.0).expect("curve").approx_eq(&points[0]));
    assert!(evaluate_curve(&points, 1.0).expect("curve").approx_eq(&points[3]));
}

#[test]
fn test_two_points_is_a_segment() {
    let points = [P3::new([0.0, 0.0, 0.0]), P3::new([2.0, 4.0, -2.0])];
    let p = evaluate_curve(&points, 0.25).expect("segment");
    assert!(p.approx_eq(&P3::new([0.5, 1.0, -0.5])));
}

#[test]
fn test_too_few_control_points() {
    let single = vec![P2::new([1.0, 1.0])];
    assert_eq!(
        evaluate_curve(&single, 0.5).err(),
        Some(BezierError::TooFewControlPoints(1))
    );
    assert!(matches!(
        BezierCurve::new(Vec::<P2>::new(), 0.5),
        Err(BezierError::TooFewControlPoints(0))
    ));
}

#[test]
fn test_patch_linear_precision() {
    let patch = BezierPatch::new(flat_grid()).expect("valid patch");
    for &(u, v) in &[(0.0, 0.0), (0.5, 0.5), (0.25, 0.75), (1.0, 0.3)] {
        let p = patch.evaluate(u, v);
        assert!(p.approx_eq(&P3::new([u, v, 0.0])), "({u}, {v}) -> {:?}", p);
    }
}

#[test]
fn test_patch_corners() {
    let mut grid = flat_grid();
    grid[1][2][2] = 3.0;
    grid[2][1][2] = -1.0;
    let patch = BezierPatch::new(grid.clone()).expect("valid patch");

    assert!(patch.evaluate(0.0, 0.0).approx_eq(&grid[0][0]));
    assert!(patch.evaluate(1.0, 0.0).approx_eq(&grid[0][3]));
    assert!(patch.evaluate(0.0, 1.0).approx_eq(&grid[3][0]));
    assert!(patch.evaluate(1.0, 1.0).approx_eq(&grid[3][3]));
    assert_eq!(patch.control_points().len(), 4);
}

#[test]
fn test_patch_bumps_with_interior_control_point() {
    let mut grid = flat_grid();
    grid[1][1][2] = 1.0;
    let patch = BezierPatch::new(grid).expect("valid patch");

    // Bernstein weight of (1, 1) at (1/3, 1/3) is (3 * 1/3 * 4/9)^2 = 16/81.
    let p = patch.evaluate(1.0 / 3.0, 1.0 / 3.0);
    assert!((p[2] - 16.0 / 81.0).abs() < 1e-12);
}

#[test]
fn test_patch_rejects_bad_grid() {
    let mut ragged = flat_grid();
    ragged[2].pop();
    assert_eq!(
        BezierPatch::new(ragged).err().map(|e| e.to_string()),
        Some("control grid row 2 has 3 points, expected 4".to_string())
    );

    let one_row = vec![flat_grid()[0].clone()];
    assert!(matches!(
        BezierPatch::new(one_row),
        Err(BezierError::TooFewControlPoints(1))
    ));
}
