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

use ahash::AHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use meshedit::geometry::Point;
use meshedit::mesh::{EdgeId, Mesh, VertexId};

type TestMesh = Mesh<f64, 3>;
type TestPoint = Point<f64, 3>;

fn create_square_mesh() -> TestMesh {
    let positions = [
        TestPoint::new([0.0, 0.0, 0.0]),
        TestPoint::new([1.0, 0.0, 0.0]),
        TestPoint::new([1.0, 1.0, 0.0]),
        TestPoint::new([0.0, 1.0, 0.0]),
    ];
    TestMesh::from_triangles(&positions, &[[0, 1, 2], [0, 2, 3]]).expect("valid square")
}

fn create_grid_mesh(n: usize) -> TestMesh {
    let id = |x: usize, y: usize| -> usize { y * (n + 1) + x };
    let mut positions = Vec::new();
    for y in 0..=n {
        for x in 0..=n {
            positions.push(TestPoint::new([x as f64, y as f64, 0.0]));
        }
    }
    let mut triangles = Vec::new();
    for y in 0..n {
        for x in 0..n {
            triangles.push([id(x, y), id(x + 1, y), id(x + 1, y + 1)]);
            triangles.push([id(x, y), id(x + 1, y + 1), id(x, y + 1)]);
        }
    }
    TestMesh::from_triangles(&positions, &triangles).expect("valid grid")
}

/// Sorted vertex triples of every real face.
fn triangle_set(mesh: &TestMesh) -> AHashSet<[usize; 3]> {
    mesh.face_ids()
        .filter(|&f| !mesh.is_boundary_face(f))
        .map(|f| {
            let mut tri = mesh.triangle_vertices(f).map(|v| v.idx());
            tri.sort_unstable();
            tri
        })
        .collect()
}

fn edge_between(mesh: &TestMesh, a: usize, b: usize) -> EdgeId {
    let h = mesh
        .half_edge_between(VertexId::new(a), VertexId::new(b))
        .expect("edge exists");
    mesh.edge(h)
}

/// Vertices opposite `e` in its two triangles.
fn opposite_vertices(mesh: &TestMesh, e: EdgeId) -> (VertexId, VertexId) {
    let h = mesh.edge_half_edge(e);
    let t = mesh.twin(h);
    (
        mesh.vertex(mesh.next(mesh.next(h))),
        mesh.vertex(mesh.next(mesh.next(t))),
    )
}

#[test]
fn test_flip_square_diagonal() {
    let mut mesh = create_square_mesh();
    let diagonal = edge_between(&mesh, 0, 2);

    let flipped = mesh.flip_edge(diagonal);
    assert_eq!(flipped, diagonal);

    let mut ends = mesh.edge_vertices(flipped).map(|v| v.idx());
    ends.sort_unstable();
    assert_eq!(ends, [1, 3]);

    let expected: AHashSet<[usize; 3]> = [[0, 1, 3], [1, 2, 3]].into_iter().collect();
    assert_eq!(triangle_set(&mesh), expected);
    assert!(!mesh.are_vertices_connected(VertexId::new(0), VertexId::new(2)));
    assert!(mesh.validate_connectivity().is_ok());
}

#[test]
fn test_flip_twice_restores_diagonal() {
    let mut mesh = create_square_mesh();
    let before = triangle_set(&mesh);
    let diagonal = edge_between(&mesh, 0, 2);

    let e = mesh.flip_edge(diagonal);
    assert_ne!(triangle_set(&mesh), before);
    let e = mesh.flip_edge(e);

    assert_eq!(triangle_set(&mesh), before);
    let mut ends = mesh.edge_vertices(e).map(|v| v.idx());
    ends.sort_unstable();
    assert_eq!(ends, [0, 2]);
    assert!(mesh.validate_connectivity().is_ok());
}

#[test]
fn test_flip_boundary_edge_is_noop() {
    let mut mesh = create_square_mesh();
    let before = mesh.clone();

    for e in mesh.edge_ids().collect::<Vec<_>>() {
        if !mesh.is_boundary_edge(e) {
            continue;
        }
        assert_eq!(mesh.flip_edge(e), e);
    }

    assert_eq!(mesh.half_edges, before.half_edges);
    assert_eq!(triangle_set(&mesh), triangle_set(&before));
}

#[test]
fn test_flip_preserves_counts_and_degrees() {
    let mut mesh = create_square_mesh();
    let (v, e, f, h) = (
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_faces(),
        mesh.num_half_edges(),
    );

    mesh.flip_edge(edge_between(&mesh, 0, 2));

    assert_eq!(mesh.num_vertices(), v);
    assert_eq!(mesh.num_edges(), e);
    assert_eq!(mesh.num_faces(), f);
    assert_eq!(mesh.num_half_edges(), h);

    // The diagonal moved from 0-2 to 1-3.
    assert_eq!(mesh.degree(VertexId::new(0)), 2);
    assert_eq!(mesh.degree(VertexId::new(1)), 3);
    assert_eq!(mesh.degree(VertexId::new(2)), 2);
    assert_eq!(mesh.degree(VertexId::new(3)), 3);
}

#[test]
fn test_random_flips_keep_mesh_valid() {
    let mut mesh = create_grid_mesh(4);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let euler = mesh.euler_characteristic();
    let edges = mesh.num_edges();

    let mut flips = 0;
    for _ in 0..200 {
        let e = EdgeId::new(rng.random_range(0..mesh.num_edges()));
        if mesh.is_boundary_edge(e) {
            assert_eq!(mesh.flip_edge(e), e);
            continue;
        }
        // Skip flips that would duplicate an existing edge.
        let (a, b) = opposite_vertices(&mesh, e);
        if mesh.are_vertices_connected(a, b) {
            continue;
        }
        mesh.flip_edge(e);
        flips += 1;

        if let Err(err) = mesh.validate_connectivity() {
            panic!("mesh invalid after {} flips: {}", flips, err);
        }
    }

    assert!(flips > 0);
    assert_eq!(mesh.num_edges(), edges);
    assert_eq!(mesh.euler_characteristic(), euler);
}

#[test]
fn test_random_flip_involution() {
    let mut mesh = create_grid_mesh(3);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let e = EdgeId::new(rng.random_range(0..mesh.num_edges()));
        if mesh.is_boundary_edge(e) {
            continue;
        }
        let (a, b) = opposite_vertices(&mesh, e);
        if mesh.are_vertices_connected(a, b) {
            continue;
        }
        let before = triangle_set(&mesh);
        let e = mesh.flip_edge(e);
        mesh.flip_edge(e);
        assert_eq!(triangle_set(&mesh), before);
    }
    assert!(mesh.validate_connectivity().is_ok());
}
