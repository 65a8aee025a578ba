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

use rand::{Rng, SeedableRng, rngs::StdRng};

use meshedit::geometry::Point;
use meshedit::mesh::{EdgeId, FaceId, Mesh, VertexId};

type TestMesh = Mesh<f64, 3>;
type TestPoint = Point<f64, 3>;

fn create_simple_triangle() -> TestMesh {
    let positions = [
        TestPoint::new([0.0, 0.0, 0.0]),
        TestPoint::new([1.0, 0.0, 0.0]),
        TestPoint::new([0.0, 1.0, 0.0]),
    ];
    TestMesh::from_triangles(&positions, &[[0, 1, 2]]).expect("valid triangle")
}

fn create_square_mesh() -> TestMesh {
    let positions = [
        TestPoint::new([0.0, 0.0, 0.0]),
        TestPoint::new([1.0, 0.0, 0.0]),
        TestPoint::new([1.0, 1.0, 0.0]),
        TestPoint::new([0.0, 1.0, 0.0]),
    ];
    TestMesh::from_triangles(&positions, &[[0, 1, 2], [0, 2, 3]]).expect("valid square")
}

fn create_octahedron() -> TestMesh {
    let positions = [
        TestPoint::new([1.0, 0.0, 0.0]),
        TestPoint::new([-1.0, 0.0, 0.0]),
        TestPoint::new([0.0, 1.0, 0.0]),
        TestPoint::new([0.0, -1.0, 0.0]),
        TestPoint::new([0.0, 0.0, 1.0]),
        TestPoint::new([0.0, 0.0, -1.0]),
    ];
    let triangles = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    TestMesh::from_triangles(&positions, &triangles).expect("valid octahedron")
}

fn edge_between(mesh: &TestMesh, a: usize, b: usize) -> EdgeId {
    let h = mesh
        .half_edge_between(VertexId::new(a), VertexId::new(b))
        .expect("edge exists");
    mesh.edge(h)
}

fn hole(mesh: &TestMesh) -> FaceId {
    mesh.face_ids()
        .find(|&f| mesh.is_boundary_face(f))
        .expect("mesh has a boundary")
}

#[test]
fn test_split_interior_edge_counts() {
    let mut mesh = create_square_mesh();
    let diagonal = edge_between(&mesh, 0, 2);
    let (v, e, t, h) = (
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_triangles(),
        mesh.num_half_edges(),
    );

    mesh.split_edge(diagonal);

    assert_eq!(mesh.num_vertices(), v + 1);
    assert_eq!(mesh.num_edges(), e + 3);
    assert_eq!(mesh.num_triangles(), t + 2);
    assert_eq!(mesh.num_half_edges(), h + 6);
    assert_eq!(mesh.face_degree(hole(&mesh)), 4);
    assert!(mesh.validate_connectivity().is_ok());
}

#[test]
fn test_split_interior_edge_midpoint_and_direction() {
    let mut mesh = create_square_mesh();
    let diagonal = edge_between(&mesh, 0, 2);

    let m = mesh.split_edge(diagonal);

    assert!(mesh.position(m).approx_eq(&TestPoint::new([0.5, 0.5, 0.0])));
    assert_eq!(mesh.degree(m), 4);
    assert!(!mesh.is_boundary_vertex(m));

    // The representative runs along the split edge, not across a triangle.
    let h = mesh.vertex_half_edge(m);
    assert_eq!(mesh.source(h), m);
    let end = mesh.target(h);
    assert!(end == VertexId::new(0) || end == VertexId::new(2));

    let mut ring: Vec<usize> = mesh.one_ring_neighbors(m).into_iter().map(|v| v.idx()).collect();
    ring.sort_unstable();
    assert_eq!(ring, vec![0, 1, 2, 3]);
    assert!(!mesh.are_vertices_connected(VertexId::new(0), VertexId::new(2)));
}

#[test]
fn test_split_boundary_edge_counts() {
    let mut mesh = create_simple_triangle();
    let edge = edge_between(&mesh, 0, 1);
    let hole_len = mesh.face_degree(hole(&mesh));
    let (v, e, t, f, h) = (
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_triangles(),
        mesh.num_faces(),
        mesh.num_half_edges(),
    );

    let m = mesh.split_edge(edge);

    assert_eq!(mesh.num_vertices(), v + 1);
    assert_eq!(mesh.num_edges(), e + 2);
    assert_eq!(mesh.num_triangles(), t + 1);
    assert_eq!(mesh.num_faces(), f + 1);
    assert_eq!(mesh.num_half_edges(), h + 4);
    assert_eq!(mesh.num_boundary_faces(), 1);
    assert_eq!(mesh.face_degree(hole(&mesh)), hole_len + 1);

    assert!(mesh.position(m).approx_eq(&TestPoint::new([0.5, 0.0, 0.0])));
    assert!(mesh.is_boundary_vertex(m));
    assert_eq!(mesh.degree(m), 3);
    assert!(mesh.validate_connectivity().is_ok());
}

#[test]
fn test_split_boundary_edge_direction() {
    let mut mesh = create_simple_triangle();
    let edge = edge_between(&mesh, 1, 2);

    let m = mesh.split_edge(edge);

    let h = mesh.vertex_half_edge(m);
    assert_eq!(mesh.source(h), m);
    let end = mesh.target(h);
    assert!(end == VertexId::new(1) || end == VertexId::new(2));

    let [ahead, behind] = mesh.boundary_neighbors(m).expect("m lies on the hole");
    let mut pair = [ahead.idx(), behind.idx()];
    pair.sort_unstable();
    assert_eq!(pair, [1, 2]);
}

#[test]
fn test_split_all_triangle_edges() {
    let mut mesh = create_simple_triangle();
    for e in mesh.edge_ids().collect::<Vec<_>>() {
        mesh.split_edge(e);
        assert!(mesh.validate_connectivity().is_ok());
    }
    assert_eq!(mesh.num_vertices(), 6);
    assert_eq!(mesh.num_triangles(), 4);
    assert_eq!(mesh.face_degree(hole(&mesh)), 6);
    assert_eq!(mesh.euler_characteristic(), 1);
}

#[test]
fn test_split_closed_mesh_keeps_euler() {
    let mut mesh = create_octahedron();
    assert_eq!(mesh.euler_characteristic(), 2);

    let e = edge_between(&mesh, 0, 4);
    let m = mesh.split_edge(e);

    assert!(mesh.position(m).approx_eq(&TestPoint::new([0.5, 0.0, 0.5])));
    assert_eq!(mesh.euler_characteristic(), 2);
    assert_eq!(mesh.num_boundary_faces(), 0);
    assert!(mesh.validate_connectivity().is_ok());
}

#[test]
fn test_random_splits_keep_mesh_valid() {
    let mut mesh = create_square_mesh();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let e = EdgeId::new(rng.random_range(0..mesh.num_edges()));
        let boundary = mesh.is_boundary_edge(e);
        let (v, edges, t, hole_len) = (
            mesh.num_vertices(),
            mesh.num_edges(),
            mesh.num_triangles(),
            mesh.face_degree(hole(&mesh)),
        );

        mesh.split_edge(e);

        assert_eq!(mesh.num_vertices(), v + 1);
        if boundary {
            assert_eq!(mesh.num_edges(), edges + 2);
            assert_eq!(mesh.num_triangles(), t + 1);
            assert_eq!(mesh.face_degree(hole(&mesh)), hole_len + 1);
        } else {
            assert_eq!(mesh.num_edges(), edges + 3);
            assert_eq!(mesh.num_triangles(), t + 2);
            assert_eq!(mesh.face_degree(hole(&mesh)), hole_len);
        }
        if let Err(err) = mesh.validate_connectivity() {
            panic!("mesh invalid after splitting {}: {}", e, err);
        }
    }
    assert_eq!(mesh.euler_characteristic(), 1);
}
