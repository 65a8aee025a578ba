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

use tracing::trace;

use crate::{
    impl_mesh,
    mesh::{
        basic_types::EdgeSide,
        handles::{EdgeId, HalfEdgeId, VertexId},
    },
};

impl_mesh! {
    /// Inserts a vertex at the midpoint of `e0` and re-triangulates the faces
    /// on either side. Returns the new vertex, whose representative half-edge
    /// runs along the split edge towards one of its old endpoints.
    ///
    /// Interior edges gain 1 vertex, 3 edges, 2 faces and 6 half-edges.
    /// Boundary edges gain 1 vertex, 2 edges, 1 face and 4 half-edges, and
    /// the hole's cycle grows by one half-edge.
    pub fn split_edge(&mut self, e0: EdgeId) -> VertexId {
        match self.edge_side(e0) {
            EdgeSide::Interior { .. } => self.split_interior_edge(e0),
            EdgeSide::Boundary { inner, .. } => self.split_boundary_edge(e0, inner),
        }
    }

    /// ```text
    ///   before                          after
    ///
    ///        v2                            v2
    ///       /  \                         / |  \
    ///      / f0 \                       / f0| f3\
    ///    v0 ---- v1                  v0 ---v4--- v1
    ///      \ f1 /                       \ f1| f2/
    ///       \  /                         \  |  /
    ///        v3                             v3
    /// ```
    fn split_interior_edge(&mut self, e0: EdgeId) -> VertexId {
        let h0 = self.edge_half_edge(e0);
        let h1 = self.next(h0);
        let h2 = self.next(h1);
        let h3 = self.twin(h0);
        let h4 = self.next(h3);
        let h5 = self.next(h4);
        let h6 = self.twin(h1);
        let h7 = self.twin(h2);
        let h8 = self.twin(h4);
        let h9 = self.twin(h5);
        debug_assert_eq!(self.next(h2), h0, "split_edge: face of {} is not a triangle", h0);
        debug_assert_eq!(self.next(h5), h3, "split_edge: face of {} is not a triangle", h3);

        let v0 = self.vertex(h0);
        let v1 = self.vertex(h3);
        let v2 = self.vertex(h2);
        let v3 = self.vertex(h5);

        let e1 = self.edge(h1);
        let e2 = self.edge(h2);
        let e3 = self.edge(h4);
        let e4 = self.edge(h5);

        let f0 = self.face(h0);
        let f1 = self.face(h3);

        let midpoint = self.position(v0).midpoint(self.position(v1));

        // ---- allocate ----
        let v4 = self.add_vertex(midpoint);

        let h10 = self.new_half_edge();
        let h11 = self.new_half_edge();
        let h12 = self.new_half_edge();
        let h13 = self.new_half_edge();
        let h14 = self.new_half_edge();
        let h15 = self.new_half_edge();

        let e5 = self.new_edge(); // v3 - v4
        let e6 = self.new_edge(); // v4 - v2
        let e7 = self.new_edge(); // v4 - v1, second half of e0

        let f2 = self.new_face();
        let f3 = self.new_face();

        // ---- rewire ----
        // f0 = (v0, v4, v2)
        self.set_neighbors(h0, h11, h3, v0, e0, f0);
        self.set_neighbors(h11, h2, h14, v4, e6, f0);
        self.set_neighbors(h2, h0, h7, v2, e2, f0);
        // f1 = (v4, v0, v3)
        self.set_neighbors(h3, h4, h0, v4, e0, f1);
        self.set_neighbors(h4, h10, h8, v0, e3, f1);
        self.set_neighbors(h10, h3, h13, v3, e5, f1);
        // f2 = (v3, v1, v4)
        self.set_neighbors(h5, h15, h9, v3, e4, f2);
        self.set_neighbors(h15, h13, h12, v1, e7, f2);
        self.set_neighbors(h13, h5, h10, v4, e5, f2);
        // f3 = (v1, v2, v4)
        self.set_neighbors(h1, h14, h6, v1, e1, f3);
        self.set_neighbors(h14, h12, h11, v2, e6, f3);
        self.set_neighbors(h12, h1, h15, v4, e7, f3);

        self.set_vertex_half_edge(v0, h0);
        self.set_vertex_half_edge(v1, h15);
        self.set_vertex_half_edge(v2, h14);
        self.set_vertex_half_edge(v3, h10);
        self.set_vertex_half_edge(v4, h3);

        self.set_edge_half_edge(e0, h0);
        self.set_edge_half_edge(e1, h1);
        self.set_edge_half_edge(e2, h2);
        self.set_edge_half_edge(e3, h4);
        self.set_edge_half_edge(e4, h5);
        self.set_edge_half_edge(e5, h10);
        self.set_edge_half_edge(e6, h11);
        self.set_edge_half_edge(e7, h12);

        self.set_face_half_edge(f0, h0);
        self.set_face_half_edge(f1, h3);
        self.set_face_half_edge(f2, h13);
        self.set_face_half_edge(f3, h12);

        trace!(edge = %e0, vertex = %v4, "Split interior edge");
        self.debug_check_half_edges(&[
            h0, h1, h2, h3, h4, h5, h6, h7, h8, h9, h10, h11, h12, h13, h14, h15,
        ]);

        v4
    }

    /// ```text
    ///   before                       after
    ///
    ///         c                          c
    ///        / \                       / | \
    ///       / f0\                     /f0|f1\
    ///      a --h-> b                 a -> m -> b
    ///     ...hole...                ....hole....
    /// ```
    ///
    /// `h` is the half-edge of `e0` on the triangle; its twin `t` lies on the
    /// hole and is split in place, so the hole keeps its face record.
    fn split_boundary_edge(&mut self, e0: EdgeId, h: HalfEdgeId) -> VertexId {
        let h1 = self.next(h);
        let h2 = self.next(h1);
        let t = self.twin(h);
        let t_next = self.next(t);
        debug_assert_eq!(self.next(h2), h, "split_edge: face of {} is not a triangle", h);

        let a = self.vertex(h);
        let b = self.vertex(h1);
        let c = self.vertex(h2);

        let e1 = self.edge(h1);
        let e2 = self.edge(h2);
        let h1_twin = self.twin(h1);
        let h2_twin = self.twin(h2);

        let f0 = self.face(h);
        let hole = self.face(t);

        let midpoint = self.position(a).midpoint(self.position(b));

        // ---- allocate ----
        let m = self.add_vertex(midpoint);

        let h_mc = self.new_half_edge();
        let h_cm = self.new_half_edge();
        let h_mb = self.new_half_edge();
        let t_ma = self.new_half_edge();

        let e_half = self.new_edge(); // m - b
        let e_cross = self.new_edge(); // m - c

        let f1 = self.new_face();

        // ---- rewire ----
        // f0 = (a, m, c)
        self.set_neighbors(h, h_mc, t_ma, a, e0, f0);
        self.set_neighbors(h_mc, h2, h_cm, m, e_cross, f0);
        self.set_neighbors(h2, h, h2_twin, c, e2, f0);
        // f1 = (m, b, c)
        self.set_neighbors(h_mb, h1, t, m, e_half, f1);
        self.set_neighbors(h1, h_cm, h1_twin, b, e1, f1);
        self.set_neighbors(h_cm, h_mb, h_mc, c, e_cross, f1);
        // hole: ... -> (b -> m) -> (m -> a) -> ...
        self.set_neighbors(t, t_ma, h_mb, b, e_half, hole);
        self.set_neighbors(t_ma, t_next, h, m, e0, hole);

        self.set_vertex_half_edge(a, h);
        self.set_vertex_half_edge(b, h1);
        self.set_vertex_half_edge(c, h2);
        self.set_vertex_half_edge(m, h_mb);

        self.set_edge_half_edge(e0, h);
        self.set_edge_half_edge(e_half, h_mb);
        self.set_edge_half_edge(e_cross, h_mc);

        self.set_face_half_edge(f0, h);
        self.set_face_half_edge(f1, h1);
        self.set_face_half_edge(hole, t);

        trace!(edge = %e0, vertex = %m, "Split boundary edge");
        self.debug_check_half_edges(&[h, h1, h2, t, h_mc, h_cm, h_mb, t_ma]);

        m
    }
}
