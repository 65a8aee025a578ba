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

use crate::{impl_mesh, mesh::handles::EdgeId};

impl_mesh! {
    /// Replaces the diagonal `e0` of the quad formed by its two triangles with
    /// the other diagonal. Returns `e0`, which now joins the two formerly
    /// opposite vertices.
    ///
    /// Boundary edges cannot be flipped; they come back unchanged.
    ///
    /// ```text
    ///        v2                    v2
    ///       /  \                  / | \
    ///      / f0 \                /  |  \
    ///    v0 ---- v1    ==>     v0 f0|f1 v1
    ///      \ f1 /                \  |  /
    ///       \  /                  \ | /
    ///        v3                    v3
    /// ```
    pub fn flip_edge(&mut self, e0: EdgeId) -> EdgeId {
        if self.is_boundary_edge(e0) {
            trace!(edge = %e0, "Skipping flip of boundary edge");
            return e0;
        }

        // ---- read everything first ----
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
        debug_assert_eq!(self.next(h2), h0, "flip_edge: face of {} is not a triangle", h0);
        debug_assert_eq!(self.next(h5), h3, "flip_edge: face of {} is not a triangle", h3);

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

        // ---- rewire the six half-edges inside the quad ----
        // f0 = (v3, v2, v0), f1 = (v2, v3, v1)
        self.set_neighbors(h0, h1, h3, v3, e0, f0);
        self.set_neighbors(h1, h2, h7, v2, e2, f0);
        self.set_neighbors(h2, h0, h8, v0, e3, f0);
        self.set_neighbors(h3, h4, h0, v2, e0, f1);
        self.set_neighbors(h4, h5, h9, v3, e4, f1);
        self.set_neighbors(h5, h3, h6, v1, e1, f1);

        // ---- outside half-edges only change twins ----
        self.set_twin(h6, h5);
        self.set_twin(h7, h1);
        self.set_twin(h8, h2);
        self.set_twin(h9, h4);

        self.set_vertex_half_edge(v0, h2);
        self.set_vertex_half_edge(v1, h5);
        self.set_vertex_half_edge(v2, h3);
        self.set_vertex_half_edge(v3, h0);

        self.set_edge_half_edge(e0, h0);
        self.set_edge_half_edge(e1, h5);
        self.set_edge_half_edge(e2, h1);
        self.set_edge_half_edge(e3, h2);
        self.set_edge_half_edge(e4, h4);

        self.set_face_half_edge(f0, h0);
        self.set_face_half_edge(f1, h3);

        trace!(edge = %e0, from = ?(v0, v1), to = ?(v2, v3), "Flipped edge");
        self.debug_check_half_edges(&[h0, h1, h2, h3, h4, h5, h6, h7, h8, h9]);

        e0
    }
}
