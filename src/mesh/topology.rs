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
use smallvec::SmallVec;

use crate::{
    error::{TopologyError, TopologyResult},
    geometry::vector::Vector,
    impl_mesh,
    mesh::{
        basic_types::{EdgeSide, Mesh},
        handles::{EdgeId, FaceId, HalfEdgeId, VertexId},
    },
    numeric::scalar::Scalar,
};

impl_mesh! {
    pub fn source(&self, h: HalfEdgeId) -> VertexId {
        self.vertex(h)
    }

    pub fn target(&self, h: HalfEdgeId) -> VertexId {
        self.vertex(self.twin(h))
    }

    pub fn edge_vertices(&self, e: EdgeId) -> [VertexId; 2] {
        let h = self.edge_half_edge(e);
        [self.source(h), self.target(h)]
    }

    /// Classifies `e` as interior or boundary, naming the faces on each side.
    pub fn edge_side(&self, e: EdgeId) -> EdgeSide {
        let h = self.edge_half_edge(e);
        let t = self.twin(h);
        let (fh, ft) = (self.face(h), self.face(t));
        match (self.is_boundary_face(fh), self.is_boundary_face(ft)) {
            (false, false) => EdgeSide::Interior { face0: fh, face1: ft },
            (false, true) => EdgeSide::Boundary { face: fh, hole: ft, inner: h },
            (true, _) => EdgeSide::Boundary { face: ft, hole: fh, inner: t },
        }
    }

    /// Half-edges around `f`, starting at its representative.
    pub fn face_half_edges(&self, f: FaceId) -> SmallVec<[HalfEdgeId; 3]> {
        let start = self.face_half_edge(f);
        let mut out = SmallVec::new();
        let mut cur = start;
        loop {
            out.push(cur);
            cur = self.next(cur);
            if cur == start || out.len() > self.half_edges.len() {
                break;
            }
        }
        out
    }

    pub fn face_vertices(&self, f: FaceId) -> SmallVec<[VertexId; 3]> {
        self.face_half_edges(f).into_iter().map(|h| self.vertex(h)).collect()
    }

    /// Number of edges on the cycle of `f` (boundary loop length for holes).
    pub fn face_degree(&self, f: FaceId) -> usize {
        self.face_half_edges(f).len()
    }

    /// The three corners of a triangle, in cycle order.
    pub fn triangle_vertices(&self, f: FaceId) -> [VertexId; 3] {
        let h0 = self.face_half_edge(f);
        let h1 = self.next(h0);
        let h2 = self.next(h1);
        debug_assert_eq!(self.next(h2), h0, "face {} is not a triangle", f);
        [self.vertex(h0), self.vertex(h1), self.vertex(h2)]
    }

    /// Outgoing half-edges of `v`, walking `next(twin(h))` around the fan.
    pub fn outgoing_half_edges(&self, v: VertexId) -> Vec<HalfEdgeId> {
        let mut out = Vec::new();
        if self.vertices[v.idx()].is_isolated() {
            return out;
        }
        let start = self.vertex_half_edge(v);
        let mut cur = start;
        loop {
            out.push(cur);
            cur = self.next(self.twin(cur));
            if cur == start || out.len() > self.half_edges.len() {
                break;
            }
        }
        out
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.outgoing_half_edges(v).len()
    }

    pub fn one_ring_neighbors(&self, v: VertexId) -> Vec<VertexId> {
        self.outgoing_half_edges(v)
            .into_iter()
            .map(|h| self.target(h))
            .collect()
    }

    pub fn is_boundary_vertex(&self, v: VertexId) -> bool {
        self.outgoing_half_edges(v)
            .into_iter()
            .any(|h| self.is_boundary_face(self.face(h)))
    }

    /// The two neighbours of a boundary vertex along its hole:
    /// `[next along the loop, previous along the loop]`.
    pub fn boundary_neighbors(&self, v: VertexId) -> Option<[VertexId; 2]> {
        let outgoing = self.outgoing_half_edges(v);
        let ahead = outgoing
            .iter()
            .copied()
            .find(|&h| self.is_boundary_face(self.face(h)))?;
        let behind = outgoing
            .iter()
            .copied()
            .find(|&h| self.is_boundary_face(self.face(self.twin(h))))?;
        Some([self.target(ahead), self.target(behind)])
    }

    /// Real (non-boundary) faces.
    pub fn num_triangles(&self) -> usize {
        self.faces.iter().filter(|f| !f.is_boundary).count()
    }

    pub fn num_boundary_faces(&self) -> usize {
        self.faces.iter().filter(|f| f.is_boundary).count()
    }

    pub fn num_boundary_edges(&self) -> usize {
        self.edge_ids().filter(|&e| self.is_boundary_edge(e)).count()
    }

    /// `V - E + F`, counting only real faces.
    pub fn euler_characteristic(&self) -> i64 {
        self.num_vertices() as i64 - self.num_edges() as i64 + self.num_triangles() as i64
    }

    pub fn is_triangle_mesh(&self) -> bool {
        self.first_non_triangle().is_none()
    }

    pub fn first_non_triangle(&self) -> Option<FaceId> {
        self.face_ids()
            .find(|&f| !self.is_boundary_face(f) && self.face_degree(f) != 3)
    }

    pub fn half_edge_between(&self, from: VertexId, to: VertexId) -> Option<HalfEdgeId> {
        self.outgoing_half_edges(from)
            .into_iter()
            .find(|&h| self.target(h) == to)
    }

    pub fn are_vertices_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.half_edge_between(a, b).is_some()
    }

    /// Checks every invariant of the halfedge structure and reports the first
    /// violation found.
    pub fn validate_connectivity(&self) -> TopologyResult<()> {
        let n_he = self.half_edges.len();

        for h in self.half_edge_ids() {
            let he = &self.half_edges[h.idx()];
            if !he.is_wired()
                || he.next.idx() >= n_he
                || he.twin.idx() >= n_he
                || he.vertex.idx() >= self.vertices.len()
                || he.edge.idx() >= self.edges.len()
                || he.face.idx() >= self.faces.len()
            {
                return Err(TopologyError::UnsetReference(h));
            }
            if self.twin(he.twin) != h || he.twin == h {
                return Err(TopologyError::TwinMismatch(h));
            }
            if self.edge(he.twin) != he.edge {
                return Err(TopologyError::EdgeMismatch(h));
            }
            // next continues on the same face and starts where h ends
            if self.face(he.next) != he.face || self.vertex(he.next) != self.target(h) {
                return Err(TopologyError::BrokenFaceCycle { face: he.face, half_edge: h });
            }
        }

        for e in self.edge_ids() {
            let h = self.edge_half_edge(e);
            if !h.is_valid() || h.idx() >= n_he || self.edge(h) != e {
                return Err(TopologyError::EdgeHalfEdgeMismatch(e));
            }
        }

        for f in self.face_ids() {
            let start = self.face_half_edge(f);
            if !start.is_valid() || start.idx() >= n_he || self.face(start) != f {
                return Err(TopologyError::FaceHalfEdgeMismatch(f));
            }
            // The cycle must close without leaving the face.
            let mut cur = start;
            let mut steps = 0usize;
            loop {
                cur = self.next(cur);
                steps += 1;
                if cur == start {
                    break;
                }
                if steps > n_he {
                    return Err(TopologyError::BrokenFaceCycle { face: f, half_edge: start });
                }
            }
            if !self.is_boundary_face(f) && steps < 3 {
                return Err(TopologyError::BrokenFaceCycle { face: f, half_edge: start });
            }
        }

        for v in self.vertex_ids() {
            let h = self.vertex_half_edge(v);
            if h.is_valid() && (h.idx() >= n_he || self.vertex(h) != v) {
                return Err(TopologyError::VertexHalfEdgeMismatch(v));
            }
        }

        // Each directed vertex pair appears once.
        let mut seen = AHashSet::with_capacity(n_he);
        for h in self.half_edge_ids() {
            let (a, b) = (self.source(h), self.target(h));
            if !seen.insert((a, b)) {
                return Err(TopologyError::NonManifoldEdge(a.idx(), b.idx()));
            }
        }

        Ok(())
    }

    /// Debug-build sanity checks on the half-edges an edit just rewrote.
    #[inline]
    pub(crate) fn debug_check_half_edges(&self, hs: &[HalfEdgeId]) {
        #[cfg(debug_assertions)]
        {
            for &h in hs {
                let t = self.twin(h);
                assert_eq!(self.twin(t), h, "half-edge {} twin -> twin mismatch", h);
                assert_eq!(self.edge(t), self.edge(h), "half-edge {} edge mismatch with twin", h);
                let n = self.next(h);
                assert_eq!(self.face(n), self.face(h), "half-edge {} next leaves face", h);
                assert_eq!(self.vertex(n), self.target(h), "half-edge {} next not chained", h);
                let v = self.vertex(h);
                assert_eq!(
                    self.vertex(self.vertex_half_edge(v)),
                    v,
                    "vertex {} half-edge does not originate there",
                    v
                );
                let e = self.edge(h);
                assert_eq!(self.edge(self.edge_half_edge(e)), e, "edge {} representative mismatch", e);
                let f = self.face(h);
                assert_eq!(self.face(self.face_half_edge(f)), f, "face {} representative mismatch", f);
            }
        }
        #[cfg(not(debug_assertions))]
        let _ = hs;
    }
}

impl<T: Scalar> Mesh<T, 3> {
    /// Unnormalized normal of a face (twice its area along the unit normal).
    pub fn face_normal(&self, f: FaceId) -> Vector<T, 3> {
        let [a, b, c] = self.triangle_vertices(f).map(|v| self.position(v));
        let e1 = a.vector_to(b);
        let e2 = a.vector_to(c);
        e1.cross(&e2)
    }

    pub fn face_area(&self, f: FaceId) -> T {
        self.face_normal(f).norm() * T::from_num_den(1, 2)
    }

    /// Area-weighted average of the normals of the triangles around `v`,
    /// normalized. Zero for isolated vertices.
    pub fn vertex_normal(&self, v: VertexId) -> Vector<T, 3> {
        self.outgoing_half_edges(v)
            .into_iter()
            .map(|h| self.face(h))
            .filter(|&f| !self.is_boundary_face(f))
            .fold(Vector::zero(), |acc, f| acc + self.face_normal(f))
            .normalized()
    }
}
