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

use ahash::AHashMap;
use tracing::debug;

use crate::{
    error::{TopologyError, TopologyResult},
    geometry::point::Point,
    impl_mesh,
    mesh::{
        edge::Edge,
        face::Face,
        half_edge::HalfEdge,
        handles::{EdgeId, FaceId, HalfEdgeId, VertexId},
        vertex::Vertex,
    },
};

impl_mesh! {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, edges: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            faces: Vec::with_capacity(faces),
            half_edges: Vec::with_capacity(2 * edges),
        }
    }

    // ===== Arena allocation =====
    // Fresh elements carry INVALID references until the caller wires them.

    pub fn new_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::default());
        id
    }

    pub fn new_edge(&mut self) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::default());
        id
    }

    pub fn new_face(&mut self) -> FaceId {
        let id = FaceId::new(self.faces.len());
        self.faces.push(Face::default());
        id
    }

    pub fn new_boundary_face(&mut self) -> FaceId {
        let id = FaceId::new(self.faces.len());
        self.faces.push(Face::boundary());
        id
    }

    pub fn new_half_edge(&mut self) -> HalfEdgeId {
        let id = HalfEdgeId::new(self.half_edges.len());
        self.half_edges.push(HalfEdge::new());
        id
    }

    pub fn add_vertex(&mut self, position: Point<T, N>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(position));
        id
    }

    // ===== Counts =====

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// All faces, boundary sentinels included.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + use<T, N> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + use<T, N> {
        (0..self.edges.len()).map(EdgeId::new)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + use<T, N> {
        (0..self.faces.len()).map(FaceId::new)
    }

    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + use<T, N> {
        (0..self.half_edges.len()).map(HalfEdgeId::new)
    }

    // ===== Half-edge accessors =====

    #[inline]
    pub fn next(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[h.idx()].next
    }

    #[inline]
    pub fn twin(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[h.idx()].twin
    }

    /// Origin vertex of `h`.
    #[inline]
    pub fn vertex(&self, h: HalfEdgeId) -> VertexId {
        self.half_edges[h.idx()].vertex
    }

    #[inline]
    pub fn edge(&self, h: HalfEdgeId) -> EdgeId {
        self.half_edges[h.idx()].edge
    }

    #[inline]
    pub fn face(&self, h: HalfEdgeId) -> FaceId {
        self.half_edges[h.idx()].face
    }

    #[inline]
    pub fn set_neighbors(
        &mut self,
        h: HalfEdgeId,
        next: HalfEdgeId,
        twin: HalfEdgeId,
        vertex: VertexId,
        edge: EdgeId,
        face: FaceId,
    ) {
        self.half_edges[h.idx()].set_neighbors(next, twin, vertex, edge, face);
    }

    #[inline]
    pub fn set_twin(&mut self, h: HalfEdgeId, twin: HalfEdgeId) {
        self.half_edges[h.idx()].twin = twin;
    }

    // ===== Element accessors =====

    #[inline]
    pub fn position(&self, v: VertexId) -> &Point<T, N> {
        &self.vertices[v.idx()].position
    }

    #[inline]
    pub fn vertex_half_edge(&self, v: VertexId) -> HalfEdgeId {
        self.vertices[v.idx()].half_edge
    }

    #[inline]
    pub fn edge_half_edge(&self, e: EdgeId) -> HalfEdgeId {
        self.edges[e.idx()].half_edge
    }

    #[inline]
    pub fn face_half_edge(&self, f: FaceId) -> HalfEdgeId {
        self.faces[f.idx()].half_edge
    }

    #[inline]
    pub fn set_vertex_half_edge(&mut self, v: VertexId, h: HalfEdgeId) {
        self.vertices[v.idx()].half_edge = h;
    }

    #[inline]
    pub fn set_edge_half_edge(&mut self, e: EdgeId, h: HalfEdgeId) {
        self.edges[e.idx()].half_edge = h;
    }

    #[inline]
    pub fn set_face_half_edge(&mut self, f: FaceId, h: HalfEdgeId) {
        self.faces[f.idx()].half_edge = h;
    }

    #[inline]
    pub fn is_boundary_face(&self, f: FaceId) -> bool {
        self.faces[f.idx()].is_boundary
    }

    /// True iff one side of `e` borders a boundary face.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId) -> bool {
        let h = self.edge_half_edge(e);
        self.is_boundary_face(self.face(h)) || self.is_boundary_face(self.face(self.twin(h)))
    }

    /// Builds a mesh from an indexed triangle list (CCW triangles).
    ///
    /// Every edge gets a twin pair. Edges used by a single triangle are closed
    /// off by boundary half-edges, and each loop of those gets its own
    /// boundary face.
    pub fn from_triangles(positions: &[Point<T, N>], triangles: &[[usize; 3]]) -> TopologyResult<Self> {
        let n_corners = 3 * triangles.len();
        let mut mesh = Self::with_capacity(positions.len(), n_corners / 2 + 1, triangles.len() + 1);

        for p in positions {
            mesh.add_vertex(*p);
        }

        // 1) Interior half-edges, one cycle per triangle
        let mut directed: AHashMap<(usize, usize), HalfEdgeId> = AHashMap::with_capacity(n_corners);
        for (fi, tri) in triangles.iter().enumerate() {
            let [a, b, c] = *tri;
            if a >= positions.len() || b >= positions.len() || c >= positions.len() || a == b || b == c || c == a {
                return Err(TopologyError::InvalidFace(fi));
            }

            let f = mesh.new_face();
            let hs = [mesh.new_half_edge(), mesh.new_half_edge(), mesh.new_half_edge()];
            for k in 0..3 {
                let from = tri[k];
                let to = tri[(k + 1) % 3];
                if directed.insert((from, to), hs[k]).is_some() {
                    return Err(TopologyError::NonManifoldEdge(from, to));
                }
                let he = &mut mesh.half_edges[hs[k].idx()];
                he.next = hs[(k + 1) % 3];
                he.vertex = VertexId::new(from);
                he.face = f;

                let v = VertexId::new(from);
                if !mesh.vertex_half_edge(v).is_valid() {
                    mesh.set_vertex_half_edge(v, hs[k]);
                }
            }
            mesh.set_face_half_edge(f, hs[0]);
        }

        // 2) Twins and edges; unmatched half-edges get a boundary twin
        let mut boundary_from: AHashMap<usize, HalfEdgeId> = AHashMap::new();
        let mut boundary_hes: Vec<HalfEdgeId> = Vec::new();
        let interior_count = mesh.half_edges.len();
        for i in 0..interior_count {
            let h = HalfEdgeId::new(i);
            if mesh.twin(h).is_valid() {
                continue;
            }
            let from = mesh.vertex(h).idx();
            let to = mesh.vertex(mesh.next(h)).idx();

            let e = mesh.new_edge();
            mesh.set_edge_half_edge(e, h);
            mesh.half_edges[h.idx()].edge = e;

            let t = match directed.get(&(to, from)) {
                Some(&t) => t,
                None => {
                    let b = mesh.new_half_edge();
                    mesh.half_edges[b.idx()].vertex = VertexId::new(to);
                    if boundary_from.insert(to, b).is_some() {
                        return Err(TopologyError::NonManifoldVertex(to));
                    }
                    boundary_hes.push(b);
                    b
                }
            };
            mesh.set_twin(h, t);
            mesh.set_twin(t, h);
            mesh.half_edges[t.idx()].edge = e;
        }

        // 3) Chain boundary half-edges: b = u->v continues at the boundary half-edge leaving v
        for &b in &boundary_hes {
            let head = mesh.vertex(mesh.twin(b)).idx();
            let next = *boundary_from
                .get(&head)
                .ok_or(TopologyError::NonManifoldVertex(head))?;
            mesh.half_edges[b.idx()].next = next;
        }

        // 4) One boundary face per loop
        for &b in &boundary_hes {
            if mesh.face(b).is_valid() {
                continue;
            }
            let hole = mesh.new_boundary_face();
            mesh.set_face_half_edge(hole, b);
            let mut cur = b;
            for _ in 0..=boundary_hes.len() {
                mesh.half_edges[cur.idx()].face = hole;
                cur = mesh.next(cur);
                if cur == b {
                    break;
                }
            }
            if cur != b {
                return Err(TopologyError::BrokenFaceCycle { face: hole, half_edge: b });
            }
        }

        debug!(
            vertices = mesh.num_vertices(),
            edges = mesh.num_edges(),
            faces = mesh.num_faces(),
            holes = mesh.num_boundary_faces(),
            "Built halfedge mesh from triangles"
        );

        mesh.validate_connectivity()?;
        Ok(mesh)
    }
}
