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

//! # Loop subdivision
//!
//! One `upsample` pass turns every triangle into four:
//!
//! 1. **Vertex weights**: each original vertex of degree `n` moves to
//!    `(1 - n*u) * p + u * sum(neighbours)`, with `u = 3/16` for `n == 3` and
//!    `3 / (8n)` otherwise.
//! 2. **Edge weights**: each original edge gets the position of its future
//!    midpoint vertex, `3/8 (p + q) + 1/8 (a + b)` for interior edges and
//!    `(p + q) / 2` on the boundary.
//! 3. **Split**: every edge of the original mesh is split; edges created
//!    across a triangle are tagged new.
//! 4. **Flip**: new edges joining an original vertex to an inserted one are
//!    flipped, leaving the regular 1-to-4 pattern.
//!
//! Positions are computed on the coarse mesh and only copied into place once
//! all four phases are done.

use std::fmt;

use tracing::{debug, info};

use crate::{
    error::{SubdivisionError, SubdivisionResult},
    geometry::point::Point,
    impl_mesh,
    mesh::{
        basic_types::EdgeSide,
        handles::{EdgeId, VertexId},
    },
    numeric::scalar::Scalar,
};

/// How original boundary vertices are repositioned in phase 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryRule {
    /// Same degree-weighted rule as interior vertices.
    #[default]
    Uniform,
    /// `3/4 p + 1/8 (b0 + b1)` over the two neighbours along the hole, so
    /// boundary curves are refined independently of the interior.
    Crease,
}

#[derive(Debug, Clone)]
pub struct UpsampleOpts {
    pub boundary_rule: BoundaryRule,
    /// Run a full connectivity check after the pass.
    pub validate: bool,
}

impl Default for UpsampleOpts {
    fn default() -> Self {
        Self {
            boundary_rule: BoundaryRule::Uniform,
            validate: cfg!(debug_assertions),
        }
    }
}

/// Element counts around one subdivision pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubdivisionStats {
    pub original_vertices: usize,
    pub original_edges: usize,
    pub original_triangles: usize,
    pub vertices: usize,
    pub edges: usize,
    pub triangles: usize,
    pub flipped_edges: usize,
}

impl fmt::Display for SubdivisionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loop subdivision: {}V {}E {}F -> {}V {}E {}F ({} flips)",
            self.original_vertices,
            self.original_edges,
            self.original_triangles,
            self.vertices,
            self.edges,
            self.triangles,
            self.flipped_edges
        )
    }
}

/// Weight `u` applied to each neighbour of a degree-`n` vertex.
pub fn loop_vertex_weight<T: Scalar>(degree: usize) -> T {
    if degree == 3 {
        T::from_num_den(3, 16)
    } else {
        T::from_num_den(3, 8) / T::from_count(degree)
    }
}

impl_mesh! {
    /// One Loop subdivision pass with default options.
    pub fn upsample(&mut self) -> SubdivisionResult<SubdivisionStats> {
        self.upsample_with(&UpsampleOpts::default())
    }

    /// Applies `levels` passes in a row.
    pub fn upsample_levels(&mut self, levels: usize, opts: &UpsampleOpts) -> SubdivisionResult<Vec<SubdivisionStats>> {
        (0..levels).map(|_| self.upsample_with(opts)).collect()
    }

    pub fn upsample_with(&mut self, opts: &UpsampleOpts) -> SubdivisionResult<SubdivisionStats> {
        if self.num_triangles() == 0 {
            return Err(SubdivisionError::EmptyMesh);
        }
        if let Some(f) = self.first_non_triangle() {
            return Err(SubdivisionError::NotTriangular(f));
        }

        let mut stats = SubdivisionStats {
            original_vertices: self.num_vertices(),
            original_edges: self.num_edges(),
            original_triangles: self.num_triangles(),
            ..Default::default()
        };
        info!(
            vertices = stats.original_vertices,
            edges = stats.original_edges,
            triangles = stats.original_triangles,
            "Starting Loop subdivision"
        );

        self.compute_vertex_points(opts.boundary_rule);
        self.compute_edge_points();

        // Snapshot: splitting appends edges that must not be split again.
        let original_edges: Vec<EdgeId> = self.edge_ids().collect();
        for &e in &original_edges {
            self.split_and_tag(e);
        }
        debug!(split = original_edges.len(), "Split original edges");

        stats.flipped_edges = self.flip_new_edges();
        debug!(flipped = stats.flipped_edges, "Flipped old-new edges");

        for v in self.vertices.iter_mut() {
            v.position = v.new_position;
        }

        stats.vertices = self.num_vertices();
        stats.edges = self.num_edges();
        stats.triangles = self.num_triangles();
        info!(
            vertices = stats.vertices,
            edges = stats.edges,
            triangles = stats.triangles,
            "Finished Loop subdivision"
        );

        if opts.validate {
            self.validate_connectivity()?;
        }
        Ok(stats)
    }

    /// Phase 1: weighted positions of the original vertices.
    fn compute_vertex_points(&mut self, rule: BoundaryRule) {
        for v in self.vertex_ids() {
            let p = *self.position(v);
            let new_position = match rule {
                BoundaryRule::Crease if self.is_boundary_vertex(v) => self
                    .boundary_neighbors(v)
                    .map(|[b0, b1]| {
                        p.scale(T::from_num_den(3, 4))
                            + (self.position(b0) + self.position(b1)).scale(T::from_num_den(1, 8))
                    })
                    .unwrap_or(p),
                _ => self.loop_vertex_point(v),
            };

            let vertex = &mut self.vertices[v.idx()];
            vertex.new_position = new_position;
            vertex.is_new = false;
        }
        debug!(vertices = self.num_vertices(), "Computed vertex points");
    }

    fn loop_vertex_point(&self, v: VertexId) -> Point<T, N> {
        let p = *self.position(v);
        let neighbors = self.one_ring_neighbors(v);
        let n = neighbors.len();
        if n == 0 {
            return p;
        }
        let u = loop_vertex_weight::<T>(n);
        let sum = neighbors
            .iter()
            .fold(Point::zero(), |acc, &w| acc + *self.position(w));
        p.scale(T::one() - T::from_count(n) * u) + sum.scale(u)
    }

    /// Phase 2: positions of the vertices that will be inserted on each edge.
    fn compute_edge_points(&mut self) {
        for e in self.edge_ids() {
            let h = self.edge_half_edge(e);
            let t = self.twin(h);
            let p = *self.position(self.vertex(h));
            let q = *self.position(self.vertex(t));

            let new_position = match self.edge_side(e) {
                EdgeSide::Interior { .. } => {
                    let a = *self.position(self.vertex(self.next(self.next(h))));
                    let b = *self.position(self.vertex(self.next(self.next(t))));
                    (p + q).scale(T::from_num_den(3, 8)) + (a + b).scale(T::from_num_den(1, 8))
                }
                EdgeSide::Boundary { .. } => p.midpoint(&q),
            };

            let edge = &mut self.edges[e.idx()];
            edge.new_position = new_position;
            edge.is_new = false;
        }
        debug!(edges = self.num_edges(), "Computed edge points");
    }

    /// Phase 3 for a single edge: split, place the midpoint, tag edges.
    ///
    /// Edges from the inserted vertex back to the endpoints of `e` are the two
    /// halves of an original edge; the ones reaching across a triangle are new.
    fn split_and_tag(&mut self, e: EdgeId) {
        let [p, q] = self.edge_vertices(e);
        let new_position = self.edges[e.idx()].new_position;

        let m = self.split_edge(e);
        let vertex = &mut self.vertices[m.idx()];
        vertex.new_position = new_position;
        vertex.is_new = true;

        for h in self.outgoing_half_edges(m) {
            let end = self.target(h);
            let edge = self.edge(h);
            self.edges[edge.idx()].is_new = end != p && end != q;
        }
    }

    /// Phase 4: flip new edges that join an original and an inserted vertex.
    fn flip_new_edges(&mut self) -> usize {
        let candidates: Vec<EdgeId> = self
            .edge_ids()
            .filter(|&e| {
                let [a, b] = self.edge_vertices(e);
                self.edges[e.idx()].is_new && self.vertices[a.idx()].is_new != self.vertices[b.idx()].is_new
            })
            .collect();

        // A flip only moves the endpoints of the flipped edge.
        let mut flipped = 0;
        for e in candidates {
            if self.is_boundary_edge(e) {
                continue;
            }
            self.flip_edge(e);
            flipped += 1;
        }
        flipped
    }
}
