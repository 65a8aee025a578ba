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

use crate::mesh::handles::{EdgeId, FaceId, HalfEdgeId, VertexId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HalfEdge {
    pub next: HalfEdgeId,
    pub twin: HalfEdgeId,
    pub vertex: VertexId, // origin vertex
    pub edge: EdgeId,
    pub face: FaceId, // boundary half-edges point at a boundary face
}

impl HalfEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites all five references at once.
    #[inline]
    pub fn set_neighbors(
        &mut self,
        next: HalfEdgeId,
        twin: HalfEdgeId,
        vertex: VertexId,
        edge: EdgeId,
        face: FaceId,
    ) {
        self.next = next;
        self.twin = twin;
        self.vertex = vertex;
        self.edge = edge;
        self.face = face;
    }

    pub fn is_wired(&self) -> bool {
        self.next.is_valid()
            && self.twin.is_valid()
            && self.vertex.is_valid()
            && self.edge.is_valid()
            && self.face.is_valid()
    }
}
