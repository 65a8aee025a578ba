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

use crate::{
    mesh::{
        edge::Edge,
        face::Face,
        half_edge::HalfEdge,
        handles::{FaceId, HalfEdgeId},
        vertex::Vertex,
    },
    numeric::scalar::Scalar,
};

/// How an edge sits in the surface, resolved once before a local edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// Both half-edges border real faces.
    Interior { face0: FaceId, face1: FaceId },
    /// `inner` borders the real `face`; its twin borders the boundary face `hole`.
    Boundary {
        face: FaceId,
        hole: FaceId,
        inner: HalfEdgeId,
    },
}

impl EdgeSide {
    pub fn is_boundary(&self) -> bool {
        matches!(self, EdgeSide::Boundary { .. })
    }
}

/// Halfedge mesh stored as four arenas addressed by typed ids.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar, const N: usize> {
    pub vertices: Vec<Vertex<T, N>>,
    pub edges: Vec<Edge<T, N>>,
    pub faces: Vec<Face>,
    pub half_edges: Vec<HalfEdge>,
}

impl<T: Scalar, const N: usize> Default for Mesh<T, N> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            half_edges: Vec::new(),
        }
    }
}
