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

use thiserror::Error;

use crate::mesh::handles::{EdgeId, FaceId, HalfEdgeId, VertexId};

/// Broken connectivity found while building or validating a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("half-edge {0} references an unset element")]
    UnsetReference(HalfEdgeId),

    #[error("half-edge {0}: twin(twin(h)) != h")]
    TwinMismatch(HalfEdgeId),

    #[error("half-edge {0} and its twin reference different edges")]
    EdgeMismatch(HalfEdgeId),

    #[error("edge {0} representative half-edge does not belong to it")]
    EdgeHalfEdgeMismatch(EdgeId),

    #[error("face {face} cycle does not close through half-edge {half_edge}")]
    BrokenFaceCycle { face: FaceId, half_edge: HalfEdgeId },

    #[error("face {0} representative half-edge lies on another face")]
    FaceHalfEdgeMismatch(FaceId),

    #[error("vertex {0} representative half-edge does not originate there")]
    VertexHalfEdgeMismatch(VertexId),

    #[error("edge ({0}, {1}) is shared by more than two faces or repeated in one direction")]
    NonManifoldEdge(usize, usize),

    #[error("vertex {0} joins more than one boundary fan")]
    NonManifoldVertex(usize),

    #[error("triangle {0} has an out-of-range or repeated vertex index")]
    InvalidFace(usize),
}

pub type TopologyResult<T> = std::result::Result<T, TopologyError>;

/// Rejected Bezier input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BezierError {
    #[error("need at least 2 control points, got {0}")]
    TooFewControlPoints(usize),

    #[error("control grid row {row} has {found} points, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type BezierResult<T> = std::result::Result<T, BezierError>;

/// Reasons a Loop subdivision pass refuses to run or ends on a broken mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivisionError {
    #[error("face {0} is not a triangle")]
    NotTriangular(FaceId),

    #[error("mesh has no faces")]
    EmptyMesh,

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

pub type SubdivisionResult<T> = std::result::Result<T, SubdivisionError>;
