//! Combined node/edge topology of two intersecting curves.

pub mod graph;

pub use graph::{EdgeData, EdgeId, EdgeKind, NodeData, NodeId, NodeKind, ShapeGraph, ShapeIndex};
