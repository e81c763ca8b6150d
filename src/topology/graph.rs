//! Node/edge representation of two curves and their mutual crossings.
//!
//! Generalizes the boolean traversal: instead of walking one combined
//! boundary, the builder splits every simplex at every crossing and
//! exposes the full topology for arbitrary region extraction.

use slotmap::{new_key_type, SlotMap};

use crate::geometry::curve::PeriodicCurve;
use crate::geometry::simplex::{Simplex, SimplexKind};
use crate::math::period::PeriodRange;
use crate::math::{Point2, TOLERANCE};
use crate::operations::boolean::IntersectionLookup;

new_key_type! {
    /// Stable identity of a graph node.
    pub struct NodeId;
    /// Stable identity of a graph edge.
    pub struct EdgeId;
}

/// Which input curve an edge or vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeIndex {
    /// The left-hand input curve.
    Lhs,
    /// The right-hand input curve.
    Rhs,
}

/// What a graph node represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// An original simplex endpoint of one curve.
    Geometry {
        /// The curve the vertex belongs to.
        shape: ShapeIndex,
        /// The vertex's period on that curve.
        period: f64,
    },
    /// A crossing point of the two curves.
    Crossing {
        /// Period of the crossing on the left-hand curve.
        lhs_period: f64,
        /// Period of the crossing on the right-hand curve.
        rhs_period: f64,
    },
}

/// A graph node: a spatial location plus what it represents.
///
/// Nodes are deduplicated by location within the build tolerance; a
/// geometry vertex coincident with a crossing keeps the crossing kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeData {
    /// Spatial location of the node.
    pub position: Point2,
    /// What the node represents.
    pub kind: NodeKind,
}

/// Geometric kind of an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeKind {
    /// A straight piece.
    Line,
    /// A circular arc piece with its center and signed sweep, recomputed
    /// for the sub-range.
    CircleArc {
        /// Center of the arc circle.
        center: Point2,
        /// Signed sweep angle of the piece.
        sweep: f64,
    },
}

/// A simplex piece between two adjacent nodes in period order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeData {
    /// Node at the piece's start period.
    pub from: NodeId,
    /// Node at the piece's end period.
    pub to: NodeId,
    /// The curve the piece belongs to.
    pub shape: ShapeIndex,
    /// Start period of the piece on its curve.
    pub start_period: f64,
    /// End period of the piece on its curve.
    pub end_period: f64,
    /// Squared arc length of the piece.
    pub length_squared: f64,
    /// Geometric kind of the piece.
    pub kind: EdgeKind,
}

/// The topology graph of two curves and their crossing set.
#[derive(Debug)]
pub struct ShapeGraph {
    nodes: SlotMap<NodeId, NodeData>,
    edges: SlotMap<EdgeId, EdgeData>,
    tolerance: f64,
}

impl ShapeGraph {
    /// Builds the graph for two curves.
    ///
    /// Creates one node per distinct simplex endpoint and per crossing
    /// point, then splits every simplex at each crossing period strictly
    /// inside its range, producing sub-edges bounded by adjacent nodes.
    #[must_use]
    pub fn build(lhs: &PeriodicCurve, rhs: &PeriodicCurve, tolerance: f64) -> Self {
        let lookup = IntersectionLookup::build(lhs, rhs, tolerance);
        Self::from_lookup(&lookup)
    }

    /// Builds the graph from an already computed intersection lookup.
    #[must_use]
    pub fn from_lookup(lookup: &IntersectionLookup<'_>) -> Self {
        let mut graph = Self {
            nodes: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            tolerance: lookup.tolerance(),
        };

        // Crossing nodes first so coincident geometry vertices dedup
        // onto them.
        for ix in lookup.intersections() {
            graph.intern(
                ix.point,
                NodeKind::Crossing {
                    lhs_period: ix.lhs_period,
                    rhs_period: ix.rhs_period,
                },
            );
        }

        let curves = [(ShapeIndex::Lhs, lookup.lhs()), (ShapeIndex::Rhs, lookup.rhs())];
        for (shape, curve) in curves {
            for simplex in curve.simplexes() {
                graph.intern(
                    simplex.start_point(),
                    NodeKind::Geometry {
                        shape,
                        period: simplex.start_period(),
                    },
                );
            }
        }

        for (shape, curve) in curves {
            for simplex in curve.simplexes() {
                graph.split_simplex(lookup, shape, simplex);
            }
        }

        graph
    }

    /// Splits one simplex at every crossing period strictly inside its
    /// range and records the resulting sub-edges.
    fn split_simplex(&mut self, lookup: &IntersectionLookup<'_>, shape: ShapeIndex, simplex: &Simplex) {
        let range = simplex.periods();
        let mut cuts = vec![range.start];
        for ix in lookup.intersections() {
            let period = match shape {
                ShapeIndex::Lhs => ix.lhs_period,
                ShapeIndex::Rhs => ix.rhs_period,
            };
            if period > range.start + TOLERANCE && period < range.end - TOLERANCE {
                cuts.push(period);
            }
        }
        cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        cuts.push(range.end);

        for pair in cuts.windows(2) {
            let Some(piece) = simplex.clamp(PeriodRange::new(pair[0], pair[1])) else {
                continue;
            };
            let from = self.intern(
                piece.start_point(),
                NodeKind::Geometry {
                    shape,
                    period: piece.start_period(),
                },
            );
            let to = self.intern(
                piece.end_point(),
                NodeKind::Geometry {
                    shape,
                    period: piece.end_period(),
                },
            );
            let kind = match *piece.kind() {
                SimplexKind::Line { .. } => EdgeKind::Line,
                SimplexKind::Arc { center, sweep, .. } => EdgeKind::CircleArc { center, sweep },
            };
            self.edges.insert(EdgeData {
                from,
                to,
                shape,
                start_period: piece.start_period(),
                end_period: piece.end_period(),
                length_squared: piece.length_squared(),
                kind,
            });
        }
    }

    /// Returns the node at `position` (within tolerance), inserting a new
    /// one with `kind` when none exists. An existing node keeps its kind.
    fn intern(&mut self, position: Point2, kind: NodeKind) -> NodeId {
        let found = self
            .nodes
            .iter()
            .find(|(_, node)| (node.position - position).norm() < self.tolerance)
            .map(|(id, _)| id);
        match found {
            Some(id) => id,
            None => self.nodes.insert(NodeData { position, kind }),
        }
    }

    /// All nodes with their identities.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }

    /// All edges with their identities.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// Looks up a node by identity.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Looks up an edge by identity.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&EdgeData> {
        self.edges.get(id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square(origin: Point2, size: f64) -> PeriodicCurve {
        PeriodicCurve::polygon(&[
            origin,
            Point2::new(origin.x + size, origin.y),
            Point2::new(origin.x + size, origin.y + size),
            Point2::new(origin.x, origin.y + size),
        ])
        .unwrap()
    }

    /// Σ√(length²) of all edges belonging to one shape.
    fn shape_length(graph: &ShapeGraph, shape: ShapeIndex) -> f64 {
        graph
            .edges()
            .filter(|(_, e)| e.shape == shape)
            .map(|(_, e)| e.length_squared.sqrt())
            .sum()
    }

    #[test]
    fn overlapping_squares_graph() {
        let a = square(Point2::new(0.0, 0.0), 2.0);
        let b = square(Point2::new(1.0, 1.0), 2.0);
        let graph = ShapeGraph::build(&a, &b, 1e-9);

        // 4 corners each plus 2 crossings, no coincidences.
        assert_eq!(graph.node_count(), 10);
        // One edge of each square is split by each crossing.
        assert_eq!(graph.edge_count(), 12);

        let crossings = graph
            .nodes()
            .filter(|(_, n)| matches!(n.kind, NodeKind::Crossing { .. }))
            .count();
        assert_eq!(crossings, 2);
    }

    #[test]
    fn splitting_conserves_length_per_shape() {
        let a = square(Point2::new(0.0, 0.0), 2.0);
        let b = square(Point2::new(1.0, 1.0), 2.0);
        let graph = ShapeGraph::build(&a, &b, 1e-9);

        approx::assert_relative_eq!(shape_length(&graph, ShapeIndex::Lhs), a.length(), epsilon = 1e-9);
        approx::assert_relative_eq!(shape_length(&graph, ShapeIndex::Rhs), b.length(), epsilon = 1e-9);
    }

    #[test]
    fn arc_edges_carry_center_and_sweep() {
        let boundary = square(Point2::new(0.0, 0.0), 4.0);
        let circle = PeriodicCurve::circle(Point2::new(4.0, 2.0), 1.0).unwrap();
        let graph = ShapeGraph::build(&boundary, &circle, 1e-9);

        let mut total_sweep = 0.0;
        for (_, edge) in graph.edges().filter(|(_, e)| e.shape == ShapeIndex::Rhs) {
            match edge.kind {
                EdgeKind::CircleArc { center, sweep } => {
                    assert!((center - Point2::new(4.0, 2.0)).norm() < 1e-9);
                    total_sweep += sweep;
                }
                EdgeKind::Line => panic!("circle must produce arc edges"),
            }
        }
        // Sub-sweeps reassemble the full circle.
        assert!(
            (total_sweep - std::f64::consts::TAU).abs() < 1e-9,
            "total_sweep={total_sweep}"
        );

        assert!(
            (shape_length(&graph, ShapeIndex::Rhs) - circle.length()).abs() < 1e-9,
            "arc length mismatch"
        );
    }

    #[test]
    fn crossing_on_vertex_keeps_crossing_kind() {
        // The rhs square's corner (2,1) lies exactly on an lhs vertex.
        let lhs = PeriodicCurve::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        let rhs = square(Point2::new(1.0, 1.0), 2.0);
        let graph = ShapeGraph::build(&lhs, &rhs, 1e-9);

        let at_joint = graph
            .nodes()
            .find(|(_, n)| (n.position - Point2::new(2.0, 1.0)).norm() < 1e-9)
            .map(|(_, n)| n.kind)
            .unwrap();
        assert!(
            matches!(at_joint, NodeKind::Crossing { .. }),
            "expected crossing kind at the shared point, got {at_joint:?}"
        );
    }

    #[test]
    fn edges_connect_existing_nodes() {
        let a = square(Point2::new(0.0, 0.0), 2.0);
        let b = square(Point2::new(1.0, 1.0), 2.0);
        let graph = ShapeGraph::build(&a, &b, 1e-9);

        for (_, edge) in graph.edges() {
            let from = graph.node(edge.from).unwrap();
            let to = graph.node(edge.to).unwrap();
            assert!((from.position - to.position).norm() > 1e-9, "degenerate edge");
            assert!(edge.end_period > edge.start_period);
        }
    }

    #[test]
    fn disjoint_curves_have_no_crossing_nodes() {
        let a = square(Point2::new(0.0, 0.0), 1.0);
        let b = square(Point2::new(5.0, 5.0), 1.0);
        let graph = ShapeGraph::build(&a, &b, 1e-9);
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 8);
        assert!(graph
            .nodes()
            .all(|(_, n)| matches!(n.kind, NodeKind::Geometry { .. })));
    }
}
