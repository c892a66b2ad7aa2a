//! # Adjacency Resolver
//!
//! Builds the node/incidence view of a connection snapshot. Nodes are
//! spatial equivalence classes: every dot whose location coincides (within
//! `coincidence_tolerance`) with an earlier one resolves to the same node,
//! regardless of object identity or dot id.
//!
//! A node is represented by the first Pastille among its dots in connection
//! order, or by the first dot seen when none is a Pastille.

mod spatial;

use smallvec::SmallVec;
use tracing::debug;

use crate::config::TopologyConfig;
use crate::model::*;
use crate::{Error, Result};
use spatial::SpatialIndex;

/// Dense node index into a [`Topology`].
pub type NodeIx = usize;

/// One hop out of a node: the connection taken and the node it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    /// Position of the connection in the snapshot slice.
    pub conn: usize,
    pub to: NodeIx,
}

struct NodeEntry<'a> {
    dot: &'a Dot,
    pastille: bool,
    /// node → incident connection positions, in connection order
    incident: SmallVec<[usize; 4]>,
}

/// Read-only topology view over a borrowed connection snapshot.
pub struct Topology<'a> {
    connections: &'a [Connection],
    config: TopologyConfig,
    index: SpatialIndex,
    nodes: Vec<NodeEntry<'a>>,
    /// connection position → (node of `a`, node of `b`)
    ends: Vec<[NodeIx; 2]>,
}

impl<'a> Topology<'a> {
    /// Build with default tolerances.
    pub fn new(connections: &'a [Connection]) -> Self {
        Self::build(connections, TopologyConfig::default())
    }

    pub fn with_config(connections: &'a [Connection], config: TopologyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(connections, config))
    }

    fn build(connections: &'a [Connection], config: TopologyConfig) -> Self {
        let mut topo = Self {
            connections,
            index: SpatialIndex::new(config.coincidence_tolerance),
            config,
            nodes: Vec::new(),
            ends: Vec::with_capacity(connections.len()),
        };

        for (pos, conn) in connections.iter().enumerate() {
            let a = topo.intern(&conn.a);
            let b = topo.intern(&conn.b);
            topo.nodes[a].incident.push(pos);
            if a != b {
                topo.nodes[b].incident.push(pos);
            }
            topo.ends.push([a, b]);
        }

        debug!(
            connections = connections.len(),
            nodes = topo.nodes.len(),
            "built topology snapshot"
        );
        topo
    }

    fn intern(&mut self, dot: &'a Dot) -> NodeIx {
        let (ix, created) = self.index.find_or_insert(dot.location());
        if created {
            debug_assert_eq!(ix, self.nodes.len());
            self.nodes.push(NodeEntry {
                dot,
                pastille: dot.is_pastille(),
                incident: SmallVec::new(),
            });
        } else if dot.is_pastille() && !self.nodes[ix].pastille {
            self.nodes[ix].dot = dot;
            self.nodes[ix].pastille = true;
        }
        ix
    }

    // ========================================================================
    // Snapshot accessors
    // ========================================================================

    pub fn connections(&self) -> &'a [Connection] {
        self.connections
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Representative dot of a node.
    pub fn dot(&self, node: NodeIx) -> &'a Dot {
        self.nodes[node].dot
    }

    pub fn is_pastille(&self, node: NodeIx) -> bool {
        self.nodes[node].pastille
    }

    /// Number of incident connections, all kinds.
    pub fn degree(&self, node: NodeIx) -> usize {
        self.nodes[node].incident.len()
    }

    /// Nodes in order of first appearance in the connection slice.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIx> + '_ {
        0..self.nodes.len()
    }

    pub(crate) fn ends(&self, conn: usize) -> [NodeIx; 2] {
        self.ends[conn]
    }

    /// Resolve a dot to its node by location.
    pub fn node_of(&self, dot: &Dot) -> Result<NodeIx> {
        self.index
            .find(&dot.location())
            .ok_or(Error::DotNotInGraph(dot.id()))
    }

    /// Hops out of `node` over connections passing `filter`, in connection order.
    pub(crate) fn steps(&self, node: NodeIx, filter: ConnectionFilter) -> impl Iterator<Item = Step> + '_ {
        self.nodes[node].incident.iter().filter_map(move |&conn| {
            if !filter.matches(self.connections[conn].kind) {
                return None;
            }
            let [a, b] = self.ends[conn];
            let to = if a == node { b } else { a };
            Some(Step { conn, to })
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Every connection with an endpoint coincident with `dot`.
    pub fn connections_at(&self, dot: &Dot) -> Result<Vec<&'a Connection>> {
        let node = self.node_of(dot)?;
        Ok(self.nodes[node]
            .incident
            .iter()
            .map(|&conn| &self.connections[conn])
            .collect())
    }

    /// Opposite endpoint of each connection at `dot` that passes `filter`.
    pub fn neighbors_of(&self, dot: &Dot, filter: ConnectionFilter) -> Result<Vec<&'a Dot>> {
        let node = self.node_of(dot)?;
        Ok(self.steps(node, filter).map(|s| self.dot(s.to)).collect())
    }
}

/// One-shot [`Topology::connections_at`] with default tolerances.
pub fn connections_at<'a>(dot: &Dot, connections: &'a [Connection]) -> Result<Vec<&'a Connection>> {
    Topology::new(connections).connections_at(dot)
}

/// One-shot [`Topology::neighbors_of`] with default tolerances.
pub fn neighbors_of<'a>(
    dot: &Dot,
    connections: &'a [Connection],
    filter: ConnectionFilter,
) -> Result<Vec<&'a Dot>> {
    Topology::new(connections).neighbors_of(dot, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(id: u64, x: f64) -> Dot {
        Dot::control_point(id, [x, 0.0, 0.0])
    }

    #[test]
    fn test_coincident_dots_share_a_node() {
        let a = cp(1, 0.0);
        let b = cp(2, 1.0);
        // Different object, different id, same place as `b`.
        let b_twin = cp(20, 1.00002);
        let c = cp(3, 2.0);
        let conns = vec![
            Connection::plate(1, a.clone(), b.clone()),
            Connection::plate(2, b_twin.clone(), c.clone()),
        ];
        let topo = Topology::new(&conns);

        assert_eq!(topo.node_count(), 3);
        assert_eq!(topo.node_of(&b).unwrap(), topo.node_of(&b_twin).unwrap());

        let from_b: Vec<DotId> = topo.neighbors_of(&b, ConnectionFilter::Any).unwrap()
            .into_iter().map(Dot::id).collect();
        let from_twin: Vec<DotId> = topo.neighbors_of(&b_twin, ConnectionFilter::Any).unwrap()
            .into_iter().map(Dot::id).collect();
        assert_eq!(from_b, vec![DotId(1), DotId(3)]);
        assert_eq!(from_b, from_twin);
    }

    #[test]
    fn test_pastille_wins_representative() {
        let cp_here = cp(5, 0.0);
        let past_here = Dot::pastille(6, [0.0, 0.0, 0.0]);
        let other = cp(7, 3.0);
        let conns = vec![
            Connection::plate(1, cp_here, other.clone()),
            Connection::link(2, other, past_here),
        ];
        let topo = Topology::new(&conns);
        assert_eq!(topo.node_count(), 2);
        assert!(topo.is_pastille(0));
        assert_eq!(topo.dot(0).id(), DotId(6));
    }

    #[test]
    fn test_unknown_dot_fails() {
        let conns = vec![Connection::plate(1, cp(1, 0.0), cp(2, 1.0))];
        let err = connections_at(&cp(9, 5.0), &conns).unwrap_err();
        assert!(matches!(err, Error::DotNotInGraph(DotId(9))));
    }

    #[test]
    fn test_filtered_neighbors() {
        let hub = Dot::pastille(1, [0.0, 0.0, 0.0]);
        let conns = vec![
            Connection::plate(1, hub.clone(), cp(2, 1.0)),
            Connection::link(2, cp(3, -1.0), hub.clone()),
        ];
        let ids = |f: ConnectionFilter| -> Vec<DotId> {
            neighbors_of(&hub, &conns, f).unwrap().into_iter().map(Dot::id).collect()
        };
        assert_eq!(ids(ConnectionFilter::Any), vec![DotId(2), DotId(3)]);
        assert_eq!(ids(ConnectionFilter::PlateOnly), vec![DotId(2)]);
        assert_eq!(ids(ConnectionFilter::LinkOnly), vec![DotId(3)]);
    }

    #[test]
    fn test_self_loop_counted_once() {
        let a = cp(1, 0.0);
        let conns = vec![Connection::plate(1, a.clone(), cp(2, 0.00001))];
        let topo = Topology::new(&conns);
        assert_eq!(topo.node_count(), 1);
        assert_eq!(topo.degree(0), 1);
        assert_eq!(topo.connections_at(&a).unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let conns: Vec<Connection> = Vec::new();
        let config = TopologyConfig { coincidence_tolerance: f64::NAN, ..Default::default() };
        assert!(matches!(Topology::with_config(&conns, config), Err(Error::InvalidConfig(_))));
    }
}
