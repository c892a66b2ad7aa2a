//! Bounded reachability: everything reachable from a dot without crossing
//! a boundary dot.
//!
//! Unlike decomposition the result may span several branches; it is a flat
//! depth-first listing, start first. The start is always expanded, even when
//! it is itself a boundary dot.

use crate::adjacency::Topology;
use crate::model::{Connection, ConnectionFilter, Dot};
use crate::Result;
use super::{NodeSet, TraversalMode, Walker};

impl<'a> Topology<'a> {
    /// Depth-first reachable dots from `start`. Boundary dots are listed but
    /// not expanded; boundary dots absent from the graph are ignored.
    pub fn reachable_until_boundary<'b, I>(
        &self,
        start: &Dot,
        boundary: I,
        filter: ConnectionFilter,
    ) -> Result<Vec<&'a Dot>>
    where
        I: IntoIterator<Item = &'b Dot>,
    {
        let origin = self.node_of(start)?;
        let stops: NodeSet = boundary
            .into_iter()
            .filter_map(|dot| self.node_of(dot).ok())
            .collect();

        let walk = Walker::new(self, TraversalMode::BoundedReachability, &stops, filter)
            .run(origin, None);
        Ok(walk.nodes.into_iter().map(|n| self.dot(n)).collect())
    }

    /// Pastilles reachable from `pastille` without passing through another
    /// pastille, excluding `pastille` itself.
    pub fn neighboring_pastilles_of(
        &self,
        pastille: &Dot,
        filter: ConnectionFilter,
    ) -> Result<Vec<&'a Dot>> {
        let origin = self.pastille_node(pastille)?;
        let stops: NodeSet = self.nodes().filter(|&n| self.is_pastille(n)).collect();

        let walk = Walker::new(self, TraversalMode::BoundedReachability, &stops, filter)
            .run(origin, None);
        Ok(walk
            .nodes
            .into_iter()
            .filter(|&n| n != origin && self.is_pastille(n))
            .map(|n| self.dot(n))
            .collect())
    }
}

/// One-shot [`Topology::reachable_until_boundary`] with default tolerances.
pub fn reachable_until_boundary<'a, 'b, I>(
    start: &Dot,
    connections: &'a [Connection],
    boundary: I,
    filter: ConnectionFilter,
) -> Result<Vec<&'a Dot>>
where
    I: IntoIterator<Item = &'b Dot>,
{
    Topology::new(connections).reachable_until_boundary(start, boundary, filter)
}

/// One-shot [`Topology::neighboring_pastilles_of`] with default tolerances.
pub fn neighboring_pastilles_of<'a>(
    pastille: &Dot,
    connections: &'a [Connection],
    filter: ConnectionFilter,
) -> Result<Vec<&'a Dot>> {
    Topology::new(connections).neighboring_pastilles_of(pastille, filter)
}
