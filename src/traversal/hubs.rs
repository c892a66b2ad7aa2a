//! Branch (hub) detection.
//!
//! A hub terminates every chain that reaches it: Pastilles always, control
//! points only when more than two connections meet there.

use crate::adjacency::{NodeIx, Topology};
use crate::model::{Connection, Dot};

impl<'a> Topology<'a> {
    pub fn is_hub(&self, node: NodeIx) -> bool {
        self.is_pastille(node) || self.degree(node) > 2
    }

    /// Hub nodes in order of first appearance.
    pub(crate) fn hub_nodes(&self) -> Vec<NodeIx> {
        self.nodes().filter(|&n| self.is_hub(n)).collect()
    }

    /// Representative dots of every hub, in order of first appearance.
    pub fn find_hubs(&self) -> Vec<&'a Dot> {
        self.hub_nodes().into_iter().map(|n| self.dot(n)).collect()
    }
}

/// One-shot [`Topology::find_hubs`] with default tolerances.
pub fn find_hubs(connections: &[Connection]) -> Vec<&Dot> {
    Topology::new(connections).find_hubs()
}
