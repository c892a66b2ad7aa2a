//! Chain builder: split a connection graph into non-branching chains.
//!
//! ```text
//! hubs (Pastilles, branching control points)
//!   → walk out of every hub along every connection
//!   → drop walks whose dot set is already taken
//!   → anchor hub-less paths at a leaf, hub-less rings per `TieBreak`
//! ```
//!
//! Every connection's pair of dots is adjacent in some chain, and no
//! connection is used twice. Of several connections joining the same two
//! nodes only the first one walked is kept.

use hashbrown::HashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::adjacency::{NodeIx, Step, Topology};
use crate::config::TieBreak;
use crate::model::{Chain, Connection, ConnectionFilter};
use super::{NodeSet, TraversalMode, Walk, Walker};

/// Sorted, deduplicated nodes; identical for a chain found from either end.
type ChainKey = SmallVec<[NodeIx; 8]>;

struct Collector {
    seen: HashSet<ChainKey>,
    covered: Vec<bool>,
    walks: Vec<Walk>,
}

impl Collector {
    fn new(connection_count: usize) -> Self {
        Self {
            seen: HashSet::new(),
            covered: vec![false; connection_count],
            walks: Vec::new(),
        }
    }

    fn accept(&mut self, walk: Walk) {
        let mut key: ChainKey = walk.nodes.iter().copied().collect();
        key.sort_unstable();
        key.dedup();
        if !self.seen.insert(key) {
            trace!(nodes = ?walk.nodes, "suppressed duplicate chain");
            return;
        }
        for &conn in &walk.conns {
            self.covered[conn] = true;
        }
        trace!(nodes = ?walk.nodes, "accepted chain");
        self.walks.push(walk);
    }

    fn is_covered(&self, conn: usize) -> bool {
        self.covered[conn]
    }
}

impl<'a> Topology<'a> {
    /// Decompose the snapshot into chains, in discovery order.
    pub fn decompose(&self) -> Vec<Chain> {
        self.decompose_walks()
            .iter()
            .map(|walk| self.to_chain(walk))
            .collect()
    }

    pub(crate) fn decompose_walks(&self) -> Vec<Walk> {
        let connections = self.connections();
        match connections.len() {
            0 => return Vec::new(),
            1 => {
                let [a, b] = self.ends(0);
                return vec![Walk { nodes: vec![a, b], conns: vec![0] }];
            }
            _ => {}
        }

        let hubs = self.hub_nodes();
        let hub_set: NodeSet = hubs.iter().copied().collect();
        let walker = Walker::new(self, TraversalMode::Decompose, &hub_set, ConnectionFilter::Any);
        let mut out = Collector::new(connections.len());

        for &hub in &hubs {
            let steps: SmallVec<[Step; 4]> = self.steps(hub, ConnectionFilter::Any).collect();
            for step in steps {
                out.accept(walker.run(hub, Some(step)));
            }
        }

        // Components without any hub: open paths start at a leaf...
        for node in self.nodes().filter(|&n| !hub_set.contains(&n) && self.degree(n) == 1) {
            let steps: SmallVec<[Step; 4]> = self.steps(node, ConnectionFilter::Any).collect();
            for step in steps {
                if !out.is_covered(step.conn) {
                    out.accept(walker.run(node, Some(step)));
                }
            }
        }
        // ...and rings are traced from their first uncovered connection.
        for conn in 0..connections.len() {
            if out.is_covered(conn) {
                continue;
            }
            let [a, b] = self.ends(conn);
            let walk = walker.run(a, Some(Step { conn, to: b }));
            if walk.is_closed() && self.config().tie_break == TieBreak::LowestId {
                out.accept(self.anchor_ring(walk));
            } else {
                out.accept(walk);
            }
        }

        debug!(
            connections = connections.len(),
            hubs = hubs.len(),
            chains = out.walks.len(),
            "decomposed topology"
        );
        out.walks
    }

    /// Restart a closed walk at its lowest-id dot, heading to the lower-id
    /// of that dot's two ring neighbors.
    fn anchor_ring(&self, walk: Walk) -> Walk {
        let Walk { mut nodes, mut conns } = walk;
        nodes.pop();
        if let Some(i) = (0..nodes.len()).min_by_key(|&i| self.dot(nodes[i]).id()) {
            nodes.rotate_left(i);
            conns.rotate_left(i);
        }
        let k = nodes.len();
        if k > 2 && self.dot(nodes[k - 1]).id() < self.dot(nodes[1]).id() {
            nodes[1..].reverse();
            conns.reverse();
        }
        if let Some(&anchor) = nodes.first() {
            trace!(anchor = %self.dot(anchor).id(), "anchored hub-less ring");
            nodes.push(anchor);
        }
        Walk { nodes, conns }
    }

    pub(crate) fn to_chain(&self, walk: &Walk) -> Chain {
        let connections = self.connections();
        Chain {
            dots: walk.nodes.iter().map(|&n| self.dot(n).clone()).collect(),
            connections: walk.conns.iter().map(|&c| connections[c].id).collect(),
        }
    }
}

/// One-shot [`Topology::decompose`] with default tolerances.
pub fn decompose(connections: &[Connection]) -> Vec<Chain> {
    Topology::new(connections).decompose()
}
