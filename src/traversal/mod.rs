//! # Traversal
//!
//! Two walks share one engine, selected by [`TraversalMode`]:
//!
//! | Mode | Expands | Stops at | Produces |
//! |------|---------|----------|----------|
//! | `Decompose` | one neighbor per step | hubs, dead ends, the start | a simple (or closed) chain |
//! | `BoundedReachability` | every unvisited neighbor, depth-first | boundary nodes (recorded, not expanded) | a flat reachable set |
//!
//! Both walks are iterative; graph size never grows the call stack.

pub mod hubs;
pub mod decompose;
pub mod reach;
pub mod lookup;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::adjacency::{NodeIx, Step, Topology};
use crate::model::ConnectionFilter;

pub use hubs::find_hubs;
pub use decompose::decompose;
pub use reach::{neighboring_pastilles_of, reachable_until_boundary};
pub use lookup::chains_between;

pub(crate) type NodeSet = HashSet<NodeIx>;

/// Which traversal semantics a walk applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Follow a single non-branching run out of a hub.
    Decompose,
    /// Flood outward until boundary nodes.
    BoundedReachability,
}

/// Result of one walk: visited nodes and the connections used to reach them.
///
/// In `Decompose` mode `conns[i]` joins `nodes[i]` and `nodes[i + 1]`.
/// In `BoundedReachability` mode `conns[i]` is the connection that
/// discovered `nodes[i + 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Walk {
    pub nodes: Vec<NodeIx>,
    pub conns: Vec<usize>,
}

impl Walk {
    fn start(node: NodeIx) -> Self {
        Self { nodes: vec![node], conns: Vec::new() }
    }

    fn record(&mut self, step: Step) {
        self.conns.push(step.conn);
        self.nodes.push(step.to);
    }

    /// Ends where it started, over at least one connection.
    pub(crate) fn is_closed(&self) -> bool {
        !self.conns.is_empty() && self.nodes.first() == self.nodes.last()
    }
}

pub(crate) struct Walker<'t, 'a> {
    topo: &'t Topology<'a>,
    mode: TraversalMode,
    /// Hubs in `Decompose` mode, boundary in `BoundedReachability` mode.
    stops: &'t NodeSet,
    filter: ConnectionFilter,
}

impl<'t, 'a> Walker<'t, 'a> {
    pub(crate) fn new(
        topo: &'t Topology<'a>,
        mode: TraversalMode,
        stops: &'t NodeSet,
        filter: ConnectionFilter,
    ) -> Self {
        Self { topo, mode, stops, filter }
    }

    /// Walk from `start`. `first` forces the opening hop; it is ignored by
    /// `BoundedReachability`, which always expands every neighbor.
    pub(crate) fn run(&self, start: NodeIx, first: Option<Step>) -> Walk {
        match self.mode {
            TraversalMode::Decompose => self.trace(start, first),
            TraversalMode::BoundedReachability => self.flood(start),
        }
    }

    fn trace(&self, start: NodeIx, first: Option<Step>) -> Walk {
        let mut walk = Walk::start(start);
        let mut visited: NodeSet = NodeSet::new();
        visited.insert(start);

        let mut tail = start;
        let mut next = first;
        loop {
            let step = match next.take() {
                Some(step) => step,
                None => {
                    if tail != start && self.stops.contains(&tail) {
                        break;
                    }
                    // a non-hub tail has at most one way on
                    let onward = self
                        .topo
                        .steps(tail, self.filter)
                        .filter(|s| !walk.conns.contains(&s.conn))
                        .find(|s| s.to == start || !visited.contains(&s.to));
                    match onward {
                        Some(step) => step,
                        None => break,
                    }
                }
            };

            walk.record(step);
            if step.to == start {
                // closed back onto the anchor
                break;
            }
            visited.insert(step.to);
            tail = step.to;
        }
        walk
    }

    fn flood(&self, start: NodeIx) -> Walk {
        let mut walk = Walk::start(start);
        let mut visited: NodeSet = NodeSet::new();
        visited.insert(start);

        // one frame per recursive DFS call: hops and a cursor into them
        let mut stack: Vec<(SmallVec<[Step; 4]>, usize)> =
            vec![(self.topo.steps(start, self.filter).collect(), 0)];

        while let Some((steps, cursor)) = stack.last_mut() {
            let Some(&step) = steps.get(*cursor) else {
                stack.pop();
                continue;
            };
            *cursor += 1;

            if !visited.insert(step.to) {
                continue;
            }
            walk.record(step);
            if !self.stops.contains(&step.to) {
                stack.push((self.topo.steps(step.to, self.filter).collect(), 0));
            }
        }
        walk
    }
}
