//! Chain — a non-branching run of dots handed to curve fitting.

use serde::{Deserialize, Serialize};
use super::{ConnectionId, Dot, DotId};

/// A chain in the graph: dot -[conn]- dot -[conn]- dot ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    /// Dots along the chain. Always has one more element than `connections`.
    pub dots: Vec<Dot>,
    /// Connections joining consecutive dots.
    pub connections: Vec<ConnectionId>,
}

impl Chain {
    pub fn single(dot: Dot) -> Self {
        Self { dots: vec![dot], connections: Vec::new() }
    }

    /// Number of connections walked.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn start(&self) -> Option<&Dot> {
        self.dots.first()
    }

    pub fn end(&self) -> Option<&Dot> {
        self.dots.last()
    }

    /// Extend the chain with a connection and the dot it leads to.
    pub fn append(&mut self, connection: ConnectionId, dot: Dot) {
        self.connections.push(connection);
        self.dots.push(dot);
    }

    /// A closed chain starts and ends on the same dot.
    pub fn is_closed(&self) -> bool {
        self.dots.len() > 1
            && self.start().map(Dot::id) == self.end().map(Dot::id)
    }

    pub fn contains(&self, id: DotId) -> bool {
        self.dots.iter().any(|d| d.id() == id)
    }

    pub fn dot_ids(&self) -> Vec<DotId> {
        self.dots.iter().map(Dot::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_close() {
        let mut chain = Chain::single(Dot::pastille(1, [0.0, 0.0, 0.0]));
        assert!(chain.is_empty());
        chain.append(ConnectionId(10), Dot::control_point(2, [1.0, 0.0, 0.0]));
        chain.append(ConnectionId(11), Dot::control_point(3, [1.0, 1.0, 0.0]));
        assert_eq!(chain.len(), 2);
        assert!(!chain.is_closed());
        chain.append(ConnectionId(12), Dot::pastille(1, [0.0, 0.0, 0.0]));
        assert!(chain.is_closed());
        assert_eq!(chain.dot_ids(), vec![DotId(1), DotId(2), DotId(3), DotId(1)]);
    }
}
