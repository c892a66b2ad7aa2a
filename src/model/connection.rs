//! Connection (edge) between two dots.

use serde::{Deserialize, Serialize};
use super::Dot;

/// Opaque connection identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(pub u64);

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the connection turns into once fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionKind {
    Plate,
    Link,
}

/// Connection type filter for neighbor queries and walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectionFilter {
    #[default]
    Any,
    PlateOnly,
    LinkOnly,
}

impl ConnectionFilter {
    pub fn matches(self, kind: ConnectionKind) -> bool {
        match self {
            ConnectionFilter::Any => true,
            ConnectionFilter::PlateOnly => kind == ConnectionKind::Plate,
            ConnectionFilter::LinkOnly => kind == ConnectionKind::Link,
        }
    }
}

/// An undirected, typed edge between two dots.
///
/// `a`/`b` order carries no meaning for traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub a: Dot,
    pub b: Dot,
    pub thickness: f64,
    pub width: f64,
    pub kind: ConnectionKind,
}

impl Connection {
    pub fn new(id: u64, a: Dot, b: Dot, kind: ConnectionKind) -> Self {
        Self {
            id: ConnectionId(id),
            a,
            b,
            thickness: 1.0,
            width: 4.0,
            kind,
        }
    }

    pub fn plate(id: u64, a: Dot, b: Dot) -> Self {
        Self::new(id, a, b, ConnectionKind::Plate)
    }

    pub fn link(id: u64, a: Dot, b: Dot) -> Self {
        Self::new(id, a, b, ConnectionKind::Link)
    }

    pub fn with_section(mut self, thickness: f64, width: f64) -> Self {
        self.thickness = thickness;
        self.width = width;
        self
    }

    pub fn endpoints(&self) -> [&Dot; 2] {
        [&self.a, &self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        assert!(ConnectionFilter::Any.matches(ConnectionKind::Link));
        assert!(ConnectionFilter::PlateOnly.matches(ConnectionKind::Plate));
        assert!(!ConnectionFilter::PlateOnly.matches(ConnectionKind::Link));
        assert!(!ConnectionFilter::LinkOnly.matches(ConnectionKind::Plate));
    }

    #[test]
    fn test_connection_json_shape() {
        let c = Connection::link(7, Dot::pastille(1, [0.0, 0.0, 0.0]), Dot::control_point(2, [1.0, 0.0, 0.0]));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["kind"], "Link");
        assert_eq!(json["a"]["kind"], "Pastille");
        assert_eq!(json["b"]["kind"], "ControlPoint");
        let back: Connection = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }
}
