//! Targeted chain lookup between two pastilles.

use hashbrown::HashSet;

use crate::adjacency::{NodeIx, Topology};
use crate::model::{Connection, Dot};
use crate::{Error, Result};

impl<'a> Topology<'a> {
    /// For every chain holding both pastilles, the snapshot connections
    /// whose endpoints both lie on that chain, in snapshot order.
    pub fn chains_between(&self, start: &Dot, end: &Dot) -> Result<Vec<Vec<&'a Connection>>> {
        let s = self.pastille_node(start)?;
        let e = self.pastille_node(end)?;
        let connections = self.connections();

        let mut result = Vec::new();
        for walk in self.decompose_walks() {
            let members: HashSet<NodeIx> = walk.nodes.iter().copied().collect();
            if !(members.contains(&s) && members.contains(&e)) {
                continue;
            }
            let inside: Vec<&'a Connection> = connections
                .iter()
                .enumerate()
                .filter(|&(pos, _)| {
                    let [a, b] = self.ends(pos);
                    members.contains(&a) && members.contains(&b)
                })
                .map(|(_, conn)| conn)
                .collect();
            result.push(inside);
        }
        Ok(result)
    }

    /// Resolve `dot`, requiring both it and the node it lands on to be
    /// pastilles.
    pub(crate) fn pastille_node(&self, dot: &Dot) -> Result<NodeIx> {
        if !dot.is_pastille() {
            return Err(Error::NotAPastille(dot.id()));
        }
        let node = self.node_of(dot)?;
        if !self.is_pastille(node) {
            return Err(Error::NotAPastille(dot.id()));
        }
        Ok(node)
    }
}

/// One-shot [`Topology::chains_between`] with default tolerances.
pub fn chains_between<'a>(
    start: &Dot,
    end: &Dot,
    connections: &'a [Connection],
) -> Result<Vec<Vec<&'a Connection>>> {
    Topology::new(connections).chains_between(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConnectionId, DotId};

    fn conn_ids(chain: &[&Connection]) -> Vec<u64> {
        chain.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_between_adjacent_pastilles() {
        let p1 = Dot::pastille(1, [0.0, 0.0, 0.0]);
        let m = Dot::control_point(5, [1.0, 0.0, 0.0]);
        let p2 = Dot::pastille(2, [2.0, 0.0, 0.0]);
        let p3 = Dot::pastille(3, [3.0, 0.0, 0.0]);
        let conns = vec![
            Connection::plate(10, p1.clone(), m.clone()),
            Connection::plate(11, m, p2.clone()),
            Connection::plate(12, p2.clone(), p3.clone()),
        ];

        let found = chains_between(&p1, &p2, &conns).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(conn_ids(&found[0]), vec![10, 11]);

        // p1 and p3 never share a chain
        assert!(chains_between(&p1, &p3, &conns).unwrap().is_empty());
    }

    #[test]
    fn test_includes_chords_between_members() {
        // Two distinct chains join p1 and p2: via m, and the direct connection.
        let p1 = Dot::pastille(1, [0.0, 0.0, 0.0]);
        let m = Dot::control_point(5, [1.0, 1.0, 0.0]);
        let p2 = Dot::pastille(2, [2.0, 0.0, 0.0]);
        let conns = vec![
            Connection::plate(10, p1.clone(), m.clone()),
            Connection::plate(11, m, p2.clone()),
            Connection::link(12, p2.clone(), p1.clone()),
        ];
        let found = chains_between(&p1, &p2, &conns).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(conn_ids(&found[0]), vec![10, 11, 12]);
        assert_eq!(conn_ids(&found[1]), vec![12]);
        assert_eq!(found[1][0].id, ConnectionId(12));
    }

    #[test]
    fn test_rejects_control_point_endpoint() {
        let p1 = Dot::pastille(1, [0.0, 0.0, 0.0]);
        let m = Dot::control_point(5, [1.0, 0.0, 0.0]);
        let conns = vec![Connection::plate(10, p1.clone(), m.clone())];
        let err = chains_between(&p1, &m, &conns).unwrap_err();
        assert!(matches!(err, Error::NotAPastille(DotId(5))));
    }

    #[test]
    fn test_rejects_pastille_on_control_point_node() {
        let p1 = Dot::pastille(1, [0.0, 0.0, 0.0]);
        let conns = vec![Connection::plate(10, p1.clone(), Dot::control_point(5, [1.0, 0.0, 0.0]))];
        // same spot as the waypoint, but the graph only knows a control point there
        let stray = Dot::pastille(8, [1.0, 0.0, 0.0]);
        let err = chains_between(&p1, &stray, &conns).unwrap_err();
        assert!(matches!(err, Error::NotAPastille(DotId(8))));
    }

    #[test]
    fn test_rejects_absent_pastille() {
        let p1 = Dot::pastille(1, [0.0, 0.0, 0.0]);
        let elsewhere = Dot::pastille(7, [9.0, 9.0, 9.0]);
        let conns = vec![Connection::plate(10, p1.clone(), Dot::control_point(5, [1.0, 0.0, 0.0]))];
        let err = chains_between(&p1, &elsewhere, &conns).unwrap_err();
        assert!(matches!(err, Error::DotNotInGraph(DotId(7))));
    }
}
