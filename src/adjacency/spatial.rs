//! Tolerance-aware spatial lookup.
//!
//! Locations are bucketed into cubic cells whose edge equals the tolerance,
//! so any point within tolerance of a query lies in the query's cell or one
//! of its 26 neighbors. Raw float bits are never hashed.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::Point3;

type CellKey = (i64, i64, i64);

pub(crate) struct SpatialIndex {
    tolerance: f64,
    cells: HashMap<CellKey, SmallVec<[usize; 2]>>,
    locations: Vec<Point3>,
}

impl SpatialIndex {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            cells: HashMap::new(),
            locations: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locations.len()
    }

    fn cell_of(&self, p: &Point3) -> CellKey {
        let q = |v: f64| (v / self.tolerance).floor() as i64;
        (q(p.x), q(p.y), q(p.z))
    }

    /// The earliest-inserted slot within tolerance of `p`, if any.
    pub(crate) fn find(&self, p: &Point3) -> Option<usize> {
        let (cx, cy, cz) = self.cell_of(p);
        let mut best: Option<usize> = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = (cx.saturating_add(dx), cy.saturating_add(dy), cz.saturating_add(dz));
                    let Some(slots) = self.cells.get(&key) else { continue };
                    for &slot in slots {
                        if self.locations[slot].coincides_with(p, self.tolerance)
                            && best.is_none_or(|b| slot < b)
                        {
                            best = Some(slot);
                        }
                    }
                }
            }
        }
        best
    }

    /// Resolve `p` to an existing slot or allocate a new one.
    /// Returns the slot and whether it was newly created.
    pub(crate) fn find_or_insert(&mut self, p: Point3) -> (usize, bool) {
        if let Some(slot) = self.find(&p) {
            return (slot, false);
        }
        let slot = self.locations.len();
        let key = self.cell_of(&p);
        self.locations.push(p);
        self.cells.entry(key).or_default().push(slot);
        (slot, true)
    }
}
