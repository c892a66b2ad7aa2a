//! Section consistency across a set of connections.

use crate::config::DEFAULT_PROPERTY_TOLERANCE;
use crate::adjacency::Topology;
use crate::model::Connection;

/// True when every connection's thickness and width match the first one's
/// within `tolerance`. False for an empty set.
pub fn all_equal_properties_within(connections: &[Connection], tolerance: f64) -> bool {
    let Some((first, rest)) = connections.split_first() else {
        return false;
    };
    rest.iter().all(|c| {
        (c.thickness - first.thickness).abs() <= tolerance
            && (c.width - first.width).abs() <= tolerance
    })
}

/// [`all_equal_properties_within`] at the default tolerance (0.0005).
pub fn all_equal_properties(connections: &[Connection]) -> bool {
    all_equal_properties_within(connections, DEFAULT_PROPERTY_TOLERANCE)
}

impl Topology<'_> {
    /// Section consistency of the whole snapshot at the configured tolerance.
    pub fn all_equal_properties(&self) -> bool {
        all_equal_properties_within(self.connections(), self.config().property_tolerance)
    }
}
