//! # implant-topology — Connection-Topology Decomposition
//!
//! Splits the dot/connection skeleton of a bone-plate or mesh layout into
//! non-branching chains, the unit a curve-fitting stage turns into plate or
//! link geometry.
//!
//! ## Design Principles
//!
//! 1. **Spatial identity**: dots are the same node when their locations
//!    coincide within tolerance, whatever their object identity or id
//! 2. **Clean DTOs**: `Dot`, `Connection`, `Chain` cross all boundaries
//! 3. **Snapshot in, data out**: a `Topology` borrows the caller's
//!    connections immutably and never mutates them
//! 4. **Deterministic**: same input order, same chains
//!
//! ## Quick Start
//!
//! ```rust
//! use implant_topology::{Connection, Dot, Topology};
//!
//! let a = Dot::pastille(1, [0.0, 0.0, 0.0]);
//! let b = Dot::control_point(2, [5.0, 0.0, 0.0]);
//! let c = Dot::control_point(3, [10.0, 2.0, 0.0]);
//! let d = Dot::pastille(4, [15.0, 2.0, 0.0]);
//! let connections = vec![
//!     Connection::plate(1, a.clone(), b.clone()),
//!     Connection::plate(2, b, c.clone()),
//!     Connection::plate(3, c, d.clone()),
//! ];
//!
//! let topology = Topology::new(&connections);
//! let chains = topology.decompose();
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].dots.len(), 4);
//! ```
//!
//! ## Operations
//!
//! | Operation | Module |
//! |-----------|--------|
//! | `connections_at`, `neighbors_of` | `adjacency` |
//! | `find_hubs` | `traversal::hubs` |
//! | `decompose` | `traversal::decompose` |
//! | `reachable_until_boundary`, `neighboring_pastilles_of` | `traversal::reach` |
//! | `chains_between` | `traversal::lookup` |
//! | `all_equal_properties` | `consistency` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod adjacency;
pub mod traversal;
pub mod consistency;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Chain, Connection, ConnectionFilter, ConnectionId, ConnectionKind,
    ControlPoint, Dot, DotId, LandmarkId, Pastille, Point3, Vector3,
};

// ============================================================================
// Re-exports: Topology and operations
// ============================================================================

pub use config::{TieBreak, TopologyConfig};
pub use adjacency::{connections_at, neighbors_of, NodeIx, Topology};
pub use traversal::{
    chains_between, decompose, find_hubs, neighboring_pastilles_of,
    reachable_until_boundary, TraversalMode,
};
pub use consistency::{all_equal_properties, all_equal_properties_within};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Dot {0} is not part of the graph")]
    DotNotInGraph(DotId),

    #[error("Dot {0} is not a pastille")]
    NotAPastille(DotId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
