//! # Planning Graph Model
//!
//! Clean DTOs that describe the dot/connection skeleton of a plate or mesh
//! layout. These types cross every boundary: planning layer ↔ topology ↔
//! curve fitting.
//!
//! Design rule: this module is pure data, no indexes or traversal state.

pub mod point;
pub mod dot;
pub mod connection;
pub mod chain;

pub use point::{Point3, Vector3};
pub use dot::{ControlPoint, Dot, DotId, LandmarkId, Pastille};
pub use connection::{Connection, ConnectionFilter, ConnectionId, ConnectionKind};
pub use chain::Chain;
