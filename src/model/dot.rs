//! Dot — an anchor point in the planning graph.

use serde::{Deserialize, Serialize};
use super::{Point3, Vector3};

/// Opaque dot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DotId(pub u64);

impl std::fmt::Display for DotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an anatomical landmark a pastille was placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LandmarkId(pub u64);

/// A free waypoint with no extra semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: DotId,
    pub location: Point3,
    pub direction: Vector3,
}

/// An anchor bound to a screw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pastille {
    pub id: DotId,
    pub location: Point3,
    pub direction: Vector3,
    pub diameter: f64,
    pub thickness: f64,
    pub landmark: Option<LandmarkId>,
}

impl Pastille {
    pub fn with_landmark(mut self, landmark: LandmarkId) -> Self {
        self.landmark = Some(landmark);
        self
    }
}

/// A dot in the planning graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Dot {
    ControlPoint(ControlPoint),
    Pastille(Pastille),
}

impl Dot {
    /// A control point facing +Z.
    pub fn control_point(id: u64, location: impl Into<Point3>) -> Self {
        Dot::ControlPoint(ControlPoint {
            id: DotId(id),
            location: location.into(),
            direction: Vector3::Z,
        })
    }

    /// A pastille facing +Z with zero diameter/thickness and no landmark.
    pub fn pastille(id: u64, location: impl Into<Point3>) -> Self {
        Dot::Pastille(Pastille {
            id: DotId(id),
            location: location.into(),
            direction: Vector3::Z,
            diameter: 0.0,
            thickness: 0.0,
            landmark: None,
        })
    }

    pub fn id(&self) -> DotId {
        match self {
            Dot::ControlPoint(c) => c.id,
            Dot::Pastille(p) => p.id,
        }
    }

    pub fn location(&self) -> Point3 {
        match self {
            Dot::ControlPoint(c) => c.location,
            Dot::Pastille(p) => p.location,
        }
    }

    pub fn direction(&self) -> Vector3 {
        match self {
            Dot::ControlPoint(c) => c.direction,
            Dot::Pastille(p) => p.direction,
        }
    }

    pub fn with_direction(mut self, direction: impl Into<Vector3>) -> Self {
        let direction = direction.into();
        match &mut self {
            Dot::ControlPoint(c) => c.direction = direction,
            Dot::Pastille(p) => p.direction = direction,
        }
        self
    }

    pub fn is_pastille(&self) -> bool {
        matches!(self, Dot::Pastille(_))
    }

    pub fn as_pastille(&self) -> Option<&Pastille> {
        match self {
            Dot::Pastille(p) => Some(p),
            Dot::ControlPoint(_) => None,
        }
    }
}

impl From<ControlPoint> for Dot {
    fn from(c: ControlPoint) -> Self {
        Dot::ControlPoint(c)
    }
}

impl From<Pastille> for Dot {
    fn from(p: Pastille) -> Self {
        Dot::Pastille(p)
    }
}
