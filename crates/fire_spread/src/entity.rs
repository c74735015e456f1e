//! Point-like entities (trees) that take part in spread scheduling.
//!
//! Positions are planar: the world x axis maps to [`Vec2::x`] and the world z axis
//! maps to [`Vec2::y`]. Height is dropped when converting from world space.
use glam::Vec2;
use mint::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type EntityId = String;

/// A point-like entity with a unique id and a planar (x, z) position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    pub id: EntityId,
    /// Planar position, `x` = world x, `y` = world z.
    pub position: Vec2,
}

impl Entity {
    /// Create an entity from a planar position.
    pub fn new(id: impl Into<EntityId>, position: impl Into<Vec2>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
        }
    }

    /// Create an entity from separate world x and z coordinates.
    pub fn from_xz(id: impl Into<EntityId>, x: f32, z: f32) -> Self {
        Self::new(id, Vec2::new(x, z))
    }

    /// Create an entity from a 3D world position. The y component is ignored.
    pub fn from_world(id: impl Into<EntityId>, position: impl Into<Vector3<f32>>) -> Self {
        let p = position.into();
        Self::from_xz(id, p.x, p.z)
    }

    /// Euclidean distance to `other` in the x/z plane.
    #[inline]
    pub fn planar_distance(&self, other: &Entity) -> f32 {
        self.position.distance(other.position)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn from_world_drops_height() {
        let e = Entity::from_world("Tree_3", Vec3::new(4.0, 50.0, -2.0));
        assert_eq!(e.id, "Tree_3");
        assert_eq!(e.position, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn planar_distance_is_euclidean() {
        let a = Entity::from_xz("a", 0.0, 0.0);
        let b = Entity::from_xz("b", 3.0, 4.0);
        assert_eq!(a.planar_distance(&b), 5.0);
        assert_eq!(b.planar_distance(&a), 5.0);
    }

    #[test]
    fn non_finite_positions_are_detected() {
        assert!(Entity::from_xz("ok", 1.0, 2.0).is_finite());
        assert!(!Entity::from_xz("nan", f32::NAN, 0.0).is_finite());
        assert!(!Entity::from_xz("inf", 0.0, f32::INFINITY).is_finite());
    }
}
