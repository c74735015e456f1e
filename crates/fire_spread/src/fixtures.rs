//! Seeded random forests for tests, benches and the demo binaries.
//!
//! Trees are scattered uniformly over a square centred on the origin and named
//! `Tree_1`, `Tree_2`, ... in generation order. Placement quality is not a goal;
//! this only produces reproducible input for the scheduler.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entity::Entity;

#[inline]
fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Scatters `count` trees over a `terrain_size` square using `rng`.
pub fn scatter_trees(count: usize, terrain_size: f32, rng: &mut dyn Rng) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let x = (rand01(rng) - 0.5) * terrain_size;
            let z = (rand01(rng) - 0.5) * terrain_size;
            Entity::from_xz(format!("Tree_{}", i + 1), x, z)
        })
        .collect()
}

/// Same as [`scatter_trees`] with a `StdRng` seeded from `seed`.
pub fn random_forest(count: usize, terrain_size: f32, seed: u64) -> Vec<Entity> {
    let mut rng = StdRng::seed_from_u64(seed);
    scatter_trees(count, terrain_size, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_stays_inside_terrain() {
        let trees = random_forest(200, 100.0, 3);
        assert_eq!(trees.len(), 200);
        assert!(trees
            .iter()
            .all(|t| t.position.x.abs() <= 50.0 && t.position.y.abs() <= 50.0));
        assert_eq!(trees[0].id, "Tree_1");
        assert_eq!(trees[199].id, "Tree_200");
    }

    #[test]
    fn same_seed_gives_same_forest() {
        let a = random_forest(50, 80.0, 11);
        let b = random_forest(50, 80.0, 11);
        assert_eq!(a, b);
    }
}
