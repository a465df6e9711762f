//! Overlap queries and collectible pickup.
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::layer::Collectible;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::score::Score;

/// Entities among `candidates` whose collider overlaps `collider` placed at
/// `position`. Touching edges do not count.
pub fn overlapping<'a, I>(
    position: Vector2,
    collider: &BoxCollider,
    candidates: I,
) -> SmallVec<[Entity; 4]>
where
    I: IntoIterator<Item = (Entity, &'a MapPosition, &'a BoxCollider)>,
{
    candidates
        .into_iter()
        .filter(|(_, other_position, other)| {
            collider.overlaps(position, other, other_position.pos)
        })
        .map(|(entity, _, _)| entity)
        .collect()
}

/// Despawn every collectible the player touches; one point each.
pub fn collect_collectibles(
    mut commands: Commands,
    mut score: ResMut<Score>,
    players: Query<(&MapPosition, &BoxCollider), With<Player>>,
    collectibles: Query<(Entity, &MapPosition, &BoxCollider), (With<Collectible>, Without<Player>)>,
) {
    for (position, collider) in players.iter() {
        let hits = overlapping(position.pos, collider, collectibles.iter());
        if hits.is_empty() {
            continue;
        }
        for entity in hits.iter() {
            debug!("collected {:?}", entity);
            commands.entity(*entity).despawn();
        }
        score.add(hits.len() as u32);
        info!("{}", score.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_filters_candidates() {
        let mut world = World::new();
        let near = world
            .spawn((MapPosition::new(10.0, 0.0), BoxCollider::centered(16.0, 16.0)))
            .id();
        world.spawn((MapPosition::new(16.0 + 16.0, 0.0), BoxCollider::centered(16.0, 16.0)));
        world.spawn((MapPosition::new(500.0, 0.0), BoxCollider::centered(16.0, 16.0)));

        let mut q = world.query::<(Entity, &MapPosition, &BoxCollider)>();
        let hits = overlapping(
            Vector2::zero(),
            &BoxCollider::centered(16.0, 16.0),
            q.iter(&world),
        );
        assert_eq!(hits.as_slice(), &[near]);
    }
}
