//! Named one-shot systems.
//!
//! Operations that can be requested from several places (today only the
//! scene reset) are registered once with [`World::register_system`] and
//! stored here under a name, so observers can queue them through
//! [`Commands::run_system`] without depending on the system itself.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use log::warn;
use rustc_hash::FxHashMap;

/// Name of the scene reset system.
pub const RESET_SYSTEM: &str = "reset";

#[derive(Resource, Default)]
pub struct SystemsStore {
    map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `system` in `world` and store it under `name`.
    pub fn register<M>(
        &mut self,
        world: &mut World,
        name: impl Into<String>,
        system: impl IntoSystem<(), (), M> + 'static,
    ) -> SystemId {
        let id = world.register_system(system);
        self.map.insert(name.into(), id);
        id
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<SystemId> {
        self.map.get(name.as_ref()).copied()
    }

    /// Queue the system stored under `name`. Returns `false` and logs a
    /// warning when nothing is registered under that name.
    pub fn queue(&self, commands: &mut Commands, name: &str) -> bool {
        match self.get(name) {
            Some(id) => {
                commands.run_system(id);
                true
            }
            None => {
                warn!("no system registered as '{}'", name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::RunSystemOnce;

    #[derive(Resource, Default)]
    struct Runs(u32);

    fn bump(mut runs: ResMut<Runs>) {
        runs.0 += 1;
    }

    #[test]
    fn test_queue_runs_registered_system() {
        let mut world = World::new();
        world.init_resource::<Runs>();
        let mut store = SystemsStore::new();
        store.register(&mut world, "bump", bump);
        world.insert_resource(store);

        world
            .run_system_once(|mut commands: Commands, store: Res<SystemsStore>| {
                assert!(store.queue(&mut commands, "bump"));
                assert!(!store.queue(&mut commands, "missing"));
            })
            .unwrap();
        assert_eq!(world.resource::<Runs>().0, 1);
    }
}
