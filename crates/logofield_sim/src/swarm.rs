use bevy::prelude::*;
use logofield_core::{LogoBody, PointerState, SwarmConfig, SwarmError, SwarmResult};
use logofield_physics::{advance, spawn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use crate::input::{InputTracker, PointerEvent};

/// The simulation context for one mount: every body, the pointer, and the RNG
/// that drives spawning and the per-tick random perturbations.
#[derive(Resource)]
pub struct SwarmState {
    pub config: SwarmConfig,
    bodies: Vec<LogoBody>,
    input: InputTracker,
    rng: ChaCha8Rng,
    /// Ticks advanced since mount
    pub ticks: u64,
}

impl SwarmState {
    /// Validate the config and spawn one body per configured logo.
    ///
    /// With `config.seed` set, the whole run (spawn and every tick) is
    /// reproducible for the same pointer input.
    pub fn mount(config: SwarmConfig) -> SwarmResult<Self> {
        config.validate()?;

        let mut seen = HashSet::with_capacity(config.logos.len());
        for logo in &config.logos {
            if !seen.insert(logo.id.as_str()) {
                return Err(SwarmError::DuplicateId(logo.id.clone()));
            }
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let bodies = spawn::spawn_bodies(&config.logos, &config.spawn, config.surface.size(), &mut rng);

        Ok(Self {
            config,
            bodies,
            input: InputTracker::default(),
            rng,
            ticks: 0,
        })
    }

    pub fn bodies(&self) -> &[LogoBody] {
        &self.bodies
    }

    pub fn pointer(&self) -> PointerState {
        self.input.pointer()
    }

    pub fn surface_size(&self) -> Vec2 {
        self.config.surface.size()
    }

    pub fn apply_pointer(&mut self, event: &PointerEvent) {
        let surface = self.surface_size();
        self.input.apply(event, surface);
    }

    /// Advance the swarm by one tick
    pub fn tick(&mut self) {
        let pointer = self.input.pointer();
        let bounds = self.surface_size();
        advance(
            &mut self.bodies,
            &pointer,
            &self.config.physics,
            bounds,
            &mut self.rng,
        );
        self.ticks += 1;
    }
}
