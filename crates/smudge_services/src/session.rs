//! World session lifecycle
//!
//! Hosts forward their new-game and load-game notifications here; each one
//! begins a fresh code epoch for the world's seed.

use smudge_core::CodeEngine;

use crate::settings::{Settings, SettingsError};

/// Lifecycle notification from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    NewGame { seed: u32 },
    Loaded { seed: u32 },
}

impl WorldEvent {
    pub fn seed(&self) -> u32 {
        match *self {
            WorldEvent::NewGame { seed } | WorldEvent::Loaded { seed } => seed,
        }
    }
}

/// A code engine bound to the host's world lifecycle.
#[derive(Debug)]
pub struct Session {
    engine: CodeEngine,
}

impl Session {
    /// Validate `settings` and open the first world.
    pub fn start(settings: &Settings, event: WorldEvent) -> Result<Self, SettingsError> {
        let config = settings.code_config()?;
        tracing::info!(?event, "opening world session");
        Ok(Self {
            engine: CodeEngine::new(config, event.seed()),
        })
    }

    pub fn handle(&mut self, event: WorldEvent) {
        tracing::info!(?event, epoch = self.engine.epoch(), "world session changed");
        self.engine.reset(event.seed());
    }

    /// Apply edited settings mid-session, keeping the current seed.
    pub fn apply_settings(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let config = settings.code_config()?;
        self.engine.apply_config(config);
        Ok(())
    }

    pub fn engine(&self) -> &CodeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CodeEngine {
        &mut self.engine
    }
}
