//! Smudge Services Layer
//!
//! Host-facing services around the code engine: settings persistence and
//! world session lifecycle.

pub mod session;
pub mod settings;

pub use session::{Session, WorldEvent};
pub use settings::{PrintSettings, Settings, SettingsError, SmudgeSettings};
