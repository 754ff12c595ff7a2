//! Shared settings for the Libris workspace.

pub mod settings;

pub use settings::{ConsoleSettings, LogFormat, Settings, TelemetrySettings};
