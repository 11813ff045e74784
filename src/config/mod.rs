//! Configuration management for the authentication gate.

mod settings;

pub use settings::{AdminConfig, AuthConfig, Settings};
