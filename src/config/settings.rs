//! Configuration settings for the authentication gate.

use serde::Deserialize;
use std::path::Path;

use crate::error::GateError;

/// Main configuration structure for the gate.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Replay tolerance in milliseconds. A claim whose timestamp differs
    /// from the verifier clock by more than this (in either direction)
    /// is rejected as expired.
    #[serde(default = "default_tolerance_ms")]
    pub tolerance_ms: i64,
    /// Minimum plausible length of an encoded wallet address.
    #[serde(default = "default_min_wallet_address_len")]
    pub min_wallet_address_len: usize,
}

/// Admin wallet configuration.
///
/// The admin set is an ordinary configuration value, injected into the
/// policy layer at startup. Rotating an admin wallet is a config change,
/// not a code change.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    /// Wallet addresses permitted to perform admin actions.
    #[serde(default)]
    pub wallets: Vec<String>,
}

// Default value functions
fn default_tolerance_ms() -> i64 {
    300_000 // 5 minutes
}

fn default_min_wallet_address_len() -> usize {
    32
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            tolerance_ms: default_tolerance_ms(),
            min_wallet_address_len: default_min_wallet_address_len(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GateError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GateError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| GateError::Config {
            message: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), GateError> {
        if self.auth.tolerance_ms < 0 {
            return Err(GateError::Config {
                message: format!(
                    "Invalid tolerance_ms {}. Must be non-negative",
                    self.auth.tolerance_ms
                ),
            });
        }

        if self.auth.min_wallet_address_len == 0 {
            return Err(GateError::Config {
                message: "Invalid min_wallet_address_len 0. Must be at least 1".to_string(),
            });
        }

        // Admin wallets must themselves pass the plausibility gate.
        for wallet in &self.admin.wallets {
            if wallet.len() < self.auth.min_wallet_address_len {
                return Err(GateError::Config {
                    message: format!(
                        "Invalid admin wallet '{}'. Shorter than minimum address length {}",
                        wallet, self.auth.min_wallet_address_len
                    ),
                });
            }
        }

        Ok(())
    }
}
