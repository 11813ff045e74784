//! Admin wallet allow-list.

use std::collections::HashSet;

use crate::config::AdminConfig;

/// The set of wallet addresses permitted to perform admin actions.
///
/// Built from configuration at startup and injected into handlers; an
/// empty set means no admin action succeeds (fail-closed).
#[derive(Debug, Clone, Default)]
pub struct AdminWallets {
    // Stored lowercased; lookups are case-insensitive.
    wallets: HashSet<String>,
}

impl AdminWallets {
    /// Build the admin set from configuration.
    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            wallets: config.wallets.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check whether a wallet address is an admin.
    pub fn is_admin(&self, wallet_address: &str) -> bool {
        self.wallets.contains(&wallet_address.to_lowercase())
    }

    /// Number of configured admin wallets.
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// Whether no admin wallets are configured.
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "2zodmoNmqjvrvYXb4tYqSBHn4VMKdDis9o44xhc2teME";

    #[test]
    fn test_is_admin_case_insensitive() {
        let admins = AdminWallets::from_config(&AdminConfig {
            wallets: vec![ADMIN.to_string()],
        });
        assert!(admins.is_admin(ADMIN));
        assert!(admins.is_admin(&ADMIN.to_lowercase()));
        assert!(admins.is_admin(&ADMIN.to_uppercase()));
        assert!(!admins.is_admin("4uQeVj5tqViQh7yWWGStvkEG1Zmhx6uasJtWCJziofMA"));
    }

    #[test]
    fn test_empty_set_rejects_everyone() {
        let admins = AdminWallets::default();
        assert!(admins.is_empty());
        assert!(!admins.is_admin(ADMIN));
    }

    #[test]
    fn test_multiple_admins() {
        let admins = AdminWallets::from_config(&AdminConfig {
            wallets: vec![
                ADMIN.to_string(),
                "4uQeVj5tqViQh7yWWGStvkEG1Zmhx6uasJtWCJziofMA".to_string(),
            ],
        });
        assert_eq!(admins.len(), 2);
        assert!(admins.is_admin("4uQeVj5tqViQh7yWWGStvkEG1Zmhx6uasJtWCJziofMA"));
    }
}
