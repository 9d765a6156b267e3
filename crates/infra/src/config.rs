//! Configuration loading and representation.

/// Environment variable toggling foreign-key enforcement in the store.
pub const ENFORCE_FOREIGN_KEYS_VAR: &str = "COSMOS_ENFORCE_FOREIGN_KEYS";

/// Storage behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Reject missions whose `planet_id`/`scientist_id` point at missing rows.
    pub enforce_foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enforce_foreign_keys: true,
        }
    }
}

impl StoreConfig {
    /// Load from the process environment; unset or invalid values use defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENFORCE_FOREIGN_KEYS_VAR) {
            match parse_bool(&raw) {
                Some(value) => config.enforce_foreign_keys = value,
                None => tracing::warn!(
                    var = ENFORCE_FOREIGN_KEYS_VAR,
                    value = %raw,
                    "invalid boolean; keeping default"
                ),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enforce_foreign_keys() {
        let config = StoreConfig::from_lookup(|_| None);
        assert!(config.enforce_foreign_keys);
    }

    #[test]
    fn reads_boolean_flags() {
        let config = StoreConfig::from_lookup(|_| Some("false".to_string()));
        assert!(!config.enforce_foreign_keys);

        let config = StoreConfig::from_lookup(|_| Some(" 1 ".to_string()));
        assert!(config.enforce_foreign_keys);
    }

    #[test]
    fn invalid_values_fall_back_to_default() {
        let config = StoreConfig::from_lookup(|_| Some("maybe".to_string()));
        assert_eq!(config, StoreConfig::default());
    }
}
