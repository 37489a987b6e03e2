use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

const CHANNEL_BUFFER_VAR: &str = "ORDERS_CHANNEL_BUFFER";
const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Runtime settings for the assembled system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of each service's request channel.
    pub channel_buffer: usize,
    /// Default `tracing` filter, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Values that fail to parse
    /// fall back to their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let channel_buffer = parse_or(&lookup, CHANNEL_BUFFER_VAR, defaults.channel_buffer)
            .max(1);
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        Self { channel_buffer, log_filter }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup_from(&[])), SystemConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            ("ORDERS_CHANNEL_BUFFER", "128"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.channel_buffer, 128);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SystemConfig::from_lookup(lookup_from(&[("ORDERS_CHANNEL_BUFFER", "lots")]));
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);

        let config = SystemConfig::from_lookup(lookup_from(&[("ORDERS_CHANNEL_BUFFER", "0")]));
        assert_eq!(config.channel_buffer, 1);
    }
}
