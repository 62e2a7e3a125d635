//! Helpers for loading service configuration from environment variables.

use std::str::FromStr;

/// Read a required env var.
///
/// # Panics
///
/// Panics with the variable name if it is missing or not valid unicode.
pub fn require_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| panic!("missing required env var {key}"))
}

/// Read an optional env var, falling back to `default` when it is missing
/// or does not parse as `T`.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

/// Parse an optional raw value, falling back to `default`.
pub fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
