//! Environment helpers used when no config file is present.

use std::str::FromStr;

use tracing::warn;

/// Read `key` and parse it, falling back to `default` when unset.
/// A value that is set but does not parse is logged and ignored.
pub fn var_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                warn!(%key, value = %raw, "ignoring unparsable environment value");
                default
            }
        },
        Err(_) => default,
    }
}

/// Whether a flag-style variable (e.g. `SKIP_MIGRATIONS`) is present.
pub fn flag(key: &str) -> bool {
    std::env::var_os(key).is_some()
}
