//! Environment variable parsing helpers

use std::env;

/// Extension trait for reading environment variables with defaults.
pub trait ConfigExt {
    /// Get an environment variable with a default value.
    ///
    /// # Example
    /// ```ignore
    /// let probe = String::env_or("PG_WAIT_PROBE", "pg_isready");
    /// ```
    fn env_or(name: &str, default: &str) -> String {
        env::var(name).unwrap_or_else(|_| default.to_string())
    }
}

// Blanket implementation for all types
impl<T> ConfigExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name since tests run in parallel.

    #[test]
    fn test_env_or_falls_back_to_default() {
        env::remove_var("COMMON_TEST_ENV_OR");
        assert_eq!(String::env_or("COMMON_TEST_ENV_OR", "fallback"), "fallback");
    }

    #[test]
    fn test_env_or_prefers_set_value() {
        env::set_var("COMMON_TEST_ENV_OR_SET", "psql");
        assert_eq!(String::env_or("COMMON_TEST_ENV_OR_SET", "pg_isready"), "psql");
        env::remove_var("COMMON_TEST_ENV_OR_SET");
    }
}
