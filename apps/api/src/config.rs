use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparsable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on snapshots accepted by the batch endpoint.
    pub max_batch_size: usize,
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_batch_size: 50,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_batch_size: parse_env("MAX_BATCH_SIZE", defaults.max_batch_size)?,
            body_limit_bytes: parse_env("BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        };

        ensure!(config.max_batch_size >= 1, "MAX_BATCH_SIZE must be at least 1");
        Ok(config)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: usize = parse_env("RESUME_ATS_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_ATS_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("RESUME_ATS_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("RESUME_ATS_TEST_BAD_PORT"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUME_ATS_TEST_BATCH", " 12 ");
        let value: usize = parse_env("RESUME_ATS_TEST_BATCH", 50).unwrap();
        assert_eq!(value, 12);
    }
}
