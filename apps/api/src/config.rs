use anyhow::{Context, Result};

use crate::extraction::DEFAULT_REFERENCE_YEAR;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_JOB_ROLE: &str = "Software Developer";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Year that "present"/"current" in resume date ranges resolves to.
    pub reference_year: i32,
    /// Role used when a resume upload names none.
    pub default_job_role: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            reference_year: parse_env("REFERENCE_YEAR", DEFAULT_REFERENCE_YEAR)?,
            default_job_role: std::env::var("DEFAULT_JOB_ROLE")
                .unwrap_or_else(|_| DEFAULT_JOB_ROLE.to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            reference_year: DEFAULT_REFERENCE_YEAR,
            default_job_role: DEFAULT_JOB_ROLE.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
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
    fn test_parse_env_falls_back_to_default() {
        let port: u16 = parse_env("CAREERMATCH_TEST_UNSET_PORT", 5001).unwrap();
        assert_eq!(port, 5001);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("CAREERMATCH_TEST_BAD_YEAR", "soon");
        let year: Result<i32> = parse_env("CAREERMATCH_TEST_BAD_YEAR", 2024);
        let err = year.expect_err("non-numeric year must fail");
        assert!(err.to_string().contains("CAREERMATCH_TEST_BAD_YEAR"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("CAREERMATCH_TEST_UPLOAD", " 2048 ");
        let bytes: usize = parse_env("CAREERMATCH_TEST_UPLOAD", 1).unwrap();
        assert_eq!(bytes, 2048);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.default_job_role, "Software Developer");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }
}
