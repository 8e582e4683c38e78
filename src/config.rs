use std::env;
use std::str::FromStr;

use crate::errors::ServerError;

/// Environment variable names
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    /// Seconds it takes for one request of the rate limit quota to come back.
    pub const RATE_LIMIT_REPLENISH_SECS: &str = "RATE_LIMIT_REPLENISH_SECS";
    pub const RATE_LIMIT_BURST: &str = "RATE_LIMIT_BURST";
    /// Largest JSON body accepted on create and update.
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const RATE_LIMIT_REPLENISH_SECS: u64 = 1;
    pub const RATE_LIMIT_BURST: u32 = 120;
    pub const MAX_BODY_BYTES: usize = 256 * 1024 * 1024;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rate_limit_replenish_secs: u64,
    pub rate_limit_burst: u32,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::HOST)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        Ok(Config {
            host,
            port: parse_or(&lookup, env_vars::PORT, defaults::PORT)?,
            rate_limit_replenish_secs: parse_or(
                &lookup,
                env_vars::RATE_LIMIT_REPLENISH_SECS,
                defaults::RATE_LIMIT_REPLENISH_SECS,
            )?,
            rate_limit_burst: parse_or(
                &lookup,
                env_vars::RATE_LIMIT_BURST,
                defaults::RATE_LIMIT_BURST,
            )?,
            max_body_bytes: parse_or(
                &lookup,
                env_vars::MAX_BODY_BYTES,
                defaults::MAX_BODY_BYTES,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialEq + Default,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) if value != T::default() => Ok(value),
            _ => Err(ServerError::EnvironmentError(format!(
                "{} must be a positive integer, got {:?}",
                key, raw
            ))),
        },
    }
}
