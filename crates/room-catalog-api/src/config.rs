//! Server configuration read from the process environment.

use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the listener binds to.
    pub host: String,
    /// Port the listener binds to.
    pub port: u16,
    /// Prefix under which the room routes are mounted. Empty means root.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: String::new(),
        }
    }
}

impl Config {
    /// Read configuration from `HOST`, `PORT` and `API_BASE_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `PORT` is not a valid `u16` or
    /// `API_BASE_PATH` does not start with `/`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let base_path = normalize_base_path(lookup("API_BASE_PATH").as_deref().unwrap_or(""))?;

        Ok(Self {
            host,
            port,
            base_path,
        })
    }

    /// Combine host and port into a bindable address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the pair does not parse as a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

/// Trim surrounding whitespace and trailing slashes. `/` collapses to root.
///
/// The result is mounted with `Router::nest`, so every segment must be a
/// non-empty literal: captures and wildcards would either panic in the router
/// or silently match arbitrary prefixes.
fn normalize_base_path(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(AppError::Config(format!(
            "API_BASE_PATH must start with '/': {trimmed}"
        )));
    }

    let normalized = trimmed.trim_end_matches('/');
    let is_literal = normalized
        .split('/')
        .skip(1)
        .all(|segment| !segment.is_empty() && !segment.contains(['{', '}', '*']));
    if !is_literal {
        return Err(AppError::Config(format!(
            "API_BASE_PATH must be a literal path without empty segments, '{{', '}}' or '*': {trimmed}"
        )));
    }

    Ok(normalized.to_string())
}
