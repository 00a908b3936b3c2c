//! Listener settings read from the environment.

use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `LEAGUE_HOST` / `LEAGUE_PORT`, falling back to `0.0.0.0:5000`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(env::var("LEAGUE_HOST").ok(), env::var("LEAGUE_PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("LEAGUE_PORT must be a valid port number, got '{raw}'"))
            })?,
        };

        Ok(Self { host, port })
    }
}
