use crate::{ConfigError, FromEnv, env_first, env_or_default, parse_var};
use std::net::Ipv4Addr;

const DEFAULT_PORT: u16 = 8080;
const PORT_KEYS: [&str; 2] = ["HTTP_PORT", "PORT"];

/// Listen address of an HTTP service
///
/// `HOST` defaults to `0.0.0.0`; the port comes from `HTTP_PORT`, then
/// `PORT`, then 8080.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, ready for `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = match env_first(&PORT_KEYS) {
            Some((key, raw)) => parse_var(key, &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}
