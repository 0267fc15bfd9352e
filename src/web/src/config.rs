use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const HOST_VAR: &str = "LEAGUE_DASHBOARD_HOST";
pub const PORT_VAR: &str = "LEAGUE_DASHBOARD_PORT";
pub const SEED_VAR: &str = "LEAGUE_DASHBOARD_SEED";

const DEFAULT_PORT: u16 = 18000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value '{value}' for {name}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Which data the store starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    #[default]
    Sample,
    Empty,
}

impl FromStr for SeedMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sample" => Ok(SeedMode::Sample),
            "empty" => Ok(SeedMode::Empty),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed: SeedMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed: SeedMode::Sample,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads every setting through `lookup`, keeping defaults for absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = parse_var(HOST_VAR, value)?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = parse_var(PORT_VAR, value)?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_var(SEED_VAR, value)?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:18000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "8080"),
            (SEED_VAR, "Empty"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.seed, SeedMode::Empty);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "eighty")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError {
                name: PORT_VAR,
                value: "eighty".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_seed() {
        assert!(ServerConfig::from_lookup(lookup_from(&[(SEED_VAR, "random")])).is_err());
    }
}
