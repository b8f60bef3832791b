//! Environment configuration shared by the server and the seed utility

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::{Error, Result};

pub const DEFAULT_DATA_DIR: &str = ".air-data";
pub const DEFAULT_PORT: u16 = 5000;

/// Process configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `tasks.json` (`TASKS_DATA_DIR`)
    pub data_dir: PathBuf,
    /// Listen address (`TASKS_HOST`, `PORT`)
    pub bind_addr: SocketAddr,
    /// Deployment environment name (`TASKS_ENV`)
    pub environment: String,
    /// Operator opt-in for seeding a production store (`TASKS_SEED_CONFIRM`)
    pub seed_confirmed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = lookup("TASKS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let host: IpAddr = match lookup("TASKS_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid TASKS_HOST '{}'", raw)))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid PORT '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let environment = lookup("TASKS_ENV")
            .map(|raw| raw.trim().to_ascii_lowercase())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| "development".to_string());

        Ok(Self {
            data_dir,
            bind_addr: SocketAddr::new(host, port),
            environment,
            seed_confirmed: parse_flag(lookup("TASKS_SEED_CONFIRM").as_deref(), false),
        })
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("tasks.json")
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.environment, "development");
        assert!(!config.seed_confirmed);
        assert!(!config.is_production());
        assert_eq!(config.tasks_path(), PathBuf::from(".air-data/tasks.json"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("TASKS_DATA_DIR", "/var/lib/air"),
            ("TASKS_HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("TASKS_ENV", " Production "),
            ("TASKS_SEED_CONFIRM", "yes"),
        ])
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/air"));
        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse().unwrap());
        assert!(config.is_production());
        assert!(config.seed_confirmed);
    }

    #[test]
    fn test_invalid_port() {
        match config(&[("PORT", "http")]) {
            Err(Error::Config(msg)) => assert!(msg.contains("PORT")),
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_unrecognised_flag_falls_back_to_default() {
        assert!(!parse_flag(Some("maybe"), false));
        assert!(parse_flag(Some("ON"), false));
        assert!(!parse_flag(Some("0"), true));
    }
}
