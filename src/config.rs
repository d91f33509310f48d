//! Layered configuration: serialized defaults, then `HH_*` environment variables.

use crate::error::VacancyDbError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "HH_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Passed straight to the sqlite driver, e.g. `sqlite://hh.sqlite` or `sqlite::memory:`.
    pub database_url: String,
    pub create_if_missing: bool,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://hh_vacancies.sqlite".to_string(),
            create_if_missing: true,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, VacancyDbError> {
        Ok(Self::figment().extract()?)
    }

    /// Config pointing at a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_without_overrides() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults should extract");
        assert_eq!(cfg, Config::default());
        assert!(cfg.create_if_missing);
        assert_eq!(cfg.loglevel, "info");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg: Config = Config::figment()
            .merge(("database_url", "sqlite::memory:"))
            .merge(("loglevel", "debug"))
            .extract()
            .expect("merged config should extract");
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.loglevel, "debug");
    }

    #[test]
    fn in_memory_keeps_other_defaults() {
        let cfg = Config::in_memory();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.loglevel, Config::default().loglevel);
    }
}
