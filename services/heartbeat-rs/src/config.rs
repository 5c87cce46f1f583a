use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pause between two status lines.
    pub interval_ms: u64,
    /// Shown in the startup banner.
    #[serde(deserialize_with = "string_or_number")]
    pub project: String,
    /// Stop after this many iterations (0 = run until killed).
    pub max_iterations: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            project: "heartbeat".to_string(),
            max_iterations: 0,
        }
    }
}

// Env liefert "2024" als Zahl, der Projektname bleibt aber ein String
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Bool(b) => b.to_string(),
    })
}

impl Config {
    /// Defaults, overridden by `HEARTBEAT_*` environment variables.
    pub fn load() -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("HEARTBEAT_"))
            .extract()?;
        Ok(config)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_env() {
        Jail::expect_with(|_jail| {
            let config = Config::load().expect("load");
            assert_eq!(config, Config::default());
            assert_eq!(config.interval(), Duration::from_secs(3));
            Ok(())
        });
    }

    #[test]
    fn env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("HEARTBEAT_INTERVAL_MS", "250");
            jail.set_env("HEARTBEAT_PROJECT", "demo");
            jail.set_env("HEARTBEAT_MAX_ITERATIONS", "10");
            let config = Config::load().expect("load");
            assert_eq!(config.interval(), Duration::from_millis(250));
            assert_eq!(config.project, "demo");
            assert_eq!(config.max_iterations, 10);
            Ok(())
        });
    }

    #[test]
    fn numeric_project_name_is_kept_as_text() {
        Jail::expect_with(|jail| {
            jail.set_env("HEARTBEAT_PROJECT", "2024");
            let config = Config::load().expect("load");
            assert_eq!(config.project, "2024");
            assert_eq!(config.interval_ms, 3000);
            Ok(())
        });
    }

    #[test]
    fn bad_interval_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("HEARTBEAT_INTERVAL_MS", "soon");
            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
