use crate::hand::{Category, CategoryParseError};
use crate::simulation::StopCondition;

pub const TARGET_VAR: &str = "POKER_SIM_TARGET";
pub const HITS_VAR: &str = "POKER_SIM_HITS";
pub const TRIALS_VAR: &str = "POKER_SIM_TRIALS";
pub const SEED_VAR: &str = "POKER_SIM_SEED";

/// Hits collected by a default run.
pub const DEFAULT_HITS: u64 = 1000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Target {
        var: &'static str,
        #[source]
        source: CategoryParseError,
    },
    #[error("{var}: expected a non-negative integer, got '{value}'")]
    Number { var: &'static str, value: String },
    #[error("POKER_SIM_HITS and POKER_SIM_TRIALS are mutually exclusive")]
    ConflictingStop,
}

/// Settings for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub target: Category,
    pub stop: StopCondition,
    /// Fixed seed for reproducible runs; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { target: Category::Straight, stop: StopCondition::Hits(DEFAULT_HITS), seed: None }
    }
}

impl SimulationConfig {
    /// Read overrides from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`SimulationConfig::from_env`] with an injectable variable source.
    ///
    /// ```
    /// use poker_sim::config::SimulationConfig;
    /// use poker_sim::hand::Category;
    /// use poker_sim::simulation::StopCondition;
    ///
    /// let cfg = SimulationConfig::from_lookup(|var| match var {
    ///     "POKER_SIM_TARGET" => Some("full house".to_string()),
    ///     "POKER_SIM_TRIALS" => Some("5000".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(cfg.target, Category::FullHouse);
    /// assert_eq!(cfg.stop, StopCondition::Trials(5000));
    /// assert_eq!(cfg.seed, None);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(TARGET_VAR) {
            cfg.target = v.parse().map_err(|source| ConfigError::Target { var: TARGET_VAR, source })?;
        }
        let hits = lookup(HITS_VAR).map(|v| parse_number(HITS_VAR, &v)).transpose()?;
        let trials = lookup(TRIALS_VAR).map(|v| parse_number(TRIALS_VAR, &v)).transpose()?;
        cfg.stop = match (hits, trials) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingStop),
            (Some(n), None) => StopCondition::Hits(n),
            (None, Some(n)) => StopCondition::Trials(n),
            (None, None) => cfg.stop,
        };
        if let Some(v) = lookup(SEED_VAR) {
            cfg.seed = Some(parse_number(SEED_VAR, &v)?);
        }
        log::debug!("loaded {cfg:?}");
        Ok(cfg)
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Number { var, value: value.to_string() })
}
