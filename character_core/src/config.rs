//! Growth and base-stat constants configuration

use crate::job::Job;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Error loading game constants
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Global game constants instance
static GAME_CONSTANTS: OnceLock<GameConstants> = OnceLock::new();

/// Initialize the global game constants from a TOML file
///
/// Must be called once at startup before any character is created.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = GameConstants::load_from_path(path)?;
    GAME_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Initialize the global game constants with default values
///
/// Useful for tests or when no config file is available.
pub fn init_constants_default() -> Result<(), ConfigError> {
    GAME_CONSTANTS
        .set(GameConstants::default())
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Get a reference to the global game constants
///
/// Panics if constants have not been initialized via `init_constants()` or `init_constants_default()`.
pub fn constants() -> &'static GameConstants {
    GAME_CONSTANTS
        .get()
        .expect("GameConstants not initialized - call init_constants() or init_constants_default() first")
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    GAME_CONSTANTS.get().is_some()
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
///
/// If constants are already initialized, this does nothing.
/// If not initialized, initializes with default values.
pub fn ensure_constants_initialized() {
    GAME_CONSTANTS.get_or_init(GameConstants::default);
}

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub growth: GrowthConstants,
    #[serde(default)]
    pub jobs: JobConstants,
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let constants: GameConstants = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded game constants");
        Ok(constants)
    }
}

/// Per-level stat gains applied by a character level-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthConstants {
    /// Hp and max hp gained per level
    #[serde(default = "default_hp_per_level")]
    pub hp_per_level: f64,
    /// Mana and max mana gained per level
    #[serde(default = "default_mana_per_level")]
    pub mana_per_level: f64,
    /// Speed and max speed gained per level
    #[serde(default = "default_speed_per_level")]
    pub speed_per_level: f64,
}

impl Default for GrowthConstants {
    fn default() -> Self {
        GrowthConstants {
            hp_per_level: 10.0,
            mana_per_level: 5.0,
            speed_per_level: 1.5,
        }
    }
}

fn default_hp_per_level() -> f64 {
    10.0
}
fn default_mana_per_level() -> f64 {
    5.0
}
fn default_speed_per_level() -> f64 {
    1.5
}

/// Level-1 base stats for one job
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BaseStats {
    pub max_hp: f64,
    pub max_mana: f64,
    pub base_speed: f64,
}

/// Level-1 base stats per job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConstants {
    #[serde(default = "default_warrior_stats")]
    pub warrior: BaseStats,
    #[serde(default = "default_mage_stats")]
    pub mage: BaseStats,
    #[serde(default = "default_archer_stats")]
    pub archer: BaseStats,
}

impl JobConstants {
    /// Base stats for the given job
    pub fn for_job(&self, job: Job) -> &BaseStats {
        match job {
            Job::Warrior => &self.warrior,
            Job::Mage => &self.mage,
            Job::Archer => &self.archer,
        }
    }
}

impl Default for JobConstants {
    fn default() -> Self {
        JobConstants {
            warrior: default_warrior_stats(),
            mage: default_mage_stats(),
            archer: default_archer_stats(),
        }
    }
}

fn default_warrior_stats() -> BaseStats {
    BaseStats {
        max_hp: 150.0,
        max_mana: 25.0,
        base_speed: 100.0,
    }
}
fn default_mage_stats() -> BaseStats {
    BaseStats {
        max_hp: 50.0,
        max_mana: 125.0,
        base_speed: 80.0,
    }
}
fn default_archer_stats() -> BaseStats {
    BaseStats {
        max_hp: 100.0,
        max_mana: 75.0,
        base_speed: 150.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert!((constants.growth.hp_per_level - 10.0).abs() < f64::EPSILON);
        assert!((constants.growth.mana_per_level - 5.0).abs() < f64::EPSILON);
        assert!((constants.growth.speed_per_level - 1.5).abs() < f64::EPSILON);
        assert!((constants.jobs.warrior.max_hp - 150.0).abs() < f64::EPSILON);
        assert!((constants.jobs.mage.max_mana - 125.0).abs() < f64::EPSILON);
        assert!((constants.jobs.archer.base_speed - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_override() {
        let toml = r#"
[growth]
hp_per_level = 12.0

[jobs.warrior]
max_hp = 200.0
max_mana = 30.0
base_speed = 90.0
"#;

        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert!((constants.growth.hp_per_level - 12.0).abs() < f64::EPSILON);
        // Untouched fields keep their defaults
        assert!((constants.growth.mana_per_level - 5.0).abs() < f64::EPSILON);
        assert!((constants.jobs.warrior.max_hp - 200.0).abs() < f64::EPSILON);
        assert!((constants.jobs.mage.max_hp - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[growth]\nspeed_per_level = 2.0").unwrap();

        let constants = GameConstants::load_from_path(file.path()).unwrap();
        assert!((constants.growth.speed_per_level - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConstants::load_from_path(Path::new("/nonexistent/constants.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_for_job_selects_matching_stats() {
        let jobs = JobConstants::default();
        assert!((jobs.for_job(Job::Warrior).max_hp - 150.0).abs() < f64::EPSILON);
        assert!((jobs.for_job(Job::Mage).base_speed - 80.0).abs() < f64::EPSILON);
        assert!((jobs.for_job(Job::Archer).max_mana - 75.0).abs() < f64::EPSILON);
    }
}
