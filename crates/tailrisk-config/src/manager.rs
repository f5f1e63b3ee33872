//! Scenario manager.
//!
//! In-memory registry of named scenarios, seeded with the read-only presets.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::info;

use crate::bounds::InputBounds;
use crate::error::{errors_to_result, ConfigError, ConfigResult, Validate};
use crate::scenario::{Preset, ScenarioConfig};

/// Central scenario registry.
///
/// Scenarios registered here must satisfy both the estimator domain and the
/// manager's [`InputBounds`].
///
/// # Example
///
/// ```rust
/// use tailrisk_config::{ScenarioConfig, ScenarioManager};
///
/// let manager = ScenarioManager::new();
/// assert_eq!(manager.get("lab4").unwrap().window_days, 50);
///
/// // Presets cannot be replaced
/// let attempt = ScenarioConfig::new("lab4").with_window_days(60);
/// assert!(manager.register(attempt).is_err());
/// ```
pub struct ScenarioManager {
    bounds: InputBounds,
    scenarios: RwLock<HashMap<String, ScenarioConfig>>,
}

impl Default for ScenarioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioManager {
    /// Creates a manager with the dashboard bounds and all presets.
    pub fn new() -> Self {
        Self::with_bounds(InputBounds::dashboard())
    }

    /// Creates a manager with custom bounds and all presets.
    pub fn with_bounds(bounds: InputBounds) -> Self {
        let scenarios = Preset::ALL
            .into_iter()
            .map(|p| (p.name().to_string(), p.config()))
            .collect();
        Self {
            bounds,
            scenarios: RwLock::new(scenarios),
        }
    }

    /// The bounds applied on registration.
    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    /// Registers a scenario, replacing any non-read-only scenario of the same name.
    pub fn register(&self, config: ScenarioConfig) -> ConfigResult<()> {
        config.validate_or_error()?;
        errors_to_result(self.bounds.violations(&config))?;

        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        if let Some(existing) = scenarios.get(&config.name) {
            if existing.read_only {
                return Err(ConfigError::ReadOnly {
                    key: config.name.clone(),
                });
            }
        }

        info!(name = %config.name, "registered scenario");
        scenarios.insert(config.name.clone(), config);
        Ok(())
    }

    /// Loads a scenario file and registers it. Returns the scenario name.
    pub fn register_file(&self, path: impl AsRef<Path>) -> ConfigResult<String> {
        let config = ScenarioConfig::from_file(path)?;
        let name = config.name.clone();
        self.register(config)?;
        Ok(name)
    }

    /// Gets a scenario by name. Preset names are case-insensitive.
    pub fn get(&self, name: &str) -> ConfigResult<ScenarioConfig> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        if let Some(config) = scenarios.get(name) {
            return Ok(config.clone());
        }
        let preset: Preset = name.parse()?;
        scenarios
            .get(preset.name())
            .cloned()
            .ok_or_else(|| ConfigError::NotFound {
                key: name.to_string(),
            })
    }

    /// Lists all scenario names, sorted.
    pub fn list(&self) -> ConfigResult<Vec<String>> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        let mut names: Vec<String> = scenarios.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Removes a user scenario.
    pub fn remove(&self, name: &str) -> ConfigResult<bool> {
        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|e| ConfigError::Lock(e.to_string()))?;

        if let Some(config) = scenarios.get(name) {
            if config.read_only {
                return Err(ConfigError::ReadOnly {
                    key: name.to_string(),
                });
            }
        }

        Ok(scenarios.remove(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_presets_loaded() {
        let manager = ScenarioManager::new();
        assert_eq!(
            manager.list().unwrap(),
            ["default", "lab1", "lab2", "lab3", "lab4", "lab5"]
        );
        assert_eq!(manager.get("Lab3").unwrap().confidence_level, 0.99);
        assert_eq!(manager.get("reset").unwrap(), Preset::Default.config());
    }

    #[test]
    fn test_register_and_replace() {
        let manager = ScenarioManager::new();
        manager
            .register(ScenarioConfig::new("mine").with_volatility(0.03))
            .unwrap();
        manager
            .register(ScenarioConfig::new("mine").with_volatility(0.04))
            .unwrap();
        assert_eq!(manager.get("mine").unwrap().volatility, 0.04);

        assert!(manager.remove("mine").unwrap());
        assert!(!manager.remove("mine").unwrap());
        assert!(matches!(
            manager.get("mine"),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_read_only_presets() {
        let manager = ScenarioManager::new();
        let err = manager
            .register(Preset::Lab1.config().renamed("lab1"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnly { .. }));
        assert!(manager.remove("default").is_err());
    }

    #[test]
    fn test_register_enforces_bounds() {
        let manager = ScenarioManager::new();
        let wide = ScenarioConfig::new("wide").with_window_days(5_000);
        assert!(matches!(
            manager.register(wide.clone()),
            Err(ConfigError::Validation { .. })
        ));

        let relaxed = ScenarioManager::with_bounds(InputBounds {
            max_window_days: 100_000,
            ..InputBounds::dashboard()
        });
        assert!(relaxed.register(wide).is_ok());
    }

    #[test]
    fn test_register_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"from-file\"\nwindow_days = 750").unwrap();

        let manager = ScenarioManager::new();
        let name = manager.register_file(file.path()).unwrap();
        assert_eq!(name, "from-file");
        assert_eq!(manager.get("from-file").unwrap().window_days, 750);
    }

    #[test]
    fn test_file_cannot_lock_scenario() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"desk\"\nread_only = true").unwrap();

        let manager = ScenarioManager::new();
        manager.register_file(file.path()).unwrap();
        manager
            .register(ScenarioConfig::new("desk").with_volatility(0.03))
            .unwrap();
        assert!(manager.remove("desk").unwrap());
    }
}
