//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::projects::ViewType;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "PROJECTSUITE_CONFIG_DIR";

/// Project Suite configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub export: ExportConfig,
    pub view: ViewConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Export document used as the working set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Start from the demo data when no data file exists
    pub seed_demo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub default: ViewType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub recent_notifications: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: None,
            seed_demo: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default: ViewType::Projects,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_notifications: 3,
        }
    }
}

/// Keys accepted by `get`, `set` and `list`
pub const CONFIG_KEYS: [&str; 5] = [
    "data.file",
    "data.seed_demo",
    "export.directory",
    "view.default",
    "dashboard.recent_notifications",
];

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("projectsuite")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dashboard.recent_notifications == 0 {
            return Err(anyhow!("dashboard.recent_notifications must be at least 1"));
        }
        if self.export.directory.as_os_str().is_empty() {
            return Err(anyhow!("export.directory cannot be empty"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "data.file" => Ok(match &self.data.file {
                Some(path) => path.display().to_string(),
                None => "(not set - built-in data set)".to_string(),
            }),
            "data.seed_demo" => Ok(self.data.seed_demo.to_string()),
            "export.directory" => Ok(self.export.directory.display().to_string()),
            "view.default" => Ok(self.view.default.to_string()),
            "dashboard.recent_notifications" => Ok(self.dashboard.recent_notifications.to_string()),
            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `projectsuite config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "data.file" => {
                let value = value.trim();
                self.data.file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "data.seed_demo" => {
                self.data.seed_demo = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid seed_demo value: {} (use true or false)", value))?;
            }
            "export.directory" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("export.directory cannot be empty"));
                }
                self.export.directory = PathBuf::from(value.trim());
            }
            "view.default" => {
                self.view.default = ViewType::parse(value).ok_or_else(|| {
                    anyhow!(
                        "Invalid view: {}. Valid options: dashboard, projects, timeline, kanban, archive",
                        value
                    )
                })?;
            }
            "dashboard.recent_notifications" => {
                let limit: usize = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid recent_notifications value: {}", value))?;
                if limit == 0 {
                    return Err(anyhow!("recent_notifications must be at least 1"));
                }
                self.dashboard.recent_notifications = limit;
            }
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `projectsuite config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        CONFIG_KEYS
            .into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        Self::reset_at(&Self::config_path()?)
    }

    /// Remove the config file at `path` if present
    pub fn reset_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}
