use crate::error::{Result, StorefrontError};
use crate::store::ALL_CATEGORIES;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const PROJECT_DIR: &str = ".storefront";
const DEFAULT_BREAKPOINT: u32 = 768;

pub const CATALOG_FILE_KEY: &str = "catalog_file";
pub const DEFAULT_CATEGORY_KEY: &str = "default_category";
pub const LAYOUT_BREAKPOINT_KEY: &str = "layout_breakpoint";
const KEYS: &[&str] = &[CATALOG_FILE_KEY, DEFAULT_CATEGORY_KEY, LAYOUT_BREAKPOINT_KEY];

/// Configuration for the storefront, stored in .storefront/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// JSON catalog to read products from
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// Category listed when none is given
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Product pages switch to the horizontal layout at or below this width
    #[serde(default = "default_breakpoint")]
    pub layout_breakpoint: u32,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_breakpoint() -> u32 {
    DEFAULT_BREAKPOINT
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            default_category: default_category(),
            layout_breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl StorefrontConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StorefrontError::Io)?;
        let config: StorefrontConfig =
            serde_json::from_str(&content).map_err(StorefrontError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StorefrontError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(StorefrontError::Serialization)?;
        fs::write(config_path, content).map_err(StorefrontError::Io)?;
        Ok(())
    }

    /// Value of `key` as shown to users. An unset catalog file reads as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            CATALOG_FILE_KEY => Some(
                self.catalog_file
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default(),
            ),
            DEFAULT_CATEGORY_KEY => Some(self.default_category.clone()),
            LAYOUT_BREAKPOINT_KEY => Some(self.layout_breakpoint.to_string()),
            _ => None,
        }
    }

    /// Sets `key` from its textual form. An empty catalog file unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            CATALOG_FILE_KEY => {
                self.catalog_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            DEFAULT_CATEGORY_KEY => {
                if value.is_empty() {
                    return Err(format!("{} cannot be empty", key));
                }
                self.default_category = value.to_string();
            }
            LAYOUT_BREAKPOINT_KEY => {
                self.layout_breakpoint = value
                    .parse()
                    .map_err(|_| format!("Invalid {}: {}", key, value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Catalog path with relative entries resolved against `base`.
    pub fn catalog_path(&self, base: &Path) -> Option<PathBuf> {
        self.catalog_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            }
        })
    }
}

/// Where config is read from: `.storefront/` under `cwd` when present, else the user's
/// config directory.
pub fn config_dir(cwd: &Path) -> Option<PathBuf> {
    let project = cwd.join(PROJECT_DIR);
    if project.is_dir() {
        return Some(project);
    }
    ProjectDirs::from("com", "storefront", "storefront").map(|dirs| dirs.config_dir().to_path_buf())
}
