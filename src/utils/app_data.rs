use super::encoding::Encoding;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sacount";
const CONFIG_FILE: &str = "config.json";
const INDEX_DIR: &str = "indexes";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where named indexes live. If None, uses `<app data>/indexes`
    #[serde(default)]
    pub index_dir: Option<PathBuf>,

    /// Character layout assumed when filtering indexable positions
    #[serde(default)]
    pub encoding: Encoding,

    /// Refine first-byte buckets on the rayon pool while building
    #[serde(default = "default_parallel_sort")]
    pub parallel_sort: bool,

    /// Minimum number of positions before the parallel path is taken
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_sort() -> bool {
    false
}

fn default_parallel_threshold() -> usize {
    100_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_dir: None,
            encoding: Encoding::default(),
            parallel_sort: default_parallel_sort(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Resolve the directory holding named indexes
    ///
    /// An explicit override (e.g. `--dir`) wins over the configured value.
    pub fn resolve_index_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.index_dir {
            return Ok(dir.clone());
        }
        default_index_dir()
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

/// Default directory for named indexes
pub fn default_index_dir() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(INDEX_DIR))
}

/// List the names of all indexes stored in a directory
///
/// A name is listed when its `.idx` file exists; the other two files are
/// checked when the index is opened.
pub fn list_index_names(index_dir: &Path) -> Result<Vec<String>> {
    if !index_dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(index_dir)
        .with_context(|| format!("Failed to read {}", index_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("idx") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}
