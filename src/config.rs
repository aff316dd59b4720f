use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    #[serde(default = "default_mock_rows")]
    pub mock_rows: usize,
    #[serde(default = "default_mock_seed")]
    pub mock_seed: u64,
    /// Lookup table of the `translate*` formatters
    #[serde(default)]
    pub translations: IndexMap<String, String>,
}

fn default_mock_rows() -> usize {
    500
}

fn default_mock_seed() -> u64 {
    42
}

impl Config {
    /// Load `path`, or the platform config file. The latter is created from
    /// the embedded default on first run.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(&path),
            None => {
                let config_path = get_config_path()?;
                if !config_path.is_file() {
                    fs::write(&config_path, DEFAULT_CONFIG).with_context(|| {
                        format!("Fail to write file `{}`", config_path.display())
                    })?;
                    return Self::default_config();
                }
                Self::from_file(&config_path)
            }
        }
    }

    pub fn default_config() -> Result<Self> {
        serde_yaml_ng::from_str(DEFAULT_CONFIG).context("Fail to deserialize default config")
    }

    fn from_file(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .with_context(|| format!("Fail to open file `{}`", path.display()))?;
        serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", path.display()))
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_project_dir()?.config_dir().to_owned();
    if !dir.is_dir() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }

    Ok(dir.join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or_else(|| anyhow!("Fail to get project directory"))
}
