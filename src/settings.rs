//! Preference store: a small YAML key-value file, kept separate from the
//! relational database. Currently holds a single key, the daily goal.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DAILY_GOAL_ML: i64 = 2000;

fn default_daily_goal() -> i64 {
    DEFAULT_DAILY_GOAL_ML
}

#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default = "default_daily_goal")]
    daily_goal_ml: i64,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            daily_goal_ml: default_daily_goal(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> AppResult<SettingsFile> {
        if !self.path.exists() {
            return Ok(SettingsFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Settings(format!("{}: {}", self.path.display(), e)))
    }

    fn write(&self, settings: &SettingsFile) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(settings)
            .map_err(|e| AppError::Settings(e.to_string()))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Current daily goal, falling back to the default when the key (or the
    /// whole file) is absent.
    pub fn daily_goal_ml(&self) -> AppResult<i64> {
        Ok(self.read()?.daily_goal_ml)
    }

    pub fn set_daily_goal(&self, goal_ml: i64) -> AppResult<()> {
        if goal_ml < 0 {
            return Err(AppError::InvalidGoal(goal_ml));
        }
        let mut settings = self.read()?;
        settings.daily_goal_ml = goal_ml;
        self.write(&settings)
    }

    /// Reset is defined as write-default, not delete-key.
    pub fn reset_daily_goal(&self) -> AppResult<()> {
        self.set_daily_goal(DEFAULT_DAILY_GOAL_ML)
    }
}
