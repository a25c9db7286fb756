use anyhow::{Result, ensure};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "speedread.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub default_wpm: u32,
    pub min_wpm: u32,
    pub max_wpm: u32,
    pub wpm_step: u32,
    /// Word count above which a load asks for confirmation.
    pub oversize_threshold: usize,
    pub minimap_max_visible: usize,
    pub context_radius: usize,
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("speedread")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: data_dir().join("speedread.db"),
            default_wpm: 300,
            min_wpm: 100,
            max_wpm: 1000,
            wpm_step: 50,
            oversize_threshold: 100_000,
            minimap_max_visible: 5_000,
            context_radius: 50,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("speedread").required(false))
            .add_source(Environment::with_prefix("SPEEDREAD").try_parsing(true))
            .build()?;
        s.try_deserialize()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(CONFIG_FILE)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml = toml::to_string(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.min_wpm > 0, "min_wpm must be positive");
        ensure!(
            self.min_wpm <= self.max_wpm,
            "min_wpm ({}) exceeds max_wpm ({})",
            self.min_wpm,
            self.max_wpm
        );
        ensure!(
            (self.min_wpm..=self.max_wpm).contains(&self.default_wpm),
            "default_wpm ({}) outside {}..={}",
            self.default_wpm,
            self.min_wpm,
            self.max_wpm
        );
        ensure!(self.minimap_max_visible > 0, "minimap_max_visible must be positive");
        Ok(())
    }

    pub fn clamp_wpm(&self, wpm: u32) -> NonZeroU32 {
        // clamp() panics on an inverted range
        NonZeroU32::new(wpm.max(self.min_wpm).min(self.max_wpm)).unwrap_or(NonZeroU32::MIN)
    }

    pub fn initial_wpm(&self) -> NonZeroU32 {
        self.clamp_wpm(self.default_wpm)
    }
}
