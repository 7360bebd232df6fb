//! Configuration file support for scan-qa.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/scan-qa/config.toml` (lowest priority)
//! - Project-local: `.scan-qa.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use scan_qa_core::Preset;
use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Quality threshold settings.
    pub quality: QualityFileConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Quality threshold configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct QualityFileConfig {
    /// Named preset the thresholds start from.
    pub preset: Option<Preset>,
    /// Laplacian-variance blur threshold (> 0).
    pub blur_threshold: Option<f64>,
    /// Minimum acceptable average brightness (0-255).
    pub min_brightness: Option<f64>,
    /// Maximum acceptable average brightness (0-255).
    pub max_brightness: Option<f64>,
    /// Minimum acceptable contrast score (>= 0).
    pub min_contrast: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/scan-qa/config.toml`
    /// 2. Project-local: `.scan-qa.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are reported as
    /// warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.quality.blur_threshold {
            if t <= 0.0 || !t.is_finite() {
                return Err(format!("quality.blur_threshold must be positive, got {t}"));
            }
        }
        if let Some(t) = self.quality.min_brightness {
            if !(0.0..=255.0).contains(&t) {
                return Err(format!("quality.min_brightness must be 0-255, got {t}"));
            }
        }
        if let Some(t) = self.quality.max_brightness {
            if !(0.0..=255.0).contains(&t) {
                return Err(format!("quality.max_brightness must be 0-255, got {t}"));
            }
        }
        if let (Some(min), Some(max)) = (self.quality.min_brightness, self.quality.max_brightness) {
            if min >= max {
                return Err(format!(
                    "quality.min_brightness ({min}) must be below quality.max_brightness ({max})"
                ));
            }
        }
        if let Some(t) = self.quality.min_contrast {
            if t < 0.0 || !t.is_finite() {
                return Err(format!(
                    "quality.min_contrast must be non-negative, got {t}"
                ));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Quality
        self.quality.preset = other.quality.preset.or(self.quality.preset);
        self.quality.blur_threshold = other.quality.blur_threshold.or(self.quality.blur_threshold);
        self.quality.min_brightness = other
            .quality
            .min_brightness
            .or(self.quality.min_brightness);
        self.quality.max_brightness = other
            .quality
            .max_brightness
            .or(self.quality.max_brightness);
        self.quality.min_contrast = other.quality.min_contrast.or(self.quality.min_contrast);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("scan-qa").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.scan-qa.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".scan-qa.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
