//! On-disk application configuration (`~/.config/flipstack/config.toml`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::axis::Axis;
use crate::geometry::{
    FlipEasing, GeometryConfig, Gravity, DEFAULT_CURRENT_PAGE_SCALE, DEFAULT_OVERLAP_FACTOR,
    DEFAULT_TOP_STACKED_SCALE,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub stack: StackConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Stack geometry as written in the config file
///
/// Unvalidated; go through [`StackConfig::to_geometry`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Pages stacked under the current page
    #[serde(default = "default_stacked_count")]
    pub stacked_count: u32,
    /// Scale of the current page, from (0, 1]
    #[serde(default = "default_current_page_scale")]
    pub current_page_scale: f64,
    /// Scale of the top stacked page, from (0, current_page_scale]
    #[serde(default = "default_top_stacked_scale")]
    pub top_stacked_scale: f64,
    /// Share of the free space used for overlapping, from [0, 1]
    #[serde(default = "default_overlap_factor")]
    pub overlap_factor: f64,
    #[serde(default)]
    pub gravity: Gravity,
    #[serde(default)]
    pub orientation: Axis,
    #[serde(default)]
    pub flip_easing: FlipEasing,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            stacked_count: default_stacked_count(),
            current_page_scale: default_current_page_scale(),
            top_stacked_scale: default_top_stacked_scale(),
            overlap_factor: default_overlap_factor(),
            gravity: Gravity::default(),
            orientation: Axis::default(),
            flip_easing: FlipEasing::default(),
        }
    }
}

impl StackConfig {
    /// Validate into an immutable geometry
    pub fn to_geometry(&self) -> crate::Result<GeometryConfig> {
        GeometryConfig::new(
            self.stacked_count,
            self.current_page_scale,
            self.top_stacked_scale,
            self.overlap_factor,
            self.gravity,
            self.orientation,
            self.flip_easing,
        )
    }
}

impl From<&GeometryConfig> for StackConfig {
    fn from(geometry: &GeometryConfig) -> Self {
        Self {
            stacked_count: geometry.stacked_count(),
            current_page_scale: geometry.current_page_scale(),
            top_stacked_scale: geometry.top_stacked_scale(),
            overlap_factor: geometry.overlap_factor(),
            gravity: geometry.gravity(),
            orientation: geometry.axis(),
            flip_easing: geometry.easing(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Number of demo pages
    #[serde(default = "default_page_count")]
    pub page_count: usize,
    /// Page settle animation
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            page_count: default_page_count(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Easing applied while the pager settles onto a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the target
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animate page changes
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Duration of one page change in milliseconds
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    /// Frame rate while animating
    #[serde(default = "default_animation_fps")]
    pub fps: u32,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_animation_duration(),
            fps: default_animation_fps(),
            easing: EasingType::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_stacked_count() -> u32 {
    3
}

fn default_current_page_scale() -> f64 {
    DEFAULT_CURRENT_PAGE_SCALE
}

fn default_top_stacked_scale() -> f64 {
    DEFAULT_TOP_STACKED_SCALE
}

fn default_overlap_factor() -> f64 {
    DEFAULT_OVERLAP_FACTOR
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_page_count() -> usize {
    12
}

fn default_animation_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path` or return defaults when it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/flipstack/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("flipstack")
            .join("config.toml")
    }
}
