use serde::Deserialize;
use std::path::{Path, PathBuf};
use swatch_engine::SamplingConfig;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Sampling defaults applied when a request does not override them
    #[serde(default)]
    pub sampling: SamplingSettings,

    /// Reference library file replacing the built-in palette
    #[serde(default)]
    pub library: Option<PathBuf>,
}

/// Default sampling parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SamplingSettings {
    /// Number of points when a request does not specify one
    pub default_count: usize,

    /// Initial ΔE76 acceptance threshold
    pub min_delta_e: f64,

    /// Minimum spacing between points in display pixels
    pub min_pixel_distance: f64,

    /// Candidate draws per point (capped at 100)
    pub attempts_per_point: u32,

    /// Border kept free of points
    pub margin: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        let engine = SamplingConfig::default();
        Self {
            default_count: 9,
            min_delta_e: engine.min_delta_e,
            min_pixel_distance: engine.min_pixel_distance,
            attempts_per_point: engine.attempts_per_point,
            margin: engine.margin,
        }
    }
}

impl SamplingSettings {
    /// Engine configuration built from these settings.
    pub fn to_config(&self) -> SamplingConfig {
        SamplingConfig::new()
            .min_delta_e(self.min_delta_e)
            .min_pixel_distance(self.min_pixel_distance)
            .attempts_per_point(self.attempts_per_point)
            .margin(self.margin)
    }
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, or defaults
    /// when the variable is unset.
    pub fn from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a file, falling back to defaults on error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        default_count = config.sampling.default_count,
                        library = ?config.library,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
