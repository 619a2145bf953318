//! Configuration for the skyfall backdrop.
//!
//! Settings live in a TOML file in the platform config directory
//! (`~/.config/skyfall/config.toml` on Linux). Every field is optional and a
//! missing file means "all defaults". The file is only ever read; speed and
//! background changes made at runtime are not written back.

mod error;

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::Deserialize;
use skyfall_core::{BackgroundKind, CellMetrics, Speed};

pub use error::ConfigError;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// The link rendered below the title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            label: "Go to ChatGPT".to_string(),
            url: "https://chat.openai.com/".to_string(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Background mounted at startup.
    pub background: BackgroundKind,
    /// Initial speed multiplier, 0.2 to 4.0.
    pub speed: f32,
    /// Frames per second delivered to the mounted background.
    pub fps: u32,
    /// Fixed random seed; `None` draws entropy from the OS.
    pub seed: Option<u64>,
    /// Stop delivering frames while the terminal reports focus lost.
    pub pause_when_unfocused: bool,
    /// Heading shown in the middle of the screen.
    pub title: String,
    pub link: LinkConfig,
    /// Pixel size of one terminal cell.
    pub cell: CellMetrics,
    /// Where to write the log; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: BackgroundKind::default(),
            speed: Speed::default().value(),
            fps: 60,
            seed: None,
            pause_when_unfocused: true,
            title: "Hello, Abhi’s first AI-coded site!".to_string(),
            link: LinkConfig::default(),
            cell: CellMetrics::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Default location of the configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "skyfall").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when there is
    /// no config directory or no file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                log::debug!("loading config from {}", path.display());
                Self::from_toml_str(&contents)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the application cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Speed::in_range(self.speed) {
            return Err(ConfigError::InvalidValue {
                field: "speed",
                reason: format!(
                    "{} is outside {}..={}",
                    self.speed,
                    Speed::MIN.value(),
                    Speed::MAX.value()
                ),
            });
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidValue {
                field: "fps",
                reason: format!("{} is outside 1..={MAX_FPS}", self.fps),
            });
        }
        if self.cell.width == 0 || self.cell.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cell",
                reason: "cell width and height must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Initial speed, snapped to the slider step.
    pub fn initial_speed(&self) -> Speed {
        Speed::new(self.speed)
    }

    /// Time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.background, BackgroundKind::Starfall);
        assert_eq!(config.initial_speed(), Speed::default());
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_toml_str(
            r#"
            background = "matrix"
            speed = 2.5
            fps = 30
            seed = 42
            pause_when_unfocused = false
            title = "Night sky"
            log_file = "/tmp/skyfall.log"

            [link]
            label = "Docs"
            url = "https://example.com/"

            [cell]
            width = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.background, BackgroundKind::Matrix);
        assert_eq!(config.initial_speed().to_string(), "2.5x");
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(42));
        assert!(!config.pause_when_unfocused);
        assert_eq!(config.title, "Night sky");
        assert_eq!(config.link.label, "Docs");
        assert_eq!(config.cell.width, 8);
        assert_eq!(config.cell.height, 18);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/skyfall.log")));
    }

    #[test]
    fn test_speed_out_of_range() {
        let err = Config::from_toml_str("speed = 5.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "speed", .. }));
    }

    #[test]
    fn test_fps_out_of_range() {
        assert!(matches!(
            Config::from_toml_str("fps = 0").unwrap_err(),
            ConfigError::InvalidValue { field: "fps", .. }
        ));
        assert!(matches!(
            Config::from_toml_str("fps = 1000").unwrap_err(),
            ConfigError::InvalidValue { field: "fps", .. }
        ));
    }

    #[test]
    fn test_zero_cell_metrics_rejected() {
        let err = Config::from_toml_str("[cell]\nheight = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "cell", .. }));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let err = Config::from_toml_str("sped = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("skyfall-config-test-does-not-exist.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "skyfall-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "background = \"matrix\"\nfps = 24\n").unwrap();
        let config = Config::load_from(&path);
        let _ = fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.background, BackgroundKind::Matrix);
        assert_eq!(config.fps, 24);
    }

    #[test]
    fn test_frame_interval() {
        let config = Config {
            fps: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }
}
