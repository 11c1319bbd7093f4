use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use whist_core::model::suit::Suit;

const DEFAULT_TRICKS: usize = 100;
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root simulation configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    pub run_id: String,
    #[serde(default = "default_tricks")]
    pub tricks: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub trumps: TrumpMode,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            run_id: "adhoc".to_string(),
            tricks: default_tricks(),
            seed: None,
            trumps: TrumpMode::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SimulationConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        if self.tricks == 0 {
            return Err(ValidationError::InvalidField {
                field: "tricks".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.logging.normalize();
        Ok(())
    }
}

fn default_tricks() -> usize {
    DEFAULT_TRICKS
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if let Some(bad) = run_id.chars().find(|c| !RUN_ID_ALLOWED.contains(*c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: format!("contains disallowed character '{bad}'"),
        });
    }
    Ok(())
}

/// How the trump suit is assigned across simulated tricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum TrumpMode {
    /// No trump suit for any trick.
    None,
    /// Cycle through the four suits, one per trick.
    Rotate,
    /// The same trump suit for every trick.
    Fixed(Suit),
}

impl Default for TrumpMode {
    fn default() -> Self {
        TrumpMode::Rotate
    }
}

impl TrumpMode {
    pub fn for_trick(self, index: usize) -> Option<Suit> {
        match self {
            TrumpMode::None => None,
            TrumpMode::Rotate => Suit::from_index(index % 4),
            TrumpMode::Fixed(suit) => Some(suit),
        }
    }
}

impl FromStr for TrumpMode {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TrumpMode::None),
            "rotate" => Ok(TrumpMode::Rotate),
            "clubs" => Ok(TrumpMode::Fixed(Suit::Clubs)),
            "diamonds" => Ok(TrumpMode::Fixed(Suit::Diamonds)),
            "spades" => Ok(TrumpMode::Fixed(Suit::Spades)),
            "hearts" => Ok(TrumpMode::Fixed(Suit::Hearts)),
            other => Err(ValidationError::InvalidField {
                field: "trumps".to_string(),
                message: format!("unknown trump mode '{other}'"),
            }),
        }
    }
}

impl TryFrom<String> for TrumpMode {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_telemetry_dir")]
    pub telemetry_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            telemetry_dir: default_telemetry_dir(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "error" => Some(Level::ERROR),
            "warn" => Some(Level::WARN),
            "info" => Some(Level::INFO),
            "debug" => Some(Level::DEBUG),
            "trace" => Some(Level::TRACE),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_telemetry_dir() -> PathBuf {
    PathBuf::from("bench/out")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
