//! Runtime settings read from the environment, and log file setup
//!
//! | Variable           | Meaning                                   |
//! |--------------------|-------------------------------------------|
//! | `PROBE_DIFFICULTY` | preselected difficulty (easy/medium/hard) |
//! | `PROBE_DICTIONARY` | path to a custom word list                |
//! | `PROBE_SEED`       | seed for every random generator           |
//! | `PROBE_LOG`        | log level (off, error ... trace)          |

use crate::game::dictionary::{Dictionary, DictionaryError};
use crate::game::Difficulty;
use directories::ProjectDirs;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_DIFFICULTY: &str = "PROBE_DIFFICULTY";
pub const ENV_DICTIONARY: &str = "PROBE_DICTIONARY";
pub const ENV_SEED: &str = "PROBE_SEED";
pub const ENV_LOG: &str = "PROBE_LOG";

const LOG_FILE_NAME: &str = "probe.log";

#[derive(Debug)]
pub enum ConfigError {
    /// An environment variable held something unusable
    InvalidValue { var: &'static str, value: String },
    /// Could not determine data directory
    NoDataDirectory,
    /// Failed to create the data directory or log file
    Io(std::io::Error),
    /// A global logger was already installed
    Logger(log::SetLoggerError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "invalid value {:?} for {}", value, var)
            }
            ConfigError::NoDataDirectory => write!(f, "could not determine data directory"),
            ConfigError::Io(e) => write!(f, "log file error: {}", e),
            ConfigError::Logger(e) => write!(f, "logger setup failed: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<log::SetLoggerError> for ConfigError {
    fn from(e: log::SetLoggerError) -> Self {
        ConfigError::Logger(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Difficulty highlighted on the title screen
    pub difficulty: Difficulty,
    /// Custom word list; the bundled list is used when unset
    pub dictionary_path: Option<PathBuf>,
    /// Fixed seed for reproducible sessions
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            dictionary_path: None,
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable source. Unset or blank variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(value) = get(ENV_DIFFICULTY) {
            settings.difficulty = Difficulty::parse(&value).ok_or(ConfigError::InvalidValue {
                var: ENV_DIFFICULTY,
                value,
            })?;
        }
        if let Some(value) = get(ENV_DICTIONARY) {
            settings.dictionary_path = Some(PathBuf::from(value.trim()));
        }
        if let Some(value) = get(ENV_SEED) {
            settings.seed = Some(value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_SEED,
                value: value.clone(),
            })?);
        }
        if let Some(value) = get(ENV_LOG) {
            settings.log_level =
                LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
                    var: ENV_LOG,
                    value: value.clone(),
                })?;
        }
        Ok(settings)
    }

    /// Custom word list if configured, otherwise the bundled one.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.dictionary_path {
            Some(path) => Dictionary::load(path),
            None => Dictionary::bundled(),
        }
    }

    /// A generator seeded from `seed`, or from the OS when unset.
    /// `offset` separates streams that share one seed.
    pub fn rng(&self, offset: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
            None => StdRng::from_os_rng(),
        }
    }
}

/// OS-standard data directory:
/// - Linux: `$XDG_DATA_HOME/probe/` or `~/.local/share/probe/`
/// - macOS: `~/Library/Application Support/probe/`
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", "probe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDirectory)
}

/// Route log output to a file in the data directory; the terminal belongs
/// to the UI. Returns the log file path.
pub fn init_logging(level: LevelFilter) -> Result<PathBuf, ConfigError> {
    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE_NAME);

    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(level, config, File::create(&path)?)?;
    Ok(path)
}
