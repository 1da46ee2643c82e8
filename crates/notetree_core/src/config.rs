//! Process configuration for the notes tree.
//!
//! # Responsibility
//! - Resolve the notes root once at startup.
//! - Carry the display limit explicitly instead of as process-wide state.
//!
//! # Invariants
//! - `root` is absolute whenever it comes from the platform default.
//! - Configuration is read-only after construction.

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Maximum number of notes shown in one listing.
pub const DISPLAY_LIMIT: usize = 10;
/// Environment variable overriding the notes root.
pub const NOTE_HOME_ENV: &str = "NOTE_HOME";

#[cfg(windows)]
const PLATFORM_NOTES_ROOT: Option<&str> = Some("m:/My Drive/Notes");
#[cfg(not(windows))]
const PLATFORM_NOTES_ROOT: Option<&str> = None;
const HOME_RELATIVE_NOTES_ROOT: &str = "Drive/Notes";

/// Configuration errors raised while resolving the notes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No override was given and the user home directory is unknown.
    HomeDirUnavailable,
    /// Override value is blank.
    EmptyRootOverride,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeDirUnavailable => write!(
                f,
                "cannot determine home directory; set {NOTE_HOME_ENV} to the notes path"
            ),
            Self::EmptyRootOverride => write!(f, "{NOTE_HOME_ENV} is set but empty"),
        }
    }
}

impl Error for ConfigError {}

/// Notes tree configuration passed to repositories and services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Top-level directory holding every category and note.
    pub root: PathBuf,
    /// Maximum note listing length.
    pub display_limit: usize,
}

impl NotesConfig {
    /// Creates a configuration rooted at `root` with the default display limit.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            display_limit: DISPLAY_LIMIT,
        }
    }

    /// Resolves configuration from `NOTE_HOME` or the platform default root.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = resolve_root(std::env::var_os(NOTE_HOME_ENV), dirs::home_dir())?;
        Ok(Self::new(root))
    }

    /// Returns whether the notes root currently exists.
    pub fn root_exists(&self) -> bool {
        self.root.exists()
    }
}

fn resolve_root(
    override_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(value) = override_value {
        if value.is_empty() {
            return Err(ConfigError::EmptyRootOverride);
        }
        return Ok(PathBuf::from(value));
    }
    if let Some(platform_root) = PLATFORM_NOTES_ROOT {
        return Ok(PathBuf::from(platform_root));
    }
    home.map(|home| home.join(HOME_RELATIVE_NOTES_ROOT))
        .ok_or(ConfigError::HomeDirUnavailable)
}
