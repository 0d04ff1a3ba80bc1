//! Alert sound sources.
//!
//! The clock plays either a synthesised beep (the default, so no asset has to
//! ship with the binary) or a user supplied audio file.

use std::path::PathBuf;
use std::time::Duration;

/// Frequency of the built-in beep in Hz.
pub const BEEP_FREQUENCY_HZ: f32 = 880.0;

/// Length of the built-in beep.
pub const BEEP_DURATION: Duration = Duration::from_millis(1500);

/// Output gain applied to the built-in beep.
pub const BEEP_VOLUME: f32 = 0.25;

/// Represents the source of the alert sound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SoundSource {
    /// The synthesised sine tone.
    #[default]
    Beep,
    /// An audio file on disk.
    File {
        /// The full path to the sound file.
        path: PathBuf,
    },
}

impl SoundSource {
    /// Creates a file sound source.
    ///
    /// The path is not validated here; a missing or undecodable file makes
    /// the player fall back to the beep at play time.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Returns a display name for logging.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Beep => "beep".to_string(),
            Self::File { path } => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

impl From<Option<PathBuf>> for SoundSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Beep, Self::file)
    }
}
