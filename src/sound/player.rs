//! Alert sink implementation using rodio.
//!
//! This module provides the `RodioAlertSink` which plays the phase alert
//! through the default audio output device using rodio v0.20.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Mutex;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::{SoundSource, BEEP_DURATION, BEEP_FREQUENCY_HZ, BEEP_VOLUME};
use super::AlertSink;

/// An alert sink that plays through rodio.
///
/// Each `play` starts a fresh `Sink`, replacing the previous one, so a new
/// alert always starts from the beginning. `stop` halts and drops the
/// current sink, which rewinds the alert for the next rollover.
pub struct RodioAlertSink {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// What to play on rollover.
    source: SoundSource,
    /// The sink of the alert currently (or most recently) playing.
    current: Mutex<Option<Sink>>,
}

impl RodioAlertSink {
    /// Creates a new alert sink on the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(source: SoundSource) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            source,
            current: Mutex::new(None),
        })
    }

    /// Opens and decodes a sound file.
    fn decode_file(path: &Path) -> Result<Decoder<BufReader<File>>, SoundError> {
        let file = File::open(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        Decoder::new(BufReader::new(file)).map_err(|e| SoundError::DecodeError(e.to_string()))
    }

    /// Queues the configured source on a new sink.
    fn start_sink(&self) -> Result<Sink, SoundError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        match &self.source {
            SoundSource::File { path } => match Self::decode_file(path) {
                Ok(decoder) => sink.append(decoder),
                Err(e) if e.is_file_error() => {
                    warn!(
                        "Failed to load alert '{}': {} ({})",
                        self.source.name(),
                        e,
                        e.suggestion()
                    );
                    sink.append(beep());
                }
                Err(e) => return Err(e),
            },
            SoundSource::Beep => sink.append(beep()),
        }

        Ok(sink)
    }
}

impl AlertSink for RodioAlertSink {
    fn play(&self) -> Result<(), SoundError> {
        let sink = self.start_sink()?;

        let mut current = self
            .current
            .lock()
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;
        // Dropping the previous non-detached sink stops it.
        *current = Some(sink);

        debug!("Alert playback started: {}", self.source.name());
        Ok(())
    }

    fn stop(&self) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(sink) = current.take() {
            sink.stop();
            debug!("Alert playback stopped");
        }
    }
}

impl std::fmt::Debug for RodioAlertSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioAlertSink")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The built-in alert tone.
fn beep() -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(BEEP_FREQUENCY_HZ)
        .take_duration(BEEP_DURATION)
        .amplify(BEEP_VOLUME)
}

/// Creates a rodio alert sink, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player(source: SoundSource) -> Option<RodioAlertSink> {
    match RodioAlertSink::new(source) {
        Ok(player) => Some(player),
        Err(e) => {
            warn!("Audio not available, alert disabled: {} ({})", e, e.suggestion());
            None
        }
    }
}
