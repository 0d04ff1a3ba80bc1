//! Alert sound system for the session clock.
//!
//! The engine only knows the `AlertSink` capability: `play` on every phase
//! rollover and `stop` on reset. Backends:
//!
//! - `RodioAlertSink`: plays a synthesised beep or an audio file
//! - `SilentAlertSink`: used with `--no-sound` or when no device is present
//! - `MockAlertSink`: records calls for tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use session_clock::sound::{AlertSink, RodioAlertSink, SoundSource};
//!
//! // Create a sink (may fail if no audio device)
//! let sink = RodioAlertSink::new(SoundSource::Beep).expect("audio init");
//!
//! sink.play().expect("playback failed");
//! sink.stop();
//! ```

mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub use error::SoundError;
pub use player::{try_create_player, RodioAlertSink};
pub use source::{SoundSource, BEEP_DURATION, BEEP_FREQUENCY_HZ, BEEP_VOLUME};

/// Capability invoked by the engine on phase transitions.
///
/// Playback is fire-and-forget: `play` must not block until the sound ends,
/// and its errors never affect the timer state.
pub trait AlertSink {
    /// Starts the alert from the beginning.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play(&self) -> Result<(), SoundError>;

    /// Stops any in-flight alert and rewinds it.
    fn stop(&self);
}

impl<T: AlertSink + ?Sized> AlertSink for Arc<T> {
    fn play(&self) -> Result<(), SoundError> {
        (**self).play()
    }

    fn stop(&self) {
        (**self).stop()
    }
}

/// Alert sink that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlertSink;

impl AlertSink for SilentAlertSink {
    fn play(&self) -> Result<(), SoundError> {
        Ok(())
    }

    fn stop(&self) {}
}

/// Builds the alert sink for the clock.
///
/// Returns a silent sink when sound is disabled or no audio device can be
/// opened.
#[must_use]
pub fn create_alert_sink(source: SoundSource, no_sound: bool) -> Box<dyn AlertSink> {
    if no_sound {
        tracing::debug!("Sound disabled by flag");
        return Box::new(SilentAlertSink);
    }

    match try_create_player(source) {
        Some(player) => Box::new(player),
        None => Box::new(SilentAlertSink),
    }
}

/// Mock alert sink for testing.
#[derive(Debug, Default)]
pub struct MockAlertSink {
    play_calls: AtomicUsize,
    stop_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockAlertSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of `play` calls, including failed ones.
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }
}

impl AlertSink for MockAlertSink {
    fn play(&self) -> Result<(), SoundError> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        Ok(())
    }

    fn stop(&self) {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
    }
}
