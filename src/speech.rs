use crate::config::SpeechConfig;
use std::process::{Child, Command};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Baseline speaking rate in words per minute, scaled by the config rate
const BASE_WPM: f32 = 175.0;

/// Errors that can occur starting or stopping playback
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The platform TTS command could not be started
    #[error("failed to start speech command `{command}`: {source}")]
    Spawn {
        /// The command that was attempted
        command: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Playback state was left unusable by a panicked thread
    #[error("speech playback state poisoned")]
    Poisoned,
}

/// Trait for speech playback (enables testing via mocking)
///
/// Production code uses the concrete [`SystemSpeaker`]; tests exercise the
/// shell against `MockSpeaker` (via `mockall`).
#[cfg_attr(test, mockall::automock)]
pub trait Speaker: Send + Sync {
    /// Speak the given text, cancelling any playback still in flight
    ///
    /// # Errors
    /// Returns an error if the platform TTS command cannot be started.
    fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Stop any in-flight playback
    fn stop(&self);
}

/// Speech playback via the platform TTS command
///
/// Spawns `say` on macOS and `espeak` elsewhere, without waiting for
/// completion, so the resolve/record loop never blocks on audio.
pub struct SystemSpeaker {
    config: SpeechConfig,
    playing: Mutex<Option<Child>>,
}

impl SystemSpeaker {
    /// Create a speaker honoring the given rate/volume/voice settings
    #[must_use]
    pub const fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            playing: Mutex::new(None),
        }
    }

    #[cfg(target_os = "macos")]
    fn command_name() -> &'static str {
        "say"
    }

    #[cfg(not(target_os = "macos"))]
    fn command_name() -> &'static str {
        "espeak"
    }

    /// Arguments for the platform TTS command (pure, testable)
    fn playback_args(config: &SpeechConfig, text: &str) -> Vec<String> {
        let wpm = (BASE_WPM * config.rate).round();
        let mut args = Vec::new();

        if cfg!(target_os = "macos") {
            args.push("-r".to_owned());
            args.push(format!("{wpm}"));
        } else {
            args.push("-s".to_owned());
            args.push(format!("{wpm}"));
            // espeak amplitude runs 0..200 with 100 as the default
            args.push("-a".to_owned());
            args.push(format!("{}", (config.volume * 100.0).round()));
        }

        if !config.voice.is_empty() {
            args.push("-v".to_owned());
            args.push(config.voice.clone());
        }

        args.push(text.to_owned());
        args
    }
}

impl Speaker for SystemSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if !self.config.enabled {
            debug!("speech disabled, skipping playback");
            return Ok(());
        }

        let command = Self::command_name();
        let args = Self::playback_args(&self.config, text);

        let mut guard = self.playing.lock().map_err(|_| SpeechError::Poisoned)?;

        // Cancel whatever is still being spoken before starting over
        if let Some(mut previous) = guard.take() {
            let _ = previous.kill();
            let _ = previous.wait();
        }

        let child = Command::new(command)
            .args(&args)
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                command: command.to_owned(),
                source,
            })?;

        debug!(command = command, "speech playback started");
        *guard = Some(child);
        Ok(())
    }

    fn stop(&self) {
        let Ok(mut guard) = self.playing.lock() else {
            warn!("speech playback state poisoned, cannot stop");
            return;
        };

        if let Some(mut child) = guard.take() {
            let _ = child.kill();
            let _ = child.wait();
            debug!("speech playback stopped");
        }
    }
}
