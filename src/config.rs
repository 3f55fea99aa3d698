use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Application configuration, read from `~/.ipa-clip.toml`
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Speech playback settings
    pub speech: SpeechConfig,
    /// Transcription display settings
    pub display: DisplayConfig,
    /// History ledger settings
    pub history: HistoryConfig,
    /// Clipboard monitoring settings
    pub clipboard: ClipboardConfig,
    /// Pronunciation dictionary location
    pub dictionary: DictionaryConfig,
    /// Log output settings
    pub telemetry: TelemetryConfig,
}

/// Speech playback settings
#[derive(Debug, Deserialize, Clone)]
pub struct SpeechConfig {
    /// Master switch for spoken output
    pub enabled: bool,
    /// Speak clipboard-sourced text without a prompt
    pub auto_speak: bool,
    /// Playback rate multiplier (1.0 = normal)
    pub rate: f32,
    /// Playback volume, 0.0 to 1.0
    pub volume: f32,
    /// System voice name; empty selects the platform default
    pub voice: String,
}

/// Transcription display settings
#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Whether to produce IPA transcriptions at all
    pub show_ipa: bool,
}

/// History ledger settings
#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Cap on retained history entries
    pub max_entries: usize,
}

/// Clipboard monitoring settings
#[derive(Debug, Deserialize, Clone)]
pub struct ClipboardConfig {
    /// Whether to watch the clipboard for new text
    pub enabled: bool,
    /// Poll cadence in milliseconds
    pub poll_interval_ms: u64,
}

/// Pronunciation dictionary location
#[derive(Debug, Deserialize, Clone)]
pub struct DictionaryConfig {
    /// Path to the IPA dictionary file (`~` expands to the home directory)
    pub path: String,
}

/// Log output settings
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    /// Log to a file instead of stdout
    pub enabled: bool,
    /// Log file path when enabled
    pub log_path: String,
}

impl Config {
    /// Load config from `~/.ipa-clip.toml`, creating a default file first
    /// if none exists
    ///
    /// # Errors
    /// Returns an error when the file cannot be created, read, or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default(&config_path).context("failed to create default config")?;
        }

        let contents = fs::read_to_string(&config_path).context("failed to read config file")?;

        let config: Self = toml::from_str(&contents).context("failed to parse config TOML")?;

        Ok(config)
    }

    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".ipa-clip.toml"))
    }

    fn create_default(path: &PathBuf) -> Result<()> {
        let default_config = r#"[speech]
enabled = true
auto_speak = true
rate = 1.0
volume = 1.0
voice = ""

[display]
show_ipa = true

[history]
max_entries = 50

[clipboard]
enabled = true
poll_interval_ms = 1000

[dictionary]
path = "~/.ipa-clip/cmudict-0.7b-ipa.txt"

[telemetry]
enabled = false
log_path = "~/.ipa-clip/ipa-clip.log"
"#;
        fs::write(path, default_config).context("failed to write default config")?;
        Ok(())
    }

    /// Expand `~` in paths to the home directory
    ///
    /// # Errors
    /// Returns an error when `HOME` is unset.
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        if let Some(stripped) = path.strip_prefix("~/") {
            let home = std::env::var("HOME").context("HOME environment variable not set")?;
            Ok(PathBuf::from(home).join(stripped))
        } else {
            Ok(PathBuf::from(path))
        }
    }
}
