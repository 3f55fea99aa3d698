//! ipa-clip - pronunciation companion for clipboard and command-line text
//!
//! This library exports core modules for testing and potential future reuse.

/// Clipboard polling and last-seen tracking
pub mod clipboard;
/// Configuration management
pub mod config;
/// Pronunciation dictionary loading
pub mod dict;
/// Resolved-input history ledger
pub mod history;
/// Hand-maintained transcription overrides
pub mod overrides;
/// Text-to-IPA resolution engine
pub mod resolve;
/// Speech playback
pub mod speech;
/// Log output setup
pub mod telemetry;
