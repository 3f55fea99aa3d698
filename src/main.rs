use anyhow::Result;
use ipa_clip::clipboard::ClipboardWatcher;
use ipa_clip::config::Config;
use ipa_clip::dict::Dictionary;
use ipa_clip::history::History;
use ipa_clip::overrides::OverrideTable;
use ipa_clip::resolve::{resolve, Resolution};
use ipa_clip::speech::{Speaker, SystemSpeaker};
use ipa_clip::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    telemetry::init(config.telemetry.enabled, &config.telemetry.log_path)?;
    tracing::info!("ipa-clip starting");

    // Load the pronunciation dictionary once; a missing file just means
    // every lookup reports "not found"
    let dict_path = Config::expand_path(&config.dictionary.path)?;
    let dictionary = Dictionary::from_file(&dict_path);
    println!("✓ Dictionary: {} words", dictionary.len());

    let overrides = OverrideTable::builtin();
    let speaker = SystemSpeaker::new(config.speech.clone());

    // One-shot mode: resolve the argument text, speak it, and exit
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let text = args.join(" ");
        let resolution = resolve(&text, &dictionary, &overrides, config.display.show_ipa);
        print_resolution(&resolution);
        if config.speech.enabled {
            speaker.speak(&resolution.input)?;
        }
        return Ok(());
    }

    if !config.clipboard.enabled {
        println!("Clipboard monitoring is disabled; pass text as arguments instead.");
        return Ok(());
    }

    // Watch mode: poll the clipboard until interrupted
    let mut watcher = ClipboardWatcher::new()?;
    let mut history = History::new(config.history.max_entries);
    let poll_interval = tokio::time::Duration::from_millis(config.clipboard.poll_interval_ms);

    tracing::info!(
        interval_ms = config.clipboard.poll_interval_ms,
        "clipboard watch starting"
    );
    println!("\nWatching the clipboard. Copy some text, or press Ctrl+C to exit.\n");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received");
                println!("\nShutting down...");
                break;
            }
            () = tokio::time::sleep(poll_interval) => {
                if let Some(text) = watcher.poll() {
                    let resolution =
                        resolve(&text, &dictionary, &overrides, config.display.show_ipa);
                    print_resolution(&resolution);

                    if config.speech.auto_speak {
                        if let Err(e) = speaker.speak(&resolution.input) {
                            tracing::warn!(error = %e, "speech playback failed");
                        }
                    }

                    history = history.record(&text);
                }
            }
        }
    }

    speaker.stop();
    tracing::info!(history_entries = history.len(), "ipa-clip stopped");

    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    println!("» {}", resolution.input);
    // Empty transcription means the IPA display is switched off
    if !resolution.transcription.is_empty() {
        println!("  {}", resolution.transcription);
    }
}
