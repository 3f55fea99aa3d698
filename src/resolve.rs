use crate::dict::Dictionary;
use crate::overrides::OverrideTable;
use tracing::debug;

/// Fixed value returned when a single-word lookup exhausts every fallback
///
/// Distinct from the empty string (feature disabled) and from any real
/// transcription, so the display layer can apply error styling.
pub const NOT_FOUND: &str = "(Not found)";

/// Separator between per-word transcriptions in a phrase
///
/// Wider than a single space so word boundaries stay visible next to
/// transcriptions that contain internal spaces themselves.
pub const WORD_SEPARATOR: &str = "   ";

/// Outcome of one resolution request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The input text with its original casing, for display and history
    pub input: String,
    /// The transcription, the sentinel, or empty when the feature is off
    pub transcription: String,
    /// False exactly when `transcription` is the not-found sentinel
    pub found: bool,
}

/// Resolve text to a phonetic transcription
///
/// Lookups run against the trimmed, lowercased input; the returned
/// [`Resolution`] keeps the original text untouched. Single words that miss
/// every fallback yield [`NOT_FOUND`]; in a multi-word phrase each missed
/// token instead passes through as its lowercased self, so phrase output
/// degrades token-by-token rather than failing wholesale.
///
/// Pure function of its inputs: no I/O, no side effects, identical results
/// for identical arguments.
#[must_use]
pub fn resolve(
    text: &str,
    dict: &Dictionary,
    overrides: &OverrideTable,
    show_ipa: bool,
) -> Resolution {
    if !show_ipa {
        return Resolution {
            input: text.to_owned(),
            transcription: String::new(),
            found: true,
        };
    }

    let lowered = text.trim().to_lowercase();

    let transcription = if lowered.split_whitespace().nth(1).is_some() {
        // Phrase: resolve each token, pass misses through verbatim
        lowered
            .split_whitespace()
            .map(|token| resolve_word(token, dict, overrides).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(WORD_SEPARATOR)
    } else {
        resolve_word(&lowered, dict, overrides)
            .unwrap_or(NOT_FOUND)
            .to_owned()
    };

    let found = transcription != NOT_FOUND;
    debug!(input = text, found = found, "resolved");

    Resolution {
        input: text.to_owned(),
        transcription,
        found,
    }
}

/// Per-word fallback chain: override exact, dictionary exact, then both
/// again with the cleaned form when cleaning changed the token
fn resolve_word<'a>(
    word: &str,
    dict: &'a Dictionary,
    overrides: &'a OverrideTable,
) -> Option<&'a str> {
    if let Some(ipa) = overrides.get(word) {
        return Some(ipa);
    }
    if let Some(ipa) = dict.get(word) {
        return Some(ipa);
    }

    // Clipboard text often drags punctuation along ("hello.", "3-d").
    // Prefer the exact token first since some headwords are themselves
    // punctuated, then retry with punctuation stripped.
    let cleaned = clean_word(word);
    if !cleaned.is_empty() && cleaned != word {
        if let Some(ipa) = overrides.get(&cleaned) {
            return Some(ipa);
        }
        if let Some(ipa) = dict.get(&cleaned) {
            return Some(ipa);
        }
    }

    None
}

/// Strip everything except lowercase ASCII letters and apostrophes
fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_lowercase() || *c == '\'')
        .collect()
}
