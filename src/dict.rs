use std::collections::HashMap;
use std::path::Path;

/// Comment marker used by CMU-style IPA dictionary files
const COMMENT_PREFIX: &str = ";;;";

/// Immutable-after-load word-to-IPA lookup table
///
/// Built once at startup from a flat-file dictionary (one entry per line,
/// `word<whitespace>transcription`). Keys are lowercased; transcriptions are
/// stored verbatim, including internal whitespace between phonetic symbols.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Parse dictionary contents from a string blob
    ///
    /// Blank lines and lines starting with `;;;` are ignored. A valid entry
    /// is a non-whitespace word token followed by at least one whitespace
    /// character and a non-empty transcription. Malformed lines are skipped;
    /// parsing never fails. Duplicate words keep the last occurrence.
    #[must_use]
    pub fn load(raw: &str) -> Self {
        let mut entries = HashMap::new();

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let Some((word, rest)) = line.split_once(char::is_whitespace) else {
                continue;
            };

            let transcription = rest.trim_start();
            if transcription.is_empty() {
                continue;
            }

            entries.insert(word.to_lowercase(), transcription.to_owned());
        }

        tracing::debug!(words = entries.len(), "dictionary parsed");
        Self { entries }
    }

    /// Load a dictionary from a file path
    ///
    /// A missing or unreadable file degrades to an empty dictionary so the
    /// application keeps running; every lookup then reports "not found".
    #[must_use]
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let dict = Self::load(&raw);
                tracing::info!(
                    path = %path.display(),
                    words = dict.len(),
                    "dictionary loaded"
                );
                dict
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read dictionary, continuing with empty table"
                );
                Self::default()
            }
        }
    }

    /// Look up a transcription by already-lowercased word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Number of loaded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_word_and_transcription() {
        let dict = Dictionary::load("hello hə-ˈlō\nworld ˈwɜːld");
        assert_eq!(dict.get("hello"), Some("hə-ˈlō"));
        assert_eq!(dict.get("world"), Some("ˈwɜːld"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_word_key_is_lowercased() {
        let dict = Dictionary::load("HELLO hə-ˈlō");
        assert_eq!(dict.get("hello"), Some("hə-ˈlō"));
        assert_eq!(dict.get("HELLO"), None);
    }

    #[test]
    fn test_transcription_kept_verbatim() {
        // Internal whitespace and case in the transcription must survive
        let dict = Dictionary::load("abc ˈeɪ ˈbiː ˈSiː");
        assert_eq!(dict.get("abc"), Some("ˈeɪ ˈbiː ˈSiː"));
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let raw = ";;; CMU dictionary header\n\n   \nhello hə-ˈlō\n;;; trailing note\n";
        let dict = Dictionary::load(raw);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("hello"), Some("hə-ˈlō"));
    }

    #[test]
    fn test_comment_only_blob_yields_empty_dictionary() {
        let dict = Dictionary::load(";;; one\n;;; two\n\n\n");
        assert!(dict.is_empty());
        assert_eq!(dict.get("hello"), None);
    }

    #[test]
    fn test_skips_malformed_lines() {
        // No whitespace split, and whitespace-only remainder
        let dict = Dictionary::load("loneword\nhello hə-ˈlō\nbare \n");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("loneword"), None);
        assert_eq!(dict.get("bare"), None);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let dict = Dictionary::load("read rɛd\nread riːd");
        assert_eq!(dict.get("read"), Some("riːd"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_entry_line_with_surrounding_whitespace() {
        let dict = Dictionary::load("   hello \t hə-ˈlō  ");
        assert_eq!(dict.get("hello"), Some("hə-ˈlō"));
    }

    #[test]
    fn test_hyphenated_headword_preserved() {
        // Punctuation in the word token is part of the key
        let dict = Dictionary::load("3-d ˈθriːˈdiː");
        assert_eq!(dict.get("3-d"), Some("ˈθriːˈdiː"));
    }

    #[test]
    fn test_from_file_missing_path_is_empty() {
        let dict = Dictionary::from_file(Path::new("/nonexistent/ipa-dict.txt"));
        assert!(dict.is_empty());
    }
}
