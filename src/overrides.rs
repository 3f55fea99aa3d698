use std::collections::HashMap;

/// Hand-maintained transcriptions consulted before the dictionary
///
/// A few words ship with transcriptions the bundled dictionary gets wrong or
/// lacks entirely. Entries here win over dictionary entries for the same
/// normalized key, always.
#[derive(Debug, Default)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    /// The built-in override set
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(&[
            ("million", "ˈmɪl.jən"),
            ("billion", "ˈbɪl.jən"),
            ("trillion", "ˈtrɪl.jən"),
        ])
    }

    /// An override table with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from word/transcription pairs (words are lowercased)
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(word, ipa)| (word.to_lowercase(), (*ipa).to_owned()))
            .collect();
        Self { entries }
    }

    /// Look up a transcription by already-lowercased word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}
