/// Bounded, deduplicated, most-recent-first record of resolved inputs
///
/// Held and passed by value: `record` and `clear` consume the ledger and
/// return the updated one, keeping the core free of shared mutable state.
/// Entries keep their original casing. Nothing persists across restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    max_entries: usize,
}

impl History {
    /// Default entry cap
    pub const DEFAULT_MAX_ENTRIES: usize = 50;

    /// Create an empty ledger capped at `max_entries`
    #[must_use]
    pub const fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a resolved input at the front of the ledger
    ///
    /// Blank text is a no-op. Re-recording an existing entry promotes it to
    /// the front instead of duplicating it. When the cap is exceeded the
    /// oldest entries are evicted from the back.
    #[must_use]
    pub fn record(mut self, text: &str) -> Self {
        if text.trim().is_empty() {
            return self;
        }

        self.entries.retain(|entry| entry != text);
        self.entries.insert(0, text.to_owned());
        self.entries.truncate(self.max_entries);
        self
    }

    /// Reset to an empty ledger, keeping the cap
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.entries.clear();
        self
    }

    /// Entries in most-recent-first order
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ENTRIES)
    }
}
