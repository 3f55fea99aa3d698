//! Integration tests for the load → resolve → record pipeline
//!
//! These exercise the public crate surface the way the application shell
//! uses it: parse a dictionary blob, resolve direct and clipboard-style
//! input against it, and keep the history ledger in sync.

use ipa_clip::dict::Dictionary;
use ipa_clip::history::History;
use ipa_clip::overrides::OverrideTable;
use ipa_clip::resolve::{resolve, NOT_FOUND};

const DICT_BLOB: &str = "\
;;; Abridged IPA dictionary for tests
hello hə-ˈlō
world ˈwɜːld
practice ˈpræk.tɪs
billion ˈbɪ.li.ən
3-d ˈθriːˈdiː
";

#[test]
fn test_clipboard_style_phrase_end_to_end() {
    let dictionary = Dictionary::load(DICT_BLOB);
    let overrides = OverrideTable::builtin();
    let mut history = History::new(50);

    // Clipboard text arrives with casing and punctuation intact
    let text = "Hello, World. A billion zzqx";
    let resolution = resolve(text, &dictionary, &overrides, true);

    // Per-token: cleaned fallback, cleaned fallback, passthrough,
    // override beats the dictionary entry, passthrough
    assert_eq!(
        resolution.transcription,
        "hə-ˈlō   ˈwɜːld   a   ˈbɪl.jən   zzqx"
    );
    assert!(resolution.found);
    assert_eq!(resolution.input, text);

    history = history.record(&resolution.input);
    assert_eq!(history.entries(), [text]);
}

#[test]
fn test_single_word_misses_are_marked_not_found() {
    let dictionary = Dictionary::load(DICT_BLOB);
    let resolution = resolve("zzqxnotaword", &dictionary, &OverrideTable::empty(), true);

    assert_eq!(resolution.transcription, NOT_FOUND);
    assert!(!resolution.found);
}

#[test]
fn test_missing_dictionary_degrades_not_fails() {
    // A missing file yields an empty dictionary; resolution still works
    let dictionary = Dictionary::from_file(std::path::Path::new("/no/such/dict.txt"));
    assert!(dictionary.is_empty());

    let resolution = resolve("hello world", &dictionary, &OverrideTable::empty(), true);
    assert_eq!(resolution.transcription, "hello   world");

    let resolution = resolve("million", &dictionary, &OverrideTable::builtin(), true);
    assert_eq!(resolution.transcription, "ˈmɪl.jən");
}

#[test]
fn test_repeated_clipboard_text_promotes_history() {
    let dictionary = Dictionary::load(DICT_BLOB);
    let overrides = OverrideTable::empty();
    let mut history = History::new(50);

    for text in ["hello", "world", "practice", "hello"] {
        let resolution = resolve(text, &dictionary, &overrides, true);
        assert!(resolution.found);
        history = history.record(text);
    }

    assert_eq!(history.entries(), ["hello", "practice", "world"]);
}

#[test]
fn test_show_ipa_off_still_records_history() {
    let dictionary = Dictionary::load(DICT_BLOB);
    let mut history = History::new(50);

    let resolution = resolve("hello", &dictionary, &OverrideTable::empty(), false);
    assert_eq!(resolution.transcription, "");

    history = history.record(&resolution.input);
    assert_eq!(history.entries(), ["hello"]);
}
