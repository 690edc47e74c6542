//! Dictionary service for word validation and AI candidate filtering
//!
//! Embeds the bundled word list at build time. A [`Dictionary`] is an
//! explicitly constructed value handed to the AI and the reducer, so tests
//! can build small in-memory dictionaries instead of the shipped list.

use super::{Difficulty, Tier, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Embedded word list, one `word [tier]` entry per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Bundled dictionary, parsed on first use
static BUNDLED: Lazy<Result<Dictionary, DictionaryError>> =
    Lazy::new(|| Dictionary::parse(WORDS_DATA));

/// Errors that can occur while loading a word list.
#[derive(Debug, Clone)]
pub enum DictionaryError {
    /// The word list file could not be read
    Io { path: PathBuf, source: Arc<std::io::Error> },
    /// A line could not be understood
    Malformed { line: usize, reason: String },
    /// No usable words were found
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Io { path, source } => {
                write!(f, "failed to read word list {}: {}", path.display(), source)
            }
            DictionaryError::Malformed { line, reason } => {
                write!(f, "malformed word list at line {}: {}", line, reason)
            }
            DictionaryError::Empty => write!(f, "word list contains no playable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    pub tier: Tier,
}

impl DictionaryEntry {
    pub fn new(word: &str, tier: Tier) -> Self {
        Self {
            word: word.to_uppercase(),
            tier,
        }
    }
}

/// Word lists bucketed by tier and length. Never empty.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    words: HashSet<String>,
    /// Indices into `entries`, per word length
    by_length: BTreeMap<usize, Vec<usize>>,
}

fn is_playable(word: &str) -> bool {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_alphabetic())
}

impl Dictionary {
    /// Build a dictionary from entries, keeping the first occurrence of each word.
    /// Entries outside 4-12 ASCII letters are skipped.
    pub fn from_entries<I>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut dict = Dictionary {
            entries: Vec::new(),
            words: HashSet::new(),
            by_length: BTreeMap::new(),
        };
        for entry in entries {
            let word = entry.word.to_uppercase();
            if !is_playable(&word) || !dict.words.insert(word.clone()) {
                continue;
            }
            dict.by_length
                .entry(word.len())
                .or_default()
                .push(dict.entries.len());
            dict.entries.push(DictionaryEntry {
                word,
                tier: entry.tier,
            });
        }

        if dict.entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dict)
    }

    /// Parse a word list in `word [tier]` line format.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut entries = Vec::new();
        for (n, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default();
            let tier = match fields.next() {
                Some(t) => t
                    .parse::<u8>()
                    .ok()
                    .and_then(Tier::from_number)
                    .ok_or_else(|| DictionaryError::Malformed {
                        line: n + 1,
                        reason: format!("unknown tier {:?}", t),
                    })?,
                None => Tier::for_length(word.len()),
            };
            if fields.next().is_some() {
                return Err(DictionaryError::Malformed {
                    line: n + 1,
                    reason: "expected `word [tier]`".to_string(),
                });
            }

            entries.push(DictionaryEntry::new(word, tier));
        }
        Self::from_entries(entries)
    }

    /// Load a word list from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DictionaryError::Io {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })?;
        let dict = Self::parse(&text)?;
        log::info!(
            "loaded {} words from {}",
            dict.word_count(),
            path.display()
        );
        Ok(dict)
    }

    /// The word list shipped with the game.
    pub fn bundled() -> Result<Self, DictionaryError> {
        (*BUNDLED).clone()
    }

    /// Check if a word is in the dictionary. Case-insensitive.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Every word, in list order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    pub fn words_by_tier(&self, tier: Tier) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.tier == tier)
            .map(|e| e.word.as_str())
            .collect()
    }

    /// All words of a given length, in list order
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.by_length
            .get(&length)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| self.entries[i].word.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Words of a given length in the tiers a difficulty plays with
    pub fn words_by_difficulty_and_length(&self, difficulty: Difficulty, length: usize) -> Vec<&str> {
        let tiers = difficulty.tiers();
        self.by_length
            .get(&length)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| &self.entries[i])
                    .filter(|e| tiers.contains(&e.tier))
                    .map(|e| e.word.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Words of `length` consistent with what is known about a hidden word:
    /// - each known position holds its letter
    /// - no excluded letter appears anywhere
    /// - every required letter appears somewhere
    pub fn filter_candidates(
        &self,
        length: usize,
        known: &BTreeMap<usize, char>,
        excluded: &BTreeSet<char>,
        required: &BTreeSet<char>,
    ) -> Vec<String> {
        self.words_of_length(length)
            .into_iter()
            .filter(|word| {
                let letters: Vec<char> = word.chars().collect();
                known.iter().all(|(&pos, &c)| letters.get(pos) == Some(&c))
                    && !letters.iter().any(|c| excluded.contains(c))
                    && required.iter().all(|c| letters.contains(c))
            })
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> Dictionary {
        Dictionary::from_entries([
            DictionaryEntry::new("hello", Tier::Common),
            DictionaryEntry::new("world", Tier::Common),
            DictionaryEntry::new("hedge", Tier::Common),
            DictionaryEntry::new("happy", Tier::Common),
            DictionaryEntry::new("brave", Tier::Medium),
            DictionaryEntry::new("quest", Tier::Medium),
            DictionaryEntry::new("adventure", Tier::Rare),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_words_case_insensitive() {
        let dict = mock();
        assert!(dict.is_valid_word("hello"));
        assert!(dict.is_valid_word("WORLD"));
        assert!(dict.is_valid_word("HeDgE"));
        assert!(!dict.is_valid_word("xyzzy"));
        assert!(!dict.is_valid_word(""));
    }

    #[test]
    fn test_word_count_and_tiers() {
        let dict = mock();
        assert_eq!(dict.word_count(), 7);
        assert_eq!(dict.words_by_tier(Tier::Common), vec!["HELLO", "WORLD", "HEDGE", "HAPPY"]);
        assert_eq!(dict.words_by_tier(Tier::Rare), vec!["ADVENTURE"]);
    }

    #[test]
    fn test_words_of_length() {
        let dict = mock();
        assert_eq!(dict.words_of_length(5).len(), 6);
        assert!(dict.words_of_length(7).is_empty());
    }

    #[test]
    fn test_words_by_difficulty_and_length() {
        let dict = mock();
        assert_eq!(
            dict.words_by_difficulty_and_length(Difficulty::Hard, 5),
            vec!["BRAVE", "QUEST"]
        );
        assert_eq!(dict.words_by_difficulty_and_length(Difficulty::Easy, 5).len(), 4);
    }

    #[test]
    fn test_filter_by_known_letters() {
        let dict = mock();
        let known = BTreeMap::from([(0, 'H'), (1, 'E')]);
        let result = dict.filter_candidates(5, &known, &BTreeSet::new(), &BTreeSet::new());
        assert_eq!(result, vec!["HELLO", "HEDGE"]);
    }

    #[test]
    fn test_filter_excludes_and_requires() {
        let dict = mock();
        let excluded = BTreeSet::from(['L']);
        let required = BTreeSet::from(['E']);
        let result = dict.filter_candidates(5, &BTreeMap::new(), &excluded, &required);
        assert_eq!(result, vec!["HEDGE", "BRAVE", "QUEST"]);
    }

    #[test]
    fn test_filter_combines_all_constraints() {
        let dict = mock();
        let known = BTreeMap::from([(0, 'H')]);
        let excluded = BTreeSet::from(['L']);
        let required = BTreeSet::from(['P']);
        let result = dict.filter_candidates(5, &known, &excluded, &required);
        assert_eq!(result, vec!["HAPPY"]);
    }

    #[test]
    fn test_parse_line_format() {
        let dict = Dictionary::parse("# comment\n\nhello 1\nadventure\n  brave 2  \nabc\nhello 3\n")
            .unwrap();
        assert_eq!(dict.word_count(), 3);
        assert_eq!(dict.words_by_tier(Tier::Rare), vec!["ADVENTURE"]);
        assert_eq!(dict.words_by_tier(Tier::Medium), vec!["BRAVE"]);
    }

    #[test]
    fn test_parse_rejects_bad_tier() {
        let err = Dictionary::parse("hello 1\nworld 9\n").unwrap_err();
        assert!(matches!(err, DictionaryError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_empty_list_is_an_error() {
        assert!(matches!(Dictionary::parse("# nothing\n"), Err(DictionaryError::Empty)));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Dictionary::load("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("failed to read word list"));
    }

    #[test]
    fn test_bundled_dictionary() {
        let dict = Dictionary::bundled().unwrap();
        assert!(dict.word_count() > 3000);
        assert!(dict.is_valid_word("world"));
        assert!(dict.is_valid_word("hello"));
        for len in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            assert!(!dict.words_of_length(len).is_empty(), "no words of length {}", len);
        }
    }
}
