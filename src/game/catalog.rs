/// Word catalog: the fixed (word, hint) pairs a session draws rounds from.
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

/// Immutable for the process lifetime. Construction fails fast on a bad
/// list rather than letting a broken pair surface mid-game.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    /// Validates and uppercase-normalizes the entries.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        ensure!(!entries.is_empty(), "word catalog is empty");
        let entries = entries
            .into_iter()
            .map(|entry| {
                let word = entry.word.trim().to_ascii_uppercase();
                ensure!(!word.is_empty(), "word catalog contains an empty word");
                ensure!(
                    word.chars().all(|c| c.is_ascii_uppercase()),
                    "word {:?} contains non-alphabetic characters",
                    entry.word
                );
                let hint = entry.hint.trim().to_string();
                ensure!(!hint.is_empty(), "word {word:?} has an empty hint");
                Ok(WordEntry { word, hint })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Loads a catalog from a JSON file: `[{"word": ..., "hint": ...}, ...]`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        let entries: Vec<WordEntry> = serde_json::from_str(&data)
            .with_context(|| format!("parsing word list {}", path.display()))?;
        Self::new(entries).with_context(|| format!("validating word list {}", path.display()))
    }

    /// The word list shipped in the binary.
    pub fn builtin() -> Self {
        let entries = [
            ("PAINTING", "Type of drawing that is hung up"),
            ("NBA", "A very famous sports league"),
            ("FITREC", "A spot on campus where people exercise"),
            ("TERMINAL", "Where this game is being played"),
            ("KEYBOARD", "What you are guessing letters with"),
            ("COMPILER", "Turns source code into a program"),
        ]
        .into_iter()
        .map(|(word, hint)| WordEntry {
            word: word.to_string(),
            hint: hint.to_string(),
        })
        .collect();
        Self::new(entries).expect("built-in word list is valid")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> &WordEntry {
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, hint: &str) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            hint: hint.to_string(),
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(WordCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn words_are_uppercase_normalized() {
        let catalog = WordCatalog::new(vec![entry("painting", "art")]).unwrap();
        assert_eq!(catalog.entry(0).word, "PAINTING");
    }

    #[test]
    fn non_alphabetic_words_are_rejected() {
        assert!(WordCatalog::new(vec![entry("C-3PO", "droid")]).is_err());
        assert!(WordCatalog::new(vec![entry("TWO WORDS", "space")]).is_err());
    }

    #[test]
    fn missing_hint_is_rejected() {
        assert!(WordCatalog::new(vec![entry("CAT", "  ")]).is_err());
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = WordCatalog::builtin();
        assert!(!catalog.is_empty());
    }
}
