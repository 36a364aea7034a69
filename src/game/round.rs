/// Round state for a single hangman play-through.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A round is lost once this many wrong guesses accumulate.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Derived result of a round, recomputed from state rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win,
    Lose,
}

/// The single mutable entity of the game: the word being guessed and
/// everything the player has spent so far. All fields reset together when
/// a new round replaces this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
    hint_tier: u32,
}

impl Round {
    /// Expects `word` already uppercase-normalized by the catalog.
    pub fn new(word: String, hint: String) -> Self {
        Self {
            word,
            hint,
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            hint_tier: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn hint_tier(&self) -> u32 {
        self.hint_tier
    }

    /// Whether the loss threshold has been reached. Guess and hint
    /// mutations are refused past this point until a new round starts.
    pub fn is_frozen(&self) -> bool {
        self.wrong_guesses >= MAX_WRONG_GUESSES
    }

    /// Win takes precedence over lose: a final correct guess that lands on
    /// the same evaluation as the sixth wrong guess still wins.
    pub fn outcome(&self) -> Outcome {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            Outcome::Win
        } else if self.is_frozen() {
            Outcome::Lose
        } else {
            Outcome::InProgress
        }
    }

    /// The word with unguessed letters masked as `_`.
    pub fn display_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    /// Letters A-Z that are neither guessed nor present in the word.
    /// These are the candidates the tier-2 hint removes from play.
    pub fn safe_unused_letters(&self) -> Vec<char> {
        ('A'..='Z')
            .filter(|c| !self.guessed.contains(c) && !self.word.contains(*c))
            .collect()
    }

    /// Commits a letter as guessed, charging a wrong guess if it misses.
    /// Re-committing an already-guessed letter never charges. Returns
    /// whether the letter is in the word.
    pub(crate) fn commit_guess(&mut self, letter: char) -> bool {
        let correct = self.word.contains(letter);
        if self.guessed.insert(letter) && !correct {
            self.wrong_guesses += 1;
        }
        correct
    }

    /// Marks letters as consumed without any wrong-guess cost. Union is
    /// idempotent for letters already guessed.
    pub(crate) fn consume_letters<I: IntoIterator<Item = char>>(&mut self, letters: I) {
        self.guessed.extend(letters);
    }

    /// Flat one-guess cost charged by the paid hint tiers.
    pub(crate) fn charge_penalty(&mut self) {
        self.wrong_guesses += 1;
    }

    /// Advances the hint tier and returns the new value. The caller
    /// dispatches on the result, so tier numbering starts at 1.
    pub(crate) fn advance_hint_tier(&mut self) -> u32 {
        self.hint_tier += 1;
        self.hint_tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(word.to_string(), "a hint".to_string())
    }

    #[test]
    fn display_word_masks_unguessed_letters() {
        let mut r = round("CAT");
        assert_eq!(r.display_word(), "___");
        r.commit_guess('C');
        assert_eq!(r.display_word(), "C__");
        r.commit_guess('A');
        r.commit_guess('T');
        assert_eq!(r.display_word(), "CAT");
    }

    #[test]
    fn wrong_guess_charges_and_correct_does_not() {
        let mut r = round("CAT");
        assert!(r.commit_guess('C'));
        assert_eq!(r.wrong_guesses(), 0);
        assert!(!r.commit_guess('X'));
        assert_eq!(r.wrong_guesses(), 1);
    }

    #[test]
    fn recommitting_a_letter_never_charges_twice() {
        let mut r = round("CAT");
        r.commit_guess('X');
        r.commit_guess('X');
        assert_eq!(r.wrong_guesses(), 1);
    }

    #[test]
    fn win_takes_precedence_over_lose() {
        let mut r = round("CAT");
        // Five wrong, then the penalty that would reach six lands on the
        // same state as the completed word.
        for c in ['X', 'Z', 'Q', 'W', 'V'] {
            r.commit_guess(c);
        }
        r.consume_letters(['C', 'A', 'T']);
        r.charge_penalty();
        assert_eq!(r.wrong_guesses(), MAX_WRONG_GUESSES);
        assert_eq!(r.outcome(), Outcome::Win);
    }

    #[test]
    fn outcome_is_idempotent_between_mutations() {
        let mut r = round("CAT");
        r.commit_guess('X');
        let first = r.outcome();
        assert_eq!(first, r.outcome());
        assert_eq!(first, Outcome::InProgress);
    }

    #[test]
    fn safe_unused_excludes_word_and_guessed_letters() {
        let mut r = round("CAT");
        r.commit_guess('X');
        let safe = r.safe_unused_letters();
        assert_eq!(safe.len(), 22); // 26 minus C, A, T, X
        assert!(!safe.contains(&'C'));
        assert!(!safe.contains(&'X'));
    }
}
