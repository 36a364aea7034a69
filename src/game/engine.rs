/// The game engine: owns the round, applies intents, reports notices.
use tracing::{debug, info};

use crate::game::catalog::WordCatalog;
use crate::game::rng::RandomSource;
use crate::game::round::{Outcome, Round};

/// User intents the presentation layer dispatches. Processing is
/// synchronous and strictly in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Stage a letter for the next submit. Ignored if already guessed.
    Select(char),
    /// Commit the staged letter as a guess.
    Submit,
    /// Request the next hint tier.
    Hint,
    /// Replace the round with a fresh one.
    NewRound,
}

/// One-shot notifications produced by a transition. Terminal outcomes are
/// edge-triggered: they fire on the transition into WIN/LOSE, never again
/// on later reads of the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The round is already lost; hints are refused.
    HintUnavailable,
    /// All three hint tiers are spent.
    HintExhausted,
    Won,
    Lost { word: String },
}

pub struct GameEngine {
    catalog: WordCatalog,
    rng: Box<dyn RandomSource>,
    round: Round,
    pending: Option<char>,
    seen_outcome: Outcome,
}

impl GameEngine {
    pub fn new(catalog: WordCatalog, mut rng: Box<dyn RandomSource>) -> Self {
        let round = draw_round(&catalog, rng.as_mut());
        info!(word_len = round.word().len(), "starting first round");
        Self {
            catalog,
            rng,
            round,
            pending: None,
            seen_outcome: Outcome::InProgress,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn pending(&self) -> Option<char> {
        self.pending
    }

    pub fn outcome(&self) -> Outcome {
        self.round.outcome()
    }

    pub fn display_word(&self) -> String {
        self.round.display_word()
    }

    /// Hint text stays visible for the rest of the round once tier 1 has
    /// been requested.
    pub fn revealed_hint(&self) -> Option<&str> {
        (self.round.hint_tier() >= 1).then_some(self.round.hint())
    }

    /// Applies one intent and returns the notices it produced. Every
    /// operation is total: invalid or late intents are no-ops.
    pub fn apply(&mut self, intent: Intent) -> Vec<Notice> {
        let mut notices = Vec::new();
        match intent {
            Intent::Select(letter) => self.select(letter),
            Intent::Submit => self.submit(),
            Intent::Hint => self.hint(&mut notices),
            Intent::NewRound => self.new_round(),
        }
        self.note_outcome_edge(&mut notices);
        notices
    }

    fn select(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || self.round.is_guessed(letter) {
            return;
        }
        self.pending = Some(letter);
    }

    fn submit(&mut self) {
        if self.round.is_frozen() {
            return;
        }
        let Some(letter) = self.pending.take() else {
            return;
        };
        let correct = self.round.commit_guess(letter);
        debug!(
            %letter,
            correct,
            wrong = self.round.wrong_guesses(),
            "guess submitted"
        );
    }

    /// Increment-then-dispatch: the tier counter moves before the branch,
    /// so the defined tiers are 1-3 and every later value is exhausted.
    fn hint(&mut self, notices: &mut Vec<Notice>) {
        if self.round.is_frozen() {
            notices.push(Notice::HintUnavailable);
            return;
        }
        match self.round.advance_hint_tier() {
            1 => {
                // Hint text is now exposed through revealed_hint().
                debug!("hint text revealed");
            }
            2 => {
                let mut safe = self.round.safe_unused_letters();
                self.rng.shuffle_letters(&mut safe);
                safe.truncate(safe.len() / 2);
                debug!(removed = safe.len(), "safe letters taken out of play");
                self.round.consume_letters(safe);
                self.round.charge_penalty();
                self.drop_consumed_pending();
            }
            3 => {
                self.round.consume_letters(['A', 'E', 'I', 'O', 'U']);
                self.round.charge_penalty();
                self.drop_consumed_pending();
            }
            _ => notices.push(Notice::HintExhausted),
        }
    }

    fn new_round(&mut self) {
        self.round = draw_round(&self.catalog, self.rng.as_mut());
        self.pending = None;
        self.seen_outcome = Outcome::InProgress;
        info!(word_len = self.round.word().len(), "new round started");
    }

    /// A hint can consume the staged letter; un-stage it so a later submit
    /// cannot re-commit a letter that is already out of play.
    fn drop_consumed_pending(&mut self) {
        if self.pending.is_some_and(|p| self.round.is_guessed(p)) {
            self.pending = None;
        }
    }

    fn note_outcome_edge(&mut self, notices: &mut Vec<Notice>) {
        let outcome = self.round.outcome();
        if outcome == self.seen_outcome {
            return;
        }
        match outcome {
            Outcome::Win => {
                info!(word = self.round.word(), "round won");
                notices.push(Notice::Won);
            }
            Outcome::Lose => {
                info!(word = self.round.word(), "round lost");
                notices.push(Notice::Lost {
                    word: self.round.word().to_string(),
                });
            }
            Outcome::InProgress => {}
        }
        self.seen_outcome = outcome;
    }
}

fn draw_round(catalog: &WordCatalog, rng: &mut dyn RandomSource) -> Round {
    let entry = catalog.entry(rng.pick_index(catalog.len()));
    Round::new(entry.word.clone(), entry.hint.clone())
}
