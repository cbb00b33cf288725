//! The quiz state machine.
//!
//! `InRound -> (submit_answer) -> AwaitingNext -> (advance_round) -> InRound`
//! until `ROUNDS` answers were given, then `Finished` until `reset`.

use rand::Rng;
use rand::seq::SliceRandom;
use rand::seq::index;

use crate::error::QuizError;
use crate::library::{Track, TrackId};

use super::{OPTION_COUNT, ROUNDS};

/// Where the session is in its round cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Options are drawn and an answer is expected.
    InRound,
    /// The current round was answered; the next one has not been drawn yet.
    AwaitingNext,
    /// All rounds played. Only `reset` leaves this state.
    Finished,
}

/// Result of answering a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub chosen: TrackId,
    pub answer: TrackId,
}

pub struct QuizSession<R: Rng> {
    library: Vec<Track>,
    rng: R,
    round: u32,
    score: u32,
    phase: Phase,
    correct: TrackId,
    options: Vec<TrackId>,
    last_outcome: Option<AnswerOutcome>,
}

impl<R: Rng> QuizSession<R> {
    /// Create a session over `library` and start round 1.
    ///
    /// Fails when the library cannot fill a round with distinct options.
    pub fn new(library: Vec<Track>, rng: R) -> Result<Self, QuizError> {
        if library.len() < OPTION_COUNT {
            return Err(QuizError::InsufficientLibrary {
                found: library.len(),
                required: OPTION_COUNT,
            });
        }

        let mut session = Self {
            library,
            rng,
            round: 0,
            score: 0,
            phase: Phase::AwaitingNext,
            correct: TrackId(0),
            options: Vec::with_capacity(OPTION_COUNT),
            last_outcome: None,
        };
        session.reset();
        Ok(session)
    }

    /// Start over: zero the counters and draw round 1.
    pub fn reset(&mut self) {
        self.round = 0;
        self.score = 0;
        self.last_outcome = None;
        self.draw_round();
    }

    /// Move past an answered round: draw the next one, or finish the game
    /// once `ROUNDS` rounds have been played.
    pub fn advance_round(&mut self) -> Result<Phase, QuizError> {
        if self.phase != Phase::AwaitingNext {
            return Err(QuizError::InvalidTransition {
                action: "advance round",
                phase: self.phase,
            });
        }

        if self.round >= ROUNDS {
            self.options.clear();
            self.phase = Phase::Finished;
            log::info!("game finished with {}/{}", self.score, ROUNDS);
        } else {
            self.draw_round();
        }
        Ok(self.phase)
    }

    /// Answer the current round with the option at `index`.
    pub fn submit_answer(&mut self, index: usize) -> Result<AnswerOutcome, QuizError> {
        if self.phase != Phase::InRound {
            return Err(QuizError::InvalidTransition {
                action: "answer",
                phase: self.phase,
            });
        }
        let chosen = *self
            .options
            .get(index)
            .ok_or(QuizError::OptionOutOfRange(index))?;

        let outcome = AnswerOutcome {
            correct: chosen == self.correct,
            chosen,
            answer: self.correct,
        };
        if outcome.correct {
            self.score += 1;
        }
        log::debug!(
            "round {}: answered {:?}, expected {:?}",
            self.round,
            chosen,
            self.correct
        );

        self.last_outcome = Some(outcome);
        self.phase = Phase::AwaitingNext;
        Ok(outcome)
    }

    fn draw_round(&mut self) {
        self.round += 1;

        let len = self.library.len();
        let correct = self.rng.random_range(0..len);

        // Sample from the library minus `correct`: indices at or past it shift by one.
        let others = index::sample(&mut self.rng, len - 1, OPTION_COUNT - 1);
        self.options.clear();
        self.options.extend(
            others
                .iter()
                .map(|i| TrackId(if i >= correct { i + 1 } else { i })),
        );
        self.options.push(TrackId(correct));
        self.options.shuffle(&mut self.rng);

        self.correct = TrackId(correct);
        self.phase = Phase::InRound;
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn correct_id(&self) -> TrackId {
        self.correct
    }

    /// The track to guess this round.
    pub fn correct_track(&self) -> &Track {
        self.track(self.correct_id())
    }

    /// Option ids in presentation order. Empty once the game is finished.
    pub fn option_ids(&self) -> &[TrackId] {
        &self.options
    }

    pub fn options(&self) -> impl Iterator<Item = &Track> + '_ {
        self.options.iter().map(|&id| self.track(id))
    }

    pub fn last_outcome(&self) -> Option<AnswerOutcome> {
        self.last_outcome
    }

    pub fn track(&self, id: TrackId) -> &Track {
        &self.library[id.0]
    }

    pub fn library(&self) -> &[Track] {
        &self.library
    }

    /// The session's random source, shared with fragment offset selection.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
