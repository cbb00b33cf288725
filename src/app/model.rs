//! Application model: the quiz session plus everything the TUI shows around it.
//!
//! `App` owns the session and the fragment player, so every user action that
//! touches playback (answering, moving on, quitting) stops the fragment first.

use rand::Rng;

use crate::library::TrackId;
use crate::player::{FragmentPlayer, Launcher};
use crate::quiz::{FRAGMENT_SECONDS, OPTION_COUNT, Phase, QuizSession, ROUNDS, select_start_offset};

/// How an option button should be rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    /// The right answer, revealed after answering.
    Correct,
    /// The user's pick when it was wrong.
    WrongPick,
}

/// The main application model.
pub struct App<R: Rng, L: Launcher> {
    pub session: QuizSession<R>,
    player: FragmentPlayer<L>,
    /// Highlighted option in the list.
    pub cursor: usize,
    pub playing: bool,
    /// One-line, non-fatal message (e.g. the player could not start).
    pub notice: Option<String>,
    pub current_dir: Option<String>,
}

impl<R: Rng, L: Launcher> App<R, L> {
    pub fn new(session: QuizSession<R>, player: FragmentPlayer<L>) -> Self {
        Self {
            session,
            player,
            cursor: 0,
            playing: false,
            notice: None,
            current_dir: None,
        }
    }

    /// Record the scanned directory for the status line.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn can_play(&self) -> bool {
        self.session.phase() == Phase::InRound
    }

    pub fn can_answer(&self) -> bool {
        self.session.phase() == Phase::InRound
    }

    pub fn can_continue(&self) -> bool {
        self.session.phase() != Phase::InRound
    }

    pub fn continue_label(&self) -> &'static str {
        if self.session.is_finished() {
            "Play again"
        } else {
            "Next track"
        }
    }

    /// Headline text for the current phase.
    pub fn info_text(&self) -> String {
        match self.session.phase() {
            Phase::InRound => format!(
                "Round {}/{} | Score: {}",
                self.session.round(),
                ROUNDS,
                self.session.score()
            ),
            Phase::AwaitingNext => match self.session.last_outcome() {
                Some(outcome) => {
                    let answer = &self.session.track(outcome.answer).display;
                    if outcome.correct {
                        format!("Correct! {answer}")
                    } else {
                        format!("Wrong. {answer}")
                    }
                }
                None => String::new(),
            },
            Phase::Finished => format!("Game over. Score: {}/{}", self.session.score(), ROUNDS),
        }
    }

    /// Labels of the current options in presentation order.
    pub fn option_labels(&self) -> Vec<&str> {
        self.session.options().map(|t| t.display.as_str()).collect()
    }

    pub fn option_mark(&self, index: usize) -> OptionMark {
        let (Some(outcome), Some(&id)) = (
            self.session.last_outcome(),
            self.session.option_ids().get(index),
        ) else {
            return OptionMark::Plain;
        };
        if self.session.phase() != Phase::AwaitingNext {
            return OptionMark::Plain;
        }
        mark_for(id, outcome.answer, outcome.chosen)
    }

    /// Play a random fragment of this round's track, replacing any fragment
    /// already playing. A player that fails to start only leaves a notice.
    pub fn play_fragment(&mut self) {
        if !self.can_play() {
            return;
        }
        let duration = self.session.correct_track().duration_secs;
        let offset = select_start_offset(self.session.rng_mut(), duration, FRAGMENT_SECONDS);

        match self
            .player
            .start_fragment(self.session.correct_track(), offset, FRAGMENT_SECONDS)
        {
            Ok(()) => {
                self.playing = true;
                self.notice = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.playing = false;
                self.notice = Some(format!("No sound: {e}"));
            }
        }
    }

    /// Answer with option `index`; stops the fragment first.
    pub fn answer(&mut self, index: usize) {
        if !self.can_answer() {
            return;
        }
        self.stop_playback();
        match self.session.submit_answer(index) {
            Ok(outcome) => {
                self.cursor = index;
                log::info!(
                    "round {}: {}",
                    self.session.round(),
                    if outcome.correct { "correct" } else { "wrong" }
                );
            }
            Err(e) => log::error!("answer rejected: {e}"),
        }
    }

    pub fn answer_selected(&mut self) {
        self.answer(self.cursor);
    }

    /// Go to the next round, or start a new game once finished.
    pub fn continue_game(&mut self) {
        if !self.can_continue() {
            return;
        }
        self.stop_playback();
        self.notice = None;
        self.cursor = 0;
        if self.session.is_finished() {
            self.session.reset();
        } else if let Err(e) = self.session.advance_round() {
            log::error!("cannot advance: {e}");
        }
    }

    pub fn select_next(&mut self) {
        if self.can_answer() {
            self.cursor = (self.cursor + 1) % OPTION_COUNT;
        }
    }

    pub fn select_prev(&mut self) {
        if self.can_answer() {
            self.cursor = (self.cursor + OPTION_COUNT - 1) % OPTION_COUNT;
        }
    }

    /// Refresh the playing flag; fragments end on their own.
    pub fn tick(&mut self) {
        self.playing = self.player.is_playing();
    }

    pub fn stop_playback(&mut self) {
        self.player.stop();
        self.playing = false;
    }

    #[cfg(test)]
    pub(crate) fn player(&self) -> &FragmentPlayer<L> {
        &self.player
    }
}

fn mark_for(id: TrackId, answer: TrackId, chosen: TrackId) -> OptionMark {
    if id == answer {
        OptionMark::Correct
    } else if id == chosen {
        OptionMark::WrongPick
    } else {
        OptionMark::Plain
    }
}
