//! Screens and menus
//!
//! The screen shown is derived from the game phase:
//! - Title: difficulty menu and session stats
//! - WordSelection: type a secret word and pick its free letter
//! - Playing: racks, target picker, ask/guess input, game log
//! - Results: winner and updated stats

use crate::game::{Difficulty, GamePhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    WordSelection,
    Playing,
    Results,
}

impl From<GamePhase> for Screen {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Title => Screen::Title,
            GamePhase::WordSelection => Screen::WordSelection,
            GamePhase::Playing => Screen::Playing,
            GamePhase::Finished => Screen::Results,
        }
    }
}

/// Menu option on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Play(Difficulty),
    Rules,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::Play(Difficulty::Easy),
            MenuOption::Play(Difficulty::Medium),
            MenuOption::Play(Difficulty::Hard),
            MenuOption::Rules,
            MenuOption::Quit,
        ]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Play(Difficulty::Easy) => "Play - Easy",
            MenuOption::Play(Difficulty::Medium) => "Play - Medium",
            MenuOption::Play(Difficulty::Hard) => "Play - Hard",
            MenuOption::Rules => "How to Play",
            MenuOption::Quit => "Quit",
        }
    }

    /// Position of the play option for `difficulty`
    pub fn index_of(difficulty: Difficulty) -> usize {
        Self::all()
            .iter()
            .position(|o| *o == MenuOption::Play(difficulty))
            .unwrap_or(0)
    }
}

/// What letter keys do on the human's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Each letter key asks the selected target for that letter
    #[default]
    Ask,
    /// Letters build up a full-word guess, submitted with Enter
    Guess,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Ask => InputMode::Guess,
            InputMode::Guess => InputMode::Ask,
        }
    }
}
