//! Actions accepted by the reducer
//!
//! Constructors normalize case so callers can pass raw input.

use super::{Difficulty, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartGame {
        difficulty: Difficulty,
    },
    SetWord {
        player_id: PlayerId,
        word: String,
        free_letter_index: usize,
    },
    BeginPlay,
    AskLetter {
        actor_id: PlayerId,
        target_id: PlayerId,
        letter: char,
    },
    GuessWord {
        actor_id: PlayerId,
        target_id: PlayerId,
        guessed_word: String,
    },
    ChoosePenalty {
        player_id: PlayerId,
        letter_index: usize,
    },
    NextTurn,
    Reset,
}

impl Action {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::StartGame { .. } => "START_GAME",
            Action::SetWord { .. } => "SET_WORD",
            Action::BeginPlay => "BEGIN_PLAY",
            Action::AskLetter { .. } => "ASK_LETTER",
            Action::GuessWord { .. } => "GUESS_WORD",
            Action::ChoosePenalty { .. } => "CHOOSE_PENALTY",
            Action::NextTurn => "NEXT_TURN",
            Action::Reset => "RESET",
        }
    }
}

/// Start a new game with the given difficulty level.
pub fn start_game(difficulty: Difficulty) -> Action {
    Action::StartGame { difficulty }
}

/// Set a player's secret word and free letter index.
pub fn set_word(player_id: PlayerId, word: &str, free_letter_index: usize) -> Action {
    Action::SetWord {
        player_id,
        word: word.to_uppercase(),
        free_letter_index,
    }
}

pub fn begin_play() -> Action {
    Action::BeginPlay
}

/// Actor asks target whether their word contains `letter`.
pub fn ask_letter(actor_id: PlayerId, target_id: PlayerId, letter: char) -> Action {
    Action::AskLetter {
        actor_id,
        target_id,
        letter: letter.to_ascii_uppercase(),
    }
}

/// Actor attempts the target's full word.
pub fn guess_word(actor_id: PlayerId, target_id: PlayerId, guessed_word: &str) -> Action {
    Action::GuessWord {
        actor_id,
        target_id,
        guessed_word: guessed_word.to_uppercase(),
    }
}

/// Reveal one of the guesser's own letters after a wrong guess.
pub fn choose_penalty(player_id: PlayerId, letter_index: usize) -> Action {
    Action::ChoosePenalty {
        player_id,
        letter_index,
    }
}

pub fn next_turn() -> Action {
    Action::NextTurn
}

pub fn reset() -> Action {
    Action::Reset
}
