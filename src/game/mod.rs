//! Game logic: players, secret words, the action log and shared game state

pub mod actions;
pub mod ai;
pub mod dictionary;
pub mod reducer;
pub mod scheduler;
pub mod validation;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// English letters ordered from most to least frequent.
pub const FREQUENCY_ORDER: [char; 26] = [
    'E', 'T', 'A', 'O', 'I', 'N', 'S', 'H', 'R', 'D', 'L', 'C', 'U', 'M', 'W', 'F', 'G', 'Y', 'P',
    'B', 'V', 'K', 'J', 'X', 'Q', 'Z',
];

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Shortest secret word allowed
pub const MIN_WORD_LENGTH: usize = 4;
/// Longest secret word allowed
pub const MAX_WORD_LENGTH: usize = 12;

/// Rank of a letter in [`FREQUENCY_ORDER`] (0 = most common).
/// Non-letters rank after every letter.
pub fn frequency_rank(letter: char) -> usize {
    FREQUENCY_ORDER
        .iter()
        .position(|&c| c == letter.to_ascii_uppercase())
        .unwrap_or(FREQUENCY_ORDER.len())
}

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

/// Stable identity of a seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerId {
    Human,
    Ai1,
    Ai2,
    Ai3,
}

impl PlayerId {
    /// All seats in creation order
    pub fn all() -> &'static [PlayerId] {
        &[PlayerId::Human, PlayerId::Ai1, PlayerId::Ai2, PlayerId::Ai3]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::Human => "human",
            PlayerId::Ai1 => "ai-1",
            PlayerId::Ai2 => "ai-2",
            PlayerId::Ai3 => "ai-3",
        }
    }

    /// Default display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerId::Human => "You",
            PlayerId::Ai1 => "AI 1",
            PlayerId::Ai2 => "AI 2",
            PlayerId::Ai3 => "AI 3",
        }
    }

    pub fn is_ai(&self) -> bool {
        !matches!(self, PlayerId::Human)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dictionary frequency bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Common = 1,
    Medium = 2,
    Rare = 3,
}

impl Tier {
    pub fn from_number(n: u8) -> Option<Tier> {
        match n {
            1 => Some(Tier::Common),
            2 => Some(Tier::Medium),
            3 => Some(Tier::Rare),
            _ => None,
        }
    }

    /// Tier assigned to an entry that does not declare one
    pub fn for_length(length: usize) -> Tier {
        match length {
            0..=6 => Tier::Common,
            7..=8 => Tier::Medium,
            _ => Tier::Rare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Dictionary tiers an AI draws its secret word from
    pub fn tiers(&self) -> &'static [Tier] {
        match self {
            Difficulty::Easy => &[Tier::Common],
            Difficulty::Medium => &[Tier::Common, Tier::Medium],
            Difficulty::Hard => &[Tier::Medium, Tier::Rare],
        }
    }

    /// Inclusive secret word length range for AI words
    pub fn word_lengths(&self) -> std::ops::RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 4..=6,
            Difficulty::Medium => 5..=8,
            Difficulty::Hard => 7..=12,
        }
    }

    pub fn parse(s: &str) -> Option<Difficulty> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Title,
    WordSelection,
    Playing,
    Finished,
}

/// An AI's private memory about one opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTrack {
    /// Letters already asked against this opponent
    pub asked_letters: BTreeSet<char>,
    /// Words still consistent with what is known (hard difficulty only)
    pub candidate_words: Vec<String>,
    /// Words already guessed against this opponent, by anyone
    pub guessed_words: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiState {
    pub letter_tracking: BTreeMap<PlayerId, LetterTrack>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub word: String,
    /// One flag per letter, true when visible to everyone
    pub revealed_mask: Vec<bool>,
    pub free_letter_index: Option<usize>,
    pub eliminated: bool,
    pub is_ai: bool,
    pub difficulty: Difficulty,
    pub ai_state: Option<AiState>,
}

impl Player {
    pub fn new(id: PlayerId, difficulty: Difficulty) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            word: String::new(),
            revealed_mask: Vec::new(),
            free_letter_index: None,
            eliminated: false,
            is_ai: id.is_ai(),
            difficulty,
            ai_state: id.is_ai().then(AiState::default),
        }
    }

    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_mask.iter().filter(|&&r| r).count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        !self.revealed_mask.is_empty() && self.revealed_mask.iter().all(|&r| r)
    }

    pub fn unrevealed_indices(&self) -> Vec<usize> {
        self.revealed_mask
            .iter()
            .enumerate()
            .filter(|(_, &r)| !r)
            .map(|(i, _)| i)
            .collect()
    }

    /// Revealed letters keyed by position
    pub fn known_positions(&self) -> BTreeMap<usize, char> {
        self.word
            .chars()
            .zip(&self.revealed_mask)
            .enumerate()
            .filter(|(_, (_, &r))| r)
            .map(|(i, (c, _))| (i, c))
            .collect()
    }

    /// Distinct letters visible in the word
    pub fn known_letters(&self) -> BTreeSet<char> {
        self.known_positions().into_values().collect()
    }

    /// Public view of the word, e.g. `_O_L_`
    pub fn pattern(&self) -> String {
        self.word
            .chars()
            .zip(&self.revealed_mask)
            .map(|(c, &r)| if r { c } else { '_' })
            .collect()
    }

    /// This AI's tracking for an opponent
    pub fn track(&self, opponent: PlayerId) -> Option<&LetterTrack> {
        self.ai_state.as_ref()?.letter_tracking.get(&opponent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    AskLetter,
    GuessWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Hit,
    Miss,
    CorrectGuess,
    WrongGuess,
}

impl ActionResult {
    pub fn label(&self) -> &'static str {
        match self {
            ActionResult::Hit => "hit",
            ActionResult::Miss => "miss",
            ActionResult::CorrectGuess => "correct guess",
            ActionResult::WrongGuess => "wrong guess",
        }
    }
}

/// One resolved action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub turn: u32,
    pub actor_id: PlayerId,
    pub action: ActionType,
    pub target_id: PlayerId,
    pub letter: Option<char>,
    pub guessed_word: Option<String>,
    pub result: ActionResult,
    /// Slots flipped by a hit, ascending
    pub revealed_positions: Option<Vec<usize>>,
    /// Slot the guesser revealed after a wrong guess
    pub penalty_position: Option<usize>,
}

impl LogEntry {
    pub fn describe(&self) -> String {
        let actor = self.actor_id.display_name();
        let target = self.target_id.display_name();
        match self.action {
            ActionType::AskLetter => {
                let letter = self.letter.unwrap_or('?');
                match &self.revealed_positions {
                    Some(positions) => format!(
                        "{} asked {} for {}: hit x{}",
                        actor,
                        target,
                        letter,
                        positions.len()
                    ),
                    None => format!("{} asked {} for {}: miss", actor, target, letter),
                }
            }
            ActionType::GuessWord => {
                let word = self.guessed_word.as_deref().unwrap_or("");
                let mut line = format!(
                    "{} guessed {} for {}: {}",
                    actor,
                    word,
                    target,
                    self.result.label()
                );
                if let Some(pos) = self.penalty_position {
                    line.push_str(&format!(" (penalty slot {})", pos + 1));
                }
                line
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub turns: u32,
    pub actions: usize,
    pub hits: usize,
    pub eliminated: usize,
}

/// Root aggregate, replaced wholesale by every transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub phase: GamePhase,
    /// Turn order once play begins
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub turn_number: u32,
    pub log: Vec<LogEntry>,
    pub winner: Option<PlayerId>,
    pub difficulty: Difficulty,
    pub pending_penalty: bool,
    pub penalty_player_id: Option<PlayerId>,
}

impl GameState {
    /// Fresh title-phase state with no players
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn human(&self) -> Option<&Player> {
        self.player(PlayerId::Human)
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_player().is_some_and(|p| p.id == PlayerId::Human)
    }

    /// Non-eliminated players other than `of`, in turn order
    pub fn active_opponents(&self, of: PlayerId) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.id != of && !p.eliminated)
            .collect()
    }

    pub fn remaining_players(&self) -> usize {
        self.players.iter().filter(|p| !p.eliminated).count()
    }

    /// Letters `actor` has asked `target` for, mapped to whether each was a hit
    pub fn asked_letters(&self, actor: PlayerId, target: PlayerId) -> BTreeMap<char, bool> {
        self.log
            .iter()
            .filter(|e| {
                e.action == ActionType::AskLetter && e.actor_id == actor && e.target_id == target
            })
            .filter_map(|e| Some((e.letter?, e.result == ActionResult::Hit)))
            .collect()
    }

    /// Totals for the game so far
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            turns: self.turn_number,
            actions: self.log.len(),
            hits: self
                .log
                .iter()
                .filter(|e| e.result == ActionResult::Hit)
                .count(),
            eliminated: self.players.len() - self.remaining_players(),
        }
    }

    /// True once every seat has a secret word
    pub fn all_words_set(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| !p.word.is_empty())
    }
}
