//! Computer player heuristics
//!
//! Every function here reads state and returns a recommendation; the reducer
//! is the only thing that changes the game. Randomness comes from the caller
//! so that decisions can be replayed with a seeded generator.

use super::actions::{self, Action};
use super::dictionary::Dictionary;
use super::{
    frequency_rank, is_vowel, Difficulty, GameState, Player, PlayerId, FREQUENCY_ORDER,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

/// Shortest pause before an AI move is dispatched
pub const THINK_DELAY_MIN: Duration = Duration::from_millis(800);
/// Longest pause before an AI move is dispatched
pub const THINK_DELAY_MAX: Duration = Duration::from_millis(1200);

/// Chance that the easy AI reaches for a vowel when one is left
const EASY_VOWEL_BIAS: f64 = 0.6;

/// Largest candidate list the hard AI will guess from
const HARD_GUESS_MAX_CANDIDATES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Asked to move with nobody left to target
    NoValidOpponents { player: PlayerId },
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoValidOpponents { player } => {
                write!(f, "AI {} has no valid opponents", player)
            }
        }
    }
}

impl std::error::Error for AiError {}

/// A move chosen for an AI player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiDecision {
    AskLetter { target_id: PlayerId, letter: char },
    GuessWord { target_id: PlayerId, guessed_word: String },
}

impl AiDecision {
    pub fn target_id(&self) -> PlayerId {
        match self {
            AiDecision::AskLetter { target_id, .. } | AiDecision::GuessWord { target_id, .. } => {
                *target_id
            }
        }
    }

    /// The reducer action that carries out this decision
    pub fn into_action(self, actor_id: PlayerId) -> Action {
        match self {
            AiDecision::AskLetter { target_id, letter } => {
                actions::ask_letter(actor_id, target_id, letter)
            }
            AiDecision::GuessWord {
                target_id,
                guessed_word,
            } => actions::guess_word(actor_id, target_id, &guessed_word),
        }
    }
}

/// Pick a secret word from the pool for `difficulty`.
///
/// Falls back to the easy pool when the difficulty pool is empty, and to the
/// whole dictionary after that.
pub fn choose_word<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    difficulty: Difficulty,
    rng: &mut R,
) -> String {
    let pool = word_pool(dictionary, difficulty);
    let pool = if pool.is_empty() {
        word_pool(dictionary, Difficulty::Easy)
    } else {
        pool
    };
    let pool = if pool.is_empty() {
        dictionary.words().collect()
    } else {
        pool
    };
    pool.choose(rng)
        .map(|w| w.to_uppercase())
        .unwrap_or_default()
}

fn word_pool(dictionary: &Dictionary, difficulty: Difficulty) -> Vec<&str> {
    difficulty
        .word_lengths()
        .flat_map(|len| dictionary.words_by_difficulty_and_length(difficulty, len))
        .collect()
}

/// Pick which letter of `word` starts out revealed.
///
/// Medium gives away the most common letter, hard the rarest; ties go to the
/// first occurrence.
pub fn choose_free_letter<R: Rng + ?Sized>(word: &str, difficulty: Difficulty, rng: &mut R) -> usize {
    let letters: Vec<char> = word.to_uppercase().chars().collect();
    if letters.is_empty() {
        return 0;
    }

    match difficulty {
        Difficulty::Easy => rng.random_range(0..letters.len()),
        Difficulty::Medium => {
            let mut best = 0;
            for (i, &c) in letters.iter().enumerate() {
                if frequency_rank(c) < frequency_rank(letters[best]) {
                    best = i;
                }
            }
            best
        }
        Difficulty::Hard => {
            let mut best = 0;
            for (i, &c) in letters.iter().enumerate() {
                if frequency_rank(c) > frequency_rank(letters[best]) {
                    best = i;
                }
            }
            best
        }
    }
}

/// Decide an AI player's move: guess a word when confident, otherwise ask a letter.
pub fn decide_turn<R: Rng + ?Sized>(
    state: &GameState,
    ai_player: &Player,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<AiDecision, AiError> {
    let opponents = state.active_opponents(ai_player.id);
    if opponents.is_empty() {
        return Err(AiError::NoValidOpponents {
            player: ai_player.id,
        });
    }

    let difficulty = ai_player.difficulty;
    if let Some(guess) = try_word_guess(ai_player, &opponents, dictionary, difficulty) {
        log::debug!("{} guesses against {}", ai_player.id, guess.target_id());
        return Ok(guess);
    }

    let target = choose_target(ai_player, &opponents, difficulty, rng);
    let letter = choose_letter(ai_player, target, difficulty, rng);
    log::debug!("{} asks {} for {}", ai_player.id, target.id, letter);
    Ok(AiDecision::AskLetter {
        target_id: target.id,
        letter,
    })
}

fn try_word_guess(
    ai_player: &Player,
    opponents: &[&Player],
    dictionary: &Dictionary,
    difficulty: Difficulty,
) -> Option<AiDecision> {
    opponents.iter().find_map(|opp| {
        let guessed_word = match difficulty {
            Difficulty::Easy => opp.is_fully_revealed().then(|| opp.word.clone()),
            Difficulty::Medium => {
                // at least 80% revealed
                if opp.revealed_count() * 5 >= opp.word.len() * 4 {
                    find_matching_word(ai_player, opp, dictionary)
                } else {
                    None
                }
            }
            Difficulty::Hard => {
                let candidates = &ai_player.track(opp.id)?.candidate_words;
                if (1..=HARD_GUESS_MAX_CANDIDATES).contains(&candidates.len()) {
                    Some(candidates[0].to_uppercase())
                } else {
                    None
                }
            }
        }?;
        Some(AiDecision::GuessWord {
            target_id: opp.id,
            guessed_word,
        })
    })
}

/// First dictionary word fitting the opponent's revealed pattern that has
/// not been guessed against them yet
fn find_matching_word(ai_player: &Player, opponent: &Player, dictionary: &Dictionary) -> Option<String> {
    let guessed = ai_player.track(opponent.id).map(|t| &t.guessed_words);
    dictionary
        .filter_candidates(
            opponent.word.len(),
            &opponent.known_positions(),
            &BTreeSet::new(),
            &BTreeSet::new(),
        )
        .into_iter()
        .find(|w| !guessed.is_some_and(|g| g.contains(w)))
}

fn choose_target<'a, R: Rng + ?Sized>(
    ai_player: &Player,
    opponents: &[&'a Player],
    difficulty: Difficulty,
    rng: &mut R,
) -> &'a Player {
    let first = opponents[0];
    match difficulty {
        Difficulty::Easy => opponents.choose(rng).copied().unwrap_or(first),
        Difficulty::Medium => opponents.iter().copied().fold(first, |best, opp| {
            if opp.revealed_count() > best.revealed_count() {
                opp
            } else {
                best
            }
        }),
        Difficulty::Hard => {
            if ai_player.ai_state.is_none() {
                return first;
            }
            let count = |p: &Player| {
                ai_player
                    .track(p.id)
                    .map_or(usize::MAX, |t| t.candidate_words.len())
            };
            opponents.iter().copied().fold(first, |best, opp| {
                if count(opp) < count(best) {
                    opp
                } else {
                    best
                }
            })
        }
    }
}

fn choose_letter<R: Rng + ?Sized>(
    ai_player: &Player,
    target: &Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> char {
    let track = ai_player.track(target.id);
    let asked = track.map(|t| &t.asked_letters);
    let was_asked = |c: &char| asked.is_some_and(|a| a.contains(c));
    let known = target.known_letters();

    let available: Vec<char> = ('A'..='Z')
        .filter(|c| !was_asked(c) && !known.contains(c))
        .collect();
    if available.is_empty() {
        return ('A'..='Z').find(|c| !was_asked(c)).unwrap_or('A');
    }

    match difficulty {
        Difficulty::Easy => {
            let vowels: Vec<char> = available.iter().copied().filter(|&c| is_vowel(c)).collect();
            let pool = if !vowels.is_empty() && rng.random_bool(EASY_VOWEL_BIAS) {
                &vowels
            } else {
                &available
            };
            pool.choose(rng).copied().unwrap_or(available[0])
        }
        Difficulty::Medium => most_frequent(&available),
        Difficulty::Hard => {
            let candidates = track.map(|t| t.candidate_words.as_slice()).unwrap_or(&[]);
            if candidates.is_empty() {
                return most_frequent(&available);
            }
            best_split(&available, candidates)
        }
    }
}

/// Most common letter in English among `available`
fn most_frequent(available: &[char]) -> char {
    FREQUENCY_ORDER
        .iter()
        .copied()
        .find(|c| available.contains(c))
        .unwrap_or(available[0])
}

/// Letter whose presence splits `candidates` closest to half and half
fn best_split(available: &[char], candidates: &[String]) -> char {
    let mut best = available[0];
    let mut best_score = usize::MAX;
    for &letter in available {
        let with = candidates.iter().filter(|w| w.contains(letter)).count();
        let without = candidates.len() - with;
        let score = with.abs_diff(without);
        if score < best_score {
            best_score = score;
            best = letter;
        }
    }
    best
}

/// Pick which of the player's own hidden letters to give up after a wrong guess.
pub fn choose_penalty_letter<R: Rng + ?Sized>(player: &Player, rng: &mut R) -> usize {
    let unrevealed = player.unrevealed_indices();
    if unrevealed.is_empty() {
        return 0;
    }

    match player.difficulty {
        Difficulty::Easy => unrevealed.choose(rng).copied().unwrap_or(unrevealed[0]),
        Difficulty::Medium | Difficulty::Hard => {
            let letters = player.letters();
            let mut best = unrevealed[0];
            for &i in &unrevealed {
                if frequency_rank(letters[i]) < frequency_rank(letters[best]) {
                    best = i;
                }
            }
            best
        }
    }
}

/// Random pause before an AI move, drawn from the thread generator.
pub fn think_delay() -> Duration {
    think_delay_with_rng(&mut rand::rng())
}

pub fn think_delay_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let min = THINK_DELAY_MIN.as_millis() as u64;
    let max = THINK_DELAY_MAX.as_millis() as u64;
    Duration::from_millis(rng.random_range(min..=max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::DictionaryEntry;
    use crate::game::{AiState, GamePhase, LetterTrack, Tier};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mock_dictionary() -> Dictionary {
        let words = [
            ("HELLO", Tier::Common),
            ("WORLD", Tier::Common),
            ("WORDS", Tier::Common),
            ("HEDGE", Tier::Common),
            ("HAPPY", Tier::Common),
            ("GAME", Tier::Common),
            ("BRAVE", Tier::Medium),
            ("QUEST", Tier::Medium),
            ("JOURNEY", Tier::Medium),
            ("ADVENTURE", Tier::Rare),
            ("BUTTERFLY", Tier::Rare),
        ];
        Dictionary::from_entries(words.iter().map(|(w, t)| DictionaryEntry::new(w, *t))).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn make_player(id: PlayerId, word: &str, mask: &[bool], difficulty: Difficulty) -> Player {
        let mut p = Player::new(id, difficulty);
        p.word = word.to_string();
        p.revealed_mask = mask.to_vec();
        p
    }

    fn track_everyone(ai: &mut Player, opponents: &[&Player]) {
        let mut ai_state = AiState::default();
        for opp in opponents {
            ai_state.letter_tracking.insert(opp.id, LetterTrack::default());
        }
        ai.ai_state = Some(ai_state);
    }

    fn make_state(players: Vec<Player>, current: usize) -> GameState {
        GameState {
            phase: GamePhase::Playing,
            players,
            current_player_index: current,
            turn_number: 1,
            ..GameState::new()
        }
    }

    #[test]
    fn test_choose_word_respects_difficulty_lengths() {
        let dict = Dictionary::bundled().unwrap();
        let mut rng = rng();
        for &difficulty in Difficulty::all() {
            for _ in 0..30 {
                let word = choose_word(&dict, difficulty, &mut rng);
                assert_eq!(word, word.to_uppercase());
                assert!(difficulty.word_lengths().contains(&word.len()), "{} for {:?}", word, difficulty);
            }
        }
    }

    #[test]
    fn test_choose_word_falls_back_to_easy_pool() {
        let dict = Dictionary::from_entries([
            DictionaryEntry::new("game", Tier::Common),
            DictionaryEntry::new("hello", Tier::Common),
        ])
        .unwrap();
        let mut rng = rng();
        for _ in 0..10 {
            let word = choose_word(&dict, Difficulty::Hard, &mut rng);
            assert!(word == "GAME" || word == "HELLO");
        }
    }

    #[test]
    fn test_free_letter_easy_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            assert!(choose_free_letter("HELLO", Difficulty::Easy, &mut rng) < 5);
        }
    }

    #[test]
    fn test_free_letter_medium_most_common() {
        // E ranks first in HELLO
        assert_eq!(choose_free_letter("HELLO", Difficulty::Medium, &mut rng()), 1);
        // E appears twice; the first wins
        assert_eq!(choose_free_letter("LETTER", Difficulty::Medium, &mut rng()), 1);
    }

    #[test]
    fn test_free_letter_hard_rarest() {
        // W is the rarest letter of WORLD
        assert_eq!(choose_free_letter("WORLD", Difficulty::Hard, &mut rng()), 0);
        assert_eq!(choose_free_letter("QUIZ", Difficulty::Hard, &mut rng()), 3);
    }

    #[test]
    fn test_decide_turn_without_opponents_fails() {
        let ai = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Medium);
        let mut human = make_player(PlayerId::Human, "WORLD", &[true; 5], Difficulty::Medium);
        human.eliminated = true;
        let state = make_state(vec![human, ai.clone()], 1);
        let err = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap_err();
        assert_eq!(err, AiError::NoValidOpponents { player: PlayerId::Ai1 });
        assert_eq!(err.to_string(), "AI ai-1 has no valid opponents");
    }

    #[test]
    fn test_easy_guesses_fully_revealed_word() {
        let human = make_player(PlayerId::Human, "WORLD", &[true; 5], Difficulty::Easy);
        let ai = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Easy);
        let state = make_state(vec![human, ai.clone()], 1);
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        assert_eq!(
            decision,
            AiDecision::GuessWord {
                target_id: PlayerId::Human,
                guessed_word: "WORLD".to_string()
            }
        );
    }

    #[test]
    fn test_easy_asks_when_not_confident() {
        let human = make_player(PlayerId::Human, "WORLD", &[true, true, false, false, false], Difficulty::Easy);
        let ai = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Easy);
        let state = make_state(vec![human, ai.clone()], 1);
        let mut rng = rng();
        for _ in 0..20 {
            match decide_turn(&state, &ai, &mock_dictionary(), &mut rng).unwrap() {
                AiDecision::AskLetter { target_id, letter } => {
                    assert_eq!(target_id, PlayerId::Human);
                    assert!(letter.is_ascii_uppercase());
                    assert!(letter != 'W' && letter != 'O');
                }
                other => panic!("Expected AskLetter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_medium_guesses_matching_pattern() {
        let human = make_player(PlayerId::Human, "WORLD", &[true, true, true, true, false], Difficulty::Medium);
        let mut ai = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Medium);
        track_everyone(&mut ai, &[&human]);
        let state = make_state(vec![human, ai.clone()], 1);
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        assert_eq!(
            decision,
            AiDecision::GuessWord {
                target_id: PlayerId::Human,
                guessed_word: "WORLD".to_string()
            }
        );
    }

    #[test]
    fn test_medium_skips_already_guessed_words() {
        let human = make_player(PlayerId::Human, "WORDS", &[true, true, true, false, true], Difficulty::Medium);
        let mut ai = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Medium);
        track_everyone(&mut ai, &[&human]);
        let state = make_state(vec![human.clone(), ai.clone()], 1);
        // WOR_S only fits WORDS
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        assert_eq!(decision.target_id(), PlayerId::Human);
        assert!(matches!(decision, AiDecision::GuessWord { ref guessed_word, .. } if guessed_word == "WORDS"));

        if let Some(ai_state) = ai.ai_state.as_mut() {
            ai_state
                .letter_tracking
                .get_mut(&PlayerId::Human)
                .unwrap()
                .guessed_words
                .insert("WORDS".to_string());
        }
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        assert!(matches!(decision, AiDecision::AskLetter { .. }));
    }

    #[test]
    fn test_medium_targets_most_revealed() {
        let human = make_player(PlayerId::Human, "WORLD", &[true, true, true, false, false], Difficulty::Medium);
        let ai2 = make_player(PlayerId::Ai2, "BRAVE", &[true, false, false, false, false], Difficulty::Medium);
        let mut ai = make_player(PlayerId::Ai1, "HELLO", &[false, true, false, false, false], Difficulty::Medium);
        track_everyone(&mut ai, &[&human, &ai2]);
        let state = make_state(vec![human, ai.clone(), ai2], 1);
        let mut rng = rng();
        for _ in 0..20 {
            let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng).unwrap();
            assert_eq!(decision.target_id(), PlayerId::Human);
        }
    }

    #[test]
    fn test_medium_asks_most_frequent_unasked_letter() {
        let human = make_player(PlayerId::Human, "WORLD", &[false, false, false, true, false], Difficulty::Medium);
        let mut ai = make_player(PlayerId::Ai1, "HELLO", &[false, true, false, false, false], Difficulty::Medium);
        track_everyone(&mut ai, &[&human]);
        if let Some(ai_state) = ai.ai_state.as_mut() {
            let track = ai_state.letter_tracking.get_mut(&PlayerId::Human).unwrap();
            track.asked_letters.extend(['E', 'T']);
        }
        let state = make_state(vec![human, ai.clone()], 1);
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        assert_eq!(
            decision,
            AiDecision::AskLetter {
                target_id: PlayerId::Human,
                letter: 'A'
            }
        );
    }

    #[test]
    fn test_hard_guesses_small_candidate_list() {
        let human = make_player(PlayerId::Human, "HELLO", &[true, false, false, false, false], Difficulty::Hard);
        let mut ai = make_player(PlayerId::Ai1, "WORLD", &[true, false, false, false, false], Difficulty::Hard);
        track_everyone(&mut ai, &[&human]);
        if let Some(ai_state) = ai.ai_state.as_mut() {
            ai_state.letter_tracking.get_mut(&PlayerId::Human).unwrap().candidate_words =
                vec!["HEDGE".to_string(), "HELLO".to_string()];
        }
        let state = make_state(vec![human, ai.clone()], 1);
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        assert_eq!(
            decision,
            AiDecision::GuessWord {
                target_id: PlayerId::Human,
                guessed_word: "HEDGE".to_string()
            }
        );
    }

    #[test]
    fn test_hard_does_not_guess_with_zero_candidates() {
        let human = make_player(PlayerId::Human, "HELLO", &[true, false, false, false, false], Difficulty::Hard);
        let mut ai = make_player(PlayerId::Ai1, "WORLD", &[true, false, false, false, false], Difficulty::Hard);
        track_everyone(&mut ai, &[&human]);
        let state = make_state(vec![human, ai.clone()], 1);
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        // no candidates tracked: falls back to frequency order, H is known
        assert_eq!(
            decision,
            AiDecision::AskLetter {
                target_id: PlayerId::Human,
                letter: 'E'
            }
        );
    }

    #[test]
    fn test_hard_targets_fewest_candidates_and_splits_evenly() {
        let human = make_player(PlayerId::Human, "HELLO", &[true, false, false, false, false], Difficulty::Hard);
        let ai2 = make_player(PlayerId::Ai2, "BRAVE", &[true, false, false, false, false], Difficulty::Hard);
        let mut ai = make_player(PlayerId::Ai1, "WORLD", &[true, false, false, false, false], Difficulty::Hard);
        track_everyone(&mut ai, &[&human, &ai2]);
        if let Some(ai_state) = ai.ai_state.as_mut() {
            let tracking = &mut ai_state.letter_tracking;
            tracking.get_mut(&PlayerId::Human).unwrap().candidate_words = ["HELLO", "HEDGE", "HAPPY", "HOUSE", "HUMAN"]
                .iter()
                .map(|w| w.to_string())
                .collect();
            tracking.get_mut(&PlayerId::Ai2).unwrap().candidate_words = ["BRAVE", "BREAD", "BRICK", "BROOK"]
                .iter()
                .map(|w| w.to_string())
                .collect();
        }
        let state = make_state(vec![human, ai.clone(), ai2], 1);
        let decision = decide_turn(&state, &ai, &mock_dictionary(), &mut rng()).unwrap();
        // BRAVE/BREAD/BRICK/BROOK: A and E each split 2-2; A comes first
        assert_eq!(
            decision,
            AiDecision::AskLetter {
                target_id: PlayerId::Ai2,
                letter: 'A'
            }
        );
    }

    #[test]
    fn test_exhausted_letters_fall_back() {
        let human = make_player(PlayerId::Human, "WORLD", &[false; 5], Difficulty::Medium);
        let mut ai = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Medium);
        track_everyone(&mut ai, &[&human]);
        if let Some(ai_state) = ai.ai_state.as_mut() {
            let track = ai_state.letter_tracking.get_mut(&PlayerId::Human).unwrap();
            track.asked_letters.extend('A'..='Z');
        }
        assert_eq!(choose_letter(&ai, &human, Difficulty::Medium, &mut rng()), 'A');
    }

    #[test]
    fn test_penalty_easy_picks_unrevealed() {
        let player = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, true], Difficulty::Easy);
        let mut rng = rng();
        for _ in 0..20 {
            let idx = choose_penalty_letter(&player, &mut rng);
            assert!([1, 2, 3].contains(&idx));
        }
    }

    #[test]
    fn test_penalty_medium_reveals_most_common() {
        let player = make_player(PlayerId::Ai1, "HELLO", &[true, false, false, false, false], Difficulty::Medium);
        assert_eq!(choose_penalty_letter(&player, &mut rng()), 1);
    }

    #[test]
    fn test_penalty_fully_revealed_falls_back_to_zero() {
        let player = make_player(PlayerId::Ai1, "HELLO", &[true; 5], Difficulty::Hard);
        assert_eq!(choose_penalty_letter(&player, &mut rng()), 0);
    }

    #[test]
    fn test_think_delay_in_range() {
        for _ in 0..50 {
            let delay = think_delay();
            assert!(delay >= THINK_DELAY_MIN && delay <= THINK_DELAY_MAX);
        }
    }

    #[test]
    fn test_decision_into_action() {
        let action = AiDecision::AskLetter {
            target_id: PlayerId::Human,
            letter: 'e',
        }
        .into_action(PlayerId::Ai3);
        assert_eq!(action, actions::ask_letter(PlayerId::Ai3, PlayerId::Human, 'E'));
    }
}
