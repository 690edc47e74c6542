//! Game state machine
//!
//! [`Reducer::reduce`] maps a state and an action to the next state. States
//! are shared behind [`Arc`]; an action that does not apply to the current
//! state hands back the very same `Arc`, so callers can detect no-ops with
//! [`Arc::ptr_eq`].

use super::actions::Action;
use super::dictionary::Dictionary;
use super::{
    ActionResult, ActionType, AiState, Difficulty, GamePhase, GameState, LetterTrack, LogEntry,
    Player, PlayerId,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Applies actions to game states.
///
/// Owns the dictionary used to keep hard AI candidate lists current and the
/// random source used to shuffle turn order.
pub struct Reducer<R = StdRng> {
    dictionary: Arc<Dictionary>,
    rng: R,
}

/// Index of the next non-eliminated player after `current`, wrapping.
/// Returns `current` when every other player is eliminated.
pub fn next_active_player(players: &[Player], current: usize) -> usize {
    let count = players.len();
    if count == 0 {
        return current;
    }
    let mut next = (current + 1) % count;
    while players[next].eliminated && next != current {
        next = (next + 1) % count;
    }
    next
}

/// The only player left standing, if exactly one remains
fn find_winner(players: &[Player]) -> Option<PlayerId> {
    let mut remaining = players.iter().filter(|p| !p.eliminated);
    match (remaining.next(), remaining.next()) {
        (Some(p), None) => Some(p.id),
        _ => None,
    }
}

/// Recompute a track's candidate list from what is public about `target`.
///
/// Asked letters absent from every revealed slot are excluded, revealed asked
/// letters are required, and since an ask uncovers every occurrence, no asked
/// letter may sit in a hidden slot. Already guessed words are dropped.
pub fn refresh_candidates(dictionary: &Dictionary, target: &Player, track: &mut LetterTrack) {
    let known = target.known_positions();
    let revealed: BTreeSet<char> = known.values().copied().collect();
    let excluded: BTreeSet<char> = track.asked_letters.difference(&revealed).copied().collect();
    let required: BTreeSet<char> = track.asked_letters.intersection(&revealed).copied().collect();
    let hidden = target.unrevealed_indices();

    track.candidate_words = dictionary
        .filter_candidates(target.word.len(), &known, &excluded, &required)
        .into_iter()
        .filter(|word| !track.guessed_words.contains(word))
        .filter(|word| {
            let letters: Vec<char> = word.chars().collect();
            hidden
                .iter()
                .all(|&i| !track.asked_letters.contains(&letters[i]))
        })
        .collect();
}

impl<R: Rng> Reducer<R> {
    pub fn new(dictionary: Arc<Dictionary>, rng: R) -> Self {
        Self { dictionary, rng }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Apply an action, returning the successor state.
    pub fn reduce(&mut self, state: &Arc<GameState>, action: Action) -> Arc<GameState> {
        let kind = action.kind();
        let next = match action {
            Action::StartGame { difficulty } => start_game(state, difficulty),
            Action::SetWord {
                player_id,
                word,
                free_letter_index,
            } => set_word(state, player_id, &word, free_letter_index),
            Action::BeginPlay => self.begin_play(state),
            Action::AskLetter {
                actor_id,
                target_id,
                letter,
            } => self.ask_letter(state, actor_id, target_id, letter),
            Action::GuessWord {
                actor_id,
                target_id,
                guessed_word,
            } => guess_word(state, actor_id, target_id, &guessed_word),
            Action::ChoosePenalty {
                player_id,
                letter_index,
            } => self.choose_penalty(state, player_id, letter_index),
            Action::NextTurn => next_turn(state),
            Action::Reset => Some(GameState::new()),
        };

        match next {
            Some(next) => {
                log::debug!(
                    "{} applied: phase {:?}, turn {}, player index {}",
                    kind,
                    next.phase,
                    next.turn_number,
                    next.current_player_index
                );
                Arc::new(next)
            }
            None => {
                log::debug!("{} ignored in phase {:?}", kind, state.phase);
                Arc::clone(state)
            }
        }
    }

    fn begin_play(&mut self, state: &GameState) -> Option<GameState> {
        if state.phase != GamePhase::WordSelection || !state.all_words_set() {
            return None;
        }

        let mut players = state.players.clone();
        players.shuffle(&mut self.rng);

        let opponents = players.clone();
        for player in players.iter_mut().filter(|p| p.is_ai) {
            let mut ai_state = AiState::default();
            for opponent in opponents.iter().filter(|o| o.id != player.id) {
                let mut track = LetterTrack::default();
                if state.difficulty == Difficulty::Hard {
                    refresh_candidates(&self.dictionary, opponent, &mut track);
                }
                ai_state.letter_tracking.insert(opponent.id, track);
            }
            player.ai_state = Some(ai_state);
        }

        log::info!(
            "play begins: order {:?}",
            players.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
        );

        Some(GameState {
            phase: GamePhase::Playing,
            players,
            current_player_index: 0,
            turn_number: 1,
            ..state.clone()
        })
    }

    fn ask_letter(
        &self,
        state: &GameState,
        actor_id: PlayerId,
        target_id: PlayerId,
        letter: char,
    ) -> Option<GameState> {
        let target_index = turn_target(state, actor_id, target_id)?;
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let letter = letter.to_ascii_uppercase();

        let mut next = state.clone();
        let target = &mut next.players[target_index];
        let revealed_positions: Vec<usize> = target
            .word
            .chars()
            .enumerate()
            .filter(|&(i, c)| c == letter && !target.revealed_mask[i])
            .map(|(i, _)| i)
            .collect();
        let is_hit = !revealed_positions.is_empty();
        for &pos in &revealed_positions {
            target.revealed_mask[pos] = true;
        }

        let target = next.players[target_index].clone();
        let hard = state.difficulty == Difficulty::Hard;
        for player in next.players.iter_mut() {
            if !(player.id == actor_id || hard) {
                continue;
            }
            let Some(track) = player
                .ai_state
                .as_mut()
                .and_then(|ai| ai.letter_tracking.get_mut(&target_id))
            else {
                continue;
            };
            track.asked_letters.insert(letter);
            if hard {
                refresh_candidates(&self.dictionary, &target, track);
            }
        }

        next.log.push(LogEntry {
            turn: state.turn_number,
            actor_id,
            action: ActionType::AskLetter,
            target_id,
            letter: Some(letter),
            guessed_word: None,
            result: if is_hit {
                ActionResult::Hit
            } else {
                ActionResult::Miss
            },
            revealed_positions: is_hit.then_some(revealed_positions),
            penalty_position: None,
        });

        if !is_hit {
            next.current_player_index = next_active_player(&next.players, state.current_player_index);
            next.turn_number += 1;
        }
        Some(next)
    }

    fn choose_penalty(
        &self,
        state: &GameState,
        player_id: PlayerId,
        letter_index: usize,
    ) -> Option<GameState> {
        if state.phase != GamePhase::Playing
            || !state.pending_penalty
            || state.penalty_player_id != Some(player_id)
        {
            return None;
        }
        let index = state.player_index(player_id)?;
        if letter_index >= state.players[index].revealed_mask.len() {
            return None;
        }

        let mut next = state.clone();
        next.players[index].revealed_mask[letter_index] = true;

        if state.difficulty == Difficulty::Hard {
            let penalized = next.players[index].clone();
            for player in next.players.iter_mut() {
                if let Some(track) = player
                    .ai_state
                    .as_mut()
                    .and_then(|ai| ai.letter_tracking.get_mut(&player_id))
                {
                    refresh_candidates(&self.dictionary, &penalized, track);
                }
            }
        }

        if let Some(last) = next.log.last_mut() {
            if last.result == ActionResult::WrongGuess {
                last.penalty_position = Some(letter_index);
            }
        }

        next.pending_penalty = false;
        next.penalty_player_id = None;
        next.current_player_index = next_active_player(&next.players, state.current_player_index);
        next.turn_number += 1;
        Some(next)
    }
}

/// Index of `target_id` when `actor_id` may act against it right now.
fn turn_target(state: &GameState, actor_id: PlayerId, target_id: PlayerId) -> Option<usize> {
    if state.phase != GamePhase::Playing || state.pending_penalty || actor_id == target_id {
        return None;
    }
    if state.current_player()?.id != actor_id {
        return None;
    }
    let index = state.player_index(target_id)?;
    (!state.players[index].eliminated).then_some(index)
}

fn start_game(state: &GameState, difficulty: Difficulty) -> Option<GameState> {
    if !matches!(state.phase, GamePhase::Title | GamePhase::Finished) {
        return None;
    }
    let players = PlayerId::all()
        .iter()
        .map(|&id| Player::new(id, difficulty))
        .collect();
    log::info!("new game on {}", difficulty.label());
    Some(GameState {
        phase: GamePhase::WordSelection,
        players,
        current_player_index: 0,
        turn_number: 0,
        log: Vec::new(),
        winner: None,
        difficulty,
        pending_penalty: false,
        penalty_player_id: None,
    })
}

fn set_word(
    state: &GameState,
    player_id: PlayerId,
    word: &str,
    free_letter_index: usize,
) -> Option<GameState> {
    if state.phase != GamePhase::WordSelection || free_letter_index >= word.len() {
        return None;
    }
    let index = state.player_index(player_id)?;

    let mut next = state.clone();
    let player = &mut next.players[index];
    player.word = word.to_uppercase();
    player.revealed_mask = vec![false; player.word.len()];
    player.revealed_mask[free_letter_index] = true;
    player.free_letter_index = Some(free_letter_index);
    Some(next)
}

fn guess_word(
    state: &GameState,
    actor_id: PlayerId,
    target_id: PlayerId,
    guessed_word: &str,
) -> Option<GameState> {
    let target_index = turn_target(state, actor_id, target_id)?;
    let guessed_word = guessed_word.to_uppercase();
    let is_correct = guessed_word == state.players[target_index].word;

    let mut next = state.clone();
    for player in next.players.iter_mut() {
        if let Some(track) = player
            .ai_state
            .as_mut()
            .and_then(|ai| ai.letter_tracking.get_mut(&target_id))
        {
            track.guessed_words.insert(guessed_word.clone());
            track.candidate_words.retain(|w| *w != guessed_word);
        }
    }

    next.log.push(LogEntry {
        turn: state.turn_number,
        actor_id,
        action: ActionType::GuessWord,
        target_id,
        letter: None,
        guessed_word: Some(guessed_word),
        result: if is_correct {
            ActionResult::CorrectGuess
        } else {
            ActionResult::WrongGuess
        },
        revealed_positions: None,
        penalty_position: None,
    });

    if is_correct {
        let target = &mut next.players[target_index];
        target.eliminated = true;
        target.revealed_mask.iter_mut().for_each(|r| *r = true);
        log::info!("{} eliminated {}", actor_id, target_id);

        if let Some(winner) = find_winner(&next.players) {
            log::info!("{} wins on turn {}", winner, next.turn_number);
            next.winner = Some(winner);
            next.phase = GamePhase::Finished;
        }
    } else {
        next.pending_penalty = true;
        next.penalty_player_id = Some(actor_id);
    }
    Some(next)
}

fn next_turn(state: &GameState) -> Option<GameState> {
    if state.phase != GamePhase::Playing || state.pending_penalty {
        return None;
    }
    let mut next = state.clone();
    next.current_player_index = next_active_player(&state.players, state.current_player_index);
    next.turn_number += 1;
    Some(next)
}
