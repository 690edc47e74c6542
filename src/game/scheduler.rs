//! Paces computer turns
//!
//! When the player to move is an AI, the scheduler arms a single pending
//! dispatch after a think delay. Any change to the observed turn, or a pause,
//! discards it before it can fire into a stale state.

use super::actions::{self, Action};
use super::ai::{choose_penalty_letter, decide_turn, think_delay_with_rng};
use super::dictionary::Dictionary;
use super::{GamePhase, GameState, PlayerId};
use rand::Rng;
use std::time::Instant;

/// Identifies one AI decision point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DecisionPoint {
    player: PlayerId,
    turn_number: u32,
    log_len: usize,
    pending_penalty: bool,
}

impl DecisionPoint {
    fn of(state: &GameState) -> Option<Self> {
        if state.phase != GamePhase::Playing {
            return None;
        }
        let player = state.current_player()?;
        if !player.is_ai {
            return None;
        }
        if state.pending_penalty && state.penalty_player_id != Some(player.id) {
            return None;
        }
        Some(Self {
            player: player.id,
            turn_number: state.turn_number,
            log_len: state.log.len(),
            pending_penalty: state.pending_penalty,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    point: DecisionPoint,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct TurnScheduler {
    pending: Option<Pending>,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("pending AI move cancelled");
        }
    }

    /// Arm a dispatch for a new AI decision point, or cancel a stale one.
    pub fn observe<R: Rng + ?Sized>(
        &mut self,
        state: &GameState,
        paused: bool,
        now: Instant,
        rng: &mut R,
    ) {
        let point = match DecisionPoint::of(state) {
            Some(point) if !paused => point,
            _ => return self.cancel(),
        };
        if self.pending.is_some_and(|p| p.point == point) {
            return;
        }
        let delay = think_delay_with_rng(rng);
        log::debug!("{} thinking for {:?}", point.player, delay);
        self.pending = Some(Pending {
            point,
            due: now + delay,
        });
    }

    /// The AI's action once its delay has elapsed.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        state: &GameState,
        now: Instant,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Option<Action> {
        let pending = self.pending?;
        if DecisionPoint::of(state) != Some(pending.point) {
            self.cancel();
            return None;
        }
        if now < pending.due {
            return None;
        }
        self.pending = None;
        plan_ai_action(state, dictionary, rng)
    }
}

/// Action for the AI whose turn it is: a penalty pick if one is owed,
/// otherwise its chosen move. A failed decision is logged and the turn skipped.
pub fn plan_ai_action<R: Rng + ?Sized>(
    state: &GameState,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Option<Action> {
    let player = state.current_player()?;
    if !player.is_ai {
        return None;
    }

    if state.pending_penalty {
        if state.penalty_player_id != Some(player.id) {
            return None;
        }
        let index = choose_penalty_letter(player, rng);
        return Some(actions::choose_penalty(player.id, index));
    }

    match decide_turn(state, player, dictionary, rng) {
        Ok(decision) => Some(decision.into_action(player.id)),
        Err(e) => {
            log::error!("{}; skipping turn", e);
            Some(actions::next_turn())
        }
    }
}
