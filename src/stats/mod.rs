//! Session statistics
//!
//! Tracks the human player's results for as long as the process runs:
//! - Games played and won
//! - Current and best win streak

use crate::game::{GamePhase, GameState, PlayerId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
    /// Consecutive wins ending with the most recent game
    pub win_streak: u32,
    pub best_win_streak: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one finished game.
    pub fn record(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            self.win_streak += 1;
            self.best_win_streak = self.best_win_streak.max(self.win_streak);
        } else {
            self.win_streak = 0;
        }
        log::info!(
            "game recorded: won={} ({}/{} wins, streak {})",
            won,
            self.games_won,
            self.games_played,
            self.win_streak
        );
    }

    /// Record a finished game from its final state. Returns whether the
    /// human won, or None if the game has not finished.
    pub fn record_game(&mut self, state: &GameState) -> Option<bool> {
        if state.phase != GamePhase::Finished {
            return None;
        }
        let won = state.winner == Some(PlayerId::Human);
        self.record(won);
        Some(won)
    }

    /// Fraction of games won (0.0 when nothing has been played)
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64
        }
    }

    pub fn losses(&self) -> u32 {
        self.games_played - self.games_won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_empty() {
        let stats = SessionStats::new();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn test_streaks() {
        let mut stats = SessionStats::new();
        stats.record(true);
        stats.record(true);
        stats.record(true);
        assert_eq!(stats.win_streak, 3);
        assert_eq!(stats.best_win_streak, 3);

        stats.record(false);
        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.best_win_streak, 3);

        stats.record(true);
        assert_eq!(stats.win_streak, 1);
        assert_eq!(stats.best_win_streak, 3);
        assert_eq!(stats.games_played, 5);
        assert_eq!(stats.games_won, 4);
        assert_eq!(stats.losses(), 1);
    }

    #[test]
    fn test_win_rate() {
        let mut stats = SessionStats::new();
        stats.record(true);
        stats.record(false);
        stats.record(false);
        stats.record(true);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_game_requires_finished_state() {
        let mut stats = SessionStats::new();
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        assert_eq!(stats.record_game(&state), None);
        assert_eq!(stats.games_played, 0);

        state.phase = GamePhase::Finished;
        state.winner = Some(PlayerId::Ai2);
        assert_eq!(stats.record_game(&state), Some(false));

        state.winner = Some(PlayerId::Human);
        assert_eq!(stats.record_game(&state), Some(true));
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
    }
}
