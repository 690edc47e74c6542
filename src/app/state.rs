//! Application state and input handling
//!
//! [`App`] owns the current game state and feeds every change through the
//! reducer. Key handlers translate input into actions for the screen that is
//! showing; [`App::tick`] lets the turn scheduler play the computer seats.

use super::screen::{InputMode, MenuOption, Screen};
use crate::game::actions::{self, Action};
use crate::game::ai::{choose_free_letter, choose_word};
use crate::game::dictionary::Dictionary;
use crate::game::reducer::Reducer;
use crate::game::scheduler::TurnScheduler;
use crate::game::validation::{validate_guess, validate_secret_word};
use crate::game::{Difficulty, GamePhase, GameState, PlayerId, MAX_WORD_LENGTH};
use crate::stats::SessionStats;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Instant;

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current game state, replaced by every applied action
    pub state: Arc<GameState>,
    reducer: Reducer<StdRng>,
    /// Randomness for AI word picks, think delays and AI decisions
    rng: StdRng,
    scheduler: TurnScheduler,
    pub stats: SessionStats,
    /// Highlighted title menu entry
    pub menu_selected: usize,
    /// Rules overlay; computer turns are paused while it is open
    pub show_rules: bool,
    /// Secret word being typed on the word selection screen
    pub word_input: String,
    pub free_letter_index: usize,
    pub input_mode: InputMode,
    pub guess_input: String,
    selected_target: Option<PlayerId>,
    penalty_cursor: usize,
    /// Message from the last human action
    pub feedback: String,
}

impl App {
    /// Create an app at the title screen. `reducer_rng` shuffles turn order,
    /// `rng` drives the computer players.
    pub fn new(
        dictionary: Arc<Dictionary>,
        difficulty: Difficulty,
        reducer_rng: StdRng,
        rng: StdRng,
    ) -> Self {
        Self {
            should_quit: false,
            state: Arc::new(GameState::new()),
            reducer: Reducer::new(dictionary, reducer_rng),
            rng,
            scheduler: TurnScheduler::new(),
            stats: SessionStats::new(),
            menu_selected: MenuOption::index_of(difficulty),
            show_rules: false,
            word_input: String::new(),
            free_letter_index: 0,
            input_mode: InputMode::Ask,
            guess_input: String::new(),
            selected_target: None,
            penalty_cursor: 0,
            feedback: String::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::from(self.state.phase)
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.reducer.dictionary()
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_rules(&mut self) {
        self.show_rules = !self.show_rules;
    }

    /// Apply an action. Returns false when the reducer ignored it.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let prev_phase = self.state.phase;
        let next = self.reducer.reduce(&self.state, action);
        if Arc::ptr_eq(&next, &self.state) {
            return false;
        }
        self.state = next;
        if self.state.phase != prev_phase {
            self.on_phase_change();
        }
        true
    }

    fn on_phase_change(&mut self) {
        self.clear_inputs();
        match self.state.phase {
            GamePhase::WordSelection => self.choose_ai_words(),
            GamePhase::Finished => {
                if let Some(won) = self.stats.record_game(&self.state) {
                    self.feedback = if won {
                        "You cracked every word!".to_string()
                    } else {
                        "Better luck next time".to_string()
                    };
                }
            }
            GamePhase::Title | GamePhase::Playing => {}
        }
    }

    fn clear_inputs(&mut self) {
        self.word_input.clear();
        self.free_letter_index = 0;
        self.input_mode = InputMode::Ask;
        self.guess_input.clear();
        self.selected_target = None;
        self.penalty_cursor = 0;
        self.feedback.clear();
    }

    fn choose_ai_words(&mut self) {
        let picks: Vec<(PlayerId, String, usize)> = self
            .state
            .players
            .iter()
            .filter(|p| p.is_ai)
            .map(|p| {
                let word = choose_word(self.reducer.dictionary(), p.difficulty, &mut self.rng);
                let free = choose_free_letter(&word, p.difficulty, &mut self.rng);
                (p.id, word, free)
            })
            .collect();
        for (id, word, free) in picks {
            log::debug!("{} picked a {}-letter word", id, word.len());
            self.dispatch(actions::set_word(id, &word, free));
        }
    }

    /// Let the scheduler play a computer turn once its think delay is over.
    pub fn tick(&mut self, now: Instant) {
        self.scheduler
            .observe(&self.state, self.show_rules, now, &mut self.rng);
        if let Some(action) =
            self.scheduler
                .poll(&self.state, now, self.reducer.dictionary(), &mut self.rng)
        {
            self.dispatch(action);
        }
    }

    // Keys

    /// Handle a letter key
    pub fn on_char(&mut self, c: char) {
        if self.show_rules || !c.is_ascii_alphabetic() {
            return;
        }
        let c = c.to_ascii_uppercase();
        match self.screen() {
            Screen::WordSelection => {
                if self.word_input.len() < MAX_WORD_LENGTH {
                    self.word_input.push(c);
                    self.feedback.clear();
                }
            }
            Screen::Playing if self.can_act() => match self.input_mode {
                InputMode::Ask => self.ask(c),
                InputMode::Guess => {
                    if self.guess_input.len() < MAX_WORD_LENGTH {
                        self.guess_input.push(c);
                        self.feedback.clear();
                    }
                }
            },
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        if self.show_rules {
            return;
        }
        match self.screen() {
            Screen::WordSelection => {
                self.word_input.pop();
                self.clamp_free_letter();
                self.feedback.clear();
            }
            Screen::Playing if self.input_mode == InputMode::Guess => {
                self.guess_input.pop();
                self.feedback.clear();
            }
            _ => {}
        }
    }

    pub fn on_enter(&mut self) {
        if self.show_rules {
            return;
        }
        match self.screen() {
            Screen::Title => self.menu_select(),
            Screen::WordSelection => self.submit_word(),
            Screen::Playing if self.owes_penalty() => self.submit_penalty(),
            Screen::Playing if self.can_act() && self.input_mode == InputMode::Guess => {
                self.submit_guess()
            }
            Screen::Results => {
                let difficulty = self.state.difficulty;
                self.dispatch(actions::start_game(difficulty));
            }
            _ => {}
        }
    }

    /// Tab suggests a word during selection and switches ask/guess in play
    pub fn on_tab(&mut self) {
        if self.show_rules {
            return;
        }
        match self.screen() {
            Screen::WordSelection => self.suggest_word(),
            Screen::Playing => {
                self.input_mode = self.input_mode.toggled();
                self.guess_input.clear();
                self.feedback.clear();
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        self.on_horizontal(false);
    }

    pub fn on_right(&mut self) {
        self.on_horizontal(true);
    }

    fn on_horizontal(&mut self, forward: bool) {
        if self.show_rules {
            return;
        }
        match self.screen() {
            Screen::WordSelection => {
                let len = self.word_input.len();
                if len == 0 {
                    return;
                }
                self.free_letter_index = if forward {
                    (self.free_letter_index + 1) % len
                } else {
                    (self.free_letter_index + len - 1) % len
                };
            }
            Screen::Playing if self.owes_penalty() => {
                let count = self.penalty_choices().len();
                if count > 0 {
                    let cursor = self.penalty_cursor.min(count - 1);
                    self.penalty_cursor = if forward {
                        (cursor + 1) % count
                    } else {
                        (cursor + count - 1) % count
                    };
                }
            }
            Screen::Playing => self.cycle_target(forward),
            _ => {}
        }
    }

    pub fn on_up(&mut self) {
        if self.screen() == Screen::Title && !self.show_rules && self.menu_selected > 0 {
            self.menu_selected -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.screen() == Screen::Title
            && !self.show_rules
            && self.menu_selected < MenuOption::all().len() - 1
        {
            self.menu_selected += 1;
        }
    }

    /// Esc closes the rules, leaves a game, or quits from the title screen
    pub fn on_escape(&mut self) {
        if self.show_rules {
            self.show_rules = false;
            return;
        }
        match self.screen() {
            Screen::Title => self.quit(),
            _ => {
                self.dispatch(actions::reset());
            }
        }
    }

    // Title

    fn menu_select(&mut self) {
        match MenuOption::all().get(self.menu_selected) {
            Some(MenuOption::Play(difficulty)) => {
                self.dispatch(actions::start_game(*difficulty));
            }
            Some(MenuOption::Rules) => self.show_rules = true,
            Some(MenuOption::Quit) => self.quit(),
            None => {}
        }
    }

    // Word selection

    fn clamp_free_letter(&mut self) {
        let len = self.word_input.len();
        if self.free_letter_index >= len {
            self.free_letter_index = len.saturating_sub(1);
        }
    }

    fn suggest_word(&mut self) {
        let difficulty = self.state.difficulty;
        let word = choose_word(self.reducer.dictionary(), difficulty, &mut self.rng);
        self.free_letter_index = choose_free_letter(&word, difficulty, &mut self.rng);
        self.word_input = word;
        self.feedback.clear();
    }

    fn submit_word(&mut self) {
        let result = validate_secret_word(&self.word_input, self.reducer.dictionary());
        if !result.is_valid() {
            self.feedback = result.message();
            return;
        }
        let word = self.word_input.clone();
        if !self.dispatch(actions::set_word(PlayerId::Human, &word, self.free_letter_index)) {
            self.feedback = "Could not use that word".to_string();
            return;
        }
        self.dispatch(actions::begin_play());
    }

    // Play

    /// True when the human may ask or guess right now
    pub fn can_act(&self) -> bool {
        self.state.phase == GamePhase::Playing
            && self.state.is_human_turn()
            && !self.state.pending_penalty
    }

    /// True when the human must give up one of their own letters
    pub fn owes_penalty(&self) -> bool {
        self.state.phase == GamePhase::Playing
            && self.state.pending_penalty
            && self.state.penalty_player_id == Some(PlayerId::Human)
    }

    /// Positions of the human's word that can still be revealed
    pub fn penalty_choices(&self) -> Vec<usize> {
        self.state
            .human()
            .map(|p| p.unrevealed_indices())
            .unwrap_or_default()
    }

    /// Letter position under the penalty cursor
    pub fn penalty_selection(&self) -> Option<usize> {
        let choices = self.penalty_choices();
        let cursor = self.penalty_cursor.min(choices.len().saturating_sub(1));
        choices.get(cursor).copied()
    }

    /// Opponent the human is aiming at
    pub fn target(&self) -> Option<PlayerId> {
        let opponents = self.state.active_opponents(PlayerId::Human);
        self.selected_target
            .filter(|id| opponents.iter().any(|p| p.id == *id))
            .or_else(|| opponents.first().map(|p| p.id))
    }

    fn cycle_target(&mut self, forward: bool) {
        let ids: Vec<PlayerId> = self
            .state
            .active_opponents(PlayerId::Human)
            .iter()
            .map(|p| p.id)
            .collect();
        if ids.is_empty() {
            return;
        }
        let current = self
            .target()
            .and_then(|t| ids.iter().position(|&id| id == t))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % ids.len()
        } else {
            (current + ids.len() - 1) % ids.len()
        };
        self.selected_target = Some(ids[next]);
    }

    fn ask(&mut self, letter: char) {
        let Some(target_id) = self.target() else {
            return;
        };
        if self.state.player(target_id).is_some_and(|t| t.known_letters().contains(&letter)) {
            self.feedback = format!("{} is already showing", letter);
            return;
        }
        if self
            .state
            .asked_letters(PlayerId::Human, target_id)
            .contains_key(&letter)
        {
            self.feedback = format!("Already asked {} for {}", target_id.display_name(), letter);
            return;
        }
        if self.dispatch(actions::ask_letter(PlayerId::Human, target_id, letter)) {
            self.show_last_result();
        }
    }

    fn submit_guess(&mut self) {
        let Some(target) = self.target().and_then(|id| self.state.player(id)) else {
            return;
        };
        let target_id = target.id;
        let result = validate_guess(&self.guess_input, target.word.len());
        if !result.is_valid() {
            self.feedback = result.message();
            return;
        }
        let guess = std::mem::take(&mut self.guess_input);
        if self.dispatch(actions::guess_word(PlayerId::Human, target_id, &guess)) {
            self.input_mode = InputMode::Ask;
            self.show_last_result();
        }
    }

    fn submit_penalty(&mut self) {
        let Some(index) = self.penalty_selection() else {
            return;
        };
        if self.dispatch(actions::choose_penalty(PlayerId::Human, index)) {
            self.penalty_cursor = 0;
            self.feedback = format!("Revealed your letter {}", index + 1);
        }
    }

    fn show_last_result(&mut self) {
        if self.state.phase == GamePhase::Finished {
            return;
        }
        self.feedback = self
            .state
            .log
            .last()
            .map(|entry| entry.describe())
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::DictionaryEntry;
    use crate::game::{ActionResult, Tier};
    use rand::SeedableRng;
    use std::time::Duration;

    fn mock_dictionary() -> Arc<Dictionary> {
        let words = ["HELLO", "WORLD", "BRAVE", "QUEST", "HEDGE", "HAPPY"];
        Arc::new(
            Dictionary::from_entries(words.iter().map(|w| DictionaryEntry::new(w, Tier::Common)))
                .unwrap(),
        )
    }

    fn app() -> App {
        App::new(
            mock_dictionary(),
            Difficulty::Medium,
            StdRng::seed_from_u64(1),
            StdRng::seed_from_u64(2),
        )
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.on_char(c);
        }
    }

    fn playing_app() -> App {
        let mut app = app();
        app.on_enter();
        type_word(&mut app, "hello");
        app.on_enter();
        assert_eq!(app.screen(), Screen::Playing);
        app
    }

    fn give_turn_to(app: &mut App, id: PlayerId) {
        let mut state = (*app.state).clone();
        state.current_player_index = state.player_index(id).unwrap();
        app.state = Arc::new(state);
    }

    fn target_word(app: &App) -> String {
        let target = app.target().unwrap();
        app.state.player(target).unwrap().word.clone()
    }

    #[test]
    fn test_starts_on_title_with_configured_difficulty() {
        let app = App::new(
            mock_dictionary(),
            Difficulty::Hard,
            StdRng::seed_from_u64(1),
            StdRng::seed_from_u64(2),
        );
        assert_eq!(app.screen(), Screen::Title);
        assert_eq!(MenuOption::all()[app.menu_selected], MenuOption::Play(Difficulty::Hard));
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut app = app();
        for _ in 0..10 {
            app.on_down();
        }
        assert_eq!(app.menu_selected, MenuOption::all().len() - 1);
        for _ in 0..10 {
            app.on_up();
        }
        assert_eq!(app.menu_selected, 0);
    }

    #[test]
    fn test_start_game_gives_ai_words() {
        let mut app = app();
        app.on_enter();
        assert_eq!(app.screen(), Screen::WordSelection);
        assert_eq!(app.state.difficulty, Difficulty::Medium);
        for player in app.state.players.iter().filter(|p| p.is_ai) {
            assert!(app.dictionary().is_valid_word(&player.word), "{}", player.word);
            assert!(player.free_letter_index.is_some());
        }
        assert!(app.state.human().unwrap().word.is_empty());
    }

    #[test]
    fn test_invalid_secret_word_keeps_selection() {
        let mut app = app();
        app.on_enter();
        type_word(&mut app, "xyzzy");
        app.on_enter();
        assert_eq!(app.screen(), Screen::WordSelection);
        assert_eq!(app.feedback, "Not in dictionary");

        app.on_char('q');
        assert!(app.feedback.is_empty());
    }

    #[test]
    fn test_free_letter_cycles_and_clamps() {
        let mut app = app();
        app.on_enter();
        type_word(&mut app, "hello");
        app.on_left();
        assert_eq!(app.free_letter_index, 4);
        app.on_right();
        assert_eq!(app.free_letter_index, 0);
        app.on_left();
        app.on_backspace();
        assert_eq!(app.word_input, "HELL");
        assert_eq!(app.free_letter_index, 3);
    }

    #[test]
    fn test_secret_word_begins_play() {
        let mut app = app();
        app.on_enter();
        type_word(&mut app, "hello");
        app.on_right();
        app.on_enter();
        assert_eq!(app.screen(), Screen::Playing);
        let human = app.state.human().unwrap();
        assert_eq!(human.word, "HELLO");
        assert_eq!(human.free_letter_index, Some(1));
    }

    #[test]
    fn test_suggest_word_fills_input() {
        let mut app = app();
        app.on_enter();
        app.on_tab();
        assert!(app.dictionary().is_valid_word(&app.word_input));
        assert!(app.free_letter_index < app.word_input.len());
    }

    #[test]
    fn test_letter_key_asks_target() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Human);
        let target = app.target().unwrap();
        let letter = ('A'..='Z')
            .find(|c| !app.state.player(target).unwrap().known_letters().contains(c))
            .unwrap();
        app.on_char(letter.to_ascii_lowercase());

        let entry = app.state.log.last().unwrap();
        assert_eq!(entry.actor_id, PlayerId::Human);
        assert_eq!(entry.target_id, target);
        assert_eq!(entry.letter, Some(letter));
        assert_eq!(app.feedback, entry.describe());
    }

    #[test]
    fn test_reasking_letter_is_refused() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Human);
        let target = app.target().unwrap();
        let word = target_word(&app);
        let missing = ('A'..='Z').rev().find(|&c| !word.contains(c)).unwrap();
        app.on_char(missing);
        assert_eq!(app.state.log.last().unwrap().result, ActionResult::Miss);

        give_turn_to(&mut app, PlayerId::Human);
        let before = Arc::clone(&app.state);
        app.on_char(missing);
        assert!(Arc::ptr_eq(&before, &app.state));
        assert_eq!(app.state.log.len(), 1);
        assert_eq!(
            app.feedback,
            format!("Already asked {} for {}", target.display_name(), missing)
        );
        assert!(app.can_act());
    }

    #[test]
    fn test_no_input_on_ai_turn() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Ai1);
        let before = Arc::clone(&app.state);
        app.on_char('e');
        assert!(Arc::ptr_eq(&before, &app.state));
    }

    #[test]
    fn test_target_cycles_through_opponents() {
        let mut app = playing_app();
        let first = app.target().unwrap();
        app.on_right();
        let second = app.target().unwrap();
        assert_ne!(first, second);
        app.on_left();
        assert_eq!(app.target(), Some(first));
        app.on_left();
        app.on_left();
        app.on_left();
        assert_eq!(app.target(), Some(first));
    }

    #[test]
    fn test_guess_needs_matching_length() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Human);
        app.on_tab();
        assert_eq!(app.input_mode, InputMode::Guess);
        type_word(&mut app, "abc");
        app.on_enter();
        assert_eq!(app.feedback, "Too short (3 letters, need 4+)");
        assert!(app.state.log.is_empty());
        app.on_backspace();
        assert_eq!(app.guess_input, "AB");
    }

    #[test]
    fn test_correct_guess_eliminates_target() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Human);
        let target = app.target().unwrap();
        let word = target_word(&app);
        app.on_tab();
        type_word(&mut app, &word);
        app.on_enter();

        let entry = app.state.log.last().unwrap();
        assert_eq!(entry.result, ActionResult::CorrectGuess);
        assert!(app.state.player(target).unwrap().eliminated);
        assert_eq!(app.input_mode, InputMode::Ask);
        assert_ne!(app.target(), Some(target));
    }

    #[test]
    fn test_wrong_guess_then_penalty_pick() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Human);
        app.on_tab();
        type_word(&mut app, "zzzzz");
        app.on_enter();
        assert!(app.owes_penalty());
        assert!(!app.can_act());

        let choices = app.penalty_choices();
        assert_eq!(app.penalty_selection(), Some(choices[0]));
        app.on_right();
        assert_eq!(app.penalty_selection(), Some(choices[1]));

        app.on_enter();
        assert!(!app.owes_penalty());
        assert!(app.state.human().unwrap().revealed_mask[choices[1]]);
        assert_eq!(app.feedback, format!("Revealed your letter {}", choices[1] + 1));
    }

    #[test]
    fn test_last_opponent_down_records_win() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Human);
        let mut state = (*app.state).clone();
        let keep = app.target().unwrap();
        for player in state.players.iter_mut() {
            if player.is_ai && player.id != keep {
                player.eliminated = true;
            }
        }
        app.state = Arc::new(state);

        let word = target_word(&app);
        app.on_tab();
        type_word(&mut app, &word);
        app.on_enter();

        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.state.winner, Some(PlayerId::Human));
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.win_streak, 1);

        app.on_enter();
        assert_eq!(app.screen(), Screen::WordSelection);
        assert_eq!(app.state.difficulty, Difficulty::Medium);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn test_ai_turn_played_after_delay() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Ai1);
        let start = Instant::now();
        app.tick(start);
        assert!(app.state.log.is_empty());
        app.tick(start + Duration::from_millis(1300));
        let entry = app.state.log.last().unwrap();
        assert_eq!(entry.actor_id, PlayerId::Ai1);
    }

    #[test]
    fn test_rules_overlay_pauses_ai() {
        let mut app = playing_app();
        give_turn_to(&mut app, PlayerId::Ai1);
        let start = Instant::now();
        app.toggle_rules();
        app.tick(start);
        app.tick(start + Duration::from_secs(5));
        assert!(app.state.log.is_empty());

        // keys other than Esc are swallowed by the overlay
        app.on_tab();
        assert_eq!(app.input_mode, InputMode::Ask);

        app.on_escape();
        assert!(!app.show_rules);
        assert_eq!(app.screen(), Screen::Playing);
        app.tick(start + Duration::from_secs(5));
        app.tick(start + Duration::from_secs(7));
        assert_eq!(app.state.log.len(), 1);
    }

    #[test]
    fn test_escape_leaves_game_then_quits() {
        let mut app = playing_app();
        app.on_escape();
        assert_eq!(app.screen(), Screen::Title);
        assert!(!app.should_quit);
        assert_eq!(app.stats.games_played, 0);
        app.on_escape();
        assert!(app.should_quit);
    }

    #[test]
    fn test_menu_rules_and_quit() {
        let mut app = app();
        app.menu_selected = MenuOption::all()
            .iter()
            .position(|o| *o == MenuOption::Rules)
            .unwrap();
        app.on_enter();
        assert!(app.show_rules);
        app.on_escape();
        app.on_down();
        app.on_enter();
        assert!(app.should_quit);
    }
}
