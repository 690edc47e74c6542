//! UI rendering using ratatui
//!
//! Screens:
//! - Title: Difficulty menu and session stats
//! - WordSelection: Secret word entry with free letter picker
//! - Playing: Word racks, action input, game log
//! - Results: Winner, every word revealed, stats
//!
//! The rules overlay can be drawn over any of them.

use crate::app::{App, InputMode, MenuOption, Screen};
use crate::game::{GameState, GameSummary, Player, PlayerId, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::stats::SessionStats;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Game log lines shown while playing
const LOG_LINES: usize = 10;

const RULES: &str = "\
Everyone hides a secret word of 4-12 letters. One letter of each word
starts out revealed.

On your turn pick an opponent and either:
  - ask for a letter: every copy of it in their word is revealed
  - guess their whole word

Guess right and that player is out. Guess wrong and you must reveal one
of your own letters.

The last player with a hidden word wins.

Keys while playing:
  Left/Right  choose target        Tab    switch ask / guess
  A-Z         ask (or type guess)  Enter  submit guess or penalty
  ?           this help            Esc    leave game";

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Title => render_title(frame, app),
        Screen::WordSelection => render_word_selection(frame, app),
        Screen::Playing => render_game(frame, app),
        Screen::Results => render_results(frame, app),
    }

    if app.show_rules {
        render_rules(frame);
    }
}

/// Render the title menu
fn render_title(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(2), // Tagline
            Constraint::Min(6),    // Menu options
            Constraint::Length(2), // Stats
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 ____  ____   ___  ____  _____
|  _ \|  _ \ / _ \| __ )| ____|
| |_) | |_) | | | |  _ \|  _|
|  __/|  _ <| |_| | |_) | |___
|_|   |_| \_\\___/|____/|_____|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let tagline = Paragraph::new("Crack their words before they crack yours")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == app.menu_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == app.menu_selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(Block::default()), layout[2]);

    let stats = Paragraph::new(format_stats(&app.stats))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(stats, layout[3]);

    render_footer(frame, layout[4], "↑↓ Navigate  Enter Select  ? Rules  Esc Quit");
}

/// Render secret word entry
fn render_word_selection(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Word with free letter
            Constraint::Length(2), // Feedback
            Constraint::Min(0),    // Opponents
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new(format!(
        "Choose your secret word ({})",
        app.state.difficulty.label()
    ))
    .style(Style::default().fg(Color::Yellow).bold())
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let prompt = Paragraph::new(format!(
        "{}-{} letters. The highlighted letter starts out revealed.",
        MIN_WORD_LENGTH, MAX_WORD_LENGTH
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, layout[1]);

    let mut spans: Vec<Span> = app
        .word_input
        .chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let style = if i == app.free_letter_index {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White).bold()
            };
            [Span::styled(c.to_string(), style), Span::raw(" ")]
        })
        .collect();
    spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(word, layout[2]);

    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[3]);

    let ready = app
        .state
        .players
        .iter()
        .filter(|p| p.is_ai && !p.word.is_empty())
        .count();
    let opponents = Paragraph::new(format!("{} opponents have chosen their words", ready))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(opponents, layout[4]);

    render_footer(
        frame,
        layout[5],
        "A-Z Type  ←→ Free letter  Tab Suggest  Enter Confirm  Esc Back",
    );
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(app.state.players.len() as u16 + 2), // Racks
            Constraint::Length(5), // Action panel
            Constraint::Min(4),    // Log
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_racks(frame, layout[1], app);
    render_action_panel(frame, layout[2], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Log
            Constraint::Length(34), // Asked letters
        ])
        .split(layout[3]);
    render_log(frame, bottom[0], &app.state);
    render_asked_letters(frame, bottom[1], &app.state);
    render_footer(
        frame,
        layout[4],
        "←→ Target  Tab Ask/Guess  Enter Submit  ? Rules  Esc Leave",
    );
}

/// Render the header: logo, turn, difficulty
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Logo
            Constraint::Min(20),    // Turn
            Constraint::Length(10), // Difficulty
        ])
        .split(inner);

    let logo = Paragraph::new("PROBE")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let (turn_text, turn_color) = turn_status(app);
    let turn = Paragraph::new(format!("Turn {} - {}", app.state.turn_number, turn_text))
        .style(Style::default().fg(turn_color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(turn, header_layout[1]);

    let difficulty = Paragraph::new(app.state.difficulty.label())
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Right);
    frame.render_widget(difficulty, header_layout[2]);
}

fn turn_status(app: &App) -> (String, Color) {
    let state = &app.state;
    if app.owes_penalty() {
        return ("Pick a letter to reveal".to_string(), Color::Red);
    }
    match state.current_player() {
        Some(p) if p.id == PlayerId::Human => ("Your turn".to_string(), Color::Green),
        Some(p) if state.pending_penalty => (format!("{} pays a penalty", p.name), Color::Yellow),
        Some(p) => (format!("{} is thinking...", p.name), Color::Yellow),
        None => (String::new(), Color::White),
    }
}

/// Render one rack per player in turn order
fn render_racks(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let target = app.target();
    let current = state.current_player().map(|p| p.id);

    let items: Vec<ListItem> = state
        .players
        .iter()
        .map(|p| {
            let turn_marker = if Some(p.id) == current { "▶ " } else { "  " };
            let name_style = if p.eliminated {
                Style::default().fg(Color::DarkGray)
            } else if Some(p.id) == target {
                Style::default().fg(Color::Yellow).bold()
            } else if p.id == PlayerId::Human {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::raw(turn_marker),
                Span::styled(format!("{:<6}", p.name), name_style),
                Span::raw("  "),
            ];
            spans.extend(rack_spans(p, None));
            if p.eliminated {
                spans.push(Span::styled("  OUT", Style::default().fg(Color::Red)));
            } else if Some(p.id) == target {
                spans.push(Span::styled("  ◀ target", Style::default().fg(Color::Yellow)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Words"),
    );
    frame.render_widget(list, area);
}

/// Letters of a rack. Opponents show blanks for hidden letters; the human
/// sees their own word with hidden letters dimmed. `cursor` marks a slot.
fn rack_spans(player: &Player, cursor: Option<usize>) -> Vec<Span<'static>> {
    let show_all = player.id == PlayerId::Human || player.eliminated;
    let letters = if show_all {
        player.word.clone()
    } else {
        player.pattern()
    };
    letters
        .chars()
        .zip(&player.revealed_mask)
        .enumerate()
        .flat_map(|(i, (c, &revealed))| {
            let mut style = match (revealed, show_all) {
                (true, _) => Style::default().fg(Color::Green).bold(),
                (false, true) => Style::default().fg(Color::DarkGray),
                (false, false) => Style::default().fg(Color::White),
            };
            if cursor == Some(i) {
                style = Style::default().fg(Color::Black).bg(Color::Red).bold();
            }
            [Span::styled(c.to_string(), style), Span::raw(" ")]
        })
        .collect()
}

/// Letters the human has asked each opponent for: green hits, red misses
fn asked_letter_spans(state: &GameState, target: PlayerId) -> Vec<Span<'static>> {
    state
        .asked_letters(PlayerId::Human, target)
        .into_iter()
        .map(|(letter, hit)| {
            let color = if hit { Color::Green } else { Color::Red };
            Span::styled(letter.to_string(), Style::default().fg(color).bold())
        })
        .collect()
}

fn render_asked_letters(frame: &mut Frame, area: Rect, state: &GameState) {
    let items: Vec<ListItem> = state
        .players
        .iter()
        .filter(|p| p.id != PlayerId::Human)
        .map(|p| {
            let name_style = if p.eliminated {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![Span::styled(format!("{:<6} ", p.name), name_style)];
            spans.extend(asked_letter_spans(state, p.id));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Your asked letters"),
    );
    frame.render_widget(list, area);
}

/// Render what the human can do right now
fn render_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("Action");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let target_name = app
        .target()
        .map(|id| id.display_name())
        .unwrap_or("nobody");

    let prompt: Line = if app.owes_penalty() {
        let mut spans = vec![Span::raw("Wrong guess! Reveal one of yours: ")];
        if let Some(human) = app.state.human() {
            spans.extend(rack_spans(human, app.penalty_selection()));
        }
        Line::from(spans)
    } else if app.state.human().is_some_and(|h| h.eliminated) {
        Line::styled("You are out. Watching the rest play...", Style::default().fg(Color::DarkGray))
    } else if !app.can_act() {
        Line::styled("Waiting...", Style::default().fg(Color::DarkGray))
    } else {
        match app.input_mode {
            InputMode::Ask => Line::from(vec![
                Span::raw("Ask "),
                Span::styled(target_name, Style::default().fg(Color::Yellow).bold()),
                Span::raw(" for a letter: press A-Z"),
            ]),
            InputMode::Guess => Line::from(vec![
                Span::raw("Guess "),
                Span::styled(target_name, Style::default().fg(Color::Yellow).bold()),
                Span::raw("'s word: "),
                Span::styled(format!("{}_", app.guess_input), Style::default().fg(Color::White).bold()),
            ]),
        }
    };
    frame.render_widget(Paragraph::new(prompt), rows[0]);

    let (feedback_text, feedback_color) = format_feedback(&app.feedback);
    let feedback = Paragraph::new(feedback_text).style(Style::default().fg(feedback_color));
    frame.render_widget(feedback, rows[1]);
}

/// Render the most recent log entries, newest last
fn render_log(frame: &mut Frame, area: Rect, state: &GameState) {
    let skip = state.log.len().saturating_sub(LOG_LINES);
    let items: Vec<ListItem> = state
        .log
        .iter()
        .skip(skip)
        .map(|entry| {
            let style = if entry.actor_id == PlayerId::Human {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{:>3}. {}", entry.turn, entry.describe())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Log"),
    );
    frame.render_widget(list, area);
}

/// Render the end of game summary
fn render_results(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = &app.state;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),                              // Title
            Constraint::Length(1),                              // Feedback
            Constraint::Length(state.players.len() as u16 + 2), // Words
            Constraint::Length(2),                              // This game
            Constraint::Length(2),                              // Stats
            Constraint::Min(0),                                 // Spacer
            Constraint::Length(1),                              // Instructions
        ])
        .split(area);

    let (title, color) = match state.winner {
        Some(PlayerId::Human) => ("YOU WIN!".to_string(), Color::Green),
        Some(id) => (format!("{} WINS", id.display_name().to_uppercase()), Color::Red),
        None => ("GAME OVER".to_string(), Color::Yellow),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[1]);

    let items: Vec<ListItem> = state
        .players
        .iter()
        .map(|p| {
            let style = if Some(p.id) == state.winner {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {:<6}  {}", p.name, p.word)).style(style)
        })
        .collect();
    let words = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Secret words"),
    );
    frame.render_widget(words, layout[2]);

    let game = Paragraph::new(format_summary(&state.summary()))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(game, layout[3]);

    let stats = Paragraph::new(format_stats(&app.stats))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(stats, layout[4]);

    render_footer(frame, layout[6], "Enter Play again  Esc Title");
}

/// Render the rules on top of the current screen
fn render_rules(frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);
    let rules = Paragraph::new(RULES)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" How to Play (Esc to close) "),
        );
    frame.render_widget(rules, area);
}

fn render_footer(frame: &mut Frame, area: Rect, text: &str) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Format session stats for display
fn format_stats(stats: &SessionStats) -> String {
    if stats.games_played == 0 {
        return "No games played yet".to_string();
    }
    format!(
        "Played {}  Won {} ({:.0}%)  Lost {}  Streak {}  Best {}",
        stats.games_played,
        stats.games_won,
        stats.win_rate() * 100.0,
        stats.losses(),
        stats.win_streak,
        stats.best_win_streak
    )
}

/// Format totals for the game just played
fn format_summary(summary: &GameSummary) -> String {
    format!(
        "Turns {}  Actions {}  Hits {}  Eliminated {}",
        summary.turns, summary.actions, summary.hits, summary.eliminated
    )
}

/// Format feedback with appropriate color
fn format_feedback(feedback: &str) -> (String, Color) {
    if feedback.is_empty() {
        return (String::new(), Color::White);
    }

    let color = if feedback.contains(": hit") || feedback.contains(": correct") {
        Color::Green
    } else if feedback.contains(": miss")
        || feedback.contains(": wrong")
        || feedback.starts_with("Too ")
        || feedback.starts_with("Need ")
        || feedback.starts_with("Letters")
    {
        Color::Red
    } else {
        Color::Yellow
    };

    (feedback.to_string(), color)
}
