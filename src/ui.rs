use crate::tracker::{Mode, Tracker};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const IDLE_HELP: &str =
    "j/k move · space toggle · y log yesterday · d log date · s set streak · l set longest · q quit";
const PROMPT_HELP: &str = "enter confirm · esc cancel";

pub fn render(frame: &mut Frame, tracker: &Tracker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let mut lines = Vec::with_capacity(tracker.catalog().len());
    for (index, name) in tracker.catalog().iter().enumerate() {
        let cursor = if tracker.cursor() == index { ">" } else { " " };
        let checked = if tracker.is_selected(index) { "x" } else { " " };
        let (streak, longest) = tracker
            .record(name)
            .map(|record| (record.streak, record.longest))
            .unwrap_or((0, 0));
        let style = if tracker.cursor() == index {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!("{cursor} [{checked}] {name} ({streak}🔥 best {longest})"),
            style,
        ));
    }
    let habits = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("💪🔥 Habit Tracker"),
    );
    frame.render_widget(habits, chunks[0]);

    let prompt = match tracker.mode() {
        Mode::Idle => tracker.status().unwrap_or_default().to_string(),
        Mode::PromptingDate => format!("log date (YYYY-MM-DD): {}", tracker.input()),
        Mode::PromptingCurrentStreak => format!("set current streak: {}", tracker.input()),
        Mode::PromptingLongestStreak => format!("set longest streak: {}", tracker.input()),
    };
    frame.render_widget(
        Paragraph::new(prompt).style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );

    let help = match tracker.mode() {
        Mode::Idle => IDLE_HELP,
        _ => PROMPT_HELP,
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
