use crate::tracker::{Mode, Tracker};
use crate::ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::error;

/// Runs the terminal loop until the user quits. Sets up raw mode and the
/// alternate screen, and restores the terminal even when the loop errors.
pub fn run(tracker: &mut Tracker) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, tracker);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

/// One key event is fully processed, store saved, before the next is read.
/// Save failures are logged and shown in the status line; the in-memory
/// state stays valid and the session continues.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tracker: &mut Tracker,
) -> io::Result<()> {
    loop {
        tracker.refresh_selection();
        terminal.draw(|frame| ui::render(frame, tracker))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }

        let outcome = match tracker.mode() {
            Mode::Idle => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => {
                    tracker.move_up();
                    Ok(())
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    tracker.move_down();
                    Ok(())
                }
                KeyCode::Enter | KeyCode::Char(' ') => tracker.toggle_today(),
                KeyCode::Char('y') => tracker.log_days_ago(1),
                KeyCode::Char('d') => {
                    tracker.open_prompt(Mode::PromptingDate);
                    Ok(())
                }
                KeyCode::Char('s') => {
                    tracker.open_prompt(Mode::PromptingCurrentStreak);
                    Ok(())
                }
                KeyCode::Char('l') => {
                    tracker.open_prompt(Mode::PromptingLongestStreak);
                    Ok(())
                }
                _ => Ok(()),
            },
            _ => match key.code {
                KeyCode::Esc => {
                    tracker.cancel_prompt();
                    Ok(())
                }
                KeyCode::Enter => tracker.confirm_prompt(),
                KeyCode::Backspace => {
                    tracker.pop_input();
                    Ok(())
                }
                KeyCode::Char(c) => {
                    tracker.push_input(c);
                    Ok(())
                }
                _ => Ok(()),
            },
        };

        match outcome {
            Ok(()) => tracker.clear_status(),
            Err(err) => {
                error!("save failed: {err}");
                tracker.set_status(format!("save failed: {err}"));
            }
        }
    }
}
