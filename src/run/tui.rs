use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::ui::app::{App, InputMode, PendingDelete};
use crate::ui::form::Field;
use crate::ui::{commands, render};

pub(crate) fn as_tui(db: &mut Database) -> Result<()> {
    let mut app = App::new();
    app.refresh_expenses(db)?;

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Rows left for the table after the form (6), table chrome (3), both bars (2)
            app.visible_rows = (f.area().height.saturating_sub(11) as usize).max(1);
            render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            handle_key(key, app, db)?;
        }
    }
    Ok(())
}

fn handle_key(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    // Any keypress dismisses the help overlay
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.mode {
        InputMode::Normal => handle_normal_input(key, app, db),
        InputMode::Entry => handle_entry_input(key, app, db),
        InputMode::Command => handle_command_input(key, app, db),
        InputMode::Search => handle_search_input(key, app, db),
        InputMode::Confirm => handle_confirm_input(key, app, db),
    }
}

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char('q' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.half_page_down();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.half_page_up();
        }
        KeyCode::Char(':') => {
            app.command_line.clear();
            app.mode = InputMode::Command;
        }
        KeyCode::Char('/') => {
            app.search_query.clear();
            app.mode = InputMode::Search;
        }
        KeyCode::Char('a') => {
            app.status_message.clear();
            app.mode = InputMode::Entry;
        }
        KeyCode::Char('d' | 'D') => app.request_delete(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char('g') => app.jump_top(),
        KeyCode::Char('G') => app.jump_bottom(),
        KeyCode::Esc => {
            if app.search_query.is_empty() {
                app.status_message.clear();
            } else {
                app.search_query.clear();
                app.refresh_expenses(db)?;
                app.set_status("Search cleared");
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_entry_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.mode = InputMode::Normal;
        }
        KeyCode::Enter => match app.form.validate() {
            Ok(expense) => {
                db.insert_expense(&expense)?;
                app.form.reset();
                app.refresh_expenses(db)?;
                app.mode = InputMode::Normal;
                app.set_status(format!("Added expense: {}", expense.description));
            }
            Err(msg) => app.set_status(msg),
        },
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Backspace => app.form.delete_char(),
        KeyCode::Char('+' | '=') if app.form.focus == Field::Category => {
            app.form.cycle_category_forward();
        }
        KeyCode::Char('-') if app.form.focus == Field::Category => {
            app.form.cycle_category_back();
        }
        KeyCode::Char(c) => app.form.insert_char(c),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_line);
            app.mode = InputMode::Normal;
            commands::handle_command(&input, app, db)?;
        }
        KeyCode::Esc => {
            app.command_line.clear();
            app.mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.command_line.pop();
            // Erasing past the ':' leaves command mode
            if app.command_line.is_empty() {
                app.mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_line.clear();
            app.mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let kept = app.command_line.trim_end();
            match kept.rfind(' ') {
                Some(pos) => app.command_line.truncate(pos + 1),
                None => {
                    app.command_line.clear();
                    app.mode = InputMode::Normal;
                }
            }
        }
        KeyCode::Char(c) => app.command_line.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            // Keep the filter, return to browsing
            app.mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.search_query.clear();
            app.mode = InputMode::Normal;
            app.refresh_expenses(db)?;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.jump_top();
            app.refresh_search(db)?;
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.jump_top();
            app.refresh_search(db)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            if let Some(PendingDelete { id, description }) = app.pending_delete.take() {
                db.delete_expense(id)?;
                app.refresh_expenses(db)?;
                app.set_status(format!("Deleted '{description}'"));
            }
            app.mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Anything except an explicit yes backs out
            app.pending_delete = None;
            app.mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Delete cancelled");
        }
    }
    Ok(())
}
