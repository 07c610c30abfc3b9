use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::models::{Category, TransactionKind};
use crate::store::Ledger;
use crate::ui::app::{App, InputMode, Screen, GOAL_FORM_FIELDS, TXN_FORM_FIELDS};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new();
    app.refresh_report(ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Tab, status and command bars plus table chrome eat 6 rows.
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, ledger);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Command => handle_command_input(key, app, ledger)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    if app.screen.is_form() {
        return handle_form_input(key, app, ledger);
    }

    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app, ledger),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, ledger, Screen::Overview),
        KeyCode::Char('2') => switch_screen(app, ledger, Screen::Transactions),
        KeyCode::Char('3') => switch_screen(app, ledger, Screen::Goals),
        KeyCode::Char('4') => switch_screen(app, ledger, Screen::AddTransaction),
        KeyCode::Char('5') => switch_screen(app, ledger, Screen::AddGoal),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, ledger, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 {
                screens.len() - 1
            } else {
                idx - 1
            };
            switch_screen(app, ledger, screens[prev]);
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app, ledger),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return Ok(());
    }

    match app.screen {
        Screen::AddTransaction => handle_txn_form_input(key, app, ledger),
        Screen::AddGoal => handle_goal_form_input(key, app, ledger),
        _ => {}
    }
    Ok(())
}

fn handle_txn_form_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Down | KeyCode::Tab => {
            app.txn_field = (app.txn_field + 1) % TXN_FORM_FIELDS;
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.txn_field = if app.txn_field == 0 {
                TXN_FORM_FIELDS - 1
            } else {
                app.txn_field - 1
            };
        }
        KeyCode::Enter => app.submit_transaction(ledger),
        KeyCode::Esc => switch_screen(app, ledger, Screen::Overview),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') if app.txn_field == 1 => {
            app.txn_category = (app.txn_category + 1) % Category::all().len();
        }
        KeyCode::Left | KeyCode::Char('-') if app.txn_field == 1 => {
            let len = Category::all().len();
            app.txn_category = (app.txn_category + len - 1) % len;
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') if app.txn_field == 3 => {
            app.txn_kind = (app.txn_kind + 1) % TransactionKind::all().len();
        }
        KeyCode::Left | KeyCode::Char('-') if app.txn_field == 3 => {
            let len = TransactionKind::all().len();
            app.txn_kind = (app.txn_kind + len - 1) % len;
        }
        KeyCode::Backspace => {
            match app.txn_field {
                0 => {
                    app.txn_date.pop();
                }
                2 => {
                    app.txn_amount.pop();
                }
                _ => {}
            };
        }
        KeyCode::Char(c) => match app.txn_field {
            0 => app.txn_date.push(c),
            2 => app.txn_amount.push(c),
            _ => {}
        },
        _ => {}
    }
}

fn handle_goal_form_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Down | KeyCode::Tab => {
            app.goal_field = (app.goal_field + 1) % GOAL_FORM_FIELDS;
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.goal_field = if app.goal_field == 0 {
                GOAL_FORM_FIELDS - 1
            } else {
                app.goal_field - 1
            };
        }
        KeyCode::Enter => app.submit_goal(ledger),
        KeyCode::Esc => switch_screen(app, ledger, Screen::Overview),
        KeyCode::Backspace => {
            match app.goal_field {
                0 => app.goal_name.pop(),
                1 => app.goal_target.pop(),
                _ => app.goal_progress.pop(),
            };
        }
        KeyCode::Char(c) => match app.goal_field {
            0 => app.goal_name.push(c),
            1 => app.goal_target.push(c),
            _ => app.goal_progress.push(c),
        },
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, ledger: &Ledger, screen: Screen) {
    app.screen = screen;
    app.refresh_report(ledger);
    match screen {
        Screen::AddTransaction => app.txn_field = 0,
        Screen::AddGoal => app.goal_field = 0,
        _ => {}
    }
}

fn handle_move_down(app: &mut App, ledger: &Ledger) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Transactions => scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            ledger.transactions().len(),
            page,
        ),
        Screen::Goals => scroll_down(
            &mut app.goal_index,
            &mut app.goal_scroll,
            ledger.savings_goals().len(),
            page,
        ),
        _ => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => scroll_up(&mut app.transaction_index, &mut app.transaction_scroll),
        Screen::Goals => scroll_up(&mut app.goal_index, &mut app.goal_scroll),
        _ => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Goals => scroll_to_top(&mut app.goal_index, &mut app.goal_scroll),
        _ => {}
    }
}

fn handle_goto_bottom(app: &mut App, ledger: &Ledger) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Transactions => scroll_to_bottom(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            ledger.transactions().len(),
            page,
        ),
        Screen::Goals => scroll_to_bottom(
            &mut app.goal_index,
            &mut app.goal_scroll,
            ledger.savings_goals().len(),
            page,
        ),
        _ => {}
    }
}
