use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use super::util;
use crate::store::Ledger;

pub(crate) fn render(f: &mut Frame, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app, ledger);
    render_status_bar(f, chunks[2], app, ledger);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), theme::dim_style()),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(format!("{num}:{s}"), theme::dim_style()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", theme::border_style()))
        .style(Style::default().bg(theme::BASE));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    match app.screen {
        Screen::Overview => super::screens::overview::render(f, area, app),
        Screen::Transactions => super::screens::transactions::render(f, area, app, ledger),
        Screen::Goals => super::screens::goals::render(f, area, app, ledger),
        Screen::AddTransaction => super::screens::transaction_form::render(f, area, app),
        Screen::AddGoal => super::screens::goal_form::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => theme::normal_mode_style(),
        InputMode::Command => theme::command_mode_style(),
    };

    let info = format!(
        " {} | {} txns | {} goals",
        app.screen,
        ledger.transactions().len(),
        ledger.savings_goals().len()
    );

    let right = match app.screen {
        Screen::Overview => " 1-5 screens | ? help ",
        Screen::Transactions | Screen::Goals => " j/k scroll | g/G top/bottom | ? help ",
        Screen::AddTransaction | Screen::AddGoal => {
            " Up/Down field | +/- cycle | Enter submit | Esc back "
        }
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(util::cursor_col(1, &app.command_input)),
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(theme::command_bar_style());
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " FinTrack Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", theme::help_heading_style())),
        Line::from(Span::styled(
            "  1-5              Switch screens        Tab/Shift-Tab  Cycle screens",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  j/k or Up/Down   Scroll tables         g/G            Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-q           Quit                  Esc            Back/Clear",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Forms", theme::help_heading_style())),
        Line::from(Span::styled(
            "  Up/Down/Tab      Move between fields   type           Edit text field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Left/Right/+/-   Cycle category/type   Enter          Submit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::help_heading_style())),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<22} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
