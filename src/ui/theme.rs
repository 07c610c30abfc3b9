use ratatui::style::{Color, Modifier, Style};

// Catppuccin Mocha, cut down to the roles the screens actually draw with.
// Income is green, expenses red, savings goals yellow; everything else is
// chrome.
pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
const INCOME_GREEN: Color = Color::Rgb(166, 227, 161);
const EXPENSE_RED: Color = Color::Rgb(243, 139, 168);
const GOAL_YELLOW: Color = Color::Rgb(249, 226, 175);
const SURFACE: Color = Color::Rgb(49, 50, 68);
const TEXT: Color = Color::Rgb(205, 214, 244);
const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
const BORDER: Color = Color::Rgb(69, 71, 90);
const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

/// Table header rows.
pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(BASE)
        .add_modifier(Modifier::BOLD)
}

/// Block borders around every screen panel.
pub(crate) fn border_style() -> Style {
    Style::default().fg(BORDER)
}

/// Panel titles.
pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(INCOME_GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(EXPENSE_RED)
}

/// Savings-goal bars and their labels.
pub(crate) fn goal_style() -> Style {
    Style::default().fg(GOAL_YELLOW)
}

/// The number printed on top of each goal bar.
pub(crate) fn goal_value_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

/// The NORMAL badge on the status bar.
pub(crate) fn normal_mode_style() -> Style {
    Style::default()
        .fg(BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// The COMMAND badge on the status bar.
pub(crate) fn command_mode_style() -> Style {
    Style::default()
        .fg(BASE)
        .bg(INCOME_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Section headings inside the help overlay.
pub(crate) fn help_heading_style() -> Style {
    Style::default().fg(GOAL_YELLOW).add_modifier(Modifier::BOLD)
}
