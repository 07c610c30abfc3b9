#![allow(clippy::unwrap_used)]

use super::theme::*;
use ratatui::style::Style;

fn fg(style: Style) -> ratatui::style::Color {
    style.fg.unwrap()
}

#[test]
fn test_money_accents_are_distinct() {
    // Income, expenses and goals each get their own color so the three
    // charts read apart at a glance.
    assert_ne!(fg(income_style()), fg(expense_style()));
    assert_ne!(fg(expense_style()), fg(goal_style()));
    assert_ne!(fg(income_style()), fg(goal_style()));
}

#[test]
fn test_selected_row_inverts_on_accent() {
    let style = selected_style();
    assert_eq!(style.bg, Some(ACCENT));
    assert_eq!(style.fg, Some(BASE));
}

#[test]
fn test_mode_badges_share_fg_differ_in_bg() {
    assert_eq!(normal_mode_style().fg, command_mode_style().fg);
    assert_ne!(normal_mode_style().bg, command_mode_style().bg);
}
