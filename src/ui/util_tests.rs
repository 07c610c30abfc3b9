#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
    assert_eq!(format_amount(dec!(4.5)), "$4.50");
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-1234.56)), "-$1,234.56");
}

// ── percent_of ────────────────────────────────────────────────

#[test]
fn test_percent_of() {
    assert!((percent_of(dec!(25), dec!(100)) - 25.0).abs() < 1e-9);
    assert!((percent_of(dec!(1), dec!(3)) - 33.333333).abs() < 1e-3);
    assert_eq!(percent_of(dec!(5), Decimal::ZERO), 0.0);
}

#[test]
fn test_percent_of_shares_sum_to_100() {
    let parts = [dec!(20), dec!(30), dec!(50)];
    let total: Decimal = parts.iter().copied().sum();
    let sum: f64 = parts.iter().map(|p| percent_of(*p, total)).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("Food", 10), "Food");
    assert_eq!(truncate("Food", 4), "Food");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Transportation", 10), "Transport…");
}

#[test]
fn test_truncate_zero_and_multibyte() {
    assert_eq!(truncate("abc", 0), "");
    assert_eq!(truncate("ünïcödé", 4), "ünï…");
}

// ── cursor_col ────────────────────────────────────────────────

#[test]
fn test_cursor_col_counts_chars_not_bytes() {
    assert_eq!(cursor_col(1, ""), 1);
    assert_eq!(cursor_col(1, "quit"), 5);
    // "übergröße" is 9 characters but 12 bytes.
    assert_eq!(cursor_col(1, "übergröße"), 10);
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut idx, mut scroll) = (0, 0);
    for _ in 0..10 {
        scroll_down(&mut idx, &mut scroll, 3, 2);
    }
    assert_eq!(idx, 2);
    assert_eq!(scroll, 1);
}

#[test]
fn test_scroll_up_stops_at_zero() {
    let (mut idx, mut scroll) = (1, 1);
    scroll_up(&mut idx, &mut scroll);
    scroll_up(&mut idx, &mut scroll);
    assert_eq!(idx, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut idx, mut scroll) = (0, 0);
    scroll_to_bottom(&mut idx, &mut scroll, 10, 4);
    assert_eq!(idx, 9);
    assert_eq!(scroll, 6);
    scroll_to_top(&mut idx, &mut scroll);
    assert_eq!(idx, 0);
    assert_eq!(scroll, 0);
}
