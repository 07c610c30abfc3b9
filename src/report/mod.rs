use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Category, TransactionKind};
use crate::store::Ledger;

/// Date formats accepted by the reporting pipeline, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Parse a date field, or mark it missing. Missing dates keep their row in
/// the raw table but drop it from the time series.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parse a money field, or mark it missing.
pub(crate) fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

/// A transaction row after the one-time parse step.
struct ParsedRow {
    date: Option<NaiveDate>,
    amount: Option<Decimal>,
    category: Category,
    kind: TransactionKind,
}

/// Everything the charts draw, derived from the ledger.
///
/// Rebuilt in full after each mutation and on every screen switch; this is
/// a pure function of current ledger contents, so rebuilding is the whole
/// refresh story.
#[derive(Debug, Default)]
pub(crate) struct Report {
    /// Expense sums per parsable date, date-ascending.
    pub(crate) expense_by_date: Vec<(NaiveDate, Decimal)>,
    /// Income sums per parsable date, date-ascending.
    pub(crate) income_by_date: Vec<(NaiveDate, Decimal)>,
    /// Expense sums per category, in the fixed category order, only for
    /// categories with at least one expense row.
    pub(crate) expense_by_category: Vec<(Category, Decimal)>,
    /// One entry per goal in insertion order; unparsable progress plots
    /// as zero so the bar keeps its slot.
    pub(crate) goal_progress: Vec<(String, Decimal)>,
}

impl Report {
    pub(crate) fn build(ledger: &Ledger) -> Self {
        let rows: Vec<ParsedRow> = ledger
            .transactions()
            .iter()
            .map(|txn| ParsedRow {
                date: parse_date(&txn.date),
                amount: parse_amount(&txn.amount),
                category: txn.category,
                kind: txn.kind,
            })
            .collect();

        let expenses = || rows.iter().filter(|r| r.kind == TransactionKind::Expense);
        let incomes = || rows.iter().filter(|r| r.kind == TransactionKind::Income);

        let goal_progress = ledger
            .savings_goals()
            .iter()
            .map(|goal| {
                (
                    goal.name.clone(),
                    parse_amount(&goal.progress).unwrap_or(Decimal::ZERO),
                )
            })
            .collect();

        Self {
            expense_by_date: sum_by_date(expenses()),
            income_by_date: sum_by_date(incomes()),
            expense_by_category: sum_by_category(expenses()),
            goal_progress,
        }
    }

    /// Total of the category sums; denominator for the proportion chart.
    pub(crate) fn expense_total(&self) -> Decimal {
        self.expense_by_category
            .iter()
            .map(|(_, amount)| *amount)
            .sum()
    }
}

/// Group rows by parsable date and sum parsable amounts. A row with a
/// parsable date but missing amount keeps its date group alive and
/// contributes zero.
fn sum_by_date<'a>(rows: impl Iterator<Item = &'a ParsedRow>) -> Vec<(NaiveDate, Decimal)> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for row in rows {
        let Some(date) = row.date else { continue };
        *by_date.entry(date).or_insert(Decimal::ZERO) += row.amount.unwrap_or(Decimal::ZERO);
    }
    by_date.into_iter().collect()
}

/// Group rows by category; a category appears as soon as any row carries
/// it, even when every amount in it is missing.
fn sum_by_category<'a>(rows: impl Iterator<Item = &'a ParsedRow>) -> Vec<(Category, Decimal)> {
    let mut sums: Vec<(Category, Option<Decimal>)> =
        Category::all().iter().map(|c| (*c, None)).collect();

    for row in rows {
        if let Some((_, sum)) = sums.iter_mut().find(|(c, _)| *c == row.category) {
            *sum.get_or_insert(Decimal::ZERO) += row.amount.unwrap_or(Decimal::ZERO);
        }
    }

    sums.into_iter()
        .filter_map(|(category, sum)| sum.map(|s| (category, s)))
        .collect()
}
