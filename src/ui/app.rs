use chrono::Local;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Category, SavingsGoal, Transaction, TransactionKind};
use crate::report::Report;
use crate::store::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Overview,
    Transactions,
    Goals,
    AddTransaction,
    AddGoal,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Overview,
            Self::Transactions,
            Self::Goals,
            Self::AddTransaction,
            Self::AddGoal,
        ]
    }

    pub(crate) fn is_form(&self) -> bool {
        matches!(self, Self::AddTransaction | Self::AddGoal)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Goals => write!(f, "Goals"),
            Self::AddTransaction => write!(f, "Add Transaction"),
            Self::AddGoal => write!(f, "Add Goal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// Number of fields on each entry form.
pub(crate) const TXN_FORM_FIELDS: usize = 4;
pub(crate) const GOAL_FORM_FIELDS: usize = 3;

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// Derived view over the ledger, rebuilt after every mutation.
    pub(crate) report: Report,

    // Raw tables
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) goal_index: usize,
    pub(crate) goal_scroll: usize,

    // Transaction form (index fields point into Category::all() /
    // TransactionKind::all())
    pub(crate) txn_date: String,
    pub(crate) txn_category: usize,
    pub(crate) txn_amount: String,
    pub(crate) txn_kind: usize,
    pub(crate) txn_field: usize,

    // Savings goal form
    pub(crate) goal_name: String,
    pub(crate) goal_target: String,
    pub(crate) goal_progress: String,
    pub(crate) goal_field: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Overview,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            report: Report::default(),

            transaction_index: 0,
            transaction_scroll: 0,
            goal_index: 0,
            goal_scroll: 0,

            txn_date: today(),
            txn_category: 0,
            txn_amount: String::new(),
            txn_kind: 0,
            txn_field: 0,

            goal_name: String::new(),
            goal_target: String::new(),
            goal_progress: String::new(),
            goal_field: 0,

            visible_rows: 20,
        }
    }

    /// The explicit "recompute view from current state" step; called after
    /// each mutating action and on every screen switch.
    pub(crate) fn refresh_report(&mut self, ledger: &Ledger) {
        self.report = Report::build(ledger);
        if self.transaction_index >= ledger.transactions().len() {
            self.transaction_index = ledger.transactions().len().saturating_sub(1);
        }
        if self.goal_index >= ledger.savings_goals().len() {
            self.goal_index = ledger.savings_goals().len().saturating_sub(1);
        }
    }

    /// Build a transaction from the form buffers and append it. Appends
    /// unconditionally; the widgets already constrain category and type,
    /// and amount text is coerced, not rejected.
    pub(crate) fn submit_transaction(&mut self, ledger: &mut Ledger) {
        let date = if self.txn_date.trim().is_empty() {
            today()
        } else {
            self.txn_date.trim().to_string()
        };
        let category = Category::all()
            .get(self.txn_category)
            .copied()
            .unwrap_or(Category::Food);
        let kind = TransactionKind::all()
            .get(self.txn_kind)
            .copied()
            .unwrap_or(TransactionKind::Expense);
        let amount = coerce_amount(&self.txn_amount);

        ledger.append_transaction(Transaction::new(date, category, amount, kind));
        self.set_status("Transaction added!");
        self.reset_transaction_form();
        self.refresh_report(ledger);
    }

    /// Append a savings goal. An empty name is the one validation rule in
    /// the system: the submission is silently discarded, with no status
    /// change, and the form keeps its contents.
    pub(crate) fn submit_goal(&mut self, ledger: &mut Ledger) {
        let name = self.goal_name.trim().to_string();
        if name.is_empty() {
            return;
        }

        let target = coerce_amount(&self.goal_target);
        let progress = coerce_amount(&self.goal_progress);

        ledger.append_savings_goal(SavingsGoal::new(name, target, progress));
        self.set_status("Savings goal added!");
        self.reset_goal_form();
        self.refresh_report(ledger);
    }

    pub(crate) fn reset_transaction_form(&mut self) {
        self.txn_date = today();
        self.txn_category = 0;
        self.txn_amount.clear();
        self.txn_kind = 0;
        self.txn_field = 0;
    }

    pub(crate) fn reset_goal_form(&mut self) {
        self.goal_name.clear();
        self.goal_target.clear();
        self.goal_progress.clear();
        self.goal_field = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Coerce a money field at submit time: empty defaults to 0, a parsable
/// negative value is floored to 0, anything else is kept verbatim (the
/// report pipeline treats unparsable text as missing).
fn coerce_amount(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "0".into();
    }
    match Decimal::from_str(trimmed) {
        Ok(value) if value < Decimal::ZERO => "0".into(),
        _ => trimmed.to_string(),
    }
}
