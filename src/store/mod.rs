use crate::models::{SavingsGoal, Transaction};

/// The session-scoped state store: two append-only tables that live for
/// the lifetime of the process. Appends always succeed; there is no
/// update, delete, or uniqueness constraint, and nothing is persisted.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    savings_goals: Vec<SavingsGoal>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append_transaction(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    pub(crate) fn append_savings_goal(&mut self, goal: SavingsGoal) {
        self.savings_goals.push(goal);
    }

    /// Full transaction table in insertion order.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Full savings-goal table in insertion order.
    pub(crate) fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }
}
