use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[Self::Expense, Self::Income]
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated money movement as entered on the form.
///
/// `date` and `amount` keep the submitted text verbatim; the report
/// pipeline parses them and treats anything unparsable as missing.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub date: String,
    pub category: Category,
    pub amount: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(date: String, category: Category, amount: String, kind: TransactionKind) -> Self {
        Self {
            date,
            category,
            amount,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}
