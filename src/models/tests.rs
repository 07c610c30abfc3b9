use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_as_str() {
    assert_eq!(Category::Food.as_str(), "Food");
    assert_eq!(Category::Transportation.as_str(), "Transportation");
    assert_eq!(Category::Entertainment.as_str(), "Entertainment");
    assert_eq!(Category::Other.as_str(), "Other");
}

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0], Category::Food);
    assert_eq!(all[3], Category::Other);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Food), "Food");
}

// ── TransactionKind ───────────────────────────────────────────

#[test]
fn test_kind_as_str() {
    assert_eq!(TransactionKind::Expense.as_str(), "Expense");
    assert_eq!(TransactionKind::Income.as_str(), "Income");
}

#[test]
fn test_kind_all() {
    let all = TransactionKind::all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], TransactionKind::Expense);
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_new_keeps_text_verbatim() {
    let txn = Transaction::new(
        "2024-01-15".into(),
        Category::Food,
        "20.50".into(),
        TransactionKind::Expense,
    );
    assert_eq!(txn.date, "2024-01-15");
    assert_eq!(txn.amount, "20.50");
    assert_eq!(txn.category, Category::Food);
    assert_eq!(txn.kind, TransactionKind::Expense);
    assert!(!txn.is_income());
}

#[test]
fn test_transaction_income_predicate() {
    let txn = Transaction::new(
        "2024-01-15".into(),
        Category::Other,
        "0".into(),
        TransactionKind::Income,
    );
    assert!(txn.is_income());
}

// ── SavingsGoal ───────────────────────────────────────────────

#[test]
fn test_savings_goal_new() {
    let goal = SavingsGoal::new("Vacation".into(), "1000".into(), "250".into());
    assert_eq!(goal.name, "Vacation");
    assert_eq!(goal.target_amount, "1000");
    assert_eq!(goal.progress, "250");
}
