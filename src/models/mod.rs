mod category;
mod savings_goal;
mod transaction;

pub use category::Category;
pub use savings_goal::SavingsGoal;
pub use transaction::{Transaction, TransactionKind};

#[cfg(test)]
mod tests;
