/// A named savings target with current progress toward it.
///
/// `target_amount` is stored and shown in the goals table but never
/// plotted or compared against `progress`.
#[derive(Debug, Clone)]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: String,
    pub progress: String,
}

impl SavingsGoal {
    pub fn new(name: String, target_amount: String, progress: String) -> Self {
        Self {
            name,
            target_amount,
            progress,
        }
    }
}
