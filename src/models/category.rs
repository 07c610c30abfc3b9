/// The closed set of spending categories offered by the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Entertainment,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
