/// The closed set of expense categories. `Food` is the first option and the
/// reset target after a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food,
    Entertainment,
    Transportation,
    Bills,
    Rent,
    Utilities,
    Healthcare,
    Education,
    Shopping,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Transportation => "Transportation",
            Self::Bills => "Bills",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Others => "Others",
        }
    }

    /// Lenient parse for stored rows and CLI input. Anything unrecognized
    /// lands in `Others` so a hand-edited database still loads.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "entertainment" => Self::Entertainment,
            "transportation" | "transport" => Self::Transportation,
            "bills" => Self::Bills,
            "rent" => Self::Rent,
            "utilities" => Self::Utilities,
            "healthcare" | "health" => Self::Healthcare,
            "education" => Self::Education,
            "shopping" => Self::Shopping,
            _ => Self::Others,
        }
    }

    /// Strict variant of [`parse`](Self::parse) for user-typed input, where
    /// a typo should be an error rather than a silent `Others`.
    pub fn parse_strict(s: &str) -> Option<Self> {
        let parsed = Self::parse(s);
        if parsed == Self::Others && !s.trim().eq_ignore_ascii_case("others") {
            None
        } else {
            Some(parsed)
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Entertainment,
            Self::Transportation,
            Self::Bills,
            Self::Rent,
            Self::Utilities,
            Self::Healthcare,
            Self::Education,
            Self::Shopping,
            Self::Others,
        ]
    }

    /// The next category in presentation order, wrapping at the end.
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The previous category in presentation order, wrapping at the start.
    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Food
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
