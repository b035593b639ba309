pub const CATEGORY_COLUMN: &str = "gender_category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderCategory {
    Masculine,
    Neutral,
    Feminine,
}

pub fn category_order() -> &'static [GenderCategory; 3] {
    &[
        GenderCategory::Masculine,
        GenderCategory::Neutral,
        GenderCategory::Feminine,
    ]
}

impl GenderCategory {
    pub fn label(self) -> &'static str {
        match self {
            GenderCategory::Masculine => "masculine",
            GenderCategory::Neutral => "neutral",
            GenderCategory::Feminine => "feminine",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GenderCategory::Masculine => "Masculine",
            GenderCategory::Neutral => "Neutral",
            GenderCategory::Feminine => "Feminine",
        }
    }

    /// Exact, case-sensitive match against the coded labels. Anything else,
    /// including surrounding whitespace, is not a known category.
    pub fn from_label(label: &str) -> Option<Self> {
        category_order().iter().copied().find(|c| c.label() == label)
    }

    pub fn index(self) -> usize {
        match self {
            GenderCategory::Masculine => 0,
            GenderCategory::Neutral => 1,
            GenderCategory::Feminine => 2,
        }
    }
}

impl std::fmt::Display for GenderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
