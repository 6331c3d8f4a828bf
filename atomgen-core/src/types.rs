use std::fmt;

/// Classification of a primitive type name.
///
/// Every type in a catalog belongs to exactly one category. The broader
/// groupings used by the generator ("number", "all") are unions of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Signed,
    Unsigned,
    Float,
    Bool,
    String,
}

impl Category {
    /// Every category in catalog declaration order.
    pub const ALL: [Category; 5] = [
        Category::Signed,
        Category::Unsigned,
        Category::Float,
        Category::Bool,
        Category::String,
    ];

    /// Categories that make up the "number" union.
    pub const NUMBER: [Category; 3] = [Category::Signed, Category::Unsigned, Category::Float];

    /// Get the category name (used in atomgen.toml)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Signed => "signed",
            Category::Unsigned => "unsigned",
            Category::Float => "float",
            Category::Bool => "bool",
            Category::String => "string",
        }
    }

    /// Returns true for signed, unsigned and floating-point types.
    pub fn is_number(&self) -> bool {
        Self::NUMBER.contains(self)
    }

    /// Literal used to seed values in generated tests.
    pub fn default_literal(&self) -> &'static str {
        match self {
            Category::Bool => "true",
            _ => "47",
        }
    }

    /// Quote character wrapped around literals of this category.
    pub fn delimiter_literal(&self) -> &'static str {
        match self {
            Category::String => "\"",
            _ => "",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
