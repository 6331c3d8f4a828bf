//! Primitive type catalog.
//!
//! Built once from the manifest's [`TypeTable`] and never mutated. The
//! derived groupings are computed as fresh lists so no two selections share
//! storage.

use atomgen_core::Category;
use atomgen_manifest::TypeTable;

/// Type names classified by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    entries: Vec<(String, Category)>,
    number: Vec<String>,
    all: Vec<String>,
}

impl TypeCatalog {
    /// Build a catalog from a type table.
    pub fn new(table: &TypeTable) -> Self {
        let entries: Vec<(String, Category)> = table
            .entries()
            .map(|(name, category)| (name.to_string(), category))
            .collect();

        let mut catalog = Self {
            entries,
            number: Vec::new(),
            all: Vec::new(),
        };
        catalog.number = catalog.owned(&Category::NUMBER);
        catalog.all = catalog.owned(&Category::ALL);
        catalog
    }

    /// The default Swift primitive catalog.
    pub fn swift() -> Self {
        Self::new(&TypeTable::default())
    }

    /// Names in one category, in declaration order.
    pub fn category(&self, category: Category) -> Vec<&str> {
        self.select(&[category])
    }

    /// Names in the given categories, grouped in the order the categories are
    /// listed.
    ///
    /// `select(&[Signed, Float])` yields every signed type followed by every
    /// float type, regardless of how the table interleaves them.
    pub fn select(&self, categories: &[Category]) -> Vec<&str> {
        categories
            .iter()
            .flat_map(move |category| {
                self.entries
                    .iter()
                    .filter(move |(_, c)| c == category)
                    .map(|(name, _)| name.as_str())
            })
            .collect()
    }

    fn owned(&self, categories: &[Category]) -> Vec<String> {
        self.select(categories)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Signed, unsigned and floating-point types.
    pub fn number(&self) -> &[String] {
        &self.number
    }

    /// Every type: numbers, then booleans, then strings.
    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Look up the category of a type name.
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, category)| *category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
