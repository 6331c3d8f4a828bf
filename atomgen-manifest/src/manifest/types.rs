//! Primitive type table.

use atomgen_core::Category;
use serde::Deserialize;

/// Type names grouped by category, each list in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeTable {
    pub signed: Vec<String>,
    pub unsigned: Vec<String>,
    pub float: Vec<String>,
    pub bool: Vec<String>,
    pub string: Vec<String>,
}

impl TypeTable {
    /// Names declared for a category.
    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Signed => &self.signed,
            Category::Unsigned => &self.unsigned,
            Category::Float => &self.float,
            Category::Bool => &self.bool,
            Category::String => &self.string,
        }
    }

    /// Every `(name, category)` pair, categories in [`Category::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Category)> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.names(category)
                .iter()
                .map(move |name| (name.as_str(), category))
        })
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            signed: names(&["Int", "Int64", "Int32", "Int16", "Int8"]),
            unsigned: names(&["UInt", "UInt64", "UInt32", "UInt16", "UInt8"]),
            float: names(&["Double", "Float", "Float80"]),
            bool: names(&["Bool"]),
            string: names(&["String"]),
        }
    }
}
