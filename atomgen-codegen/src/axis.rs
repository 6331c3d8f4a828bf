//! Operator/type applicability tables.
//!
//! Output is compared byte-for-byte against the previous run, so the order
//! of sections, rows and operators here is the order of the generated code.

use atomgen_core::Category;

const NUMBER: &[Category] = &[Category::Signed, Category::Unsigned, Category::Float];
const INTEGER: &[Category] = &[Category::Signed, Category::Unsigned];
const SIGNED_OR_FLOAT: &[Category] = &[Category::Signed, Category::Float];
const SIGNED: &[Category] = &[Category::Signed];
const STRING: &[Category] = &[Category::String];

/// Fragment rendered once per type as a type alias.
pub const TYPEALIAS: &str = "typealias";
/// Opens the initializer extension for a type.
pub const INITIALIZE_HEAD: &str = "initialize-head";
/// One initializer, from the wrapper of the bound source type.
pub const INITIALIZE_BODY: &str = "initialize-body";
/// Closes the initializer extension.
pub const INITIALIZE_FOOT: &str = "initialize-foot";

/// Per-type test function wrapper.
pub const TEST: &str = "Test";
/// Variable setup shared by every test snippet.
pub const INIT_VARS: &str = "InitVars";
/// Assertion shared by every test snippet.
pub const ASSERT: &str = "Assert";

/// Shape of the test snippet that exercises an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    /// `n = n op x`
    Join,
    /// `op n`
    Prefix,
    /// `n = op n`
    PrefixAssign,
    /// `n op`
    Postfix,
    /// `n op= x`
    Modify,
}

impl Snippet {
    pub const ALL: [Snippet; 5] = [
        Snippet::Join,
        Snippet::Prefix,
        Snippet::PrefixAssign,
        Snippet::Postfix,
        Snippet::Modify,
    ];

    /// Name of the test-template fragment for this shape.
    pub fn fragment(&self) -> &'static str {
        match self {
            Snippet::Join => "Operator['join']",
            Snippet::Prefix => "Operator['prefix']",
            Snippet::PrefixAssign => "Operator['prefix-assign']",
            Snippet::Postfix => "Operator['postfix']",
            Snippet::Modify => "Operator['modify']",
        }
    }
}

/// One row of a section: operators crossed with the types of some categories.
#[derive(Debug, Clone, Copy)]
pub struct AxisRule {
    pub operators: &'static [&'static str],
    pub categories: &'static [Category],
    pub snippet: Snippet,
}

impl AxisRule {
    pub fn applies_to(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// An operator section of the generated source.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    /// Source-template fragment rendered for each combination
    pub fragment: &'static str,
    pub rules: &'static [AxisRule],
}

impl Section {
    /// Whether `operator` is generated for types of `category` in this section.
    pub fn applies(&self, operator: &str, category: Category) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.applies_to(category) && rule.operators.contains(&operator))
    }
}

pub const ARITHMETIC: Section = Section {
    name: "arithmetic",
    fragment: "arithmetic",
    rules: &[
        AxisRule {
            operators: &["+", "-", "*", "/", "%"],
            categories: NUMBER,
            snippet: Snippet::Join,
        },
        AxisRule {
            operators: &["<<", ">>", "^", "&", "&+", "&-", "&*"],
            categories: INTEGER,
            snippet: Snippet::Join,
        },
        AxisRule {
            operators: &["+"],
            categories: STRING,
            snippet: Snippet::Join,
        },
    ],
};

pub const PREFIX: Section = Section {
    name: "prefix",
    fragment: "prefix",
    rules: &[
        AxisRule {
            operators: &["++", "--"],
            categories: NUMBER,
            snippet: Snippet::Prefix,
        },
        AxisRule {
            operators: &["+", "-"],
            categories: SIGNED_OR_FLOAT,
            snippet: Snippet::PrefixAssign,
        },
        AxisRule {
            operators: &["~"],
            categories: SIGNED,
            snippet: Snippet::PrefixAssign,
        },
    ],
};

pub const POSTFIX: Section = Section {
    name: "postfix",
    fragment: "postfix",
    rules: &[AxisRule {
        operators: &["++", "--"],
        categories: NUMBER,
        snippet: Snippet::Postfix,
    }],
};

pub const MODIFY: Section = Section {
    name: "compound-assign",
    fragment: "modify",
    rules: &[
        AxisRule {
            operators: &["+=", "-=", "*=", "/=", "%="],
            categories: NUMBER,
            snippet: Snippet::Modify,
        },
        AxisRule {
            operators: &["+="],
            categories: STRING,
            snippet: Snippet::Modify,
        },
        AxisRule {
            operators: &["<<=", ">>=", "^=", "&="],
            categories: INTEGER,
            snippet: Snippet::Modify,
        },
    ],
};

/// Operator sections in output order.
pub const OPERATOR_SECTIONS: [Section; 4] = [ARITHMETIC, PREFIX, POSTFIX, MODIFY];
