//! Expansion of the bundled Swift templates.
//!
//! These tests run the source and test-suite drivers over the real
//! templates in `templates/` and check the structure of the output.

use atomgen_codegen::{
    Normalizer, Renderer, SourceGenerator, SuiteGenerator, TypeCatalog, WrapperRewriter,
};
use atomgen_template::Template;

const SOURCE_TEMPLATE: &str = include_str!("../../templates/atomic-template.swift");
const TESTS_TEMPLATE: &str = include_str!("../../templates/atomic-test-template.swift");

fn rewriter() -> WrapperRewriter {
    WrapperRewriter::new("Atomic", "A")
}

/// Generated source, with the header text stripped off.
fn generate_source() -> (String, String) {
    let template = Template::parse(SOURCE_TEMPLATE);
    let rewriter = rewriter();
    let catalog = TypeCatalog::swift();
    let output = SourceGenerator::new(Renderer::new(&template, &rewriter), &catalog).generate();
    let body = output[template.base().len()..].to_string();
    (output, body)
}

fn generate_suite() -> String {
    let template = Template::parse(TESTS_TEMPLATE);
    let rewriter = rewriter();
    let catalog = TypeCatalog::swift();
    let raw = SuiteGenerator::new(Renderer::new(&template, &rewriter), &catalog, 16)
        .generate()
        .expect("suite should resolve");
    Normalizer::new().normalize(&raw).text
}

#[test]
fn test_every_type_has_alias_and_extension() {
    let (output, _) = generate_source();

    for ty in TypeCatalog::swift().all() {
        assert!(
            output.contains(&format!("public typealias {ty}A = Atomic<{ty}>\n")),
            "missing alias for {ty}"
        );
        assert!(
            output.contains(&format!(
                "public extension {ty} {{\n\tpublic init (_ atomic : {ty}A) {{ self = {ty}(atomic.load()) }}\n"
            )),
            "missing extension for {ty}"
        );
    }
    assert_eq!(output.matches("public typealias ").count(), 15);
}

#[test]
fn test_header_keeps_generic_overloads() {
    let (output, body) = generate_source();
    let header = &output[..output.len() - body.len()];

    for op in ["==", "!=", "&&", "||", "<=", ">=", ">", "<"] {
        let forms = header
            .lines()
            .filter(|line| line.starts_with(&format!("public func {op}<T : ")))
            .count();
        assert_eq!(forms, 3, "expected three operand forms of '{op}'");
    }
    assert!(header.contains(
        "public prefix func !<T : BooleanType>(x: Atomic<T>) -> Atomic<Bool>"
    ));
    assert!(header.contains("    /// Loads the value atomically.\n"));
    assert!(header.contains("    /// Exchanges / Swaps values atomically.\n"));
}

#[test]
fn test_cross_initializers_only_for_numbers() {
    let (output, _) = generate_source();

    assert!(output.contains("\tpublic init (_ atomic : Float80A) { self = Int(atomic.load()) }\n"));
    assert!(output.contains(
        "\tpublic init (_ atomic : UInt8A) { self = Double(atomic.load()) }\n"
    ));
    assert!(output.contains(
        "public extension Bool {\n\tpublic init (_ atomic : BoolA) { self = Bool(atomic.load()) }\n}\n"
    ));
    assert!(output.contains(
        "public extension String {\n\tpublic init (_ atomic : StringA) { self = String(atomic.load()) }\n}\n"
    ));
    // Each number type converts from the 12 others
    assert_eq!(output.matches("{ self = Int8(atomic.load()) }").count(), 13);
}

#[test]
fn test_operators_follow_category_filters() {
    let (output, _) = generate_source();

    assert!(output.contains("public func %(lhs: DoubleA, rhs: DoubleA) -> DoubleA"));
    assert!(output.contains("public func +(lhs: StringA, rhs: StringA) -> StringA"));
    assert!(output.contains("public func +=(lhs: StringA, rhs: StringA)"));
    assert!(output.contains("public prefix func ~(x: Int8A) -> Int8A"));
    assert!(output.contains("public prefix func -(x: FloatA) -> FloatA"));
    assert!(output.contains("public postfix func --(x: UInt16A) -> UInt16A"));

    assert!(!output.contains("public func <<(lhs: DoubleA"));
    assert!(!output.contains("public func &+(lhs: Float80A"));
    assert!(!output.contains("public func -(lhs: StringA"));
    assert!(!output.contains("public prefix func ~(x: UIntA)"));
    assert!(!output.contains("public prefix func -(x: UInt32A)"));
    assert!(!output.contains("public prefix func ++(x: BoolA)"));
    assert!(!output.contains("public func ^=(lhs: DoubleA"));
}

#[test]
fn test_operators_outer_types_inner() {
    let (output, _) = generate_source();

    let position = |needle: &str| {
        output
            .find(needle)
            .unwrap_or_else(|| panic!("'{needle}' not generated"))
    };

    assert!(position("public func +(lhs: IntA") < position("public func +(lhs: Int64A"));
    assert!(position("public func +(lhs: Float80A") < position("public func -(lhs: IntA"));
    assert!(position("public func &*(lhs: UInt8A") < position("public func +(lhs: StringA"));
    assert!(position("public func +(lhs: StringA") < position("public prefix func ++(x: IntA"));
    assert!(position("public postfix func --(x: Float80A") < position("public func +=(lhs: IntA"));
}

#[test]
fn test_wrapper_only_spelled_out_in_aliases() {
    let (_, body) = generate_source();

    for line in body.lines().filter(|line| line.contains("Atomic<")) {
        assert!(line.starts_with("public typealias "), "unrewritten: {line}");
    }
    assert!(!body.contains("{{"));
}

#[test]
fn test_suite_has_one_test_per_type() {
    let suite = generate_suite();

    assert_eq!(suite.matches("extension Tests {").count(), 15);
    assert!(suite.contains("    func testAtomicBool() {\n\n    }\n"));
    assert!(suite.contains("var (n, a) = (String(\"47\"), StringA(\"47\"))"));
    assert!(suite.contains("n = n % 2"));
    assert_eq!(suite.matches("n = ~n").count(), 5);
    assert!(!suite.contains("{{"));
}

#[test]
fn test_snippets_end_with_blank_line() {
    let suite = generate_suite();

    let start = suite.find("func testAtomicInt() {").expect("Int test present");
    let rest = &suite[start..];
    let end = rest.find("extension Tests {").unwrap_or(rest.len());
    let function = rest[..end].trim_end();

    assert!(
        function.ends_with("        }\n\n    }\n}"),
        "unexpected ending: {:?}",
        &function[function.len() - 40..]
    );
}

#[test]
fn test_suite_drops_increment_blocks() {
    let suite = generate_suite();

    for marker in ["++n", "n++", "--n", "n--"] {
        assert!(!suite.contains(marker), "'{marker}' survived normalization");
    }
    assert!(suite.contains("n += 2"));
    assert!(suite.contains("n = -n"));
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate_source(), generate_source());
    assert_eq!(generate_suite(), generate_suite());
}
