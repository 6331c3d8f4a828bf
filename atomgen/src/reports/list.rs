//! List command report data structures.

use super::output::{Output, Report};

/// The type catalog, operator table, pipeline and jobs of a manifest.
#[derive(Debug)]
pub struct ListReport {
    /// `(category, type names)` in catalog order.
    pub types: Vec<(String, Vec<String>)>,
    pub sections: Vec<SectionRow>,
    /// `(name, description)` of each phase, in run order.
    pub phases: Vec<(String, String)>,
    /// `(name, description)` of each lint, in run order.
    pub lints: Vec<(String, String)>,
    pub jobs: Vec<JobRow>,
}

/// One axis rule of an operator section.
#[derive(Debug)]
pub struct SectionRow {
    pub section: String,
    pub operators: Vec<String>,
    pub categories: Vec<String>,
    /// Test-template fragment that exercises these operators
    pub snippet: String,
}

#[derive(Debug)]
pub struct JobRow {
    pub name: String,
    pub kind: String,
    pub template: String,
    pub destination: String,
    pub normalize: bool,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Types");
        for (category, names) in &self.types {
            let names = if names.is_empty() {
                "(none)".to_string()
            } else {
                names.join(", ")
            };
            out.list_item(&format!("{}: {}", category, names));
        }

        out.newline();
        out.section("Operators");
        for row in &self.sections {
            out.list_item(&format!(
                "{} [{}] for {} via {}",
                row.section,
                row.operators.join(" "),
                row.categories.join(", "),
                row.snippet
            ));
        }

        out.newline();
        out.section("Pipeline");
        for (name, description) in &self.phases {
            out.list_item(&format!("{}: {}", name, description));
        }

        out.newline();
        out.section("Lints");
        for (name, description) in &self.lints {
            out.list_item(&format!("{}: {}", name, description));
        }

        out.newline();
        out.section("Jobs");
        for job in &self.jobs {
            let normalize = if job.normalize { ", normalized" } else { "" };
            out.list_item(&format!(
                "{} ({}{}): {} → {}",
                job.name, job.kind, normalize, job.template, job.destination
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_list() {
        let report = ListReport {
            types: vec![
                ("signed".to_string(), vec!["Int".to_string(), "Int8".to_string()]),
                ("bool".to_string(), vec![]),
            ],
            sections: vec![SectionRow {
                section: "prefix".to_string(),
                operators: vec!["~".to_string()],
                categories: vec!["signed".to_string()],
                snippet: "Operator['prefix-assign']".to_string(),
            }],
            phases: vec![("lint".to_string(), "Check the template".to_string())],
            lints: vec![(
                "duplicate-fragment".to_string(),
                "Detect fragments declared twice".to_string(),
            )],
            jobs: vec![JobRow {
                name: "atomic-test".to_string(),
                kind: "tests".to_string(),
                template: "atomic-test-template.swift".to_string(),
                destination: "../Tests/atomic-test.swift".to_string(),
                normalize: true,
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Types:",
                "  - signed: Int, Int8",
                "  - bool: (none)",
                "",
                "Operators:",
                "  - prefix [~] for signed via Operator['prefix-assign']",
                "",
                "Pipeline:",
                "  - lint: Check the template",
                "",
                "Lints:",
                "  - duplicate-fragment: Detect fragments declared twice",
                "",
                "Jobs:",
                "  - atomic-test (tests, normalized): atomic-test-template.swift → ../Tests/atomic-test.swift",
            ]
        );
    }
}
