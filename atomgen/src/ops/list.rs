//! List operation - describe the catalog, operator table, pipeline and jobs.

use atomgen_codegen::{
    TypeCatalog,
    axis::OPERATOR_SECTIONS,
    pipeline::{Pipeline, phases::LintPhase},
};
use atomgen_core::Category;
use atomgen_manifest::Manifest;

use crate::reports::{JobRow, ListReport, SectionRow};

/// Execute the list operation.
pub fn list(manifest: &Manifest) -> ListReport {
    let catalog = TypeCatalog::new(&manifest.types);

    let types = Category::ALL
        .iter()
        .map(|category| {
            let names = catalog
                .category(*category)
                .into_iter()
                .map(str::to_string)
                .collect();
            (category.as_str().to_string(), names)
        })
        .collect();

    let sections = OPERATOR_SECTIONS
        .iter()
        .flat_map(|section| {
            section.rules.iter().map(move |rule| SectionRow {
                section: section.name.to_string(),
                operators: rule.operators.iter().map(|op| op.to_string()).collect(),
                categories: rule
                    .categories
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect(),
                snippet: rule.snippet.fragment().to_string(),
            })
        })
        .collect();

    let phases = Pipeline::new()
        .phases()
        .into_iter()
        .map(|info| (info.name.to_string(), info.description.to_string()))
        .collect();

    let lints = LintPhase::new()
        .lint_info()
        .into_iter()
        .map(|info| (info.name.to_string(), info.description.to_string()))
        .collect();

    let jobs = manifest
        .jobs
        .iter()
        .map(|job| JobRow {
            name: job.name.clone(),
            kind: job.kind.to_string(),
            template: job.template.display().to_string(),
            destination: job.destination.display().to_string(),
            normalize: job.normalizes(),
        })
        .collect();

    ListReport {
        types,
        sections,
        phases,
        lints,
        jobs,
    }
}
