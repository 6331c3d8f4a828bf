//! Expand phase - renders the template across the type catalog.

use atomgen_manifest::JobKind;
use eyre::{Result, WrapErr};
use tracing::info;

use crate::{
    Renderer, SourceGenerator, SuiteGenerator,
    pipeline::{GenerationContext, Phase},
};

/// Runs the source or test-suite axis driver, depending on the job kind.
pub struct ExpandPhase;

impl Phase for ExpandPhase {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn description(&self) -> &'static str {
        "Render every valid operator and type combination"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let rewriter = ctx.rewriter();
        let renderer = Renderer::new(&ctx.template, &rewriter);

        let output = match ctx.job.kind {
            JobKind::Source => SourceGenerator::new(renderer, &ctx.catalog).generate(),
            JobKind::Tests => {
                SuiteGenerator::new(renderer, &ctx.catalog, ctx.syntax.max_resolve_passes)
                    .generate()
                    .wrap_err_with(|| format!("failed to expand job '{}'", ctx.job.name))?
            }
        };

        info!(
            job = %ctx.job.name,
            kind = %ctx.job.kind,
            bytes = output.len(),
            "expanded template"
        );
        ctx.output = Some(output);
        Ok(())
    }
}
