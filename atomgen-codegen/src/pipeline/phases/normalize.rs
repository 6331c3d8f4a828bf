//! Normalize phase - rewrites deprecated idioms in the expanded output.

use eyre::{Result, bail};
use tracing::debug;

use crate::{
    Normalizer,
    pipeline::{GenerationContext, Phase},
};

/// Applies the [`Normalizer`] when the job asks for it.
#[derive(Default)]
pub struct NormalizePhase {
    normalizer: Normalizer,
}

impl NormalizePhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }
}

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Rewrite deprecated increment and decrement idioms"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        if !ctx.job.normalizes() {
            debug!(job = %ctx.job.name, "normalization disabled");
            return Ok(());
        }
        let Some(output) = ctx.output.as_deref() else {
            bail!("nothing to normalize for job '{}'", ctx.job.name);
        };

        let normalized = self.normalizer.normalize(output);
        if normalized.aborted {
            ctx.add_warning(
                "normalize",
                "deprecated marker outside a 'do {' block; the rest of the output was left as is",
            );
        }
        ctx.add_info(
            "normalize",
            format!(
                "rewrote {} statement(s), removed {} block(s)",
                normalized.replaced, normalized.removed
            ),
        );
        ctx.output = Some(normalized.text);
        Ok(())
    }
}
