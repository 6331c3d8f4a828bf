//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// Name and description of a phase, for reports.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A step of the generation pipeline.
///
/// Phases run in order and share one [`GenerationContext`]. A phase returns
/// an error only when the job cannot continue; anything else is recorded as
/// a diagnostic.
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
