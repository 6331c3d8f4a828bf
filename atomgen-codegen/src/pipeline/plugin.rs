//! Pipeline plugin hooks.

use std::{sync::Mutex, time::Instant};

use eyre::Result;
use tracing::debug;

use super::GenerationContext;

/// Receives callbacks around every phase.
///
/// Hooks may inspect or modify the context. Returning an error aborts the
/// pipeline.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}

/// Logs phase entry and exit with the elapsed time.
#[derive(Debug, Default)]
pub struct TracingPlugin {
    started: Mutex<Option<Instant>>,
}

impl TracingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        debug!(phase, job = %ctx.job.name, "phase started");
        if let Ok(mut started) = self.started.lock() {
            *started = Some(Instant::now());
        }
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.take())
            .map(|start| start.elapsed());

        debug!(
            phase,
            job = %ctx.job.name,
            elapsed = ?elapsed,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}
