//! Pipeline orchestrator.

use eyre::Result;

use super::{
    GenerationContext, Phase, PhaseInfo, Plugin,
    phases::{ExpandPhase, LintPhase, NormalizePhase},
};

/// Runs phases in order, calling plugin hooks around each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(TracingPlugin::new());
///
/// let ctx = pipeline.run(ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// The full pipeline: lint, expand, normalize.
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(LintPhase::new()),
                Box::new(ExpandPhase),
                Box::new(NormalizePhase::new()),
            ],
            plugins: Vec::new(),
        }
    }

    /// A pipeline that only runs the lints.
    pub fn lint_only() -> Self {
        Self {
            phases: vec![Box::new(LintPhase::new())],
            plugins: Vec::new(),
        }
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Phases in execution order.
    pub fn phases(&self) -> Vec<PhaseInfo> {
        self.phases.iter().map(|p| p.info()).collect()
    }

    /// Run every phase on `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal phase or plugin error.
    pub fn run(&self, mut ctx: GenerationContext) -> Result<GenerationContext> {
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }
        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use atomgen_manifest::{Job, JobKind, Syntax};
    use atomgen_template::Template;

    use super::*;
    use crate::{TypeCatalog, pipeline::TracingPlugin};

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(phase.to_string());
            }
            Ok(())
        }
    }

    fn make_context(kind: JobKind) -> GenerationContext {
        GenerationContext::new(
            Job::new("job", "template.swift", "out.swift", kind),
            Template::parse("// header\n// TEMPLATE: Test\nfunc test{{T}}() {}"),
            TypeCatalog::swift(),
            Syntax::default(),
        )
    }

    #[test]
    fn test_pipeline_produces_output() {
        let ctx = Pipeline::new()
            .plugin(TracingPlugin::new())
            .run(make_context(JobKind::Tests))
            .expect("pipeline should succeed");

        let output = ctx.output.as_deref().unwrap();
        assert!(output.starts_with("// header\n\nfunc testInt() {}\n"));
        assert!(output.ends_with("func testString() {}\n"));
        // Tests template lacks the operator snippets
        assert!(ctx.has_warnings());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(make_context(JobKind::Source))
            .expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_phase_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        Pipeline::new()
            .plugin(RecordingPlugin(seen.clone()))
            .run(make_context(JobKind::Tests))
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["lint", "expand", "normalize"]);
    }

    #[test]
    fn test_lint_only_leaves_output_empty() {
        let pipeline = Pipeline::lint_only();
        let ctx = pipeline.run(make_context(JobKind::Tests)).unwrap();

        assert_eq!(pipeline.phases().len(), 1);
        assert!(ctx.output.is_none());
        assert!(!ctx.diagnostics.is_empty());
    }
}
