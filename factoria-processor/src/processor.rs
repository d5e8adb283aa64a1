use factoria_core::{
    DiagnosticKind, Element, Filer, ProcessingEnvironment, Processor, RoundEnvironment,
    SourceFileWriter,
};
use strum::Display;

use crate::analysis::Analysis;
use crate::codegen::FactoryCodegen;
use crate::config::ProcessorConfig;
use crate::discovery::factory_class_names;
use crate::error::Error;
use crate::queue::PendingQueue;

/// What happened to a pending target during one round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Outcome {
    /// The factory was written; the target is done.
    Emitted,
    /// Writing the factory failed and was reported; the target is not retried.
    Failed,
    /// The target was rejected and reported; it is not retried.
    Rejected,
    /// A parameter type is not resolvable yet; the target is retried next round.
    Deferred,
    /// The target is missing or no longer annotated; it stays pending.
    Skipped,
}

impl Outcome {
    /// Whether the target leaves the pending queue.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Emitted | Self::Failed | Self::Rejected)
    }
}

/// Generates a companion factory class for every class annotated with `Factory`.
///
/// Targets whose constructors refer to types that do not exist yet are kept
/// pending and retried in later rounds, once other generators have produced
/// those types.
#[derive(Debug, Default)]
pub struct FactoryProcessor {
    config: ProcessorConfig,
    pending: PendingQueue,
}

impl FactoryProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            pending: PendingQueue::new(),
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// The targets still waiting to be generated.
    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }
}

impl Processor for FactoryProcessor {
    fn supported_annotation_types(&self) -> Vec<String> {
        vec![
            self.config.factory_annotation(),
            self.config.unbound_annotation(),
        ]
    }

    fn process(&mut self, round: &dyn RoundEnvironment, env: &mut dyn ProcessingEnvironment) -> bool {
        let discovered = factory_class_names(round, env.messager(), &self.config);
        self.pending.extend(discovered);

        let config = &self.config;
        self.pending.retain(|name| {
            let outcome = process_target(name, config, &mut *env);
            log::debug!("Factory target {name}: {outcome}");
            !outcome.is_final()
        });

        if round.processing_over() && !self.pending.is_empty() {
            log::warn!(
                "Processing is over with {} unresolved factory target(s)",
                self.pending.len()
            );
        }

        false
    }
}

/// Analyzes and emits one pending target.
fn process_target(name: &str, config: &ProcessorConfig, env: &mut dyn ProcessingEnvironment) -> Outcome {
    // Elements go stale across rounds, so always look the target up again.
    let Some(element) = env.type_element(name) else {
        log::warn!("Factory target {name} is not known to the host");
        return Outcome::Skipped;
    };

    if !element.has_annotation(&config.factory_annotation()) {
        return Outcome::Skipped;
    }

    let analysis = match Analysis::from(&element, config) {
        Ok(analysis) => analysis,
        Err(err) if err.is_deferrable() => {
            log::debug!("Deferring {name}: {err}");
            return Outcome::Deferred;
        }
        Err(err @ Error::NotAnOuterClass) => {
            let reported = element.enclosing_element().unwrap_or(&element);
            env.messager()
                .print_message(DiagnosticKind::Error, &err.to_string(), Some(reported));
            return Outcome::Rejected;
        }
        Err(err) => {
            env.messager()
                .print_message(DiagnosticKind::Error, &err.to_string(), Some(&element));
            return Outcome::Rejected;
        }
    };

    match write_factory(&analysis, config, env.filer(), &element) {
        Ok(()) => {
            log::debug!("Wrote {}", analysis.qualified_factory_name());
            Outcome::Emitted
        }
        Err(err) => {
            env.messager()
                .print_message(DiagnosticKind::Error, &err.to_string(), None);
            Outcome::Failed
        }
    }
}

/// Writes the factory source file; the file is released on every path.
fn write_factory(
    analysis: &Analysis,
    config: &ProcessorConfig,
    filer: &mut dyn Filer,
    origin: &Element,
) -> Result<(), Error> {
    let mut writer = SourceFileWriter::create(filer, &analysis.qualified_factory_name(), &[origin])?;
    FactoryCodegen::new(analysis, config).generate(&mut writer)?;
    writer.close()?;
    Ok(())
}
