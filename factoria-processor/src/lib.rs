//! Processor generating companion factory classes.
//!
//! For every top-level class annotated with `Factory`, this crate writes a
//! factory class whose constructor takes the *bound* parameters of the
//! target's constructors once, and whose factory methods take the remaining
//! *unbound* parameters on every call.
//!
//! Processing follows the host's round protocol: targets whose constructors
//! refer to types another generator has not produced yet are kept in a
//! pending queue and retried in the next round.
//!
//! # Annotation Options
//!
//! - `name` - Simple name of the generated class (default `<Target>Factory`).
//! - `modifiers` / `methodModifiers` - Modifiers of the class and of its
//!   factory methods (default `public`).
//! - `singleton` - Marks the generated class as a singleton.
//! - `inject` - Marks the generated constructor as an injection site.
//! - `providers` - Holds bound parameters behind providers, resolved on each call.
//!
//! Constructor parameters annotated with `Unbound` are always taken per call.

pub use crate::{
    analysis::Analysis,
    codegen::FactoryCodegen,
    config::ProcessorConfig,
    error::Error,
    options::FactoryOptions,
    processor::{FactoryProcessor, Outcome},
    queue::PendingQueue,
};

mod analysis;
mod annotations;
mod codegen;
mod config;
mod discovery;
mod error;
mod options;
mod processor;
mod provider;
mod queue;
mod types;

#[cfg(test)]
mod tests {
    use factoria_core::Processor;

    use super::*;

    #[test]
    fn test_processor_is_usable_as_a_trait_object() {
        let processor: Box<dyn Processor> = Box::new(FactoryProcessor::default());
        assert_eq!(processor.supported_annotation_types().len(), 2);
    }
}
