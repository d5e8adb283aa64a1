//! Compile-time generation of companion factory classes.
//!
//! Annotate a top-level class with `Factory` and the [`FactoryProcessor`]
//! writes a `<Target>Factory` next to it. Parameters shared by the target's
//! constructors are *bound*: the factory takes them once and keeps them in
//! fields. The others, and any parameter annotated with `Unbound`, are taken
//! by the generated `get<Target>` methods.
//!
//! # Example
//!
//! ```
//! use factoria::memory::{MemoryEnvironment, MemoryRound};
//! use factoria::{
//!     AnnotationMirror, Element, FactoryProcessor, Processor, ProcessorConfig, TypeMirror,
//! };
//!
//! let config = ProcessorConfig::default();
//! let target = Element::class("com.example", "Client")
//!     .with_annotation(AnnotationMirror::new(config.factory_annotation()))
//!     .with_enclosed(
//!         Element::constructor()
//!             .with_parameter(Element::parameter("host", TypeMirror::declared("String")))
//!             .with_parameter(
//!                 Element::parameter("topic", TypeMirror::declared("String"))
//!                     .with_annotation(AnnotationMirror::new(config.unbound_annotation())),
//!             ),
//!     );
//!
//! let mut env = MemoryEnvironment::new();
//! env.insert(target.clone());
//!
//! let mut processor = FactoryProcessor::new(config);
//! processor.process(&MemoryRound::new(vec![target]), &mut env);
//!
//! let source = env.files().source("com.example.ClientFactory").unwrap();
//! assert!(source.contains("public Client getClient(final String topic) {"));
//! ```

pub use factoria_core::{
    AnnotationMirror, AnnotationValue, Constructor, Diagnostic, DiagnosticKind, DirectoryFiler,
    Element, ElementKind, Filer, LogMessager, MemoryFiler, Messager, Modifier, Parameter,
    ProcessingEnvironment, Processor, RecordingMessager, RoundEnvironment, SourceFileWriter,
    TypeKind, TypeMirror, memory,
};
pub use factoria_processor::{
    Analysis, Error, FactoryCodegen, FactoryOptions, FactoryProcessor, Outcome, PendingQueue,
    ProcessorConfig,
};
