//! Host-side building blocks for the Factoria factory generator.
//!
//! A processor runs inside a host (usually a compiler) that owns the program
//! model. This crate defines that surface: [`Element`]s and their
//! [`AnnotationMirror`]s, the [`Messager`] diagnostics sink, the [`Filer`]
//! that creates generated sources, the [`SourceFileWriter`] that knows the
//! emitted surface syntax, and the [`Processor`] protocol itself. The
//! [`memory`] module provides a complete in-memory host.

pub mod annotation;
pub mod diagnostic;
pub mod element;
pub mod filer;
pub mod memory;
pub mod model;
pub mod processor;
pub mod writer;

pub use annotation::{AnnotationMirror, AnnotationValue};
pub use diagnostic::{Diagnostic, DiagnosticKind, LogMessager, Messager, RecordingMessager};
pub use element::{Element, ElementKind, Modifier, TypeKind, TypeMirror};
pub use filer::{DirectoryFiler, Filer, MemoryFiler};
pub use model::{Constructor, Parameter};
pub use processor::{ProcessingEnvironment, Processor, RoundEnvironment};
pub use writer::SourceFileWriter;
