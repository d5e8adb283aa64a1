//! Embedder-level configuration of the factory processor.
//!
//! Per-target configuration lives on the `Factory` annotation itself, see
//! [`crate::options::FactoryOptions`].

use typed_builder::TypedBuilder;

/// The default namespace of the `Factory` and `Unbound` annotations.
pub const DEFAULT_NAMESPACE: &str = "factoria.annotations";

/// Configuration of a [`crate::FactoryProcessor`].
///
/// # Examples
///
/// ```
/// use factoria_processor::ProcessorConfig;
///
/// let config = ProcessorConfig::builder()
///     .namespace("com.example.annotations")
///     .build();
///
/// assert_eq!(config.factory_annotation(), "com.example.annotations.Factory");
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct ProcessorConfig {
    /// Package holding the processor's own annotations. Annotations from this
    /// namespace are never copied into generated code.
    #[builder(default = DEFAULT_NAMESPACE.to_owned(), setter(into))]
    pub namespace: String,

    /// Qualified name of the single-method provider type.
    #[builder(default = "javax.inject.Provider".to_owned(), setter(into))]
    pub provider_type: String,

    /// Annotation written on singleton factories.
    #[builder(default = "@javax.inject.Singleton".to_owned(), setter(into))]
    pub singleton_annotation: String,

    /// Annotation written on the constructor of injectable factories.
    #[builder(default = "@javax.inject.Inject".to_owned(), setter(into))]
    pub inject_annotation: String,

    /// Name recorded in the generated-by tag of every factory.
    #[builder(default = "factoria.processor.FactoryProcessor".to_owned(), setter(into))]
    pub generator: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProcessorConfig {
    /// Qualified name of the annotation marking factory targets.
    pub fn factory_annotation(&self) -> String {
        format!("{}.Factory", self.namespace)
    }

    /// Qualified name of the annotation marking unbound parameters.
    pub fn unbound_annotation(&self) -> String {
        format!("{}.Unbound", self.namespace)
    }

    /// Whether the annotation type belongs to the processor's own namespace.
    pub fn is_own_annotation(&self, annotation_type: &str) -> bool {
        annotation_type.starts_with(&self.namespace)
    }
}
