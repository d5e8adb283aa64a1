use factoria_core::memory::{MemoryEnvironment, MemoryRound};
use factoria_core::{AnnotationMirror, Element, Processor, TypeMirror};
use factoria_processor::{FactoryProcessor, ProcessorConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_namespace_and_provider_type() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Arrange a processor with its own annotation namespace
        let config = ProcessorConfig::builder()
            .namespace("com.example.gen")
            .provider_type("com.google.inject.Provider")
            .generator("com.example.gen.Processor")
            .build();
        let target = Element::class("com.example", "Anvil")
            .with_annotation(
                AnnotationMirror::new("com.example.gen.Factory").with_value(
                    "providers",
                    factoria_core::AnnotationValue::Bool(true),
                ),
            )
            .with_enclosed(
                Element::constructor()
                    .with_parameter(Element::parameter("hardness", TypeMirror::declared("Integer")))
                    .with_parameter(
                        Element::parameter("weight", TypeMirror::declared("Integer"))
                            .with_annotation(AnnotationMirror::new("com.example.gen.Unbound")),
                    ),
            );
        let mut env = MemoryEnvironment::new();
        env.insert(target.clone());
        let mut processor = FactoryProcessor::new(config);

        // Act the round
        processor.process(&MemoryRound::new(vec![target]), &mut env);

        // Assert the result
        let source = env.files().source("com.example.AnvilFactory").unwrap();
        assert!(source.contains("@javax.annotation.Generated(\"com.example.gen.Processor\")"));
        assert!(source.contains("    private final com.google.inject.Provider<Integer> hardness;\n"));
        assert!(source.contains("    public Anvil getAnvil(final Integer weight) {\n"));
        assert!(source.contains("        return new Anvil(hardness.get(), weight);\n"));
        assert!(!source.contains("com.example.gen.Unbound"));
    }

    #[test]
    fn test_annotations_of_the_default_namespace_are_ignored_with_a_custom_one() {
        // Arrange a processor with its own annotation namespace
        let config = ProcessorConfig::builder().namespace("com.example.gen").build();
        let target = Element::class("com.example", "Anvil")
            .with_annotation(AnnotationMirror::new(ProcessorConfig::default().factory_annotation()))
            .with_enclosed(Element::constructor());
        let mut env = MemoryEnvironment::new();
        env.insert(target.clone());
        let mut processor = FactoryProcessor::new(config);

        // Act the round
        processor.process(&MemoryRound::new(vec![target]), &mut env);

        // Assert the result
        assert!(env.files().is_empty());
        assert!(processor.pending().is_empty());
    }
}
