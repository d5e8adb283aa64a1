use std::io;

use factoria_core::{Constructor, Modifier, Parameter, SourceFileWriter};

use crate::analysis::Analysis;
use crate::config::ProcessorConfig;
use crate::options::FactoryOptions;
use crate::provider::{is_provided, maybe_wrap_provider};

/// Code generator for factory classes.
pub struct FactoryCodegen<'a> {
    analysis: &'a Analysis,
    config: &'a ProcessorConfig,
}

impl<'a> FactoryCodegen<'a> {
    /// Creates a code generator for an analyzed target.
    pub fn new(analysis: &'a Analysis, config: &'a ProcessorConfig) -> Self {
        Self { analysis, config }
    }

    /// Writes the complete factory class.
    pub fn generate(&self, writer: &mut SourceFileWriter<'_>) -> io::Result<()> {
        let options = &self.analysis.options;

        writer
            .write_package_declaration(&self.analysis.package)?
            .write_annotation_if(&self.config.singleton_annotation, options.singleton)?
            .write_class_declaration(
                &self.analysis.factory_name(),
                &self.config.generator,
                &options.modifiers,
            )?;

        self.generate_fields(writer)?;
        self.generate_constructor(writer)?;
        for constructor in &self.analysis.constructors {
            self.generate_factory_method(writer, constructor)?;
        }

        writer.write_block_end()?;
        Ok(())
    }

    /// Renders the factory class into a string.
    pub fn render(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        {
            let mut writer = SourceFileWriter::new(Box::new(&mut buffer));
            self.generate(&mut writer)?;
            writer.close()?;
        }
        String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Writes one private final field per bound parameter.
    fn generate_fields(&self, writer: &mut SourceFileWriter<'_>) -> io::Result<()> {
        for parameter in &self.analysis.bound {
            writer.write_field(
                &maybe_wrap_provider(Some(&self.analysis.options), parameter, self.config),
                parameter.name(),
                &[Modifier::Private, Modifier::Final],
            )?;
        }
        Ok(())
    }

    /// Writes the constructor taking and storing every bound parameter.
    fn generate_constructor(&self, writer: &mut SourceFileWriter<'_>) -> io::Result<()> {
        let options = &self.analysis.options;

        writer
            .write_annotation_if(&self.config.inject_annotation, options.inject)?
            .write_constructor_declaration_start(&self.analysis.factory_name(), &[Modifier::Public])?;
        self.generate_parameters(writer, Some(options), self.analysis.bound.iter())?;
        writer.write_method_declaration_end(&[])?;

        for parameter in &self.analysis.bound {
            writer.write_field_assignment(parameter.name(), parameter.name())?;
        }

        writer.write_block_end()?;
        Ok(())
    }

    /// Writes the factory method mirroring one constructor of the target.
    fn generate_factory_method(
        &self,
        writer: &mut SourceFileWriter<'_>,
        constructor: &Constructor,
    ) -> io::Result<()> {
        let target = &self.analysis.target;

        writer.write_method_declaration_start(
            target,
            &self.analysis.method_name(),
            &self.analysis.options.method_modifiers,
        )?;
        // Per-call parameters keep their declared type.
        self.generate_parameters(writer, None, self.analysis.unbound_parameters(constructor))?;
        writer
            .write_method_declaration_end(constructor.thrown_types())?
            .write_return_start()?
            .write_new_instance(target, &self.generate_arguments(constructor))?
            .write_statement_end()?
            .write_block_end()?;
        Ok(())
    }

    fn generate_parameters<'p>(
        &self,
        writer: &mut SourceFileWriter<'_>,
        options: Option<&FactoryOptions>,
        parameters: impl IntoIterator<Item = &'p Parameter>,
    ) -> io::Result<()> {
        for parameter in parameters {
            writer.write_method_parameter(
                parameter.annotations(),
                &maybe_wrap_provider(options, parameter, self.config),
                parameter.name(),
                &[Modifier::Final],
            )?;
        }
        Ok(())
    }

    /// The arguments passed to the target constructor, dereferencing providers.
    fn generate_arguments(&self, constructor: &Constructor) -> Vec<String> {
        constructor
            .parameters()
            .iter()
            .map(|parameter| {
                if self.analysis.is_bound(parameter)
                    && is_provided(&self.analysis.options, parameter, self.config)
                {
                    format!("{}.get()", parameter.name())
                } else {
                    parameter.name().to_owned()
                }
            })
            .collect()
    }
}
