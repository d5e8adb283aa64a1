use factoria_core::{Constructor, Element, ElementKind, Parameter, TypeKind};
use indexmap::IndexSet;

use crate::annotations::annotation_string;
use crate::config::ProcessorConfig;
use crate::discovery::qualified_name;
use crate::error::Error;
use crate::options::FactoryOptions;
use crate::types::type_names;

/// Initial builder state for target analysis.
pub struct AnalysisBuilder<'a> {
    element: &'a Element,
    config: &'a ProcessorConfig,
}

/// Analysis state containing a validated class.
#[derive(Debug)]
pub struct ValidatedClass<'a> {
    element: &'a Element,
    config: &'a ProcessorConfig,
}

/// Analysis state containing a class declared directly in a package.
#[derive(Debug)]
pub struct OuterClass<'a> {
    element: &'a Element,
    package: &'a Element,
    config: &'a ProcessorConfig,
}

/// Analysis state containing the parsed `Factory` options.
#[derive(Debug)]
pub struct ConfiguredClass<'a> {
    element: &'a Element,
    package: &'a Element,
    config: &'a ProcessorConfig,
    options: FactoryOptions,
}

/// Completed analysis of a factory target.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Qualified name of the target's package; empty for the unnamed package.
    pub package: String,

    /// Simple name of the target class.
    pub target: String,

    /// Options of the target's `Factory` annotation.
    pub options: FactoryOptions,

    /// Parameters supplied once to the factory, in first-seen order.
    pub bound: IndexSet<Parameter>,

    /// Constructors of the target, in declaration order.
    pub constructors: Vec<Constructor>,
}

impl<'a> AnalysisBuilder<'a> {
    /// Constructs a new analysis builder for the given target.
    pub fn new(element: &'a Element, config: &'a ProcessorConfig) -> Self {
        Self { element, config }
    }

    /// Validates that the target is a class and transitions to the next state.
    pub fn parse_class(self) -> Result<ValidatedClass<'a>, Error> {
        if self.element.kind() != ElementKind::Class {
            return Err(Error::NotAClass);
        }

        Ok(ValidatedClass {
            element: self.element,
            config: self.config,
        })
    }
}

impl<'a> ValidatedClass<'a> {
    /// Validates that the class is declared directly in a package.
    pub fn parse_enclosing(self) -> Result<OuterClass<'a>, Error> {
        let package = self
            .element
            .enclosing_package()
            .ok_or(Error::NotAnOuterClass)?;

        Ok(OuterClass {
            element: self.element,
            package,
            config: self.config,
        })
    }
}

impl<'a> OuterClass<'a> {
    /// Reads the `Factory` options of the class.
    pub fn parse_options(self) -> Result<ConfiguredClass<'a>, Error> {
        let options = self
            .element
            .annotation(&self.config.factory_annotation())
            .map(FactoryOptions::from_mirror)
            .transpose()?
            .unwrap_or_default();

        Ok(ConfiguredClass {
            element: self.element,
            package: self.package,
            config: self.config,
            options,
        })
    }
}

impl ConfiguredClass<'_> {
    /// Walks the constructors and partitions their parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedParameterType`] as soon as a parameter type
    /// is in error state; the target should be retried in a later round.
    pub fn parse_constructors(self) -> Result<Analysis, Error> {
        let unbound_annotation = self.config.unbound_annotation();
        let mut bound = IndexSet::new();
        let mut constructors = Vec::new();

        for constructor in self.element.constructors() {
            let mut parameters = Vec::with_capacity(constructor.parameters().len());

            for element in constructor.parameters() {
                let ty = element
                    .as_type()
                    .filter(|ty| ty.kind() != TypeKind::Error)
                    .ok_or_else(|| Error::UnresolvedParameterType(element.simple_name().to_owned()))?;

                let parameter = Parameter::new(
                    ty.to_string(),
                    element.simple_name(),
                    annotation_string(element, self.config),
                );
                log::trace!("{}: found parameter {parameter:?}", self.element);

                if !element.has_annotation(&unbound_annotation) {
                    bound.insert(parameter.clone());
                }

                parameters.push(parameter);
            }

            constructors.push(Constructor::new(parameters, type_names(constructor.thrown_types())));
        }

        Ok(Analysis {
            package: self.package.qualified_name().to_owned(),
            target: self.element.simple_name().to_owned(),
            options: self.options,
            bound,
            constructors,
        })
    }
}

impl Analysis {
    /// Performs complete analysis of a factory target.
    pub fn from(element: &Element, config: &ProcessorConfig) -> Result<Self, Error> {
        let analysis = AnalysisBuilder::new(element, config)
            .parse_class()?
            .parse_enclosing()?
            .parse_options()?
            .parse_constructors()?;

        Ok(analysis)
    }

    /// Simple name of the generated factory.
    pub fn factory_name(&self) -> String {
        self.options.factory_name(&self.target)
    }

    /// Qualified name of the generated factory, which is also its file name.
    pub fn qualified_factory_name(&self) -> String {
        qualified_name(&self.package, &self.factory_name())
    }

    /// Name of the generated factory methods.
    pub fn method_name(&self) -> String {
        format!("get{}", self.target)
    }

    pub fn is_bound(&self, parameter: &Parameter) -> bool {
        self.bound.contains(parameter)
    }

    /// The parameters of `constructor` supplied per call, in declaration order.
    pub fn unbound_parameters<'c>(&self, constructor: &'c Constructor) -> Vec<&'c Parameter> {
        constructor
            .parameters()
            .iter()
            .filter(|parameter| !self.is_bound(parameter))
            .collect()
    }
}
