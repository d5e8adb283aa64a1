use factoria_core::{AnnotationMirror, AnnotationValue, Modifier};

use crate::error::Error;

/// Options given on a `Factory` annotation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FactoryOptions {
    /// Simple name of the generated class; empty for `<Target>Factory`.
    pub name: String,
    /// Modifiers of the generated class.
    pub modifiers: Vec<Modifier>,
    /// Modifiers of each generated factory method.
    pub method_modifiers: Vec<Modifier>,
    /// Whether the generated class is marked as a singleton.
    pub singleton: bool,
    /// Whether the generated constructor is marked as an injection site.
    pub inject: bool,
    /// Whether bound parameters are held behind providers.
    pub providers: bool,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            modifiers: vec![Modifier::Public],
            method_modifiers: vec![Modifier::Public],
            singleton: false,
            inject: false,
            providers: false,
        }
    }
}

impl FactoryOptions {
    /// Reads the options from a `Factory` annotation, starting from the defaults.
    pub fn from_mirror(mirror: &AnnotationMirror) -> Result<Self, Error> {
        let mut options = Self::default();

        for (key, value) in mirror.values() {
            match key.as_str() {
                "name" => options.name = string(key, value)?,
                "modifiers" => options.modifiers = modifiers(key, value)?,
                "methodModifiers" => options.method_modifiers = modifiers(key, value)?,
                "singleton" => options.singleton = boolean(key, value)?,
                "inject" => options.inject = boolean(key, value)?,
                "providers" => options.providers = boolean(key, value)?,
                unknown => return Err(Error::UnknownOption(unknown.to_owned())),
            }
        }

        Ok(options)
    }

    /// The simple name of the factory generated for `target`.
    pub fn factory_name(&self, target: &str) -> String {
        if self.name.is_empty() {
            format!("{target}Factory")
        } else {
            self.name.clone()
        }
    }
}

fn string(option: &str, value: &AnnotationValue) -> Result<String, Error> {
    match value {
        AnnotationValue::String(value) => Ok(value.clone()),
        _ => Err(invalid(option, "a string")),
    }
}

fn boolean(option: &str, value: &AnnotationValue) -> Result<bool, Error> {
    match value {
        AnnotationValue::Bool(value) => Ok(*value),
        _ => Err(invalid(option, "a boolean")),
    }
}

/// Parses a set of modifier constants, keeping the first occurrence of each.
fn modifiers(option: &str, value: &AnnotationValue) -> Result<Vec<Modifier>, Error> {
    let values = match value {
        AnnotationValue::Array(values) => values.as_slice(),
        single => std::slice::from_ref(single),
    };

    let mut modifiers = Vec::with_capacity(values.len());
    for value in values {
        let AnnotationValue::Enum { constant, .. } = value else {
            return Err(invalid(option, "an array of modifiers"));
        };

        let modifier: Modifier = constant
            .parse()
            .map_err(|_| Error::UnknownModifier(constant.clone()))?;

        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(modifiers)
}

fn invalid(option: &str, expected: &'static str) -> Error {
    Error::InvalidOption {
        option: option.to_owned(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORY: &str = "factoria.annotations.Factory";

    fn modifier(constant: &str) -> AnnotationValue {
        AnnotationValue::Enum {
            ty: "javax.lang.model.element.Modifier".into(),
            constant: constant.into(),
        }
    }

    #[test]
    fn test_defaults_without_values() {
        // Act the parsing
        let options = FactoryOptions::from_mirror(&AnnotationMirror::new(FACTORY)).unwrap();

        // Assert the result
        assert_eq!(options, FactoryOptions::default());
        assert_eq!(options.modifiers, vec![Modifier::Public]);
        assert_eq!(options.factory_name("Foo"), "FooFactory");
    }

    #[test]
    fn test_every_option_is_read() {
        // Arrange the annotation
        let mirror = AnnotationMirror::new(FACTORY)
            .with_value("name", AnnotationValue::String("FooMaker".into()))
            .with_value("singleton", AnnotationValue::Bool(true))
            .with_value("inject", AnnotationValue::Bool(true))
            .with_value("providers", AnnotationValue::Bool(true))
            .with_value(
                "modifiers",
                AnnotationValue::Array(vec![modifier("PUBLIC"), modifier("FINAL"), modifier("PUBLIC")]),
            )
            .with_value("methodModifiers", AnnotationValue::Array(vec![]));

        // Act the parsing
        let options = FactoryOptions::from_mirror(&mirror).unwrap();

        // Assert the result
        assert_eq!(options.factory_name("Foo"), "FooMaker");
        assert!(options.singleton && options.inject && options.providers);
        assert_eq!(options.modifiers, vec![Modifier::Public, Modifier::Final]);
        assert!(options.method_modifiers.is_empty());
    }

    #[test]
    fn test_a_single_modifier_is_accepted_without_array() {
        // Arrange the annotation
        let mirror = AnnotationMirror::new(FACTORY).with_value("methodModifiers", modifier("STATIC"));

        // Act the parsing
        let options = FactoryOptions::from_mirror(&mirror).unwrap();

        // Assert the result
        assert_eq!(options.method_modifiers, vec![Modifier::Static]);
    }

    #[test]
    fn test_unknown_option_fails_explicitly() {
        // Arrange the annotation
        let mirror = AnnotationMirror::new(FACTORY).with_value("table", AnnotationValue::Bool(true));

        // Act the parsing
        let result = FactoryOptions::from_mirror(&mirror);

        // Assert the result
        assert!(matches!(result, Err(Error::UnknownOption(option)) if option == "table"));
    }

    #[test]
    fn test_ill_typed_option_fails_explicitly() {
        // Arrange the annotation
        let mirror = AnnotationMirror::new(FACTORY).with_value("singleton", AnnotationValue::Int(1));

        // Act the parsing
        let result = FactoryOptions::from_mirror(&mirror);

        // Assert the result
        assert!(matches!(
            result,
            Err(Error::InvalidOption { option, .. }) if option == "singleton"
        ));
    }

    #[test]
    fn test_unknown_modifier_fails_explicitly() {
        // Arrange the annotation
        let mirror = AnnotationMirror::new(FACTORY)
            .with_value("modifiers", AnnotationValue::Array(vec![modifier("SEALED")]));

        // Act the parsing
        let result = FactoryOptions::from_mirror(&mirror);

        // Assert the result
        assert!(matches!(result, Err(Error::UnknownModifier(name)) if name == "SEALED"));
    }
}
