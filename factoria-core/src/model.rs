/// A constructor parameter as seen by the factory generator.
///
/// Two parameters are equal only when their type, name and carried-through
/// annotations are all equal.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Parameter {
    ty: String,
    name: String,
    annotations: String,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, annotations: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            annotations: annotations.into(),
        }
    }

    /// The parameter type in source form.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The space-separated annotations carried through to generated code.
    pub fn annotations(&self) -> &str {
        &self.annotations
    }
}

/// A constructor of a factory target.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Constructor {
    parameters: Vec<Parameter>,
    thrown_types: Vec<String>,
}

impl Constructor {
    pub fn new(parameters: Vec<Parameter>, thrown_types: Vec<String>) -> Self {
        Self {
            parameters,
            thrown_types,
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Qualified names of the declared thrown types.
    pub fn thrown_types(&self) -> &[String] {
        &self.thrown_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_differing_only_by_annotations_are_distinct() {
        // Arrange the parameters
        let plain = Parameter::new("java.lang.String", "name", "");
        let named = Parameter::new("java.lang.String", "name", "@javax.inject.Named(\"a\")");

        // Assert the comparison
        assert_ne!(plain, named);
        assert_eq!(plain, Parameter::new("java.lang.String", "name", ""));
    }
}
