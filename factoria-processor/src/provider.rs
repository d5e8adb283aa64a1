use factoria_core::Parameter;

use crate::config::ProcessorConfig;
use crate::options::FactoryOptions;

/// Whether `parameter` is held behind a provider under the given options.
///
/// Parameters already typed as providers and parameters carrying annotations
/// are never wrapped.
pub fn is_provided(options: &FactoryOptions, parameter: &Parameter, config: &ProcessorConfig) -> bool {
    options.providers
        && !parameter.ty().starts_with(&config.provider_type)
        && parameter.annotations().is_empty()
}

/// The declared type of `parameter`, wrapped in a provider when required.
///
/// Passing no options disables wrapping.
pub fn maybe_wrap_provider(
    options: Option<&FactoryOptions>,
    parameter: &Parameter,
    config: &ProcessorConfig,
) -> String {
    match options {
        Some(options) if is_provided(options, parameter, config) => {
            format!("{}<{}>", config.provider_type, parameter.ty())
        }
        _ => parameter.ty().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn providers() -> FactoryOptions {
        FactoryOptions {
            providers: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_parameter_is_wrapped() {
        // Arrange the parameter
        let parameter = Parameter::new("java.lang.String", "s", "");

        // Act the decision
        let ty = maybe_wrap_provider(Some(&providers()), &parameter, &ProcessorConfig::default());

        // Assert the result
        assert_eq!(ty, "javax.inject.Provider<java.lang.String>");
    }

    #[test]
    fn test_wrapping_requires_the_providers_option() {
        // Arrange the parameter
        let parameter = Parameter::new("java.lang.String", "s", "");

        // Act the decision
        let ty = maybe_wrap_provider(Some(&FactoryOptions::default()), &parameter, &ProcessorConfig::default());

        // Assert the result
        assert_eq!(ty, "java.lang.String");
    }

    #[test]
    fn test_missing_options_disable_wrapping() {
        // Arrange the parameter
        let parameter = Parameter::new("java.lang.String", "s", "");

        // Act the decision
        let ty = maybe_wrap_provider(None, &parameter, &ProcessorConfig::default());

        // Assert the result
        assert_eq!(ty, "java.lang.String");
    }

    #[test]
    fn test_providers_and_annotated_parameters_are_not_wrapped() {
        // Arrange the parameters
        let provider = Parameter::new("javax.inject.Provider<java.lang.String>", "s", "");
        let annotated = Parameter::new("java.lang.String", "s", "@javax.inject.Named(\"s\")");
        let config = ProcessorConfig::default();

        // Act the decisions
        let provider_ty = maybe_wrap_provider(Some(&providers()), &provider, &config);
        let annotated_ty = maybe_wrap_provider(Some(&providers()), &annotated, &config);

        // Assert the results
        assert_eq!(provider_ty, "javax.inject.Provider<java.lang.String>");
        assert_eq!(annotated_ty, "java.lang.String");
        assert!(!is_provided(&providers(), &annotated, &config));
    }
}
