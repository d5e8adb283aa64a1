use factoria_core::{DiagnosticKind, Messager, RoundEnvironment};
use indexmap::IndexSet;

use crate::config::ProcessorConfig;
use crate::error::Error;

/// Collects the qualified names of the factory targets new in this round.
///
/// Targets that are not declared directly in a package are reported on their
/// enclosing element and left out.
pub fn factory_class_names(
    round: &dyn RoundEnvironment,
    messager: &mut dyn Messager,
    config: &ProcessorConfig,
) -> IndexSet<String> {
    let elements = round.elements_annotated_with(&config.factory_annotation());
    let mut names = IndexSet::with_capacity(elements.len());

    for element in &elements {
        match element.enclosing_package() {
            Some(package) => {
                names.insert(qualified_name(package.qualified_name(), element.simple_name()));
            }
            None => {
                let reported = element.enclosing_element().unwrap_or(element);
                messager.print_message(
                    DiagnosticKind::Error,
                    &Error::NotAnOuterClass.to_string(),
                    Some(reported),
                );
            }
        }
    }

    names
}

/// Joins a package and a simple name; the unnamed package adds no prefix.
pub fn qualified_name(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_owned()
    } else {
        format!("{package}.{simple_name}")
    }
}
