use factoria_core::Element;

use crate::config::ProcessorConfig;

/// Renders the annotations of `element` that generated code should carry over.
///
/// Annotations from the processor's own namespace are dropped; the rest are
/// rendered in their canonical source form and joined with single spaces, in
/// the order the host reports them.
pub fn annotation_string(element: &Element, config: &ProcessorConfig) -> String {
    element
        .annotation_mirrors()
        .iter()
        .filter(|mirror| !config.is_own_annotation(mirror.annotation_type()))
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}
