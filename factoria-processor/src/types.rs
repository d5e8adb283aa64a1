use factoria_core::TypeMirror;

/// Converts type mirrors into their qualified source names, keeping order.
pub fn type_names(types: &[TypeMirror]) -> Vec<String> {
    types.iter().map(ToString::to_string).collect()
}
