use std::fmt::{self, Display, Formatter};

/// A single annotation instance attached to an element.
///
/// Element values are kept in declaration order so that the rendered form is
/// stable within a compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMirror {
    annotation_type: String,
    values: Vec<(String, AnnotationValue)>,
}

/// The value of one annotation element.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    String(String),
    Bool(bool),
    Int(i32),
    Long(i64),
    Char(char),
    Double(f64),
    /// An enum constant, e.g. `javax.lang.model.element.Modifier.PUBLIC`.
    Enum { ty: String, constant: String },
    /// A class literal, e.g. `java.lang.String.class`.
    Class(String),
    Annotation(Box<AnnotationMirror>),
    Array(Vec<AnnotationValue>),
}

impl AnnotationMirror {
    /// Creates a mirror for the given fully-qualified annotation type, without values.
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            values: Vec::new(),
        }
    }

    /// Adds an element value.
    pub fn with_value(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.push((name.into(), value));
        self
    }

    /// The fully-qualified name of the annotation type.
    pub fn annotation_type(&self) -> &str {
        &self.annotation_type
    }

    /// The explicitly given element values, in declaration order.
    pub fn values(&self) -> &[(String, AnnotationValue)] {
        &self.values
    }

    /// Looks up the value of the element with the given name.
    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

impl Display for AnnotationMirror {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.annotation_type)?;

        match self.values.as_slice() {
            [] => Ok(()),
            [(key, value)] if key == "value" => write!(f, "({value})"),
            values => {
                f.write_str("(")?;
                for (index, (key, value)) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "\"{}\"", escape(value, '"')),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}L"),
            Self::Char(value) => write!(f, "'{}'", escape(&value.to_string(), '\'')),
            Self::Double(value) => write_double(f, *value),
            Self::Enum { ty, constant } => write!(f, "{ty}.{constant}"),
            Self::Class(ty) => write!(f, "{ty}.class"),
            Self::Annotation(mirror) => write!(f, "{mirror}"),
            Self::Array(values) => {
                f.write_str("{")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Writes a double literal; non-finite values use the constant expressions javac prints.
fn write_double(f: &mut Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("0.0/0.0")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "1.0/0.0" } else { "-1.0/0.0" })
    } else {
        write!(f, "{value:?}")
    }
}

/// Escapes a literal so it can be embedded between the given quotes.
fn escape(value: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
