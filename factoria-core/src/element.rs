use std::fmt::{self, Display, Formatter};

use strum::{Display as StrumDisplay, EnumString};

use crate::annotation::AnnotationMirror;

/// The kind of a program element.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, StrumDisplay)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    Package,
    Class,
    Interface,
    Enum,
    AnnotationType,
    Constructor,
    Method,
    Field,
    Parameter,
}

/// The kind of a type mirror.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, StrumDisplay)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
    Array,
    Declared,
    TypeVar,
    Wildcard,
    /// A type the host could not resolve (yet). Typically produced by another
    /// generator in a later round.
    Error,
}

/// A declaration modifier.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

/// A type as seen by the host, in its canonical source form.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct TypeMirror {
    kind: TypeKind,
    repr: String,
}

impl TypeMirror {
    pub fn new(kind: TypeKind, repr: impl Into<String>) -> Self {
        Self {
            kind,
            repr: repr.into(),
        }
    }

    /// A declared (class or interface) type, e.g. `java.lang.String`.
    pub fn declared(repr: impl Into<String>) -> Self {
        Self::new(TypeKind::Declared, repr)
    }

    /// A type that failed to resolve.
    pub fn error(repr: impl Into<String>) -> Self {
        Self::new(TypeKind::Error, repr)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }
}

impl Display for TypeMirror {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

/// A snapshot of a program element handed out by the host.
///
/// Elements are owned values: a processor that needs the same element in a
/// later round looks it up again by qualified name instead of keeping it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    simple_name: String,
    qualified_name: String,
    enclosing: Option<Box<Element>>,
    annotations: Vec<AnnotationMirror>,
    enclosed: Vec<Element>,
    parameters: Vec<Element>,
    thrown_types: Vec<TypeMirror>,
    ty: Option<TypeMirror>,
}

impl Element {
    fn new(kind: ElementKind, simple_name: String, qualified_name: String) -> Self {
        Self {
            kind,
            simple_name,
            qualified_name,
            enclosing: None,
            annotations: Vec::new(),
            enclosed: Vec::new(),
            parameters: Vec::new(),
            thrown_types: Vec::new(),
            ty: None,
        }
    }

    /// A package element. The unnamed package has an empty name.
    pub fn package(name: impl Into<String>) -> Self {
        let name = name.into();
        let simple_name = name.rsplit('.').next().unwrap_or_default().to_owned();
        Self::new(ElementKind::Package, simple_name, name)
    }

    /// A type element of the given kind, enclosed by `enclosing`.
    ///
    /// The qualified name is derived from the enclosing element.
    pub fn type_element(kind: ElementKind, simple_name: impl Into<String>, enclosing: Element) -> Self {
        let simple_name = simple_name.into();
        let qualified_name = match enclosing.qualified_name.as_str() {
            "" => simple_name.clone(),
            outer => format!("{outer}.{simple_name}"),
        };
        let mut element = Self::new(kind, simple_name, qualified_name);
        element.enclosing = Some(Box::new(enclosing.shallow()));
        element
    }

    /// A class declared directly in the given package.
    pub fn class(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::type_element(ElementKind::Class, simple_name, Element::package(package))
    }

    /// A constructor with no parameters. Add parameters with [`Element::with_parameter`].
    pub fn constructor() -> Self {
        Self::new(ElementKind::Constructor, "<init>".into(), String::new())
    }

    /// A method with the given name.
    pub fn method(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(ElementKind::Method, name, String::new())
    }

    /// A constructor or method parameter of the given type.
    pub fn parameter(name: impl Into<String>, ty: TypeMirror) -> Self {
        let mut element = Self::new(ElementKind::Parameter, name.into(), String::new());
        element.ty = Some(ty);
        element
    }

    pub fn with_annotation(mut self, annotation: AnnotationMirror) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds a directly enclosed element (constructor, method, nested type...).
    pub fn with_enclosed(mut self, element: Element) -> Self {
        self.enclosed.push(element);
        self
    }

    pub fn with_parameter(mut self, parameter: Element) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_thrown_type(mut self, ty: TypeMirror) -> Self {
        self.thrown_types.push(ty);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The fully-qualified name of packages and type elements; empty otherwise.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn enclosing_element(&self) -> Option<&Element> {
        self.enclosing.as_deref()
    }

    /// The enclosing element if it is a package.
    pub fn enclosing_package(&self) -> Option<&Element> {
        self.enclosing_element()
            .filter(|enclosing| enclosing.kind == ElementKind::Package)
    }

    pub fn annotation_mirrors(&self) -> &[AnnotationMirror] {
        &self.annotations
    }

    /// The first annotation of the given fully-qualified type, if present.
    pub fn annotation(&self, annotation_type: &str) -> Option<&AnnotationMirror> {
        self.annotations
            .iter()
            .find(|mirror| mirror.annotation_type() == annotation_type)
    }

    pub fn has_annotation(&self, annotation_type: &str) -> bool {
        self.annotation(annotation_type).is_some()
    }

    pub fn enclosed_elements(&self) -> &[Element] {
        &self.enclosed
    }

    /// The directly enclosed constructors, in declaration order.
    pub fn constructors(&self) -> impl Iterator<Item = &Element> {
        self.enclosed
            .iter()
            .filter(|element| element.kind == ElementKind::Constructor)
    }

    pub fn parameters(&self) -> &[Element] {
        &self.parameters
    }

    pub fn thrown_types(&self) -> &[TypeMirror] {
        &self.thrown_types
    }

    /// The type of a parameter or field element.
    pub fn as_type(&self) -> Option<&TypeMirror> {
        self.ty.as_ref()
    }

    /// A copy of this element without its members, used as an enclosing link.
    fn shallow(&self) -> Element {
        Element {
            enclosed: Vec::new(),
            parameters: Vec::new(),
            ..self.clone()
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ElementKind::Package
            | ElementKind::Class
            | ElementKind::Interface
            | ElementKind::Enum
            | ElementKind::AnnotationType => f.write_str(&self.qualified_name),
            _ => f.write_str(&self.simple_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_qualified_name_is_derived_from_package() {
        // Arrange the class
        let class = Element::class("com.example", "Foo");

        // Assert the names
        assert_eq!(class.simple_name(), "Foo");
        assert_eq!(class.qualified_name(), "com.example.Foo");
        assert_eq!(class.enclosing_package().map(Element::qualified_name), Some("com.example"));
    }

    #[test]
    fn test_class_in_unnamed_package_has_simple_qualified_name() {
        // Arrange the class
        let class = Element::class("", "Foo");

        // Assert the names
        assert_eq!(class.qualified_name(), "Foo");
        assert!(class.enclosing_package().is_some());
    }

    #[test]
    fn test_nested_class_is_not_enclosed_by_a_package() {
        // Arrange the nested class
        let outer = Element::class("com.example", "Outer");
        let inner = Element::type_element(ElementKind::Class, "Inner", outer);

        // Assert the enclosing element
        assert_eq!(inner.qualified_name(), "com.example.Outer.Inner");
        assert!(inner.enclosing_package().is_none());
        assert_eq!(inner.enclosing_element().map(Element::kind), Some(ElementKind::Class));
    }

    #[test]
    fn test_constructors_are_returned_in_declaration_order() {
        // Arrange the class
        let class = Element::class("com.example", "Foo")
            .with_enclosed(Element::constructor())
            .with_enclosed(Element::method("bar"))
            .with_enclosed(
                Element::constructor()
                    .with_parameter(Element::parameter("a", TypeMirror::declared("java.lang.String"))),
            );

        // Act the lookup
        let constructors: Vec<&Element> = class.constructors().collect();

        // Assert the result
        assert_eq!(constructors.len(), 2);
        assert!(constructors[0].parameters().is_empty());
        assert_eq!(constructors[1].parameters().len(), 1);
    }

    #[test]
    fn test_modifier_parsing_is_case_insensitive() {
        // Act the parsing
        let upper: Modifier = "PUBLIC".parse().unwrap();
        let lower: Modifier = "final".parse().unwrap();

        // Assert the results
        assert_eq!(upper, Modifier::Public);
        assert_eq!(lower, Modifier::Final);
        assert_eq!(Modifier::Public.to_string(), "public");
    }

    #[test]
    fn test_annotation_lookup_by_type() {
        // Arrange the element
        let class = Element::class("com.example", "Foo")
            .with_annotation(AnnotationMirror::new("com.example.Marker"));

        // Assert the lookups
        assert!(class.has_annotation("com.example.Marker"));
        assert!(!class.has_annotation("com.example.Other"));
    }
}
