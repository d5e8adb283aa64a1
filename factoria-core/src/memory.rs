//! An in-memory host, for tests and for embedding the generator outside a compiler.

use std::collections::BTreeMap;

use crate::diagnostic::{Messager, RecordingMessager};
use crate::element::{Element, ElementKind};
use crate::filer::{Filer, MemoryFiler};
use crate::processor::{ProcessingEnvironment, RoundEnvironment};

/// The root elements of one round.
#[derive(Debug, Default, Clone)]
pub struct MemoryRound {
    roots: Vec<Element>,
    over: bool,
}

impl MemoryRound {
    pub fn new(roots: Vec<Element>) -> Self {
        Self { roots, over: false }
    }

    /// The final, empty round.
    pub fn last() -> Self {
        Self {
            roots: Vec::new(),
            over: true,
        }
    }
}

impl RoundEnvironment for MemoryRound {
    fn elements_annotated_with(&self, annotation_type: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for root in &self.roots {
            collect_annotated(root, annotation_type, &mut found);
        }
        found
    }

    fn processing_over(&self) -> bool {
        self.over
    }
}

fn collect_annotated(element: &Element, annotation_type: &str, found: &mut Vec<Element>) {
    if element.has_annotation(annotation_type) {
        found.push(element.clone());
    }
    for enclosed in element.enclosed_elements() {
        if is_type(enclosed) {
            collect_annotated(enclosed, annotation_type, found);
        }
    }
}

fn is_type(element: &Element) -> bool {
    matches!(
        element.kind(),
        ElementKind::Class | ElementKind::Interface | ElementKind::Enum | ElementKind::AnnotationType
    )
}

/// A compilation held entirely in memory.
///
/// Types can be added or replaced between rounds to model sources produced by
/// other generators.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    types: BTreeMap<String, Element>,
    messager: RecordingMessager,
    filer: MemoryFiler,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a type, along with the types nested in it.
    pub fn insert(&mut self, element: Element) {
        for enclosed in element.enclosed_elements() {
            if is_type(enclosed) {
                self.insert(enclosed.clone());
            }
        }
        self.types.insert(element.qualified_name().to_owned(), element);
    }

    pub fn diagnostics(&self) -> &RecordingMessager {
        &self.messager
    }

    pub fn files(&self) -> &MemoryFiler {
        &self.filer
    }

    pub fn files_mut(&mut self) -> &mut MemoryFiler {
        &mut self.filer
    }
}

impl ProcessingEnvironment for MemoryEnvironment {
    fn type_element(&self, qualified_name: &str) -> Option<Element> {
        self.types.get(qualified_name).cloned()
    }

    fn messager(&mut self) -> &mut dyn Messager {
        &mut self.messager
    }

    fn filer(&mut self) -> &mut dyn Filer {
        &mut self.filer
    }
}
