use crate::diagnostic::Messager;
use crate::element::Element;
use crate::filer::Filer;

/// The elements visible in one round of processing.
pub trait RoundEnvironment {
    /// Root elements of this round carrying the annotation with the given qualified name.
    fn elements_annotated_with(&self, annotation_type: &str) -> Vec<Element>;

    /// Whether this is the last round; no new sources will be compiled after it.
    fn processing_over(&self) -> bool {
        false
    }
}

/// Services the host offers a processor for the whole compilation.
pub trait ProcessingEnvironment {
    /// Looks up a type element by its qualified name.
    ///
    /// Returns a fresh snapshot on every call; snapshots from an earlier
    /// round must not be reused.
    fn type_element(&self, qualified_name: &str) -> Option<Element>;

    fn messager(&mut self) -> &mut dyn Messager;

    fn filer(&mut self) -> &mut dyn Filer;
}

/// A participant in the multi-round generation protocol.
pub trait Processor {
    /// Qualified names of the annotations this processor handles.
    fn supported_annotation_types(&self) -> Vec<String>;

    /// Processes one round.
    ///
    /// Returns whether the annotations are claimed; claimed annotations are
    /// not offered to other processors.
    fn process(&mut self, round: &dyn RoundEnvironment, env: &mut dyn ProcessingEnvironment) -> bool;
}
