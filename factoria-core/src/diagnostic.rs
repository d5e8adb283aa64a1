use strum::Display;

use crate::element::Element;

/// Severity of a diagnostic reported to the host.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    Error,
    Warning,
    MandatoryWarning,
    Note,
    Other,
}

/// A diagnostic as received by a [`Messager`].
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// The qualified (or simple) name of the element the diagnostic is attached to.
    pub element: Option<String>,
}

/// Sink for diagnostics produced while processing.
pub trait Messager {
    fn print_message(&mut self, kind: DiagnosticKind, message: &str, element: Option<&Element>);
}

/// Keeps every diagnostic in the order it was reported.
#[derive(Debug, Default)]
pub struct RecordingMessager {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingMessager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The diagnostics of kind [`DiagnosticKind::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.kind == DiagnosticKind::Error)
    }
}

impl Messager for RecordingMessager {
    fn print_message(&mut self, kind: DiagnosticKind, message: &str, element: Option<&Element>) {
        self.diagnostics.push(Diagnostic {
            kind,
            message: message.to_owned(),
            element: element.map(Element::to_string),
        });
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMessager;

impl Messager for LogMessager {
    fn print_message(&mut self, kind: DiagnosticKind, message: &str, element: Option<&Element>) {
        let level = match kind {
            DiagnosticKind::Error => log::Level::Error,
            DiagnosticKind::Warning | DiagnosticKind::MandatoryWarning => log::Level::Warn,
            DiagnosticKind::Note | DiagnosticKind::Other => log::Level::Info,
        };

        match element {
            Some(element) => log::log!(level, "{element}: {message}"),
            None => log::log!(level, "{message}"),
        }
    }
}
