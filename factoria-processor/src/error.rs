/// Errors that can occur while analyzing or emitting a factory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Factory annotation can only be applied to classes")]
    NotAClass,

    #[error("Factory annotation must be applied to outer-classes")]
    NotAnOuterClass,

    #[error("Parameter `{0}` has a type that is not resolvable yet")]
    UnresolvedParameterType(String),

    #[error("Unknown Factory option: {0}")]
    UnknownOption(String),

    #[error("Factory option `{option}` expects {expected}")]
    InvalidOption {
        option: String,
        expected: &'static str,
    },

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("Unable to write factory file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether processing the target should be attempted again in a later round.
    pub fn is_deferrable(&self) -> bool {
        matches!(self, Self::UnresolvedParameterType(_))
    }
}
