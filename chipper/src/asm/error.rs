use thiserror::Error;

/// Why a single line failed to assemble.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Value '{0}' is not a valid number")]
    MalformedNumber(String),

    #[error("Value '{value}' is not in range of {bits} bits")]
    OutOfRange { value: String, bits: u32 },

    #[error("Value '{0}' is not a valid register")]
    InvalidRegister(String),

    #[error("Labels may not contain spaces and must end with ':' on declaration")]
    InvalidLabel,

    #[error("Label '{0}' is declared more than once")]
    DuplicateLabel(String),

    #[error("Label '{0}' is not declared")]
    UnresolvedLabel(String),

    #[error("Couldn't find valid sprite definition in '{0}'")]
    InvalidSprite(String),

    #[error("Mnemonic '{0}' not valid")]
    UnknownMnemonic(String),

    #[error("Expected {expected} operand(s), found {found}")]
    MalformedOperandList { expected: usize, found: usize },

    #[error("Program does not fit below address 0xFFFF")]
    ProgramTooLarge,
}

/// A fatal diagnostic, tied to the 1-based source line and its normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}: '{text}': {kind}")]
pub struct AsmError {
    pub line: usize,
    pub text: String,
    pub kind: ErrorKind,
}

impl AsmError {
    pub fn new(line: usize, text: impl Into<String>, kind: ErrorKind) -> AsmError {
        AsmError { line, text: text.into(), kind }
    }
}
