use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong on a single source line.
///
/// The line-level routines (classifier, instruction parser, operand
/// encoders) only ever hand back one of these; the pass that drove them
/// knows the line number and wraps it into [`Error::Assembly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Structural, label extraction only
    #[error("Duplicate symbol")]
    DuplicateLabel,
    #[error("Lacking space after label")]
    NoSpaceAfterLabel,
    #[error("Instruction follows label (labels must be on their own line)")]
    InstructionFollowsLabel,

    // Syntax / token count
    #[error("Unknown mnemonic")]
    UnknownMnemonic,
    #[error("Malformed instruction")]
    MissingInstructionParameter,
    #[error("Too many tokens")]
    TooManyTokens,

    // Operand value
    #[error("Invalid register name")]
    UnknownRegister,
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Value out of range")]
    ValueOutOfRange,
    #[error("Invalid binary string length")]
    InvalidBinaryStringLength,
    #[error("Invalid binary string character")]
    InvalidBinaryStringCharacter,

    // Offset counter ran past u16
    #[error("Too many instructions")]
    TooManyInstructions,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} on line {line}")]
    Assembly { line: u32, kind: ErrorKind },

    #[error("Program too large ({size} bytes) exceeds maximum size of {capacity} bytes")]
    ProgramTooLarge { size: usize, capacity: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn at(line: u32, kind: ErrorKind) -> Error {
        Error::Assembly { line, kind }
    }

    /// Line-level kind, if this came out of one of the passes.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Assembly { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn line(&self) -> Option<u32> {
        match self {
            Error::Assembly { line, .. } => Some(*line),
            _ => None,
        }
    }
}
