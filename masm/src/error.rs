use thiserror::Error;

/// Failures raised by [`crate::encoder::encode`]. The encoder never mutates state; every
/// failure is returned as a value rather than logged, since callers decide per-line how to
/// surface it (see `Orchestrator::convert` in `mrun`).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown mnemonic: {mnemonic}")]
    UnknownMnemonic { mnemonic: String },

    #[error("unknown register: {name}")]
    UnknownRegister { name: String },

    #[error("expected {expected} operands, found {found}")]
    WrongOperandCount { expected: usize, found: usize },

    #[error("invalid integer literal: {text}")]
    InvalidInteger { text: String },

    #[error("malformed memory operand: {text}")]
    MalformedMemoryOperand { text: String },
}
