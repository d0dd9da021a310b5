use thiserror::Error;

/// Errors raised while loading or executing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("program has odd length {0}")]
    OddLength(usize),
    #[error("unknown opcode `{0}`")]
    InvalidOpcode(u8),
    #[error("invalid combo operand `{0}`")]
    InvalidComboOperand(u8),
    /// A program word outside of the 3-bit range.
    #[error("word {value} at index {index} is not a 3-bit value")]
    InvalidWord { index: usize, value: i64 },
    #[error("instruction at {0} has no operand")]
    TruncatedInstruction(usize),
    #[error("cannot divide by 2^{0}")]
    NegativeShift(i64),
}

/// Errors raised while reading the textual puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing line for register {0}")]
    MissingRegister(char),
    #[error("expected register {expected}, found `{line}`")]
    UnexpectedRegister { expected: char, line: String },
    #[error("missing program line")]
    MissingProgram,
    #[error("cannot parse `{0}` as an integer")]
    InvalidInteger(String),
    #[error("invalid program: {0}")]
    Program(#[from] MachineError),
}

pub type Result<T> = std::result::Result<T, MachineError>;
