use thiserror::Error;

/// Everything that can go wrong while reading an integer from the console.
#[derive(Error, Debug)]
pub enum IoFailure {
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("end of input before an integer was read")]
    EndOfInput,

    #[error("expected a decimal digit, found '{}'", .found.escape_ascii())]
    Malformed { found: u8 },

    #[error("integer literal {literal} does not fit in 64 bits")]
    OutOfRange { literal: String },
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error(transparent)]
    Io(#[from] IoFailure),

    #[error("no builtin named `{0}`")]
    UnknownBuiltin(String),

    #[error("`{name}` takes {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
