use snafu::{Location, Snafu};
use std::num::{ParseFloatError, ParseIntError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to parse literal '{value}'"))]
    Literal {
        #[snafu(implicit)]
        location: Location,
        value: String,
        source: LiteralError,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Literal {
                location,
                value,
                source,
            } => write!(f, "{self} at {location}: '{value}', {source:?}"),
        }
    }
}

/// Reasons the literal parser rejects its input.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum LiteralError {
    #[snafu(display("Unexpected end of input"))]
    UnexpectedEnd {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Unexpected character '{found}' at offset {offset}"))]
    UnexpectedChar {
        #[snafu(implicit)]
        location: Location,
        found: char,
        offset: usize,
    },
    #[snafu(display("Unknown name '{name}'"))]
    UnknownName {
        #[snafu(implicit)]
        location: Location,
        name: String,
    },
    #[snafu(display("Invalid escape sequence at offset {offset}"))]
    InvalidEscape {
        #[snafu(implicit)]
        location: Location,
        offset: usize,
    },
    #[snafu(display("Invalid integer literal '{value}'"))]
    Int {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: ParseIntError,
    },
    #[snafu(display("Invalid float literal '{value}'"))]
    Float {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: ParseFloatError,
    },
    #[snafu(display("Unary operator applied to a non-numeric value"))]
    NonNumericUnary {
        #[snafu(implicit)]
        location: Location,
    },
}
