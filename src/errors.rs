//! Errors and error-related utilities.

use std::{error, fmt, io, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

/// A file could not be opened.
#[derive(Debug)]
pub struct CannotOpen {
    pub path: String,
    pub source: io::Error,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl fmt::Display for CannotOpen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot open {}: {}", self.path, self.source)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

impl error::Error for CannotOpen {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input_ref(s: &str) -> Box<dyn error::Error> {
    InvalidInput(s.to_owned()).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument_ref(s: &str) -> Box<dyn error::Error> {
    InvalidArgument(s.to_owned()).into()
}

/// A helper for constructing [CannotOpen].
pub fn cannot_open(path: &str, source: io::Error) -> Box<dyn error::Error> {
    CannotOpen {
        path: path.to_owned(),
        source,
    }
    .into()
}
