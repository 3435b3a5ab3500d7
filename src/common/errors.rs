//! Custom Errors and Types shared by every component

use std::error;
use std::fmt;

/// Why an operation bound to a cycle context stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    DeadlineExceeded,
    Cancelled,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ContextError::DeadlineExceeded => write!(f, "cycle deadline exceeded"),
            ContextError::Cancelled => write!(f, "cycle cancelled"),
        }
    }
}

impl error::Error for ContextError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
