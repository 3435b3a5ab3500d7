use std::{error::Error, fmt};

use crate::common::errors::ContextError;

/**
 * All errors produced by the API gateway client
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    BuildRequestFailed(String),
    WebRequestFailed(String),
    JsonParseFailed(String),
    Cancelled(ContextError),
    RetriesExhausted(usize),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GatewayError::BuildRequestFailed(msg) => write!(f, "cannot build request: {}", msg),
            GatewayError::WebRequestFailed(msg) => write!(f, "web request failed: {}", msg),
            GatewayError::JsonParseFailed(msg) => write!(f, "cannot parse response body: {}", msg),
            GatewayError::Cancelled(reason) => write!(f, "request abandoned: {}", reason),
            GatewayError::RetriesExhausted(retries) => {
                write!(f, "no valid response after {} retries", retries)
            }
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GatewayError::Cancelled(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ContextError> for GatewayError {
    fn from(value: ContextError) -> Self {
        GatewayError::Cancelled(value)
    }
}
