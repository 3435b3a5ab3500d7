use std::{error::Error, fmt};

use crate::infrastructure::web::request::Resource;

/**
 * All errors produced while validating a fetched resource. Each one costs exactly one group.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    MissingResource(Resource),
    MissingField { resource: Resource, field: String },
    UnresolvedUnion { resource: Resource, field: String },
    InvalidValue { resource: Resource, field: String, reason: String },
    DependencyUnavailable { group: String, dependency: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::MissingResource(resource) => {
                write!(f, "{} was not fetched this cycle", resource)
            }
            TransformError::MissingField { resource, field } => {
                write!(f, "{}: missing required field {}", resource, field)
            }
            TransformError::UnresolvedUnion { resource, field } => {
                write!(f, "{}: {} has an unrecognized shape", resource, field)
            }
            TransformError::InvalidValue {
                resource,
                field,
                reason,
            } => write!(f, "{}: invalid {}: {}", resource, field, reason),
            TransformError::DependencyUnavailable { group, dependency } => {
                write!(f, "{} skipped because {} failed", group, dependency)
            }
        }
    }
}

impl Error for TransformError {}

/// Location inside a payload, used to name the offending field.
#[derive(Debug, Clone)]
pub(crate) struct Scope {
    resource: Resource,
    path: String,
}

impl Scope {
    pub fn root(resource: Resource) -> Self {
        Self {
            resource,
            path: String::new(),
        }
    }

    pub fn item(resource: Resource, index: usize) -> Self {
        Self {
            resource,
            path: format!("[{}]", index),
        }
    }

    pub fn child(&self, name: &str) -> Self {
        Self {
            resource: self.resource,
            path: self.field(name),
        }
    }

    pub fn field(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else if name.starts_with('[') {
            format!("{}{}", self.path, name)
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    pub fn required<'a, T>(&self, value: &'a Option<T>, name: &str) -> Result<&'a T, TransformError> {
        value.as_ref().ok_or_else(|| self.missing(name))
    }

    pub fn missing(&self, name: &str) -> TransformError {
        TransformError::MissingField {
            resource: self.resource,
            field: self.field(name),
        }
    }

    pub fn unresolved(&self, name: &str) -> TransformError {
        TransformError::UnresolvedUnion {
            resource: self.resource,
            field: self.field(name),
        }
    }

    pub fn invalid(&self, name: &str, reason: &dyn fmt::Display) -> TransformError {
        TransformError::InvalidValue {
            resource: self.resource,
            field: self.field(name),
            reason: reason.to_string(),
        }
    }
}

/// The payload of a resource, or an error if its fetch failed.
pub(crate) fn fetched<T>(value: &Option<T>, resource: Resource) -> Result<&T, TransformError> {
    value
        .as_ref()
        .ok_or(TransformError::MissingResource(resource))
}
