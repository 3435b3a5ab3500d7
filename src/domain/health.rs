/// HealthSignal Trait
/// Defines the three best-effort signals sent around every poll cycle
use std::error::Error;
use std::fmt;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthError(pub String);

impl fmt::Display for HealthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "health signal not delivered: {}", self.0)
    }
}

impl Error for HealthError {}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthSignal: Send + Sync {
    async fn start(&self) -> Result<(), HealthError>;
    async fn success(&self) -> Result<(), HealthError>;
    async fn fail(&self) -> Result<(), HealthError>;
}
