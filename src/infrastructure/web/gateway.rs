//! API Gateway Client
//!
//! Sends a request until it gets a 200, a bounded number of times. A 429 waits for the
//! server-supplied `Retry-After` (or the default backoff); every other failure is retried
//! immediately. Attempts and waits are bounded by the cycle context.

use log::{debug, info, warn};
use tokio::time::Duration;

use crate::common::context::CycleContext;

use super::{
    errors::GatewayError,
    request::ApiRequest,
    transport::{HttpTransport, RawResponse},
};

pub const DEFAULT_MAX_RETRY: usize = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);
pub const DEFAULT_LOG_TARGET: &str = "war_sync::gateway";

const STATUS_OK: u16 = 200;
const STATUS_TOO_MANY_REQUESTS: u16 = 429;

pub struct ApiGateway<T: HttpTransport> {
    transport: T,
    max_retry: usize,
    log_target: String,
}

impl<T: HttpTransport> ApiGateway<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_retry: DEFAULT_MAX_RETRY,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    pub fn with_max_retry(mut self, max_retry: usize) -> Self {
        self.max_retry = max_retry;
        self
    }

    pub fn with_log_target(mut self, target: &str) -> Self {
        self.log_target = target.to_string();
        self
    }

    pub async fn send(
        &self,
        ctx: &CycleContext,
        request: &ApiRequest,
    ) -> Result<RawResponse, GatewayError> {
        let target = self.log_target.as_str();
        let attempts = self.max_retry + 1;

        for attempt in 1..=attempts {
            info!(
                target: target,
                "[{}] GET {} ({}), attempt {}/{}",
                ctx.id(),
                request.url(),
                request.resource(),
                attempt,
                attempts
            );

            let outcome = ctx.bound(self.transport.execute(request)).await?;
            let resp = match outcome {
                Ok(resp) => resp,
                Err(e) => {
                    warn!(target: target, "[{}] {} failed: {}", ctx.id(), request.resource(), e);
                    continue;
                }
            };

            match resp.status() {
                STATUS_OK => {
                    debug!(
                        target: target,
                        "[{}] {} answered with {} bytes",
                        ctx.id(),
                        request.resource(),
                        resp.body().len()
                    );
                    return Ok(resp);
                }
                STATUS_TOO_MANY_REQUESTS => {
                    if attempt == attempts {
                        warn!(target: target, "[{}] {} rate limited on the last attempt", ctx.id(), request.resource());
                        break;
                    }
                    let wait = self.backoff_for(resp.retry_after().as_deref());
                    warn!(
                        target: target,
                        "[{}] {} rate limited, waiting {}s before retrying",
                        ctx.id(),
                        request.resource(),
                        wait.as_secs()
                    );
                    if let Err(e) = ctx.sleep(wait).await {
                        warn!(target: target, "[{}] backoff for {} interrupted: {}", ctx.id(), request.resource(), e);
                        return Err(e.into());
                    }
                }
                status => {
                    warn!(
                        target: target,
                        "[{}] {} answered with status {}, retrying",
                        ctx.id(),
                        request.resource(),
                        status
                    );
                }
            }
        }

        Err(GatewayError::RetriesExhausted(self.max_retry))
    }

    /// `Retry-After` as whole seconds, falling back to the default backoff.
    fn backoff_for(&self, retry_after: Option<&str>) -> Duration {
        retry_after
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_BACKOFF)
    }
}
