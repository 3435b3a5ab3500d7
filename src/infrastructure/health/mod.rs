//! Health check pinger
//!
//! Sends `GET {url}/start`, `GET {url}` and `GET {url}/fail` around every cycle. Without a
//! configured url every signal is a silent no-op.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use tokio::time::Duration;
use url::Url;

use crate::domain::health::{HealthError, HealthSignal};

pub const PING_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOG_TARGET: &str = "war_sync::health";

pub struct HealthCheckPinger {
    http_client: Client,
    base: Option<Url>,
    log_target: String,
}

impl HealthCheckPinger {
    pub fn new(http_client: Client, base: Option<Url>) -> Self {
        Self {
            http_client,
            base,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: &str) -> Self {
        self.log_target = target.to_string();
        self
    }

    pub fn signal_url(&self, suffix: &str) -> Option<String> {
        let base = self.base.as_ref()?;
        let root = base.as_str().trim_end_matches('/');
        Some(format!("{}{}", root, suffix))
    }

    async fn ping(&self, suffix: &str) -> Result<(), HealthError> {
        let url = match self.signal_url(suffix) {
            Some(url) => url,
            None => return Ok(()),
        };
        debug!(target: self.log_target.as_str(), "GET {}", url);

        let resp = self
            .http_client
            .get(url.as_str())
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .map_err(|e| HealthError(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(HealthError(format!("{} answered {}", url, resp.status())));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthSignal for HealthCheckPinger {
    async fn start(&self) -> Result<(), HealthError> {
        self.ping("/start").await
    }

    async fn success(&self) -> Result<(), HealthError> {
        self.ping("").await
    }

    async fn fail(&self) -> Result<(), HealthError> {
        self.ping("/fail").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_build_signal_urls() {
        let base = Url::parse("https://hc-ping.example.test/abc-123/").unwrap();
        let pinger = HealthCheckPinger::new(Client::new(), Some(base));

        assert_eq!(
            pinger.signal_url("/start").as_deref(),
            Some("https://hc-ping.example.test/abc-123/start")
        );
        assert_eq!(
            pinger.signal_url("").as_deref(),
            Some("https://hc-ping.example.test/abc-123")
        );
    }

    #[tokio::test]
    async fn it_should_do_nothing_without_a_url() {
        let pinger = HealthCheckPinger::new(Client::new(), None);

        assert!(pinger.start().await.is_ok());
        assert!(pinger.success().await.is_ok());
        assert!(pinger.fail().await.is_ok());
    }
}
