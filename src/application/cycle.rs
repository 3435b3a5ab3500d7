//! One poll cycle
//!
//! Fetches the six resources one after another, validates them and merges whatever validated
//! in a single transaction. A failed fetch leaves its resource empty; the cycle still merges
//! the rest but reports itself degraded.

use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use getset::Getters;
use log::{info, warn};

use crate::application::transformer::{errors::TransformError, transform_all, WarResources};
use crate::common::context::CycleContext;
use crate::infrastructure::db::merge::{errors::MergeError, stats::MergeStats, MergeEngine};
use crate::infrastructure::web::{
    api::WarApiClient, errors::GatewayError, request::Resource, transport::HttpTransport,
};

pub const DEFAULT_LOG_TARGET: &str = "war_sync::cycle";

#[derive(Debug, Clone, Default, Getters)]
#[getset(get = "pub")]
pub struct CycleReport {
    stats: MergeStats,
    fetch_failures: Vec<(Resource, GatewayError)>,
    transform_failures: Vec<TransformError>,
    warnings: Vec<String>,
}

impl CycleReport {
    pub fn failure_count(&self) -> usize {
        self.fetch_failures.len() + self.transform_failures.len()
    }
}

#[derive(Debug, Clone)]
pub enum CycleError {
    /// Nothing from this cycle was persisted.
    Merge(MergeError),
    /// The merge committed, but some resources were not fetched or did not validate.
    Degraded(CycleReport),
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CycleError::Merge(e) => write!(f, "cycle rolled back: {}", e),
            CycleError::Degraded(report) => write!(
                f,
                "cycle committed with {} failed fetches and {} rejected groups",
                report.fetch_failures.len(),
                report.transform_failures.len()
            ),
        }
    }
}

impl Error for CycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CycleError::Merge(e) => Some(e),
            CycleError::Degraded(_) => None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CycleRunner: Send + Sync {
    async fn run_cycle(&self, ctx: &CycleContext) -> Result<CycleReport, CycleError>;
}

pub struct SyncCycle<T: HttpTransport> {
    client: WarApiClient<T>,
    engine: MergeEngine,
    log_target: String,
}

impl<T: HttpTransport> SyncCycle<T> {
    pub fn new(client: WarApiClient<T>, engine: MergeEngine) -> Self {
        Self {
            client,
            engine,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: &str) -> Self {
        self.log_target = target.to_string();
        self
    }

    async fn fetch_all(&self, ctx: &CycleContext, report: &mut CycleReport) -> WarResources {
        WarResources {
            war_id: self.keep(ctx, Resource::WarId, self.client.fetch_war_id(ctx).await, report),
            war_summary: self.keep(
                ctx,
                Resource::WarSummary,
                self.client.fetch_war_summary(ctx).await,
                report,
            ),
            assignments: self.keep(
                ctx,
                Resource::Assignments,
                self.client.fetch_assignments(ctx).await,
                report,
            ),
            campaigns: self.keep(
                ctx,
                Resource::Campaigns,
                self.client.fetch_campaigns(ctx).await,
                report,
            ),
            dispatches: self.keep(
                ctx,
                Resource::Dispatches,
                self.client.fetch_dispatches(ctx).await,
                report,
            ),
            planets: self.keep(
                ctx,
                Resource::Planets,
                self.client.fetch_planets(ctx).await,
                report,
            ),
        }
    }

    fn keep<R>(
        &self,
        ctx: &CycleContext,
        resource: Resource,
        result: Result<R, GatewayError>,
        report: &mut CycleReport,
    ) -> Option<R> {
        match result {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!(target: self.log_target.as_str(), "[{}] fetching {} failed: {}", ctx.id(), resource, e);
                report.fetch_failures.push((resource, e));
                None
            }
        }
    }
}

#[async_trait]
impl<T: HttpTransport> CycleRunner for SyncCycle<T> {
    async fn run_cycle(&self, ctx: &CycleContext) -> Result<CycleReport, CycleError> {
        let target = self.log_target.as_str();
        let mut report = CycleReport::default();

        let resources = self.fetch_all(ctx, &mut report).await;
        let transformed = transform_all(&resources, Utc::now());
        for failure in transformed.failures.iter() {
            warn!(target: target, "[{}] group rejected: {}", ctx.id(), failure);
        }
        for warning in transformed.warnings.iter() {
            warn!(target: target, "[{}] {}", ctx.id(), warning);
        }
        report.transform_failures = transformed.failures;
        report.warnings = transformed.warnings;

        report.stats = self
            .engine
            .merge(ctx, &transformed.groups)
            .await
            .map_err(CycleError::Merge)?;

        if report.failure_count() > 0 {
            return Err(CycleError::Degraded(report));
        }
        info!(target: target, "[{}] cycle finished cleanly", ctx.id());
        Ok(report)
    }
}
