//! Scheduler
//!
//! Runs one cycle right away and then one per tick until stopped. Each cycle gets a deadline
//! of one interval minus the safety margin, and its outcome is reported to the health signal.
//! Stopping only prevents future cycles.

use log::{debug, error, info, warn};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::application::cycle::{CycleError, CycleReport, CycleRunner};
use crate::common::config::CYCLE_SAFETY_MARGIN;
use crate::common::context::CycleContext;
use crate::domain::health::{HealthError, HealthSignal};

pub const DEFAULT_LOG_TARGET: &str = "war_sync::scheduler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Start,
    Success,
    Fail,
}

pub struct Scheduler<R: CycleRunner, H: HealthSignal> {
    runner: R,
    health: H,
    interval: Duration,
    log_target: String,
}

impl<R: CycleRunner, H: HealthSignal> Scheduler<R, H> {
    pub fn new(runner: R, health: H, interval: Duration) -> Self {
        Self {
            runner,
            health,
            interval,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: &str) -> Self {
        self.log_target = target.to_string();
        self
    }

    pub fn cycle_budget(&self) -> Duration {
        self.interval.saturating_sub(CYCLE_SAFETY_MARGIN)
    }

    /// Cycles until `stop` fires. Returns after the in-flight cycle, if any, has finished.
    pub async fn run(&self, stop: CancellationToken) {
        info!(
            target: self.log_target.as_str(),
            "polling every {}s, cycle budget {}s",
            self.interval.as_secs(),
            self.cycle_budget().as_secs()
        );
        self.signal(Signal::Start).await;

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;

                _ = stop.cancelled() => break,
                _ = ticker.tick() => {}
            }
            if self.cycle().await.is_err() {
                debug!(target: self.log_target.as_str(), "waiting for the next tick after a failed cycle");
            }
        }
        info!(target: self.log_target.as_str(), "scheduler stopped");
    }

    /// A single signalled cycle, for one-shot runs.
    pub async fn run_once(&self) -> Result<CycleReport, CycleError> {
        self.signal(Signal::Start).await;
        self.cycle().await
    }

    async fn cycle(&self) -> Result<CycleReport, CycleError> {
        let target = self.log_target.as_str();
        let ctx = CycleContext::new(self.cycle_budget());
        info!(target: target, "[{}] cycle started", ctx.id());

        let result = self.runner.run_cycle(&ctx).await;
        match &result {
            Ok(report) => {
                info!(target: target, "[{}] cycle succeeded: {}", ctx.id(), report.stats());
                self.signal(Signal::Success).await;
            }
            Err(e) => {
                error!(target: target, "[{}] cycle failed: {}", ctx.id(), e);
                self.signal(Signal::Fail).await;
            }
        }
        result
    }

    async fn signal(&self, signal: Signal) {
        let result: Result<(), HealthError> = match signal {
            Signal::Start => self.health.start().await,
            Signal::Success => self.health.success().await,
            Signal::Fail => self.health.fail().await,
        };
        if let Err(e) = result {
            warn!(target: self.log_target.as_str(), "{:?} signal dropped: {}", signal, e);
        }
    }
}
