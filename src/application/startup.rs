//! Startup readiness
//!
//! The database and the war API must both answer within the readiness window before the
//! first cycle; migrations run once they do.

use std::fmt::Display;
use std::future::Future;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tokio::time::{sleep, Duration, Instant};

use crate::common::context::CycleContext;
use crate::infrastructure::db;
use crate::infrastructure::web::{api::WarApiClient, transport::HttpTransport};

pub const READINESS_RETRY: Duration = Duration::from_secs(2);

/// Calls `probe` every [`READINESS_RETRY`] until it succeeds or `window` runs out.
pub async fn wait_until_ready<T, E, F, Fut>(what: &str, window: Duration, mut probe: F) -> Result<T>
where
    E: Display,
    F: FnMut(Instant) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let deadline = Instant::now() + window;
    let mut attempt = 1;
    loop {
        match probe(deadline).await {
            Ok(value) => {
                info!("{} is ready after {} attempt(s)", what, attempt);
                return Ok(value);
            }
            Err(e) => {
                if Instant::now() + READINESS_RETRY > deadline {
                    bail!("{} not ready within {}s: {}", what, window.as_secs(), e);
                }
                warn!("{} not ready yet (attempt {}): {}", what, attempt, e);
            }
        }
        attempt += 1;
        sleep(READINESS_RETRY).await;
    }
}

pub async fn wait_for_database(database_url: &str, window: Duration) -> Result<DatabaseConnection> {
    wait_until_ready("database", window, |_| async move {
        let conn = db::connect(database_url).await?;
        conn.ping().await?;
        Ok::<_, sea_orm::DbErr>(conn)
    })
    .await
}

/// Probes the war id endpoint. Each probe may spend whatever is left of the window.
pub async fn wait_for_api<T: HttpTransport>(
    client: &WarApiClient<T>,
    window: Duration,
) -> Result<()> {
    wait_until_ready("war API", window, |deadline| async move {
        let ctx = CycleContext::with_deadline(deadline);
        client.fetch_war_id(&ctx).await.map(|_| ())
    })
    .await
}

pub async fn apply_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("applying database migrations")?;
    info!("database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_should_retry_until_ready() {
        let mut failures_left = 2;
        let started = Instant::now();

        let value = wait_until_ready("probe", Duration::from_secs(60), |_| {
            let outcome = if failures_left > 0 {
                failures_left -= 1;
                Err("refused")
            } else {
                Ok(42)
            };
            async move { outcome }
        })
        .await
        .unwrap();

        assert_eq!(value, 42);
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn it_should_give_up_after_the_window() {
        let started = Instant::now();

        let err = wait_until_ready("probe", Duration::from_secs(5), |_| async {
            Err::<(), _>("refused")
        })
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "probe not ready within 5s: refused");
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test]
    async fn it_should_migrate_an_empty_database() {
        let db = wait_for_database("sqlite::memory:", Duration::from_secs(5))
            .await
            .unwrap();

        apply_migrations(&db).await.unwrap();
        apply_migrations(&db).await.unwrap();
    }
}
