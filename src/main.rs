use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use war_sync::application::{
    cycle::SyncCycle,
    scheduler::Scheduler,
    startup::{apply_migrations, wait_for_api, wait_for_database},
};
use war_sync::common::config::Settings;
use war_sync::infrastructure::{
    health::HealthCheckPinger, web::transport::ReqwestTransport, ApiGateway, MergeEngine,
    WarApiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::parse();
    settings.validate()?;

    let db = wait_for_database(settings.database_url(), settings.readiness_timeout()).await?;
    apply_migrations(&db).await?;

    let http_client = reqwest::Client::builder().build()?;
    let gateway = ApiGateway::new(ReqwestTransport::new(http_client.clone()))
        .with_max_retry(settings.max_retry());
    let client = WarApiClient::new(gateway, settings.api_root().clone(), settings.client_name())
        .with_contact(settings.contact().as_deref());
    wait_for_api(&client, settings.readiness_timeout()).await?;

    let cycle = SyncCycle::new(client, MergeEngine::new(Arc::new(db)));
    let health = HealthCheckPinger::new(http_client, settings.healthcheck_url().clone());
    let scheduler = Scheduler::new(cycle, health, settings.poll_interval());

    if settings.once() {
        scheduler.run_once().await?;
        return Ok(());
    }

    let stop = CancellationToken::new();
    let trigger = stop.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("interrupt received, finishing the current cycle");
                trigger.cancel();
            }
            Err(e) => error!("cannot listen for interrupts: {}", e),
        }
    });

    scheduler.run(stop).await;
    Ok(())
}
