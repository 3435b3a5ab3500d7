pub mod entities;
pub mod merge;

use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tokio::time::Duration;

const POOL_SIZE: u32 = 5;

/// Opens the connection pool used by the merge engine. SQLite keeps its single-connection
/// default so an in-memory database stays one database.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_string());
    if !database_url.starts_with("sqlite:") {
        opt.max_connections(POOL_SIZE);
    }
    opt.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    info!("connected to {:?} database", db.get_database_backend());
    Ok(db)
}
