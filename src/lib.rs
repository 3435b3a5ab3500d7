pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure {
    pub mod db;
    pub mod health;
    pub mod web;
    // Re-export
    pub use db::merge::{EntityGroup, MergeEngine, MergeEntity};
    pub use web::api::WarApiClient;
    pub use web::gateway::ApiGateway;
}
