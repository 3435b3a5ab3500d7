pub mod assignment_do;
pub mod assignment_task_do;
pub mod biome_do;
pub mod campaign_do;
pub mod dispatch_do;
pub mod event_do;
pub mod event_snapshot_do;
pub mod hazard_do;
pub mod planet_do;
pub mod planet_snapshot_do;
pub mod snapshot_do;
pub mod statistic_do;
pub mod war_do;
pub mod war_snapshot_do;
