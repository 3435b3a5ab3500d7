pub mod assignment;
pub mod campaign;
pub mod dispatch;
pub mod event;
pub mod health;
pub mod planet;
pub mod snapshot;
pub mod war;
