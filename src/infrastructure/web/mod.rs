pub mod api;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod request;
pub mod transport;
