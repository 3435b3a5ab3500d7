pub mod cycle;
pub mod scheduler;
pub mod startup;
pub mod transformer;
