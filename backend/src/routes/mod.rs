pub mod dashboard;
pub mod registry;
