//! Election coverage for the `/elections` special page: presidential,
//! parliamentary and local races, live standings and the regional map.

pub mod models;
pub mod services;

pub use services::ElectionService;
