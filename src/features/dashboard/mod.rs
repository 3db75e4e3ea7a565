//! Admin dashboard: article counters, category breakdown and recent activity.

pub mod dtos;
pub mod services;

pub use services::DashboardService;
