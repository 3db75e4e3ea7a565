//! Editorial calendar and scheduled publishing.
//!
//! The calendar places each article on its scheduled date, falling back to
//! the publish date. `ScheduledPublisher` promotes scheduled articles to
//! published once their date has passed.

pub mod dtos;
pub mod services;
pub mod workers;

pub use services::CalendarService;
pub use workers::ScheduledPublisher;
