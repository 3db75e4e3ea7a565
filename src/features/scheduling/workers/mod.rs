mod scheduled_publisher;

pub use scheduled_publisher::ScheduledPublisher;
