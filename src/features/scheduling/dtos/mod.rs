pub mod calendar_event_dto;

pub use calendar_event_dto::CalendarEventDto;
