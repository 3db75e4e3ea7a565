pub mod admin;
pub mod articles;
pub mod authors;
pub mod categories;
pub mod dashboard;
pub mod elections;
pub mod engagement;
pub mod preferences;
pub mod scheduling;
