//! Writer profiles shown at `/writers/{slug}` and managed under `/admin/authors`.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::AuthorService;
