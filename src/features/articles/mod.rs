//! Article store: editorial CRUD, status workflow, reader search and engagement.
//!
//! Articles reference their category and author by id. Deleting a category is
//! coordinated by the admin feature, which reassigns articles here first.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::ArticleService;
