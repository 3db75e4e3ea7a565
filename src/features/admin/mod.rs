//! Admin portal: the articles table (filters, selection, sorting, paging)
//! and operations that coordinate several stores.
//!
//! ## Pages
//!
//! | Route | Description |
//! |-------|-------------|
//! | `/admin` | Dashboard |
//! | `/admin/articles` | Filterable articles table with bulk actions |
//! | `/admin/articles/calendar` | Editorial calendar |
//! | `/admin/categories` | Category tree editor |
//! | `/admin/authors` | Author profiles |

pub mod dtos;
pub mod models;
pub mod services;

pub use services::AdminService;
