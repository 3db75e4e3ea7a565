//! Hierarchical category management for the news site.
//!
//! The category list is flat; every tree or breadcrumb view is rebuilt from
//! `parent_id` pointers on each read. Re-parenting goes through a single
//! checked entry point that rejects cycles.
//!
//! ## Public routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `/category/{slug}` | Generic category listing |
//! | `special_page_route` | Bespoke page for special categories (e.g. `/elections`) |
//! | `/admin/categories` | Admin tree management |

pub mod dtos;
pub mod models;
pub mod services;

pub use services::CategoryService;
