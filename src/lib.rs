//! Content core of a bilingual (English / Dhivehi) news site.
//!
//! Categories, articles and authors live in owned in-memory stores grouped
//! by [`core::state::Newsroom`]. Admin, dashboard and scheduling features
//! operate on those stores.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::core::seed::Seed;
pub use crate::core::state::{Newsroom, SharedNewsroom};
