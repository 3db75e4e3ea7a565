pub mod admin_dtos;

pub use admin_dtos::{ArticlePageDto, ArticleRowDto, BulkAction};
