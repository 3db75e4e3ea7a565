//! Reader engagement: reaction counters and comments attached to articles.

pub mod models;

pub use models::{Comment, CommentAuthor, ReactionType, Reactions};
