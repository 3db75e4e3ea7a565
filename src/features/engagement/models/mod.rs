mod comment;
mod reaction;

pub use comment::{Comment, CommentAuthor};
pub use reaction::{ReactionType, Reactions};
