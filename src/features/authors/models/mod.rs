mod author;

pub use author::{Author, AuthorUpdate, SocialLinks};
