pub mod author_dto;

pub use author_dto::{AuthorStatsDto, CreateAuthorDto, TopContributorDto};
