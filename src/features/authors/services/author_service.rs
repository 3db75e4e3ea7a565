use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::authors::dtos::{AuthorStatsDto, CreateAuthorDto, TopContributorDto};
use crate::features::authors::models::{Author, AuthorUpdate};
use crate::shared::dates::start_of_month;

/// Owned, in-memory repository of writer profiles
#[derive(Debug, Clone, Default)]
pub struct AuthorService {
    authors: Vec<Author>,
}

impl AuthorService {
    pub fn new(authors: Vec<Author>) -> Self {
        Self { authors }
    }

    pub fn all(&self) -> &[Author] {
        &self.authors
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.slug == slug)
    }

    pub fn active(&self) -> Vec<&Author> {
        self.authors.iter().filter(|a| !a.is_deleted).collect()
    }

    pub fn deleted(&self) -> Vec<&Author> {
        self.authors.iter().filter(|a| a.is_deleted).collect()
    }

    /// Case-insensitive match on bilingual name, bilingual bio and slug
    pub fn search(&self, query: &str) -> Vec<&Author> {
        let query = query.to_lowercase();
        self.authors
            .iter()
            .filter(|a| {
                a.name.contains_lowercase(&query)
                    || a.bio.contains_lowercase(&query)
                    || a.slug.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Add a profile; creation time is now and the profile starts active
    pub fn create(&mut self, mut author: Author) {
        author.created_at = Utc::now();
        author.is_deleted = false;

        tracing::debug!("Author created: id={}, slug={}", author.id, author.slug);
        self.authors.push(author);
    }

    pub fn create_checked(&mut self, dto: CreateAuthorDto) -> Result<String> {
        dto.validate()?;

        if !dto.name.is_complete() {
            return Err(AppError::Validation(
                "Please provide both English and Dhivehi names".to_string(),
            ));
        }
        if self.get_by_slug(dto.slug.trim()).is_some() {
            return Err(AppError::Conflict(format!(
                "Author slug '{}' is already in use",
                dto.slug.trim()
            )));
        }

        let id = format!("author-{}", Uuid::now_v7());
        let social_links = dto.social_links();
        self.create(Author {
            id: id.clone(),
            slug: dto.slug.trim().to_string(),
            name: dto.name.trimmed(),
            bio: dto.bio.trimmed(),
            photo: dto.photo,
            social_links,
            created_at: Utc::now(),
            is_deleted: false,
        });

        tracing::info!("Author created: id={}", id);
        Ok(id)
    }

    /// Returns `false` when the id is unknown
    pub fn update(&mut self, id: &str, updates: &[AuthorUpdate]) -> bool {
        match self.authors.iter_mut().find(|a| a.id == id) {
            Some(author) => {
                for update in updates {
                    author.apply(update);
                }
                true
            }
            None => false,
        }
    }

    pub fn soft_delete(&mut self, id: &str) -> bool {
        self.set_deleted(id, true)
    }

    pub fn restore(&mut self, id: &str) -> bool {
        self.set_deleted(id, false)
    }

    fn set_deleted(&mut self, id: &str, deleted: bool) -> bool {
        match self.authors.iter_mut().find(|a| a.id == id) {
            Some(author) => {
                author.is_deleted = deleted;
                tracing::debug!("Author is_deleted={}: id={}", deleted, id);
                true
            }
            None => false,
        }
    }

    /// Articles written by `author_id`, given the author id of every article
    pub fn article_count(&self, author_id: &str, article_author_ids: &[&str]) -> usize {
        article_author_ids.iter().filter(|id| **id == author_id).count()
    }

    /// `article_author_ids` holds the author id of every article
    pub fn stats(&self, article_author_ids: &[&str], now: DateTime<Utc>) -> AuthorStatsDto {
        let active_authors = self.authors.iter().filter(|a| !a.is_deleted).count();
        let month_start = start_of_month(now);

        // Insertion order kept so ties go to the first author seen
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for author_id in article_author_ids {
            match counts.iter().position(|(id, _)| id == author_id) {
                Some(i) => counts[i].1 += 1,
                None => counts.push((*author_id, 1)),
            }
        }

        let top_contributor = counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(id, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((id, count)),
            })
            .and_then(|(id, count)| {
                self.get_by_id(id).map(|author| TopContributorDto {
                    author_id: author.id.clone(),
                    name: author.name.clone(),
                    article_count: count,
                })
            });

        let average_articles_per_author = if active_authors > 0 {
            (article_author_ids.len() as f64 / active_authors as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };

        AuthorStatsDto {
            total_authors: self.authors.len(),
            active_authors,
            deleted_authors: self.authors.len() - active_authors,
            recently_added_count: self
                .authors
                .iter()
                .filter(|a| a.created_at >= month_start)
                .count(),
            top_contributor,
            average_articles_per_author,
        }
    }
}
