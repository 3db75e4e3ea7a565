use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::seed::Seed;
use crate::features::articles::ArticleService;
use crate::features::authors::AuthorService;
use crate::features::categories::CategoryService;
use crate::features::elections::ElectionService;

/// Every content store of the site, owned together
#[derive(Debug, Clone, Default)]
pub struct Newsroom {
    pub categories: CategoryService,
    pub articles: ArticleService,
    pub authors: AuthorService,
    pub elections: ElectionService,
}

/// Handle shared between the binary and background workers
pub type SharedNewsroom = Arc<RwLock<Newsroom>>;

impl Newsroom {
    pub fn from_seed(seed: Seed) -> Self {
        let newsroom = Self {
            categories: CategoryService::new(seed.categories),
            articles: ArticleService::new(seed.articles),
            authors: AuthorService::new(seed.authors),
            elections: ElectionService::new(seed.races, seed.electoral_maps),
        };

        tracing::info!(
            "Newsroom seeded: categories={}, articles={}, authors={}, races={}",
            newsroom.categories.len(),
            newsroom.articles.len(),
            newsroom.authors.all().len(),
            newsroom.elections.races().len()
        );
        newsroom
    }

    pub fn shared(self) -> SharedNewsroom {
        Arc::new(RwLock::new(self))
    }
}
