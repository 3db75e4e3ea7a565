#[cfg(test)]
use crate::features::articles::models::{Article, ArticleStatus};
#[cfg(test)]
use crate::features::authors::models::{Author, SocialLinks};
#[cfg(test)]
use crate::features::categories::models::NewCategory;
#[cfg(test)]
use crate::features::engagement::models::Reactions;
#[cfg(test)]
use crate::shared::types::BilingualText;

#[cfg(test)]
use chrono::{TimeZone, Utc};
#[cfg(test)]
use fake::faker::lorem::en::Sentence;
#[cfg(test)]
use fake::faker::name::en::Name;
#[cfg(test)]
use fake::Fake;

#[cfg(test)]
fn fake_text() -> BilingualText {
    BilingualText::new(Sentence(3..6).fake::<String>(), "ޓެސްޓް")
}

/// Active root category with a random bilingual name
#[cfg(test)]
#[allow(dead_code)]
pub fn new_category(slug: &str) -> NewCategory {
    NewCategory::new(BilingualText::new(Name().fake::<String>(), "ބައި"), slug)
}

/// Active author created on 2024-01-05
#[cfg(test)]
#[allow(dead_code)]
pub fn author(id: &str, slug: &str) -> Author {
    Author {
        id: id.to_string(),
        slug: slug.to_string(),
        name: BilingualText::new(Name().fake::<String>(), "ލިޔުންތެރިޔާ"),
        bio: fake_text(),
        photo: format!("https://images.example.com/{}.jpg", slug),
        social_links: SocialLinks::default(),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 5, 8, 0, 0)
            .single()
            .unwrap_or_default(),
        is_deleted: false,
    }
}

/// Published article dated 2024-01-10 with no edits or engagement
#[cfg(test)]
#[allow(dead_code)]
pub fn article(id: &str, slug: &str, category_id: &str, author_id: &str) -> Article {
    Article {
        id: id.to_string(),
        slug: slug.to_string(),
        title: fake_text(),
        subtitle: None,
        summary: fake_text(),
        body: fake_text(),
        cover_image: format!("https://images.example.com/{}.jpg", slug),
        category_id: category_id.to_string(),
        author_id: author_id.to_string(),
        published_at: Utc
            .with_ymd_and_hms(2024, 1, 10, 9, 0, 0)
            .single()
            .unwrap_or_default(),
        updated_at: None,
        featured: false,
        status: ArticleStatus::Published,
        has_video: false,
        video_url: None,
        tags: Vec::new(),
        related_articles: Vec::new(),
        scheduled_for: None,
        last_edited_at: None,
        last_edited_by: None,
        published_by: None,
        meta_description: None,
        keywords: Vec::new(),
        og_image: None,
        reactions: Reactions::default(),
        comments: Vec::new(),
    }
}
