mod article_service;

pub use article_service::ArticleService;
