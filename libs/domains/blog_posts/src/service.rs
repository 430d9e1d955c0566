use database::mongodb::{MAX_FETCH, now_millis};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{BlogPostError, BlogPostResult};
use crate::models::{BlogPost, BlogPostCreate, SeedOutcome};
use crate::repository::BlogPostRepository;
use crate::seed::sample_posts;

pub struct BlogPostService<R: BlogPostRepository> {
    repository: Arc<R>,
}

impl<R: BlogPostRepository> BlogPostService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_blog_post(&self, input: BlogPostCreate) -> BlogPostResult<BlogPost> {
        input
            .validate()
            .map_err(|e| BlogPostError::Validation(e.to_string()))?;

        let post = self
            .repository
            .insert(BlogPost::new(input))
            .await
            .map_err(|e| e.context("Error creating blog post"))?;

        tracing::info!(id = %post.id, published = post.published, "Blog post stored");
        Ok(post)
    }

    #[instrument(skip(self))]
    pub async fn list_blog_posts(&self) -> BlogPostResult<Vec<BlogPost>> {
        self.repository
            .list_published(MAX_FETCH)
            .await
            .map_err(|e| e.context("Error fetching blog posts"))
    }

    #[instrument(skip(self))]
    pub async fn get_blog_post(&self, id: &str) -> BlogPostResult<BlogPost> {
        self.repository
            .find_published(id)
            .await
            .map_err(|e| e.context("Error fetching blog post"))?
            .ok_or_else(BlogPostError::not_found)
    }

    /// Seed the sample posts if, and only if, no post exists yet.
    ///
    /// Not atomic: two concurrent calls against an empty collection can both
    /// insert.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> BlogPostResult<SeedOutcome> {
        self.seed_if_empty()
            .await
            .map_err(|e| e.context("Error initializing blog posts"))
    }

    async fn seed_if_empty(&self) -> BlogPostResult<SeedOutcome> {
        let existing = self.repository.count_all().await?;
        if existing > 0 {
            tracing::debug!(existing, "Blog posts already present, skipping seed");
            return Ok(SeedOutcome::already_initialized());
        }

        let inserted = self
            .repository
            .insert_many(sample_posts(now_millis()))
            .await?;
        tracing::info!(inserted, "Sample blog posts inserted");
        Ok(SeedOutcome::initialized(inserted))
    }
}
