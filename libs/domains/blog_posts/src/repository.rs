use async_trait::async_trait;

use crate::error::BlogPostResult;
use crate::models::BlogPost;

/// Storage for blog posts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn insert(&self, post: BlogPost) -> BlogPostResult<BlogPost>;

    /// Insert a batch in one call, returning how many were written
    async fn insert_many(&self, posts: Vec<BlogPost>) -> BlogPostResult<usize>;

    /// Published posts, newest first, at most `limit`
    async fn list_published(&self, limit: i64) -> BlogPostResult<Vec<BlogPost>>;

    /// A published post by ID; unpublished posts are treated as missing
    async fn find_published(&self, id: &str) -> BlogPostResult<Option<BlogPost>>;

    /// Every stored post, published or not
    async fn count_all(&self) -> BlogPostResult<u64>;
}
