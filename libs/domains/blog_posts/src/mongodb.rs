//! MongoDB implementation of BlogPostRepository

use async_trait::async_trait;
use database::mongodb::{
    SortSpec, count, find_many, find_one, from_bson_datetime, insert_many, insert_one,
    to_bson_datetime,
};
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::BlogPostResult;
use crate::models::BlogPost;
use crate::repository::BlogPostRepository;

pub const COLLECTION: &str = "blog_posts";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPostDocument {
    id: String,
    title: String,
    excerpt: String,
    #[serde(default)]
    content: Option<String>,
    author: String,
    date: String,
    read_time: String,
    category: String,
    published: bool,
    timestamp: bson::DateTime,
}

impl From<BlogPost> for BlogPostDocument {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            author: post.author,
            date: post.date,
            read_time: post.read_time,
            category: post.category,
            published: post.published,
            timestamp: to_bson_datetime(post.timestamp),
        }
    }
}

impl From<BlogPostDocument> for BlogPost {
    fn from(doc: BlogPostDocument) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            excerpt: doc.excerpt,
            content: doc.content,
            author: doc.author,
            date: doc.date,
            read_time: doc.read_time,
            category: doc.category,
            published: doc.published,
            timestamp: from_bson_datetime(doc.timestamp),
        }
    }
}

pub struct MongoBlogPostRepository {
    collection: Collection<BlogPostDocument>,
}

impl MongoBlogPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Only published posts are ever served.
    fn published_filter(id: Option<&str>) -> Document {
        let mut filter = doc! { "published": true };
        if let Some(id) = id {
            filter.insert("id", id);
        }
        filter
    }
}

#[async_trait]
impl BlogPostRepository for MongoBlogPostRepository {
    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn insert(&self, post: BlogPost) -> BlogPostResult<BlogPost> {
        let document = BlogPostDocument::from(post.clone());
        insert_one(&self.collection, &document).await?;
        Ok(post)
    }

    #[instrument(skip(self, posts), fields(batch = posts.len()))]
    async fn insert_many(&self, posts: Vec<BlogPost>) -> BlogPostResult<usize> {
        let documents: Vec<BlogPostDocument> =
            posts.into_iter().map(BlogPostDocument::from).collect();
        Ok(insert_many(&self.collection, &documents).await?)
    }

    #[instrument(skip(self))]
    async fn list_published(&self, limit: i64) -> BlogPostResult<Vec<BlogPost>> {
        let documents = find_many(
            &self.collection,
            Self::published_filter(None),
            Some(SortSpec::descending("timestamp")),
            limit,
        )
        .await?;
        Ok(documents.into_iter().map(BlogPost::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_published(&self, id: &str) -> BlogPostResult<Option<BlogPost>> {
        let document = find_one(&self.collection, Self::published_filter(Some(id))).await?;
        Ok(document.map(BlogPost::from))
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> BlogPostResult<u64> {
        Ok(count(&self.collection, doc! {}).await?)
    }
}
