use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub author: String,
    /// Display date, e.g. `2024-01-15`
    pub date: String,
    /// Display reading time, e.g. `8 min read`
    pub read_time: String,
    pub category: String,
    pub published: bool,
    pub timestamp: DateTime<Utc>,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostCreate {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub read_time: String,
    #[validate(length(min = 1))]
    pub category: String,
    /// Unpublished posts are stored but never served
    #[serde(default = "default_published")]
    #[schema(default = true)]
    pub published: bool,
}

impl BlogPost {
    pub fn new(input: BlogPostCreate) -> Self {
        Self::with_timestamp(input, database::mongodb::now_millis())
    }

    pub fn with_timestamp(input: BlogPostCreate, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            author: input.author,
            date: input.date,
            read_time: input.read_time,
            category: input.category,
            published: input.published,
            timestamp,
        }
    }
}

/// Result of a seeding attempt, returned as-is by the HTTP endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedOutcome {
    pub message: String,
    /// Posts inserted; absent when the collection was already populated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl SeedOutcome {
    pub fn already_initialized() -> Self {
        Self {
            message: "Blog posts already initialized".to_string(),
            count: None,
        }
    }

    pub fn initialized(count: usize) -> Self {
        Self {
            message: "Blog posts initialized successfully".to_string(),
            count: Some(count),
        }
    }

    pub fn inserted(&self) -> usize {
        self.count.unwrap_or(0)
    }
}
