//! Typed collection operations shared by every MongoDB-backed repository.
//!
//! Each helper is a thin wrapper over the driver call with the conventions the
//! API relies on: list reads are capped at [`MAX_FETCH`], an empty result is an
//! empty `Vec`, and missing single documents are `None` rather than an error.

use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc},
    error::Result,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

/// Hard cap on the number of documents any list read returns.
pub const MAX_FETCH: i64 = 1000;

/// Sort direction for [`SortSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// Single-key sort applied to a `find`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    pub fn to_document(&self) -> Document {
        let mut sort = Document::new();
        sort.insert(self.key.clone(), self.direction.as_i32());
        sort
    }
}

/// Clamp a requested limit into `1..=MAX_FETCH`.
///
/// Non-positive values mean "as many as allowed"; the driver would otherwise
/// read 0 as unlimited.
pub fn clamp_limit(limit: i64) -> i64 {
    if limit <= 0 {
        MAX_FETCH
    } else {
        limit.min(MAX_FETCH)
    }
}

/// Insert a single document.
#[instrument(skip_all, fields(collection = %collection.name()))]
pub async fn insert_one<T>(collection: &Collection<T>, record: &T) -> Result<()>
where
    T: Serialize + Send + Sync,
{
    collection.insert_one(record).await?;
    Ok(())
}

/// Insert a batch of documents and return how many were written.
#[instrument(skip_all, fields(collection = %collection.name(), batch = records.len()))]
pub async fn insert_many<T>(collection: &Collection<T>, records: &[T]) -> Result<usize>
where
    T: Serialize + Send + Sync,
{
    if records.is_empty() {
        return Ok(0);
    }
    let result = collection.insert_many(records).await?;
    Ok(result.inserted_ids.len())
}

/// Find documents matching `filter`, optionally sorted, capped at [`MAX_FETCH`].
#[instrument(skip(collection), fields(collection = %collection.name()))]
pub async fn find_many<T>(
    collection: &Collection<T>,
    filter: Document,
    sort: Option<SortSpec>,
    limit: i64,
) -> Result<Vec<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let mut find = collection.find(filter).limit(clamp_limit(limit));
    if let Some(sort) = sort {
        find = find.sort(sort.to_document());
    }

    let cursor = find.await?;
    cursor.try_collect().await
}

/// Find the first document matching `filter`.
#[instrument(skip(collection), fields(collection = %collection.name()))]
pub async fn find_one<T>(collection: &Collection<T>, filter: Document) -> Result<Option<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    collection.find_one(filter).await
}

/// Count documents matching `filter`.
#[instrument(skip(collection), fields(collection = %collection.name()))]
pub async fn count<T>(collection: &Collection<T>, filter: Document) -> Result<u64>
where
    T: Send + Sync,
{
    collection.count_documents(filter).await
}

/// Run an aggregation pipeline and deserialize each output row as `R`.
///
/// A `$limit` stage is appended so group results never exceed `limit` rows.
#[instrument(skip(collection, pipeline), fields(collection = %collection.name(), stages = pipeline.len()))]
pub async fn aggregate<T, R>(
    collection: &Collection<T>,
    mut pipeline: Vec<Document>,
    limit: i64,
) -> Result<Vec<R>>
where
    T: Send + Sync,
    R: DeserializeOwned + Unpin + Send + Sync,
{
    pipeline.push(doc! { "$limit": clamp_limit(limit) });

    let cursor = collection.aggregate(pipeline).await?.with_type::<R>();
    cursor.try_collect().await
}
