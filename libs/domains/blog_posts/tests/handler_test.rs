//! Handler tests for the blog posts domain, including seeding

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_blog_posts::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct InMemoryRepository {
    records: Arc<Mutex<Vec<BlogPost>>>,
}

#[async_trait]
impl BlogPostRepository for InMemoryRepository {
    async fn insert(&self, post: BlogPost) -> BlogPostResult<BlogPost> {
        self.records.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> BlogPostResult<usize> {
        let count = posts.len();
        self.records.lock().unwrap().extend(posts);
        Ok(count)
    }

    async fn list_published(&self, limit: i64) -> BlogPostResult<Vec<BlogPost>> {
        let mut posts: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_published(&self, id: &str) -> BlogPostResult<Option<BlogPost>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|p| p.id == id && p.published).cloned())
    }

    async fn count_all(&self) -> BlogPostResult<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn draft(title: &str, published: bool) -> Value {
    json!({
        "title": title,
        "excerpt": "Short",
        "author": "Datxoc Team",
        "date": "2024-02-01",
        "readTime": "3 min read",
        "category": "Notes",
        "published": published
    })
}

#[tokio::test]
async fn test_initialize_then_list_returns_samples_in_order() {
    let repo = InMemoryRepository::default();
    let seed = handlers::initialize_router(BlogPostService::new(repo.clone()));
    let posts = handlers::router(BlogPostService::new(repo));

    let response = seed.oneshot(post_empty("/initialize-blog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let outcome: Value = json_body(response.into_body()).await;
    assert_eq!(
        outcome,
        json!({ "message": "Blog posts initialized successfully", "count": 3 })
    );

    let response = posts.oneshot(get("/")).await.unwrap();
    let listed: Vec<BlogPost> = json_body(response.into_body()).await;
    let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "The Future of AI in Business Automation",
            "Machine Learning Implementation Best Practices",
            "Data Quality: The Foundation of Successful AI Projects",
        ]
    );
}

#[tokio::test]
async fn test_initialize_twice_is_idempotent() {
    let repo = InMemoryRepository::default();
    let seed = handlers::initialize_router(BlogPostService::new(repo.clone()));

    seed.clone()
        .oneshot(post_empty("/initialize-blog"))
        .await
        .unwrap();
    let response = seed.oneshot(post_empty("/initialize-blog")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let outcome: Value = json_body(response.into_body()).await;
    assert_eq!(outcome, json!({ "message": "Blog posts already initialized" }));
    assert_eq!(repo.records.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_initialize_skips_when_only_drafts_exist() {
    let repo = InMemoryRepository::default();
    let posts = handlers::router(BlogPostService::new(repo.clone()));
    let seed = handlers::initialize_router(BlogPostService::new(repo.clone()));

    posts
        .oneshot(post_json("/", draft("Hidden", false)))
        .await
        .unwrap();
    let response = seed.oneshot(post_empty("/initialize-blog")).await.unwrap();

    let outcome: Value = json_body(response.into_body()).await;
    assert_eq!(outcome["message"], "Blog posts already initialized");
    assert_eq!(repo.records.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unpublished_posts_are_hidden() {
    let app = handlers::router(BlogPostService::new(InMemoryRepository::default()));

    let response = app
        .clone()
        .oneshot(post_json("/", draft("Hidden", false)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let hidden: BlogPost = json_body(response.into_body()).await;
    assert!(!hidden.published);

    app.clone()
        .oneshot(post_json("/", draft("Visible", true)))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    let listed: Vec<BlogPost> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Visible");

    let response = app
        .oneshot(get(&format!("/{}", hidden.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Blog post not found");
}

#[tokio::test]
async fn test_published_defaults_to_true_on_create() {
    let app = handlers::router(BlogPostService::new(InMemoryRepository::default()));
    let mut body = draft("Defaulted", true);
    body.as_object_mut().unwrap().remove("published");

    let response = app.oneshot(post_json("/", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let post: BlogPost = json_body(response.into_body()).await;
    assert!(post.published);
    assert!(post.content.is_none());
}

#[tokio::test]
async fn test_blank_title_is_422() {
    let app = handlers::router(BlogPostService::new(InMemoryRepository::default()));

    let response = app
        .oneshot(post_json("/", draft("", true)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
