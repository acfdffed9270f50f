//! Post feeds and comment threads driven against a mock instance.

mod common;

use lemmios_sdk::domain::comment::CommentThread;
use lemmios_sdk::domain::post::PostFeed;
use lemmios_sdk::shared::{CommentId, FeedSource, ListingType, PostId, Sort};
use lemmios_sdk::state::{CursorState, PageOutcome};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v3/post/list"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_page_advances_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/post/list"))
        .and(query_param("page", "1"))
        .and(query_param("type_", "All"))
        .and(query_param("sort", "Hot"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::posts_page(1, 20)))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let feed = PostFeed::new(FeedSource::Listing(ListingType::All), Sort::Hot);
    assert!(matches!(feed.fetch_more(&client).await, PageOutcome::Appended(20)));
    assert_eq!(feed.state().await, CursorState::Ready { next_page: 2 });
    assert_eq!(feed.posts().await.len(), 20);
}

#[tokio::test]
async fn test_empty_page_finishes_feed() {
    let server = MockServer::start().await;
    mount_page(&server, 1, common::posts_page(1, 20)).await;
    mount_page(&server, 2, json!({ "posts": [] })).await;

    let client = common::client(&server);
    let feed = PostFeed::new(FeedSource::Community("rust@lemmy.ml".into()), Sort::New);
    feed.fetch_more(&client).await;
    assert!(matches!(feed.fetch_more(&client).await, PageOutcome::Exhausted));
    assert_eq!(feed.state().await, CursorState::Done);

    // Done is terminal: no third request goes out.
    assert!(feed.fetch_more(&client).await.is_skipped());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);

    let first = &server.received_requests().await.unwrap()[0];
    assert!(first
        .url
        .query_pairs()
        .any(|(k, v)| k == "community_name" && v == "rust@lemmy.ml"));
}

#[tokio::test]
async fn test_failed_page_is_retried_explicitly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/post/list"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"bad"}"#))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, 1, common::posts_page(1, 3)).await;

    let client = common::client(&server);
    let feed = PostFeed::new(FeedSource::Listing(ListingType::Local), Sort::Hot);
    assert!(matches!(feed.fetch_more(&client).await, PageOutcome::Failed(_)));
    assert_eq!(feed.state().await, CursorState::Failed { page: 1 });

    // A failed feed waits for an explicit retry.
    assert!(feed.fetch_more(&client).await.is_skipped());
    assert!(feed.retry().await);
    assert!(matches!(feed.fetch_more(&client).await, PageOutcome::Appended(3)));
    assert_eq!(feed.state().await, CursorState::Ready { next_page: 2 });
}

#[tokio::test]
async fn test_refresh_starts_over() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/post/list"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::posts_page(1, 5)))
        .expect(2)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let feed = PostFeed::new(FeedSource::Listing(ListingType::All), Sort::Hot);
    feed.fetch_more(&client).await;
    feed.refresh().await;
    assert_eq!(feed.state().await, CursorState::Ready { next_page: 1 });
    assert!(feed.posts().await.is_empty());
    feed.fetch_more(&client).await;
    assert_eq!(feed.posts().await.len(), 5);
}

#[tokio::test]
async fn test_comment_thread_pages_and_expands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/comment/list"))
        .and(query_param("post_id", "9"))
        .and(query_param("page", "1"))
        .and(query_param("max_depth", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [
                common::comment_view(1, "0.1", 1, 1, None),
                common::comment_view(2, "0.1.2", 1, 1, None),
                common::comment_view(3, "0.3", 1, 1, None)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/comment/list"))
        .and(query_param("parent_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [
                common::comment_view(2, "0.1.2", 1, 1, None),
                common::comment_view(4, "0.1.2.4", 1, 1, None)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let mut thread = CommentThread::new(PostId(9), Sort::Hot);
    assert!(matches!(thread.fetch_more(&client).await, PageOutcome::Appended(3)));
    assert!(matches!(
        thread.expand(&client, CommentId(2)).await,
        PageOutcome::Appended(1)
    ));
    // Already expanded.
    assert!(thread.expand(&client, CommentId(2)).await.is_skipped());

    let order: Vec<(i64, usize)> = thread
        .tree()
        .iter()
        .map(|n| (n.comment.id().get(), n.depth))
        .collect();
    assert_eq!(order, vec![(1, 0), (2, 1), (4, 2), (3, 0)]);
    assert_eq!(thread.children_of(CommentId(1)).len(), 1);
}

#[tokio::test]
async fn test_set_sort_applies_to_every_clone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/post/list"))
        .and(query_param("sort", "New"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::posts_page(1, 4)))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let feed = PostFeed::new(FeedSource::Listing(ListingType::All), Sort::Hot);
    let other = feed.clone();
    feed.set_sort(Sort::New).await;

    assert_eq!(other.sort().await, Sort::New);
    assert!(matches!(other.fetch_more(&client).await, PageOutcome::Appended(4)));
    assert_eq!(feed.posts().await.len(), 4);
}

#[tokio::test]
async fn test_cancelled_fetch_leaves_feed_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/post/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::posts_page(1, 2))
                .set_delay(Duration::from_secs(60)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, 1, common::posts_page(1, 2)).await;

    let client = common::client(&server);
    let feed = PostFeed::new(FeedSource::Listing(ListingType::All), Sort::Hot);
    let cancelled = tokio::time::timeout(Duration::from_millis(300), feed.fetch_more(&client)).await;
    assert!(cancelled.is_err());
    assert_eq!(feed.state().await, CursorState::Ready { next_page: 1 });

    assert!(matches!(feed.fetch_more(&client).await, PageOutcome::Appended(2)));
    assert_eq!(feed.state().await, CursorState::Ready { next_page: 2 });
}
