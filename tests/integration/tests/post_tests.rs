//! Feed listing and post lifecycle scenarios

use std::sync::Arc;

use serde_json::json;

use feed_core::EntityId;
use feed_service::PostService;
use integration_tests::{paginated_list, plain_list, student_context, MockGateway, PostFixture};

#[tokio::test]
async fn test_feed_parses_both_listing_envelopes() {
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/",
        Ok(paginated_list(vec![
            PostFixture::new(1).build(),
            PostFixture::new(2).build(),
        ])),
    );
    gateway.on(
        "GET",
        "posts/",
        Ok(plain_list(vec![PostFixture::new(3).build()])),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = PostService::new(&ctx);

    let first = service.feed().await.unwrap();
    assert_eq!(first.len(), 2);

    let second = service.feed().await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, EntityId::new(3));
}

#[tokio::test]
async fn test_by_author_hits_the_filtered_listing() {
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/?author=9",
        Ok(plain_list(vec![PostFixture::new(4).build()])),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = PostService::new(&ctx);
    let posts = service.by_author(EntityId::new(9)).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(gateway.paths(), vec!["GET posts/?author=9"]);
}

#[tokio::test]
async fn test_create_trims_and_returns_the_server_copy() {
    let gateway = MockGateway::new();
    gateway.on(
        "POST",
        "posts/",
        Ok(PostFixture::new(10).content("hello world").build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = PostService::new(&ctx);
    let post = service.create("  hello world  ").await.unwrap();

    assert_eq!(post.id, EntityId::new(10));
    assert_eq!(
        gateway.calls()[0].body,
        Some(json!({"content": "hello world"}))
    );
}

#[tokio::test]
async fn test_blank_post_is_rejected_before_any_call() {
    let gateway = MockGateway::new();
    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = PostService::new(&ctx);

    let err = service.create("   ").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_delete_issues_a_single_delete() {
    let gateway = MockGateway::new();
    gateway.on("DELETE", "posts/10/", Ok(serde_json::Value::Null));

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = PostService::new(&ctx);
    service.delete(EntityId::new(10)).await.unwrap();

    assert_eq!(gateway.paths(), vec!["DELETE posts/10/"]);
}
