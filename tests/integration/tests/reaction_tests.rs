//! Reaction toggle scenarios against a scripted gateway

use std::sync::Arc;

use serde_json::json;

use feed_core::{EntityId, FetchError, ReactionKind};
use feed_service::{ReactionService, ServiceError, ToggleAction};
use integration_tests::{student_context, MockGateway, PostFixture};

#[tokio::test]
async fn test_toggle_sets_reaction_when_viewer_holds_none() {
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1).count("total", 0).build()),
    );
    gateway.on(
        "POST",
        "posts/1/react/",
        Ok(PostFixture::new(1)
            .count("darwin", 1)
            .count("total", 1)
            .my_reaction("darwin")
            .build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);
    let post = service.fetch(EntityId::new(1)).await.unwrap();
    let outcome = service.toggle(&post, ReactionKind::Darwin).await.unwrap();

    assert_eq!(
        outcome.action,
        ToggleAction::Set {
            code: "darwin".into()
        }
    );
    assert_eq!(outcome.state.viewer_kind(), Some(ReactionKind::Darwin));
    assert_eq!(outcome.state.count(ReactionKind::Darwin), 1);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].path, "posts/1/react/");
    assert_eq!(calls[1].body, Some(json!({"type": "darwin"})));
}

#[tokio::test]
async fn test_toggle_removes_active_category_and_refetches_on_empty_body() {
    // Older backends answer unreact with no content; the gateway surfaces
    // that as a decode failure and the service falls back to a refetch.
    let gateway = MockGateway::new();
    gateway.on(
        "POST",
        "posts/1/unreact/",
        Err(FetchError::Decode("empty body".into())),
    );
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1).count("total", 0).empty_counts().build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);

    let post_payload = PostFixture::new(1)
        .count("einstein", 1)
        .count("total", 1)
        .my_reaction("einstein")
        .build();
    let post = serde_json::from_value::<feed_service::dto::responses::PostPayload>(post_payload)
        .map(feed_core::Post::from)
        .unwrap();

    // "einstein" is an alias of the darwin category, so activating darwin
    // again means remove.
    let outcome = service.toggle(&post, ReactionKind::Darwin).await.unwrap();

    assert_eq!(outcome.action, ToggleAction::Removed);
    assert_eq!(outcome.state.viewer_kind(), None);
    assert_eq!(
        gateway.paths(),
        vec!["POST posts/1/unreact/", "GET posts/1/"]
    );
}

#[tokio::test]
async fn test_toggle_replaces_other_category() {
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1)
            .count("darwin", 1)
            .count("total", 1)
            .my_reaction("darwin")
            .build()),
    );
    gateway.on(
        "POST",
        "posts/1/react/",
        Ok(PostFixture::new(1)
            .count("tesla", 1)
            .count("total", 1)
            .my_reaction("tesla")
            .build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);
    let post = service.fetch(EntityId::new(1)).await.unwrap();
    let outcome = service.toggle(&post, ReactionKind::Tesla).await.unwrap();

    assert_eq!(
        outcome.action,
        ToggleAction::Set {
            code: "tesla".into()
        }
    );
    assert_eq!(outcome.state.viewer_kind(), Some(ReactionKind::Tesla));
    assert_eq!(outcome.state.count(ReactionKind::Darwin), 0);
}

#[tokio::test]
async fn test_toggle_submits_the_alias_the_post_has_shown() {
    // The post only ever saw "einstein"; the darwin category must be
    // submitted under that code, not its default.
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1).count("einstein", 2).count("total", 2).build()),
    );
    gateway.on(
        "POST",
        "posts/1/react/",
        Ok(PostFixture::new(1)
            .count("einstein", 3)
            .count("total", 3)
            .my_reaction("einstein")
            .build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);
    let post = service.fetch(EntityId::new(1)).await.unwrap();
    let outcome = service.toggle(&post, ReactionKind::Darwin).await.unwrap();

    assert_eq!(
        outcome.action,
        ToggleAction::Set {
            code: "einstein".into()
        }
    );
    assert_eq!(
        gateway.calls()[1].body,
        Some(json!({"type": "einstein"}))
    );
    assert_eq!(outcome.state.count(ReactionKind::Darwin), 3);
}

#[tokio::test]
async fn test_toggle_refetches_when_mutation_returns_a_reaction_row() {
    // Some endpoints answer with the created reaction row instead of the
    // updated post. That decodes as JSON but not as a post, so the
    // service refetches.
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1).empty_counts().build()),
    );
    gateway.on(
        "POST",
        "posts/1/react/",
        Ok(json!({"id": 9, "user": 7, "type": "mandela"})),
    );
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1)
            .count("mandela", 1)
            .count("total", 1)
            .my_reaction("mandela")
            .build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);
    let post = service.fetch(EntityId::new(1)).await.unwrap();
    let outcome = service.toggle(&post, ReactionKind::Mandela).await.unwrap();

    assert_eq!(outcome.state.viewer_kind(), Some(ReactionKind::Mandela));
    assert_eq!(
        gateway.paths(),
        vec!["GET posts/1/", "POST posts/1/react/", "GET posts/1/"]
    );
}

#[tokio::test]
async fn test_concurrent_toggle_on_same_post_is_rejected() {
    let gateway = MockGateway::new();
    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);

    let post = serde_json::from_value::<feed_service::dto::responses::PostPayload>(
        PostFixture::new(4).empty_counts().build(),
    )
    .map(feed_core::Post::from)
    .unwrap();

    let _held = ctx.begin_toggle(post.id).unwrap();
    let err = service.toggle(&post, ReactionKind::Darwin).await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::RequestInFlight { post: p } if p == EntityId::new(4)
    ));
    // Rejected before anything went over the wire.
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_failed_toggle_releases_the_inflight_slot() {
    let gateway = MockGateway::new();
    gateway.on(
        "POST",
        "posts/1/react/",
        Err(FetchError::Status {
            status: 403,
            body: r#"{"detail": "Not allowed."}"#.into(),
        }),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);
    let post = serde_json::from_value::<feed_service::dto::responses::PostPayload>(
        PostFixture::new(1).empty_counts().build(),
    )
    .map(feed_core::Post::from)
    .unwrap();

    let err = service.toggle(&post, ReactionKind::Darwin).await.unwrap_err();
    assert!(err.is_fetch());

    // The slot must be free again for the retry.
    assert!(ctx.begin_toggle(post.id).is_some());
}

#[tokio::test]
async fn test_toggle_twice_returns_to_the_starting_state() {
    let gateway = MockGateway::new();
    gateway.on(
        "GET",
        "posts/1/",
        Ok(PostFixture::new(1).empty_counts().build()),
    );
    gateway.on(
        "POST",
        "posts/1/react/",
        Ok(PostFixture::new(1)
            .count("tesla", 1)
            .count("total", 1)
            .my_reaction("tesla")
            .build()),
    );
    gateway.on(
        "POST",
        "posts/1/unreact/",
        Ok(PostFixture::new(1).count("total", 0).empty_counts().build()),
    );

    let ctx = student_context(Arc::clone(&gateway), 7);
    let service = ReactionService::new(&ctx);
    let post = service.fetch(EntityId::new(1)).await.unwrap();

    let after_set = service.toggle(&post, ReactionKind::Tesla).await.unwrap();
    assert!(after_set.state.viewer_holds(ReactionKind::Tesla));

    let after_remove = service
        .toggle(&after_set.post, ReactionKind::Tesla)
        .await
        .unwrap();
    assert_eq!(after_remove.action, ToggleAction::Removed);
    assert_eq!(after_remove.state.viewer_kind(), None);
    assert_eq!(after_remove.state.total(), 0);
}
