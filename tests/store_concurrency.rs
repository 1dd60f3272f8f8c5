//! Overlapping requests, timeouts and change notification.

mod common;

use common::{make_store, wait_idle, FakeApi};
use post_manager::post::{Draft, Post, PostId};
use post_manager::store::{
    Operation, PostStore, RequestState, StoreCommand, StoreOptions,
};
use std::time::Duration;

#[tokio::test]
async fn dispatch_is_loading_before_returning() {
    let api = FakeApi::with_posts(vec![Post::new(1, "A", "a")]);
    api.set_delay("list", Duration::from_millis(50));
    let store = make_store(api);

    let (request, handle) = store.dispatch(StoreCommand::FetchAll);
    assert!(store.snapshot().is_loading());
    assert_eq!(store.request_state(request), Some(RequestState::Loading));
    assert_eq!(store.in_flight(), vec![request]);

    assert_eq!(handle.await.unwrap(), RequestState::Succeeded);
    assert_eq!(store.request_state(request), Some(RequestState::Succeeded));
    assert!(store.in_flight().is_empty());
    assert_eq!(store.snapshot().posts.len(), 1);
}

#[tokio::test]
async fn overlapping_requests_are_tracked_separately() {
    let api = FakeApi::with_posts(vec![Post::new(1, "A", "a")]);
    api.set_delay("create", Duration::from_millis(150));
    let store = make_store(api);

    let (create, handle) = store.dispatch(StoreCommand::Create(Draft::new("B", "b")));
    let fetched = store.fetch_all().await;

    // The fetch settled last, so the global status reads Succeeded even
    // though the create is still outstanding.
    assert_eq!(fetched, RequestState::Succeeded);
    assert_eq!(store.snapshot().status, RequestState::Succeeded);
    assert_eq!(store.request_state(create), Some(RequestState::Loading));
    assert_eq!(store.in_flight(), vec![create]);

    assert_eq!(handle.await.unwrap(), RequestState::Succeeded);
    let posts = store.snapshot().posts;
    assert_eq!(posts, vec![Post::new(1, "A", "a"), Post::new(2, "B", "b")]);
    assert!(store.in_flight().is_empty());
}

#[tokio::test]
async fn request_ids_increase_and_keep_their_operation() {
    let api = FakeApi::with_posts(vec![Post::new(1, "A", "a")]);
    let store = make_store(api);

    let (first, h1) = store.dispatch(StoreCommand::FetchAll);
    let (second, h2) = store.dispatch(StoreCommand::Delete(PostId::from(5)));
    assert!(second > first);
    h1.await.unwrap();
    h2.await.unwrap();

    let state = store.state();
    assert_eq!(state.requests[&first].operation, Operation::FetchAll);
    assert_eq!(
        state.requests[&second].operation,
        Operation::Delete(PostId::from(5))
    );
    assert!(state.requests.values().all(|r| r.state.is_settled()));
}

#[tokio::test]
async fn slow_api_times_out() {
    let api = FakeApi::with_posts(vec![Post::new(1, "A", "a")]);
    api.set_delay("list", Duration::from_millis(500));
    let store = PostStore::new(
        api,
        StoreOptions {
            request_timeout: Duration::from_millis(50),
            ..StoreOptions::default()
        },
    );

    let outcome = store.fetch_all().await;
    assert_eq!(
        outcome,
        RequestState::Failed("Request timed out after 50ms".into())
    );
    assert!(store.snapshot().posts.is_empty());
    assert!(store.in_flight().is_empty());
}

#[tokio::test]
async fn subscribers_see_each_settled_change() {
    let api = FakeApi::with_posts(vec![Post::new(1, "A", "a")]);
    let store = make_store(api);
    let mut rx = store.subscribe();

    store.fetch_all().await;
    assert!(rx.has_changed().unwrap());
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen.status, RequestState::Succeeded);
    assert_eq!(seen.posts.len(), 1);

    store.delete(PostId::from(1)).await;
    rx.changed().await.unwrap();
    let seen = rx.borrow_and_update().clone();
    assert!(seen.posts.is_empty());
}

#[tokio::test]
async fn update_of_entry_removed_meanwhile_is_not_found() {
    let api = FakeApi::with_posts(vec![Post::new(1, "A", ""), Post::new(2, "B", "")]);
    api.set_delay("update", Duration::from_millis(100));
    let store = make_store(api.clone());
    store.fetch_all().await;

    let (update, handle) = store.dispatch(StoreCommand::Update(Post::new(1, "A2", "")));
    assert_eq!(store.delete(PostId::from(1)).await, RequestState::Succeeded);
    // The server still knows the post, only the local copy is gone.
    api.set_remote_posts(vec![Post::new(1, "A", ""), Post::new(2, "B", "")]);

    let outcome = handle.await.unwrap();
    assert_eq!(outcome, RequestState::Failed("Post '1' not found".into()));
    assert_eq!(store.request_state(update), Some(outcome));
    assert_eq!(store.snapshot().posts, vec![Post::new(2, "B", "")]);
}

#[tokio::test]
async fn settled_requests_are_evicted_beyond_limit() {
    let api = FakeApi::new();
    let store = PostStore::new(
        api,
        StoreOptions {
            max_tracked_requests: 3,
            ..StoreOptions::default()
        },
    );

    for _ in 0..10 {
        store.fetch_all().await;
    }
    wait_idle(&store).await;
    assert_eq!(store.state().requests.len(), 3);
    assert_eq!(store.snapshot().status, RequestState::Succeeded);
}
