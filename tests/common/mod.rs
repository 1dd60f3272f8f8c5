//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use parking_lot::Mutex;
use post_manager::api::{ApiError, PostApi};
use post_manager::post::{Draft, Post, PostId};
use post_manager::store::{PostStore, StoreOptions};
use std::collections::{HashMap, HashSet, VecDeque};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

// -- In-memory API ------------------------------------------------------------

/// In-memory stand-in for the posts server.
///
/// Clones share the same remote collection, so a test can keep one handle
/// while the store owns another.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeRemote>>,
}

#[derive(Default)]
struct FakeRemote {
    posts: Vec<Post>,
    next_id: u64,
    failures: VecDeque<ApiError>,
    delays: HashMap<&'static str, Duration>,
    calls: Vec<&'static str>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Remote collection seeded with `posts`; new ids continue after the
    /// largest numeric id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts
            .iter()
            .filter_map(|p| match p.id {
                PostId::Number(n) => Some(n),
                PostId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Arc::new(Mutex::new(FakeRemote {
                posts,
                next_id,
                ..FakeRemote::default()
            })),
        }
    }

    /// The next call (of any kind) fails with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.inner.lock().failures.push_back(err);
    }

    /// Delay every call of `op` ("list", "create", "update", "delete").
    pub fn set_delay(&self, op: &'static str, delay: Duration) {
        self.inner.lock().delays.insert(op, delay);
    }

    pub fn remote_posts(&self) -> Vec<Post> {
        self.inner.lock().posts.clone()
    }

    pub fn set_remote_posts(&self, posts: Vec<Post>) {
        self.inner.lock().posts = posts;
    }

    /// Operations that reached the server, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().calls.clone()
    }

    async fn begin(&self, op: &'static str) -> Result<(), ApiError> {
        let (delay, failure) = {
            let mut remote = self.inner.lock();
            remote.calls.push(op);
            (remote.delays.get(op).copied(), remote.failures.pop_front())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl PostApi for FakeApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        self.begin("list").await?;
        Ok(self.inner.lock().posts.clone())
    }

    async fn create(&self, draft: &Draft) -> Result<Post, ApiError> {
        self.begin("create").await?;
        let mut remote = self.inner.lock();
        let post = Post::from_draft(PostId::Number(remote.next_id), draft.clone());
        remote.next_id += 1;
        remote.posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: &Post) -> Result<Post, ApiError> {
        self.begin("update").await?;
        let mut remote = self.inner.lock();
        match remote.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post.clone())
            }
            None => Err(ApiError::NotFound {
                id: post.id.clone(),
            }),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), ApiError> {
        self.begin("delete").await?;
        let mut remote = self.inner.lock();
        let before = remote.posts.len();
        remote.posts.retain(|p| &p.id != id);
        if remote.posts.len() == before {
            return Err(ApiError::NotFound { id: id.clone() });
        }
        Ok(())
    }
}

// -- Store helpers ------------------------------------------------------------

pub fn make_store(api: FakeApi) -> PostStore<FakeApi> {
    PostStore::new(api, StoreOptions::default())
}

/// Wait until no request is in flight, panicking after two seconds.
pub async fn wait_idle(store: &PostStore<FakeApi>) {
    for _ in 0..400 {
        if store.in_flight().is_empty() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("store still has requests in flight: {:?}", store.in_flight());
}

pub fn ids(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(|p| p.id.clone()).collect()
}

pub fn assert_unique_ids(posts: &[Post]) {
    let unique: HashSet<_> = posts.iter().map(|p| &p.id).collect();
    assert_eq!(unique.len(), posts.len(), "duplicate ids in {:?}", posts);
}
