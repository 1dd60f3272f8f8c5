//! Entity store for posts.
//!
//! Keeps an in-memory, id-unique post collection consistent with the remote
//! API. Every command moves the store to `Loading` immediately, calls the API,
//! and settles as `Succeeded` or `Failed(message)`. API failures never escape
//! this module: callers only ever see the settled [`RequestState`].
//!
//! Commands may overlap. Each gets its own [`RequestId`] and per-request state;
//! the global status shows whichever transition happened last.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Collection and request lifecycle
//! - `intent.rs` - Commands and settled API results
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

use std::collections::HashSet;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{ApiError, PostApi};
use crate::config::Config;
use crate::mvi::Reducer;
use crate::post::{Draft, Post, PostId};

pub use intent::{PostsIntent, StoreCommand};
pub use reducer::PostsReducer;
pub use state::{
    Operation, PostsSnapshot, PostsState, RequestId, RequestState, TrackedRequest,
    DEFAULT_MAX_TRACKED_REQUESTS,
};

/// Store tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Upper bound for a single API call; expiry settles the request as failed.
    pub request_timeout: Duration,
    /// Settled requests whose per-request state is retained.
    pub max_tracked_requests: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            max_tracked_requests: DEFAULT_MAX_TRACKED_REQUESTS,
        }
    }
}

impl From<&Config> for StoreOptions {
    fn from(config: &Config) -> Self {
        Self {
            request_timeout: config.api.request_timeout(),
            max_tracked_requests: config.store.max_tracked_requests,
        }
    }
}

/// Cloneable handle to the post store.
///
/// Built once at startup and passed to whoever needs it; clones share state.
pub struct PostStore<A> {
    inner: Arc<StoreInner<A>>,
}

struct StoreInner<A> {
    api: A,
    state: RwLock<PostsState>,
    next_request: AtomicU64,
    request_timeout: Duration,
    snapshots: watch::Sender<PostsSnapshot>,
}

impl<A> Clone for PostStore<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: PostApi> PostStore<A> {
    pub fn new(api: A, options: StoreOptions) -> Self {
        let state = PostsState::with_max_tracked(options.max_tracked_requests);
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            inner: Arc::new(StoreInner {
                api,
                state: RwLock::new(state),
                next_request: AtomicU64::new(1),
                request_timeout: options.request_timeout,
                snapshots,
            }),
        }
    }

    /// Current collection and visible status.
    pub fn snapshot(&self) -> PostsSnapshot {
        self.inner.state.read().snapshot()
    }

    /// Full state clone, including per-request tracking.
    pub fn state(&self) -> PostsState {
        self.inner.state.read().clone()
    }

    /// Receiver that observes a new snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<PostsSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Lifecycle of a single request, if it is still tracked.
    pub fn request_state(&self, request: RequestId) -> Option<RequestState> {
        self.inner
            .state
            .read()
            .requests
            .get(&request)
            .map(|r| r.state.clone())
    }

    pub fn in_flight(&self) -> Vec<RequestId> {
        self.inner.state.read().in_flight()
    }

    /// Replace the collection with the server's list.
    pub async fn fetch_all(&self) -> RequestState {
        self.execute(StoreCommand::FetchAll).await
    }

    /// Persist `draft` and append the server-returned post.
    pub async fn create(&self, draft: Draft) -> RequestState {
        self.execute(StoreCommand::Create(draft)).await
    }

    /// Replace an existing post in place with the server's version.
    pub async fn update(&self, post: Post) -> RequestState {
        self.execute(StoreCommand::Update(post)).await
    }

    /// Remove an existing post.
    pub async fn delete(&self, id: PostId) -> RequestState {
        self.execute(StoreCommand::Delete(id)).await
    }

    /// Run `command` to completion and return its settled state.
    pub async fn execute(&self, command: StoreCommand) -> RequestState {
        let request = self.begin(command.operation());
        self.run(request, command).await
    }

    /// Start `command` in the background on the current tokio runtime.
    ///
    /// The store is already `Loading` when this returns.
    pub fn dispatch(&self, command: StoreCommand) -> (RequestId, JoinHandle<RequestState>) {
        let request = self.begin(command.operation());
        let store = self.clone();
        let handle = tokio::spawn(async move { store.run(request, command).await });
        (request, handle)
    }

    fn contains(&self, id: &PostId) -> bool {
        self.inner.state.read().contains(id)
    }

    fn begin(&self, operation: Operation) -> RequestId {
        let request = RequestId(self.inner.next_request.fetch_add(1, Ordering::Relaxed));
        tracing::debug!(request = %request, operation = %operation, "Request started");
        self.apply(PostsIntent::Started { request, operation });
        request
    }

    async fn run(&self, request: RequestId, command: StoreCommand) -> RequestState {
        let operation = command.operation();
        let result = match command {
            StoreCommand::FetchAll => self.call(self.inner.api.list()).await.map(|posts| {
                let unique = posts.iter().map(|p| &p.id).collect::<HashSet<_>>().len();
                if unique < posts.len() {
                    tracing::warn!(
                        request = %request,
                        duplicates = posts.len() - unique,
                        "Server list repeats ids, keeping first occurrence"
                    );
                }
                tracing::debug!(request = %request, received = posts.len(), "Fetched posts");
                PostsIntent::Fetched { request, posts }
            }),

            StoreCommand::Create(draft) => self
                .call(self.inner.api.create(&draft))
                .await
                .map(|post| PostsIntent::Created { request, post }),

            StoreCommand::Update(post) => {
                if !self.contains(&post.id) {
                    Err(ApiError::NotFound { id: post.id })
                } else {
                    self.call(self.inner.api.update(&post))
                        .await
                        .map(|post| PostsIntent::Updated { request, post })
                }
            }

            StoreCommand::Delete(id) => {
                if !self.contains(&id) {
                    Err(ApiError::NotFound { id })
                } else {
                    self.call(self.inner.api.delete(&id))
                        .await
                        .map(|()| PostsIntent::Deleted { request, id })
                }
            }
        };

        match result {
            Ok(intent) => {
                let outcome = self.apply(intent);
                match &outcome {
                    RequestState::Failed(message) => tracing::warn!(
                        request = %request,
                        operation = %operation,
                        error = %message,
                        "Request result could not be applied"
                    ),
                    _ => tracing::info!(
                        request = %request,
                        operation = %operation,
                        "Request succeeded"
                    ),
                }
                outcome
            }
            Err(err) => {
                tracing::warn!(
                    request = %request,
                    operation = %operation,
                    kind = err.kind(),
                    error = %err,
                    "Request failed"
                );
                self.apply(PostsIntent::Failed {
                    request,
                    message: err.user_message(),
                })
            }
        }
    }

    async fn call<T>(
        &self,
        fut: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        match tokio::time::timeout(self.inner.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                after: self.inner.request_timeout,
            }),
        }
    }

    /// Reduce `intent` into the shared state and publish the new snapshot.
    ///
    /// Returns the visible status after the transition, which for a settling
    /// intent is that request's outcome.
    fn apply(&self, intent: PostsIntent) -> RequestState {
        let mut guard = self.inner.state.write();
        let current = std::mem::take(&mut *guard);
        *guard = PostsReducer::reduce(current, intent);
        // Published under the lock so subscribers never see snapshots out of order.
        self.inner.snapshots.send_replace(guard.snapshot());
        guard.status.clone()
    }
}
