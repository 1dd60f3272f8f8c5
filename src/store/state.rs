//! Store state: the post collection plus request lifecycle tracking.

use std::collections::BTreeMap;
use std::fmt;

use crate::mvi::State;
use crate::post::{Post, PostId};

/// Settled requests kept in [`PostsState::requests`] unless configured otherwise.
pub const DEFAULT_MAX_TRACKED_REQUESTS: usize = 64;

/// Identifier handed out to every intent invocation, increasing monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, RequestState::Succeeded | RequestState::Failed(_))
    }

    /// Failure message, present only in the `Failed` state.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// What a tracked request is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Create,
    Update(PostId),
    Delete(PostId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::FetchAll => f.write_str("fetch_all"),
            Operation::Create => f.write_str("create"),
            Operation::Update(id) => write!(f, "update({})", id),
            Operation::Delete(id) => write!(f, "delete({})", id),
        }
    }
}

/// Per-request bookkeeping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedRequest {
    pub operation: Operation,
    pub state: RequestState,
}

/// Full store state, owned by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsState {
    /// Ordered collection, unique by id.
    pub posts: Vec<Post>,
    /// Most recent transition across all requests.
    pub status: RequestState,
    /// Per-request lifecycle. In-flight entries are never evicted.
    pub requests: BTreeMap<RequestId, TrackedRequest>,
    /// Settled entries kept in `requests`.
    pub max_tracked: usize,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            status: RequestState::Idle,
            requests: BTreeMap::new(),
            max_tracked: DEFAULT_MAX_TRACKED_REQUESTS,
        }
    }
}

impl State for PostsState {}

impl PostsState {
    pub fn with_max_tracked(max_tracked: usize) -> Self {
        Self {
            max_tracked: max_tracked.max(1),
            ..Self::default()
        }
    }

    pub fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.position(id).is_some()
    }

    /// Requests that have started but not settled, oldest first.
    pub fn in_flight(&self) -> Vec<RequestId> {
        self.requests
            .iter()
            .filter(|(_, r)| r.state.is_loading())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn snapshot(&self) -> PostsSnapshot {
        PostsSnapshot {
            posts: self.posts.clone(),
            status: self.status.clone(),
        }
    }
}

/// Read-only view of the store handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsSnapshot {
    pub posts: Vec<Post>,
    pub status: RequestState,
}

impl PostsSnapshot {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}
