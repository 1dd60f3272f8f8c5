//! Reducer for post store state transitions.

use std::collections::HashSet;

use crate::api::ApiError;
use crate::mvi::Reducer;
use crate::post::{Post, PostId};

use super::intent::PostsIntent;
use super::state::{PostsState, RequestId, RequestState, TrackedRequest};

/// Applies settled API results to the collection.
///
/// The collection only ever changes with data the server returned; a failed
/// request leaves it exactly as it was.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::Started { request, operation } => {
                state.requests.insert(
                    request,
                    TrackedRequest {
                        operation,
                        state: RequestState::Loading,
                    },
                );
                state.status = RequestState::Loading;
                state
            }

            PostsIntent::Fetched { request, posts } => {
                state.posts = dedup_by_id(posts);
                settle(state, request, RequestState::Succeeded)
            }

            PostsIntent::Created { request, post } => {
                // A server that echoes an id we already hold gets merged in place.
                match state.position(&post.id) {
                    Some(index) => state.posts[index] = post,
                    None => state.posts.push(post),
                }
                settle(state, request, RequestState::Succeeded)
            }

            PostsIntent::Updated { request, post } => match state.position(&post.id) {
                Some(index) => {
                    state.posts[index] = post;
                    settle(state, request, RequestState::Succeeded)
                }
                None => settle(state, request, not_found(post.id)),
            },

            PostsIntent::Deleted { request, id } => match state.position(&id) {
                Some(index) => {
                    state.posts.remove(index);
                    settle(state, request, RequestState::Succeeded)
                }
                None => settle(state, request, not_found(id)),
            },

            PostsIntent::Failed { request, message } => {
                settle(state, request, RequestState::Failed(message))
            }
        }
    }
}

fn not_found(id: PostId) -> RequestState {
    RequestState::Failed(ApiError::NotFound { id }.user_message())
}

/// Record the outcome for `request`, make it the visible status and evict the
/// oldest settled entries beyond the tracking cap.
fn settle(mut state: PostsState, request: RequestId, outcome: RequestState) -> PostsState {
    if let Some(entry) = state.requests.get_mut(&request) {
        entry.state = outcome.clone();
    }
    state.status = outcome;

    let settled: Vec<RequestId> = state
        .requests
        .iter()
        .filter(|(_, r)| r.state.is_settled())
        .map(|(id, _)| *id)
        .collect();
    let excess = settled.len().saturating_sub(state.max_tracked);
    for id in settled.into_iter().take(excess) {
        state.requests.remove(&id);
    }

    state
}

/// Keep the first occurrence of every id, preserving server order.
fn dedup_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(posts.len());
    posts
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
