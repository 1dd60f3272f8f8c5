//! Commands accepted by the store and the intents its reducer consumes.

use crate::mvi::Intent;
use crate::post::{Draft, Post, PostId};

use super::state::{Operation, RequestId};

/// A request from the view to change or refresh the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    FetchAll,
    Create(Draft),
    Update(Post),
    Delete(PostId),
}

impl StoreCommand {
    pub fn operation(&self) -> Operation {
        match self {
            StoreCommand::FetchAll => Operation::FetchAll,
            StoreCommand::Create(_) => Operation::Create,
            StoreCommand::Update(post) => Operation::Update(post.id.clone()),
            StoreCommand::Delete(id) => Operation::Delete(id.clone()),
        }
    }
}

/// State transitions of the post store. Everything except `Started` settles
/// the tagged request.
#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// A command was invoked; its API call is about to be made.
    Started {
        request: RequestId,
        operation: Operation,
    },

    /// The server returned the full list.
    Fetched { request: RequestId, posts: Vec<Post> },

    /// The server persisted a new post.
    Created { request: RequestId, post: Post },

    /// The server accepted an update and returned the stored post.
    Updated { request: RequestId, post: Post },

    /// The server removed the post.
    Deleted { request: RequestId, id: PostId },

    /// The request failed with a user-facing message.
    Failed { request: RequestId, message: String },
}

impl Intent for PostsIntent {}
