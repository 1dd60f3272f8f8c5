//! Remote posts API.
//!
//! The store only depends on the [`PostApi`] trait; [`HttpPostApi`] is the
//! production implementation over HTTP/JSON.

mod error;
mod http;

use std::future::Future;

use crate::post::{Draft, Post, PostId};

pub use error::ApiError;
pub use http::HttpPostApi;

/// CRUD operations on the remote post collection.
///
/// Every call eventually resolves to a result or an [`ApiError`] carrying a
/// human-readable message.
pub trait PostApi: Send + Sync + 'static {
    /// Fetch the full post list.
    fn list(&self) -> impl Future<Output = Result<Vec<Post>, ApiError>> + Send;

    /// Persist a new post. The returned post carries the server-assigned id.
    fn create(&self, draft: &Draft) -> impl Future<Output = Result<Post, ApiError>> + Send;

    /// Replace an existing post, returning the server's version of it.
    fn update(&self, post: &Post) -> impl Future<Output = Result<Post, ApiError>> + Send;

    /// Remove a post.
    fn delete(&self, id: &PostId) -> impl Future<Output = Result<(), ApiError>> + Send;
}
