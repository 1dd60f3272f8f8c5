use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{ApiError, PostApi};
use crate::config::ApiConfig;
use crate::post::{Draft, Post, PostId};

/// REST client for the posts resource.
///
/// - `GET    {collection}`       list
/// - `POST   {collection}`       create
/// - `PUT    {collection}/{id}`  update
/// - `DELETE {collection}/{id}`  delete
#[derive(Clone)]
pub struct HttpPostApi {
    client: Client,
    collection_url: String,
    timeout: Duration,
}

impl HttpPostApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let timeout = config.request_timeout();
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::from_reqwest(e, timeout))?;

        Ok(Self {
            client,
            collection_url: config.collection_url(),
            timeout,
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &PostId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn transport(&self, err: reqwest::Error) -> ApiError {
        ApiError::from_reqwest(err, self.timeout)
    }

    /// Turn a non-success status into an [`ApiError`]. A 404 on an item URL
    /// means the post is gone.
    async fn check(&self, resp: Response, item: Option<&PostId>) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = item {
                return Err(ApiError::NotFound { id: id.clone() });
            }
        }

        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::server(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(&self, resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| self.transport(e))
    }
}

impl PostApi for HttpPostApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        tracing::debug!(url = %self.collection_url, "GET posts");
        let resp = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(|e| self.transport(e))?;
        let resp = self.check(resp, None).await?;
        self.decode(resp).await
    }

    async fn create(&self, draft: &Draft) -> Result<Post, ApiError> {
        tracing::debug!(url = %self.collection_url, "POST post");
        let resp = self
            .client
            .post(&self.collection_url)
            .json(draft)
            .send()
            .await
            .map_err(|e| self.transport(e))?;
        let resp = self.check(resp, None).await?;
        self.decode(resp).await
    }

    async fn update(&self, post: &Post) -> Result<Post, ApiError> {
        let url = self.item_url(&post.id);
        tracing::debug!(url = %url, "PUT post");
        let resp = self
            .client
            .put(&url)
            .json(post)
            .send()
            .await
            .map_err(|e| self.transport(e))?;
        let resp = self.check(resp, Some(&post.id)).await?;
        self.decode(resp).await
    }

    async fn delete(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "DELETE post");
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.transport(e))?;
        self.check(resp, Some(id)).await?;
        Ok(())
    }
}
