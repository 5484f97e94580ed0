//! Thin gateway client over `gloo-net`.
//!
//! Every call attaches `Authorization: Bearer {token}` when signed in and
//! turns non-2xx responses into [`ApiError`] via `ApiError::from_status`.

use super::api_utils::api_url;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::unwrap_list;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request factory bound to the current session token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gateway {
    token: Option<String>,
}

impl Gateway {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Client for calls made before sign-in
    pub fn anonymous() -> Self {
        Self::default()
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = api_url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        let response = self
            .builder(method, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path).await?;
        decode(response).await
    }

    /// GET a collection, accepting a bare array or a `{data: [...]}` envelope
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let value: serde_json::Value = self.get_json(path).await?;
        unwrap_list(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Method::Post, path, body).await.map(|_| ())
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_json(Method::Post, path, body).await?;
        decode(response).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_json(Method::Put, path, body).await.map(|_| ())
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_json(Method::Put, path, body).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path).await.map(|_| ())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
