//! The HTTP exchange itself.

use super::request::ElabRequest;
use crate::errors::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use std::sync::Arc;

/// Status and complete body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Sends one request and reads its whole response.
///
/// Implementations do not interpret the status code. The response body
/// must be read to the end before returning, for any status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ElabRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: ElabRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request).await
    }
}

/// [Transport] using [reqwest] with optional middleware.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self::new(reqwest_middleware::ClientBuilder::new(client).build())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ElabRequest) -> Result<RawResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }
        let res = req.send().await?;
        let status = res.status();
        // consumes the response, releasing the connection
        let body = res.bytes().await?;
        Ok(RawResponse { status, body })
    }
}
