//! Building requests for eLabJournal.

use crate::errors::EncodeError;
use crate::requests::Filters;
use crate::types::{ElabUrl, Token};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use url::Url;

/// Path of an API resource relative to the API base URL,
/// e.g. `experiments/12/sections`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath(Vec<String>);

impl ResourcePath {
    pub fn new(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Append a segment, which may be an ID.
    pub fn join(mut self, segment: impl Display) -> Self {
        self.0.push(segment.to_string());
        self
    }

    /// Append the path segments to `base`. Each segment is percent-encoded.
    fn resolve(&self, base: &ElabUrl) -> Result<Url, EncodeError> {
        let mut url = base.to_url().map_err(|_| EncodeError::Path(base.as_str().to_string()))?;
        url.path_segments_mut()
            .map_err(|_| EncodeError::Path(base.as_str().to_string()))?
            .pop_if_empty()
            .extend(&self.0);
        Ok(url)
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payload {
    #[default]
    Empty,
    /// Serialized JSON, sent with `Content-Type: application/json`.
    Json(Bytes),
    /// Text sent as-is, e.g. HTML.
    Text(String),
}

impl Payload {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, EncodeError> {
        Ok(Self::Json(serde_json::to_vec(body)?.into()))
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }
}

/// An API call: what to send where.
///
/// The expected response shape is given separately, as the type parameter
/// of [crate::ElabClient::execute].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: ResourcePath,
    pub filters: Filters,
    pub payload: Payload,
}

impl Endpoint {
    pub fn new(method: Method, path: ResourcePath) -> Self {
        Self {
            method,
            path,
            filters: Filters::default(),
            payload: Payload::Empty,
        }
    }

    pub fn get(path: ResourcePath) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: ResourcePath, payload: Payload) -> Self {
        Self::new(Method::POST, path).payload(payload)
    }

    pub fn put(path: ResourcePath, payload: Payload) -> Self {
        Self::new(Method::PUT, path).payload(payload)
    }

    pub fn filters(self, filters: Filters) -> Self {
        Self { filters, ..self }
    }

    pub fn payload(self, payload: Payload) -> Self {
        Self { payload, ..self }
    }

    /// Produce the request for this call against the API at `base`.
    pub(crate) fn build(
        self,
        base: &ElabUrl,
        token: &Token,
        accept_json: bool,
    ) -> Result<ElabRequest, EncodeError> {
        let mut url = self.path.resolve(base)?;
        url.set_query(self.filters.to_query()?.as_deref());

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(token.as_str())?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        if accept_json {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        let body = match self.payload {
            Payload::Empty => None,
            Payload::Json(json) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(json)
            }
            Payload::Text(text) => Some(Bytes::from(text)),
        };
        Ok(ElabRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

/// A fully-formed HTTP request.
#[derive(Debug, Clone)]
pub struct ElabRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}
