//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::client::RawResponse;
use crate::constants::BODY_SNIPPET_LEN;
use crate::envelope::Shape;
use bytes::Bytes;
use log::warn;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Reasons why a string is not an [crate::types::ElabUrl].
#[derive(thiserror::Error, Debug)]
pub enum InvalidElabUrl {
    #[error("cannot parse \"{url}\" as a URL: {source}")]
    Malformed {
        url: String,
        source: url::ParseError,
    },

    #[error("URL scheme must be http or https: {0}")]
    Protocol(String),

    #[error("API base URL cannot have a query or fragment: {0}")]
    QueryOrFragment(String),

    #[error("URL path does not end with \"/api/v1/\": {0}")]
    EndpointVersion(String),
}

aliri_braid::from_infallible!(InvalidElabUrl);

/// Errors representing failed interactions with eLabJournal.
///
/// Every call produces either its value or exactly one of these.
#[derive(thiserror::Error, Debug)]
pub enum ElabError {
    /// The request could not be built, nothing was sent.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The request never completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response with a status outside of 2xx.
    ///
    /// When the body is an eLabJournal error object, `message` and `errors`
    /// come from it. Otherwise `message` is the body text.
    #[error("({status:?} {reason:?}): {message}{}", sub_errors(.errors))]
    Service {
        status: StatusCode,
        reason: &'static str,
        message: String,
        errors: Vec<String>,
        body: Bytes,
    },

    /// Successful response whose body is not what the endpoint returns.
    #[error("expected {shape} response, {reason}. Response body: {}", snippet(.body))]
    Decode {
        shape: Shape,
        reason: String,
        body: Bytes,
    },
}

impl ElabError {
    /// HTTP status of a [ElabError::Service] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, if a response was received.
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Service { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn decode(shape: Shape, reason: impl ToString, body: &Bytes) -> Self {
        Self::Decode {
            shape,
            reason: reason.to_string(),
            body: body.clone(),
        }
    }
}

/// Failure to build a request locally.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("cannot serialize request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("cannot encode query filters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("token is not a valid Authorization header value")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("cannot append path segments to {0}")]
    Path(String),
}

/// Failure to create an [crate::ElabClient].
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    InvalidElabUrl(#[from] InvalidElabUrl),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Failure to get a response at all.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),
}

impl From<reqwest_middleware::Error> for TransportError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => TransportError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => TransportError::Http(e),
        }
    }
}

/// Error object which eLabJournal sends along with 4xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<Value>,
}

/// Turn a response with a non-2xx status into [ElabError::Service].
pub(crate) fn check(res: RawResponse) -> Result<RawResponse, ElabError> {
    if res.status.is_success() {
        return Ok(res);
    }
    let status = res.status;
    let reason = status.canonical_reason().unwrap_or("unknown reason");
    let (message, errors) = match serde_json::from_slice::<ApiErrorBody>(&res.body) {
        Ok(api_error) => (
            api_error.message,
            api_error.errors.into_iter().map(value_to_string).collect(),
        ),
        Err(_) => (String::from_utf8_lossy(&res.body).into_owned(), Vec::new()),
    };
    warn!("eLabJournal responded {}: {}", status, message);
    Err(ElabError::Service {
        status,
        reason,
        message,
        errors,
        body: res.body,
    })
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn sub_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(" [{}]", errors.join("; "))
    }
}

fn snippet(body: &Bytes) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= BODY_SNIPPET_LEN {
        text.into_owned()
    } else {
        let cut: String = text.chars().take(BODY_SNIPPET_LEN).collect();
        format!("{}...", cut)
    }
}
