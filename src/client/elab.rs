use super::request::Endpoint;
use super::transport::{ReqwestTransport, Transport};
use crate::constants::DEFAULT_ELAB_URL;
use crate::envelope::Expect;
use crate::errors::{check, BuildError, ElabError};
use crate::types::{ElabUrl, Token};
use log::debug;

/// eLabJournal client.
///
/// Each method performs exactly one HTTP request. There is no retrying,
/// pagination or caching, and the client keeps no state between calls,
/// so it can be shared between tasks freely.
#[derive(Debug)]
pub struct ElabClient<T: Transport = ReqwestTransport> {
    transport: T,
    url: ElabUrl,
    token: Token,
}

pub struct ElabClientBuilder {
    url: Option<ElabUrl>,
    token: Token,
    builder: reqwest_middleware::ClientBuilder,
}

impl ElabClientBuilder {
    pub(crate) fn new(token: Token) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self {
            url: None,
            token,
            builder,
        })
    }

    /// Use an eLabJournal instance other than [DEFAULT_ELAB_URL].
    pub fn url(self, url: ElabUrl) -> Self {
        Self {
            url: Some(url),
            ..self
        }
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            url: self.url,
            token: self.token,
            builder: self.builder.with(middleware),
        }
    }

    pub fn build(self) -> Result<ElabClient, BuildError> {
        let url = match self.url {
            Some(url) => url,
            None => ElabUrl::try_from(DEFAULT_ELAB_URL)?,
        };
        let transport = ReqwestTransport::new(self.builder.build());
        Ok(ElabClient::with_transport(url, self.token, transport))
    }
}

impl ElabClient {
    /// Create a client builder.
    pub fn builder(token: impl Into<Token>) -> Result<ElabClientBuilder, reqwest::Error> {
        ElabClientBuilder::new(token.into())
    }

    /// Create a client for [DEFAULT_ELAB_URL].
    pub fn new(token: impl Into<Token>) -> Result<Self, BuildError> {
        Self::builder(token)?.build()
    }
}

impl<T: Transport> ElabClient<T> {
    /// Create a client which sends its requests through `transport`.
    pub fn with_transport(url: ElabUrl, token: impl Into<Token>, transport: T) -> Self {
        Self {
            transport,
            url,
            token: token.into(),
        }
    }

    /// Get the URL this client is connected to.
    pub fn url(&self) -> &ElabUrl {
        &self.url
    }

    /// Perform an API call and extract the response shape `E`.
    ///
    /// All the other methods of [ElabClient] are calls to this one.
    pub async fn execute<E: Expect>(&self, endpoint: Endpoint) -> Result<E::Output, ElabError> {
        let request = endpoint.build(&self.url, &self.token, E::JSON)?;
        debug!("{} {}", request.method, request.url);
        let res = self.transport.send(request).await?;
        debug!(
            "eLabJournal responded {} with {} bytes",
            res.status,
            res.body.len()
        );
        let res = check(res)?;
        E::extract(res.body).inspect_err(|e| debug!("{}", e))
    }
}
