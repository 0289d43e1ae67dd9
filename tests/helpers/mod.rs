use async_trait::async_trait;
use bytes::Bytes;
use elabjournal::errors::TransportError;
use elabjournal::reqwest::StatusCode;
use elabjournal::types::ElabUrl;
use elabjournal::{ElabClient, ElabRequest, RawResponse, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub type AnyResult = Result<(), Box<dyn std::error::Error>>;

pub const TESTING_URL: &str = "https://elab.example.org/api/v1/";
pub const TESTING_TOKEN: &str = "0123456789abcdef";

/// A [Transport] which answers with scripted responses and remembers what it was sent.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ElabRequest>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: impl Into<Bytes>) -> &Self {
        let res = RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        };
        self.responses.lock().unwrap().push_back(Ok(res));
        self
    }

    #[allow(dead_code)]
    pub fn fail(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ElabRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ElabRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ElabRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

pub fn fake_client() -> (ElabClient<Arc<FakeTransport>>, Arc<FakeTransport>) {
    let transport = Arc::new(FakeTransport::default());
    let url = ElabUrl::try_from(TESTING_URL).unwrap();
    let client = ElabClient::with_transport(url, TESTING_TOKEN, Arc::clone(&transport));
    (client, transport)
}
