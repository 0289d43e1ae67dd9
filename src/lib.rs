//! Client library for the eLabJournal REST API.
//!
//! Every endpoint is a thin [Endpoint] over one execution path,
//! [ElabClient::execute], which builds the request, sends it through a
//! [Transport], and normalizes the response into the shape the endpoint
//! expects (see [envelope]).

mod client;
mod constants;
pub mod envelope;
pub mod errors;
pub mod models;
pub mod requests;
pub mod tabular;
pub mod types;

pub use client::{
    ElabClient, ElabClientBuilder, ElabRequest, Endpoint, Payload, RawResponse, ReqwestTransport,
    ResourcePath, Transport,
};
pub use constants::DEFAULT_ELAB_URL;
pub use envelope::{Expect, Shape};
pub use models::Record;
pub use requests::{Filters, Metadata, SampleData, SampleMeta};
pub use tabular::Table;

pub use reqwest;
pub use reqwest_middleware;
