mod elab;
mod experiments;
mod library;
mod request;
mod samples;
mod sections;
mod transport;

pub use elab::{ElabClient, ElabClientBuilder};
pub use request::{ElabRequest, Endpoint, Payload, ResourcePath};
pub use transport::{RawResponse, ReqwestTransport, Transport};
