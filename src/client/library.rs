use super::elab::ElabClient;
use super::request::{Endpoint, ResourcePath};
use super::transport::Transport;
use crate::envelope::Object;
use crate::errors::ElabError;
use crate::models::Record;
use crate::requests::Filters;

impl<T: Transport> ElabClient<T> {
    /// Search files, e.g. by `fileName`.
    pub async fn files(&self, filters: Filters) -> Result<Record, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("files")).filters(filters);
        self.execute::<Object>(endpoint).await
    }

    /// Search studies.
    pub async fn studies(&self, filters: Filters) -> Result<Record, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("studies")).filters(filters);
        self.execute::<Object>(endpoint).await
    }
}
