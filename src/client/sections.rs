//! Experiment sections, addressed by their `expJournalID`.

use super::elab::ElabClient;
use super::request::{Endpoint, Payload, ResourcePath};
use super::transport::Transport;
use crate::envelope::{ListEnvelope, NoContent, Object, Spreadsheet, Text};
use crate::errors::ElabError;
use crate::models::Record;
use crate::requests::Filters;
use crate::tabular::Table;
use crate::types::ExpJournalId;
use serde::Serialize;

fn section_path(id: ExpJournalId, resource: &str) -> ResourcePath {
    ResourcePath::new("experiments")
        .join("sections")
        .join(id)
        .join(resource)
}

impl<T: Transport> ElabClient<T> {
    /// Download an Excel section and flatten all of its sheets into one table.
    pub async fn section_spreadsheet(&self, id: ExpJournalId) -> Result<Table, ElabError> {
        let endpoint = Endpoint::get(section_path(id, "excel"));
        self.execute::<Spreadsheet>(endpoint).await
    }

    /// Get the HTML of a section.
    pub async fn section_html(&self, id: ExpJournalId) -> Result<String, ElabError> {
        let endpoint = Endpoint::get(section_path(id, "html"));
        self.execute::<Text>(endpoint).await
    }

    /// Replace the HTML of a section.
    pub async fn update_section_html(
        &self,
        id: ExpJournalId,
        html: impl Into<String>,
    ) -> Result<(), ElabError> {
        let endpoint = Endpoint::put(section_path(id, "html"), Payload::text(html));
        self.execute::<NoContent>(endpoint).await
    }

    /// Get the content of a section.
    pub async fn section_content(&self, id: ExpJournalId) -> Result<Record, ElabError> {
        let endpoint = Endpoint::get(section_path(id, "content"));
        self.execute::<Object>(endpoint).await
    }

    /// Replace the content of a section, e.g. with `{"contents": "..."}`.
    pub async fn update_section_content<B: Serialize + ?Sized>(
        &self,
        id: ExpJournalId,
        content: &B,
    ) -> Result<(), ElabError> {
        let endpoint = Endpoint::put(section_path(id, "content"), Payload::json(content)?);
        self.execute::<NoContent>(endpoint).await
    }

    /// List the samples of a SAMPLESIN or SAMPLESOUT section.
    pub async fn section_samples(
        &self,
        id: ExpJournalId,
        filters: Filters,
    ) -> Result<Vec<Record>, ElabError> {
        let endpoint = Endpoint::get(section_path(id, "samples")).filters(filters);
        self.execute::<ListEnvelope>(endpoint).await
    }
}
