use super::elab::ElabClient;
use super::request::{Endpoint, Payload, ResourcePath};
use super::transport::Transport;
use crate::envelope::{ListEnvelope, Scalar};
use crate::errors::ElabError;
use crate::models::Record;
use crate::requests::Filters;
use crate::types::{ExpJournalId, ExperimentId};
use serde::Serialize;

impl<T: Transport> ElabClient<T> {
    /// Search experiments.
    pub async fn experiments(&self, filters: Filters) -> Result<Vec<Record>, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("experiments")).filters(filters);
        self.execute::<ListEnvelope>(endpoint).await
    }

    /// Create an experiment, e.g. from `{"name": "...", "studyID": ...}`.
    pub async fn create_experiment<B: Serialize + ?Sized>(
        &self,
        experiment: &B,
    ) -> Result<ExperimentId, ElabError> {
        let endpoint = Endpoint::post(ResourcePath::new("experiments"), Payload::json(experiment)?);
        self.execute::<Scalar>(endpoint).await.map(ExperimentId)
    }

    /// Add a section to an experiment, e.g. from
    /// `{"sectionType": "PARAGRAPH", "sectionHeader": "..."}`.
    pub async fn create_section<B: Serialize + ?Sized>(
        &self,
        experiment: ExperimentId,
        section: &B,
    ) -> Result<ExpJournalId, ElabError> {
        let path = ResourcePath::new("experiments")
            .join(experiment)
            .join("sections");
        let endpoint = Endpoint::post(path, Payload::json(section)?);
        self.execute::<Scalar>(endpoint).await.map(ExpJournalId)
    }

    /// List the sections of an experiment.
    pub async fn experiment_sections(
        &self,
        experiment: ExperimentId,
        filters: Filters,
    ) -> Result<Vec<Record>, ElabError> {
        let path = ResourcePath::new("experiments")
            .join(experiment)
            .join("sections");
        self.execute::<ListEnvelope>(Endpoint::get(path).filters(filters))
            .await
    }
}
