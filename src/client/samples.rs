use super::elab::ElabClient;
use super::request::{Endpoint, Payload, ResourcePath};
use super::transport::Transport;
use crate::envelope::{ListEnvelope, Object, Scalar};
use crate::errors::ElabError;
use crate::models::Record;
use crate::requests::{Filters, SampleData};
use crate::types::{SampleId, SampleTypeId};

impl<T: Transport> ElabClient<T> {
    /// List samples, optionally only those of one sample type.
    pub async fn samples(
        &self,
        sample_type: Option<SampleTypeId>,
    ) -> Result<Vec<Record>, ElabError> {
        let filters = sample_type
            .map(|id| Filters::new().with("sampleTypeID", id.to_string()))
            .unwrap_or_default();
        let endpoint = Endpoint::get(ResourcePath::new("samples")).filters(filters);
        self.execute::<ListEnvelope>(endpoint).await
    }

    /// Get a sample.
    pub async fn sample(&self, id: SampleId) -> Result<Record, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("samples").join(id));
        self.execute::<Object>(endpoint).await
    }

    /// Get the metadata fields of a sample.
    pub async fn sample_meta(&self, id: SampleId) -> Result<Vec<Record>, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("samples").join(id).join("meta"));
        self.execute::<ListEnvelope>(endpoint).await
    }

    /// Create a sample. Metadata fields left out of `sample` are created
    /// with their defaults.
    pub async fn create_sample(&self, sample: &SampleData) -> Result<SampleId, ElabError> {
        let endpoint = Endpoint::post(ResourcePath::new("samples"), Payload::json(sample)?)
            .filters(Filters::new().with("autoCreateMetaDefaults", "true"));
        self.execute::<Scalar>(endpoint).await.map(SampleId)
    }

    /// List all sample types.
    pub async fn sample_types(&self) -> Result<Vec<Record>, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("sampleTypes"));
        self.execute::<ListEnvelope>(endpoint).await
    }

    /// Search sample types, returning the response as a whole
    /// (`recordCount`, `data`, ...).
    pub async fn list_sample_types(&self, filters: Filters) -> Result<Record, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("sampleTypes")).filters(filters);
        self.execute::<Object>(endpoint).await
    }

    /// Get the metadata schema of a sample type.
    ///
    /// See [crate::Metadata::from_envelope] to read the fields out of it.
    pub async fn sample_type_meta(&self, id: SampleTypeId) -> Result<Record, ElabError> {
        let endpoint = Endpoint::get(ResourcePath::new("sampleTypes").join(id).join("meta"));
        self.execute::<Object>(endpoint).await
    }
}
