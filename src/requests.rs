//! Defines models for requests sent to eLabJournal.
use crate::models::Record;
use crate::types::SampleTypeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query string filters, e.g. `{"name": "PCR"}` for listing experiments.
///
/// Each name maps to exactly one value, inserting a name again replaces
/// its value. Empty filters produce no query string at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter, replacing any previous value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Builder-style [Filters::insert].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`, or `None` if empty.
    pub(crate) fn to_query(&self) -> Result<Option<String>, serde_urlencoded::ser::Error> {
        if self.is_empty() {
            Ok(None)
        } else {
            serde_urlencoded::to_string(self).map(Some)
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// New sample, body of `POST samples`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    pub sample_metas: Vec<SampleMeta>,
    #[serde(rename = "sampleTypeID")]
    pub sample_type_id: u32,
    pub checked_out: bool,
    #[serde(rename = "parentSampleID", skip_serializing_if = "Option::is_none")]
    pub parent_sample_id: Option<u32>,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "altID", skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,
    #[serde(rename = "storageLayerID", skip_serializing_if = "Option::is_none")]
    pub storage_layer_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl SampleData {
    pub fn new(sample_type_id: SampleTypeId, name: impl Into<String>) -> Self {
        Self {
            sample_type_id: sample_type_id.0,
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Value of one metadata field of a new sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMeta {
    #[serde(rename = "sampleTypeMetaID")]
    pub sample_type_meta_id: u32,
    pub sample_data_type: String,
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_file: Option<String>,
}

impl SampleMeta {
    /// An entry for a field of the sample type's metadata schema.
    pub fn for_field(field: &Metadata, value: impl Into<String>) -> Self {
        Self {
            sample_type_meta_id: field.sample_type_meta_id,
            sample_data_type: field.sample_data_type.clone(),
            key: field.key.clone(),
            value: value.into(),
            chemical_file: None,
        }
    }
}

/// One field of a sample type's metadata schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(rename = "sampleTypeMetaID")]
    pub sample_type_meta_id: u32,
    pub key: String,
    pub sample_data_type: String,
}

#[derive(Deserialize)]
struct MetadataEnvelope {
    data: Vec<Metadata>,
}

impl Metadata {
    /// Read a schema field from one of the records of `sampleTypes/{id}/meta`.
    pub fn from_record(record: &Record) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(record.clone()))
    }

    /// Read all schema fields from the `sampleTypes/{id}/meta` response.
    pub fn from_envelope(envelope: &Record) -> Result<Vec<Self>, serde_json::Error> {
        let envelope: MetadataEnvelope =
            serde_json::from_value(serde_json::Value::Object(envelope.clone()))?;
        Ok(envelope.data)
    }
}
