use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;
use std::fmt::{Display, Formatter};

/// Sample ID
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct SampleId(pub u32);

/// Sample type ID
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct SampleTypeId(pub u32);

/// Experiment ID
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct ExperimentId(pub u32);

/// Experiment section ID, called `expJournalID` by the API.
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct ExpJournalId(pub u32);

macro_rules! display_inner {
    ($($id:ty),+) => {
        $(
            impl Display for $id {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    Display::fmt(&self.0, f)
                }
            }
        )+
    };
}

display_inner!(SampleId, SampleTypeId, ExperimentId, ExpJournalId);
