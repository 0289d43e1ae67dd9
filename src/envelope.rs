//! Shapes of eLabJournal response bodies.
//!
//! The service is not consistent about what it sends back: creating
//! something returns a bare integer, fetching one thing returns a bare
//! object, and listing returns `{"recordCount": n, "data": [...]}`.
//! Which of these to expect is a property of the endpoint, so each shape
//! is a type implementing [Expect] and [crate::ElabClient::execute] is
//! generic over it.

use crate::errors::ElabError;
use crate::models::Record;
use crate::tabular::{self, Table};
use bytes::Bytes;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Name of an expected response shape, used for diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A bare integer, e.g. the ID of something just created.
    Scalar,
    /// A single JSON object.
    Object,
    /// A JSON object with a `data` list of objects.
    ListEnvelope,
    /// Raw text, e.g. HTML.
    Text,
    /// Nothing of interest.
    NoContent,
    /// An `.xlsx` workbook.
    Spreadsheet,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Scalar => "scalar",
            Shape::Object => "object",
            Shape::ListEnvelope => "list envelope",
            Shape::Text => "text",
            Shape::NoContent => "empty",
            Shape::Spreadsheet => "spreadsheet",
        };
        f.write_str(name)
    }
}

/// A response shape and how to extract it from a successful response body.
pub trait Expect {
    type Output;

    const SHAPE: Shape;

    /// Whether the response is JSON, which decides the `Accept` header.
    const JSON: bool = true;

    fn extract(body: Bytes) -> Result<Self::Output, ElabError>;
}

/// See [Shape::Scalar]
pub struct Scalar;

/// See [Shape::Object]
pub struct Object;

/// See [Shape::ListEnvelope]
pub struct ListEnvelope;

/// See [Shape::Text]
pub struct Text;

/// See [Shape::NoContent]
pub struct NoContent;

/// See [Shape::Spreadsheet]
pub struct Spreadsheet;

impl Expect for Scalar {
    type Output = u32;
    const SHAPE: Shape = Shape::Scalar;

    fn extract(body: Bytes) -> Result<u32, ElabError> {
        match parse(&body, Self::SHAPE)? {
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| ElabError::decode(Self::SHAPE, format!("{} is not an ID", n), &body)),
            other => Err(ElabError::decode(
                Self::SHAPE,
                format!("got {}", kind(&other)),
                &body,
            )),
        }
    }
}

impl Expect for Object {
    type Output = Record;
    const SHAPE: Shape = Shape::Object;

    fn extract(body: Bytes) -> Result<Record, ElabError> {
        match parse(&body, Self::SHAPE)? {
            Value::Object(record) => Ok(record),
            other => Err(ElabError::decode(
                Self::SHAPE,
                format!("got {}", kind(&other)),
                &body,
            )),
        }
    }
}

impl Expect for ListEnvelope {
    type Output = Vec<Record>;
    const SHAPE: Shape = Shape::ListEnvelope;

    fn extract(body: Bytes) -> Result<Vec<Record>, ElabError> {
        let mut envelope = match parse(&body, Self::SHAPE)? {
            Value::Object(envelope) => envelope,
            other => {
                return Err(ElabError::decode(
                    Self::SHAPE,
                    format!("got {}", kind(&other)),
                    &body,
                ))
            }
        };
        let data = match envelope.remove("data") {
            Some(Value::Array(data)) => data,
            Some(other) => {
                return Err(ElabError::decode(
                    Self::SHAPE,
                    format!("\"data\" is {}", kind(&other)),
                    &body,
                ))
            }
            None => {
                return Err(ElabError::decode(
                    Self::SHAPE,
                    "\"data\" is missing",
                    &body,
                ))
            }
        };
        data.into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(ElabError::decode(
                    Self::SHAPE,
                    format!("\"data\"[{}] is {}", i, kind(&other)),
                    &body,
                )),
            })
            .collect()
    }
}

impl Expect for Text {
    type Output = String;
    const SHAPE: Shape = Shape::Text;
    const JSON: bool = false;

    fn extract(body: Bytes) -> Result<String, ElabError> {
        String::from_utf8(body.to_vec()).map_err(|e| ElabError::decode(Self::SHAPE, e, &body))
    }
}

impl Expect for NoContent {
    type Output = ();
    const SHAPE: Shape = Shape::NoContent;
    const JSON: bool = false;

    fn extract(_body: Bytes) -> Result<(), ElabError> {
        Ok(())
    }
}

impl Expect for Spreadsheet {
    type Output = Table;
    const SHAPE: Shape = Shape::Spreadsheet;
    const JSON: bool = false;

    fn extract(body: Bytes) -> Result<Table, ElabError> {
        tabular::extract(body.clone()).map_err(|e| ElabError::decode(Self::SHAPE, e, &body))
    }
}

fn parse(body: &Bytes, shape: Shape) -> Result<Value, ElabError> {
    serde_json::from_slice(body).map_err(|e| ElabError::decode(shape, e, body))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
