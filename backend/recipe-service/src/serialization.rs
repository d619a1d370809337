//! Store document → API object mapping.
//!
//! [`flatten_ids`] is applied to every document before it leaves the
//! service: the primary `_id` becomes a string `id` and any other
//! ObjectId-valued field is rendered as its hex string. The typed views in
//! [`crate::models`] then read their fields from the flattened document with
//! the helpers below.

use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document};
use thiserror::Error;

/// A stored document did not have the shape the API expects
#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("document is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("document field `{0}` has an unexpected type")]
    WrongType(&'static str),
}

impl From<MappingError> for crate::error::AppError {
    fn from(err: MappingError) -> Self {
        tracing::error!(error = %err, "stored document could not be mapped");
        crate::error::AppError::Internal(err.to_string())
    }
}

/// Rename `_id` to `id` and render every ObjectId field as a plain string.
pub fn flatten_ids(document: Document) -> Document {
    let mut flattened = Document::new();
    for (key, value) in document {
        let key = if key == "_id" { "id".to_string() } else { key };
        let value = match value {
            Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
            other => other,
        };
        flattened.insert(key, value);
    }
    flattened
}

pub(crate) fn required_str(doc: &Document, field: &'static str) -> Result<String, MappingError> {
    match doc.get(field) {
        Some(Bson::String(s)) => Ok(s.clone()),
        Some(_) => Err(MappingError::WrongType(field)),
        None => Err(MappingError::MissingField(field)),
    }
}

pub(crate) fn optional_str(
    doc: &Document,
    field: &'static str,
) -> Result<Option<String>, MappingError> {
    match doc.get(field) {
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(Bson::Null) | None => Ok(None),
        Some(_) => Err(MappingError::WrongType(field)),
    }
}

pub(crate) fn string_list(doc: &Document, field: &'static str) -> Result<Vec<String>, MappingError> {
    match doc.get(field) {
        Some(Bson::Array(items)) => items
            .iter()
            .map(|item| match item {
                Bson::String(s) => Ok(s.clone()),
                _ => Err(MappingError::WrongType(field)),
            })
            .collect(),
        Some(Bson::Null) | None => Ok(Vec::new()),
        Some(_) => Err(MappingError::WrongType(field)),
    }
}

pub(crate) fn optional_i64(doc: &Document, field: &'static str) -> Result<Option<i64>, MappingError> {
    match doc.get(field) {
        Some(Bson::Int32(v)) => Ok(Some(i64::from(*v))),
        Some(Bson::Int64(v)) => Ok(Some(*v)),
        Some(Bson::Double(v)) if v.fract() == 0.0 => Ok(Some(*v as i64)),
        Some(Bson::Null) | None => Ok(None),
        Some(_) => Err(MappingError::WrongType(field)),
    }
}

pub(crate) fn optional_datetime(
    doc: &Document,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, MappingError> {
    match doc.get(field) {
        Some(Bson::DateTime(dt)) => DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis())
            .map(Some)
            .ok_or(MappingError::WrongType(field)),
        Some(Bson::Null) | None => Ok(None),
        Some(_) => Err(MappingError::WrongType(field)),
    }
}

/// `Some(v)` as a BSON string, `None` as null
pub(crate) fn nullable_str(value: &Option<String>) -> Bson {
    value.as_ref().map_or(Bson::Null, |v| Bson::String(v.clone()))
}
