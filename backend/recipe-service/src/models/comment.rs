use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::serialization::{optional_datetime, required_str, MappingError};

/// Request body for adding a comment to a recipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    /// Ignored; the recipe id in the path is authoritative
    #[serde(default)]
    pub recipe_id: Option<String>,

    /// Missing fields decode as empty and fail validation after the
    /// recipe id and existence checks
    #[serde(default)]
    #[validate(length(min = 2, max = 60))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
}

impl CreateCommentRequest {
    /// Store document stamped with the recipe id taken from the path
    pub fn to_document(&self, recipe_id: &str, now: bson::DateTime) -> Document {
        doc! {
            "recipe_id": recipe_id,
            "name": self.name.clone(),
            "message": self.message.clone(),
            "created_at": now,
            "updated_at": now,
        }
    }
}

/// Comment as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: String,
    pub recipe_id: String,
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn from_document(doc: &Document) -> Result<Self, MappingError> {
        Ok(Self {
            id: required_str(doc, "id")?,
            recipe_id: required_str(doc, "recipe_id")?,
            name: required_str(doc, "name")?,
            message: required_str(doc, "message")?,
            created_at: optional_datetime(doc, "created_at")?,
            updated_at: optional_datetime(doc, "updated_at")?,
        })
    }
}
