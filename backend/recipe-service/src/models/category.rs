use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::serialization::{
    nullable_str, optional_datetime, optional_str, required_str, MappingError,
};

/// Request body for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 2, max = 60))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn to_document(&self, now: bson::DateTime) -> Document {
        doc! {
            "name": self.name.clone(),
            "description": nullable_str(&self.description),
            "created_at": now,
            "updated_at": now,
        }
    }
}

/// Category as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn from_document(doc: &Document) -> Result<Self, MappingError> {
        Ok(Self {
            id: required_str(doc, "id")?,
            name: required_str(doc, "name")?,
            description: optional_str(doc, "description")?,
            created_at: optional_datetime(doc, "created_at")?,
            updated_at: optional_datetime(doc, "updated_at")?,
        })
    }
}
