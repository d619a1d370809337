use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Bson, Document};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::serialization::{
    nullable_str, optional_datetime, optional_i64, optional_str, required_str, string_list,
    MappingError,
};

/// Unreserved URL characters only
static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("slug pattern is valid"));

/// Request body for creating a recipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 3, max = 140))]
    pub title: String,

    /// Derived from the title when absent or empty
    #[serde(default)]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[serde(default)]
    #[validate(length(max = 280))]
    pub summary: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub steps: Vec<String>,

    /// Free-text category name
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 1000))]
    pub cook_time_minutes: Option<i64>,

    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || SLUG_PATTERN.is_match(slug) {
        return Ok(());
    }
    let mut error = ValidationError::new("slug");
    error.message = Some("slug may only contain letters, digits, '-', '.', '_' and '~'".into());
    Err(error)
}

fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let valid = url::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false);
    if valid {
        return Ok(());
    }
    let mut error = ValidationError::new("url");
    error.message = Some("image_url must be an absolute http(s) URL".into());
    Err(error)
}

/// Lowercase the title and join its whitespace-separated words with `-`.
pub fn derive_slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

impl CreateRecipeRequest {
    /// The explicit slug, or one derived from the title
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => derive_slug(&self.title),
        }
    }

    /// Store document for this recipe with its slug resolved
    pub fn to_document(&self, now: bson::DateTime) -> Document {
        doc! {
            "title": self.title.clone(),
            "slug": self.resolved_slug(),
            "summary": nullable_str(&self.summary),
            "ingredients": self.ingredients.clone(),
            "steps": self.steps.clone(),
            "category": nullable_str(&self.category),
            "cook_time_minutes": self.cook_time_minutes.map_or(Bson::Null, Bson::Int64),
            "image_url": nullable_str(&self.image_url),
            "author": nullable_str(&self.author),
            "tags": self.tags.clone(),
            "created_at": now,
            "updated_at": now,
        }
    }
}

/// Recipe as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Option<String>,
    pub cook_time_minutes: Option<i64>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Build from a document that already went through
    /// [`crate::serialization::flatten_ids`].
    pub fn from_document(doc: &Document) -> Result<Self, MappingError> {
        Ok(Self {
            id: required_str(doc, "id")?,
            title: required_str(doc, "title")?,
            slug: required_str(doc, "slug")?,
            summary: optional_str(doc, "summary")?,
            ingredients: string_list(doc, "ingredients")?,
            steps: string_list(doc, "steps")?,
            category: optional_str(doc, "category")?,
            cook_time_minutes: optional_i64(doc, "cook_time_minutes")?,
            image_url: optional_str(doc, "image_url")?,
            author: optional_str(doc, "author")?,
            tags: string_list(doc, "tags")?,
            created_at: optional_datetime(doc, "created_at")?,
            updated_at: optional_datetime(doc, "updated_at")?,
        })
    }
}
