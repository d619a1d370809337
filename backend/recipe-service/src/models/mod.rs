/// Data models for recipe-service
///
/// Request payloads carry their validation rules (`validator`), stored
/// records map field-by-field to store documents, and the response views are
/// built from documents after identifier flattening.
pub mod category;
pub mod comment;
pub mod recipe;
pub mod suggestion;

pub use category::{Category, CreateCategoryRequest};
pub use comment::{Comment, CreateCommentRequest};
pub use recipe::{derive_slug, CreateRecipeRequest, Recipe};
pub use suggestion::{SuggestRequest, SuggestResponse};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every create endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Store-assigned identifier, hex encoded
    pub id: String,
}
