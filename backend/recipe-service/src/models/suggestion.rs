use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the cooking-tip endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestRequest {
    /// Accepted but not used by the rules
    pub title: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestResponse {
    /// At most three tips, in rule order
    pub tips: Vec<String>,
}
