/// Business logic layer for recipe-service
///
/// - Recipe service: creation, filtered listing, slug lookup
/// - Comment service: recipe-scoped comments
/// - Category service: category creation and listing
/// - Sitemap: XML rendering of recipe links
/// - Suggestions: fixed cooking-tip rules
pub mod categories;
pub mod comments;
pub mod recipes;
pub mod sitemap;
pub mod suggestions;

// Re-export commonly used services
pub use categories::CategoryService;
pub use comments::CommentService;
pub use recipes::RecipeService;
