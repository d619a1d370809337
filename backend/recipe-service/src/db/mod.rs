/// Document store access layer
///
/// - `store`: the [`DocumentStore`] trait every backend implements
/// - `mongo`: MongoDB backend used in deployments
/// - `memory`: in-process backend for local runs and tests
/// - `*_repo`: one store operation per function, typed in and out
pub mod category_repo;
pub mod comment_repo;
pub mod memory;
pub mod mongo;
pub mod recipe_repo;
pub mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{
    DocumentStore, FindOptions, StoreError, StoreResult, CATEGORY_COLLECTION, COMMENT_COLLECTION,
    RECIPE_COLLECTION,
};
