//! In-process document store.
//!
//! Evaluates the same filter subset the repositories send to MongoDB
//! (equality, `$in`, `$regex`/`$options`) over documents held in memory.
//! Used for local runs without a database and by the HTTP test-suite.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use regex::RegexBuilder;
use std::collections::HashMap;
use std::sync::RwLock;

use super::store::{DocumentStore, FindOptions, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents currently held in `collection`
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|guard| guard.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Execution("memory store lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let (id, stored) = match document.get("_id") {
            Some(Bson::ObjectId(oid)) => (*oid, document),
            Some(other) => return Err(StoreError::UnexpectedId(other.to_string())),
            None => {
                let oid = ObjectId::new();
                let mut stored = Document::new();
                stored.insert("_id", oid);
                for (key, value) in document {
                    stored.insert(key, value);
                }
                (oid, stored)
            }
        };

        let mut guard = self.collections.write().map_err(poisoned)?;
        guard.entry(collection.to_string()).or_default().push(stored);
        Ok(id)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        let guard = self.collections.read().map_err(poisoned)?;
        let Some(documents) = guard.get(collection) else {
            return Ok(None);
        };

        for document in documents {
            if matches_filter(document, &filter)? {
                return Ok(Some(document.clone()));
            }
        }
        Ok(None)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        options: FindOptions,
    ) -> StoreResult<Vec<Document>> {
        let guard = self.collections.read().map_err(poisoned)?;
        let Some(documents) = guard.get(collection) else {
            return Ok(Vec::new());
        };

        let limit = usize::try_from(options.limit).unwrap_or(0);
        let mut found = Vec::new();
        for document in documents {
            if found.len() >= limit {
                break;
            }
            if matches_filter(document, &filter)? {
                found.push(match &options.projection {
                    Some(projection) => project(document, projection),
                    None => document.clone(),
                });
            }
        }
        Ok(found)
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let guard = self.collections.read().map_err(poisoned)?;
        let mut names: Vec<String> = guard.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

fn matches_filter(document: &Document, filter: &Document) -> StoreResult<bool> {
    for (key, condition) in filter {
        let value = document.get(key);
        let matched = match condition {
            Bson::Document(ops) if ops.keys().any(|k| k.starts_with('$')) => {
                matches_operators(value, ops)?
            }
            expected => equals(value, expected),
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Equality with MongoDB's array semantics: an array field matches when
/// any element equals the expected value.
fn equals(value: Option<&Bson>, expected: &Bson) -> bool {
    match value {
        Some(Bson::Array(items)) => {
            items.iter().any(|item| item == expected) || Some(expected) == value
        }
        Some(actual) => actual == expected,
        None => matches!(expected, Bson::Null),
    }
}

fn matches_operators(value: Option<&Bson>, ops: &Document) -> StoreResult<bool> {
    for (op, arg) in ops {
        let matched = match op.as_str() {
            "$in" => {
                let Bson::Array(candidates) = arg else {
                    return Err(StoreError::Execution("$in needs an array".to_string()));
                };
                candidates.iter().any(|candidate| equals(value, candidate))
            }
            "$regex" => {
                let (pattern, inline_options) = match arg {
                    Bson::String(pattern) => (pattern.as_str(), ""),
                    Bson::RegularExpression(regex) => {
                        (regex.pattern.as_str(), regex.options.as_str())
                    }
                    other => {
                        return Err(StoreError::Execution(format!(
                            "$regex needs a string, got {other}"
                        )))
                    }
                };
                let options = ops.get_str("$options").unwrap_or(inline_options);
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(options.contains('i'))
                    .build()
                    .map_err(|e| StoreError::Execution(e.to_string()))?;

                match value {
                    Some(Bson::String(s)) => regex.is_match(s),
                    Some(Bson::Array(items)) => items
                        .iter()
                        .any(|item| matches!(item, Bson::String(s) if regex.is_match(s))),
                    _ => false,
                }
            }
            "$options" => true,
            other => {
                return Err(StoreError::Execution(format!(
                    "unsupported query operator {other}"
                )))
            }
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Inclusion projection; `_id` is always kept.
fn project(document: &Document, projection: &Document) -> Document {
    let mut projected = Document::new();
    for (key, value) in document {
        let included = key == "_id"
            || projection
                .get(key)
                .map(|flag| !matches!(flag, Bson::Int32(0) | Bson::Int64(0) | Bson::Boolean(false)))
                .unwrap_or(false);
        if included {
            projected.insert(key.clone(), value.clone());
        }
    }
    projected
}
