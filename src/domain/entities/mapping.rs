//! Mapping entity representing a persisted alias → URL pair.

/// A persisted alias → URL mapping.
///
/// `id` is a surrogate key assigned by the store; domain logic never
/// interprets it. `alias` is unique across all mappings, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new mapping. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub alias: String,
    pub url: String,
}
