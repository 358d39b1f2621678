//! Core domain entities representing the business data model.

mod mapping;

pub use mapping::{Mapping, NewMapping};
