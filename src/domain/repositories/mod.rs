//! Repository trait definitions for the domain layer.
//!
//! The traits here abstract data access behind narrow interfaces so that
//! services can be exercised against mocks or in-memory fakes. Concrete
//! implementations live in the infrastructure layer.

mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
