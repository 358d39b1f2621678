//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer, currently a single
//! PostgreSQL-backed mapping repository.

pub mod persistence;
