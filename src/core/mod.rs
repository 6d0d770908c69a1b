//! core
//!
//! Core domain types and configuration for verstamp.
//!
//! # Modules
//!
//! - [`types`] - RepositoryKind and CommitMetadata
//! - [`config`] - Configuration schema, loading, and resolution

pub mod config;
pub mod types;
