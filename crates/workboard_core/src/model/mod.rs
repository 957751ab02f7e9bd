//! Domain models for the project/task tracker.
//!
//! # Responsibility
//! - Define canonical entity structs and their closed status sets.
//! - Own boundary validation (`validate()`) called by every write path.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID.
//! - Deletion is represented by terminal soft-delete statuses, never by
//!   removing rows.

pub mod project;
pub mod task;
pub mod user;
