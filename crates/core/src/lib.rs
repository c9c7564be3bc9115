//! Core domain types and shared logic for Roster.
//!
//! This crate defines the pieces every other crate agrees on:
//! - The `Record` row shape and its normalization rules
//! - Field validation for create and update requests
//! - Configuration types loaded by the server binary

pub mod config;
pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::{Field, Record, normalize_lookup_name};
