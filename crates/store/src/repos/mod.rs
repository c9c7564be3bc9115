//! Repository traits for store operations.

pub mod records;

pub use records::RecordRepo;
