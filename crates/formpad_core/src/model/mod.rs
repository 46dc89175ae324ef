//! Domain model for form records and captured signatures.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Own every field-level validation rule in one place.
//!
//! # Invariants
//! - A `FormRecord` is either fully valid or its update is rejected whole;
//!   no partially mutated record is ever observable.
//! - The sensitive national ID lives only on the in-memory record; it has
//!   no serialized representation anywhere in this crate except the codec's
//!   documented redaction default.

pub mod form;
pub mod point;
