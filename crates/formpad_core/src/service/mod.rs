//! Use-case services for core callers.
//!
//! # Responsibility
//! - Provide stable entry points for the presentation layer.
//! - Keep session orchestration out of the model and store layers.

pub mod form_session;
