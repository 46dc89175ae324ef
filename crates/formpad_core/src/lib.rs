//! Core domain logic for FormPad.
//! This crate is the single source of truth for form-record invariants.

pub mod codec;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use codec::{
    export_store, import_store, CodecError, CodecResult, EXPORT_FORMAT, EXPORT_VERSION,
    REDACTED_NATIONAL_ID,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::form::{FormRecord, FormUpdate, FormValidationError, FormValidationResult};
pub use model::point::{Point, Signature};
pub use service::form_session::FormSession;
pub use store::{FormStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
