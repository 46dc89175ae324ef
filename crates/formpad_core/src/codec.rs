//! Export/import codec for the record store.
//!
//! # Responsibility
//! - Serialize the whole store to a caller-supplied byte stream and
//!   reconstruct it back.
//! - Guarantee the national ID never reaches persisted output.
//!
//! # Invariants
//! - `StoredForm` structurally omits `national_id`; redaction is enforced
//!   by the type system, not by a runtime exclusion list.
//! - Import revalidates every record and rejects foreign, corrupt or empty
//!   input without constructing a store.
//! - A failed import never mutates caller state; the stream is released on
//!   every exit path.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};

use crate::model::form::{FormRecord, FormUpdate, FormValidationError};
use crate::model::point::{Point, Signature};
use crate::store::FormStore;

/// Envelope tag identifying this crate's export artifacts.
pub const EXPORT_FORMAT: &str = "formpad-export";
/// Current envelope version; imports of any other version are rejected.
pub const EXPORT_VERSION: u32 = 1;
/// Substituted for the national ID on import.
///
/// The original value is unrecoverable by design, and the record invariant
/// still requires a 9-digit value after loading.
pub const REDACTED_NATIONAL_ID: &str = "000000000";

pub type CodecResult<T> = Result<T, CodecError>;

/// Codec error separating I/O transport failures from data failures.
#[derive(Debug)]
pub enum CodecError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
    UnrecognizedFormat(String),
    UnsupportedVersion { found: u32, supported: u32 },
    InvalidRecord { index: usize, source: FormValidationError },
    EmptyExport,
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "stream I/O failure: {err}"),
            Self::Malformed(err) => write!(f, "malformed export data: {err}"),
            Self::UnrecognizedFormat(found) => {
                write!(f, "unrecognized export format tag `{found}`")
            }
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "unsupported export version {found}; this build supports {supported}"
            ),
            Self::InvalidRecord { index, source } => {
                write!(f, "invalid stored record at index {index}: {source}")
            }
            Self::EmptyExport => write!(f, "export contains no records"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::UnrecognizedFormat(_) => None,
            Self::UnsupportedVersion { .. } => None,
            Self::InvalidRecord { source, .. } => Some(source),
            Self::EmptyExport => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ExportEnvelope {
    format: String,
    version: u32,
    forms: Vec<StoredForm>,
}

/// Persisted projection of one record.
///
/// Deliberately has no `national_id` field.
#[derive(Debug, Serialize, Deserialize)]
struct StoredForm {
    first_name: String,
    middle_initial: char,
    last_name: String,
    display_name: String,
    phone: String,
    email: String,
    address: String,
    signature: Vec<Point>,
}

impl StoredForm {
    fn from_record(record: &FormRecord) -> Self {
        Self {
            first_name: record.first_name().to_string(),
            middle_initial: record.middle_initial(),
            last_name: record.last_name().to_string(),
            display_name: record.display_name().to_string(),
            phone: record.phone().to_string(),
            email: record.email().to_string(),
            address: record.address().to_string(),
            signature: record.signature().points().to_vec(),
        }
    }

    fn into_update(self) -> FormUpdate {
        FormUpdate {
            first_name: self.first_name,
            middle_initial: self.middle_initial.to_string(),
            last_name: self.last_name,
            display_name: self.display_name,
            national_id: REDACTED_NATIONAL_ID.to_string(),
            phone: self.phone,
            email: self.email,
            address: self.address,
            signature: Signature::from_points(self.signature),
        }
    }
}

/// Writes the whole store to `writer` as a versioned JSON envelope.
///
/// # Errors
/// - `CodecError::Io` when the underlying stream fails.
/// - `CodecError::Malformed` when encoding fails (should not happen for
///   in-memory records).
pub fn export_store<W: Write>(store: &FormStore, mut writer: W) -> CodecResult<()> {
    let envelope = ExportEnvelope {
        format: EXPORT_FORMAT.to_string(),
        version: EXPORT_VERSION,
        forms: store.records().iter().map(StoredForm::from_record).collect(),
    };

    serde_json::to_writer(&mut writer, &envelope).map_err(classify_json_error)?;
    writer.flush()?;

    info!(
        "event=export module=codec status=ok records={}",
        store.len()
    );
    Ok(())
}

/// Reads a store back from `reader`.
///
/// The national ID of every record becomes `REDACTED_NATIONAL_ID`; every
/// other field, including empty signatures, round-trips exactly.
///
/// # Errors
/// - `CodecError::Io` when the stream fails mid-read.
/// - `CodecError::Malformed` for non-JSON or structurally wrong input.
/// - `CodecError::UnrecognizedFormat` / `UnsupportedVersion` for foreign
///   or future envelopes.
/// - `CodecError::InvalidRecord` when a stored record fails revalidation.
/// - `CodecError::EmptyExport` when the envelope holds zero records.
pub fn import_store<R: Read>(reader: R) -> CodecResult<FormStore> {
    let envelope: ExportEnvelope =
        serde_json::from_reader(reader).map_err(classify_json_error)?;

    if envelope.format != EXPORT_FORMAT {
        warn!(
            "event=import module=codec status=rejected reason=format_tag"
        );
        return Err(CodecError::UnrecognizedFormat(envelope.format));
    }
    if envelope.version != EXPORT_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: envelope.version,
            supported: EXPORT_VERSION,
        });
    }
    if envelope.forms.is_empty() {
        return Err(CodecError::EmptyExport);
    }

    let mut records = Vec::with_capacity(envelope.forms.len());
    for (index, stored) in envelope.forms.into_iter().enumerate() {
        let update = stored.into_update();
        let mut record = FormRecord::placeholder();
        record
            .try_update(&update)
            .map_err(|source| CodecError::InvalidRecord { index, source })?;
        records.push(record);
    }

    info!(
        "event=import module=codec status=ok records={}",
        records.len()
    );
    Ok(FormStore::from_records(records))
}

fn classify_json_error(err: serde_json::Error) -> CodecError {
    if err.classify() == serde_json::error::Category::Io {
        CodecError::Io(err.into())
    } else {
        CodecError::Malformed(err)
    }
}
