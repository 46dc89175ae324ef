//! Form record domain model.
//!
//! # Responsibility
//! - Define the canonical record holding identity, contact and signature
//!   data for one form submission.
//! - Enforce every field constraint through one atomic update path.
//!
//! # Invariants
//! - `try_update` mutates either every field or none; a validation failure
//!   leaves the stored state untouched.
//! - The stored middle initial is always exactly one character, even when
//!   the raw input was longer.
//! - `national_id` is kept in memory only and is never serialized by this
//!   crate; the codec projects records through a DTO without that field.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::point::Signature;

static NATIONAL_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("valid national id regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

const PLACEHOLDER_FIRST_NAME: &str = "fn";
const PLACEHOLDER_MIDDLE_INITIAL: char = 'm';
const PLACEHOLDER_LAST_NAME: &str = "ln";
const PLACEHOLDER_DISPLAY_NAME: &str = "dn";
const PLACEHOLDER_NATIONAL_ID: &str = "111111111";
const PLACEHOLDER_PHONE: &str = "1234567890";
const PLACEHOLDER_EMAIL: &str = "test@ou.edu";
const PLACEHOLDER_ADDRESS: &str = "111 first st";

pub type FormValidationResult<T> = Result<T, FormValidationError>;

/// Field-level validation error, one variant per violated constraint.
///
/// `Display` messages are written to be surfaced to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidationError {
    EmptyFirstName,
    EmptyMiddleInitial,
    EmptyLastName,
    EmptyDisplayName,
    InvalidNationalId,
    InvalidPhone,
    InvalidEmail,
    EmptyAddress,
}

impl Display for FormValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyMiddleInitial => write!(f, "middle initial must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::InvalidNationalId => write!(f, "national ID must be exactly 9 digits"),
            Self::InvalidPhone => write!(f, "phone number must be exactly 10 digits"),
            Self::InvalidEmail => write!(
                f,
                "email must contain one `@` with non-empty local and dotted domain parts"
            ),
            Self::EmptyAddress => write!(f, "street address must not be empty"),
        }
    }
}

impl Error for FormValidationError {}

/// Raw field input for one atomic record update.
///
/// Carries widget-level strings exactly as the presentation layer captured
/// them; all normalization and validation happens inside `try_update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormUpdate {
    pub first_name: String,
    /// Raw text field content; only the first character is stored.
    pub middle_initial: String,
    pub last_name: String,
    pub display_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub signature: Signature,
}

impl FormUpdate {
    /// Builds an update pre-filled from an existing record.
    ///
    /// Used by callers that edit a subset of fields and resubmit the rest.
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            middle_initial: record.middle_initial.to_string(),
            last_name: record.last_name.clone(),
            display_name: record.display_name.clone(),
            national_id: record.national_id.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            address: record.address.clone(),
            signature: record.signature.clone(),
        }
    }
}

/// One validated form submission.
///
/// Fields are private; all mutation goes through `try_update` so a record
/// can never hold a half-applied state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    first_name: String,
    middle_initial: char,
    last_name: String,
    display_name: String,
    national_id: String,
    phone: String,
    email: String,
    address: String,
    signature: Signature,
}

impl FormRecord {
    /// Creates a record in the fixed placeholder state.
    ///
    /// Used for the initial record, New Form and Reset.
    pub fn placeholder() -> Self {
        Self {
            first_name: PLACEHOLDER_FIRST_NAME.to_string(),
            middle_initial: PLACEHOLDER_MIDDLE_INITIAL,
            last_name: PLACEHOLDER_LAST_NAME.to_string(),
            display_name: PLACEHOLDER_DISPLAY_NAME.to_string(),
            national_id: PLACEHOLDER_NATIONAL_ID.to_string(),
            phone: PLACEHOLDER_PHONE.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
            address: PLACEHOLDER_ADDRESS.to_string(),
            signature: Signature::new(),
        }
    }

    /// Validates every raw field and overwrites the record atomically.
    ///
    /// # Contract
    /// - Any failing field returns its error and leaves the record exactly
    ///   as it was before the call.
    /// - On success all fields are overwritten together.
    /// - `middle_initial` input longer than one character is accepted; only
    ///   its first character is stored.
    ///
    /// # Errors
    /// Returns the first violated constraint in field declaration order.
    pub fn try_update(&mut self, update: &FormUpdate) -> FormValidationResult<()> {
        if update.first_name.trim().is_empty() {
            return Err(FormValidationError::EmptyFirstName);
        }
        let middle_initial = update
            .middle_initial
            .chars()
            .next()
            .ok_or(FormValidationError::EmptyMiddleInitial)?;
        if update.last_name.trim().is_empty() {
            return Err(FormValidationError::EmptyLastName);
        }
        if update.display_name.trim().is_empty() {
            return Err(FormValidationError::EmptyDisplayName);
        }
        if !NATIONAL_ID_RE.is_match(&update.national_id) {
            return Err(FormValidationError::InvalidNationalId);
        }
        if !PHONE_RE.is_match(&update.phone) {
            return Err(FormValidationError::InvalidPhone);
        }
        if !is_valid_email(&update.email) {
            return Err(FormValidationError::InvalidEmail);
        }
        if update.address.trim().is_empty() {
            return Err(FormValidationError::EmptyAddress);
        }

        self.first_name = update.first_name.clone();
        self.middle_initial = middle_initial;
        self.last_name = update.last_name.clone();
        self.display_name = update.display_name.clone();
        self.national_id = update.national_id.clone();
        self.phone = update.phone.clone();
        self.email = update.email.clone();
        self.address = update.address.clone();
        self.signature = update.signature.clone();
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_initial(&self) -> char {
        self.middle_initial
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The record's human-facing identity and sort key.
    ///
    /// Not required to be globally unique; selection by display name
    /// resolves duplicates to the first match in store order.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::placeholder()
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn email_requires_single_at_and_dotted_domain() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
