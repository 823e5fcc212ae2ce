//! Pure validation for submission payloads.
//!
//! Given an untyped payload, return either a typed, constraint-satisfying
//! value or the full list of per-field violations. Validation never raises
//! and performs no I/O; every failure is reported as data.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::address::NewAddress;
use super::user::NewUser;

/// Raw user payload as submitted by clients.
///
/// Fields are optional so that missing and empty values both surface as
/// violations instead of deserialisation failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Raw address payload as submitted by clients.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AddressPayload {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    #[schema(example = "name")]
    pub field: String,
    #[schema(example = "Name is required")]
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static ZIP_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("validation regex failed to compile: {error}"))
    })
}

fn name_regex() -> &'static Regex {
    compiled(&NAME_RE, r"^[A-Za-z\s]+$")
}

fn email_regex() -> &'static Regex {
    // Shape check only: something before and after an `@`, with a dot in
    // the domain part. Full RFC address parsing is out of scope.
    compiled(&EMAIL_RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn phone_regex() -> &'static Regex {
    compiled(&PHONE_RE, r"^\d{10}$")
}

fn zip_regex() -> &'static Regex {
    compiled(&ZIP_RE, r"^\d{6}$")
}

/// Check one field: a required-presence rule and an optional format rule.
///
/// Both rules are reported when the value is present but malformed only if
/// they fail independently; an absent or empty value reports the required
/// message alone.
fn check_field(
    violations: &mut Vec<FieldViolation>,
    value: Option<&str>,
    field: &'static str,
    required_message: &'static str,
    format: Option<(&Regex, &'static str)>,
) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        violations.push(FieldViolation::new(field, required_message));
        return;
    };
    if let Some((regex, format_message)) = format
        && !regex.is_match(value)
    {
        violations.push(FieldViolation::new(field, format_message));
    }
}

/// Validate a user payload, collecting every violation.
pub fn validate_user(payload: &UserPayload) -> Result<NewUser, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_field(
        &mut violations,
        payload.name.as_deref(),
        "name",
        "Name is required",
        Some((name_regex(), "Name must contain only alphabets and spaces")),
    );
    check_field(
        &mut violations,
        payload.email.as_deref(),
        "email",
        "Email is required",
        Some((email_regex(), "Invalid Email")),
    );
    check_field(
        &mut violations,
        payload.phone.as_deref(),
        "phone",
        "Phone number is required",
        Some((phone_regex(), "Phone number must be 10 digits")),
    );

    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(NewUser {
        name: payload.name.clone().unwrap_or_default(),
        email: payload.email.clone().unwrap_or_default(),
        phone: payload.phone.clone().unwrap_or_default(),
    })
}

/// Validate an address payload, collecting every violation.
///
/// Line two is unconstrained and optional.
pub fn validate_address(payload: &AddressPayload) -> Result<NewAddress, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_field(
        &mut violations,
        payload.address1.as_deref(),
        "address1",
        "Address 1 is required",
        None,
    );
    check_field(
        &mut violations,
        payload.city.as_deref(),
        "city",
        "City is required",
        None,
    );
    check_field(
        &mut violations,
        payload.state.as_deref(),
        "state",
        "State is required",
        None,
    );
    check_field(
        &mut violations,
        payload.zip.as_deref(),
        "zip",
        "ZIP code is required",
        Some((zip_regex(), "ZIP code must be 6 digits")),
    );

    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(NewAddress {
        address1: payload.address1.clone().unwrap_or_default(),
        address2: payload.address2.clone(),
        city: payload.city.clone().unwrap_or_default(),
        state: payload.state.clone().unwrap_or_default(),
        zip: payload.zip.clone().unwrap_or_default(),
    })
}
