//! Shape validation helpers for inbound HTTP bodies and path segments.
//!
//! Every failure becomes `InvalidRequest` with `details.field` and
//! `details.code`, so clients can react without parsing messages.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::{
    Error, INVALID_ID, MessageId, MessageValidationError, UserValidationError,
};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    EmptyField,
    InvalidEmail,
    NotPositive,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::EmptyField => "empty_field",
            Self::InvalidEmail => "invalid_email",
            Self::NotPositive => "not_positive",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const CONTENT: FieldName = FieldName::new("content");
pub(crate) const USER_ID: FieldName = FieldName::new("userId");

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::EmptyField,
        format!("{name} must not be empty"),
    )
}

pub(crate) fn not_positive_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::NotPositive,
        format!("{name} must be a positive integer"),
    )
}

/// Unwrap a required field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyName => empty_field_error(NAME),
        UserValidationError::EmptyEmail => empty_field_error(EMAIL),
        UserValidationError::InvalidEmail => field_error(
            EMAIL,
            ValidationCode::InvalidEmail,
            "email must be a valid email address".to_owned(),
        ),
    }
}

pub(crate) fn map_message_validation_error(err: MessageValidationError) -> Error {
    match err {
        MessageValidationError::EmptyContent => empty_field_error(CONTENT),
    }
}

fn malformed_body_error(err: &serde_json::Error) -> Error {
    Error::invalid_request(format!("malformed request body: {err}")).with_details(json!({
        "code": ValidationCode::MalformedBody.as_str(),
    }))
}

/// Parse a raw body into JSON. An empty body reads as `{}`.
pub(crate) fn parse_json_value(body: &[u8]) -> Result<Value, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|err| malformed_body_error(&err))
}

/// Deserialise an already parsed body into a DTO.
///
/// DTOs reject unknown fields, so stray properties fail here.
pub(crate) fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|err| malformed_body_error(&err))
}

/// Parse and deserialise a raw body into a DTO.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    parse_json_value(body).and_then(decode_value)
}

/// Parse a message path id. Unusable ids read as not found, matching the
/// Existence Gate's treatment of user ids.
pub(crate) fn parse_message_id(raw: &str) -> Result<MessageId, Error> {
    MessageId::parse(raw).map_err(|_| Error::not_found(INVALID_ID))
}
