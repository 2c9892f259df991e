//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, web};
use pagination::PageNumber;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Error, QuestionValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    MissingField,
    InvalidInteger,
    BlankText,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidInteger => "invalid_integer",
            Self::BlankText => "blank_text",
        }
    }
}

/// How a request with invalid input is rejected.
///
/// Quiz selection answers `400`; question creation answers `422`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    BadRequest,
    Unprocessable,
}

impl Rejection {
    fn error(self, message: String) -> Error {
        match self {
            Self::BadRequest => Error::invalid_request(message),
            Self::Unprocessable => Error::unprocessable(message),
        }
    }
}

/// Newtype wrapper for HTTP field names.
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

/// Integer field that may arrive as a JSON number or a numeric string.
///
/// Browser form controls post select values as strings, so `"3"` and `3`
/// are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntegerField {
    Number(i64),
    Text(String),
}

impl IntegerField {
    fn raw(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

pub(crate) fn missing_field_error(field: FieldName, rejection: Rejection) -> Error {
    let field = field.as_str();
    rejection
        .error(format!("missing required field: {field}"))
        .with_details(json!({
            "field": field,
            "code": ValidationCode::MissingField.as_str(),
        }))
}

fn invalid_integer_error(field: FieldName, value: &str, rejection: Rejection) -> Error {
    let field = field.as_str();
    rejection
        .error(format!("{field} must be an integer"))
        .with_details(json!({
            "field": field,
            "value": value,
            "code": ValidationCode::InvalidInteger.as_str(),
        }))
}

/// Map a draft validation failure onto a `422` with field context.
pub(crate) fn question_validation_error(err: QuestionValidationError) -> Error {
    Error::unprocessable(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": ValidationCode::BlankText.as_str(),
    }))
}

/// Require a field to be present.
pub(crate) fn require<T>(value: Option<T>, field: FieldName, rejection: Rejection) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field, rejection))
}

/// Parse an [`IntegerField`] into any integer type that fits.
pub(crate) fn parse_integer<T>(
    value: IntegerField,
    field: FieldName,
    rejection: Rejection,
) -> Result<T, Error>
where
    T: TryFrom<i64>,
{
    let parsed = match &value {
        IntegerField::Number(number) => Some(*number),
        IntegerField::Text(text) => text.trim().parse::<i64>().ok(),
    };
    parsed
        .and_then(|number| T::try_from(number).ok())
        .ok_or_else(|| invalid_integer_error(field, &value.raw(), rejection))
}

/// Read the `page` query parameter.
///
/// Absent, malformed or non-positive values fall back to the first page;
/// this never fails the request.
pub(crate) fn page_param(req: &HttpRequest) -> PageNumber {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let raw = pairs
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());
    PageNumber::from_query(raw)
}
