//! Static field-constraint tables checked at the API boundary.
//!
//! # Responsibility
//! - Describe each entity's writable fields (kind, required, nullable, default).
//! - Validate and normalize untyped JSON bodies before they become typed
//!   insert/patch shapes.
//!
//! # Invariants
//! - Validation collects every issue instead of stopping at the first.
//! - Unknown and store-managed fields (`id`, `createdAt`, ...) are stripped.
//! - Insert mode fills declared defaults; patch mode never does.
//! - The record store never calls into this module.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod tables;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid url regex"));

/// Value domain of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String whose trimmed length is at least `min_len` characters.
    Text { min_len: usize },
    /// Lowercase ASCII words joined by single hyphens.
    Slug,
    Email,
    /// Absolute `http`/`https` URL.
    Url,
    Integer { min: i64, max: i64 },
    Boolean,
    /// RFC 3339 instant or `YYYY-MM-DD` date (midnight UTC).
    Timestamp,
    /// One of a fixed set of string values.
    Choice(&'static [&'static str]),
    /// List of strings, trimmed with blanks and duplicates removed.
    TextList,
    /// Any JSON value, stored verbatim.
    Json,
}

/// Default filled in on insert when a field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Integer(i64),
    Boolean(bool),
    EmptyList,
}

impl FieldDefault {
    fn to_value(self) -> Value {
        match self {
            Self::Text(value) => Value::String(value.to_string()),
            Self::Integer(value) => Value::from(value),
            Self::Boolean(value) => Value::Bool(value),
            Self::EmptyList => Value::Array(Vec::new()),
        }
    }
}

/// Constraint row for one writable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire (camelCase) field name.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present and non-null on insert.
    pub required: bool,
    /// Accepts explicit `null`.
    pub nullable: bool,
    pub default: Option<FieldDefault>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            default: None,
        }
    }

    /// Optional field that also accepts explicit `null`.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
            default: None,
        }
    }

    /// Optional, non-nullable field filled with `default` on insert.
    pub const fn defaulted(name: &'static str, kind: FieldKind, default: FieldDefault) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            default: Some(default),
        }
    }
}

/// Constraint table for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Full create payload.
    Insert,
    /// Partial update payload; every field is optional.
    Patch,
}

/// Machine-readable issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    InvalidType,
    InvalidEnumValue,
    InvalidString,
    InvalidDate,
    TooSmall,
    TooBig,
    NotUnique,
}

/// One validation failure, addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Field path from the body root; empty for whole-body issues.
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message: message.into(),
        }
    }
}

/// Non-empty list of validation issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(pub Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn single(issue: ValidationIssue) -> Self {
        Self(vec![issue])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn has_code_at(&self, code: IssueCode, field: &str) -> bool {
        self.0
            .iter()
            .any(|issue| issue.code == code && issue.path.first().map(String::as_str) == Some(field))
    }
}

impl Display for ValidationIssues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|issue| {
                if issue.path.is_empty() {
                    issue.message.clone()
                } else {
                    format!("{}: {}", issue.path.join("."), issue.message)
                }
            })
            .collect();
        write!(f, "validation failed: {}", rendered.join("; "))
    }
}

impl Error for ValidationIssues {}

/// Validates `body` against `schema` and returns the normalized object.
///
/// # Errors
/// - Returns every issue found when `body` is not an object or any field
///   violates its constraint row.
pub fn validate(
    schema: &EntitySchema,
    body: &Value,
    mode: ValidationMode,
) -> Result<Map<String, Value>, ValidationIssues> {
    let Some(object) = body.as_object() else {
        return Err(ValidationIssues::single(ValidationIssue::new(
            IssueCode::InvalidType,
            &[],
            format!("expected object, received {}", type_name(body)),
        )));
    };

    let mut normalized = Map::new();
    let mut issues = Vec::new();

    for field in schema.fields {
        match object.get(field.name) {
            None => {
                if mode == ValidationMode::Insert {
                    if field.required {
                        issues.push(ValidationIssue::new(
                            IssueCode::Required,
                            &[field.name],
                            "required",
                        ));
                    } else if let Some(default) = field.default {
                        normalized.insert(field.name.to_string(), default.to_value());
                    }
                }
            }
            Some(Value::Null) => {
                if field.nullable {
                    normalized.insert(field.name.to_string(), Value::Null);
                } else if mode == ValidationMode::Insert && field.required {
                    issues.push(ValidationIssue::new(
                        IssueCode::Required,
                        &[field.name],
                        "required",
                    ));
                } else {
                    issues.push(ValidationIssue::new(
                        IssueCode::InvalidType,
                        &[field.name],
                        format!("expected {}, received null", kind_name(field.kind)),
                    ));
                }
            }
            Some(value) => match check_value(field, value) {
                Ok(value) => {
                    normalized.insert(field.name.to_string(), value);
                }
                Err(issue) => issues.push(issue),
            },
        }
    }

    if issues.is_empty() {
        Ok(normalized)
    } else {
        Err(ValidationIssues(issues))
    }
}

/// Validates `body` as a full insert payload and decodes it into `T`.
pub fn parse_insert<T: DeserializeOwned>(
    schema: &EntitySchema,
    body: &Value,
) -> Result<T, ValidationIssues> {
    decode(validate(schema, body, ValidationMode::Insert)?)
}

/// Validates `body` as a partial update payload and decodes it into `T`.
pub fn parse_patch<T: DeserializeOwned>(
    schema: &EntitySchema,
    body: &Value,
) -> Result<T, ValidationIssues> {
    decode(validate(schema, body, ValidationMode::Patch)?)
}

fn decode<T: DeserializeOwned>(normalized: Map<String, Value>) -> Result<T, ValidationIssues> {
    serde_json::from_value(Value::Object(normalized)).map_err(|err| {
        ValidationIssues::single(ValidationIssue::new(
            IssueCode::InvalidType,
            &[],
            err.to_string(),
        ))
    })
}

fn check_value(field: &FieldSpec, value: &Value) -> Result<Value, ValidationIssue> {
    let path = [field.name];
    let type_issue = || {
        ValidationIssue::new(
            IssueCode::InvalidType,
            &path,
            format!(
                "expected {}, received {}",
                kind_name(field.kind),
                type_name(value)
            ),
        )
    };

    match field.kind {
        FieldKind::Text { min_len } => {
            let text = value.as_str().ok_or_else(type_issue)?;
            if text.trim().chars().count() < min_len {
                return Err(ValidationIssue::new(
                    IssueCode::TooSmall,
                    &path,
                    format!("must contain at least {min_len} character(s)"),
                ));
            }
            Ok(value.clone())
        }
        FieldKind::Slug => check_pattern(value, &SLUG_RE, &path, "invalid slug").map_err(
            |issue| issue.unwrap_or_else(type_issue),
        ),
        FieldKind::Email => check_pattern(value, &EMAIL_RE, &path, "invalid email").map_err(
            |issue| issue.unwrap_or_else(type_issue),
        ),
        FieldKind::Url => check_pattern(value, &URL_RE, &path, "invalid url").map_err(|issue| {
            issue.unwrap_or_else(type_issue)
        }),
        FieldKind::Integer { min, max } => {
            let number = value.as_i64().ok_or_else(type_issue)?;
            if number < min {
                return Err(ValidationIssue::new(
                    IssueCode::TooSmall,
                    &path,
                    format!("must be greater than or equal to {min}"),
                ));
            }
            if number > max {
                return Err(ValidationIssue::new(
                    IssueCode::TooBig,
                    &path,
                    format!("must be less than or equal to {max}"),
                ));
            }
            Ok(Value::from(number))
        }
        FieldKind::Boolean => {
            if value.is_boolean() {
                Ok(value.clone())
            } else {
                Err(type_issue())
            }
        }
        FieldKind::Timestamp => {
            let text = value.as_str().ok_or_else(type_issue)?;
            parse_timestamp(text)
                .map(|instant| {
                    Value::String(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
                })
                .ok_or_else(|| {
                    ValidationIssue::new(
                        IssueCode::InvalidDate,
                        &path,
                        "expected RFC 3339 timestamp or YYYY-MM-DD date",
                    )
                })
        }
        FieldKind::Choice(options) => {
            let text = value.as_str().ok_or_else(type_issue)?;
            if options.contains(&text) {
                Ok(value.clone())
            } else {
                Err(ValidationIssue::new(
                    IssueCode::InvalidEnumValue,
                    &path,
                    format!(
                        "invalid enum value; expected one of {}, received `{text}`",
                        options.join("|")
                    ),
                ))
            }
        }
        FieldKind::TextList => {
            let items = value.as_array().ok_or_else(type_issue)?;
            let mut normalized: Vec<String> = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let Some(text) = item.as_str() else {
                    let position = index.to_string();
                    return Err(ValidationIssue::new(
                        IssueCode::InvalidType,
                        &[field.name, position.as_str()],
                        format!("expected string, received {}", type_name(item)),
                    ));
                };
                let trimmed = text.trim();
                if !trimmed.is_empty() && !normalized.iter().any(|seen| seen == trimmed) {
                    normalized.push(trimmed.to_string());
                }
            }
            Ok(Value::from(normalized))
        }
        FieldKind::Json => Ok(value.clone()),
    }
}

/// `Err(None)` means the value was not a string at all.
fn check_pattern(
    value: &Value,
    pattern: &Regex,
    path: &[&str],
    message: &str,
) -> Result<Value, Option<ValidationIssue>> {
    let text = value.as_str().ok_or(None)?;
    if pattern.is_match(text) {
        Ok(value.clone())
    } else {
        Err(Some(ValidationIssue::new(
            IssueCode::InvalidString,
            path,
            message,
        )))
    }
}

/// Parses an RFC 3339 instant, or a bare date as midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text { .. }
        | FieldKind::Slug
        | FieldKind::Email
        | FieldKind::Url
        | FieldKind::Choice(_) => "string",
        FieldKind::Integer { .. } => "integer",
        FieldKind::Boolean => "boolean",
        FieldKind::Timestamp => "date string",
        FieldKind::TextList => "array of strings",
        FieldKind::Json => "json",
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;

    #[test]
    fn parse_timestamp_accepts_rfc3339_and_plain_dates() {
        let full = parse_timestamp("2024-12-05T10:30:00+02:00").expect("rfc3339 should parse");
        assert_eq!(full.to_rfc3339(), "2024-12-05T08:30:00+00:00");

        let date = parse_timestamp("2024-01-01").expect("date should parse");
        assert_eq!(date.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        assert!(parse_timestamp("01/01/2024").is_none());
    }
}
