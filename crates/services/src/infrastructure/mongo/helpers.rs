//! Document deserialization helpers.
//!
//! Stored documents are not schema-checked, so integer fields may come back
//! as 32-bit, 64-bit or floating-point numbers depending on who wrote them.
//! Every integer read goes through [`coerce_i64`]; a value that cannot be
//! coerced fails the whole record instead of defaulting to zero.

use std::future::IntoFuture;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson::{self, oid::ObjectId, Bson, Document};

use crate::infrastructure::ports::RepoError;

/// Limit for single-record reads and writes.
pub const OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Limit for list and count queries.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Run a driver call under a deadline, mapping both driver errors and
/// elapsed deadlines to `RepoError::Database`.
pub async fn with_timeout<T, F>(
    operation: &'static str,
    limit: Duration,
    op: F,
) -> Result<T, RepoError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(result) => result.map_err(|e| RepoError::database(operation, e)),
        Err(_) => Err(RepoError::database(
            operation,
            format!("timed out after {}s", limit.as_secs()),
        )),
    }
}

/// Parse a hex object id; `None` for anything malformed.
pub fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// Normalize an integer-like value to `i64`.
///
/// Floating-point values are accepted only when they are finite, integral and
/// inside the `i64` range.
pub fn coerce_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v)
            if v.is_finite()
                && v.fract() == 0.0
                && *v >= i64::MIN as f64
                && *v < i64::MAX as f64 =>
        {
            Some(*v as i64)
        }
        _ => None,
    }
}

pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub fn from_bson_datetime(value: bson::DateTime) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(value.timestamp_millis()).single()
}

/// Extension trait for BSON documents to simplify strict field extraction.
pub trait DocumentExt {
    /// `_id` as a string: hex for object ids, verbatim for strings.
    fn get_id_string(&self) -> Result<String, RepoError>;

    /// Get a required string field (fail-fast).
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError>;

    /// Get an optional string field; absent or null is `None`, any other
    /// non-string value fails.
    fn get_optional_string(&self, field: &str) -> Result<Option<String>, RepoError>;

    /// Get a required integer field through [`coerce_i64`] (fail-fast).
    fn get_i64_strict(&self, field: &str) -> Result<i64, RepoError>;

    /// Get a required timestamp field (fail-fast).
    fn get_datetime_strict(&self, field: &str) -> Result<DateTime<Utc>, RepoError>;

    /// Get a required array whose elements are all sub-documents (fail-fast).
    fn get_documents_strict(&self, field: &str) -> Result<Vec<&Document>, RepoError>;
}

fn missing(field: &str) -> RepoError {
    RepoError::serialization(format!("Missing required field '{}'", field))
}

fn wrong_type(field: &str, expected: &str, value: &Bson) -> RepoError {
    RepoError::serialization(format!(
        "Field '{}' is not {} (value: {})",
        field, expected, value
    ))
}

impl DocumentExt for Document {
    fn get_id_string(&self) -> Result<String, RepoError> {
        match self.get("_id") {
            Some(Bson::ObjectId(oid)) => Ok(oid.to_hex()),
            Some(Bson::String(s)) => Ok(s.clone()),
            Some(other) => Err(wrong_type("_id", "an object id", other)),
            None => Err(missing("_id")),
        }
    }

    fn get_string_strict(&self, field: &str) -> Result<String, RepoError> {
        match self.get(field) {
            Some(Bson::String(s)) => Ok(s.clone()),
            Some(other) => Err(wrong_type(field, "a string", other)),
            None => Err(missing(field)),
        }
    }

    fn get_optional_string(&self, field: &str) -> Result<Option<String>, RepoError> {
        match self.get(field) {
            None | Some(Bson::Null) => Ok(None),
            Some(Bson::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(wrong_type(field, "a string", other)),
        }
    }

    fn get_i64_strict(&self, field: &str) -> Result<i64, RepoError> {
        let value = self.get(field).ok_or_else(|| missing(field))?;
        coerce_i64(value).ok_or_else(|| wrong_type(field, "an integer", value))
    }

    fn get_datetime_strict(&self, field: &str) -> Result<DateTime<Utc>, RepoError> {
        match self.get(field) {
            Some(Bson::DateTime(dt)) => {
                from_bson_datetime(*dt).ok_or_else(|| wrong_type(field, "a timestamp", &Bson::DateTime(*dt)))
            }
            Some(Bson::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    RepoError::serialization(format!(
                        "Invalid datetime in field '{}': {} (value: '{}')",
                        field, e, s
                    ))
                }),
            Some(other) => Err(wrong_type(field, "a timestamp", other)),
            None => Err(missing(field)),
        }
    }

    fn get_documents_strict(&self, field: &str) -> Result<Vec<&Document>, RepoError> {
        match self.get(field) {
            Some(Bson::Array(values)) => values
                .iter()
                .map(|value| match value {
                    Bson::Document(doc) => Ok(doc),
                    other => Err(wrong_type(field, "an array of documents", other)),
                })
                .collect(),
            Some(other) => Err(wrong_type(field, "an array", other)),
            None => Err(missing(field)),
        }
    }
}
