//! Homework records as reported by the review API.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::Watermark;

/// Review status of a homework submission.
///
/// The server may introduce new codes at any time, so anything outside the
/// known set is kept verbatim in [`StatusCode::Other`] instead of failing
/// deserialization. Scalar non-string codes (`3`, `true`) land there too, so a
/// single odd record is reported as that record's problem rather than as an
/// unreadable response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum StatusCode {
    /// A reviewer picked the work up.
    Reviewing,
    /// The review found problems.
    Rejected,
    /// The work was accepted.
    Approved,
    /// A code this client does not know about.
    Other(String),
}

impl StatusCode {
    /// Wire representation of the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
            Self::Approved => "approved",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for StatusCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "reviewing" => Self::Reviewing,
            "rejected" => Self::Rejected,
            "approved" => Self::Approved,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for StatusCode {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<StatusCode> for String {
    fn from(code: StatusCode) -> Self {
        code.as_str().to_string()
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = StatusCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a status code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StatusCode, E> {
                Ok(StatusCode::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<StatusCode, E> {
                Ok(StatusCode::from(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<StatusCode, E> {
                Ok(StatusCode::Other(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<StatusCode, E> {
                Ok(StatusCode::Other(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<StatusCode, E> {
                Ok(StatusCode::Other(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<StatusCode, E> {
                Ok(StatusCode::Other(v.to_string()))
            }
        }

        deserializer.deserialize_any(CodeVisitor)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One homework entry from the review API.
///
/// Both fields are optional on the wire; a record missing either one is
/// rejected by the [`MessageFormatter`](super::MessageFormatter), not by
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HomeworkRecord {
    #[serde(rename = "homework_name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<StatusCode>,
}

impl HomeworkRecord {
    /// Create a fully populated record.
    pub fn new(name: impl Into<String>, status: impl Into<StatusCode>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }
}

/// The outcome of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Updated homeworks, most recent first.
    pub homeworks: Vec<HomeworkRecord>,
    /// Watermark to query from on the next cycle.
    pub watermark: Watermark,
}

impl FetchResult {
    /// The most recently updated homework, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&HomeworkRecord> {
        self.homeworks.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes_deserialize_to_variants() {
        let record: HomeworkRecord =
            serde_json::from_str(r#"{"homework_name": "proj1", "status": "rejected"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("proj1"));
        assert_eq!(record.status, Some(StatusCode::Rejected));
    }

    #[test]
    fn unknown_status_code_is_preserved() {
        let record: HomeworkRecord =
            serde_json::from_str(r#"{"homework_name": "proj1", "status": "unknown_future_code"}"#)
                .unwrap();
        assert_eq!(
            record.status,
            Some(StatusCode::Other("unknown_future_code".into()))
        );
    }

    #[test]
    fn numeric_status_code_is_kept_as_other() {
        let record: HomeworkRecord =
            serde_json::from_str(r#"{"homework_name": "proj1", "status": 3}"#).unwrap();
        assert_eq!(record.status, Some(StatusCode::Other("3".into())));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let record: HomeworkRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record, HomeworkRecord::default());
    }

    #[test]
    fn null_fields_deserialize_as_none() {
        let record: HomeworkRecord =
            serde_json::from_str(r#"{"homework_name": null, "status": null}"#).unwrap();
        assert!(record.name.is_none());
        assert!(record.status.is_none());
    }

    #[test]
    fn latest_is_first_entry() {
        let result = FetchResult {
            homeworks: vec![
                HomeworkRecord::new("newest", "approved"),
                HomeworkRecord::new("older", "reviewing"),
            ],
            watermark: Watermark::new(10),
        };
        assert_eq!(result.latest().and_then(|h| h.name.as_deref()), Some("newest"));
    }
}
