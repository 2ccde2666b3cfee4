//! Contact submission lifecycle status.
//!
//! Stored as TEXT in the `contacts.status` column; the database CHECK
//! constraint and this enum must list the same values.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All valid contact status strings, in lifecycle order.
pub const VALID_CONTACT_STATUSES: &[&str] =
    &["NEW", "IN_PROGRESS", "COMPLETED", "ARCHIVED"];

/// Lifecycle status of a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    New,
    InProgress,
    Completed,
    Archived,
}

impl ContactStatus {
    /// Return the status as its stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Parse a status from its stored string value.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "NEW" => Ok(Self::New),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(CoreError::Validation(format!(
                "Invalid contact status '{s}'. Must be one of: {}",
                VALID_CONTACT_STATUSES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_statuses() {
        for s in VALID_CONTACT_STATUSES {
            let parsed = ContactStatus::from_str(s).unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = ContactStatus::from_str("SPAM").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_lowercase() {
        assert!(ContactStatus::from_str("new").is_err());
    }
}
