//! Controller-specific data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Addressable fields of the lead draft
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// Parse a field name as it appears on the input surface
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(FieldName::Name),
            "email" => Some(FieldName::Email),
            "message" => Some(FieldName::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// In-progress, not-yet-submitted lead form values
///
/// Created empty, mutated one field at a time, cleared only after a
/// confirmed successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl LeadDraft {
    /// Replace exactly one field, leaving the others untouched
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        match field {
            FieldName::Name => self.name = value.into(),
            FieldName::Email => self.email = value.into(),
            FieldName::Message => self.message = value.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    /// Whether the input surface would allow submission
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Reset to all-empty after a confirmed successful submission
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lifecycle of a submission attempt
///
/// Only Success and Error carry a user-visible message; Idle and Pending
/// render as nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Policy for a submit arriving while another attempt is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResubmitPolicy {
    /// Drop the new attempt without a network call
    #[default]
    BlockWhilePending,
    /// Let every call through; observed behavior of the original pages
    AllowConcurrent,
}
