//! Patient profile accumulated across turns
//!
//! Fields start absent and are only ever overwritten by a new successful
//! extraction of the same field. Nothing clears a field back to absent
//! short of a session reset, which constructs a fresh profile.

use serde::{Deserialize, Serialize};

/// Structured data extracted from the caller so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    name: Option<String>,
    age: Option<u32>,
    issue: Option<String>,
    slot: Option<String>,
}

impl PatientProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the caller's name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the caller's age in years
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Get the presenting complaint
    pub fn issue(&self) -> Option<&str> {
        self.issue.as_deref()
    }

    /// Get the requested appointment slot (normalized free text)
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = Some(age);
    }

    pub fn set_issue(&mut self, issue: impl Into<String>) {
        self.issue = Some(issue.into());
    }

    pub fn set_slot(&mut self, slot: impl Into<String>) {
        self.slot = Some(slot.into());
    }

    /// Get all filled field names
    pub fn filled_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.age.is_some() {
            fields.push("age");
        }
        if self.issue.is_some() {
            fields.push("issue");
        }
        if self.slot.is_some() {
            fields.push("slot");
        }
        fields
    }

    /// Whether every intake field has been captured
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.age.is_some() && self.issue.is_some() && self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = PatientProfile::new();
        assert!(profile.name().is_none());
        assert!(profile.age().is_none());
        assert!(profile.filled_fields().is_empty());
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_fields_accumulate() {
        let mut profile = PatientProfile::new();
        profile.set_name("Rahul Verma");
        profile.set_age(32);

        assert_eq!(profile.name(), Some("Rahul Verma"));
        assert_eq!(profile.age(), Some(32));
        assert_eq!(profile.filled_fields(), vec!["name", "age"]);
        assert!(!profile.is_complete());

        profile.set_issue("bukhar");
        profile.set_slot("kal subah 10 baje");
        assert!(profile.is_complete());
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let mut profile = PatientProfile::new();
        profile.set_slot("Somvaar subah 10 baje");
        profile.set_slot("Mangalvaar shaam 6 baje");
        assert_eq!(profile.slot(), Some("Mangalvaar shaam 6 baje"));
    }
}
