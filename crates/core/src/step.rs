//! Intake step state machine
//!
//! The intake call walks a fixed linear sequence of questions. Exactly one
//! step is active at a time. `Completed` is terminal but not absorbing: the
//! caller can still change their slot without leaving it.

use serde::{Deserialize, Serialize};

/// One stage of the fixed intake sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    /// Ask the caller's name
    #[default]
    AskName,
    /// Ask the caller's age
    AskAge,
    /// Ask the presenting complaint
    AskIssue,
    /// Ask the preferred appointment slot
    AskTime,
    /// All fields captured, booking confirmed
    Completed,
}

impl IntakeStep {
    /// Next step in the linear intake order. `Completed` stays put.
    pub fn next(&self) -> IntakeStep {
        match self {
            IntakeStep::AskName => IntakeStep::AskAge,
            IntakeStep::AskAge => IntakeStep::AskIssue,
            IntakeStep::AskIssue => IntakeStep::AskTime,
            IntakeStep::AskTime => IntakeStep::Completed,
            IntakeStep::Completed => IntakeStep::Completed,
        }
    }

    /// Whether the intake has gathered everything it needs
    pub fn is_completed(&self) -> bool {
        matches!(self, IntakeStep::Completed)
    }
}

impl std::fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeStep::AskName => write!(f, "ask_name"),
            IntakeStep::AskAge => write!(f, "ask_age"),
            IntakeStep::AskIssue => write!(f, "ask_issue"),
            IntakeStep::AskTime => write!(f, "ask_time"),
            IntakeStep::Completed => write!(f, "completed"),
        }
    }
}
