//! Core types for the clinic intake agent
//!
//! Shared by the config and agent crates: the intake step machine, the
//! patient profile accumulated across turns, and transcript messages.

pub mod message;
pub mod profile;
pub mod step;

pub use message::{Speaker, Utterance};
pub use profile::PatientProfile;
pub use step::IntakeStep;
