//! Clinic intake dialogue engine
//!
//! A scripted receptionist that walks a caller through a fixed intake
//! sequence (name, age, complaint, appointment slot), answers clinic FAQs
//! out of sequence without losing its place, and confirms the booking.
//!
//! Each turn is a pure computation: the engine receives one utterance plus
//! the current (step, profile) snapshot and returns the replies and a new
//! snapshot. The [`session::IntakeSession`] is the single stateful owner
//! that applies those snapshots and keeps the transcript.

pub mod engine;
pub mod extract;
pub mod faq;
pub mod session;

pub use engine::{DialogueEngine, TurnOutcome};
pub use extract::FieldExtractor;
pub use faq::FaqMatcher;
pub use session::IntakeSession;
