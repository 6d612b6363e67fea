//! Single-owner intake session
//!
//! The one stateful element in the system. Owns the transcript and the
//! current (step, profile) snapshot, invokes the engine once per submitted
//! utterance, and applies the returned snapshot after the call returns.
//! Utterances are applied one at a time to completion; there is no shared
//! mutable state anywhere else.

use std::sync::Arc;

use intake_agent_core::{IntakeStep, PatientProfile, Utterance};

use crate::engine::DialogueEngine;

/// A live intake call
pub struct IntakeSession {
    engine: Arc<DialogueEngine>,
    step: IntakeStep,
    profile: PatientProfile,
    transcript: Vec<Utterance>,
}

impl IntakeSession {
    /// Start a fresh call: empty profile, first step, greeting seeded
    pub fn new(engine: Arc<DialogueEngine>) -> Self {
        let mut session = Self {
            engine,
            step: IntakeStep::default(),
            profile: PatientProfile::new(),
            transcript: Vec::new(),
        };
        session.seed_greeting();
        session
    }

    fn seed_greeting(&mut self) {
        let prompt = self.engine.prompt_for(self.step, &self.profile);
        self.transcript.push(Utterance::agent(prompt));
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    /// The full ordered transcript of the call so far
    pub fn transcript(&self) -> &[Utterance] {
        &self.transcript
    }

    /// Whether the intake reached a confirmed booking
    pub fn is_booked(&self) -> bool {
        self.step.is_completed()
    }

    /// Apply one caller utterance and return this turn's agent replies
    pub fn submit(&mut self, text: &str) -> &[Utterance] {
        self.transcript.push(Utterance::patient(text));

        let outcome = self.engine.advance(text, self.step, &self.profile);

        let reply_start = self.transcript.len();
        for reply in &outcome.replies {
            self.transcript.push(Utterance::agent(reply.clone()));
        }
        self.step = outcome.next_step;
        self.profile = outcome.profile;

        &self.transcript[reply_start..]
    }

    /// Discard state, profile, and transcript; start over from the greeting
    pub fn reset(&mut self) {
        tracing::debug!(step = %self.step, "session reset");
        self.step = IntakeStep::default();
        self.profile = PatientProfile::new();
        self.transcript.clear();
        self.seed_greeting();
    }
}
