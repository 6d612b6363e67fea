//! Dialogue engine
//!
//! One invocation per submitted utterance. The engine runs the FAQ
//! side-channel and the active step handler over an immutable
//! (step, profile) snapshot and returns the combined replies plus a new
//! snapshot. It holds no mutable state of its own and never touches the
//! transcript.
//!
//! When an FAQ matches and the same utterance also fails the current step,
//! the caller sees the FAQ answer, the repeated step prompt, and the step's
//! own re-ask, in that order. Both paths run unconditionally every turn;
//! existing transcripts depend on that ordering, so it stays.

use std::collections::HashSet;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use intake_agent_config::{render, ClinicProfile, Lexicon, ReplySet};
use intake_agent_core::{IntakeStep, PatientProfile};

use crate::extract::FieldExtractor;
use crate::faq::FaqMatcher;

/// Result of one engine turn
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    /// Replies in the order the receptionist speaks them
    pub replies: Vec<String>,
    pub next_step: IntakeStep,
    pub profile: PatientProfile,
    /// Whether the input satisfied the active step's extraction
    pub consumed: bool,
}

/// The scripted receptionist
pub struct DialogueEngine {
    clinic: ClinicProfile,
    replies: ReplySet,
    extractor: FieldExtractor,
    faq: FaqMatcher,
    reschedule_keywords: Vec<String>,
}

impl DialogueEngine {
    /// Create an engine with the built-in clinic, lexicon, and reply text
    pub fn new() -> Self {
        Self::with_config(
            ClinicProfile::default(),
            &Lexicon::default(),
            ReplySet::default(),
        )
    }

    /// Create an engine from explicit configuration
    pub fn with_config(clinic: ClinicProfile, lexicon: &Lexicon, replies: ReplySet) -> Self {
        let extractor = FieldExtractor::new(lexicon);
        let faq = FaqMatcher::new(lexicon, &clinic, &replies);
        let reschedule_keywords = lexicon
            .reschedule_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        Self {
            clinic,
            replies,
            extractor,
            faq,
            reschedule_keywords,
        }
    }

    /// Question text for a step, personalized when the name is known
    ///
    /// Used both as the next question and as the re-prompt appended after
    /// an interleaved FAQ answer.
    pub fn prompt_for(&self, step: IntakeStep, profile: &PatientProfile) -> String {
        let caller = caller_suffix(profile);
        match step {
            IntakeStep::AskName => render(
                &self.replies.ask_name,
                &[("clinic", self.clinic.clinic_name.as_str())],
            ),
            IntakeStep::AskAge => render(&self.replies.ask_age, &[("caller", &caller)]),
            IntakeStep::AskIssue => render(&self.replies.ask_issue, &[("caller", &caller)]),
            IntakeStep::AskTime => render(&self.replies.ask_time, &[("caller", &caller)]),
            IntakeStep::Completed => {
                render(&self.replies.completed_prompt, &[("caller", &caller)])
            }
        }
    }

    /// Apply one caller utterance to the current snapshot
    pub fn advance(&self, input: &str, step: IntakeStep, profile: &PatientProfile) -> TurnOutcome {
        let faq_answer = self.faq.match_faq(input);
        let step_outcome = self.handle_step(input, step, profile);

        let mut replies = Vec::new();
        if let Some(answer) = faq_answer {
            replies.push(answer.to_string());
            if !step_outcome.consumed {
                // Remind the caller what is still being asked
                replies.push(self.prompt_for(step, profile));
            }
        }
        replies.extend(step_outcome.replies);

        tracing::debug!(
            step = %step,
            next_step = %step_outcome.next_step,
            consumed = step_outcome.consumed,
            faq = faq_answer.is_some(),
            "turn advanced"
        );

        TurnOutcome {
            replies,
            next_step: step_outcome.next_step,
            profile: step_outcome.profile,
            consumed: step_outcome.consumed,
        }
    }

    fn handle_step(&self, input: &str, step: IntakeStep, profile: &PatientProfile) -> TurnOutcome {
        match step {
            IntakeStep::AskName => self.handle_ask_name(input, profile),
            IntakeStep::AskAge => self.handle_ask_age(input, profile),
            IntakeStep::AskIssue => self.handle_ask_issue(input, profile),
            IntakeStep::AskTime => self.handle_ask_time(input, profile),
            IntakeStep::Completed => self.handle_completed(input, profile),
        }
    }

    fn handle_ask_name(&self, input: &str, profile: &PatientProfile) -> TurnOutcome {
        match self.extractor.extract_name(input) {
            Some(name) => {
                let mut next = profile.clone();
                next.set_name(name.clone());
                TurnOutcome {
                    replies: vec![render(&self.replies.name_ack, &[("name", name.as_str())])],
                    next_step: IntakeStep::AskAge,
                    profile: next,
                    consumed: true,
                }
            }
            None => self.reask(IntakeStep::AskName, profile, &self.replies.reask_name),
        }
    }

    fn handle_ask_age(&self, input: &str, profile: &PatientProfile) -> TurnOutcome {
        match self.extractor.extract_age(input) {
            Some(age) => {
                let mut next = profile.clone();
                next.set_age(age);
                let caller = caller_suffix(&next);
                TurnOutcome {
                    replies: vec![render(&self.replies.age_ack, &[("caller", &caller)])],
                    next_step: IntakeStep::AskIssue,
                    profile: next,
                    consumed: true,
                }
            }
            None => self.reask(IntakeStep::AskAge, profile, &self.replies.reask_age),
        }
    }

    fn handle_ask_issue(&self, input: &str, profile: &PatientProfile) -> TurnOutcome {
        let issue = self.extractor.sanitize_issue(input);
        if issue.is_empty() {
            return self.reask(IntakeStep::AskIssue, profile, &self.replies.reask_issue);
        }

        let mut next = profile.clone();
        next.set_issue(issue);
        TurnOutcome {
            replies: vec![self.replies.issue_ack.clone()],
            next_step: IntakeStep::AskTime,
            profile: next,
            consumed: true,
        }
    }

    fn handle_ask_time(&self, input: &str, profile: &PatientProfile) -> TurnOutcome {
        match self.extractor.sanitize_slot(input) {
            Some(slot) => {
                let mut next = profile.clone();
                next.set_slot(slot.clone());
                let caller = caller_suffix(&next);
                let replies = vec![
                    render(&self.replies.booking_hold, &[("caller", &caller)]),
                    render(
                        &self.replies.booking_confirm,
                        &[
                            ("caller", caller.as_str()),
                            ("slot", slot.as_str()),
                            ("doctor", self.clinic.doctor_name.as_str()),
                            ("issue", next.issue().unwrap_or("")),
                        ],
                    ),
                    self.replies.booking_followup.clone(),
                    self.replies.booking_anything_else.clone(),
                ];
                TurnOutcome {
                    replies,
                    next_step: IntakeStep::Completed,
                    profile: next,
                    consumed: true,
                }
            }
            None => self.reask(IntakeStep::AskTime, profile, &self.replies.reask_time),
        }
    }

    fn handle_completed(&self, input: &str, profile: &PatientProfile) -> TurnOutcome {
        // A parsable slot is a silent reschedule
        if let Some(slot) = self.extractor.sanitize_slot(input) {
            let mut next = profile.clone();
            next.set_slot(slot.clone());
            let caller = caller_suffix(&next);
            let replies = vec![
                self.replies.slot_change_ack.clone(),
                render(
                    &self.replies.slot_change_confirm,
                    &[("caller", caller.as_str()), ("slot", slot.as_str())],
                ),
                self.replies.slot_change_resend.clone(),
            ];
            return TurnOutcome {
                replies,
                next_step: IntakeStep::Completed,
                profile: next,
                consumed: true,
            };
        }

        // Reschedule intent without a parsable slot reopens the question
        if self.is_reschedule_request(input) {
            return TurnOutcome {
                replies: vec![self.replies.ask_new_time.clone()],
                next_step: IntakeStep::AskTime,
                profile: profile.clone(),
                consumed: false,
            };
        }

        TurnOutcome {
            replies: vec![self.replies.standby.clone()],
            next_step: IntakeStep::Completed,
            profile: profile.clone(),
            consumed: false,
        }
    }

    fn is_reschedule_request(&self, input: &str) -> bool {
        let lower = input.to_lowercase();
        let tokens: HashSet<&str> = lower.unicode_words().collect();
        self.reschedule_keywords.iter().any(|k| {
            if k.contains(' ') {
                lower.contains(k.as_str())
            } else {
                tokens.contains(k.as_str())
            }
        })
    }

    fn reask(&self, step: IntakeStep, profile: &PatientProfile, reply: &str) -> TurnOutcome {
        TurnOutcome {
            replies: vec![reply.to_string()],
            next_step: step,
            profile: profile.clone(),
            consumed: false,
        }
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// ", <Name> ji" when the name is known, empty otherwise
fn caller_suffix(profile: &PatientProfile) -> String {
    profile
        .name()
        .map(|name| format!(", {} ji", name))
        .unwrap_or_default()
}
