//! FAQ interception
//!
//! Classifies an utterance against a fixed set of clinic topics and returns
//! a canned answer, or nothing. Runs as a side-channel on every turn so a
//! caller can ask about fees mid-intake without losing their place.
//!
//! Keyword groups come from the lexicon and are tested in a fixed priority
//! order; the first matching group wins. Answers are rendered once at
//! construction from the clinic profile.

use std::collections::{HashMap, HashSet};

use unicode_segmentation::UnicodeSegmentation;

use intake_agent_config::{render, ClinicProfile, FaqTopic, Lexicon, ReplySet};

/// Keyword-table FAQ classifier with pre-rendered answers
pub struct FaqMatcher {
    /// (topic, lowercase keywords) in priority order
    groups: Vec<(FaqTopic, Vec<String>)>,
    answers: HashMap<FaqTopic, String>,
}

impl FaqMatcher {
    pub fn new(lexicon: &Lexicon, clinic: &ClinicProfile, replies: &ReplySet) -> Self {
        let groups = lexicon
            .faq_groups
            .iter()
            .map(|g| {
                let keywords = g.keywords.iter().map(|k| k.to_lowercase()).collect();
                (g.topic, keywords)
            })
            .collect();

        let mut answers = HashMap::new();
        answers.insert(
            FaqTopic::Services,
            render(
                &replies.faq_services,
                &[
                    ("clinic", clinic.clinic_name.as_str()),
                    ("services", clinic.services.as_str()),
                ],
            ),
        );
        answers.insert(
            FaqTopic::Hours,
            render(&replies.faq_hours, &[("hours", clinic.hours.as_str())]),
        );
        answers.insert(
            FaqTopic::Doctor,
            render(
                &replies.faq_doctor,
                &[
                    ("doctor", clinic.doctor_name.as_str()),
                    ("specialization", clinic.specialization.as_str()),
                ],
            ),
        );
        answers.insert(
            FaqTopic::Fees,
            render(
                &replies.faq_fees,
                &[("fee", clinic.consultation_fee.as_str())],
            ),
        );
        answers.insert(
            FaqTopic::Address,
            render(&replies.faq_address, &[("address", clinic.address.as_str())]),
        );

        Self { groups, answers }
    }

    /// Answer for the first matching topic, if any
    pub fn match_faq(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        let tokens: HashSet<&str> = lower.unicode_words().collect();

        for (topic, keywords) in &self.groups {
            let hit = keywords.iter().any(|k| {
                if k.contains(' ') {
                    lower.contains(k.as_str())
                } else {
                    tokens.contains(k.as_str())
                }
            });
            if hit {
                tracing::debug!(topic = ?topic, "faq matched");
                return self.answers.get(topic).map(String::as_str);
            }
        }
        None
    }
}
