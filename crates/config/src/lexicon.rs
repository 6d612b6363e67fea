//! Dialect phrase tables
//!
//! Ordered, case-insensitive keyword tables the extractors and the FAQ
//! matcher run against. Kept as data so the whole lexicon can be swapped
//! per locale without touching control flow. The built-in tables cover
//! Hinglish alongside plain English.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// FAQ topic, matched in the fixed priority order of `Lexicon::faq_groups`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqTopic {
    Services,
    Hours,
    Doctor,
    Fees,
    Address,
}

/// One FAQ keyword group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqGroup {
    pub topic: FaqTopic,
    pub keywords: Vec<String>,
}

/// Dialect phrase tables for extraction and FAQ matching
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Phrases meaning "my name is", removed anywhere in a name answer
    pub name_fillers: Vec<String>,
    /// Politeness/copula particles removed from a name answer
    pub politeness_particles: Vec<String>,
    /// First-person filler prefixes stripped from the front of a complaint
    pub issue_prefixes: Vec<String>,
    /// Time-of-day words that qualify a slot answer
    pub time_of_day_keywords: Vec<String>,
    /// Day words that qualify a slot answer
    pub day_keywords: Vec<String>,
    /// Words signalling a reschedule request after booking
    pub reschedule_keywords: Vec<String>,
    /// FAQ keyword groups, first match wins
    pub faq_groups: Vec<FaqGroup>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            name_fillers: to_strings(&[
                "my name is",
                "mera naam",
                "mera name",
                "naam toh",
                "i am",
                "myself",
                "main",
                "naam",
                "name",
            ]),
            politeness_particles: to_strings(&["ji", "hai", "hain", "hoon", "hu"]),
            issue_prefixes: to_strings(&[
                "mujhe",
                "mujhko",
                "mere ko",
                "mera",
                "meri",
                "mere",
                "humko",
                "hume",
                "i have",
                "i am having",
                "i feel",
            ]),
            time_of_day_keywords: to_strings(&[
                "morning",
                "afternoon",
                "evening",
                "night",
                "o'clock",
                "subah",
                "dopahar",
                "shaam",
                "sham",
                "raat",
                "baje",
            ]),
            day_keywords: to_strings(&[
                "today",
                "tomorrow",
                "aaj",
                "kal",
                "parso",
                "parson",
                "monday",
                "tuesday",
                "wednesday",
                "thursday",
                "friday",
                "saturday",
                "sunday",
                "somvaar",
                "somvar",
                "somwar",
                "mangalvaar",
                "mangalvar",
                "mangalwar",
                "budhvaar",
                "budhvar",
                "budhwar",
                "guruvaar",
                "guruvar",
                "guruwar",
                "shukravaar",
                "shukravar",
                "shukrawar",
                "shanivaar",
                "shanivar",
                "shaniwar",
                "ravivaar",
                "ravivar",
                "raviwar",
                "itvaar",
                "itwar",
            ]),
            reschedule_keywords: to_strings(&[
                "time",
                "slot",
                "change",
                "badal",
                "badalna",
                "badlo",
                "reschedule",
                "postpone",
                "dusra",
                "doosra",
            ]),
            faq_groups: vec![
                FaqGroup {
                    topic: FaqTopic::Services,
                    keywords: to_strings(&[
                        "service",
                        "services",
                        "treatment",
                        "ilaj",
                        "ilaaj",
                        "cure",
                        "bimari",
                        "bimaari",
                        "problem",
                    ]),
                },
                FaqGroup {
                    topic: FaqTopic::Hours,
                    keywords: to_strings(&[
                        "time", "timing", "timings", "hours", "open", "khula", "khulta", "kab",
                        "samay", "band",
                    ]),
                },
                FaqGroup {
                    topic: FaqTopic::Doctor,
                    keywords: to_strings(&["doctor", "daktar", "dakter", "dr"]),
                },
                FaqGroup {
                    topic: FaqTopic::Fees,
                    keywords: to_strings(&[
                        "fee", "fees", "charge", "charges", "cost", "paisa", "paise", "kharcha",
                        "rupaye",
                    ]),
                },
                FaqGroup {
                    topic: FaqTopic::Address,
                    keywords: to_strings(&[
                        "address", "location", "pata", "kahan", "kaha", "jagah",
                    ]),
                },
            ],
        }
    }
}

impl Lexicon {
    /// Load from a YAML file; absent tables keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from a YAML file, falling back to the built-in tables
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "lexicon not loaded, using built-in tables"
                );
                Self::default()
            }
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
