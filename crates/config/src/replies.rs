//! Receptionist reply templates
//!
//! Every line the receptionist can say, with `{var}` placeholders
//! substituted at render time. `{caller}` renders as ", <Name> ji" when the
//! caller's name is known and as an empty string otherwise, so templates
//! read naturally either way.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Substitute `{key}` placeholders in a template
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{}}}", key), value);
    }
    result
}

/// All receptionist reply text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplySet {
    // Step prompts
    pub ask_name: String,
    pub ask_age: String,
    pub ask_issue: String,
    pub ask_time: String,
    pub completed_prompt: String,

    // Re-asks after a failed extraction
    pub reask_name: String,
    pub reask_age: String,
    pub reask_issue: String,
    pub reask_time: String,

    // Step-success replies
    pub name_ack: String,
    pub age_ack: String,
    pub issue_ack: String,
    pub booking_hold: String,
    pub booking_confirm: String,
    pub booking_followup: String,
    pub booking_anything_else: String,

    // Post-booking slot change
    pub slot_change_ack: String,
    pub slot_change_confirm: String,
    pub slot_change_resend: String,
    pub ask_new_time: String,
    pub standby: String,

    // FAQ answers
    pub faq_services: String,
    pub faq_hours: String,
    pub faq_doctor: String,
    pub faq_fees: String,
    pub faq_address: String,
}

impl Default for ReplySet {
    fn default() -> Self {
        Self {
            ask_name: "Namaste! {clinic} mein aapka swagat hai. Apna naam bata dijiye."
                .to_string(),
            ask_age: "Aapki umar kya hai{caller}?".to_string(),
            ask_issue: "Aapko kya taklif ho rahi hai{caller}?".to_string(),
            ask_time: "Aap kis din aur kis samay aana chahenge{caller}?".to_string(),
            completed_prompt: "Kya main kisi aur cheez mein madad kar sakti hoon{caller}?"
                .to_string(),

            reask_name: "Maaf kijiye, naam samajh nahi aaya. Apna naam bata dijiye.".to_string(),
            reask_age: "Umar sirf number mein bata dijiye, jaise: 32.".to_string(),
            reask_issue: "Thoda aur detail mein batayein, kya taklif ho rahi hai?".to_string(),
            reask_time: "Din aur samay thoda clear bata dijiye, jaise: kal shaam 6 baje."
                .to_string(),

            name_ack: "Dhanyavaad {name} ji! Aapki umar kya hai?".to_string(),
            age_ack: "Theek hai{caller}. Aapko kya taklif ho rahi hai? Thoda khul ke batayein."
                .to_string(),
            issue_ack:
                "Samajh gayi. Aap kis din aur kis samay aana chahenge? Jaise: kal subah 10 baje."
                    .to_string(),
            booking_hold: "Ek minute{caller}, main aapka appointment pakka kar rahi hoon..."
                .to_string(),
            booking_confirm:
                "Aapka appointment pakka ho gaya{caller}: {slot}, {doctor} ke saath. Taklif: {issue}."
                    .to_string(),
            booking_followup: "Clinic ka address aur time aapko WhatsApp par bhej diya jayega."
                .to_string(),
            booking_anything_else: "Kya main kisi aur cheez mein madad kar sakti hoon?".to_string(),

            slot_change_ack: "Ji, main aapka slot badal deti hoon.".to_string(),
            slot_change_confirm: "Aapka naya slot pakka ho gaya{caller}: {slot}.".to_string(),
            slot_change_resend: "Nayi details aapko WhatsApp par bhej di jayengi.".to_string(),
            ask_new_time: "Ji zaroor. Naya din aur samay bata dijiye, jaise: Somvaar shaam 5 baje."
                .to_string(),
            standby: "Main yahin hoon, koi aur madad chahiye toh bata dijiye.".to_string(),

            faq_services: "{clinic} mein {services} hota hai.".to_string(),
            faq_hours: "Clinic ka samay: {hours}.".to_string(),
            faq_doctor: "Yahan {doctor} ({specialization}) dekhte hain.".to_string(),
            faq_fees: "Consultation fee {fee} hai.".to_string(),
            faq_address: "Clinic ka pata: {address}.".to_string(),
        }
    }
}

impl ReplySet {
    /// Load from a YAML file; absent keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from a YAML file, falling back to the built-in text
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(replies) => replies,
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "reply set not loaded, using built-in text"
                );
                Self::default()
            }
        }
    }
}
