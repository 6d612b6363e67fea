//! Field extractors for intake answers
//!
//! Rule-based extraction of typed fields from free-text utterances.
//! Handles Hinglish alongside plain English phrasing; all patterns come
//! from the [`Lexicon`] so the dialect can be swapped without code changes.
//!
//! Every extractor is pure, total, and deterministic. Failing to extract
//! is a domain outcome signalled by `None` (or an empty string for the
//! complaint), never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use intake_agent_config::Lexicon;

/// First maximal digit run in a text
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Cleaned answers with more tokens than this are not plausible names
const MAX_NAME_TOKENS: usize = 6;

const MIN_AGE: u32 = 1;
const MAX_AGE: u32 = 120;

/// Compiled field extractors for one lexicon
pub struct FieldExtractor {
    name_fillers: Regex,
    particles: Regex,
    issue_prefixes: Vec<String>,
    time_keywords: Vec<String>,
    day_keywords: Vec<String>,
}

impl FieldExtractor {
    /// Compile patterns from the lexicon's phrase tables
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            name_fillers: phrase_pattern(&lexicon.name_fillers),
            particles: phrase_pattern(&lexicon.politeness_particles),
            issue_prefixes: lowercased(&lexicon.issue_prefixes),
            time_keywords: lowercased(&lexicon.time_of_day_keywords),
            day_keywords: lowercased(&lexicon.day_keywords),
        }
    }

    /// Extract a caller name from an answer to "apna naam bata dijiye"
    ///
    /// Strips filler phrases meaning "my name is" and politeness particles,
    /// then rejects anything empty or too long to be a name. Remaining
    /// words are title-cased.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        let no_fillers = self.name_fillers.replace_all(text, " ");
        let cleaned = self.particles.replace_all(&no_fillers, " ");

        let words: Vec<&str> = cleaned.unicode_words().collect();
        if words.is_empty() || words.len() > MAX_NAME_TOKENS {
            return None;
        }

        let name = words
            .iter()
            .map(|w| title_case(w))
            .collect::<Vec<_>>()
            .join(" ");
        Some(name)
    }

    /// Extract an age in years from the first digit run in the text
    ///
    /// Rejects runs longer than three digits and anything outside [1, 120].
    pub fn extract_age(&self, text: &str) -> Option<u32> {
        let run = DIGIT_RUN.find(text)?;
        if run.as_str().len() > 3 {
            return None;
        }
        let age: u32 = run.as_str().parse().ok()?;
        (MIN_AGE..=MAX_AGE).contains(&age).then_some(age)
    }

    /// Clean a presenting-complaint answer
    ///
    /// Strips first-person filler prefixes from the front and trims. The
    /// result may be empty; the caller treats empty as no match.
    pub fn sanitize_issue(&self, text: &str) -> String {
        let mut cleaned = collapse_whitespace(text);
        loop {
            let lower = cleaned.to_lowercase();
            let matched = self.issue_prefixes.iter().find_map(|prefix| {
                if lower == *prefix {
                    Some(cleaned.len())
                } else if lower.starts_with(prefix.as_str())
                    && lower[prefix.len()..].starts_with(' ')
                {
                    Some(prefix.len())
                } else {
                    None
                }
            });
            match matched {
                Some(cut) if cleaned.is_char_boundary(cut) => {
                    cleaned = cleaned[cut..].trim_start().to_string();
                }
                _ => break,
            }
        }
        cleaned.trim().to_string()
    }

    /// Normalize a slot answer and gate it on looking like a day/time
    ///
    /// Whitespace is collapsed; the text must contain a digit, a
    /// time-of-day keyword, or a day keyword. Keywords are matched on
    /// word boundaries so unrelated sentences ("I am fine") never pass.
    pub fn sanitize_slot(&self, text: &str) -> Option<String> {
        let normalized = collapse_whitespace(text);
        if normalized.is_empty() {
            return None;
        }

        let has_digit = normalized.chars().any(|c| c.is_ascii_digit());
        let lower = normalized.to_lowercase();
        let tokens: std::collections::HashSet<&str> = lower.unicode_words().collect();
        let has_time = self.time_keywords.iter().any(|k| tokens.contains(k.as_str()));
        let has_day = self.day_keywords.iter().any(|k| tokens.contains(k.as_str()));

        (has_digit || has_time || has_day).then_some(normalized)
    }
}

/// Word-bounded case-insensitive alternation over a phrase table
fn phrase_pattern(phrases: &[String]) -> Regex {
    // Longest-first so "mera naam" wins over bare "naam"
    let mut sorted: Vec<&String> = phrases.iter().collect();
    sorted.sort_by_key(|p| std::cmp::Reverse(p.len()));

    let alternation = sorted
        .iter()
        .map(|p| regex::escape(p.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        // Never matches
        return Regex::new(r"[^\s\S]").unwrap();
    }
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

fn lowercased(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(&Lexicon::default())
    }

    #[test]
    fn test_name_with_hindi_filler() {
        assert_eq!(
            extractor().extract_name("mera naam Rahul Verma hai"),
            Some("Rahul Verma".to_string())
        );
    }

    #[test]
    fn test_name_bare_and_recased() {
        assert_eq!(extractor().extract_name("priya"), Some("Priya".to_string()));
        assert_eq!(
            extractor().extract_name("SUNITA devi"),
            Some("Sunita Devi".to_string())
        );
    }

    #[test]
    fn test_name_with_english_filler() {
        assert_eq!(
            extractor().extract_name("my name is Arjun"),
            Some("Arjun".to_string())
        );
    }

    #[test]
    fn test_name_rejected_when_empty_after_cleaning() {
        assert!(extractor().extract_name("mera naam hai").is_none());
        assert!(extractor().extract_name("   ").is_none());
    }

    #[test]
    fn test_name_rejected_when_too_long() {
        // Seven cleaned tokens is past the plausible-name guard
        assert!(extractor()
            .extract_name("aapke clinic mein consultation fees kitni lagti hai")
            .is_none());
    }

    #[test]
    fn test_age_plain_number() {
        assert_eq!(extractor().extract_age("32"), Some(32));
    }

    #[test]
    fn test_age_embedded_in_sentence() {
        assert_eq!(extractor().extract_age("umar 120 hai"), Some(120));
        assert_eq!(extractor().extract_age("meri age 45 saal hai"), Some(45));
    }

    #[test]
    fn test_age_out_of_range() {
        assert!(extractor().extract_age("umar 121 hai").is_none());
        assert!(extractor().extract_age("0").is_none());
    }

    #[test]
    fn test_age_requires_digits() {
        assert!(extractor().extract_age("battees saal").is_none());
        assert!(extractor().extract_age("").is_none());
    }

    #[test]
    fn test_age_long_digit_run_rejected() {
        assert!(extractor().extract_age("1234").is_none());
    }

    #[test]
    fn test_issue_strips_first_person_prefixes() {
        assert_eq!(extractor().sanitize_issue("mujhe bukhar hai"), "bukhar hai");
        assert_eq!(
            extractor().sanitize_issue("mera pet dard kar raha hai"),
            "pet dard kar raha hai"
        );
    }

    #[test]
    fn test_issue_may_be_empty() {
        assert_eq!(extractor().sanitize_issue("mujhe"), "");
        assert_eq!(extractor().sanitize_issue("   "), "");
    }

    #[test]
    fn test_slot_accepts_digits() {
        assert_eq!(
            extractor().sanitize_slot("Mangalvaar shaam 6 baje"),
            Some("Mangalvaar shaam 6 baje".to_string())
        );
    }

    #[test]
    fn test_slot_accepts_day_keyword_alone() {
        assert_eq!(
            extractor().sanitize_slot("kal subah"),
            Some("kal subah".to_string())
        );
        assert_eq!(
            extractor().sanitize_slot("Friday evening"),
            Some("Friday evening".to_string())
        );
    }

    #[test]
    fn test_slot_collapses_whitespace() {
        assert_eq!(
            extractor().sanitize_slot("  kal   subah  10   baje "),
            Some("kal subah 10 baje".to_string())
        );
    }

    #[test]
    fn test_slot_rejects_unrelated_sentences() {
        assert!(extractor().sanitize_slot("I am fine").is_none());
        assert!(extractor().sanitize_slot("theek hoon").is_none());
        assert!(extractor().sanitize_slot("").is_none());
    }
}
