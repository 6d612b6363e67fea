//! Clinic profile
//!
//! Fixed facts about the clinic, interpolated into prompts and FAQ answers.
//! Loaded once at startup and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static clinic facts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicProfile {
    /// Clinic display name
    pub clinic_name: String,
    /// Consulting doctor
    pub doctor_name: String,
    /// Specialization label shown alongside the doctor
    pub specialization: String,
    /// Services text, read out as-is
    pub services: String,
    /// Working hours text, read out as-is
    pub hours: String,
    /// Consultation fee text
    pub consultation_fee: String,
    /// Street address text
    pub address: String,
}

impl Default for ClinicProfile {
    fn default() -> Self {
        Self {
            clinic_name: "Sehat Clinic".to_string(),
            doctor_name: "Dr. Anjali Sharma".to_string(),
            specialization: "General Physician".to_string(),
            services: "bukhar, khansi, pet dard, BP-sugar jaanch aur general ilaj"
                .to_string(),
            hours: "subah 9 baje se raat 8 baje tak, Somvaar se Shanivaar".to_string(),
            consultation_fee: "₹300".to_string(),
            address: "Shop 12, Gandhi Market, Station Road".to_string(),
        }
    }
}

impl ClinicProfile {
    /// Load from a YAML file; absent keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from a YAML file, falling back to built-in defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "clinic profile not loaded, using defaults"
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_are_populated() {
        let profile = ClinicProfile::default();
        assert!(!profile.clinic_name.is_empty());
        assert!(!profile.doctor_name.is_empty());
        assert!(!profile.consultation_fee.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let profile: ClinicProfile =
            serde_yaml::from_str("clinic_name: Arogya Clinic\ndoctor_name: Dr. Mehta\n").unwrap();
        assert_eq!(profile.clinic_name, "Arogya Clinic");
        assert_eq!(profile.doctor_name, "Dr. Mehta");
        assert_eq!(profile.consultation_fee, ClinicProfile::default().consultation_fee);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "consultation_fee: \"₹500\"").unwrap();

        let profile = ClinicProfile::load(file.path()).unwrap();
        assert_eq!(profile.consultation_fee, "₹500");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let profile = ClinicProfile::load_or_default("/nonexistent/clinic.yaml");
        assert_eq!(profile.clinic_name, ClinicProfile::default().clinic_name);
    }
}
