//! Environment-backed settings.
//!
//! Values come from the process environment, after `.env` has been loaded
//! with `dotenvy`. Command-line flags take precedence over these.

use std::path::PathBuf;

use crate::report::DEFAULT_SUBJECT;

pub const DEFAULT_LOG_FILE: &str = "logs/gpa_calculator.log";
pub const DEFAULT_REPORT_DIR: &str = "reports";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `LOG_FILE_PATH`: JSON log file, rotated daily.
    pub log_file_path: PathBuf,
    /// `GPA_REPORT_DIR`: where exported reports are written.
    pub report_dir: PathBuf,
    /// `GPA_REPORT_SUBJECT`: first part of exported report file names.
    pub report_subject: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            report_subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();

        Self {
            log_file_path: get("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file_path),
            report_dir: get("GPA_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
            report_subject: get("GPA_REPORT_SUBJECT").unwrap_or(defaults.report_subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.report_subject, "SLIIT_GPA");
    }

    #[test]
    fn test_values_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("LOG_FILE_PATH", "/var/log/gpa.log"),
            ("GPA_REPORT_DIR", "/tmp/reports"),
            ("GPA_REPORT_SUBJECT", "CS_GPA"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.log_file_path, PathBuf::from("/var/log/gpa.log"));
        assert_eq!(settings.report_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(settings.report_subject, "CS_GPA");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let settings = Settings::from_lookup(|k| (k == "GPA_REPORT_SUBJECT").then(|| "  ".to_string()));
        assert_eq!(settings.report_subject, DEFAULT_SUBJECT);
    }
}
