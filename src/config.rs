//! Runtime configuration.
//!
//! Only operational limits are configurable. Domain constants (valid
//! terms, the 35-hour quota, room capacity, the 4-term ceiling) are
//! fixed and live next to the models that use them.
//!
//! ```toml
//! [detector]
//! max_assignments = 2000
//!
//! [advisories]
//! max_professor_sessions_per_day = 2
//! report_group_gaps = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Default bound on assignments accepted by a bounded detector.
pub const DEFAULT_MAX_ASSIGNMENTS: usize = 5000;

/// Default number of sessions a professor may teach per day before an
/// advisory is raised.
pub const DEFAULT_MAX_PROFESSOR_SESSIONS_PER_DAY: usize = 2;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Conflict detector limits.
    pub detector: DetectorConfig,
    /// Advisory check settings.
    pub advisories: AdvisoryConfig,
}

/// Conflict detector settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Largest input accepted. `None` disables the bound.
    pub max_assignments: Option<usize>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_assignments: Some(DEFAULT_MAX_ASSIGNMENTS),
        }
    }
}

impl DetectorConfig {
    /// A detector with no size bound.
    pub fn unbounded() -> Self {
        Self {
            max_assignments: None,
        }
    }

    /// Sets the size bound.
    pub fn with_max_assignments(mut self, max: usize) -> Self {
        self.max_assignments = Some(max);
        self
    }
}

/// Advisory (non-fatal) check settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Sessions per professor per day above which an advisory is raised.
    pub max_professor_sessions_per_day: usize,
    /// Whether idle slots inside a group's day are reported.
    pub report_group_gaps: bool,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            max_professor_sessions_per_day: DEFAULT_MAX_PROFESSOR_SESSIONS_PER_DAY,
            report_group_gaps: true,
        }
    }
}

impl TimetableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the detector settings.
    pub fn with_detector(mut self, detector: DetectorConfig) -> Self {
        self.detector = detector;
        self
    }

    /// Sets the advisory settings.
    pub fn with_advisories(mut self, advisories: AdvisoryConfig) -> Self {
        self.advisories = advisories;
        self
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading timetable config");
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.detector.max_assignments == Some(0) {
            return Err(ConfigError::Invalid(
                "detector.max_assignments must be positive".into(),
            ));
        }
        if self.advisories.max_professor_sessions_per_day == 0 {
            return Err(ConfigError::Invalid(
                "advisories.max_professor_sessions_per_day must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = TimetableConfig::new();
        assert_eq!(c.detector.max_assignments, Some(DEFAULT_MAX_ASSIGNMENTS));
        assert_eq!(c.advisories.max_professor_sessions_per_day, 2);
        assert!(c.advisories.report_group_gaps);
    }

    #[test]
    fn test_from_toml_partial() {
        let c = TimetableConfig::from_toml_str(
            r#"
            [detector]
            max_assignments = 300
            "#,
        )
        .unwrap();
        assert_eq!(c.detector.max_assignments, Some(300));
        assert_eq!(c.advisories, AdvisoryConfig::default());
    }

    #[test]
    fn test_from_toml_empty() {
        let c = TimetableConfig::from_toml_str("").unwrap();
        assert_eq!(c, TimetableConfig::default());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = TimetableConfig::from_toml_str("[detector]\nmax_assignments = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TimetableConfig::from_toml_str("[detector\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TimetableConfig::load("/nonexistent/u-timetable.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_builders() {
        let c = TimetableConfig::new()
            .with_detector(DetectorConfig::unbounded())
            .with_advisories(AdvisoryConfig {
                max_professor_sessions_per_day: 3,
                report_group_gaps: false,
            });
        assert_eq!(c.detector.max_assignments, None);
        assert_eq!(c.advisories.max_professor_sessions_per_day, 3);
        assert_eq!(
            DetectorConfig::unbounded().with_max_assignments(10).max_assignments,
            Some(10)
        );
    }
}
