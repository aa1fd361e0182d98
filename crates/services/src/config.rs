//! Runtime configuration, read from `QUIZ_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::driver::DriverConfig;
use crate::error::ConfigError;
use crate::provider::QuizType;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_QUIZ_TYPE: &str = "general";
const DEFAULT_TICK_MS: u64 = 50;
const DEFAULT_ADVANCE_DELAY_MS: u64 = 500;
const DEFAULT_TIME_LIMIT_SECS: f64 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct QuizConfig {
    /// Where `HttpQuestionProvider` fetches `/questions/{type}` from.
    pub base_url: Url,
    pub quiz_type: QuizType,
    /// Local question file; when set, the HTTP provider is not used.
    pub questions_file: Option<PathBuf>,
    pub tick_interval: Duration,
    pub advance_delay: Duration,
    pub time_limit_secs: f64,
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `QUIZ_BASE_URL` or `QUIZ_TYPE` is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable numbers fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base url or quiz type is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(
            &lookup("QUIZ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )?;
        let quiz_type = QuizType::new(
            lookup("QUIZ_TYPE").unwrap_or_else(|| DEFAULT_QUIZ_TYPE.to_string()),
        )?;
        let questions_file = lookup("QUIZ_QUESTIONS_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let tick_ms = parse_or(&lookup, "QUIZ_TICK_MS", DEFAULT_TICK_MS).max(1);
        let advance_ms = parse_or(&lookup, "QUIZ_ADVANCE_DELAY_MS", DEFAULT_ADVANCE_DELAY_MS);
        let time_limit_secs = parse_or(&lookup, "QUIZ_TIME_LIMIT_SECS", DEFAULT_TIME_LIMIT_SECS);
        let time_limit_secs = if time_limit_secs.is_finite() && time_limit_secs > 0.0 {
            time_limit_secs
        } else {
            DEFAULT_TIME_LIMIT_SECS
        };

        Ok(Self {
            base_url,
            quiz_type,
            questions_file,
            tick_interval: Duration::from_millis(tick_ms),
            advance_delay: Duration::from_millis(advance_ms),
            time_limit_secs,
        })
    }

    /// Config pointing at `base_url` with every other knob at its default.
    #[must_use]
    pub fn new(base_url: Url, quiz_type: QuizType) -> Self {
        Self {
            base_url,
            quiz_type,
            questions_file: None,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            advance_delay: Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS),
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }

    #[must_use]
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            tick_interval: self.tick_interval,
            advance_delay: self.advance_delay,
        }
    }
}

/// Parse and validate a provider base url.
///
/// # Errors
///
/// Returns `ConfigError::InvalidBaseUrl` when the value is not an absolute url.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
        source,
    })
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = QuizConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.questions_file, None);
        assert_eq!(config.quiz_type.as_str(), "general");
        assert_eq!(config.advance_delay, Duration::from_millis(500));
    }

    #[test]
    fn reads_overrides() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            ("QUIZ_BASE_URL", "https://quiz.example.com/api"),
            ("QUIZ_TYPE", "science"),
            ("QUIZ_QUESTIONS_FILE", "questions.json"),
            ("QUIZ_TICK_MS", "20"),
            ("QUIZ_ADVANCE_DELAY_MS", "250"),
            ("QUIZ_TIME_LIMIT_SECS", "90"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://quiz.example.com/api");
        assert_eq!(config.quiz_type.as_str(), "science");
        assert_eq!(config.questions_file, Some(PathBuf::from("questions.json")));
        assert_eq!(config.tick_interval, Duration::from_millis(20));
        assert_eq!(config.advance_delay, Duration::from_millis(250));
        assert!((config.time_limit_secs - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_numbers_fall_back_to_defaults() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            ("QUIZ_TICK_MS", "fast"),
            ("QUIZ_TIME_LIMIT_SECS", "-3"),
        ]))
        .unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
        assert!((config.time_limit_secs - DEFAULT_TIME_LIMIT_SECS).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_relative_base_url() {
        let err = QuizConfig::from_lookup(lookup_from(&[("QUIZ_BASE_URL", "/api")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_blank_quiz_type() {
        let err = QuizConfig::from_lookup(lookup_from(&[("QUIZ_TYPE", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyQuizType));
    }
}
