//! Dispatcher configuration.

use crate::backend::NativeBackend;
use crate::Analytics;
use std::sync::Arc;
use std::time::Duration;

/// Default minimum session duration, applied when none is given.
pub const DEFAULT_MINIMUM_SESSION_DURATION: Duration = Duration::from_millis(10_000);

/// Default session timeout duration, applied when none is given.
pub const DEFAULT_SESSION_TIMEOUT_DURATION: Duration = Duration::from_millis(1_800_000);

/// Dispatcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) minimum_session_duration: Duration,
    pub(crate) session_timeout_duration: Duration,
}

impl Config {
    /// Duration forwarded when `set_minimum_session_duration` is called without one.
    pub fn minimum_session_duration(&self) -> Duration {
        self.minimum_session_duration
    }

    /// Duration forwarded when `set_session_timeout_duration` is called without one.
    pub fn session_timeout_duration(&self) -> Duration {
        self.session_timeout_duration
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_session_duration: DEFAULT_MINIMUM_SESSION_DURATION,
            session_timeout_duration: DEFAULT_SESSION_TIMEOUT_DURATION,
        }
    }
}

/// Builder for the [`Analytics`] dispatcher.
pub struct AnalyticsBuilder {
    backend: Arc<dyn NativeBackend>,
    minimum_session_duration: Option<Duration>,
    session_timeout_duration: Option<Duration>,
}

impl AnalyticsBuilder {
    /// Create a new builder around the given backend.
    pub fn new(backend: impl NativeBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            minimum_session_duration: None,
            session_timeout_duration: None,
        }
    }

    /// Set the default minimum session duration.
    pub fn minimum_session_duration(mut self, duration: Duration) -> Self {
        self.minimum_session_duration = Some(duration);
        self
    }

    /// Set the default session timeout duration.
    pub fn session_timeout_duration(mut self, duration: Duration) -> Self {
        self.session_timeout_duration = Some(duration);
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Result<Analytics, crate::Error> {
        let config =
            Self::build_config(self.minimum_session_duration, self.session_timeout_duration)?;
        Ok(Analytics::from_parts(config, self.backend))
    }

    fn build_config(
        minimum_session_duration: Option<Duration>,
        session_timeout_duration: Option<Duration>,
    ) -> Result<Config, crate::Error> {
        let session_timeout_duration =
            session_timeout_duration.unwrap_or(DEFAULT_SESSION_TIMEOUT_DURATION);
        if session_timeout_duration.is_zero() {
            return Err(crate::Error::Config(
                "session_timeout_duration cannot be zero".into(),
            ));
        }

        Ok(Config {
            minimum_session_duration: minimum_session_duration
                .unwrap_or(DEFAULT_MINIMUM_SESSION_DURATION),
            session_timeout_duration,
        })
    }
}

impl std::fmt::Debug for AnalyticsBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsBuilder")
            .field("minimum_session_duration", &self.minimum_session_duration)
            .field("session_timeout_duration", &self.session_timeout_duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AnalyticsBuilder::build_config(None, None).unwrap();

        assert_eq!(config.minimum_session_duration(), Duration::from_millis(10_000));
        assert_eq!(config.session_timeout_duration(), Duration::from_millis(1_800_000));
    }

    #[test]
    fn test_builder_custom_values() {
        let config = AnalyticsBuilder::build_config(
            Some(Duration::from_secs(5)),
            Some(Duration::from_secs(600)),
        )
        .unwrap();

        assert_eq!(config.minimum_session_duration(), Duration::from_secs(5));
        assert_eq!(config.session_timeout_duration(), Duration::from_secs(600));
    }

    #[test]
    fn test_builder_zero_timeout_fails() {
        let result = AnalyticsBuilder::build_config(None, Some(Duration::ZERO));
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_builder_zero_minimum_is_allowed() {
        let config = AnalyticsBuilder::build_config(Some(Duration::ZERO), None).unwrap();
        assert!(config.minimum_session_duration().is_zero());
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let config = Config::default();
        assert_eq!(config.minimum_session_duration(), DEFAULT_MINIMUM_SESSION_DURATION);
        assert_eq!(config.session_timeout_duration(), DEFAULT_SESSION_TIMEOUT_DURATION);
    }
}
