//! Validating dispatcher.

use crate::backend::NativeBackend;
use crate::config::{AnalyticsBuilder, Config};
use crate::types::EventParams;
use crate::validate::{nullable_string, validate_event_name, validate_event_params};
use crate::Error;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Validating front for a native analytics SDK.
///
/// Every method checks its arguments synchronously and, if they pass,
/// forwards a single fire-and-forget call to the backend. Nothing is
/// queued or retried here. Cloning is cheap and clones share the backend.
///
/// # Example
///
/// ```rust
/// use analytics_gate::{Analytics, BackendCall, ChannelBackend};
///
/// # fn main() -> Result<(), analytics_gate::Error> {
/// let (backend, mut calls) = ChannelBackend::new();
/// let analytics = Analytics::builder(backend).build()?;
///
/// analytics.log_event("level_up")
///     .param("level", 4)
///     .send()?;
///
/// assert!(matches!(calls.try_recv(), Ok(BackendCall::LogEvent { .. })));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Analytics {
    config: Config,
    backend: Arc<dyn NativeBackend>,
}

impl Analytics {
    /// Create a new builder around the given backend.
    pub fn builder(backend: impl NativeBackend + 'static) -> AnalyticsBuilder {
        AnalyticsBuilder::new(backend)
    }

    pub(crate) fn from_parts(config: Config, backend: Arc<dyn NativeBackend>) -> Self {
        Self { config, backend }
    }

    /// Get the dispatcher configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ============================================
    // EVENTS
    // ============================================

    /// Start a custom event.
    ///
    /// Nothing is checked or forwarded until [`LogEvent::send`].
    pub fn log_event(&self, name: impl Into<String>) -> LogEvent<'_> {
        LogEvent {
            name: name.into(),
            params: EventParams::new(),
            client: self,
        }
    }

    /// Log a custom event with a ready-made parameter map.
    ///
    /// Fails with [`Error::ReservedName`], [`Error::InvalidFormat`] or
    /// [`Error::LimitExceeded`], checked in that order.
    pub fn log_event_with(&self, name: impl Into<String>, params: EventParams) -> Result<(), Error> {
        let name = name.into();
        if let Err(e) = validate_event_name(&name).and_then(|()| validate_event_params(&params)) {
            warn!(event = %name, error = %e, "rejected event");
            return Err(e);
        }

        debug!(event = %name, param_count = params.len(), "forwarding event");
        self.backend.log_event(name, params);
        Ok(())
    }

    // ============================================
    // COLLECTION & SCREENS
    // ============================================

    /// Enable or disable analytics collection on the device.
    pub fn set_analytics_collection_enabled(&self, enabled: bool) {
        debug!(enabled, "forwarding collection toggle");
        self.backend.set_analytics_collection_enabled(enabled);
    }

    /// Set the current screen name and optional screen class.
    pub fn set_current_screen(&self, screen_name: impl Into<String>, screen_class_override: Option<&str>) {
        let screen_name = screen_name.into();
        debug!(screen = %screen_name, "forwarding current screen");
        self.backend
            .set_current_screen(screen_name, screen_class_override.map(String::from));
    }

    // ============================================
    // SESSIONS
    // ============================================

    /// Set how long an app must be engaged before a session starts.
    ///
    /// `None` forwards the configured default (10 seconds unless overridden).
    pub fn set_minimum_session_duration(&self, duration: Option<Duration>) {
        let duration = duration.unwrap_or(self.config.minimum_session_duration);
        debug!(?duration, "forwarding minimum session duration");
        self.backend.set_minimum_session_duration(duration);
    }

    /// Set how long of inactivity ends a session.
    ///
    /// `None` forwards the configured default (30 minutes unless overridden).
    pub fn set_session_timeout_duration(&self, duration: Option<Duration>) {
        let duration = duration.unwrap_or(self.config.session_timeout_duration);
        debug!(?duration, "forwarding session timeout duration");
        self.backend.set_session_timeout_duration(duration);
    }

    // ============================================
    // USER
    // ============================================

    /// Set the user id, or clear it with `None`.
    pub fn set_user_id(&self, id: Option<&str>) {
        debug!(cleared = id.is_none(), "forwarding user id");
        self.backend.set_user_id(id.map(String::from));
    }

    /// Set a user property, or clear it with `None`.
    pub fn set_user_property(&self, name: impl Into<String>, value: Option<&str>) {
        let name = name.into();
        debug!(property = %name, cleared = value.is_none(), "forwarding user property");
        self.backend.set_user_property(name, value.map(String::from));
    }

    /// Set several user properties, one backend call per entry in map order.
    ///
    /// Each value must be a string or `null` (clear). This is not atomic:
    /// entries before the first invalid value have already been forwarded
    /// when [`Error::InvalidArgument`] is returned.
    #[instrument(skip_all, fields(count = properties.len()))]
    pub fn set_user_properties(&self, properties: &Map<String, Value>) -> Result<(), Error> {
        for (forwarded, (name, value)) in properties.iter().enumerate() {
            let value = match nullable_string(Some(value), name) {
                Ok(value) => value,
                Err(e) => {
                    warn!(property = %name, forwarded, error = %e, "rejected user property");
                    return Err(e);
                }
            };
            self.set_user_property(name.as_str(), value);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Custom event under construction.
#[must_use = "the event is only logged by calling `send`"]
pub struct LogEvent<'a> {
    name: String,
    params: EventParams,
    client: &'a Analytics,
}

impl<'a> LogEvent<'a> {
    /// Add a parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add every parameter from a map.
    pub fn params(mut self, params: EventParams) -> Self {
        self.params.extend(params);
        self
    }

    /// Validate and forward the event.
    pub fn send(self) -> Result<(), Error> {
        self.client.log_event_with(self.name, self.params)
    }
}
