//! Native backend capability and a channel-based implementation.

use crate::types::{BackendCall, EventParams};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

/// The native analytics SDK, as seen by the dispatcher.
///
/// Every method is fire-and-forget: the dispatcher never waits on or
/// inspects the outcome. Implementations must tolerate concurrent calls.
pub trait NativeBackend: Send + Sync {
    fn log_event(&self, name: String, params: EventParams);

    fn set_analytics_collection_enabled(&self, enabled: bool);

    fn set_current_screen(&self, screen_name: String, screen_class_override: Option<String>);

    fn set_minimum_session_duration(&self, duration: Duration);

    fn set_session_timeout_duration(&self, duration: Duration);

    fn set_user_id(&self, id: Option<String>);

    fn set_user_property(&self, name: String, value: Option<String>);
}

impl<B: NativeBackend + ?Sized> NativeBackend for Arc<B> {
    fn log_event(&self, name: String, params: EventParams) {
        (**self).log_event(name, params)
    }

    fn set_analytics_collection_enabled(&self, enabled: bool) {
        (**self).set_analytics_collection_enabled(enabled)
    }

    fn set_current_screen(&self, screen_name: String, screen_class_override: Option<String>) {
        (**self).set_current_screen(screen_name, screen_class_override)
    }

    fn set_minimum_session_duration(&self, duration: Duration) {
        (**self).set_minimum_session_duration(duration)
    }

    fn set_session_timeout_duration(&self, duration: Duration) {
        (**self).set_session_timeout_duration(duration)
    }

    fn set_user_id(&self, id: Option<String>) {
        (**self).set_user_id(id)
    }

    fn set_user_property(&self, name: String, value: Option<String>) {
        (**self).set_user_property(name, value)
    }
}

/// Receiving end of a [`ChannelBackend`], drained by the native side.
pub type BackendReceiver = mpsc::UnboundedReceiver<BackendCall>;

/// Backend that hands each call to the native side over an unbounded channel.
///
/// Sending never blocks. If the receiver is gone the call is dropped.
#[derive(Debug, Clone)]
pub struct ChannelBackend {
    tx: mpsc::UnboundedSender<BackendCall>,
}

impl ChannelBackend {
    /// Create a backend and the receiver its calls arrive on.
    pub fn new() -> (Self, BackendReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, call: BackendCall) {
        if let Err(mpsc::error::SendError(call)) = self.tx.send(call) {
            warn!(?call, "native receiver closed, dropping call");
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl NativeBackend for ChannelBackend {
    fn log_event(&self, name: String, params: EventParams) {
        self.forward(BackendCall::LogEvent { name, params });
    }

    fn set_analytics_collection_enabled(&self, enabled: bool) {
        self.forward(BackendCall::SetAnalyticsCollectionEnabled { enabled });
    }

    fn set_current_screen(&self, screen_name: String, screen_class_override: Option<String>) {
        self.forward(BackendCall::SetCurrentScreen {
            screen_name,
            screen_class_override,
        });
    }

    fn set_minimum_session_duration(&self, duration: Duration) {
        self.forward(BackendCall::SetMinimumSessionDuration {
            milliseconds: millis(duration),
        });
    }

    fn set_session_timeout_duration(&self, duration: Duration) {
        self.forward(BackendCall::SetSessionTimeoutDuration {
            milliseconds: millis(duration),
        });
    }

    fn set_user_id(&self, id: Option<String>) {
        self.forward(BackendCall::SetUserId { id });
    }

    fn set_user_property(&self, name: String, value: Option<String>) {
        self.forward(BackendCall::SetUserProperty { name, value });
    }
}
