//! Validating dispatcher for a native analytics SDK.
//!
//! Calls are checked against a fixed rule set (event name format, reserved
//! names, parameter count, value types) and then forwarded unchanged to a
//! [`NativeBackend`]. Recording, batching and transmission are the
//! backend's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_gate::{Analytics, ChannelBackend};
//! use serde_json::json;
//!
//! fn main() -> Result<(), analytics_gate::Error> {
//!     let (backend, calls) = ChannelBackend::new();
//!     let analytics = Analytics::builder(backend).build()?;
//!
//!     analytics.log_event("signup")
//!         .param("plan", "pro")
//!         .send()?;
//!
//!     analytics.set_user_id(Some("usr_123"));
//!     analytics.set_user_properties(json!({"plan": "pro"}).as_object().unwrap())?;
//!
//!     // `calls` is drained by the native side.
//!     Ok(())
//! }
//! ```

mod backend;
mod bridge;
mod client;
mod config;
mod error;
mod types;
pub mod validate;

pub use backend::{BackendReceiver, ChannelBackend, NativeBackend};
pub use bridge::{Invocation, Method};
pub use client::{Analytics, LogEvent};
pub use config::{
    AnalyticsBuilder, Config, DEFAULT_MINIMUM_SESSION_DURATION, DEFAULT_SESSION_TIMEOUT_DURATION,
};
pub use error::Error;
pub use types::{BackendCall, EventParams};
