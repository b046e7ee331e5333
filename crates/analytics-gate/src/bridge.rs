//! Untyped entry point for hosts that pass arguments as JSON values.
//!
//! Arguments are positional, as a script host would pass them. Type
//! mismatches surface as [`Error::InvalidArgument`] before the typed
//! dispatcher is reached.

use crate::client::Analytics;
use crate::types::EventParams;
use crate::validate::nullable_string;
use crate::Error;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Native-facing method names accepted by [`Analytics::invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Method {
    LogEvent,
    SetAnalyticsCollectionEnabled,
    SetCurrentScreen,
    SetMinimumSessionDuration,
    SetSessionTimeoutDuration,
    SetUserId,
    SetUserProperty,
    SetUserProperties,
}

/// A single call as received from the host.
#[derive(Debug, Clone, Deserialize)]
pub struct Invocation {
    pub method: Method,
    #[serde(default)]
    pub args: Vec<Value>,
}

fn string_arg<'a>(args: &'a [Value], index: usize, what: &str) -> Result<&'a str, Error> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidArgument(format!("'{}' must be a string", what)))
}

fn duration_arg(args: &[Value], index: usize, what: &str) -> Result<Option<Duration>, Error> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(|ms| Some(Duration::from_millis(ms)))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "'{}' must be a non-negative whole number of milliseconds",
                    what
                ))
            }),
    }
}

/// Text form of an unchecked argument; absent arguments read as `undefined`.
fn loose_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".into(),
    }
}

impl Analytics {
    /// Parse and run a JSON invocation such as
    /// `{"method": "setUserId", "args": ["usr_123"]}`.
    pub fn invoke_json(&self, invocation: &str) -> Result<(), Error> {
        let invocation: Invocation = serde_json::from_str(invocation)?;
        self.invoke(invocation.method, &invocation.args)
    }

    /// Run one method with positional, untyped arguments.
    ///
    /// Besides the checks the typed methods make, arguments that cannot be
    /// represented in the typed call fail with [`Error::InvalidArgument`]:
    /// a non-boolean `enabled`, a non-string `screenName` or
    /// `screenClassOverride`, a duration that is not a whole number of
    /// milliseconds, or a `properties` argument that is not an object.
    /// A `setUserProperty` name is never rejected; non-string names are
    /// forwarded in their JSON text form.
    pub fn invoke(&self, method: Method, args: &[Value]) -> Result<(), Error> {
        match method {
            Method::LogEvent => {
                let name = string_arg(args, 0, "name")?;
                let params = match args.get(1) {
                    None => EventParams::new(),
                    Some(Value::Object(params)) => params.clone(),
                    Some(_) => {
                        return Err(Error::InvalidArgument(
                            "'params' must be an object".into(),
                        ))
                    }
                };
                self.log_event_with(name, params)
            }
            Method::SetAnalyticsCollectionEnabled => {
                let enabled = args.first().and_then(Value::as_bool).ok_or_else(|| {
                    Error::InvalidArgument("'enabled' must be a boolean".into())
                })?;
                self.set_analytics_collection_enabled(enabled);
                Ok(())
            }
            Method::SetCurrentScreen => {
                let screen_name = string_arg(args, 0, "screenName")?;
                let screen_class_override = match args.get(1) {
                    None => None,
                    value => nullable_string(value, "screenClassOverride")?,
                };
                self.set_current_screen(screen_name, screen_class_override);
                Ok(())
            }
            Method::SetMinimumSessionDuration => {
                let duration = duration_arg(args, 0, "milliseconds")?;
                self.set_minimum_session_duration(duration);
                Ok(())
            }
            Method::SetSessionTimeoutDuration => {
                let duration = duration_arg(args, 0, "milliseconds")?;
                self.set_session_timeout_duration(duration);
                Ok(())
            }
            Method::SetUserId => {
                let id = nullable_string(args.first(), "id")?;
                self.set_user_id(id);
                Ok(())
            }
            Method::SetUserProperty => {
                let name = loose_string(args.first());
                let value = nullable_string(args.get(1), "value")?;
                self.set_user_property(name, value);
                Ok(())
            }
            Method::SetUserProperties => match args.first() {
                Some(Value::Object(properties)) => self.set_user_properties(properties),
                _ => Err(Error::InvalidArgument(
                    "'properties' must be an object".into(),
                )),
            },
        }
    }
}
