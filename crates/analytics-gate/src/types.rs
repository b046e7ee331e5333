//! Forwarded call types and serialization.

use serde::Serialize;

/// Event parameters, kept in insertion order.
pub type EventParams = serde_json::Map<String, serde_json::Value>;

/// One operation handed to the native SDK.
///
/// Serializes with the native method name as the `method` tag and
/// durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum BackendCall {
    #[serde(rename_all = "camelCase")]
    LogEvent { name: String, params: EventParams },
    #[serde(rename_all = "camelCase")]
    SetAnalyticsCollectionEnabled { enabled: bool },
    #[serde(rename_all = "camelCase")]
    SetCurrentScreen {
        screen_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        screen_class_override: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetMinimumSessionDuration { milliseconds: u64 },
    #[serde(rename_all = "camelCase")]
    SetSessionTimeoutDuration { milliseconds: u64 },
    #[serde(rename_all = "camelCase")]
    SetUserId { id: Option<String> },
    #[serde(rename_all = "camelCase")]
    SetUserProperty { name: String, value: Option<String> },
}
