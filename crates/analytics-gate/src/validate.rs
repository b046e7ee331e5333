//! Argument rules applied before anything reaches the backend.

use crate::types::EventParams;
use crate::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Maximum number of parameters a single event may carry.
pub const MAX_EVENT_PARAMS: usize = 25;

/// Event names the analytics platform logs on its own.
pub const RESERVED_EVENT_NAMES: &[&str] = &[
    "app_clear_data",
    "app_uninstall",
    "app_update",
    "error",
    "first_open",
    "in_app_purchase",
    "notification_dismiss",
    "notification_foreground",
    "notification_open",
    "notification_receive",
    "os_update",
    "session_start",
    "user_engagement",
];

static EVENT_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").ok());

/// Whether `name` is reserved for system-generated events.
pub fn is_reserved_event_name(name: &str) -> bool {
    RESERVED_EVENT_NAMES.contains(&name)
}

/// Check an event name: reserved names first, then `^[A-Za-z0-9_]+$`.
pub fn validate_event_name(name: &str) -> Result<(), Error> {
    if is_reserved_event_name(name) {
        return Err(Error::ReservedName(name.into()));
    }

    let well_formed = EVENT_NAME.as_ref().is_some_and(|re| re.is_match(name));
    if !well_formed {
        return Err(Error::InvalidFormat(name.into()));
    }

    Ok(())
}

/// Check the parameter count of an event.
pub fn validate_event_params(params: &EventParams) -> Result<(), Error> {
    if params.len() > MAX_EVENT_PARAMS {
        return Err(Error::LimitExceeded {
            max: MAX_EVENT_PARAMS,
            actual: params.len(),
        });
    }
    Ok(())
}

/// Read a value that must be either `null` or a string.
///
/// `None` (an absent argument) is neither and is rejected.
pub(crate) fn nullable_string<'a>(
    value: Option<&'a Value>,
    what: &str,
) -> Result<Option<&'a str>, Error> {
    match value {
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        _ => Err(Error::InvalidArgument(format!(
            "'{}' expected a string value or null",
            what
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_custom_names() {
        for name in ["ok_event", "Purchase2", "_x", "A", "level_up_99"] {
            assert!(validate_event_name(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_every_reserved_name_rejected() {
        for name in RESERVED_EVENT_NAMES {
            assert!(matches!(
                validate_event_name(name),
                Err(Error::ReservedName(n)) if n == *name
            ));
        }
    }

    #[test]
    fn test_reserved_check_is_case_sensitive() {
        assert!(validate_event_name("Error").is_ok());
        assert!(validate_event_name("SESSION_START").is_ok());
    }

    #[test]
    fn test_bad_format() {
        for name in ["bad name!", "", "kebab-case", "dotted.name", "émoji", "newline\n"] {
            assert!(
                matches!(validate_event_name(name), Err(Error::InvalidFormat(_))),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_long_names_are_not_truncated_or_rejected() {
        let name = "a".repeat(40);
        assert!(validate_event_name(&name).is_ok());
    }

    #[test]
    fn test_param_limit_boundary() {
        let mut params = EventParams::new();
        for i in 0..MAX_EVENT_PARAMS {
            params.insert(format!("p{}", i), json!(1));
        }
        assert!(validate_event_params(&params).is_ok());

        params.insert("one_more".into(), json!(1));
        assert!(matches!(
            validate_event_params(&params),
            Err(Error::LimitExceeded { max: 25, actual: 26 })
        ));
    }

    #[test]
    fn test_nullable_string() {
        assert_eq!(nullable_string(Some(&json!(null)), "id").unwrap(), None);
        assert_eq!(nullable_string(Some(&json!("abc")), "id").unwrap(), Some("abc"));
        assert!(matches!(
            nullable_string(Some(&json!(42)), "id"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            nullable_string(None, "id"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
