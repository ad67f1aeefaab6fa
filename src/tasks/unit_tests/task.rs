use serde_json::json;

use crate::tasks::{error::ValidationError, task::Priority};

#[test]
fn priority_parses_known_labels() {
    assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
    assert_eq!("normal".parse::<Priority>(), Ok(Priority::Normal));
    assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
}

#[test]
fn priority_rejects_unknown_labels() {
    assert_eq!(
        "urgent".parse::<Priority>(),
        Err(ValidationError::UnknownPriority("urgent".to_string()))
    );
    // Labels are case sensitive
    assert!("Low".parse::<Priority>().is_err());
}

#[test]
fn priority_display_matches_labels() {
    for priority in Priority::ALL {
        assert_eq!(priority.to_string(), priority.as_str());
    }
}

#[test]
fn priority_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("high"));
    let parsed: Priority = serde_json::from_value(json!("normal")).unwrap();
    assert_eq!(parsed, Priority::Normal);
}
