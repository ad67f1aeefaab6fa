use serde_json::Value;

use crate::tasks::error::ValidationError;
use crate::tasks::task::Priority;

/// Minimum accepted task name length, in characters.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum accepted task name length, in characters.
pub const NAME_MAX_LEN: usize = 20;

const KNOWN_FIELDS: [&str; 3] = ["id", "name", "priority"];

/// Outcome of a validation.
///
/// Carries the original candidate (cloned, unchanged) together with the
/// first violated constraint, if any. The candidate is echoed back on both
/// success and failure so callers can report context without keeping the
/// input around themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// The candidate, echoed back unchanged
    pub value: Value,

    /// First violated constraint, `None` when the candidate is acceptable
    pub error: Option<ValidationError>,
}

impl Validation {
    fn ok(value: &Value) -> Self {
        Validation {
            value: value.clone(),
            error: None,
        }
    }

    fn fail(value: &Value, error: ValidationError) -> Self {
        Validation {
            value: value.clone(),
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, keeping the echoed candidate on success.
    ///
    /// # Errors
    ///
    /// Returns the violated constraint when the candidate was rejected.
    pub fn into_result(self) -> Result<Value, ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }
}

/// Validation rules for task input.
///
/// All checks are pure functions of their input: no shared state, no side
/// effects, no coercion. Candidates arrive as [`serde_json::Value`] so the
/// wrong-type and unknown-field checks stay meaningful for untrusted
/// input. Checks run in a fixed order and the first violation wins.
pub struct TaskValidator;

impl TaskValidator {
    /// Validates a task id candidate.
    ///
    /// Accepts only integer numbers strictly greater than zero. The
    /// candidate is echoed back whether or not it is acceptable.
    ///
    /// # Examples
    /// ```rust
    /// use tasklist::tasks::validator::TaskValidator;
    /// use serde_json::json;
    ///
    /// assert!(TaskValidator::validate_id(&json!(1)).is_valid());
    /// assert!(!TaskValidator::validate_id(&json!(0)).is_valid());
    /// assert!(!TaskValidator::validate_id(&json!(2.34)).is_valid());
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn validate_id(candidate: &Value) -> Validation {
        match Self::check_id(candidate) {
            Ok(()) => Validation::ok(candidate),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%error, "id candidate rejected");
                Validation::fail(candidate, error)
            }
        }
    }

    /// Validates a task candidate.
    ///
    /// The candidate must be an object carrying exactly the recognized
    /// fields. Checks run in a fixed order, first violation wins:
    ///
    /// 1. the candidate is an object;
    /// 2. no unrecognized field is present;
    /// 3. `id`, when present, is an integer greater than 0;
    /// 4. `id`, when present, is accompanied by both `name` and `priority`;
    /// 5. `name` (required) is a 3-20 character alphanumeric string;
    /// 6. `priority` (required) is one of `low`, `normal`, `high`.
    ///
    /// The candidate is echoed back unchanged on both success and failure.
    ///
    /// # Examples
    /// ```rust
    /// use tasklist::tasks::validator::TaskValidator;
    /// use serde_json::json;
    ///
    /// let draft = json!({ "name": "deploy", "priority": "high" });
    /// assert!(TaskValidator::validate_task(&draft).is_valid());
    ///
    /// let draft = json!({ "name": "deploy", "priority": "urgent" });
    /// let checked = TaskValidator::validate_task(&draft);
    /// assert!(checked.error.is_some());
    /// assert_eq!(checked.value, draft);
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn validate_task(candidate: &Value) -> Validation {
        match Self::check_task(candidate) {
            Ok(()) => Validation::ok(candidate),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%error, "task candidate rejected");
                Validation::fail(candidate, error)
            }
        }
    }

    /// Validates a task name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is shorter than
    /// [`NAME_MIN_LEN`] or longer than [`NAME_MAX_LEN`] characters, or
    /// contains anything other than ASCII alphanumeric characters.
    ///
    /// # Examples
    /// ```rust
    /// use tasklist::tasks::validator::TaskValidator;
    ///
    /// assert!(TaskValidator::validate_name("deploy42").is_ok());
    /// assert!(TaskValidator::validate_name("no").is_err());
    /// assert!(TaskValidator::validate_name("no spaces!").is_err());
    /// ```
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        let len = name.chars().count();
        if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
            return Err(ValidationError::NameLength {
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
            });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::NameNotAlphanumeric);
        }
        Ok(())
    }

    /// Validates a priority label against the [`Priority`] set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPriority`] for anything outside
    /// `low`/`normal`/`high`.
    ///
    /// # Examples
    /// ```rust
    /// use tasklist::tasks::validator::TaskValidator;
    ///
    /// assert!(TaskValidator::validate_priority("normal").is_ok());
    /// assert!(TaskValidator::validate_priority("urgent").is_err());
    /// ```
    pub fn validate_priority(priority: &str) -> Result<(), ValidationError> {
        priority.parse::<Priority>().map(|_| ())
    }

    fn check_id(candidate: &Value) -> Result<(), ValidationError> {
        let Some(number) = candidate.as_number() else {
            return Err(ValidationError::IdNotNumber);
        };
        if !(number.is_u64() || number.is_i64()) {
            return Err(ValidationError::IdNotInteger);
        }
        match number.as_i64() {
            // None means the value only fits u64, which is positive anyway
            Some(n) if n <= 0 => Err(ValidationError::IdNotPositive),
            _ => Ok(()),
        }
    }

    fn check_task(candidate: &Value) -> Result<(), ValidationError> {
        let Some(fields) = candidate.as_object() else {
            return Err(ValidationError::NotAnObject);
        };

        for key in fields.keys() {
            if !KNOWN_FIELDS.contains(&key.as_str()) {
                return Err(ValidationError::UnknownField(key.clone()));
            }
        }

        if let Some(id) = fields.get("id") {
            Self::check_id(id)?;
            if !fields.contains_key("name") || !fields.contains_key("priority") {
                return Err(ValidationError::IdWithoutPeers);
            }
        }

        let name = fields
            .get("name")
            .ok_or(ValidationError::MissingField("name"))?;
        let name = name.as_str().ok_or(ValidationError::NameNotString)?;
        Self::validate_name(name)?;

        let priority = fields
            .get("priority")
            .ok_or(ValidationError::MissingField("priority"))?;
        let priority = priority.as_str().ok_or(ValidationError::PriorityNotString)?;
        Self::validate_priority(priority)?;

        Ok(())
    }
}
