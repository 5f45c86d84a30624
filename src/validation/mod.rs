// Declarative field validation for request bodies
//
// Each resource declares a table of `FieldRule`s. The validator walks the table
// in order and records at most one violation per field (the first rule that
// fails), but never stops at the first failing field.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

pub mod post;

pub use post::{CREATE_POST, UPDATE_POST};

/// Rule applied to a single body field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    /// Absent or null values are violations when set
    pub required: bool,
    /// Upper bound on whitespace-separated words
    pub max_words: usize,
}

impl FieldRule {
    pub const fn required(field: &'static str, max_words: usize) -> Self {
        Self { field, required: true, max_words }
    }

    pub const fn optional(field: &'static str, max_words: usize) -> Self {
        Self { field, required: false, max_words }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    String,
    MaxLength(usize),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::String => "string",
            Rule::MaxLength(_) => "maxLength",
        }
    }

    fn args(&self) -> Option<Value> {
        match self {
            Rule::MaxLength(limit) => Some(json!({ "maxLength": limit })),
            _ => None,
        }
    }
}

/// One violated rule, serialized as `{field, rule, message, args?}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub rule: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl FieldError {
    pub fn new(field: &str, rule: Rule) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.name(),
            message: format!("{} validation failed", rule.name()),
            args: rule.args(),
        }
    }
}

/// Field values that passed validation, keyed by field name.
/// Fields that were not supplied are simply absent.
pub type ValidatedFields = BTreeMap<&'static str, String>;

pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Validate `body` against `rules`, collecting every violation.
pub fn validate(rules: &[FieldRule], body: &Map<String, Value>) -> Result<ValidatedFields, Vec<FieldError>> {
    let mut fields = ValidatedFields::new();
    let mut errors = Vec::new();

    for rule in rules {
        match check_field(rule, body.get(rule.field)) {
            Ok(Some(value)) => {
                fields.insert(rule.field, value);
            }
            Ok(None) => {}
            Err(violated) => errors.push(FieldError::new(rule.field, violated)),
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        tracing::debug!("Body failed validation with {} error(s)", errors.len());
        Err(errors)
    }
}

fn check_field(rule: &FieldRule, value: Option<&Value>) -> Result<Option<String>, Rule> {
    let value = match value {
        None | Some(Value::Null) if rule.required => return Err(Rule::Required),
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let text = value.as_str().ok_or(Rule::String)?;

    // A supplied field must carry at least one word, even when optional
    let words = word_count(text);
    if words == 0 {
        return Err(Rule::Required);
    }
    if words > rule.max_words {
        return Err(Rule::MaxLength(rule.max_words));
    }

    Ok(Some(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[FieldRule] = &[FieldRule::required("name", 3), FieldRule::optional("bio", 5)];

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn collects_errors_across_fields() {
        let errors = validate(
            &[FieldRule::required("a", 3), FieldRule::required("b", 3)],
            &Map::new(),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "a");
        assert_eq!(errors[1].field, "b");
        assert!(errors.iter().all(|e| e.rule == "required"));
    }

    #[test]
    fn null_counts_as_missing() {
        let errors = validate(RULES, &body(json!({ "name": null }))).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", Rule::Required)]);
    }

    #[test]
    fn optional_field_may_be_absent() {
        let fields = validate(RULES, &body(json!({ "name": "ada" }))).unwrap();
        assert_eq!(fields.get("name").map(String::as_str), Some("ada"));
        assert!(!fields.contains_key("bio"));
    }

    #[test]
    fn optional_field_must_not_be_blank_when_supplied() {
        let errors = validate(RULES, &body(json!({ "name": "ada", "bio": "   " }))).unwrap_err();
        assert_eq!(errors[0].rule, "required");
        assert_eq!(errors[0].field, "bio");
    }

    #[test]
    fn type_check_runs_before_length_check() {
        let errors = validate(RULES, &body(json!({ "name": ["a", "b", "c", "d"] }))).unwrap_err();
        assert_eq!(errors[0].rule, "string");
        assert!(errors[0].args.is_none());
    }

    #[test]
    fn max_length_counts_words_and_carries_limit() {
        let ok = validate(RULES, &body(json!({ "name": "one two three" })));
        assert!(ok.is_ok());

        let errors = validate(RULES, &body(json!({ "name": "one two three four" }))).unwrap_err();
        assert_eq!(errors[0].rule, "maxLength");
        assert_eq!(errors[0].args, Some(json!({ "maxLength": 3 })));
        assert_eq!(errors[0].message, "maxLength validation failed");
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let fields = validate(RULES, &body(json!({ "name": "ada", "admin": true }))).unwrap();
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn serializes_without_args_when_absent() {
        let value = serde_json::to_value(FieldError::new("title", Rule::String)).unwrap();
        assert_eq!(
            value,
            json!({ "field": "title", "rule": "string", "message": "string validation failed" })
        );
    }

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  a\tb \n c  "), 3);
        assert_eq!(word_count(""), 0);
    }
}
