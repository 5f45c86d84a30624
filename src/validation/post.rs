use super::FieldRule;

pub const TITLE_MAX_WORDS: usize = 100;
pub const CONTENT_MAX_WORDS: usize = 500;

/// POST /posts body
pub const CREATE_POST: &[FieldRule] = &[
    FieldRule::required("title", TITLE_MAX_WORDS),
    FieldRule::required("content", CONTENT_MAX_WORDS),
];

/// PATCH /posts/:id body - same limits, every field optional
pub const UPDATE_POST: &[FieldRule] = &[
    FieldRule::optional("title", TITLE_MAX_WORDS),
    FieldRule::optional("content", CONTENT_MAX_WORDS),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;
    use serde_json::{json, Map, Value};

    fn words(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn create_reports_both_missing_fields() {
        let errors = validate(CREATE_POST, &Map::new()).unwrap_err();
        let pairs: Vec<_> = errors.iter().map(|e| (e.field.as_str(), e.rule)).collect();
        assert_eq!(pairs, vec![("title", "required"), ("content", "required")]);
    }

    #[test]
    fn create_reports_both_non_strings() {
        let errors = validate(CREATE_POST, &body(json!({ "title": 1, "content": 2 }))).unwrap_err();
        let pairs: Vec<_> = errors.iter().map(|e| (e.field.as_str(), e.rule)).collect();
        assert_eq!(pairs, vec![("title", "string"), ("content", "string")]);
    }

    #[test]
    fn create_reports_both_limits() {
        let errors = validate(
            CREATE_POST,
            &body(json!({ "title": words(101), "content": words(501) })),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].args, Some(json!({ "maxLength": 100 })));
        assert_eq!(errors[1].args, Some(json!({ "maxLength": 500 })));
    }

    #[test]
    fn limits_are_inclusive() {
        let fields = validate(
            CREATE_POST,
            &body(json!({ "title": words(100), "content": words(500) })),
        )
        .unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn update_accepts_empty_body() {
        let fields = validate(UPDATE_POST, &Map::new()).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn update_still_checks_supplied_fields() {
        let errors = validate(UPDATE_POST, &body(json!({ "title": 1, "content": words(501) }))).unwrap_err();
        let pairs: Vec<_> = errors.iter().map(|e| (e.field.as_str(), e.rule)).collect();
        assert_eq!(pairs, vec![("title", "string"), ("content", "maxLength")]);
    }
}
