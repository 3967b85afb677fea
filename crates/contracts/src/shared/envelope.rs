use serde::{Deserialize, Serialize};

/// Error field of a backend response: either one message or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    One(String),
    Many(Vec<String>),
}

impl ErrorPayload {
    /// Messages as a list, in the order the backend sent them.
    pub fn to_messages(&self) -> Vec<String> {
        match self {
            ErrorPayload::One(msg) => vec![msg.clone()],
            ErrorPayload::Many(list) => list.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ErrorPayload::One(msg) => msg.trim().is_empty(),
            ErrorPayload::Many(list) => list.iter().all(|m| m.trim().is_empty()),
        }
    }
}

/// Envelope of every backend response.
///
/// Success: `{ "value": <payload> }`, failure: `{ "erreurs": "..." | ["..."] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "Option::default")]
    pub value: Option<T>,

    #[serde(rename = "erreurs", default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorPayload>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            value: None,
            errors: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn with_value(value: T) -> Self {
        Self {
            value: Some(value),
            errors: None,
        }
    }

    pub fn with_errors(errors: ErrorPayload) -> Self {
        Self {
            value: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_envelope() {
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(r#"{"value":[1,2,3]}"#).unwrap();
        assert_eq!(resp.value, Some(vec![1, 2, 3]));
        assert!(resp.errors.is_none());
    }

    #[test]
    fn test_count_envelope() {
        let resp: ApiResponse<u64> = serde_json::from_str(r#"{"value":25,"erreurs":null}"#).unwrap();
        assert_eq!(resp.value, Some(25));
        assert!(resp.errors.is_none());
    }

    #[test]
    fn test_error_string_and_list() {
        let one: ApiResponse<()> = serde_json::from_str(r#"{"erreurs":"Nom obligatoire"}"#).unwrap();
        assert_eq!(
            one.errors.unwrap().to_messages(),
            vec!["Nom obligatoire".to_string()]
        );

        let many: ApiResponse<()> =
            serde_json::from_str(r#"{"value":null,"erreurs":["a","b"]}"#).unwrap();
        assert_eq!(
            many.errors.unwrap().to_messages(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_envelope_of_non_default_payload() {
        let resp: ApiResponse<Row> = serde_json::from_str(r#"{"value":{"id":4}}"#).unwrap();
        assert_eq!(resp.value, Some(Row { id: 4 }));

        let failed: ApiResponse<Row> = serde_json::from_str(r#"{"erreurs":"x"}"#).unwrap();
        assert!(failed.value.is_none());
        assert_eq!(failed.errors, Some(ErrorPayload::One("x".into())));
    }

    #[test]
    fn test_blank_payload_is_empty() {
        assert!(ErrorPayload::Many(vec![]).is_empty());
        assert!(ErrorPayload::One("  ".into()).is_empty());
        assert!(!ErrorPayload::One("x".into()).is_empty());
    }
}
