use crate::mcp::errors;
use serde_json::{Value, json};

pub mod age_calculator;
pub mod base64_encoder;
pub mod bmi_calculator;
pub mod case_converter;
pub mod color_converter;
pub mod hash_generator;
pub mod image_converter;
pub mod image_filters;
pub mod image_output;
pub mod image_resizer;
pub mod image_upscaler;
pub mod json_formatter;
pub mod loan_calculator;
pub mod lorem_ipsum;
pub mod password_generator;
pub mod percentage_calculator;
pub mod slug_generator;
pub mod unit_converter;
pub mod url_encoder;
pub mod uuid_generator;
pub mod word_counter;

/// Failure raised by a single tool; rendered into the error envelope.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ToolError {
    pub kind: &'static str,
    pub message: String,
}

impl ToolError {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(errors::INVALID_INPUT, message)
    }

    pub fn too_large(message: impl Into<String>) -> Self {
        Self::new(errors::TOO_LARGE, message)
    }

    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::new(errors::UNSUPPORTED_FORMAT, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(errors::INTERNAL_ERROR, message)
    }

    pub fn into_result(self, source: Option<&str>) -> Value {
        error_result(self.kind, self.message, source)
    }
}

pub fn success_result(text: impl Into<String>, structured: Value) -> Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "structuredContent": structured,
        "isError": false
    })
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

/// Collapse a `run` outcome into the envelope returned to callers.
pub fn finish(outcome: Result<Value, ToolError>) -> Value {
    outcome.unwrap_or_else(|err| {
        tracing::debug!(kind = err.kind, message = %err.message, "tool returned error");
        err.into_result(None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_result_includes_source_when_given() {
        let value = error_result(errors::INVALID_INPUT, "bad", Some("base64"));
        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["structuredContent"]["error"]["source"], json!("base64"));
        assert_eq!(value["content"][0]["text"], json!("Error: bad"));
    }

    #[test]
    fn error_result_omits_missing_source() {
        let value = error_result(errors::TOO_LARGE, "big", None);
        assert!(value["structuredContent"]["error"].get("source").is_none());
    }

    #[test]
    fn finish_renders_errors() {
        let value = finish(Err(ToolError::invalid_input("text is required")));
        assert_eq!(value["structuredContent"]["error"]["kind"], json!("invalid_input"));
    }
}
