use crate::config::Settings;
use crate::tools::ToolError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Binary input for tools that take a file (`path`) or inline bytes (`base64`).
#[derive(Debug, Clone)]
pub struct InputPayload {
    pub bytes: Vec<u8>,
    pub source: String,
}

pub fn object(args: &Value) -> Result<&Map<String, Value>, ToolError> {
    args.as_object()
        .ok_or_else(|| ToolError::invalid_input("arguments must be an object"))
}

pub fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    optional_str(args, key)?.ok_or_else(|| ToolError::invalid_input(format!("{key} is required")))
}

pub fn optional_str<'a>(args: &'a Value, key: &str) -> Result<Option<&'a str>, ToolError> {
    match object(args)?.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(ToolError::invalid_input(format!("{key} must be a string"))),
    }
}

/// Booleans arrive as JSON booleans or as form-style strings.
pub fn optional_bool(args: &Value, key: &str, default: bool) -> Result<bool, ToolError> {
    match object(args)?.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::String(value)) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(ToolError::invalid_input(format!("{key} must be a boolean"))),
        },
        Some(_) => Err(ToolError::invalid_input(format!("{key} must be a boolean"))),
    }
}

pub fn optional_f64(args: &Value, key: &str) -> Result<Option<f64>, ToolError> {
    let parsed = match object(args)?.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(value)) => value.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ToolError::invalid_input(format!("{key} must be a number"))),
    }
}

pub fn required_f64(args: &Value, key: &str) -> Result<f64, ToolError> {
    optional_f64(args, key)?.ok_or_else(|| ToolError::invalid_input(format!("{key} is required")))
}

pub fn optional_u64(args: &Value, key: &str) -> Result<Option<u64>, ToolError> {
    let parsed = match object(args)?.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(value)) => value.trim().parse::<u64>().ok(),
        Some(_) => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| ToolError::invalid_input(format!("{key} must be a non-negative integer")))
}

/// Read an optional integer and check it against an inclusive range.
pub fn bounded_u64(
    args: &Value,
    key: &str,
    min: u64,
    max: u64,
    default: u64,
) -> Result<u64, ToolError> {
    let value = optional_u64(args, key)?.unwrap_or(default);
    if !(min..=max).contains(&value) {
        return Err(ToolError::invalid_input(format!(
            "{key} must be between {min} and {max}"
        )));
    }
    Ok(value)
}

pub fn load_input(args: &Value, settings: &Settings) -> Result<InputPayload, ToolError> {
    let obj = object(args)?;
    let max_bytes = settings.max_input_bytes;

    let path_value = obj.get("path");
    let base64_value = obj.get("base64");

    let (path_value, base64_value) = match (path_value, base64_value) {
        (None, None) => {
            return Err(ToolError::invalid_input("either path or base64 is required"));
        }
        (Some(_), Some(_)) => {
            return Err(ToolError::invalid_input("path and base64 cannot both be set"));
        }
        pair => pair,
    };

    if let Some(value) = path_value {
        let path = value
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("path must be a string"))?;
        let path_ref = Path::new(path);
        let metadata = fs::metadata(path_ref)
            .map_err(|_| ToolError::invalid_input("path must exist and be a file"))?;
        if !metadata.is_file() {
            return Err(ToolError::invalid_input("path must be a file"));
        }
        let len = metadata.len();
        if len > max_bytes {
            return Err(ToolError::too_large(format!(
                "input exceeds limit: {len} bytes (max {max_bytes})"
            )));
        }
        let bytes = fs::read(path_ref)
            .map_err(|_| ToolError::invalid_input("failed to read path contents"))?;
        tracing::debug!(path, bytes = bytes.len(), "loaded input from path");
        return Ok(InputPayload {
            bytes,
            source: format!("path:{path}"),
        });
    }

    let Some(value) = base64_value else {
        return Err(ToolError::invalid_input("either path or base64 is required"));
    };
    let base64_str = value
        .as_str()
        .ok_or_else(|| ToolError::invalid_input("base64 must be a string"))?;
    let bytes = STANDARD
        .decode(base64_str.trim().as_bytes())
        .map_err(|_| ToolError::invalid_input("base64 must be valid"))?;
    if bytes.len() as u64 > max_bytes {
        return Err(ToolError::too_large(format!(
            "input exceeds limit: {} bytes (max {max_bytes})",
            bytes.len()
        )));
    }
    Ok(InputPayload {
        bytes,
        source: "base64".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::errors;
    use serde_json::json;
    use std::fs::File;
    use tempfile::tempdir;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn base64_ok() {
        let encoded = STANDARD.encode(b"hello");
        let args = json!({"base64": encoded});
        let payload = load_input(&args, &settings()).expect("payload");
        assert_eq!(payload.bytes, b"hello");
        assert_eq!(payload.source, "base64");
    }

    #[test]
    fn base64_invalid() {
        let args = json!({"base64": "not@@@"});
        let err = load_input(&args, &settings()).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn missing_input() {
        let err = load_input(&json!({}), &settings()).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn both_present() {
        let encoded = STANDARD.encode(b"hello");
        let args = json!({"path": "./example.png", "base64": encoded});
        let err = load_input(&args, &settings()).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn path_is_dir() {
        let dir = tempdir().expect("tempdir");
        let args = json!({"path": dir.path().to_string_lossy()});
        let err = load_input(&args, &settings()).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn too_large_respects_settings() {
        let dir = tempdir().expect("tempdir");
        let file_path = dir.path().join("large.png");
        let file = File::create(&file_path).expect("file");
        file.set_len(65).expect("set_len");
        let settings = Settings {
            max_input_bytes: 64,
            ..Settings::default()
        };
        let args = json!({"path": file_path.to_string_lossy()});
        let err = load_input(&args, &settings).expect_err("error");
        assert_eq!(err.kind, errors::TOO_LARGE);
    }

    #[test]
    fn numbers_accept_strings() {
        let args = json!({"a": "12.5", "b": 3, "c": "x"});
        assert_eq!(optional_f64(&args, "a").expect("a"), Some(12.5));
        assert_eq!(required_f64(&args, "b").expect("b"), 3.0);
        assert!(optional_f64(&args, "c").is_err());
        assert!(required_f64(&args, "missing").is_err());
    }

    #[test]
    fn booleans_accept_form_values() {
        let args = json!({"a": "yes", "b": false, "c": "maybe"});
        assert!(optional_bool(&args, "a", false).expect("a"));
        assert!(!optional_bool(&args, "b", true).expect("b"));
        assert!(optional_bool(&args, "c", true).is_err());
        assert!(optional_bool(&args, "missing", true).expect("default"));
    }

    #[test]
    fn bounded_rejects_out_of_range() {
        let args = json!({"count": 0});
        assert!(bounded_u64(&args, "count", 1, 10, 3).is_err());
        assert_eq!(bounded_u64(&json!({}), "count", 1, 10, 3).expect("default"), 3);
    }

    #[test]
    fn strings_reject_other_types() {
        let args = json!({"text": 5});
        assert!(required_str(&args, "text").is_err());
        assert_eq!(optional_str(&json!({}), "text").expect("none"), None);
    }
}
