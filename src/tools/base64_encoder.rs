use crate::input::{optional_bool, optional_str, required_str};
use crate::tools::{ToolError, finish, success_result};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let mode = match optional_str(args, "mode")?.unwrap_or("encode") {
        "encode" => Mode::Encode,
        "decode" => Mode::Decode,
        _ => return Err(ToolError::invalid_input("mode must be encode or decode")),
    };
    let url_safe = optional_bool(args, "url_safe", false)?;

    let (mode_name, result) = match mode {
        Mode::Encode => ("encode", encode(text, url_safe)),
        Mode::Decode => ("decode", decode(text, url_safe)?),
    };
    Ok(success_result(
        result.clone(),
        json!({"mode": mode_name, "url_safe": url_safe, "result": result}),
    ))
}

pub fn encode(text: &str, url_safe: bool) -> String {
    if url_safe {
        URL_SAFE.encode(text.as_bytes())
    } else {
        STANDARD.encode(text.as_bytes())
    }
}

/// Decode to UTF-8 text. Whitespace inside the input is ignored.
pub fn decode(text: &str, url_safe: bool) -> Result<String, ToolError> {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    let bytes = if url_safe {
        URL_SAFE.decode(compact.as_bytes())
    } else {
        STANDARD.decode(compact.as_bytes())
    }
    .map_err(|err| ToolError::invalid_input(format!("invalid base64: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|_| ToolError::invalid_input("decoded bytes are not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::errors;

    #[test]
    fn decode_inverts_encode() {
        for sample in ["", "hello", "Hello 안녕 👋", "line\nbreak\ttab", "ÿþ\u{0}"] {
            for url_safe in [false, true] {
                let encoded = encode(sample, url_safe);
                assert_eq!(decode(&encoded, url_safe).expect("decode"), sample);
            }
        }
    }

    #[test]
    fn url_safe_alphabet_differs() {
        assert_eq!(encode("??>", false), "Pz8+");
        assert_eq!(encode("??>", true), "Pz8-");
    }

    #[test]
    fn decode_ignores_wrapped_lines() {
        assert_eq!(decode("aGVs\nbG8=", false).expect("decode"), "hello");
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode("not@@@", false).expect_err("error");
        assert_eq!(err.kind, errors::INVALID_INPUT);
    }

    #[test]
    fn decode_rejects_non_utf8() {
        let encoded = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(decode(&encoded, false).is_err());
    }

    #[test]
    fn call_defaults_to_encode() {
        let result = call(&json!({"text": "hi"}));
        assert_eq!(result["structuredContent"]["result"], json!("aGk="));
    }
}
