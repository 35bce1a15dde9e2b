use crate::input::{optional_bool, optional_str, required_str};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let form = optional_bool(args, "form", false)?;
    let (mode, result) = match optional_str(args, "mode")?.unwrap_or("encode") {
        "encode" => ("encode", encode_component(text, form)),
        "decode" => ("decode", decode_component(text, form)?),
        _ => return Err(ToolError::invalid_input("mode must be encode or decode")),
    };
    Ok(success_result(
        result.clone(),
        json!({"mode": mode, "form": form, "result": result}),
    ))
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
/// With `form`, spaces become `+` as in `application/x-www-form-urlencoded`.
pub fn encode_component(text: &str, form: bool) -> String {
    let mut output = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_unreserved(byte) {
            output.push(byte as char);
        } else if form && byte == b' ' {
            output.push('+');
        } else {
            output.push('%');
            output.push(HEX[(byte >> 4) as usize] as char);
            output.push(HEX[(byte & 0x0f) as usize] as char);
        }
    }
    output
}

pub fn decode_component(text: &str, form: bool) -> Result<String, ToolError> {
    let bytes = text.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'%' => {
                let high = bytes.get(index + 1).and_then(|b| hex_value(*b));
                let low = bytes.get(index + 2).and_then(|b| hex_value(*b));
                let (Some(high), Some(low)) = (high, low) else {
                    return Err(ToolError::invalid_input(format!(
                        "malformed percent escape at byte {index}"
                    )));
                };
                output.push((high << 4) | low);
                index += 3;
            }
            b'+' if form => {
                output.push(b' ');
                index += 1;
            }
            other => {
                output.push(other);
                index += 1;
            }
        }
    }
    String::from_utf8(output)
        .map_err(|_| ToolError::invalid_input("decoded bytes are not valid UTF-8"))
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
