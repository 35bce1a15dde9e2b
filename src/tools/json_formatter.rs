use crate::input::{optional_str, required_str};
use crate::tools::{ToolError, finish, success_result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Two,
    Four,
    Tab,
}

impl Indent {
    /// Accepts `2`, `4` or `"tab"`, as numbers or strings.
    fn from_args(args: &Value) -> Result<Self, ToolError> {
        let invalid = || ToolError::invalid_input("indent must be 2, 4, or tab");
        match args.get("indent") {
            None | Some(Value::Null) => Ok(Indent::Two),
            Some(Value::Number(number)) => match number.as_u64() {
                Some(2) => Ok(Indent::Two),
                Some(4) => Ok(Indent::Four),
                _ => Err(invalid()),
            },
            Some(Value::String(value)) => match value.trim() {
                "2" => Ok(Indent::Two),
                "4" => Ok(Indent::Four),
                "tab" => Ok(Indent::Tab),
                _ => Err(invalid()),
            },
            Some(_) => Err(invalid()),
        }
    }

    fn bytes(self) -> &'static [u8] {
        match self {
            Indent::Two => b"  ",
            Indent::Four => b"    ",
            Indent::Tab => b"\t",
        }
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let indent = Indent::from_args(args)?;

    match optional_str(args, "mode")?.unwrap_or("format") {
        "format" => {
            let formatted = format(text, indent)?;
            Ok(success_result(
                formatted.clone(),
                json!({"mode": "format", "result": formatted}),
            ))
        }
        "minify" => {
            let minified = minify(text)?;
            Ok(success_result(
                minified.clone(),
                json!({"mode": "minify", "result": minified}),
            ))
        }
        "validate" => Ok(match parse(text) {
            Ok(value) => success_result(
                "valid JSON",
                json!({"mode": "validate", "valid": true, "type": type_name(&value)}),
            ),
            Err(err) => success_result(
                format!("invalid JSON: {}", err.message),
                json!({"mode": "validate", "valid": false, "error": err.message}),
            ),
        }),
        _ => Err(ToolError::invalid_input(
            "mode must be format, minify, or validate",
        )),
    }
}

fn parse(text: &str) -> Result<Value, ToolError> {
    serde_json::from_str(text).map_err(|err| {
        ToolError::invalid_input(format!(
            "invalid JSON at line {}, column {}: {err}",
            err.line(),
            err.column()
        ))
    })
}

pub fn format(text: &str, indent: Indent) -> Result<String, ToolError> {
    let value = parse(text)?;
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| ToolError::internal(err.to_string()))?;
    String::from_utf8(buffer).map_err(|err| ToolError::internal(err.to_string()))
}

pub fn minify(text: &str) -> Result<String, ToolError> {
    let value = parse(text)?;
    serde_json::to_string(&value).map_err(|err| ToolError::internal(err.to_string()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
