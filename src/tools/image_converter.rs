use crate::config::Settings;
use crate::input::{optional_str, optional_u64};
use crate::tools::image_output::{OutputFormat, deliver, encode, load_image};
use crate::tools::{ToolError, finish};
use serde_json::{Value, json};

pub fn call(args: &Value, settings: &Settings) -> Value {
    finish(run(args, settings))
}

fn run(args: &Value, settings: &Settings) -> Result<Value, ToolError> {
    let to = optional_str(args, "to")?.ok_or_else(|| ToolError::invalid_input("to is required"))?;
    let format = OutputFormat::parse(to)?;
    let quality = match optional_u64(args, "quality")? {
        None => None,
        Some(value @ 1..=100) => Some(value as u8),
        Some(_) => return Err(ToolError::invalid_input("quality must be between 1 and 100")),
    };

    let source = load_image(args, settings)?;
    let from = source.format.map(OutputFormat::as_str).unwrap_or("unknown");
    tracing::debug!(source = %source.source, from, to = format.as_str(), "converting image");

    let bytes = encode(&source.image, format, quality)?;
    let mut details = json!({"from": from});
    if let (Some(quality), OutputFormat::Jpeg, Some(obj)) =
        (quality, format, details.as_object_mut())
    {
        obj.insert("quality".to_string(), json!(quality));
    }
    let summary = format!("converted {from} to {} ({} bytes)", format.as_str(), bytes.len());
    deliver(args, settings, &source.image, format, bytes, summary, details)
}
