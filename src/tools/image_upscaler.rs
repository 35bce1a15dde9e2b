use crate::config::Settings;
use crate::input::optional_u64;
use crate::tools::image_output::{deliver, encode, load_image, output_format};
use crate::tools::image_resizer::{MAX_DIMENSION, resize};
use crate::tools::{ToolError, finish};
use image::GenericImageView;
use serde_json::{Value, json};

pub fn call(args: &Value, settings: &Settings) -> Value {
    finish(run(args, settings))
}

fn run(args: &Value, settings: &Settings) -> Result<Value, ToolError> {
    let scale = match optional_u64(args, "scale")?.unwrap_or(2) {
        value @ 2..=4 => value as u32,
        _ => return Err(ToolError::invalid_input("scale must be 2, 3, or 4")),
    };

    let source = load_image(args, settings)?;
    let format = output_format(args, source.format)?;
    let (width, height) = source.image.dimensions();
    let (target_width, target_height) = scaled_size(width, height, scale)?;

    tracing::debug!(source = %source.source, scale, "upscaling image");
    let upscaled = resize(&source.image, target_width, target_height);
    let bytes = encode(&upscaled, format, None)?;
    deliver(
        args,
        settings,
        &upscaled,
        format,
        bytes,
        format!("upscaled {width}x{height} by {scale}x to {target_width}x{target_height}"),
        json!({"scale": scale, "original_width": width, "original_height": height}),
    )
}

pub fn scaled_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32), ToolError> {
    let target_width = width.saturating_mul(scale);
    let target_height = height.saturating_mul(scale);
    if target_width > MAX_DIMENSION || target_height > MAX_DIMENSION {
        return Err(ToolError::too_large(format!(
            "upscaled size {target_width}x{target_height} exceeds {MAX_DIMENSION} pixels per side"
        )));
    }
    Ok((target_width, target_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::errors;
    use crate::tools::image_output::test_support::{decode_result, sample_png_base64};

    #[test]
    fn doubles_by_default() {
        let args = json!({"base64": sample_png_base64(5, 3)});
        let result = call(&args, &Settings::default());
        assert_eq!(result["isError"], json!(false), "{result}");
        assert_eq!(decode_result(&result).dimensions(), (10, 6));
    }

    #[test]
    fn honours_scale_argument() {
        let args = json!({"base64": sample_png_base64(2, 2), "scale": "4"});
        let result = call(&args, &Settings::default());
        assert_eq!(decode_result(&result).dimensions(), (8, 8));
    }

    #[test]
    fn rejects_other_scales() {
        let args = json!({"base64": sample_png_base64(2, 2), "scale": 8});
        let result = call(&args, &Settings::default());
        assert_eq!(result["isError"], json!(true));
    }

    #[test]
    fn refuses_oversized_output() {
        let err = scaled_size(10_000, 10, 2).expect_err("too large");
        assert_eq!(err.kind, errors::TOO_LARGE);
    }
}
