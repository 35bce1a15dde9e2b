use crate::config::Settings;
use crate::input::{optional_bool, optional_u64};
use crate::tools::image_output::{deliver, encode, load_image, output_format};
use crate::tools::{ToolError, finish};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use serde_json::{Value, json};

/// Upper bound on either output dimension.
pub const MAX_DIMENSION: u32 = 16_384;

pub fn call(args: &Value, settings: &Settings) -> Value {
    finish(run(args, settings))
}

fn run(args: &Value, settings: &Settings) -> Result<Value, ToolError> {
    let width = dimension(args, "width")?;
    let height = dimension(args, "height")?;
    if width.is_none() && height.is_none() {
        return Err(ToolError::invalid_input("width or height is required"));
    }
    let keep_aspect = optional_bool(args, "keep_aspect", true)?;

    let source = load_image(args, settings)?;
    let format = output_format(args, source.format)?;
    let (original_width, original_height) = source.image.dimensions();
    let (target_width, target_height) = target_size(
        (original_width, original_height),
        width,
        height,
        keep_aspect,
    )?;

    let resized = resize(&source.image, target_width, target_height);
    tracing::debug!(
        source = %source.source,
        from = ?(original_width, original_height),
        to = ?(target_width, target_height),
        "resized image"
    );
    let bytes = encode(&resized, format, None)?;
    deliver(
        args,
        settings,
        &resized,
        format,
        bytes,
        format!(
            "resized {original_width}x{original_height} to {target_width}x{target_height} ({})",
            format.as_str()
        ),
        json!({"original_width": original_width, "original_height": original_height}),
    )
}

fn dimension(args: &Value, key: &str) -> Result<Option<u32>, ToolError> {
    match optional_u64(args, key)? {
        None => Ok(None),
        Some(value) if (1..=u64::from(MAX_DIMENSION)).contains(&value) => Ok(Some(value as u32)),
        Some(_) => Err(ToolError::invalid_input(format!(
            "{key} must be between 1 and {MAX_DIMENSION}"
        ))),
    }
}

/// Resolve the output size. With `keep_aspect`, a missing side is derived from
/// the other, and when both are given the image fits inside the box. A derived
/// side past `MAX_DIMENSION` is an error rather than a distorted image.
pub fn target_size(
    original: (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
    keep_aspect: bool,
) -> Result<(u32, u32), ToolError> {
    let (ow, oh) = (f64::from(original.0), f64::from(original.1));
    let scaled = |value: f64| -> Result<u32, ToolError> {
        let rounded = value.round().max(1.0);
        if rounded > f64::from(MAX_DIMENSION) {
            return Err(ToolError::too_large(format!(
                "keeping the aspect ratio needs a side of {rounded} pixels (max {MAX_DIMENSION})"
            )));
        }
        Ok(rounded as u32)
    };
    let size = match (width, height) {
        (Some(w), Some(h)) if keep_aspect => {
            let ratio = (f64::from(w) / ow).min(f64::from(h) / oh);
            (scaled(ow * ratio)?, scaled(oh * ratio)?)
        }
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) if keep_aspect => (w, scaled(oh * f64::from(w) / ow)?),
        (Some(w), None) => (w, original.1),
        (None, Some(h)) if keep_aspect => (scaled(ow * f64::from(h) / oh)?, h),
        (None, Some(h)) => (original.0, h),
        (None, None) => original,
    };
    Ok(size)
}

pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::image_output::test_support::{decode_result, sample_png_base64};

    #[test]
    fn derives_missing_side() {
        assert_eq!(target_size((400, 200), Some(100), None, true).expect("size"), (100, 50));
        assert_eq!(target_size((400, 200), None, Some(100), true).expect("size"), (200, 100));
        assert_eq!(target_size((400, 200), Some(100), None, false).expect("size"), (100, 200));
    }

    #[test]
    fn fits_inside_box_when_both_given() {
        assert_eq!(
            target_size((400, 200), Some(100), Some(100), true).expect("size"),
            (100, 50)
        );
        assert_eq!(
            target_size((400, 200), Some(100), Some(100), false).expect("size"),
            (100, 100)
        );
    }

    #[test]
    fn never_collapses_to_zero() {
        assert_eq!(target_size((1000, 1), Some(10), None, true).expect("size"), (10, 1));
    }

    #[test]
    fn derived_side_over_limit_is_too_large() {
        let err = target_size((1, 100), Some(MAX_DIMENSION), None, true).expect_err("too large");
        assert_eq!(err.kind, crate::mcp::errors::TOO_LARGE);
        assert_eq!(
            target_size((1, 100), Some(MAX_DIMENSION), None, false).expect("size"),
            (MAX_DIMENSION, 100)
        );
    }

    #[test]
    fn call_reports_too_large_instead_of_distorting() {
        let args = json!({"base64": sample_png_base64(2, 4), "width": 10_000});
        let result = call(&args, &Settings::default());
        assert_eq!(result["isError"], json!(true));
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            json!(crate::mcp::errors::TOO_LARGE)
        );
    }

    #[test]
    fn call_resizes_png() {
        let args = json!({"base64": sample_png_base64(8, 4), "width": 4});
        let result = call(&args, &Settings::default());
        assert_eq!(result["isError"], json!(false), "{result}");
        assert_eq!(result["structuredContent"]["original_width"], json!(8));
        let image = decode_result(&result);
        assert_eq!(image.dimensions(), (4, 2));
    }

    #[test]
    fn requires_a_dimension() {
        let args = json!({"base64": sample_png_base64(2, 2)});
        let result = call(&args, &Settings::default());
        assert_eq!(result["isError"], json!(true));
    }
}
