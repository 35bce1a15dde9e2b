//! Decode, encode and deliver images for the image tools.
//!
//! Results are returned inline as base64 unless `output_path` is given, in
//! which case the bytes are written there and a `resource_link` is returned.

use crate::config::Settings;
use crate::input::{InputPayload, load_input, optional_str};
use crate::tools::{ToolError, success_result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use serde_json::{Value, json};
use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;

const DEFAULT_JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ToolError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            "bmp" => Ok(OutputFormat::Bmp),
            "tiff" | "tif" => Ok(OutputFormat::Tiff),
            _ => Err(ToolError::unsupported_format(
                "to must be png, jpeg, gif, bmp, or tiff",
            )),
        }
    }

    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(OutputFormat::Png),
            ImageFormat::Jpeg => Some(OutputFormat::Jpeg),
            ImageFormat::Gif => Some(OutputFormat::Gif),
            ImageFormat::Bmp => Some(OutputFormat::Bmp),
            ImageFormat::Tiff => Some(OutputFormat::Tiff),
            _ => None,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tiff => ImageFormat::Tiff,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Gif => "gif",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Gif => "image/gif",
            OutputFormat::Bmp => "image/bmp",
            OutputFormat::Tiff => "image/tiff",
        }
    }
}

/// A decoded input image and where it came from.
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: Option<OutputFormat>,
    pub source: String,
}

pub fn load_image(args: &Value, settings: &Settings) -> Result<SourceImage, ToolError> {
    let InputPayload { bytes, source } = load_input(args, settings)?;
    let detected = image::guess_format(&bytes)
        .map_err(|_| ToolError::unsupported_format("input is not a recognized image format"))?;
    let image = image::load_from_memory_with_format(&bytes, detected)
        .map_err(|err| ToolError::invalid_input(format!("failed to decode image: {err}")))?;
    tracing::debug!(
        source = %source,
        width = image.width(),
        height = image.height(),
        "decoded input image"
    );
    Ok(SourceImage {
        image,
        format: OutputFormat::from_image_format(detected),
        source,
    })
}

/// Output format from `to`, else the input's format, else PNG.
pub fn output_format(args: &Value, input: Option<OutputFormat>) -> Result<OutputFormat, ToolError> {
    match optional_str(args, "to")? {
        Some(value) => OutputFormat::parse(value),
        None => Ok(input.unwrap_or(OutputFormat::Png)),
    }
}

/// Convert `image` to a colour type the target encoder accepts.
pub fn normalize_for(image: &DynamicImage, format: OutputFormat) -> Cow<'_, DynamicImage> {
    use DynamicImage::*;
    match (format, image) {
        // JPEG has no alpha channel.
        (OutputFormat::Jpeg, ImageRgb8(_) | ImageLuma8(_)) => Cow::Borrowed(image),
        (OutputFormat::Jpeg, _) => Cow::Owned(ImageRgb8(image.to_rgb8())),
        (OutputFormat::Gif | OutputFormat::Bmp, ImageRgb8(_) | ImageRgba8(_)) => {
            Cow::Borrowed(image)
        }
        (OutputFormat::Gif | OutputFormat::Bmp, _) => Cow::Owned(ImageRgba8(image.to_rgba8())),
        (
            OutputFormat::Png | OutputFormat::Tiff,
            ImageLuma8(_) | ImageRgb8(_) | ImageRgba8(_) | ImageLuma16(_) | ImageRgb16(_)
            | ImageRgba16(_),
        ) => Cow::Borrowed(image),
        (OutputFormat::Png, ImageLumaA8(_) | ImageLumaA16(_)) => Cow::Borrowed(image),
        (_, ImageLumaA8(_)) => Cow::Owned(ImageRgba8(image.to_rgba8())),
        // Gray+alpha 16-bit on TIFF, and float images everywhere.
        _ => Cow::Owned(ImageRgba16(image.to_rgba16())),
    }
}

pub fn encode(
    image: &DynamicImage,
    format: OutputFormat,
    jpeg_quality: Option<u8>,
) -> Result<Vec<u8>, ToolError> {
    let mut buffer = Cursor::new(Vec::new());
    let encode_error = |err: image::ImageError| {
        ToolError::internal(format!("failed to encode {}: {err}", format.as_str()))
    };
    let image = normalize_for(image, format);
    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(
                &mut buffer,
                jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY),
            );
            image.write_with_encoder(encoder).map_err(encode_error)?;
        }
        _ => image
            .write_to(&mut buffer, format.image_format())
            .map_err(encode_error)?,
    }
    Ok(buffer.into_inner())
}

/// Deliver encoded bytes inline or to `output_path`, merging `details` into
/// the structured content.
pub fn deliver(
    args: &Value,
    settings: &Settings,
    image: &DynamicImage,
    format: OutputFormat,
    bytes: Vec<u8>,
    summary: String,
    details: Value,
) -> Result<Value, ToolError> {
    let bytes_len = bytes.len() as u64;
    let mut structured = json!({
        "format": format.as_str(),
        "mime_type": format.mime_type(),
        "width": image.width(),
        "height": image.height(),
        "bytes_len": bytes_len,
    });
    if let (Some(obj), Some(extra)) = (structured.as_object_mut(), details.as_object()) {
        for (key, value) in extra {
            obj.insert(key.clone(), value.clone());
        }
    }

    match parse_output_path(args)? {
        Some(path) => {
            let output = write_output(&path, &bytes, format)?;
            if let Some(obj) = structured.as_object_mut() {
                obj.insert("path".to_string(), json!(output.path));
                obj.insert("uri".to_string(), json!(output.uri));
            }
            let mut content = vec![json!({"type": "text", "text": summary})];
            content.extend(output.content);
            Ok(json!({
                "content": content,
                "structuredContent": structured,
                "isError": false
            }))
        }
        None => {
            let max = settings.max_output_bytes;
            if bytes_len > max {
                return Err(ToolError::too_large(format!(
                    "output exceeds limit: {bytes_len} bytes (max {max})"
                )));
            }
            if let Some(obj) = structured.as_object_mut() {
                obj.insert("base64".to_string(), json!(STANDARD.encode(&bytes)));
            }
            Ok(success_result(summary, structured))
        }
    }
}

struct OutputResource {
    path: String,
    uri: String,
    content: Vec<Value>,
}

fn parse_output_path(args: &Value) -> Result<Option<String>, ToolError> {
    let Some(path) = optional_str(args, "output_path")? else {
        return Ok(None);
    };
    if path.trim().is_empty() {
        return Err(ToolError::invalid_input("output_path must not be empty"));
    }
    Ok(Some(path.to_string()))
}

fn write_output(path: &str, bytes: &[u8], format: OutputFormat) -> Result<OutputResource, ToolError> {
    fs::write(path, bytes)
        .map_err(|err| ToolError::internal(format!("failed to write output: {err}")))?;
    tracing::info!(path, bytes = bytes.len(), "wrote image output");

    let uri = format!("file://{path}");
    let name = Path::new(path)
        .file_name()
        .and_then(|value| value.to_str())
        .unwrap_or("image");

    let content = vec![
        json!({
            "type": "text",
            "text": format!("output written to {path}")
        }),
        json!({
            "type": "resource_link",
            "uri": uri,
            "name": name,
            "mimeType": format.mime_type()
        }),
    ];

    Ok(OutputResource {
        path: path.to_string(),
        uri,
        content,
    })
}
