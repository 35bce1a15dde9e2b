use crate::config::Settings;
use crate::input::{optional_f64, required_str};
use crate::tools::image_output::{deliver, encode, load_image, output_format};
use crate::tools::{ToolError, finish};
use image::DynamicImage;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Grayscale,
    Invert,
    Blur { sigma: f32 },
    Brighten { amount: i32 },
    Contrast { amount: f32 },
}

impl Filter {
    fn from_args(args: &Value) -> Result<Self, ToolError> {
        match required_str(args, "filter")? {
            "grayscale" => Ok(Filter::Grayscale),
            "invert" => Ok(Filter::Invert),
            "blur" => {
                let sigma = optional_f64(args, "sigma")?.unwrap_or(2.0);
                if !(0.1..=50.0).contains(&sigma) {
                    return Err(ToolError::invalid_input("sigma must be between 0.1 and 50"));
                }
                Ok(Filter::Blur {
                    sigma: sigma as f32,
                })
            }
            "brighten" => {
                let amount = optional_f64(args, "amount")?.unwrap_or(20.0);
                if !(-255.0..=255.0).contains(&amount) {
                    return Err(ToolError::invalid_input(
                        "amount must be between -255 and 255",
                    ));
                }
                Ok(Filter::Brighten {
                    amount: amount.round() as i32,
                })
            }
            "contrast" => {
                let amount = optional_f64(args, "amount")?.unwrap_or(20.0);
                if !(-100.0..=100.0).contains(&amount) {
                    return Err(ToolError::invalid_input(
                        "amount must be between -100 and 100",
                    ));
                }
                Ok(Filter::Contrast {
                    amount: amount as f32,
                })
            }
            _ => Err(ToolError::invalid_input(
                "filter must be grayscale, invert, blur, brighten, or contrast",
            )),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Invert => "invert",
            Filter::Blur { .. } => "blur",
            Filter::Brighten { .. } => "brighten",
            Filter::Contrast { .. } => "contrast",
        }
    }
}

pub fn call(args: &Value, settings: &Settings) -> Value {
    finish(run(args, settings))
}

fn run(args: &Value, settings: &Settings) -> Result<Value, ToolError> {
    let filter = Filter::from_args(args)?;
    let source = load_image(args, settings)?;
    let format = output_format(args, source.format)?;

    tracing::debug!(source = %source.source, filter = filter.name(), "applying filter");
    let filtered = apply(source.image, filter);
    let bytes = encode(&filtered, format, None)?;
    deliver(
        args,
        settings,
        &filtered,
        format,
        bytes,
        format!("applied {} filter", filter.name()),
        json!({"filter": filter.name()}),
    )
}

pub fn apply(image: DynamicImage, filter: Filter) -> DynamicImage {
    match filter {
        // Alpha survives: RGBA inputs come back as luma+alpha.
        Filter::Grayscale => image.grayscale(),
        Filter::Invert => {
            let mut image = image;
            image.invert();
            image
        }
        Filter::Blur { sigma } => image.blur(sigma),
        Filter::Brighten { amount } => image.brighten(amount),
        Filter::Contrast { amount } => image.adjust_contrast(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::image_output::test_support::{decode_result, sample_png_base64};
    use image::{GenericImageView, Rgb, RgbImage};

    fn solid(r: u8, g: u8, b: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([r, g, b])))
    }

    #[test]
    fn invert_flips_channels() {
        let inverted = apply(solid(10, 20, 30), Filter::Invert);
        assert_eq!(inverted.to_rgb8().get_pixel(0, 0), &Rgb([245, 235, 225]));
    }

    #[test]
    fn grayscale_equalizes_channels() {
        let gray = apply(solid(200, 50, 50), Filter::Grayscale).to_rgb8();
        let pixel = gray.get_pixel(1, 1);
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }

    #[test]
    fn brighten_saturates() {
        let bright = apply(solid(250, 0, 100), Filter::Brighten { amount: 10 });
        assert_eq!(bright.to_rgb8().get_pixel(0, 0), &Rgb([255, 10, 110]));
    }

    #[test]
    fn filter_arguments_are_validated() {
        assert!(Filter::from_args(&json!({"filter": "blur", "sigma": 0})).is_err());
        assert!(Filter::from_args(&json!({"filter": "brighten", "amount": 300})).is_err());
        assert!(Filter::from_args(&json!({"filter": "sepia"})).is_err());
        assert_eq!(
            Filter::from_args(&json!({"filter": "blur"})).expect("blur"),
            Filter::Blur { sigma: 2.0 }
        );
    }

    #[test]
    fn call_keeps_dimensions_and_alpha() {
        let args = json!({"base64": sample_png_base64(4, 2), "filter": "grayscale"});
        let result = call(&args, &Settings::default());
        assert_eq!(result["isError"], json!(false), "{result}");
        let image = decode_result(&result);
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(image.to_rgba8().get_pixel(3, 0)[3], 0);
    }

    #[test]
    fn grayscale_output_converts_to_palette_and_tiff_targets() {
        for to in ["gif", "tiff", "bmp", "jpeg"] {
            let args = json!({"base64": sample_png_base64(4, 2), "filter": "grayscale", "to": to});
            let result = call(&args, &Settings::default());
            assert_eq!(result["isError"], json!(false), "{to}: {result}");
            assert_eq!(result["structuredContent"]["format"], json!(to));
            assert_eq!(decode_result(&result).dimensions(), (4, 2));
        }
    }
}
