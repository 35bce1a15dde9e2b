//! Routes a tool id to its implementation.

use crate::catalog;
use crate::config::Settings;
use crate::mcp::contracts;
use crate::tools;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    CaseConverter,
    WordCounter,
    LoremIpsum,
    SlugGenerator,
    Base64Encoder,
    UrlEncoder,
    JsonFormatter,
    HashGenerator,
    UuidGenerator,
    PasswordGenerator,
    PercentageCalculator,
    BmiCalculator,
    AgeCalculator,
    LoanCalculator,
    UnitConverter,
    ColorConverter,
    ImageResizer,
    ImageConverter,
    ImageUpscaler,
    ImageFilters,
}

impl ToolKind {
    pub const ALL: [ToolKind; 20] = [
        ToolKind::CaseConverter,
        ToolKind::WordCounter,
        ToolKind::LoremIpsum,
        ToolKind::SlugGenerator,
        ToolKind::Base64Encoder,
        ToolKind::UrlEncoder,
        ToolKind::JsonFormatter,
        ToolKind::HashGenerator,
        ToolKind::UuidGenerator,
        ToolKind::PasswordGenerator,
        ToolKind::PercentageCalculator,
        ToolKind::BmiCalculator,
        ToolKind::AgeCalculator,
        ToolKind::LoanCalculator,
        ToolKind::UnitConverter,
        ToolKind::ColorConverter,
        ToolKind::ImageResizer,
        ToolKind::ImageConverter,
        ToolKind::ImageUpscaler,
        ToolKind::ImageFilters,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ToolKind::CaseConverter => contracts::TOOL_CASE_CONVERTER,
            ToolKind::WordCounter => contracts::TOOL_WORD_COUNTER,
            ToolKind::LoremIpsum => contracts::TOOL_LOREM_IPSUM,
            ToolKind::SlugGenerator => contracts::TOOL_SLUG_GENERATOR,
            ToolKind::Base64Encoder => contracts::TOOL_BASE64_ENCODER,
            ToolKind::UrlEncoder => contracts::TOOL_URL_ENCODER,
            ToolKind::JsonFormatter => contracts::TOOL_JSON_FORMATTER,
            ToolKind::HashGenerator => contracts::TOOL_HASH_GENERATOR,
            ToolKind::UuidGenerator => contracts::TOOL_UUID_GENERATOR,
            ToolKind::PasswordGenerator => contracts::TOOL_PASSWORD_GENERATOR,
            ToolKind::PercentageCalculator => contracts::TOOL_PERCENTAGE_CALCULATOR,
            ToolKind::BmiCalculator => contracts::TOOL_BMI_CALCULATOR,
            ToolKind::AgeCalculator => contracts::TOOL_AGE_CALCULATOR,
            ToolKind::LoanCalculator => contracts::TOOL_LOAN_CALCULATOR,
            ToolKind::UnitConverter => contracts::TOOL_UNIT_CONVERTER,
            ToolKind::ColorConverter => contracts::TOOL_COLOR_CONVERTER,
            ToolKind::ImageResizer => contracts::TOOL_IMAGE_RESIZER,
            ToolKind::ImageConverter => contracts::TOOL_IMAGE_CONVERTER,
            ToolKind::ImageUpscaler => contracts::TOOL_IMAGE_UPSCALER,
            ToolKind::ImageFilters => contracts::TOOL_IMAGE_FILTERS,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn input_schema(self) -> Value {
        match self {
            ToolKind::CaseConverter => contracts::case_converter_schema(),
            ToolKind::WordCounter => contracts::word_counter_schema(),
            ToolKind::LoremIpsum => contracts::lorem_ipsum_schema(),
            ToolKind::SlugGenerator => contracts::slug_generator_schema(),
            ToolKind::Base64Encoder => contracts::base64_encoder_schema(),
            ToolKind::UrlEncoder => contracts::url_encoder_schema(),
            ToolKind::JsonFormatter => contracts::json_formatter_schema(),
            ToolKind::HashGenerator => contracts::hash_generator_schema(),
            ToolKind::UuidGenerator => contracts::uuid_generator_schema(),
            ToolKind::PasswordGenerator => contracts::password_generator_schema(),
            ToolKind::PercentageCalculator => contracts::percentage_calculator_schema(),
            ToolKind::BmiCalculator => contracts::bmi_calculator_schema(),
            ToolKind::AgeCalculator => contracts::age_calculator_schema(),
            ToolKind::LoanCalculator => contracts::loan_calculator_schema(),
            ToolKind::UnitConverter => contracts::unit_converter_schema(),
            ToolKind::ColorConverter => contracts::color_converter_schema(),
            ToolKind::ImageResizer => contracts::image_resizer_schema(),
            ToolKind::ImageConverter => contracts::image_converter_schema(),
            ToolKind::ImageUpscaler => contracts::image_upscaler_schema(),
            ToolKind::ImageFilters => contracts::image_filters_schema(),
        }
    }

    pub fn call(self, args: &Value, settings: &Settings) -> Value {
        match self {
            ToolKind::CaseConverter => tools::case_converter::call(args),
            ToolKind::WordCounter => tools::word_counter::call(args),
            ToolKind::LoremIpsum => tools::lorem_ipsum::call(args),
            ToolKind::SlugGenerator => tools::slug_generator::call(args),
            ToolKind::Base64Encoder => tools::base64_encoder::call(args),
            ToolKind::UrlEncoder => tools::url_encoder::call(args),
            ToolKind::JsonFormatter => tools::json_formatter::call(args),
            ToolKind::HashGenerator => tools::hash_generator::call(args),
            ToolKind::UuidGenerator => tools::uuid_generator::call(args),
            ToolKind::PasswordGenerator => tools::password_generator::call(args),
            ToolKind::PercentageCalculator => tools::percentage_calculator::call(args),
            ToolKind::BmiCalculator => tools::bmi_calculator::call(args),
            ToolKind::AgeCalculator => tools::age_calculator::call(args),
            ToolKind::LoanCalculator => tools::loan_calculator::call(args),
            ToolKind::UnitConverter => tools::unit_converter::call(args),
            ToolKind::ColorConverter => tools::color_converter::call(args),
            ToolKind::ImageResizer => tools::image_resizer::call(args, settings),
            ToolKind::ImageConverter => tools::image_converter::call(args, settings),
            ToolKind::ImageUpscaler => tools::image_upscaler::call(args, settings),
            ToolKind::ImageFilters => tools::image_filters::call(args, settings),
        }
    }
}

/// Run the tool registered under `id`, or return the placeholder result.
pub fn dispatch(id: &str, args: &Value, settings: &Settings) -> Value {
    match ToolKind::from_id(id) {
        Some(kind) => {
            tracing::debug!(tool = id, "dispatching tool call");
            kind.call(args, settings)
        }
        None => {
            tracing::info!(tool = id, "no implementation for tool id");
            placeholder(id)
        }
    }
}

/// Non-error result for ids with no implementation.
pub fn placeholder(id: &str) -> Value {
    let title = catalog::find(id).map(|meta| meta.title);
    let mut structured = json!({
        "status": "under_development",
        "id": id,
    });
    if let Some(title) = title
        && let Some(obj) = structured.as_object_mut()
    {
        obj.insert("title".to_string(), json!(title));
    }
    let label = title.unwrap_or(id);
    tools::success_result(format!("{label} is under development"), structured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_runs_that_tool() {
        let result = dispatch(
            "case-converter",
            &json!({"text": "abc", "mode": "upper"}),
            &Settings::default(),
        );
        assert_eq!(result["isError"], json!(false));
        assert_eq!(result["structuredContent"]["result"], json!("ABC"));
    }

    #[test]
    fn unknown_id_is_placeholder_not_error() {
        let result = dispatch("does-not-exist", &json!({}), &Settings::default());
        assert_eq!(result["isError"], json!(false));
        assert_eq!(result["structuredContent"]["status"], json!("under_development"));
        assert!(result["structuredContent"].get("title").is_none());
    }

    #[test]
    fn catalog_only_id_gets_titled_placeholder() {
        let result = dispatch("backlink-checker", &json!({}), &Settings::default());
        assert_eq!(result["structuredContent"]["title"], json!("Backlink Checker"));
        assert_eq!(
            result["content"][0]["text"],
            json!("Backlink Checker is under development")
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(ToolKind::from_id("word-counter"), Some(ToolKind::WordCounter));
        assert_eq!(ToolKind::from_id("Word-Counter"), None);
        assert_eq!(ToolKind::from_id(" word-counter"), None);
    }

    #[test]
    fn ids_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_id(kind.id()), Some(kind));
            assert_eq!(kind.input_schema()["type"], json!("object"));
        }
    }
}
