use serde_json::{Value, json};

pub const TOOL_CASE_CONVERTER: &str = "case-converter";
pub const TOOL_WORD_COUNTER: &str = "word-counter";
pub const TOOL_LOREM_IPSUM: &str = "lorem-ipsum-generator";
pub const TOOL_SLUG_GENERATOR: &str = "slug-generator";
pub const TOOL_BASE64_ENCODER: &str = "base64-encoder";
pub const TOOL_URL_ENCODER: &str = "url-encoder";
pub const TOOL_JSON_FORMATTER: &str = "json-formatter";
pub const TOOL_HASH_GENERATOR: &str = "hash-generator";
pub const TOOL_UUID_GENERATOR: &str = "uuid-generator";
pub const TOOL_PASSWORD_GENERATOR: &str = "password-generator";
pub const TOOL_PERCENTAGE_CALCULATOR: &str = "percentage-calculator";
pub const TOOL_BMI_CALCULATOR: &str = "bmi-calculator";
pub const TOOL_AGE_CALCULATOR: &str = "age-calculator";
pub const TOOL_LOAN_CALCULATOR: &str = "loan-calculator";
pub const TOOL_UNIT_CONVERTER: &str = "unit-converter";
pub const TOOL_COLOR_CONVERTER: &str = "color-converter";
pub const TOOL_IMAGE_RESIZER: &str = "image-resizer";
pub const TOOL_IMAGE_CONVERTER: &str = "image-converter";
pub const TOOL_IMAGE_UPSCALER: &str = "image-upscaler";
pub const TOOL_IMAGE_FILTERS: &str = "image-filters";

pub const PROTOCOL_VERSION: &str = "2025-11-25";

const IMAGE_FORMATS: [&str; 5] = ["png", "jpeg", "gif", "bmp", "tiff"];

fn number() -> Value {
    json!({ "type": ["number", "string"] })
}

/// Shared input/output properties for the image tools.
fn image_schema(extra: Value, required: &[&str]) -> Value {
    let mut properties = json!({
        "path": { "type": "string" },
        "base64": { "type": "string" },
        "to": { "type": "string", "enum": IMAGE_FORMATS },
        "output_path": { "type": "string" }
    });
    if let (Some(props), Some(extra)) = (properties.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            props.insert(key.clone(), value.clone());
        }
    }
    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "oneOf": [
            { "required": ["path"] },
            { "required": ["base64"] }
        ],
        "additionalProperties": false
    });
    if !required.is_empty()
        && let Some(obj) = schema.as_object_mut()
    {
        obj.insert("required".to_string(), json!(required));
    }
    schema
}

pub fn case_converter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "mode": {
                "type": "string",
                "enum": [
                    "upper", "lower", "title", "sentence", "camel", "pascal",
                    "snake", "kebab", "constant", "toggle", "alternating"
                ]
            }
        },
        "required": ["text", "mode"],
        "additionalProperties": false
    })
}

pub fn word_counter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn lorem_ipsum_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "count": { "type": ["integer", "string"], "minimum": 1, "maximum": 100 },
            "unit": { "type": "string", "enum": ["paragraphs", "sentences", "words"] },
            "start_with_lorem": { "type": ["boolean", "string"] }
        },
        "additionalProperties": false
    })
}

pub fn slug_generator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "separator": { "type": "string", "enum": ["-", "_", "."] },
            "max_length": { "type": ["integer", "string"], "minimum": 1 }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn base64_encoder_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "mode": { "type": "string", "enum": ["encode", "decode"] },
            "url_safe": { "type": ["boolean", "string"] }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn url_encoder_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "mode": { "type": "string", "enum": ["encode", "decode"] },
            "form": { "type": ["boolean", "string"] }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn json_formatter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "mode": { "type": "string", "enum": ["format", "minify", "validate"] },
            "indent": { "type": ["integer", "string"], "enum": [2, 4, "2", "4", "tab"] }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn hash_generator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "algorithm": {
                "type": "string",
                "enum": ["md5", "sha1", "sha256", "sha512", "all"]
            }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn uuid_generator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "count": { "type": ["integer", "string"], "minimum": 1, "maximum": 100 },
            "uppercase": { "type": ["boolean", "string"] },
            "hyphens": { "type": ["boolean", "string"] }
        },
        "additionalProperties": false
    })
}

pub fn password_generator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "length": { "type": ["integer", "string"], "minimum": 4, "maximum": 128 },
            "count": { "type": ["integer", "string"], "minimum": 1, "maximum": 50 },
            "uppercase": { "type": ["boolean", "string"] },
            "lowercase": { "type": ["boolean", "string"] },
            "numbers": { "type": ["boolean", "string"] },
            "symbols": { "type": ["boolean", "string"] },
            "exclude_ambiguous": { "type": ["boolean", "string"] }
        },
        "additionalProperties": false
    })
}

pub fn percentage_calculator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "mode": { "type": "string", "enum": ["of", "what_percent", "change"] },
            "value": number(),
            "percent": number(),
            "part": number(),
            "whole": number(),
            "from": number(),
            "to": number()
        },
        "required": ["mode"],
        "additionalProperties": false
    })
}

pub fn bmi_calculator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "weight": number(),
            "height": number(),
            "units": { "type": "string", "enum": ["metric", "imperial"] }
        },
        "required": ["weight", "height"],
        "additionalProperties": false
    })
}

pub fn age_calculator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "birth_date": { "type": "string", "format": "date" },
            "as_of": { "type": "string", "format": "date" }
        },
        "required": ["birth_date"],
        "additionalProperties": false
    })
}

pub fn loan_calculator_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "principal": number(),
            "annual_rate": number(),
            "years": number()
        },
        "required": ["principal", "annual_rate", "years"],
        "additionalProperties": false
    })
}

pub fn unit_converter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": {
                "type": "string",
                "enum": ["length", "weight", "volume", "area", "time", "data", "temperature"]
            },
            "value": number(),
            "from": { "type": "string" },
            "to": { "type": "string" }
        },
        "required": ["category", "value", "from", "to"],
        "additionalProperties": false
    })
}

pub fn color_converter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "color": { "type": "string" }
        },
        "required": ["color"],
        "additionalProperties": false
    })
}

pub fn image_resizer_schema() -> Value {
    image_schema(
        json!({
            "width": { "type": ["integer", "string"], "minimum": 1 },
            "height": { "type": ["integer", "string"], "minimum": 1 },
            "keep_aspect": { "type": ["boolean", "string"] }
        }),
        &[],
    )
}

pub fn image_converter_schema() -> Value {
    image_schema(
        json!({
            "quality": { "type": ["integer", "string"], "minimum": 1, "maximum": 100 }
        }),
        &["to"],
    )
}

pub fn image_upscaler_schema() -> Value {
    image_schema(
        json!({
            "scale": { "type": ["integer", "string"], "enum": [2, 3, 4, "2", "3", "4"] }
        }),
        &[],
    )
}

pub fn image_filters_schema() -> Value {
    image_schema(
        json!({
            "filter": {
                "type": "string",
                "enum": ["grayscale", "invert", "blur", "brighten", "contrast"]
            },
            "sigma": number(),
            "amount": number()
        }),
        &["filter"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_schema_merges_extra_properties() {
        let schema = image_filters_schema();
        let props = schema["properties"].as_object().expect("properties");
        assert!(props.contains_key("filter"));
        assert!(props.contains_key("base64"));
        assert_eq!(schema["required"], json!(["filter"]));
    }

    #[test]
    fn image_schema_without_required_fields() {
        let schema = image_resizer_schema();
        assert!(schema.get("required").is_none());
    }
}
