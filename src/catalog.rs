//! Static tool metadata and the groupings derived from it.
//!
//! The list is the only shared data in the crate. It is defined once and
//! never mutated; ids double as routing keys for the dispatcher.

use crate::dispatch::ToolKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Encoding,
    Developer,
    Security,
    Calculator,
    Converter,
    Design,
    Image,
    Seo,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Text,
        Category::Encoding,
        Category::Developer,
        Category::Security,
        Category::Calculator,
        Category::Converter,
        Category::Design,
        Category::Image,
        Category::Seo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Encoding => "encoding",
            Category::Developer => "developer",
            Category::Security => "security",
            Category::Calculator => "calculator",
            Category::Converter => "converter",
            Category::Design => "design",
            Category::Image => "image",
            Category::Seo => "seo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_popular: bool,
}

impl ToolMeta {
    const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        category: Category,
        icon: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            icon,
            is_new: false,
            is_popular: false,
        }
    }

    const fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    const fn new_tool(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Whether the dispatcher has an implementation for this entry.
    pub fn available(&self) -> bool {
        ToolKind::from_id(self.id).is_some()
    }
}

pub static TOOLS: &[ToolMeta] = &[
    ToolMeta::new(
        "case-converter",
        "Case Converter",
        "Convert text between upper, lower, title, sentence, camel, snake and kebab case.",
        Category::Text,
        "type",
    )
    .popular(),
    ToolMeta::new(
        "word-counter",
        "Word Counter",
        "Count words, characters, sentences and paragraphs, with reading time.",
        Category::Text,
        "file-text",
    )
    .popular(),
    ToolMeta::new(
        "lorem-ipsum-generator",
        "Lorem Ipsum Generator",
        "Generate placeholder paragraphs, sentences or words.",
        Category::Text,
        "align-left",
    ),
    ToolMeta::new(
        "slug-generator",
        "Slug Generator",
        "Turn a title into a URL-friendly slug.",
        Category::Text,
        "link",
    )
    .new_tool(),
    ToolMeta::new(
        "base64-encoder",
        "Base64 Encoder/Decoder",
        "Encode text to Base64 or decode Base64 back to text.",
        Category::Encoding,
        "binary",
    )
    .popular(),
    ToolMeta::new(
        "url-encoder",
        "URL Encoder/Decoder",
        "Percent-encode or decode URL components.",
        Category::Encoding,
        "globe",
    ),
    ToolMeta::new(
        "json-formatter",
        "JSON Formatter",
        "Pretty-print, minify or validate JSON.",
        Category::Developer,
        "braces",
    )
    .popular(),
    ToolMeta::new(
        "hash-generator",
        "Hash Generator",
        "Compute MD5, SHA-1, SHA-256 and SHA-512 digests of text.",
        Category::Developer,
        "hash",
    ),
    ToolMeta::new(
        "uuid-generator",
        "UUID Generator",
        "Generate random version 4 UUIDs.",
        Category::Developer,
        "fingerprint",
    ),
    ToolMeta::new(
        "password-generator",
        "Password Generator",
        "Generate strong random passwords with configurable character sets.",
        Category::Security,
        "key",
    )
    .popular(),
    ToolMeta::new(
        "percentage-calculator",
        "Percentage Calculator",
        "Percent of a value, what percent one value is of another, and percent change.",
        Category::Calculator,
        "percent",
    ),
    ToolMeta::new(
        "bmi-calculator",
        "BMI Calculator",
        "Body mass index from weight and height, metric or imperial.",
        Category::Calculator,
        "activity",
    ),
    ToolMeta::new(
        "age-calculator",
        "Age Calculator",
        "Exact age in years, months and days from a birth date.",
        Category::Calculator,
        "calendar",
    ),
    ToolMeta::new(
        "loan-calculator",
        "Loan Calculator",
        "Monthly payment, total payment and total interest for a fixed-rate loan.",
        Category::Calculator,
        "landmark",
    )
    .new_tool(),
    ToolMeta::new(
        "unit-converter",
        "Unit Converter",
        "Convert length, weight, volume, area, time, data and temperature units.",
        Category::Converter,
        "ruler",
    )
    .popular(),
    ToolMeta::new(
        "color-converter",
        "Color Converter",
        "Convert colors between HEX, RGB and HSL.",
        Category::Design,
        "palette",
    ),
    ToolMeta::new(
        "image-resizer",
        "Image Resizer",
        "Resize images to exact or proportional dimensions.",
        Category::Image,
        "scaling",
    )
    .popular(),
    ToolMeta::new(
        "image-converter",
        "Image Converter",
        "Convert images between PNG, JPEG, GIF, BMP and TIFF.",
        Category::Image,
        "image",
    ),
    ToolMeta::new(
        "image-upscaler",
        "Image Upscaler",
        "Enlarge images 2x, 3x or 4x with Lanczos resampling.",
        Category::Image,
        "maximize",
    )
    .new_tool(),
    ToolMeta::new(
        "image-filters",
        "Image Filters",
        "Apply grayscale, invert, blur, brightness and contrast filters.",
        Category::Image,
        "sliders",
    ),
    ToolMeta::new(
        "background-remover",
        "Background Remover",
        "Remove the background from a photo.",
        Category::Image,
        "eraser",
    ),
    ToolMeta::new(
        "image-to-text",
        "Image to Text (OCR)",
        "Extract text from an image.",
        Category::Image,
        "scan-text",
    ),
    ToolMeta::new(
        "text-to-speech",
        "Text to Speech",
        "Read text aloud.",
        Category::Text,
        "volume-2",
    ),
    ToolMeta::new(
        "backlink-checker",
        "Backlink Checker",
        "List the sites linking to a domain.",
        Category::Seo,
        "link-2",
    ),
    ToolMeta::new(
        "domain-authority-checker",
        "Domain Authority Checker",
        "Estimate the authority score of a domain.",
        Category::Seo,
        "shield",
    ),
    ToolMeta::new(
        "google-index-checker",
        "Google Index Checker",
        "Check whether pages are indexed by Google.",
        Category::Seo,
        "search",
    ),
];

pub fn all() -> &'static [ToolMeta] {
    TOOLS
}

pub fn find(id: &str) -> Option<&'static ToolMeta> {
    TOOLS.iter().find(|tool| tool.id == id)
}

/// Categories with at least one tool, in declaration order.
pub fn categories() -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| TOOLS.iter().any(|tool| tool.category == *category))
        .collect()
}

/// Tools grouped by category; catalog order is kept within each group.
pub fn tools_by_category() -> Vec<(Category, Vec<&'static ToolMeta>)> {
    categories()
        .into_iter()
        .map(|category| {
            let tools = TOOLS
                .iter()
                .filter(|tool| tool.category == category)
                .collect();
            (category, tools)
        })
        .collect()
}
