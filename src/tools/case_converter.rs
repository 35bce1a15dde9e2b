use crate::input::required_str;
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
    Toggle,
    Alternating,
}

impl CaseMode {
    fn parse(value: &str) -> Result<Self, ToolError> {
        match value {
            "upper" => Ok(CaseMode::Upper),
            "lower" => Ok(CaseMode::Lower),
            "title" => Ok(CaseMode::Title),
            "sentence" => Ok(CaseMode::Sentence),
            "camel" => Ok(CaseMode::Camel),
            "pascal" => Ok(CaseMode::Pascal),
            "snake" => Ok(CaseMode::Snake),
            "kebab" => Ok(CaseMode::Kebab),
            "constant" => Ok(CaseMode::Constant),
            "toggle" => Ok(CaseMode::Toggle),
            "alternating" => Ok(CaseMode::Alternating),
            _ => Err(ToolError::invalid_input(
                "mode must be upper, lower, title, sentence, camel, pascal, snake, kebab, constant, toggle, or alternating",
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Title => "title",
            CaseMode::Sentence => "sentence",
            CaseMode::Camel => "camel",
            CaseMode::Pascal => "pascal",
            CaseMode::Snake => "snake",
            CaseMode::Kebab => "kebab",
            CaseMode::Constant => "constant",
            CaseMode::Toggle => "toggle",
            CaseMode::Alternating => "alternating",
        }
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let mode = CaseMode::parse(required_str(args, "mode")?)?;
    let result = convert(text, mode);
    Ok(success_result(
        result.clone(),
        json!({"mode": mode.as_str(), "result": result}),
    ))
}

pub fn convert(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => to_upper(text),
        CaseMode::Lower => text.to_lowercase(),
        CaseMode::Title => to_title(text),
        CaseMode::Sentence => to_sentence(text),
        CaseMode::Camel => to_camel(text, false),
        CaseMode::Pascal => to_camel(text, true),
        CaseMode::Snake => join_words(text, "_").to_lowercase(),
        CaseMode::Kebab => join_words(text, "-").to_lowercase(),
        CaseMode::Constant => join_words(text, "_").to_uppercase(),
        CaseMode::Toggle => toggle(text),
        CaseMode::Alternating => alternating(text),
    }
}

pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Capitalize each whitespace-separated word, keeping the original spacing.
fn to_title(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            output.push(ch);
        } else if at_word_start {
            output.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            output.extend(ch.to_lowercase());
        }
    }
    output
}

/// Lowercase everything, then capitalize the first letter of each sentence.
fn to_sentence(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for ch in text.chars() {
        if capitalize_next && ch.is_alphabetic() {
            output.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            output.extend(ch.to_lowercase());
        }
        if matches!(ch, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }
    output
}

/// Split on non-alphanumerics and lower-to-upper case boundaries.
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in text.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join_words(text: &str, separator: &str) -> String {
    split_words(text).join(separator)
}

fn to_camel(text: &str, upper_first: bool) -> String {
    split_words(text)
        .iter()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 && !upper_first {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn toggle(text: &str) -> String {
    text.chars()
        .flat_map(|ch| {
            if ch.is_uppercase() {
                ch.to_lowercase().collect::<Vec<_>>()
            } else {
                ch.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Alternate lower/upper across letters only; other characters pass through.
fn alternating(text: &str) -> String {
    let mut upper = false;
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if upper {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            upper = !upper;
        } else {
            output.push(ch);
        }
    }
    output
}
