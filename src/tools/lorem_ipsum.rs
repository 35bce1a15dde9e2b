//! Deterministic placeholder text.
//!
//! Words cycle through a fixed vocabulary and sentence lengths follow a fixed
//! pattern, so the same arguments always produce the same text.

use crate::input::{bounded_u64, optional_bool, optional_str};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

const OPENING: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit";

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

const SENTENCE_LENGTHS: &[usize] = &[9, 12, 7, 14, 10, 8, 11];
const SENTENCES_PER_PARAGRAPH: &[usize] = &[4, 5, 3, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Paragraphs,
    Sentences,
    Words,
}

impl Unit {
    fn parse(value: Option<&str>) -> Result<Self, ToolError> {
        match value.unwrap_or("paragraphs") {
            "paragraphs" => Ok(Unit::Paragraphs),
            "sentences" => Ok(Unit::Sentences),
            "words" => Ok(Unit::Words),
            _ => Err(ToolError::invalid_input(
                "unit must be paragraphs, sentences, or words",
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Unit::Paragraphs => "paragraphs",
            Unit::Sentences => "sentences",
            Unit::Words => "words",
        }
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let count = bounded_u64(args, "count", 1, 100, 3)? as usize;
    let unit = Unit::parse(optional_str(args, "unit")?)?;
    let start_with_lorem = optional_bool(args, "start_with_lorem", true)?;
    let text = generate(count, unit, start_with_lorem);
    Ok(success_result(
        text.clone(),
        json!({"unit": unit.as_str(), "count": count, "text": text}),
    ))
}

pub fn generate(count: usize, unit: Unit, start_with_lorem: bool) -> String {
    let mut source = WordSource::new(start_with_lorem);
    match unit {
        Unit::Words => source.words(count).join(" "),
        Unit::Sentences => (0..count)
            .map(|_| source.sentence())
            .collect::<Vec<_>>()
            .join(" "),
        Unit::Paragraphs => (0..count)
            .map(|index| {
                let sentences = SENTENCES_PER_PARAGRAPH[index % SENTENCES_PER_PARAGRAPH.len()];
                (0..sentences)
                    .map(|_| source.sentence())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

struct WordSource {
    next_word: usize,
    next_sentence: usize,
    opening_pending: bool,
}

impl WordSource {
    fn new(start_with_lorem: bool) -> Self {
        Self {
            // Skip the words the opening phrase already used.
            next_word: if start_with_lorem { 8 } else { 0 },
            next_sentence: 0,
            opening_pending: start_with_lorem,
        }
    }

    fn word(&mut self) -> &'static str {
        let word = WORDS[self.next_word % WORDS.len()];
        self.next_word += 1;
        word
    }

    fn words(&mut self, count: usize) -> Vec<String> {
        let mut words: Vec<String> = Vec::with_capacity(count);
        if self.opening_pending {
            self.opening_pending = false;
            words.extend(
                OPENING
                    .split_whitespace()
                    .take(count)
                    .map(|word| word.trim_end_matches(',').to_string()),
            );
            if let Some(first) = words.first_mut() {
                *first = "Lorem".to_string();
            }
        }
        while words.len() < count {
            words.push(self.word().to_string());
        }
        words
    }

    fn sentence(&mut self) -> String {
        let length = SENTENCE_LENGTHS[self.next_sentence % SENTENCE_LENGTHS.len()];
        self.next_sentence += 1;

        let mut body = if self.opening_pending {
            self.opening_pending = false;
            let mut parts = vec![OPENING.to_string()];
            for _ in 8..length.max(8) {
                parts.push(self.word().to_string());
            }
            parts.join(" ")
        } else {
            let words: Vec<&str> = (0..length).map(|_| self.word()).collect();
            capitalize_first(&words.join(" "))
        };
        body.push('.');
        body
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
