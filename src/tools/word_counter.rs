use crate::input::required_str;
use crate::tools::{ToolError, finish, success_result};
use serde::Serialize;
use serde_json::Value;

const READING_WPM: usize = 200;
const SPEAKING_WPM: usize = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
    pub speaking_time_minutes: usize,
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let stats = count(text);
    let summary = format!(
        "words: {}, characters: {}, sentences: {}, paragraphs: {}",
        stats.words, stats.characters, stats.sentences, stats.paragraphs
    );
    let structured =
        serde_json::to_value(stats).map_err(|err| ToolError::internal(err.to_string()))?;
    Ok(success_result(summary, structured))
}

pub fn count(text: &str) -> TextStats {
    let words = text.split_whitespace().count();
    let normalized = text.replace("\r\n", "\n");

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count();

    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in normalized.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }

    TextStats {
        words,
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|ch| !ch.is_whitespace()).count(),
        sentences,
        paragraphs,
        lines: if text.is_empty() { 0 } else { normalized.lines().count() },
        reading_time_minutes: words.div_ceil(READING_WPM),
        speaking_time_minutes: words.div_ceil(SPEAKING_WPM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_text_is_all_zero() {
        let stats = count("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.reading_time_minutes, 0);
    }

    #[test]
    fn counts_sentences_and_paragraphs() {
        let text = "Hello world. How are you?\n\nFine!\r\nThanks...";
        let stats = count(text);
        assert_eq!(stats.words, 7);
        assert_eq!(stats.sentences, 4);
        assert_eq!(stats.paragraphs, 1 + 1);
        assert_eq!(stats.lines, 4);
    }

    #[test]
    fn characters_ignore_whitespace_when_asked() {
        let stats = count("a b\tc");
        assert_eq!(stats.characters, 5);
        assert_eq!(stats.characters_no_spaces, 3);
    }

    #[test]
    fn reading_time_rounds_up() {
        let text = "word ".repeat(201);
        let stats = count(&text);
        assert_eq!(stats.reading_time_minutes, 2);
        assert_eq!(stats.speaking_time_minutes, 2);
    }

    #[test]
    fn call_reports_structured_stats() {
        let result = call(&json!({"text": "one two"}));
        assert_eq!(result["structuredContent"]["words"], json!(2));
    }
}
