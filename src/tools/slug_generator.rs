use crate::input::{optional_str, optional_u64, required_str};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let text = required_str(args, "text")?;
    let separator = match optional_str(args, "separator")?.unwrap_or("-") {
        "-" => '-',
        "_" => '_',
        "." => '.',
        _ => return Err(ToolError::invalid_input("separator must be -, _, or .")),
    };
    let max_length = match optional_u64(args, "max_length")? {
        Some(0) => return Err(ToolError::invalid_input("max_length must be at least 1")),
        Some(value) => Some(usize::try_from(value).unwrap_or(usize::MAX)),
        None => None,
    };

    let slug = slugify(text, separator, max_length);
    Ok(success_result(slug.clone(), json!({"slug": slug})))
}

pub fn slugify(text: &str, separator: char, max_length: Option<usize>) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        let folded = fold_accent(ch);
        let mut pushed_any = false;
        for piece in folded.chars() {
            if piece.is_ascii_alphanumeric() {
                if pending_separator && !slug.is_empty() {
                    slug.push(separator);
                }
                pending_separator = false;
                slug.push(piece.to_ascii_lowercase());
                pushed_any = true;
            }
        }
        if !pushed_any {
            pending_separator = true;
        }
    }

    if let Some(max_length) = max_length
        && slug.len() > max_length
    {
        slug.truncate(max_length);
        while slug.ends_with(separator) {
            slug.pop();
        }
    }
    slug
}

/// Fold common Latin accented letters to ASCII; other characters pass through.
fn fold_accent(ch: char) -> String {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => "I",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ś' | 'š' => "s",
        'Ś' | 'Š' => "S",
        'ß' => "ss",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "TH",
        _ => return ch.to_string(),
    };
    folded.to_string()
}
