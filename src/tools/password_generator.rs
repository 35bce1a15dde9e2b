use crate::input::{bounded_u64, optional_bool};
use crate::tools::{ToolError, finish, success_result};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde_json::{Value, json};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/~";
const AMBIGUOUS: &str = "Il1O0o";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Enabled character classes, ambiguous characters removed if requested.
    fn classes(&self) -> Vec<Vec<char>> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| {
            chars
                .chars()
                .filter(|ch| !self.exclude_ambiguous || !AMBIGUOUS.contains(*ch))
                .collect()
        })
        .collect()
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let defaults = PasswordOptions::default();
    let options = PasswordOptions {
        length: bounded_u64(args, "length", 4, 128, defaults.length as u64)? as usize,
        uppercase: optional_bool(args, "uppercase", defaults.uppercase)?,
        lowercase: optional_bool(args, "lowercase", defaults.lowercase)?,
        numbers: optional_bool(args, "numbers", defaults.numbers)?,
        symbols: optional_bool(args, "symbols", defaults.symbols)?,
        exclude_ambiguous: optional_bool(args, "exclude_ambiguous", defaults.exclude_ambiguous)?,
    };
    let count = bounded_u64(args, "count", 1, 50, 1)? as usize;

    let mut rng = rand::rng();
    let passwords = (0..count)
        .map(|_| generate(&options, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    let bits = entropy_bits(&options);
    let strength = strength_label(bits);
    Ok(success_result(
        passwords.join("\n"),
        json!({
            "passwords": passwords,
            "entropy_bits": (bits * 10.0).round() / 10.0,
            "strength": strength
        }),
    ))
}

pub fn generate<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, ToolError> {
    let classes = options.classes();
    if classes.is_empty() {
        return Err(ToolError::invalid_input(
            "at least one character set must be enabled",
        ));
    }
    if options.length < classes.len() {
        return Err(ToolError::invalid_input(format!(
            "length must be at least {} for the selected character sets",
            classes.len()
        )));
    }

    let pool: Vec<char> = classes.iter().flatten().copied().collect();
    let mut chars: Vec<char> = Vec::with_capacity(options.length);
    // One from each class first so every enabled set is represented.
    for class in &classes {
        if let Some(ch) = class.choose(rng) {
            chars.push(*ch);
        }
    }
    while chars.len() < options.length {
        if let Some(ch) = pool.choose(rng) {
            chars.push(*ch);
        }
    }
    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

pub fn entropy_bits(options: &PasswordOptions) -> f64 {
    let pool: usize = options.classes().iter().map(Vec::len).sum();
    if pool == 0 {
        return 0.0;
    }
    options.length as f64 * (pool as f64).log2()
}

pub fn strength_label(bits: f64) -> &'static str {
    match bits {
        b if b < 28.0 => "very weak",
        b if b < 36.0 => "weak",
        b if b < 60.0 => "reasonable",
        b if b < 128.0 => "strong",
        _ => "very strong",
    }
}
