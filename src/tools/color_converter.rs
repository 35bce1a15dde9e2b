use crate::input::required_str;
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let rgb = parse_color(required_str(args, "color")?)?;
    let hsl = rgb.to_hsl();
    let hex = rgb.to_hex();
    let rgb_text = format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    let hsl_text = format!(
        "hsl({}, {}%, {}%)",
        hsl.h.round(),
        hsl.s.round(),
        hsl.l.round()
    );
    Ok(success_result(
        format!("{hex} | {rgb_text} | {hsl_text}"),
        json!({
            "hex": hex,
            "rgb": {"r": rgb.r, "g": rgb.g, "b": rgb.b, "css": rgb_text},
            "hsl": {
                "h": hsl.h.round(),
                "s": hsl.s.round(),
                "l": hsl.l.round(),
                "css": hsl_text
            }
        }),
    ))
}

pub fn parse_color(input: &str) -> Result<Rgb, ToolError> {
    let text = input.trim().to_ascii_lowercase();
    if let Some(inner) = function_args(&text, "rgb") {
        let parts = split_args(inner, 3)?;
        let channel = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| ToolError::invalid_input("rgb channels must be 0-255"))
        };
        return Ok(Rgb {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
        });
    }
    if let Some(inner) = function_args(&text, "hsl") {
        let parts = split_args(inner, 3)?;
        let number = |part: &str, max: f64| {
            part.trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| (0.0..=max).contains(value))
                .ok_or_else(|| ToolError::invalid_input("hsl values are out of range"))
        };
        let hsl = Hsl {
            h: number(parts[0], 360.0)?,
            s: number(parts[1], 100.0)?,
            l: number(parts[2], 100.0)?,
        };
        return Ok(hsl.to_rgb());
    }
    parse_hex(&text)
}

fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(inner: &str, expected: usize) -> Result<Vec<&str>, ToolError> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ToolError::invalid_input(format!(
            "expected {expected} comma-separated values"
        )));
    }
    Ok(parts)
}

fn parse_hex(text: &str) -> Result<Rgb, ToolError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ToolError::invalid_input(
            "color must be #rgb, #rrggbb, rgb(r, g, b), or hsl(h, s%, l%)",
        ));
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
        6 => digits.to_string(),
        _ => {
            return Err(ToolError::invalid_input(
                "hex colors must have 3 or 6 digits",
            ));
        }
    };
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .map_err(|_| ToolError::invalid_input("invalid hex digits"))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
