use crate::input::{required_f64, required_str};
use crate::tools::percentage_calculator::display;
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Weight,
    Volume,
    Area,
    Time,
    Data,
    Temperature,
}

impl Quantity {
    fn parse(value: &str) -> Result<Self, ToolError> {
        match value {
            "length" => Ok(Quantity::Length),
            "weight" => Ok(Quantity::Weight),
            "volume" => Ok(Quantity::Volume),
            "area" => Ok(Quantity::Area),
            "time" => Ok(Quantity::Time),
            "data" => Ok(Quantity::Data),
            "temperature" => Ok(Quantity::Temperature),
            _ => Err(ToolError::invalid_input(
                "category must be length, weight, volume, area, time, data, or temperature",
            )),
        }
    }

    /// Units and their size in the category's base unit.
    fn factors(self) -> &'static [(&'static str, f64)] {
        match self {
            // metre
            Quantity::Length => &[
                ("mm", 0.001),
                ("cm", 0.01),
                ("m", 1.0),
                ("km", 1000.0),
                ("in", 0.0254),
                ("ft", 0.3048),
                ("yd", 0.9144),
                ("mi", 1609.344),
                ("nmi", 1852.0),
            ],
            // kilogram
            Quantity::Weight => &[
                ("mg", 0.000_001),
                ("g", 0.001),
                ("kg", 1.0),
                ("t", 1000.0),
                ("oz", 0.028_349_523_125),
                ("lb", 0.453_592_37),
                ("st", 6.350_293_18),
            ],
            // litre
            Quantity::Volume => &[
                ("ml", 0.001),
                ("l", 1.0),
                ("m3", 1000.0),
                ("tsp", 0.004_928_921_593_75),
                ("tbsp", 0.014_786_764_781_25),
                ("floz", 0.029_573_529_562_5),
                ("cup", 0.236_588_236_5),
                ("pt", 0.473_176_473),
                ("qt", 0.946_352_946),
                ("gal", 3.785_411_784),
            ],
            // square metre
            Quantity::Area => &[
                ("mm2", 0.000_001),
                ("cm2", 0.0001),
                ("m2", 1.0),
                ("ha", 10_000.0),
                ("km2", 1_000_000.0),
                ("in2", 0.000_645_16),
                ("ft2", 0.092_903_04),
                ("yd2", 0.836_127_36),
                ("ac", 4046.856_422_4),
                ("mi2", 2_589_988.110_336),
            ],
            // second
            Quantity::Time => &[
                ("ms", 0.001),
                ("s", 1.0),
                ("min", 60.0),
                ("h", 3600.0),
                ("d", 86_400.0),
                ("wk", 604_800.0),
                ("yr", 31_536_000.0),
            ],
            // byte
            Quantity::Data => &[
                ("bit", 0.125),
                ("b", 1.0),
                ("kb", 1000.0),
                ("mb", 1_000_000.0),
                ("gb", 1_000_000_000.0),
                ("tb", 1_000_000_000_000.0),
                ("kib", 1024.0),
                ("mib", 1_048_576.0),
                ("gib", 1_073_741_824.0),
                ("tib", 1_099_511_627_776.0),
            ],
            Quantity::Temperature => &[],
        }
    }
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let quantity = Quantity::parse(required_str(args, "category")?)?;
    let value = required_f64(args, "value")?;
    let from = required_str(args, "from")?.trim().to_ascii_lowercase();
    let to = required_str(args, "to")?.trim().to_ascii_lowercase();

    let result = convert(quantity, value, &from, &to)?;
    Ok(success_result(
        format!("{} {from} = {} {to}", display(value), display(result)),
        json!({"value": value, "from": from, "to": to, "result": result}),
    ))
}

pub fn convert(quantity: Quantity, value: f64, from: &str, to: &str) -> Result<f64, ToolError> {
    if quantity == Quantity::Temperature {
        let celsius = to_celsius(value, from)?;
        return from_celsius(celsius, to);
    }
    let factors = quantity.factors();
    let lookup = |unit: &str| {
        factors
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ToolError::invalid_input(format!("unknown unit: {unit}")))
    };
    let from_factor = lookup(from)?;
    let to_factor = lookup(to)?;
    Ok(value * from_factor / to_factor)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

fn to_celsius(value: f64, unit: &str) -> Result<f64, ToolError> {
    let celsius = match unit {
        "c" => value,
        "f" => fahrenheit_to_celsius(value),
        "k" => value - 273.15,
        _ => return Err(ToolError::invalid_input(format!("unknown unit: {unit}"))),
    };
    if celsius < -273.15 - 1e-9 {
        return Err(ToolError::invalid_input("temperature is below absolute zero"));
    }
    Ok(celsius)
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64, ToolError> {
    match unit {
        "c" => Ok(celsius),
        "f" => Ok(celsius_to_fahrenheit(celsius)),
        "k" => Ok(celsius + 273.15),
        _ => Err(ToolError::invalid_input(format!("unknown unit: {unit}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn freezing_point() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
    }

    #[rstest]
    #[case(Quantity::Length, 1.0, "mi", "km", 1.609344)]
    #[case(Quantity::Length, 12.0, "in", "ft", 1.0)]
    #[case(Quantity::Weight, 1.0, "kg", "lb", 2.204_622_621_848_776)]
    #[case(Quantity::Volume, 1.0, "gal", "l", 3.785411784)]
    #[case(Quantity::Area, 1.0, "ha", "m2", 10_000.0)]
    #[case(Quantity::Time, 2.0, "h", "min", 120.0)]
    #[case(Quantity::Data, 1.0, "gib", "mib", 1024.0)]
    #[case(Quantity::Temperature, 300.0, "k", "c", 26.85)]
    #[case(Quantity::Temperature, -40.0, "c", "f", -40.0)]
    fn converts(
        #[case] quantity: Quantity,
        #[case] value: f64,
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: f64,
    ) {
        let result = convert(quantity, value, from, to).expect("convert");
        assert!(close(result, expected), "{result} != {expected}");
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert!(convert(Quantity::Length, 1.0, "m", "parsec").is_err());
        assert!(convert(Quantity::Temperature, 1.0, "r", "c").is_err());
    }

    #[test]
    fn below_absolute_zero_is_rejected() {
        assert!(convert(Quantity::Temperature, -1.0, "k", "c").is_err());
    }

    #[test]
    fn call_normalizes_unit_case() {
        let result = call(&json!({"category": "length", "value": "100", "from": "CM", "to": "m"}));
        assert_eq!(result["structuredContent"]["result"], json!(1.0));
        assert_eq!(result["content"][0]["text"], json!("100 cm = 1 m"));
    }
}
