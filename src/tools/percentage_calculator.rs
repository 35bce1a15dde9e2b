use crate::input::{required_f64, required_str};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    match required_str(args, "mode")? {
        "of" => {
            let value = required_f64(args, "value")?;
            let percent = required_f64(args, "percent")?;
            let result = percentage_of(value, percent);
            Ok(success_result(
                format!("{} % of {} = {}", display(percent), display(value), display(result)),
                json!({"mode": "of", "result": result}),
            ))
        }
        "what_percent" => {
            let part = required_f64(args, "part")?;
            let whole = required_f64(args, "whole")?;
            let result = what_percent(part, whole)?;
            Ok(success_result(
                format!("{} is {} % of {}", display(part), display(result), display(whole)),
                json!({"mode": "what_percent", "result": result}),
            ))
        }
        "change" => {
            let from = required_f64(args, "from")?;
            let to = required_f64(args, "to")?;
            let result = percent_change(from, to)?;
            let direction = if result > 0.0 {
                "increase"
            } else if result < 0.0 {
                "decrease"
            } else {
                "no change"
            };
            Ok(success_result(
                format!("{} → {}: {} % ({direction})", display(from), display(to), display(result)),
                json!({"mode": "change", "result": result, "direction": direction}),
            ))
        }
        _ => Err(ToolError::invalid_input(
            "mode must be of, what_percent, or change",
        )),
    }
}

/// `percent` percent of `value`: `percentage_of(50, 20) == 10`.
pub fn percentage_of(value: f64, percent: f64) -> f64 {
    value * percent / 100.0
}

pub fn what_percent(part: f64, whole: f64) -> Result<f64, ToolError> {
    if whole == 0.0 {
        return Err(ToolError::invalid_input("whole must not be zero"));
    }
    Ok(part / whole * 100.0)
}

pub fn percent_change(from: f64, to: f64) -> Result<f64, ToolError> {
    if from == 0.0 {
        return Err(ToolError::invalid_input("from must not be zero"));
    }
    Ok((to - from) / from.abs() * 100.0)
}

/// Up to four decimals, trailing zeros dropped.
pub fn display(value: f64) -> String {
    let rounded = format!("{value:.4}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_percent_of_fifty() {
        assert_eq!(percentage_of(50.0, 20.0), 10.0);
    }

    #[test]
    fn what_percent_and_change() {
        assert_eq!(what_percent(25.0, 200.0).expect("ok"), 12.5);
        assert_eq!(percent_change(80.0, 100.0).expect("ok"), 25.0);
        assert_eq!(percent_change(-50.0, -25.0).expect("ok"), 50.0);
    }

    #[test]
    fn zero_denominators_are_rejected() {
        assert!(what_percent(1.0, 0.0).is_err());
        assert!(percent_change(0.0, 5.0).is_err());
    }

    #[test]
    fn display_trims() {
        assert_eq!(display(10.0), "10");
        assert_eq!(display(12.5), "12.5");
        assert_eq!(display(1.0 / 3.0), "0.3333");
        assert_eq!(display(-0.00001), "0");
    }

    #[test]
    fn call_accepts_string_numbers() {
        let result = call(&json!({"mode": "of", "value": "50", "percent": "20"}));
        assert_eq!(result["structuredContent"]["result"], json!(10.0));
        assert_eq!(result["content"][0]["text"], json!("20 % of 50 = 10"));
    }
}
