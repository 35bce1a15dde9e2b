use crate::input::{optional_str, required_f64};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

const KG_PER_LB: f64 = 0.453_592_37;
const CM_PER_IN: f64 = 2.54;

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let weight = required_f64(args, "weight")?;
    let height = required_f64(args, "height")?;
    let (weight_kg, height_cm) = match optional_str(args, "units")?.unwrap_or("metric") {
        "metric" => (weight, height),
        "imperial" => (weight * KG_PER_LB, height * CM_PER_IN),
        _ => return Err(ToolError::invalid_input("units must be metric or imperial")),
    };

    let value = bmi(weight_kg, height_cm)?;
    let rounded = (value * 10.0).round() / 10.0;
    let category = category(value);
    Ok(success_result(
        format!("BMI {rounded:.1} ({category})"),
        json!({"bmi": rounded, "category": category}),
    ))
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, ToolError> {
    if weight_kg <= 0.0 {
        return Err(ToolError::invalid_input("weight must be positive"));
    }
    if height_cm <= 0.0 {
        return Err(ToolError::invalid_input("height must be positive"));
    }
    let meters = height_cm / 100.0;
    Ok(weight_kg / (meters * meters))
}

pub fn category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "underweight"
    } else if bmi < 25.0 {
        "normal"
    } else if bmi < 30.0 {
        "overweight"
    } else {
        "obese"
    }
}
