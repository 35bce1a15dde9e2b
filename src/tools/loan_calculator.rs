use crate::input::required_f64;
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repayment {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub months: u32,
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let principal = required_f64(args, "principal")?;
    let annual_rate = required_f64(args, "annual_rate")?;
    let years = required_f64(args, "years")?;
    let repayment = amortize(principal, annual_rate, years)?;

    Ok(success_result(
        format!(
            "monthly payment: {:.2}, total interest: {:.2}",
            repayment.monthly_payment, repayment.total_interest
        ),
        json!({
            "monthly_payment": cents(repayment.monthly_payment),
            "total_payment": cents(repayment.total_payment),
            "total_interest": cents(repayment.total_interest),
            "months": repayment.months
        }),
    ))
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fixed-rate amortization with monthly compounding.
pub fn amortize(principal: f64, annual_rate: f64, years: f64) -> Result<Repayment, ToolError> {
    if principal <= 0.0 {
        return Err(ToolError::invalid_input("principal must be positive"));
    }
    if annual_rate < 0.0 {
        return Err(ToolError::invalid_input("annual_rate must not be negative"));
    }
    let months = (years * 12.0).round();
    if months < 1.0 || months > 1200.0 {
        return Err(ToolError::invalid_input(
            "years must cover between 1 and 1200 months",
        ));
    }

    let rate = annual_rate / 100.0 / 12.0;
    let monthly_payment = if rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + rate).powf(months);
        principal * rate * growth / (growth - 1.0)
    };
    let total_payment = monthly_payment * months;

    Ok(Repayment {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
        months: months as u32,
    })
}
