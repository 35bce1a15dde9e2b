use crate::input::{optional_str, required_str};
use crate::tools::{ToolError, finish, success_result};
use chrono::{Datelike, Local, Months, NaiveDate};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub days_until_next_birthday: i64,
}

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let birth = parse_date("birth_date", required_str(args, "birth_date")?)?;
    let as_of = match optional_str(args, "as_of")? {
        Some(value) => parse_date("as_of", value)?,
        None => Local::now().date_naive(),
    };
    let age = age_between(birth, as_of)?;
    let summary = format!(
        "{} years, {} months, {} days",
        age.years, age.months, age.days
    );
    let structured =
        serde_json::to_value(age).map_err(|err| ToolError::internal(err.to_string()))?;
    Ok(success_result(summary, structured))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ToolError::invalid_input(format!("{field} must be a date in YYYY-MM-DD form")))
}

/// `birth` moved forward by whole months; month-end days clamp to the last
/// day of the target month, so Feb 29 lands on Feb 28 in common years.
fn add_months(birth: NaiveDate, months: u32) -> Result<NaiveDate, ToolError> {
    birth
        .checked_add_months(Months::new(months))
        .ok_or_else(|| ToolError::invalid_input("date is out of range"))
}

/// Birthday in `year`; Feb 29 falls back to Feb 28 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), birth.day() - 1))
}

pub fn age_between(birth: NaiveDate, as_of: NaiveDate) -> Result<Age, ToolError> {
    if birth > as_of {
        return Err(ToolError::invalid_input("birth_date must not be after as_of"));
    }

    let span = (as_of.year() - birth.year()) * 12 + as_of.month() as i32 - birth.month() as i32;
    let mut whole_months = span.max(0) as u32;
    let mut anchor = add_months(birth, whole_months)?;
    while anchor > as_of && whole_months > 0 {
        whole_months -= 1;
        anchor = add_months(birth, whole_months)?;
    }
    let days = (as_of - anchor).num_days();

    let this_year = birthday_in(birth, as_of.year())
        .ok_or_else(|| ToolError::internal("could not compute birthday"))?;
    let next = if this_year >= as_of {
        this_year
    } else {
        birthday_in(birth, as_of.year() + 1)
            .ok_or_else(|| ToolError::internal("could not compute birthday"))?
    };

    Ok(Age {
        years: whole_months / 12,
        months: whole_months % 12,
        days: days as u32,
        total_days: (as_of - birth).num_days(),
        days_until_next_birthday: (next - as_of).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn exact_age() {
        let age = age_between(date(1990, 5, 15), date(2024, 3, 10)).expect("age");
        assert_eq!((age.years, age.months, age.days), (33, 9, 24));
        assert_eq!(age.days_until_next_birthday, 66);
    }

    #[test]
    fn birthday_today() {
        let age = age_between(date(2000, 1, 1), date(2025, 1, 1)).expect("age");
        assert_eq!((age.years, age.months, age.days), (25, 0, 0));
        assert_eq!(age.days_until_next_birthday, 0);
        assert_eq!(age.total_days, 9132);
    }

    #[test]
    fn leap_day_birthday() {
        let age = age_between(date(2000, 2, 29), date(2023, 3, 1)).expect("age");
        assert_eq!(age.years, 23);
        assert_eq!(age.days_until_next_birthday, 365);
    }

    #[test]
    fn leap_day_birthday_falls_on_feb_28_in_common_years() {
        let age = age_between(date(2000, 2, 29), date(2023, 2, 28)).expect("age");
        assert_eq!((age.years, age.months, age.days), (23, 0, 0));
        assert_eq!(age.days_until_next_birthday, 0);

        let age = age_between(date(2000, 2, 29), date(2024, 2, 28)).expect("age");
        assert_eq!((age.years, age.months, age.days), (23, 11, 30));
        assert_eq!(age.days_until_next_birthday, 1);
    }

    #[test]
    fn month_end_birth_counts_leftover_days() {
        let age = age_between(date(1990, 1, 31), date(2024, 3, 1)).expect("age");
        assert_eq!((age.years, age.months, age.days), (34, 1, 1));

        let age = age_between(date(1990, 1, 31), date(2024, 2, 29)).expect("age");
        assert_eq!((age.years, age.months, age.days), (34, 1, 0));

        let age = age_between(date(1990, 1, 31), date(2024, 2, 28)).expect("age");
        assert_eq!((age.years, age.months, age.days), (34, 0, 28));
    }

    #[test]
    fn future_birth_is_invalid() {
        assert!(age_between(date(2030, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn call_parses_dates() {
        let result = call(&json!({"birth_date": "2020-06-01", "as_of": "2021-06-01"}));
        assert_eq!(result["structuredContent"]["years"], json!(1));

        let result = call(&json!({"birth_date": "06/01/2020"}));
        assert_eq!(result["isError"], json!(true));
    }
}
