use crate::input::{bounded_u64, optional_bool};
use crate::tools::{ToolError, finish, success_result};
use serde_json::{Value, json};
use uuid::Uuid;

pub fn call(args: &Value) -> Value {
    finish(run(args))
}

fn run(args: &Value) -> Result<Value, ToolError> {
    let count = bounded_u64(args, "count", 1, 100, 1)? as usize;
    let uppercase = optional_bool(args, "uppercase", false)?;
    let hyphens = optional_bool(args, "hyphens", true)?;

    let uuids: Vec<String> = (0..count)
        .map(|_| render(Uuid::new_v4(), uppercase, hyphens))
        .collect();
    Ok(success_result(uuids.join("\n"), json!({"uuids": uuids})))
}

fn render(uuid: Uuid, uppercase: bool, hyphens: bool) -> String {
    let text = if hyphens {
        uuid.hyphenated().to_string()
    } else {
        uuid.simple().to_string()
    };
    if uppercase { text.to_uppercase() } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_distinct_v4_uuids() {
        let result = call(&json!({"count": 5}));
        let uuids = result["structuredContent"]["uuids"].as_array().expect("array");
        assert_eq!(uuids.len(), 5);
        let unique: HashSet<_> = uuids.iter().filter_map(Value::as_str).collect();
        assert_eq!(unique.len(), 5);
        for uuid in unique {
            let parsed = Uuid::parse_str(uuid).expect("valid uuid");
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn formatting_options() {
        let uuid = Uuid::nil();
        assert_eq!(render(uuid, false, false), "0".repeat(32));
        let upper = render(Uuid::new_v4(), true, true);
        assert_eq!(upper.len(), 36);
        assert_eq!(upper, upper.to_uppercase());
    }

    #[test]
    fn count_is_bounded() {
        assert_eq!(call(&json!({"count": 0}))["isError"], json!(true));
        assert_eq!(call(&json!({"count": "101"}))["isError"], json!(true));
    }
}
