use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

fn send_request(
    stdin: &mut std::process::ChildStdin,
    stdout: &mut BufReader<std::process::ChildStdout>,
    request: serde_json::Value,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;
    let response: serde_json::Value = serde_json::from_str(line.trim())?;
    Ok(response)
}

fn call_request(id: i64, name: &str, arguments: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {
            "name": name,
            "arguments": arguments
        }
    })
}

#[test]
fn tools_call_covers_success_error_and_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-utilkit"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let response = send_request(
        &mut stdin,
        &mut stdout,
        call_request(
            10,
            "case-converter",
            serde_json::json!({"text": "hello world", "mode": "snake"}),
        ),
    )?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        result["content"][0]["text"].as_str(),
        Some("hello_world")
    );
    assert_eq!(result["structuredContent"]["mode"].as_str(), Some("snake"));

    let response = send_request(
        &mut stdin,
        &mut stdout,
        call_request(
            11,
            "unit-converter",
            serde_json::json!({"category": "length", "value": 2.5, "from": "km", "to": "m"}),
        ),
    )?;
    assert_eq!(
        response["result"]["structuredContent"]["result"].as_f64(),
        Some(2500.0)
    );

    let response = send_request(
        &mut stdin,
        &mut stdout,
        call_request(12, "json-formatter", serde_json::json!({"text": "{\"a\":"})),
    )?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        result["structuredContent"]["error"]["kind"].as_str(),
        Some("invalid_input")
    );

    let response = send_request(
        &mut stdin,
        &mut stdout,
        call_request(13, "text-to-speech", serde_json::json!({"text": "hi"})),
    )?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        result["structuredContent"]["status"].as_str(),
        Some("under_development")
    );

    let response = send_request(
        &mut stdin,
        &mut stdout,
        call_request(14, "no-such-tool", serde_json::json!({})),
    )?;
    assert_eq!(
        response["result"]["content"][0]["text"].as_str(),
        Some("no-such-tool is under development")
    );

    let response = send_request(
        &mut stdin,
        &mut stdout,
        serde_json::json!({"jsonrpc": "2.0", "id": 15, "method": "tools/call", "params": {}}),
    )?;
    assert_eq!(response["result"]["isError"].as_bool(), Some(true));

    let _ = child.kill();
    Ok(())
}
