use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
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

fn closed_port_url() -> Result<String, Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}"))
}

#[test]
fn unreachable_server_reports_connection_failure() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = closed_port_url()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-scene"))
        .args(["serve", "--stdio", "--base-url", &base_url, "--timeout-secs", "2"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 40,
        "method": "tools/call",
        "params": {
            "name": "create_actor",
            "arguments": {
                "type": "Cube",
                "name": "Box",
                "location": {"x": 0, "y": 0, "z": 0}
            }
        }
    });
    let response = send_request(&mut stdin, &mut stdout, request)?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));

    let error = result
        .get("structuredContent")
        .and_then(|value| value.get("error"))
        .expect("error present");
    assert_eq!(
        error.get("kind").and_then(|v| v.as_str()),
        Some("connection_failed")
    );
    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .expect("text present");
    assert!(text.starts_with("Error: cannot connect to scene server"));

    let _ = child.kill();
    Ok(())
}

#[test]
fn invalid_grid_rejected_without_server() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = closed_port_url()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-scene"))
        .args(["serve", "--stdio", "--base-url", &base_url])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 41,
        "method": "tools/call",
        "params": {
            "name": "create_grid",
            "arguments": {
                "type": "Cube",
                "base_name": "Box",
                "rows": 0,
                "columns": 3,
                "spacing": 100,
                "start_location": {"x": 0, "y": 0, "z": 0}
            }
        }
    });
    let response = send_request(&mut stdin, &mut stdout, request)?;
    let kind = response
        .get("result")
        .and_then(|value| value.get("structuredContent"))
        .and_then(|value| value.get("error"))
        .and_then(|value| value.get("kind"))
        .and_then(|value| value.as_str());
    assert_eq!(kind, Some("invalid_input"));

    let _ = child.kill();
    Ok(())
}
