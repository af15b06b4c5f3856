use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use tempfile::tempdir;

#[test]
fn harmony_generates_complementary_palette() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-palette"))
        .args(["serve", "--stdio", "--data-file"])
        .arg(dir.path().join("profiles.json"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let requests = [
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {
                "name": "beauty.harmony",
                "arguments": { "base_colors": ["#FF0000", "#00ff00"] }
            }
        }),
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {
                "name": "beauty.harmony",
                "arguments": { "base_colors": ["#ff0000"], "scheme": "tetradic" }
            }
        }),
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {
                "name": "beauty.harmony",
                "arguments": { "base_colors": [] }
            }
        }),
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 8,
            "method": "tools/call",
            "params": {
                "name": "beauty.analyze_harmony",
                "arguments": { "colors": ["#ff0000", "#00ff00", "#0000ff"] }
            }
        }),
    ];

    let mut responses = Vec::new();
    for request in &requests {
        let serialized = serde_json::to_string(request)?;
        writeln!(stdin, "{serialized}")?;
        stdin.flush()?;

        let mut line = String::new();
        stdout.read_line(&mut line)?;
        let response: serde_json::Value = serde_json::from_str(line.trim())?;
        responses.push(response);
    }

    let result = responses[0].get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(false));
    let structured = result.get("structuredContent").expect("structuredContent");
    assert_eq!(
        structured.get("scheme").and_then(|v| v.as_str()),
        Some("complementary")
    );
    assert_eq!(
        structured.get("seed").and_then(|v| v.as_str()),
        Some("#ff0000")
    );
    let colors: Vec<&str> = structured
        .get("colors")
        .and_then(|v| v.as_array())
        .expect("colors array")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    let expected = [
        "#ff0000", "#ff6666", "#990000", "#00ffff", "#66ffff", "#009999",
    ];
    assert_eq!(colors, expected);

    let kinds: Vec<Option<&str>> = responses[1..3]
        .iter()
        .map(|response| {
            response
                .get("result")
                .and_then(|v| v.get("structuredContent"))
                .and_then(|v| v.get("error"))
                .and_then(|v| v.get("kind"))
                .and_then(|v| v.as_str())
        })
        .collect();
    assert_eq!(kinds, [Some("unknown_scheme"), Some("empty_input")]);

    let analysis = responses[3]
        .pointer("/result/structuredContent")
        .expect("analysis present");
    assert_eq!(
        analysis.get("harmony_type").and_then(|v| v.as_str()),
        Some("triadic")
    );
    assert_eq!(
        analysis.get("harmony_score").and_then(|v| v.as_u64()),
        Some(80)
    );

    let _ = child.kill();
    Ok(())
}
