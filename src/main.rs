use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod color;
mod input;
mod mcp;
mod profile;
mod store;
mod tools;

use store::JsonStore;

#[derive(Parser)]
#[command(name = "mcp-palette")]
#[command(
    version,
    about = "Personal color analysis and palette generation over MCP"
)]
struct Cli {
    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value = "info")]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Args, Clone)]
struct AnalyzeUndertoneArgs {
    #[arg(long)]
    vein_color: String,
    #[arg(long)]
    jewelry_preference: String,
    #[arg(long)]
    sun_reaction: String,
    #[arg(long)]
    natural_lip_color: String,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct DetermineSeasonArgs {
    #[arg(long)]
    skin_tone: String,
    #[arg(long)]
    undertone: String,
    #[arg(long)]
    eye_color: String,
    #[arg(long)]
    hair_color: String,
    #[arg(long)]
    contrast_level: String,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct HarmonyArgs {
    /// Base color as #rrggbb; repeat for several (only the first seeds the harmony)
    #[arg(long = "color", required = true)]
    colors: Vec<String>,
    /// complementary, analogous, triadic or split_complementary
    #[arg(long)]
    scheme: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct QuickPaletteArgs {
    /// clothing, makeup or accessories
    #[arg(long)]
    palette_type: String,
    #[arg(long)]
    event_type: Option<String>,
    #[arg(long)]
    skin_tone: Option<String>,
    #[arg(long)]
    undertone: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
        /// JSON file holding profiles and palette history
        #[arg(long, env = "PALETTE_DATA_FILE", default_value = store::DEFAULT_DATA_FILE)]
        data_file: PathBuf,
    },
    /// Score skin undertone
    AnalyzeUndertone(AnalyzeUndertoneArgs),
    /// Determine the seasonal color type
    DetermineSeason(DetermineSeasonArgs),
    /// Generate a color harmony
    Harmony(HarmonyArgs),
    /// Generate a palette without a stored profile
    QuickPalette(QuickPaletteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Serve { stdio, data_file } => {
            if stdio {
                let store = JsonStore::new(data_file);
                store.init().context("failed to initialize data file")?;
                run_stdio_server(&store)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::AnalyzeUndertone(args) => run_analyze_undertone(args),
        Commands::DetermineSeason(args) => run_determine_season(args),
        Commands::Harmony(args) => run_harmony(args),
        Commands::QuickPalette(args) => run_quick_palette(args),
    }
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level.as_level())
        .with_target(false)
        .init();
}

fn run_analyze_undertone(args: AnalyzeUndertoneArgs) -> Result<()> {
    let map = string_args(&[
        ("vein_color", &args.vein_color),
        ("jewelry_preference", &args.jewelry_preference),
        ("sun_reaction", &args.sun_reaction),
        ("natural_lip_color", &args.natural_lip_color),
    ]);
    let result = tools::analyze_undertone::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_determine_season(args: DetermineSeasonArgs) -> Result<()> {
    let map = string_args(&[
        ("skin_tone", &args.skin_tone),
        ("undertone", &args.undertone),
        ("eye_color", &args.eye_color),
        ("hair_color", &args.hair_color),
        ("contrast_level", &args.contrast_level),
    ]);
    let result = tools::determine_season::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_harmony(args: HarmonyArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("base_colors".to_string(), json!(args.colors));
    if let Some(scheme) = &args.scheme {
        map.insert("scheme".to_string(), json!(scheme));
    }
    let result = tools::harmony::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn run_quick_palette(args: QuickPaletteArgs) -> Result<()> {
    let mut map = string_args(&[("palette_type", &args.palette_type)]);
    for (key, value) in [
        ("event_type", &args.event_type),
        ("skin_tone", &args.skin_tone),
        ("undertone", &args.undertone),
    ] {
        if let Some(value) = value {
            map.insert(key.to_string(), json!(value));
        }
    }
    let result = tools::quick_palette::call(&Value::Object(map));
    print_tool_result(result, args.json)
}

fn string_args(pairs: &[(&str, &String)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), json!(value)))
        .collect()
}

/// Tool result envelope as seen by the one-shot commands.
#[derive(Deserialize)]
struct ToolOutput {
    #[serde(default)]
    content: Vec<TextBlock>,
    #[serde(rename = "structuredContent", default)]
    structured: Value,
    #[serde(rename = "isError", default)]
    is_error: bool,
}

#[derive(Deserialize)]
struct TextBlock {
    text: String,
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let output: ToolOutput =
        serde_json::from_value(result).context("malformed tool result")?;
    if output.is_error {
        let error = output.structured.get("error");
        let field = |name: &str| {
            error
                .and_then(|error| error.get(name))
                .and_then(Value::as_str)
        };
        anyhow::bail!(
            "{}: {}",
            field("kind").unwrap_or(mcp::errors::INTERNAL_ERROR),
            field("message").unwrap_or("tool error")
        );
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output.structured)?);
    } else if let Some(block) = output.content.first() {
        println!("{}", block.text);
    }
    Ok(())
}

fn run_stdio_server(store: &JsonStore) -> Result<()> {
    let mut writer = io::BufWriter::new(io::stdout().lock());
    tracing::info!(data_file = %store.path().display(), "serving MCP over stdio");

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let Some(response) = handle_line(store, &line) else {
            continue;
        };
        let serialized =
            serde_json::to_string(&response).context("failed to serialize response")?;
        writeln!(writer, "{serialized}").context("failed to write response")?;
        writer.flush().context("failed to flush response")?;
    }

    Ok(())
}

/// Answers one NDJSON line. Blank lines, malformed JSON and notifications
/// (no `id`) produce no response.
fn handle_line(store: &JsonStore, line: &str) -> Option<Value> {
    if line.trim().is_empty() {
        return None;
    }
    let request: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "skipping malformed request line");
            return None;
        }
    };

    let method = request.get("method").and_then(Value::as_str);
    let Some(id) = request.get("id").cloned() else {
        tracing::debug!(method = method.unwrap_or("<none>"), "ignoring notification");
        return None;
    };
    let result = match method {
        Some("initialize") => json!({
            "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
        Some("tools/list") => json!({ "tools": mcp::tool_definitions() }),
        Some("tools/call") => handle_tool_call(store, &request),
        _ => {
            tracing::debug!(method = method.unwrap_or("<none>"), "ignoring request");
            return None;
        }
    };
    Some(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

fn handle_tool_call(store: &JsonStore, request: &Value) -> Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    tracing::debug!(tool = name, "tool call");
    let result = match name {
        mcp::contracts::TOOL_ANALYZE_UNDERTONE => tools::analyze_undertone::call(&args),
        mcp::contracts::TOOL_DETERMINE_SEASON => tools::determine_season::call(&args),
        mcp::contracts::TOOL_HARMONY => tools::harmony::call(&args),
        mcp::contracts::TOOL_ANALYZE_HARMONY => tools::analyze_harmony::call(&args),
        mcp::contracts::TOOL_CREATE_PROFILE => tools::create_profile::call(store, &args),
        mcp::contracts::TOOL_SHOW_PROFILE => tools::show_profile::call(store, &args),
        mcp::contracts::TOOL_LIST_PROFILES => tools::list_profiles::call(store, &args),
        mcp::contracts::TOOL_DELETE_PROFILE => tools::delete_profile::call(store, &args),
        mcp::contracts::TOOL_GENERATE_PALETTE => tools::generate_palette::call(store, &args),
        mcp::contracts::TOOL_PALETTE_HISTORY => tools::palette_history::call(store, &args),
        mcp::contracts::TOOL_QUICK_PALETTE => tools::quick_palette::call(&args),
        mcp::contracts::TOOL_EXPORT_DATA => tools::export_data::call(store, &args),
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            Some(name),
        ),
    };

    if result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
    {
        tracing::info!(tool = name, "tool call returned an error");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn handle_line_skips_blank_malformed_and_notifications() {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(dir.path().join("profiles.json"));
        assert!(handle_line(&store, "   ").is_none());
        assert!(handle_line(&store, "{not json").is_none());
        let notification = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(handle_line(&store, notification).is_none());
        let unknown = r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#;
        assert!(handle_line(&store, unknown).is_none());
    }

    #[test]
    fn handle_line_echoes_request_id() {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(dir.path().join("profiles.json"));
        let line = r#"{"jsonrpc":"2.0","id":"init-1","method":"initialize"}"#;
        let response = handle_line(&store, line).expect("response");
        assert_eq!(response["id"], "init-1");
        assert_eq!(
            response["result"]["protocolVersion"],
            mcp::contracts::PROTOCOL_VERSION
        );
    }

    #[test]
    fn tool_errors_surface_kind_and_message() {
        let result = tools::error_result(mcp::errors::EMPTY_INPUT, "no colors given", None);
        let err = print_tool_result(result, false).expect_err("error");
        assert_eq!(err.to_string(), "empty_input: no colors given");
    }

    #[test]
    fn malformed_tool_result_is_an_error() {
        let result = json!({ "content": "not a list" });
        assert!(print_tool_result(result, true).is_err());
    }
}
