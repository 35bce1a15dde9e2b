use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Read, Write};
use std::process;

mod catalog;
mod config;
mod dispatch;
mod input;
mod logging;
mod mcp;
mod tools;

use catalog::Category;
use config::Settings;
use dispatch::ToolKind;

#[derive(Parser)]
#[command(name = "mcp-utilkit")]
#[command(
    version,
    about = "Catalog of small text, number and image utilities, as a CLI and an MCP server"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct RunArgs {
    /// Tool id, e.g. case-converter
    id: String,
    /// String argument as KEY=VALUE (repeatable)
    #[arg(long = "arg", value_name = "KEY=VALUE")]
    args: Vec<String>,
    /// Arguments as a JSON object, merged before --arg values
    #[arg(long = "args", value_name = "JSON")]
    args_json: Option<String>,
    /// Read stdin into the named string argument
    #[arg(long, value_name = "KEY")]
    stdin: Option<String>,
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
    },
    /// List the tool catalog
    List {
        /// Only tools in this category
        #[arg(long)]
        category: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories with tool counts
    Categories {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show metadata and input schema for a tool
    Info {
        id: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a tool
    Run(RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init("warn") {
        eprintln!("failed to initialize logging: {err}");
    }

    let settings = Settings::from_env().context("invalid configuration")?;
    tracing::debug!(?settings, "loaded settings");

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&settings)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::List { category, json } => run_list(category.as_deref(), json),
        Commands::Categories { json } => run_categories(json),
        Commands::Info { id, json } => run_info(&id, json),
        Commands::Run(args) => run_tool(args, &settings),
    }
}

fn run_list(category: Option<&str>, json_output: bool) -> Result<()> {
    let filter = match category {
        Some(name) => Some(
            Category::parse(name).with_context(|| format!("unknown category: {name}"))?,
        ),
        None => None,
    };
    let tools: Vec<_> = catalog::all()
        .iter()
        .filter(|tool| filter.is_none_or(|category| tool.category == category))
        .collect();

    if json_output {
        let entries: Vec<Value> = tools
            .iter()
            .map(|tool| {
                let mut entry = serde_json::to_value(tool)?;
                if let Some(obj) = entry.as_object_mut() {
                    obj.insert("available".to_string(), json!(tool.available()));
                }
                Ok(entry)
            })
            .collect::<Result<Vec<Value>, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for tool in tools {
        let mut flags = Vec::new();
        if tool.is_popular {
            flags.push("popular");
        }
        if tool.is_new {
            flags.push("new");
        }
        if !tool.available() {
            flags.push("unavailable");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!(
            "{:<26} {:<11} {}{flags}",
            tool.id,
            tool.category.as_str(),
            tool.title
        );
    }
    Ok(())
}

fn run_categories(json_output: bool) -> Result<()> {
    let groups = catalog::tools_by_category();
    if json_output {
        let entries: Vec<Value> = groups
            .iter()
            .map(|(category, tools)| {
                json!({
                    "category": category.as_str(),
                    "tools": tools.iter().map(|tool| tool.id).collect::<Vec<_>>()
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for (category, tools) in groups {
        println!("{:<11} {}", category.as_str(), tools.len());
    }
    Ok(())
}

fn run_info(id: &str, json_output: bool) -> Result<()> {
    let meta = catalog::find(id).with_context(|| format!("unknown tool: {id}"))?;
    let schema = ToolKind::from_id(id).map(ToolKind::input_schema);

    if json_output {
        let mut value = serde_json::to_value(meta)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("available".to_string(), json!(schema.is_some()));
            obj.insert("inputSchema".to_string(), schema.unwrap_or(Value::Null));
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} ({})", meta.title, meta.id);
    println!("{}", meta.description);
    println!("category: {}", meta.category.as_str());
    match schema {
        Some(schema) => println!("input schema:\n{}", serde_json::to_string_pretty(&schema)?),
        None => println!("status: under development"),
    }
    Ok(())
}

fn run_tool(args: RunArgs, settings: &Settings) -> Result<()> {
    let mut map = match &args.args_json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--args must be valid JSON")? {
            Value::Object(map) => map,
            _ => anyhow::bail!("--args must be a JSON object"),
        },
        None => Map::new(),
    };
    for pair in &args.args {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("--arg must be KEY=VALUE, got {pair:?}"))?;
        map.insert(key.to_string(), json!(value));
    }
    if let Some(key) = &args.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        map.insert(key.clone(), json!(buffer));
    }

    let result = dispatch::dispatch(&args.id, &Value::Object(map), settings);
    print_tool_result(result, args.json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

fn run_stdio_server(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    tracing::info!(tools = ToolKind::ALL.len(), "mcp stdio server ready");

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unparseable request");
                continue;
            }
        };

        if let Some(response) = handle_request(&request, settings) {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

/// Build the response for one JSON-RPC message; notifications get none.
fn handle_request(request: &Value, settings: &Settings) -> Option<Value> {
    let method = request.get("method").and_then(|value| value.as_str());
    let Some(id) = request.get("id").cloned() else {
        tracing::debug!(method = ?method, "ignoring notification");
        return None;
    };

    let result = match method {
        Some("initialize") => json!({
            "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
        Some("ping") => json!({}),
        Some("tools/list") => json!({
            "tools": mcp::tool_definitions()
        }),
        Some("tools/call") => handle_tool_call(request, settings),
        other => {
            tracing::warn!(method = ?other, "method not found");
            return Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {
                    "code": mcp::errors::METHOD_NOT_FOUND,
                    "message": format!("method not found: {}", other.unwrap_or(""))
                }
            }));
        }
    };

    Some(json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    }))
}

fn handle_tool_call(request: &Value, settings: &Settings) -> Value {
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

    dispatch::dispatch(name, &args, settings)
}
